//! Transport shapes for vehicle makes.

use serde::{Deserialize, Serialize};

use crate::domain::types::{TypeConstraintError, VehicleAbbreviation, VehicleName};
use crate::domain::vehicle_make::{NewVehicleMake, UpdateVehicleMake, VehicleMake};

/// Make as returned to callers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleMakeDto {
    pub id: i32,
    pub name: String,
    pub abbreviation: String,
}

impl From<VehicleMake> for VehicleMakeDto {
    fn from(make: VehicleMake) -> Self {
        Self {
            id: make.id.get(),
            name: make.name.into_inner(),
            abbreviation: make.abbreviation.into_inner(),
        }
    }
}

/// Input for creating a make. Carries no id, the store assigns it.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVehicleMakeDto {
    pub name: String,
    pub abbreviation: String,
}

impl TryFrom<CreateVehicleMakeDto> for NewVehicleMake {
    type Error = TypeConstraintError;

    fn try_from(dto: CreateVehicleMakeDto) -> Result<Self, Self::Error> {
        NewVehicleMake::try_new(dto.name, dto.abbreviation)
    }
}

/// Input for updating a make. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVehicleMakeDto {
    pub name: Option<String>,
    pub abbreviation: Option<String>,
}

impl TryFrom<UpdateVehicleMakeDto> for UpdateVehicleMake {
    type Error = TypeConstraintError;

    fn try_from(dto: UpdateVehicleMakeDto) -> Result<Self, Self::Error> {
        Ok(Self {
            name: dto.name.map(VehicleName::new).transpose()?,
            abbreviation: dto.abbreviation.map(VehicleAbbreviation::new).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toyota() -> VehicleMake {
        VehicleMake::try_new(1, "Toyota", "TOYOTA").unwrap()
    }

    #[test]
    fn update_keeps_missing_fields_unset() {
        let dto = UpdateVehicleMakeDto {
            name: Some(" Updated Toyota ".to_string()),
            abbreviation: None,
        };

        let updates = UpdateVehicleMake::try_from(dto).unwrap();

        assert_eq!(updates.name.as_deref(), Some("Updated Toyota"));
        assert_eq!(updates.abbreviation, None);
        assert!(!updates.is_empty());
    }

    #[test]
    fn empty_update_changes_nothing() {
        let updates = UpdateVehicleMake::try_from(UpdateVehicleMakeDto::default()).unwrap();
        assert!(updates.is_empty());
    }

    #[test]
    fn update_rejects_blank_values() {
        let dto = UpdateVehicleMakeDto {
            name: None,
            abbreviation: Some(" ".to_string()),
        };

        assert_eq!(
            UpdateVehicleMake::try_from(dto),
            Err(TypeConstraintError::EmptyString)
        );
    }

    #[test]
    fn domain_make_into_dto() {
        let dto = VehicleMakeDto::from(toyota());
        assert_eq!(
            dto,
            VehicleMakeDto {
                id: 1,
                name: "Toyota".to_string(),
                abbreviation: "TOYOTA".to_string(),
            }
        );
    }
}
