//! Transport shapes for vehicle models.

use serde::{Deserialize, Serialize};

use crate::domain::types::{MakeId, TypeConstraintError, VehicleAbbreviation, VehicleName};
use crate::domain::vehicle_model::{NewVehicleModel, UpdateVehicleModel, VehicleModel};

/// Model as returned to callers, with its make's name embedded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleModelDto {
    pub id: i32,
    pub make_id: i32,
    pub make_name: String,
    pub name: String,
    pub abbreviation: String,
}

impl From<VehicleModel> for VehicleModelDto {
    fn from(model: VehicleModel) -> Self {
        Self {
            id: model.id.get(),
            make_id: model.make_id.get(),
            make_name: model.make_name.into_inner(),
            name: model.name.into_inner(),
            abbreviation: model.abbreviation.into_inner(),
        }
    }
}

/// Input for creating a model. Carries no id, the store assigns it.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateVehicleModelDto {
    pub make_id: i32,
    pub name: String,
    pub abbreviation: String,
}

impl TryFrom<CreateVehicleModelDto> for NewVehicleModel {
    type Error = TypeConstraintError;

    fn try_from(dto: CreateVehicleModelDto) -> Result<Self, Self::Error> {
        NewVehicleModel::try_new(dto.make_id, dto.name, dto.abbreviation)
    }
}

/// Input for updating a model. Absent fields keep their stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVehicleModelDto {
    pub make_id: Option<i32>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
}

impl TryFrom<UpdateVehicleModelDto> for UpdateVehicleModel {
    type Error = TypeConstraintError;

    fn try_from(dto: UpdateVehicleModelDto) -> Result<Self, Self::Error> {
        Ok(Self {
            make_id: dto.make_id.map(MakeId::new).transpose()?,
            name: dto.name.map(VehicleName::new).transpose()?,
            abbreviation: dto.abbreviation.map(VehicleAbbreviation::new).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camry() -> VehicleModel {
        VehicleModel::try_new(1, 1, "Toyota", "Camry", "CAMRY").unwrap()
    }

    #[test]
    fn dto_embeds_make_name() {
        let dto = VehicleModelDto::from(camry());
        assert_eq!(dto.make_name, "Toyota");
        assert_eq!(dto.make_id, 1);
        assert_eq!(dto.name, "Camry");
    }

    #[test]
    fn update_can_move_model_to_another_make() {
        let dto = UpdateVehicleModelDto {
            make_id: Some(2),
            ..Default::default()
        };

        let updates = UpdateVehicleModel::try_from(dto).unwrap();

        assert_eq!(updates.make_id.map(MakeId::get), Some(2));
        assert_eq!(updates.name, None);
        assert_eq!(updates.abbreviation, None);
    }

    #[test]
    fn update_rejects_invalid_make_id() {
        let dto = UpdateVehicleModelDto {
            make_id: Some(0),
            ..Default::default()
        };

        assert_eq!(
            UpdateVehicleModel::try_from(dto),
            Err(TypeConstraintError::NonPositiveId)
        );
    }
}
