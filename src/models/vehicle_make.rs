use diesel::prelude::*;

use crate::domain::types::{TypeConstraintError, VehicleAbbreviation, VehicleName};
use crate::domain::vehicle_make::{
    NewVehicleMake as DomainNewVehicleMake, UpdateVehicleMake as DomainUpdateVehicleMake,
    VehicleMake as DomainVehicleMake,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::vehicle_makes)]
/// Diesel model for [`crate::domain::vehicle_make::VehicleMake`].
pub struct VehicleMake {
    pub id: i32,
    pub name: String,
    pub abbreviation: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::vehicle_makes)]
/// Insertable form of [`VehicleMake`]. Carries no id, SQLite assigns it.
pub struct NewVehicleMake<'a> {
    pub name: &'a str,
    pub abbreviation: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::vehicle_makes)]
/// Data used when updating a [`VehicleMake`] record. `None` columns are left as stored.
pub struct UpdateVehicleMake<'a> {
    pub name: Option<&'a str>,
    pub abbreviation: Option<&'a str>,
}

impl TryFrom<VehicleMake> for DomainVehicleMake {
    type Error = TypeConstraintError;

    fn try_from(make: VehicleMake) -> Result<Self, Self::Error> {
        DomainVehicleMake::try_new(make.id, make.name, make.abbreviation)
    }
}

impl<'a> From<&'a DomainNewVehicleMake> for NewVehicleMake<'a> {
    fn from(make: &'a DomainNewVehicleMake) -> Self {
        Self {
            name: make.name.as_str(),
            abbreviation: make.abbreviation.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateVehicleMake> for UpdateVehicleMake<'a> {
    fn from(make: &'a DomainUpdateVehicleMake) -> Self {
        Self {
            name: make.name.as_ref().map(VehicleName::as_str),
            abbreviation: make.abbreviation.as_ref().map(VehicleAbbreviation::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_make_into_domain() {
        let db_make = VehicleMake {
            id: 3,
            name: "Volkswagen".to_string(),
            abbreviation: "VW".to_string(),
        };

        let domain = DomainVehicleMake::try_from(db_make).expect("valid make");

        assert_eq!(domain.id.get(), 3);
        assert_eq!(domain.name.as_str(), "Volkswagen");
        assert_eq!(domain.abbreviation.as_str(), "VW");
    }

    #[test]
    fn db_make_with_zero_id_is_rejected() {
        let db_make = VehicleMake {
            id: 0,
            name: "Ghost".to_string(),
            abbreviation: "GH".to_string(),
        };

        assert_eq!(
            DomainVehicleMake::try_from(db_make),
            Err(TypeConstraintError::NonPositiveId)
        );
    }

    #[test]
    fn from_domain_update_creates_changeset() {
        let domain = DomainUpdateVehicleMake {
            name: Some(VehicleName::new("Ford").unwrap()),
            abbreviation: None,
        };

        let update: UpdateVehicleMake = (&domain).into();

        assert_eq!(update.name, Some("Ford"));
        assert_eq!(update.abbreviation, None);
    }
}
