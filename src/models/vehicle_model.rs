use diesel::prelude::*;

use crate::domain::types::{MakeId, TypeConstraintError, VehicleAbbreviation, VehicleName};
use crate::domain::vehicle_model::{
    NewVehicleModel as DomainNewVehicleModel, UpdateVehicleModel as DomainUpdateVehicleModel,
    VehicleModel as DomainVehicleModel,
};
use crate::models::vehicle_make::VehicleMake;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::vehicle_models)]
#[diesel(belongs_to(VehicleMake, foreign_key = make_id))]
/// Diesel model for [`crate::domain::vehicle_model::VehicleModel`].
pub struct VehicleModel {
    pub id: i32,
    pub make_id: i32,
    pub name: String,
    pub abbreviation: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::vehicle_models)]
/// Insertable form of [`VehicleModel`].
pub struct NewVehicleModel<'a> {
    pub make_id: i32,
    pub name: &'a str,
    pub abbreviation: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::vehicle_models)]
/// Data used when updating a [`VehicleModel`] record.
pub struct UpdateVehicleModel<'a> {
    pub make_id: Option<i32>,
    pub name: Option<&'a str>,
    pub abbreviation: Option<&'a str>,
}

/// A model row joined with the name of its make.
impl TryFrom<(VehicleModel, String)> for DomainVehicleModel {
    type Error = TypeConstraintError;

    fn try_from((model, make_name): (VehicleModel, String)) -> Result<Self, Self::Error> {
        DomainVehicleModel::try_new(
            model.id,
            model.make_id,
            make_name,
            model.name,
            model.abbreviation,
        )
    }
}

impl<'a> From<&'a DomainNewVehicleModel> for NewVehicleModel<'a> {
    fn from(model: &'a DomainNewVehicleModel) -> Self {
        Self {
            make_id: model.make_id.map(MakeId::get),
            name: model.name.as_ref().map(VehicleName::as_str),
            abbreviation: model.abbreviation.as_ref().map(VehicleAbbreviation::as_str),
        }
    }
}

impl<'a> From<&'a DomainUpdateVehicleModel> for UpdateVehicleModel<'a> {
    fn from(model: &'a DomainUpdateVehicleModel) -> Self {
        Self {
            make_id: model.make_id.map(MakeId::get),
            name: model.name.as_ref().map(VehicleName::as_str),
            abbreviation: model.abbreviation.as_ref().map(VehicleAbbreviation::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_row_into_domain_carries_make_name() {
        let db_model = VehicleModel {
            id: 4,
            make_id: 2,
            name: "Fiesta".to_string(),
            abbreviation: "Fiesta".to_string(),
        };

        let domain =
            DomainVehicleModel::try_from((db_model, "Ford".to_string())).expect("valid model");

        assert_eq!(domain.id.get(), 4);
        assert_eq!(domain.make_id.get(), 2);
        assert_eq!(domain.make_name.as_str(), "Ford");
        assert_eq!(domain.name.as_str(), "Fiesta");
    }

    #[test]
    fn from_domain_new_creates_insertable() {
        let domain = DomainNewVehicleModel::try_new(1, "X5", "X5").unwrap();

        let new: NewVehicleModel = (&domain).into();

        assert_eq!(new.make_id, 1);
        assert_eq!(new.name, "X5");
        assert_eq!(new.abbreviation, "X5");
    }
}
