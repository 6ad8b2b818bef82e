use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::vehicle_model::{CreateVehicleModelDto, UpdateVehicleModelDto, VehicleModelDto};
use crate::forms::FormError;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
/// Form data for creating or editing a model.
pub struct VehicleModelForm {
    /// Identifier of the owning make.
    #[validate(range(min = 1))]
    pub make_id: i32,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub abbreviation: String,
}

impl VehicleModelForm {
    pub fn into_create_dto(self) -> Result<CreateVehicleModelDto, FormError> {
        self.validate()?;
        Ok(CreateVehicleModelDto {
            make_id: self.make_id,
            name: self.name,
            abbreviation: self.abbreviation,
        })
    }

    pub fn into_update_dto(self) -> Result<UpdateVehicleModelDto, FormError> {
        self.validate()?;
        Ok(UpdateVehicleModelDto {
            make_id: Some(self.make_id),
            name: Some(self.name),
            abbreviation: Some(self.abbreviation),
        })
    }
}

impl From<VehicleModelDto> for VehicleModelForm {
    fn from(model: VehicleModelDto) -> Self {
        Self {
            make_id: model.make_id,
            name: model.name,
            abbreviation: model.abbreviation,
        }
    }
}
