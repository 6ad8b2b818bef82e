use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::vehicle_make::{CreateVehicleMakeDto, UpdateVehicleMakeDto, VehicleMakeDto};
use crate::forms::FormError;

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
/// Form data for creating or editing a make.
pub struct VehicleMakeForm {
    /// Display name, e.g. "Volkswagen".
    #[validate(length(min = 1))]
    pub name: String,
    /// Short code, e.g. "VW".
    #[validate(length(min = 1))]
    pub abbreviation: String,
}

impl VehicleMakeForm {
    pub fn into_create_dto(self) -> Result<CreateVehicleMakeDto, FormError> {
        self.validate()?;
        Ok(CreateVehicleMakeDto {
            name: self.name,
            abbreviation: self.abbreviation,
        })
    }

    /// Every form field is submitted, so every field is overwritten.
    pub fn into_update_dto(self) -> Result<UpdateVehicleMakeDto, FormError> {
        self.validate()?;
        Ok(UpdateVehicleMakeDto {
            name: Some(self.name),
            abbreviation: Some(self.abbreviation),
        })
    }
}

impl From<VehicleMakeDto> for VehicleMakeForm {
    fn from(make: VehicleMakeDto) -> Self {
        Self {
            name: make.name,
            abbreviation: make.abbreviation,
        }
    }
}
