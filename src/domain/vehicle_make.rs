use serde::Serialize;

use crate::domain::types::{MakeId, TypeConstraintError, VehicleAbbreviation, VehicleName};
use crate::pipeline::VehicleRecord;

/// Top-level catalog entry, e.g. "Volkswagen".
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct VehicleMake {
    pub id: MakeId,
    pub name: VehicleName,
    pub abbreviation: VehicleAbbreviation,
}

impl VehicleMake {
    pub fn try_new(
        id: i32,
        name: impl Into<String>,
        abbreviation: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: MakeId::new(id)?,
            name: VehicleName::new(name)?,
            abbreviation: VehicleAbbreviation::new(abbreviation)?,
        })
    }
}

impl VehicleRecord for VehicleMake {
    fn id(&self) -> i32 {
        self.id.get()
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn abbreviation(&self) -> &str {
        self.abbreviation.as_str()
    }
}

/// Payload for inserting a make. The identifier is always assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewVehicleMake {
    pub name: VehicleName,
    pub abbreviation: VehicleAbbreviation,
}

impl NewVehicleMake {
    pub fn try_new(
        name: impl Into<String>,
        abbreviation: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            name: VehicleName::new(name)?,
            abbreviation: VehicleAbbreviation::new(abbreviation)?,
        })
    }
}

/// Fields to change on an existing make. `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateVehicleMake {
    pub name: Option<VehicleName>,
    pub abbreviation: Option<VehicleAbbreviation>,
}

impl UpdateVehicleMake {
    /// `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.abbreviation.is_none()
    }
}
