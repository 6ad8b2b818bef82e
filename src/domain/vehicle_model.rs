use serde::Serialize;

use crate::domain::types::{MakeId, ModelId, TypeConstraintError, VehicleAbbreviation, VehicleName};
use crate::pipeline::VehicleRecord;

/// Catalog entry owned by a [`crate::domain::vehicle_make::VehicleMake`].
///
/// Always loaded together with its parent, so `make_name` carries the joined
/// make's display name.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct VehicleModel {
    pub id: ModelId,
    pub make_id: MakeId,
    pub make_name: VehicleName,
    pub name: VehicleName,
    pub abbreviation: VehicleAbbreviation,
}

impl VehicleModel {
    pub fn try_new(
        id: i32,
        make_id: i32,
        make_name: impl Into<String>,
        name: impl Into<String>,
        abbreviation: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            id: ModelId::new(id)?,
            make_id: MakeId::new(make_id)?,
            make_name: VehicleName::new(make_name)?,
            name: VehicleName::new(name)?,
            abbreviation: VehicleAbbreviation::new(abbreviation)?,
        })
    }
}

impl VehicleRecord for VehicleModel {
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

/// Payload for inserting a model under an existing make.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewVehicleModel {
    pub make_id: MakeId,
    pub name: VehicleName,
    pub abbreviation: VehicleAbbreviation,
}

impl NewVehicleModel {
    pub fn try_new(
        make_id: i32,
        name: impl Into<String>,
        abbreviation: impl Into<String>,
    ) -> Result<Self, TypeConstraintError> {
        Ok(Self {
            make_id: MakeId::new(make_id)?,
            name: VehicleName::new(name)?,
            abbreviation: VehicleAbbreviation::new(abbreviation)?,
        })
    }
}

/// Fields to change on an existing model. `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateVehicleModel {
    /// Moves the model under another make, which must exist.
    pub make_id: Option<MakeId>,
    pub name: Option<VehicleName>,
    pub abbreviation: Option<VehicleAbbreviation>,
}

impl UpdateVehicleModel {
    /// `true` when no field would change.
    pub fn is_empty(&self) -> bool {
        self.make_id.is_none() && self.name.is_none() && self.abbreviation.is_none()
    }
}
