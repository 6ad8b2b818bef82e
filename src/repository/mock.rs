//! Mock repository implementations for isolating services in tests.

use mockall::mock;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::types::{MakeId, ModelId};
use crate::domain::vehicle_make::{NewVehicleMake, UpdateVehicleMake, VehicleMake};
use crate::domain::vehicle_model::{NewVehicleModel, UpdateVehicleModel, VehicleModel};
use crate::repository::{
    VehicleMakeReader, VehicleMakeWriter, VehicleModelReader, VehicleModelWriter,
};

mock! {
    pub Repository {}

    impl VehicleMakeReader for Repository {
        fn get_make_by_id(&self, id: MakeId) -> RepositoryResult<Option<VehicleMake>>;
        fn list_makes(&self) -> RepositoryResult<Vec<VehicleMake>>;
    }

    impl VehicleMakeWriter for Repository {
        fn create_make(&self, new_make: &NewVehicleMake) -> RepositoryResult<VehicleMake>;
        fn update_make(
            &self,
            id: MakeId,
            updates: &UpdateVehicleMake,
        ) -> RepositoryResult<VehicleMake>;
        fn delete_make(&self, id: MakeId) -> RepositoryResult<()>;
    }

    impl VehicleModelReader for Repository {
        fn get_model_by_id(&self, id: ModelId) -> RepositoryResult<Option<VehicleModel>>;
        fn list_models(&self) -> RepositoryResult<Vec<VehicleModel>>;
    }

    impl VehicleModelWriter for Repository {
        fn create_model(&self, new_model: &NewVehicleModel) -> RepositoryResult<VehicleModel>;
        fn update_model(
            &self,
            id: ModelId,
            updates: &UpdateVehicleModel,
        ) -> RepositoryResult<VehicleModel>;
        fn delete_model(&self, id: ModelId) -> RepositoryResult<()>;
    }
}
