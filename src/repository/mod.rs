//! Record source for the catalog.
//!
//! Readers return whole tables in id order; filtering, sorting and paging of
//! listings happen in [`crate::pipeline`]. Model reads always join the parent
//! make so the make's name travels with every model.

use diesel::r2d2::{ConnectionManager, PooledConnection};
use diesel::sqlite::SqliteConnection;
use pushkind_common::db::DbPool;
use pushkind_common::repository::errors::RepositoryResult;

use crate::domain::types::{MakeId, ModelId};
use crate::domain::vehicle_make::{NewVehicleMake, UpdateVehicleMake, VehicleMake};
use crate::domain::vehicle_model::{NewVehicleModel, UpdateVehicleModel, VehicleModel};

type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod seed;
pub mod vehicle_make;
pub mod vehicle_model;

/// Diesel-backed repository shared by every handler. Cheap to clone.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

pub trait VehicleMakeReader {
    fn get_make_by_id(&self, id: MakeId) -> RepositoryResult<Option<VehicleMake>>;
    fn list_makes(&self) -> RepositoryResult<Vec<VehicleMake>>;
}

pub trait VehicleMakeWriter {
    fn create_make(&self, new_make: &NewVehicleMake) -> RepositoryResult<VehicleMake>;
    fn update_make(&self, id: MakeId, updates: &UpdateVehicleMake) -> RepositoryResult<VehicleMake>;
    /// Removes the make and every model that references it.
    fn delete_make(&self, id: MakeId) -> RepositoryResult<()>;
}

pub trait VehicleModelReader {
    fn get_model_by_id(&self, id: ModelId) -> RepositoryResult<Option<VehicleModel>>;
    fn list_models(&self) -> RepositoryResult<Vec<VehicleModel>>;
}

pub trait VehicleModelWriter {
    fn create_model(&self, new_model: &NewVehicleModel) -> RepositoryResult<VehicleModel>;
    fn update_model(
        &self,
        id: ModelId,
        updates: &UpdateVehicleModel,
    ) -> RepositoryResult<VehicleModel>;
    fn delete_model(&self, id: ModelId) -> RepositoryResult<()>;
}
