//! Repository implementation for vehicle models.

use diesel::{Connection, prelude::*};
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::types::ModelId;
use crate::domain::vehicle_model::{NewVehicleModel, UpdateVehicleModel, VehicleModel};
use crate::models::vehicle_model::{
    NewVehicleModel as DbNewVehicleModel, UpdateVehicleModel as DbUpdateVehicleModel,
    VehicleModel as DbVehicleModel,
};
use crate::repository::{DieselRepository, VehicleModelReader, VehicleModelWriter};

/// Loads the name of a make, failing with `NotFound` when it does not exist.
fn make_name_by_id(
    conn: &mut SqliteConnection,
    make_id: i32,
) -> Result<String, diesel::result::Error> {
    use crate::schema::vehicle_makes;

    vehicle_makes::table
        .find(make_id)
        .select(vehicle_makes::name)
        .first::<String>(conn)
}

impl VehicleModelReader for DieselRepository {
    fn get_model_by_id(&self, id: ModelId) -> RepositoryResult<Option<VehicleModel>> {
        use crate::schema::{vehicle_makes, vehicle_models};

        let mut conn = self.conn()?;
        let row = vehicle_models::table
            .inner_join(vehicle_makes::table)
            .filter(vehicle_models::id.eq(id.get()))
            .select((DbVehicleModel::as_select(), vehicle_makes::name))
            .first::<(DbVehicleModel, String)>(&mut conn)
            .optional()?;

        match row {
            Some(row) => Ok(Some(
                VehicleModel::try_from(row).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_models(&self) -> RepositoryResult<Vec<VehicleModel>> {
        use crate::schema::{vehicle_makes, vehicle_models};

        let mut conn = self.conn()?;
        vehicle_models::table
            .inner_join(vehicle_makes::table)
            .select((DbVehicleModel::as_select(), vehicle_makes::name))
            .order(vehicle_models::id.asc())
            .load::<(DbVehicleModel, String)>(&mut conn)?
            .into_iter()
            .map(|row| VehicleModel::try_from(row).map_err(RepositoryError::from))
            .collect()
    }
}

impl VehicleModelWriter for DieselRepository {
    fn create_model(&self, new_model: &NewVehicleModel) -> RepositoryResult<VehicleModel> {
        use crate::schema::vehicle_models;

        let mut conn = self.conn()?;
        let db_new_model: DbNewVehicleModel = new_model.into();

        let row = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            // Resolving the parent first reports a missing make as `NotFound`.
            let make_name = make_name_by_id(conn, db_new_model.make_id)?;
            let db_model = diesel::insert_into(vehicle_models::table)
                .values(&db_new_model)
                .get_result::<DbVehicleModel>(conn)?;
            Ok((db_model, make_name))
        })?;

        VehicleModel::try_from(row).map_err(RepositoryError::from)
    }

    fn update_model(
        &self,
        id: ModelId,
        updates: &UpdateVehicleModel,
    ) -> RepositoryResult<VehicleModel> {
        use crate::schema::vehicle_models;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateVehicleModel = updates.into();

        let row = conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let existing = vehicle_models::table
                .find(id.get())
                .first::<DbVehicleModel>(conn)?;

            if let Some(make_id) = db_updates.make_id
                && make_id != existing.make_id
            {
                make_name_by_id(conn, make_id)?;
            }

            let db_model = if updates.is_empty() {
                existing
            } else {
                diesel::update(vehicle_models::table.find(id.get()))
                    .set(&db_updates)
                    .get_result::<DbVehicleModel>(conn)?
            };

            let make_name = make_name_by_id(conn, db_model.make_id)?;
            Ok((db_model, make_name))
        })?;

        VehicleModel::try_from(row).map_err(RepositoryError::from)
    }

    fn delete_model(&self, id: ModelId) -> RepositoryResult<()> {
        use crate::schema::vehicle_models;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(vehicle_models::table.find(id.get())).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
