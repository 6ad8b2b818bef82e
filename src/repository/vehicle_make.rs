//! Repository implementation for vehicle makes.

use diesel::{Connection, prelude::*};
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::domain::types::MakeId;
use crate::domain::vehicle_make::{NewVehicleMake, UpdateVehicleMake, VehicleMake};
use crate::models::vehicle_make::{
    NewVehicleMake as DbNewVehicleMake, UpdateVehicleMake as DbUpdateVehicleMake,
    VehicleMake as DbVehicleMake,
};
use crate::repository::{DieselRepository, VehicleMakeReader, VehicleMakeWriter};

impl VehicleMakeReader for DieselRepository {
    fn get_make_by_id(&self, id: MakeId) -> RepositoryResult<Option<VehicleMake>> {
        use crate::schema::vehicle_makes;

        let mut conn = self.conn()?;
        let db_make = vehicle_makes::table
            .find(id.get())
            .first::<DbVehicleMake>(&mut conn)
            .optional()?;

        match db_make {
            Some(db_make) => Ok(Some(
                VehicleMake::try_from(db_make).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_makes(&self) -> RepositoryResult<Vec<VehicleMake>> {
        use crate::schema::vehicle_makes;

        let mut conn = self.conn()?;
        vehicle_makes::table
            .order(vehicle_makes::id.asc())
            .load::<DbVehicleMake>(&mut conn)?
            .into_iter()
            .map(|db_make| VehicleMake::try_from(db_make).map_err(RepositoryError::from))
            .collect()
    }
}

impl VehicleMakeWriter for DieselRepository {
    fn create_make(&self, new_make: &NewVehicleMake) -> RepositoryResult<VehicleMake> {
        use crate::schema::vehicle_makes;

        let mut conn = self.conn()?;
        let db_new_make: DbNewVehicleMake = new_make.into();

        let db_make = diesel::insert_into(vehicle_makes::table)
            .values(&db_new_make)
            .get_result::<DbVehicleMake>(&mut conn)?;

        VehicleMake::try_from(db_make).map_err(RepositoryError::from)
    }

    fn update_make(&self, id: MakeId, updates: &UpdateVehicleMake) -> RepositoryResult<VehicleMake> {
        use crate::schema::vehicle_makes;

        let mut conn = self.conn()?;

        // An empty changeset is not valid SQL, so the stored row is returned as is.
        let db_make = if updates.is_empty() {
            vehicle_makes::table
                .find(id.get())
                .first::<DbVehicleMake>(&mut conn)?
        } else {
            let db_updates: DbUpdateVehicleMake = updates.into();
            diesel::update(vehicle_makes::table.find(id.get()))
                .set(&db_updates)
                .get_result::<DbVehicleMake>(&mut conn)?
        };

        VehicleMake::try_from(db_make).map_err(RepositoryError::from)
    }

    fn delete_make(&self, id: MakeId) -> RepositoryResult<()> {
        use crate::schema::{vehicle_makes, vehicle_models};

        let mut conn = self.conn()?;

        // Dependent models go first, even when SQLite would cascade on its own.
        conn.transaction::<(), diesel::result::Error, _>(|conn| {
            diesel::delete(vehicle_models::table.filter(vehicle_models::make_id.eq(id.get())))
                .execute(conn)?;

            let deleted = diesel::delete(vehicle_makes::table.find(id.get())).execute(conn)?;
            if deleted == 0 {
                return Err(diesel::result::Error::NotFound);
            }
            Ok(())
        })
        .map_err(RepositoryError::from)
    }
}
