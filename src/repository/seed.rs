//! Starter catalog inserted into an empty database.

use diesel::{Connection, prelude::*};
use pushkind_common::repository::errors::{RepositoryError, RepositoryResult};

use crate::models::vehicle_make::{NewVehicleMake, VehicleMake};
use crate::models::vehicle_model::NewVehicleModel;
use crate::repository::DieselRepository;

type SeedMake = (&'static str, &'static str, &'static [(&'static str, &'static str)]);

const SEED_CATALOG: &[SeedMake] = &[
    ("BMW", "BMW", &[("128", "128"), ("325", "325"), ("X5", "X5")]),
    ("Ford", "FORD", &[("Fiesta", "Fiesta"), ("Focus", "Focus")]),
    ("Volkswagen", "VW", &[]),
];

impl DieselRepository {
    /// Inserts the starter makes and models when no make exists yet.
    ///
    /// Returns `true` when the catalog was seeded.
    pub fn seed_catalog(&self) -> RepositoryResult<bool> {
        use crate::schema::{vehicle_makes, vehicle_models};

        let mut conn = self.conn()?;

        conn.transaction::<bool, diesel::result::Error, _>(|conn| {
            let existing: i64 = vehicle_makes::table.count().get_result(conn)?;
            if existing > 0 {
                return Ok(false);
            }

            for &(name, abbreviation, models) in SEED_CATALOG {
                let make = diesel::insert_into(vehicle_makes::table)
                    .values(&NewVehicleMake { name, abbreviation })
                    .get_result::<VehicleMake>(conn)?;

                let new_models = models
                    .iter()
                    .map(|&(name, abbreviation)| NewVehicleModel {
                        make_id: make.id,
                        name,
                        abbreviation,
                    })
                    .collect::<Vec<_>>();

                if !new_models.is_empty() {
                    diesel::insert_into(vehicle_models::table)
                        .values(&new_models)
                        .execute(conn)?;
                }
            }

            Ok(true)
        })
        .map_err(RepositoryError::from)
    }
}
