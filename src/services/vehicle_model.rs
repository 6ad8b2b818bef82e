//! Query service for vehicle models.
//!
//! Models are always returned with their make's name. Creating or re-parenting
//! a model requires the target make to exist.

use pushkind_common::repository::errors::RepositoryError;

use crate::domain::filtering::FilteringParams;
use crate::domain::types::ModelId;
use crate::domain::vehicle_model::{NewVehicleModel, UpdateVehicleModel};
use crate::dto::vehicle_model::{CreateVehicleModelDto, UpdateVehicleModelDto, VehicleModelDto};
use crate::pagination::PagedResult;
use crate::pipeline;
use crate::repository::{VehicleModelReader, VehicleModelWriter};
use crate::services::{ServiceError, ServiceResult};

const ENTITY: &str = "VehicleModel";

fn parse_id(id: i32) -> Option<ModelId> {
    match ModelId::new(id) {
        Ok(model_id) => Some(model_id),
        Err(_) => {
            log::warn!(entity = ENTITY, id = id; "Invalid ID provided: {id}");
            None
        }
    }
}

pub fn get_vehicle_model_by_id<R>(repo: &R, id: i32) -> ServiceResult<Option<VehicleModelDto>>
where
    R: VehicleModelReader + ?Sized,
{
    let Some(model_id) = parse_id(id) else {
        return Ok(None);
    };

    let model = repo.get_model_by_id(model_id).map_err(|err| {
        log::error!(entity = ENTITY, id = id; "An error occurred while getting {ENTITY} with ID: {id}: {err}");
        err
    })?;

    match model {
        Some(model) => {
            log::info!(entity = ENTITY, id = id; "Successfully retrieved {ENTITY} with ID: {id}");
            Ok(Some(model.into()))
        }
        None => {
            log::warn!(entity = ENTITY, id = id; "{ENTITY} with ID: {id} not found");
            Ok(None)
        }
    }
}

pub fn list_vehicle_models<R>(
    repo: &R,
    params: &FilteringParams,
) -> ServiceResult<PagedResult<VehicleModelDto>>
where
    R: VehicleModelReader + ?Sized,
{
    log::info!(
        entity = ENTITY,
        descending = params.descending,
        page_number = params.page_number,
        page_size = params.page_size;
        "Getting {ENTITY}s with SearchQuery: {:?}, SortBy: {:?}, Descending: {}, PageNumber: {}, PageSize: {}",
        params.search_query,
        params.sort_by,
        params.descending,
        params.page_number,
        params.page_size,
    );

    let models = repo.list_models().map_err(|err| {
        log::error!(entity = ENTITY; "An error occurred while getting {ENTITY}s: {err}");
        err
    })?;

    let result = pipeline::list_page(models, params, VehicleModelDto::from);

    log::info!(
        entity = ENTITY,
        total_count = result.total_count;
        "Successfully retrieved {} {ENTITY}s",
        result.total_count
    );

    Ok(result)
}

/// Persists a new model under an existing make.
///
/// Returns [`ServiceError::NotFound`] when the referenced make is missing.
pub fn create_vehicle_model<R>(
    repo: &R,
    dto: CreateVehicleModelDto,
) -> ServiceResult<VehicleModelDto>
where
    R: VehicleModelWriter + ?Sized,
{
    let name = dto.name.clone();
    log::info!(entity = ENTITY, make_id = dto.make_id; "Creating new {ENTITY} with Name: {name}");

    let new_model = NewVehicleModel::try_from(dto).map_err(|err| {
        log::error!(entity = ENTITY; "An error occurred while creating {ENTITY} with Name: {name}: {err}");
        ServiceError::from(err)
    })?;

    let model = match repo.create_model(&new_model) {
        Ok(model) => model,
        Err(RepositoryError::NotFound) => {
            log::warn!(
                entity = ENTITY,
                make_id = new_model.make_id.get();
                "Cannot create {ENTITY} with Name: {name}, VehicleMake with ID: {} not found",
                new_model.make_id
            );
            return Err(ServiceError::NotFound);
        }
        Err(err) => {
            log::error!(entity = ENTITY; "An error occurred while creating {ENTITY} with Name: {name}: {err}");
            return Err(err.into());
        }
    };

    log::info!(entity = ENTITY, id = model.id.get(); "Successfully created {ENTITY} with ID: {}", model.id);
    Ok(model.into())
}

/// Applies the fields present in `dto` to the stored model. Returns `false`
/// when nothing was updated, including when the model or its new make is
/// missing.
pub fn update_vehicle_model<R>(repo: &R, id: i32, dto: UpdateVehicleModelDto) -> bool
where
    R: VehicleModelWriter + ?Sized,
{
    let Some(model_id) = parse_id(id) else {
        return false;
    };

    log::info!(entity = ENTITY, id = id; "Updating {ENTITY} with ID: {id}");

    let updates = match UpdateVehicleModel::try_from(dto) {
        Ok(updates) => updates,
        Err(err) => {
            log::error!(entity = ENTITY, id = id; "An error occurred while updating {ENTITY} with ID: {id}: {err}");
            return false;
        }
    };

    match repo.update_model(model_id, &updates) {
        Ok(_) => {
            log::info!(entity = ENTITY, id = id; "Successfully updated {ENTITY} with ID: {id}");
            true
        }
        Err(RepositoryError::NotFound) => {
            log::warn!(entity = ENTITY, id = id; "{ENTITY} with ID: {id} or its VehicleMake not found");
            false
        }
        Err(err) => {
            log::error!(entity = ENTITY, id = id; "An error occurred while updating {ENTITY} with ID: {id}: {err}");
            false
        }
    }
}

pub fn delete_vehicle_model<R>(repo: &R, id: i32) -> bool
where
    R: VehicleModelWriter + ?Sized,
{
    let Some(model_id) = parse_id(id) else {
        return false;
    };

    log::info!(entity = ENTITY, id = id; "Deleting {ENTITY} with ID: {id}");

    match repo.delete_model(model_id) {
        Ok(()) => {
            log::info!(entity = ENTITY, id = id; "Successfully deleted {ENTITY} with ID: {id}");
            true
        }
        Err(RepositoryError::NotFound) => {
            log::warn!(entity = ENTITY, id = id; "{ENTITY} with ID: {id} not found");
            false
        }
        Err(err) => {
            log::error!(entity = ENTITY, id = id; "An error occurred while deleting {ENTITY} with ID: {id}: {err}");
            false
        }
    }
}
