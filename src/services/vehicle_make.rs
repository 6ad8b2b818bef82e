//! Query service for vehicle makes.

use pushkind_common::repository::errors::RepositoryError;

use crate::domain::filtering::{FilteringParams, SortKey};
use crate::domain::types::MakeId;
use crate::domain::vehicle_make::{NewVehicleMake, UpdateVehicleMake};
use crate::dto::vehicle_make::{CreateVehicleMakeDto, UpdateVehicleMakeDto, VehicleMakeDto};
use crate::pagination::PagedResult;
use crate::pipeline;
use crate::repository::{VehicleMakeReader, VehicleMakeWriter};
use crate::services::{ServiceError, ServiceResult};

const ENTITY: &str = "VehicleMake";

fn parse_id(id: i32) -> Option<MakeId> {
    match MakeId::new(id) {
        Ok(make_id) => Some(make_id),
        Err(_) => {
            log::warn!(entity = ENTITY, id = id; "Invalid ID provided: {id}");
            None
        }
    }
}

/// Fetches a make by id. Non-positive or unknown ids yield `None`.
pub fn get_vehicle_make_by_id<R>(repo: &R, id: i32) -> ServiceResult<Option<VehicleMakeDto>>
where
    R: VehicleMakeReader + ?Sized,
{
    let Some(make_id) = parse_id(id) else {
        return Ok(None);
    };

    let make = repo.get_make_by_id(make_id).map_err(|err| {
        log::error!(entity = ENTITY, id = id; "An error occurred while getting {ENTITY} with ID: {id}: {err}");
        err
    })?;

    match make {
        Some(make) => {
            log::info!(entity = ENTITY, id = id; "Successfully retrieved {ENTITY} with ID: {id}");
            Ok(Some(make.into()))
        }
        None => {
            log::warn!(entity = ENTITY, id = id; "{ENTITY} with ID: {id} not found");
            Ok(None)
        }
    }
}

/// Returns one page of makes matching `params`.
pub fn list_vehicle_makes<R>(
    repo: &R,
    params: &FilteringParams,
) -> ServiceResult<PagedResult<VehicleMakeDto>>
where
    R: VehicleMakeReader + ?Sized,
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

    let makes = repo.list_makes().map_err(|err| {
        log::error!(entity = ENTITY; "An error occurred while getting {ENTITY}s: {err}");
        err
    })?;

    let result = pipeline::list_page(makes, params, VehicleMakeDto::from);

    log::info!(
        entity = ENTITY,
        total_count = result.total_count;
        "Successfully retrieved {} {ENTITY}s",
        result.total_count
    );

    Ok(result)
}

/// Every make ordered by name, for parent selectors.
pub fn list_all_vehicle_makes<R>(repo: &R) -> ServiceResult<Vec<VehicleMakeDto>>
where
    R: VehicleMakeReader + ?Sized,
{
    let makes = repo.list_makes().map_err(|err| {
        log::error!(entity = ENTITY; "An error occurred while getting {ENTITY}s: {err}");
        err
    })?;

    Ok(pipeline::sort_records(makes, Some(SortKey::Name), false)
        .map(VehicleMakeDto::from)
        .collect())
}

/// Persists a new make and returns it with its store-assigned id.
pub fn create_vehicle_make<R>(repo: &R, dto: CreateVehicleMakeDto) -> ServiceResult<VehicleMakeDto>
where
    R: VehicleMakeWriter + ?Sized,
{
    let name = dto.name.clone();
    log::info!(entity = ENTITY; "Creating new {ENTITY} with Name: {name}");

    let new_make = NewVehicleMake::try_from(dto).map_err(|err| {
        log::error!(entity = ENTITY; "An error occurred while creating {ENTITY} with Name: {name}: {err}");
        ServiceError::from(err)
    })?;

    let make = repo.create_make(&new_make).map_err(|err| {
        log::error!(entity = ENTITY; "An error occurred while creating {ENTITY} with Name: {name}: {err}");
        err
    })?;

    log::info!(entity = ENTITY, id = make.id.get(); "Successfully created {ENTITY} with ID: {}", make.id);
    Ok(make.into())
}

/// Applies the fields present in `dto` to the stored make. Returns `false`
/// when nothing was updated.
pub fn update_vehicle_make<R>(repo: &R, id: i32, dto: UpdateVehicleMakeDto) -> bool
where
    R: VehicleMakeWriter + ?Sized,
{
    let Some(make_id) = parse_id(id) else {
        return false;
    };

    log::info!(entity = ENTITY, id = id; "Updating {ENTITY} with ID: {id}");

    let updates = match UpdateVehicleMake::try_from(dto) {
        Ok(updates) => updates,
        Err(err) => {
            log::error!(entity = ENTITY, id = id; "An error occurred while updating {ENTITY} with ID: {id}: {err}");
            return false;
        }
    };

    match repo.update_make(make_id, &updates) {
        Ok(_) => {
            log::info!(entity = ENTITY, id = id; "Successfully updated {ENTITY} with ID: {id}");
            true
        }
        Err(RepositoryError::NotFound) => {
            log::warn!(entity = ENTITY, id = id; "{ENTITY} with ID: {id} not found");
            false
        }
        Err(err) => {
            log::error!(entity = ENTITY, id = id; "An error occurred while updating {ENTITY} with ID: {id}: {err}");
            false
        }
    }
}

/// Deletes a make together with all of its models.
pub fn delete_vehicle_make<R>(repo: &R, id: i32) -> bool
where
    R: VehicleMakeWriter + ?Sized,
{
    let Some(make_id) = parse_id(id) else {
        return false;
    };

    log::info!(entity = ENTITY, id = id; "Deleting {ENTITY} with ID: {id}");

    match repo.delete_make(make_id) {
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
