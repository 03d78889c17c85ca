use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    http::{header, StatusCode},
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::{AppJson, AppPath};
use crate::features::regions::dtos::{CreateRegionDto, RegionResponseDto, UpdateRegionDto};
use crate::features::regions::services::RegionService;
use crate::shared::types::ErrorResponse;

/// List all regions
#[utoipa::path(
    get,
    path = "/api/regions",
    responses(
        (status = 200, description = "List of regions", body = Vec<RegionResponseDto>),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn list_regions(
    State(service): State<Arc<RegionService>>,
) -> Result<Json<Vec<RegionResponseDto>>> {
    let regions = service.list().await?;
    Ok(Json(regions))
}

/// Get region by ID
#[utoipa::path(
    get,
    path = "/api/regions/{id}",
    params(
        ("id" = Uuid, Path, description = "Region ID")
    ),
    responses(
        (status = 200, description = "Region found", body = RegionResponseDto),
        (status = 404, description = "Region not found or malformed region ID", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn get_region(
    State(service): State<Arc<RegionService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<RegionResponseDto>> {
    let region = service.get(id).await?;
    Ok(Json(region))
}

/// Create a new region
///
/// The `Location` header points at the new region.
#[utoipa::path(
    post,
    path = "/api/regions",
    request_body = CreateRegionDto,
    responses(
        (status = 201, description = "Region created", body = RegionResponseDto,
            headers(("location" = String, description = "URL of the created region"))),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn create_region(
    State(service): State<Arc<RegionService>>,
    OriginalUri(uri): OriginalUri,
    AppJson(dto): AppJson<CreateRegionDto>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<RegionResponseDto>)> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let region = service.create(dto).await?;
    let location = format!("{}/{}", uri.path().trim_end_matches('/'), region.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(region),
    ))
}

/// Update a region
#[utoipa::path(
    put,
    path = "/api/regions/{id}",
    params(
        ("id" = Uuid, Path, description = "Region ID")
    ),
    request_body = UpdateRegionDto,
    responses(
        (status = 200, description = "Region updated", body = RegionResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Region not found or malformed region ID", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn update_region(
    State(service): State<Arc<RegionService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateRegionDto>,
) -> Result<Json<RegionResponseDto>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let region = service.update(id, dto).await?;
    Ok(Json(region))
}

/// Delete a region
///
/// Responds with the region as it was before deletion.
#[utoipa::path(
    delete,
    path = "/api/regions/{id}",
    params(
        ("id" = Uuid, Path, description = "Region ID")
    ),
    responses(
        (status = 200, description = "Region deleted", body = RegionResponseDto),
        (status = 404, description = "Region not found or malformed region ID", body = ErrorResponse)
    ),
    tag = "regions"
)]
pub async fn delete_region(
    State(service): State<Arc<RegionService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<RegionResponseDto>> {
    let region = service.delete(id).await?;
    Ok(Json(region))
}
