use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::regions::dtos::{CreateRegionDto, RegionResponseDto, UpdateRegionDto};
use crate::features::regions::repositories::RegionRepository;

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Region with id {} not found", id))
}

/// Service for region CRUD operations
pub struct RegionService {
    repository: Arc<dyn RegionRepository>,
}

impl RegionService {
    pub fn new(repository: Arc<dyn RegionRepository>) -> Self {
        Self { repository }
    }

    /// List all regions
    pub async fn list(&self) -> Result<Vec<RegionResponseDto>> {
        let regions = self.repository.list_all().await?;
        Ok(regions.into_iter().map(RegionResponseDto::from).collect())
    }

    /// Get a region by id
    pub async fn get(&self, id: Uuid) -> Result<RegionResponseDto> {
        self.repository
            .get_by_id(id)
            .await?
            .map(RegionResponseDto::from)
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, dto: CreateRegionDto) -> Result<RegionResponseDto> {
        let region = self.repository.create(dto.into()).await?;
        tracing::info!(region_id = %region.id, code = %region.code, "Region created");
        Ok(region.into())
    }

    /// Replace code, name and image url of an existing region
    pub async fn update(&self, id: Uuid, dto: UpdateRegionDto) -> Result<RegionResponseDto> {
        let region = self
            .repository
            .update(id, dto.into())
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(region_id = %region.id, "Region updated");
        Ok(region.into())
    }

    /// Delete a region, returning the record as it was before removal
    pub async fn delete(&self, id: Uuid) -> Result<RegionResponseDto> {
        let region = self
            .repository
            .delete(id)
            .await?
            .ok_or_else(|| not_found(id))?;
        tracing::info!(region_id = %region.id, "Region deleted");
        Ok(region.into())
    }
}
