use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::regions::models::{Region, RegionValues};

/// Persistence operations for region rows.
///
/// Absence is reported as `Ok(None)`; `Err` is reserved for storage faults.
/// Every mutation touches exactly one row and is atomic with respect to it.
#[async_trait]
pub trait RegionRepository: Send + Sync {
    /// Every stored region. Order is adapter-defined.
    async fn list_all(&self) -> Result<Vec<Region>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Region>>;

    /// Assign a fresh id, persist the row and return it.
    async fn create(&self, values: RegionValues) -> Result<Region>;

    /// Overwrite code, name and image_url of an existing row.
    async fn update(&self, id: Uuid, values: RegionValues) -> Result<Option<Region>>;

    /// Remove a row, returning it as it was just before removal.
    async fn delete(&self, id: Uuid) -> Result<Option<Region>>;
}
