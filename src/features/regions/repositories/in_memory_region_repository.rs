use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::regions::models::{Region, RegionValues};
use crate::features::regions::repositories::RegionRepository;

/// Process-local region store. Rows are kept in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryRegionRepository {
    regions: RwLock<Vec<Region>>,
}

impl InMemoryRegionRepository {
    /// Start from a fixed set of rows
    pub fn with_regions(regions: Vec<Region>) -> Self {
        Self {
            regions: RwLock::new(regions),
        }
    }
}

#[async_trait]
impl RegionRepository for InMemoryRegionRepository {
    async fn list_all(&self) -> Result<Vec<Region>> {
        Ok(self.regions.read().await.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Region>> {
        let regions = self.regions.read().await;
        Ok(regions.iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, values: RegionValues) -> Result<Region> {
        let region = Region::new(Uuid::new_v4(), values);
        self.regions.write().await.push(region.clone());
        Ok(region)
    }

    async fn update(&self, id: Uuid, values: RegionValues) -> Result<Option<Region>> {
        let mut regions = self.regions.write().await;
        Ok(regions.iter_mut().find(|r| r.id == id).map(|existing| {
            existing.apply(values);
            existing.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>> {
        let mut regions = self.regions.write().await;
        Ok(regions
            .iter()
            .position(|r| r.id == id)
            .map(|index| regions.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::address::en::CityName;
    use fake::Fake;
    use std::collections::HashSet;
    use std::sync::Arc;

    fn values(code: &str, name: &str, image_url: Option<&str>) -> RegionValues {
        RegionValues {
            code: code.to_string(),
            name: name.to_string(),
            image_url: image_url.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_same_record() {
        let repo = InMemoryRegionRepository::default();

        let created = repo
            .create(values("AKL", "Auckland", Some("https://example.com/akl.jpg")))
            .await
            .unwrap();

        assert_eq!(created.code, "AKL");
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), Some(created));
    }

    #[tokio::test]
    async fn test_create_assigns_distinct_ids() {
        let repo = InMemoryRegionRepository::default();
        let a = repo.create(values("AKL", "Auckland", None)).await.unwrap();
        let b = repo.create(values("AKL", "Auckland", None)).await.unwrap();

        // Duplicate codes are allowed
        assert_ne!(a.id, b.id);
        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_id_reports_absence_without_side_effects() {
        let repo = InMemoryRegionRepository::default();
        repo.create(values("NTL", "Northland", None)).await.unwrap();
        let before = repo.list_all().await.unwrap();

        let missing = Uuid::new_v4();
        assert_eq!(repo.get_by_id(missing).await.unwrap(), None);
        assert_eq!(
            repo.update(missing, values("X", "Y", None)).await.unwrap(),
            None
        );
        assert_eq!(repo.delete(missing).await.unwrap(), None);

        assert_eq!(repo.list_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_overwrites_values_and_keeps_id() {
        let repo = InMemoryRegionRepository::default();
        let created = repo
            .create(values("AKL", "Auckland", Some("https://example.com/akl.jpg")))
            .await
            .unwrap();

        let updated = repo
            .update(created.id, values("WGN", "Wellington", None))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched.code, "WGN");
        assert_eq!(fetched.name, "Wellington");
        assert_eq!(fetched.image_url, None);
    }

    #[tokio::test]
    async fn test_delete_returns_prior_value_then_absent() {
        let repo = InMemoryRegionRepository::default();
        let created = repo.create(values("BOP", "Bay Of Plenty", None)).await.unwrap();

        assert_eq!(repo.delete(created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), None);
        assert_eq!(repo.delete(created.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_all_contains_every_created_region() {
        let repo = InMemoryRegionRepository::default();
        let mut ids = HashSet::new();

        for i in 0..25 {
            let name: String = CityName().fake();
            let region = repo
                .create(values(&format!("C{}", i), &name, None))
                .await
                .unwrap();
            ids.insert(region.id);
        }

        let listed: HashSet<Uuid> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_all_persisted() {
        let repo = Arc::new(InMemoryRegionRepository::default());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.create(values(&format!("R{}", i), "Region", None))
                        .await
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.list_all().await.unwrap().len(), 32);
    }

    #[tokio::test]
    async fn test_with_regions_preserves_rows() {
        let seeded = Region::new(Uuid::new_v4(), values("STL", "Southland", None));
        let repo = InMemoryRegionRepository::with_regions(vec![seeded.clone()]);

        assert_eq!(repo.list_all().await.unwrap(), vec![seeded]);
    }
}
