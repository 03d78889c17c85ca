use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{Region, RegionValues};
use crate::features::regions::repositories::RegionRepository;

/// Region store backed by the `regions` table
pub struct PgRegionRepository {
    pool: PgPool,
}

impl PgRegionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegionRepository for PgRegionRepository {
    async fn list_all(&self) -> Result<Vec<Region>> {
        sqlx::query_as::<_, Region>(
            r#"
            SELECT id, code, name, image_url
            FROM regions
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list regions: {:?}", e);
            AppError::Database(e)
        })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Region>> {
        sqlx::query_as::<_, Region>(
            r#"
            SELECT id, code, name, image_url
            FROM regions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch region {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn create(&self, values: RegionValues) -> Result<Region> {
        let id = Uuid::new_v4();

        sqlx::query_as::<_, Region>(
            r#"
            INSERT INTO regions (id, code, name, image_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id, code, name, image_url
            "#,
        )
        .bind(id)
        .bind(&values.code)
        .bind(&values.name)
        .bind(&values.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create region {}: {:?}", values.code, e);
            AppError::Database(e)
        })
    }

    async fn update(&self, id: Uuid, values: RegionValues) -> Result<Option<Region>> {
        sqlx::query_as::<_, Region>(
            r#"
            UPDATE regions
            SET code = $1,
                name = $2,
                image_url = $3
            WHERE id = $4
            RETURNING id, code, name, image_url
            "#,
        )
        .bind(&values.code)
        .bind(&values.name)
        .bind(&values.image_url)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update region {}: {:?}", id, e);
            AppError::Database(e)
        })
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Region>> {
        sqlx::query_as::<_, Region>(
            r#"
            DELETE FROM regions
            WHERE id = $1
            RETURNING id, code, name, image_url
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to delete region {}: {:?}", id, e);
            AppError::Database(e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::regions::fixtures::seed_regions;

    fn values(code: &str, name: &str) -> RegionValues {
        RegionValues {
            code: code.to_string(),
            name: name.to_string(),
            image_url: None,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a running Postgres at DATABASE_URL"]
    async fn test_seeded_regions_are_listed(pool: PgPool) {
        let repo = PgRegionRepository::new(pool);

        let regions = repo.list_all().await.unwrap();
        for seeded in seed_regions() {
            assert!(regions.contains(&seeded), "missing seeded {}", seeded.code);
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a running Postgres at DATABASE_URL"]
    async fn test_create_update_delete_lifecycle(pool: PgPool) {
        let repo = PgRegionRepository::new(pool);

        let created = repo.create(values("TST", "Test Region")).await.unwrap();
        assert_eq!(
            repo.get_by_id(created.id).await.unwrap(),
            Some(created.clone())
        );

        let updated = repo
            .update(created.id, values("UPD", "Updated Region"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.code, "UPD");

        let deleted = repo.delete(created.id).await.unwrap();
        assert_eq!(deleted, Some(updated));
        assert_eq!(repo.get_by_id(created.id).await.unwrap(), None);
        assert_eq!(repo.delete(created.id).await.unwrap(), None);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a running Postgres at DATABASE_URL"]
    async fn test_unknown_id_has_no_side_effect(pool: PgPool) {
        let repo = PgRegionRepository::new(pool);
        let before = repo.list_all().await.unwrap();

        let missing = Uuid::new_v4();
        assert_eq!(repo.get_by_id(missing).await.unwrap(), None);
        assert_eq!(repo.update(missing, values("X", "X")).await.unwrap(), None);
        assert_eq!(repo.delete(missing).await.unwrap(), None);

        assert_eq!(repo.list_all().await.unwrap(), before);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "requires a running Postgres at DATABASE_URL"]
    async fn test_delete_region_with_walks_cascades(pool: PgPool) {
        let repo = PgRegionRepository::new(pool.clone());
        let region = repo.create(values("WLK", "Walked Region")).await.unwrap();

        // Seeded "Easy" difficulty
        let difficulty_id = uuid::uuid!("6909ddcc-76a4-4a94-bf18-487e2bc14037");
        sqlx::query(
            r#"
            INSERT INTO walks (id, name, description, length_in_km, difficulty_id, region_id)
            VALUES ($1, 'Coast Track', 'Along the coast', 12.5, $2, $3)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(difficulty_id)
        .bind(region.id)
        .execute(&pool)
        .await
        .unwrap();

        assert_eq!(repo.delete(region.id).await.unwrap(), Some(region.clone()));

        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM walks WHERE region_id = $1")
            .bind(region.id)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0);
    }
}
