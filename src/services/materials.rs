use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    db::DbPool,
    dto::{MaterialPayload, MaterialStats},
    entities::material::{self, STATUS_AVAILABLE},
    errors::ServiceError,
    repositories::{MaterialRepository, DEFAULT_PAGE_SIZE},
    services::material_stats::MaterialStatsService,
};

/// One page of materials plus the coerced paging inputs that produced it
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MaterialPage {
    pub items: Vec<material::Model>,
    pub total: u64,
    pub page: i64,
    pub page_size: i64,
}

/// Normalizes 1-based paging input into `(page, page_size, offset)`.
pub fn page_window(page: i64, page_size: i64) -> (i64, i64, i64) {
    let page = if page <= 0 { 1 } else { page };
    let page_size = if page_size <= 0 {
        DEFAULT_PAGE_SIZE
    } else {
        page_size
    };
    let offset = (page - 1).saturating_mul(page_size);
    (page, page_size, offset)
}

/// Service for managing materials
#[derive(Clone)]
pub struct MaterialService {
    repository: MaterialRepository,
    stats: MaterialStatsService,
}

impl MaterialService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repository: MaterialRepository::new(db_pool.clone()),
            stats: MaterialStatsService::new(db_pool),
        }
    }

    /// Creates a material; the store picks the id and status defaults to available.
    #[instrument(skip(self, payload))]
    pub async fn create(
        &self,
        payload: Option<MaterialPayload>,
    ) -> Result<material::Model, ServiceError> {
        let payload = payload
            .ok_or_else(|| ServiceError::ValidationError("material body is required".into()))?;
        payload.ensure_creatable()?;

        let mut candidate = payload.merge_onto(material::Model {
            material_status: STATUS_AVAILABLE,
            ..Default::default()
        });
        candidate.material_id = 0;
        candidate.validate()?;

        let created = self.repository.create(candidate).await?;
        info!(material_id = created.material_id, "material created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<material::Model, ServiceError> {
        self.repository.get_by_id(id).await
    }

    /// Applies `patch` over the stored row and writes the result in full.
    ///
    /// Fields absent from the patch keep their stored values; nullable fields
    /// sent as `null` are cleared. The body id is ignored in favour of `id`.
    #[instrument(skip(self, patch))]
    pub async fn update(
        &self,
        id: i64,
        patch: Option<MaterialPayload>,
    ) -> Result<material::Model, ServiceError> {
        let patch =
            patch.ok_or_else(|| ServiceError::ValidationError("material body is required".into()))?;

        let current = self.repository.get_by_id(id).await?;
        let mut merged = patch.merge_onto(current);
        merged.material_id = id;
        merged.validate()?;

        self.repository.update(id, merged).await?;
        info!(material_id = id, "material updated");

        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.repository.delete(id).await?;
        info!(material_id = id, "material deleted");
        Ok(())
    }

    /// Lists materials by page; non-positive inputs fall back to page 1 / size 20.
    #[instrument(skip(self))]
    pub async fn list(&self, page: i64, page_size: i64) -> Result<MaterialPage, ServiceError> {
        let (page, page_size, offset) = page_window(page, page_size);
        let (items, total) = self.repository.list(offset, page_size).await?;
        Ok(MaterialPage {
            items,
            total,
            page,
            page_size,
        })
    }

    #[instrument(skip(self))]
    pub async fn stats(&self) -> Result<MaterialStats, ServiceError> {
        self.stats.compute_stats().await
    }
}
