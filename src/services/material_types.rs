use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    db::DbPool, dto::MaterialTypePayload, entities::material_type, errors::ServiceError,
    repositories::MaterialTypeRepository,
};

/// Service for managing material types
#[derive(Clone)]
pub struct MaterialTypeService {
    repository: MaterialTypeRepository,
}

impl MaterialTypeService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repository: MaterialTypeRepository::new(db_pool),
        }
    }

    #[instrument(skip(self, payload))]
    pub async fn create(
        &self,
        payload: Option<MaterialTypePayload>,
    ) -> Result<material_type::Model, ServiceError> {
        let candidate = payload
            .ok_or_else(|| ServiceError::ValidationError("material type body is required".into()))?
            .into_model(0)?;
        candidate.validate()?;

        let created = self.repository.create(candidate.material_type_name).await?;
        info!(material_type_id = created.material_type_id, "material type created");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> Result<material_type::Model, ServiceError> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<material_type::Model>, ServiceError> {
        self.repository.list_all().await
    }

    /// Renames type `id`; the body id, if any, is ignored.
    #[instrument(skip(self, payload))]
    pub async fn update(
        &self,
        id: i64,
        payload: Option<MaterialTypePayload>,
    ) -> Result<material_type::Model, ServiceError> {
        let candidate = payload
            .ok_or_else(|| ServiceError::ValidationError("material type body is required".into()))?
            .into_model(id)?;
        candidate.validate()?;

        self.repository
            .update(id, candidate.material_type_name)
            .await?;
        info!(material_type_id = id, "material type updated");

        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.repository.delete(id).await?;
        info!(material_type_id = id, "material type deleted");
        Ok(())
    }
}
