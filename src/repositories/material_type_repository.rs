use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use crate::entities::material_type::{
    ActiveModel as MaterialTypeActiveModel, Column, Entity as MaterialType,
    Model as MaterialTypeModel,
};
use crate::errors::AppError;
use crate::repositories::Repository;

use super::BaseRepository;

/// Repository for the `material_type` table
#[derive(Debug, Clone)]
pub struct MaterialTypeRepository {
    base: BaseRepository,
}

impl MaterialTypeRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, name: String) -> Result<MaterialTypeModel, AppError> {
        MaterialTypeActiveModel {
            material_type_id: NotSet,
            material_type_name: Set(name),
        }
        .insert(self.base.get_db())
        .await
        .map_err(AppError::DatabaseError)
    }

    pub async fn get_by_id(&self, id: i64) -> Result<MaterialTypeModel, AppError> {
        MaterialType::find_by_id(id)
            .one(self.base.get_db())
            .await?
            .ok_or_else(|| AppError::not_found("material type", id))
    }

    /// All types ordered by id
    pub async fn list_all(&self) -> Result<Vec<MaterialTypeModel>, AppError> {
        MaterialType::find()
            .order_by_asc(Column::MaterialTypeId)
            .all(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    pub async fn update(&self, id: i64, name: String) -> Result<(), AppError> {
        let result = MaterialType::update_many()
            .set(MaterialTypeActiveModel {
                material_type_id: NotSet,
                material_type_name: Set(name),
            })
            .filter(Column::MaterialTypeId.eq(id))
            .exec(self.base.get_db())
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("material type", id));
        }
        Ok(())
    }

    /// Removes the type only; materials pointing at it are left in place.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = MaterialType::delete_by_id(id)
            .exec(self.base.get_db())
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("material type", id));
        }
        Ok(())
    }
}
