use sea_orm::{
    sea_query::Expr, AccessMode, ActiveModelTrait, ActiveValue::NotSet, ColumnTrait,
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, EntityTrait,
    IsolationLevel, JoinType, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    Set, TransactionTrait,
};
use std::sync::Arc;
use tracing::debug;

use crate::dto::MaterialStatsByType;
use crate::entities::material::{
    ActiveModel as MaterialActiveModel, Column, Entity as Material, Model as MaterialModel,
};
use crate::entities::material_type;
use crate::errors::AppError;
use crate::repositories::Repository;

use super::{BaseRepository, DEFAULT_PAGE_SIZE};

/// Repository for material rows in `materials_info`
#[derive(Debug, Clone)]
pub struct MaterialRepository {
    base: BaseRepository,
}

impl MaterialRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Inserts a material; the store assigns `material_id`.
    pub async fn create(&self, material: MaterialModel) -> Result<MaterialModel, AppError> {
        overwrite_columns(material)
            .insert(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }

    /// Find a material by ID
    pub async fn get_by_id(&self, id: i64) -> Result<MaterialModel, AppError> {
        Material::find_by_id(id)
            .one(self.base.get_db())
            .await?
            .ok_or_else(|| AppError::not_found("material", id))
    }

    /// Overwrites every non-key column of row `id` with `material`, `None`s included.
    pub async fn update(&self, id: i64, material: MaterialModel) -> Result<(), AppError> {
        let result = Material::update_many()
            .set(overwrite_columns(material))
            .filter(Column::MaterialId.eq(id))
            .exec(self.base.get_db())
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("material", id));
        }
        Ok(())
    }

    /// Delete a material
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = Material::delete_by_id(id)
            .exec(self.base.get_db())
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("material", id));
        }
        Ok(())
    }

    /// Returns one page ordered by id together with the overall row count.
    ///
    /// Both reads share a single read-only transaction so `total` and `items`
    /// describe the same snapshot.
    pub async fn list(
        &self,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<MaterialModel>, u64), AppError> {
        let limit = if limit <= 0 { DEFAULT_PAGE_SIZE } else { limit };
        let offset = offset.max(0);

        let txn = begin_snapshot(self.base.get_db()).await?;

        let total = Material::find().count(&txn).await?;
        let items = Material::find()
            .order_by_asc(Column::MaterialId)
            .offset(offset as u64)
            .limit(limit as u64)
            .all(&txn)
            .await?;

        txn.commit().await?;

        debug!(offset, limit, total, returned = items.len(), "listed materials");
        Ok((items, total))
    }

    /// Per-type material counts, one row per existing type, ordered by type id.
    ///
    /// Types without materials report zero counts; materials whose type is
    /// missing do not contribute.
    pub async fn aggregate_stats(&self) -> Result<Vec<MaterialStatsByType>, AppError> {
        // COUNT(CASE ...) rather than SUM so every backend yields an integer.
        let available = Expr::cust(format!(
            "COUNT(CASE WHEN materials_info.material_status = {} THEN 1 END)",
            crate::entities::material::STATUS_AVAILABLE
        ));

        material_type::Entity::find()
            .select_only()
            .column(material_type::Column::MaterialTypeId)
            .column(material_type::Column::MaterialTypeName)
            .column_as(
                Expr::col((Material, Column::MaterialId)).count(),
                "total_count",
            )
            .column_as(available, "available_count")
            .join(JoinType::LeftJoin, material_type::Relation::Materials.def())
            .group_by(material_type::Column::MaterialTypeId)
            .group_by(material_type::Column::MaterialTypeName)
            .order_by_asc(material_type::Column::MaterialTypeId)
            .into_model::<MaterialStatsByType>()
            .all(self.base.get_db())
            .await
            .map_err(AppError::DatabaseError)
    }
}

/// Active model with every non-key column set; the key is left unset.
fn overwrite_columns(material: MaterialModel) -> MaterialActiveModel {
    MaterialActiveModel {
        material_id: NotSet,
        material_name: Set(material.material_name),
        material_type_id: Set(material.material_type_id),
        material_desc: Set(material.material_desc),
        material_status: Set(material.material_status),
        material_purchased_at: Set(material.material_purchased_at),
        material_location: Set(material.material_location),
    }
}

/// Opens a read-only transaction with a stable snapshot where the backend needs asking.
async fn begin_snapshot(db: &DatabaseConnection) -> Result<DatabaseTransaction, AppError> {
    let txn = match db.get_database_backend() {
        // SQLite transactions are serializable already and reject access-mode hints.
        DbBackend::Sqlite => db.begin().await?,
        _ => {
            db.begin_with_config(
                Some(IsolationLevel::RepeatableRead),
                Some(AccessMode::ReadOnly),
            )
            .await?
        }
    };
    Ok(txn)
}
