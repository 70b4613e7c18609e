use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub mod material_repository;
pub mod material_type_repository;

pub use material_repository::MaterialRepository;
pub use material_type_repository::MaterialTypeRepository;

/// Default page size applied when a caller passes a non-positive limit
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Repository trait for common database operations
pub trait Repository {
    fn get_db(&self) -> &DatabaseConnection;
}

#[derive(Debug, Clone)]
pub struct BaseRepository {
    db: Arc<DatabaseConnection>,
}

impl BaseRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

impl Repository for BaseRepository {
    fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}
