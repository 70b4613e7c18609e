pub mod common;
pub mod material_types;
pub mod materials;

use crate::db::DbPool;
use crate::services::{material_types::MaterialTypeService, materials::MaterialService};
use std::sync::Arc;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub materials: Arc<MaterialService>,
    pub material_types: Arc<MaterialTypeService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            materials: Arc::new(MaterialService::new(db_pool.clone())),
            material_types: Arc::new(MaterialTypeService::new(db_pool)),
        }
    }
}
