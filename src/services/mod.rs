// Materials domain
pub mod material_stats;
pub mod material_types;
pub mod materials;
