pub mod material;
pub mod material_type;
