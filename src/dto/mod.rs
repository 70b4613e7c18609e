//! Wire representations: inbound payloads that accept both field-naming
//! conventions, and outbound views rendered in the configured one.

pub mod material;
pub mod material_type;
pub mod naming;
pub mod stats;

pub use material::{MaterialJson, MaterialPayload};
pub use material_type::{MaterialTypeJson, MaterialTypePayload};
pub use naming::FieldNaming;
pub use stats::{MaterialStats, MaterialStatsByType};
