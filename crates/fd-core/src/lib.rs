//! food-db/crates/fd-core/src/lib.rs
//!
//! Domain types, the error/result protocol and the port traits for food-db.

pub mod error;
pub mod models;
pub mod result;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use models::*;
pub use result::*;
pub use traits::*;
