//! Data model definitions shared across Wardrobe crates.
#![allow(missing_docs)]

pub mod error;
pub mod ids;
pub mod item;

pub use error::{ModelError, Result as ModelResult};
pub use ids::ItemId;
pub use item::{ImageRef, WardrobeItem};
