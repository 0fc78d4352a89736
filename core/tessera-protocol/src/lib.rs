#![no_std] // Shared with embedded and WASM consumers

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod entity;
pub mod features;
pub mod ids;

pub use entity::{Entity, Reference};
pub use features::FeatureAxes;
pub use ids::{FeatureSetId, FrequencyId, TextId, TokenId, UnitId};

pub mod model;
pub use model::*;
