//! # Wardrobe Core
//!
//! Interaction engine for the wardrobe item carousel: a ring of item discs
//! arranged on an arc, rotated by horizontal drags and snapped so that one
//! item rests at the top reading position.
//!
//! ## Architecture
//!
//! - [`carousel::layout`]: pure trigonometric placement of items on the arc
//! - [`carousel::angle`]: the index <-> angle contract shared by drag release,
//!   tap-to-select and external selection
//! - [`carousel::rotation`]: the unbounded rotation angle, its phases and
//!   observers
//! - [`carousel::gesture`]: deadzone, sensitivity and release resolution
//! - [`carousel::spring`]: the settle animation
//! - [`carousel::engine`]: one mounted carousel tying the above together
//! - [`config`]: optional TOML overrides for the tunables in [`constants`]
//!
//! ## Examples
//!
//! ```
//! use std::time::Instant;
//! use wardrobe_core::{CarouselEngine, CarouselSettings, DragSample, Point, Size};
//!
//! let mut engine = CarouselEngine::mount(
//!     CarouselSettings::default(),
//!     12,
//!     0,
//!     Size::new(400.0, 300.0),
//! );
//! engine.press(Point::new(200.0, 200.0));
//! engine.drag(DragSample::new(0, 400.0, 0.0));
//! assert_eq!(engine.release(Instant::now()), Some(5));
//! ```

#![allow(missing_docs)]

/// Layout, rotation, gestures and the settle spring
pub mod carousel;

/// TOML-backed carousel settings
pub mod config;

/// Tunables and their stock values
pub mod constants;

/// Error types for settings loading
pub mod error;

pub use carousel::{
    ArcGeometry, ArcLayout, ArcMode, CarouselEngine, DragSample, DragUpdate,
    GestureConfig, GestureController, ItemWeight, ListenerId, PhaseKind,
    PlacedItem, Point, ReleaseOutcome, RotationPhase, RotationSnapshot,
    RotationState, Size, Spring, SpringConfig,
};
pub use config::CarouselSettings;
pub use error::{CarouselError, Result};
