//! Wardrobe player library
//!
//! The outfit screen behind the `wardrobe-player` binary: a drag-to-rotate
//! item carousel with a detail panel for the active item. Exposed as a
//! library so the update-level tests can drive `State` without a window.

pub mod app;
pub mod catalog;
pub mod messages;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
pub mod widgets;
