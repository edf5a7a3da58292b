pub mod angle;
pub mod engine;
pub mod gesture;
pub mod layout;
pub mod rotation;
pub mod spring;
pub mod weight;

pub use engine::{CarouselEngine, PlacedItem};
pub use gesture::{
    DragSample, DragUpdate, GestureConfig, GestureController, ReleaseOutcome,
};
pub use layout::{ArcGeometry, ArcLayout, ArcMode, Point, Size};
pub use rotation::{
    ListenerId, PhaseKind, RotationPhase, RotationSnapshot, RotationState,
};
pub use spring::{Spring, SpringConfig};
pub use weight::{ItemWeight, circular_distance};
