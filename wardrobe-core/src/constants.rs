//! Compiled defaults for the outfit carousel
//!
//! Tuning should happen here (or through `CarouselSettings` overrides) so the
//! layout, gesture and settle code stay consistent with each other.

/// Arc geometry and item sizing.
pub mod layout {
    /// Item count cutoff: at `2 * FULL_CIRCLE_THRESHOLD` items or more the
    /// carousel switches from a half circle to a full circle.
    pub const FULL_CIRCLE_THRESHOLD: usize = 5;
    /// Angular span of the full-circle layout (degrees).
    pub const FULL_CIRCLE_DEG: f32 = 360.0;
    /// Angular span of the half-circle layout (degrees).
    pub const HALF_CIRCLE_DEG: f32 = 180.0;
    /// Horizontal padding on each side of the arc.
    pub const HORIZONTAL_PADDING_SIDE: f32 = 20.0;
    /// Total horizontal padding (left + right).
    pub const HORIZONTAL_PADDING_TOTAL: f32 = HORIZONTAL_PADDING_SIDE * 2.0; // 40.0
    /// How far below the bottom edge of the viewport the pivot sits.
    pub const PIVOT_DROP: f32 = 80.0;
    /// Smallest radius the geometry will produce on tiny viewports.
    pub const MIN_RADIUS: f32 = 1.0;
    /// Diameter of the active item disc; others scale down from this.
    pub const ITEM_DIAMETER: f32 = 76.0;
    /// Extra tolerance around a disc when hit-testing taps.
    pub const HIT_SLOP: f32 = 6.0;
}

/// Drag handling.
pub mod gesture {
    /// Degrees of rotation per pixel of horizontal drag. Determines how
    /// "heavy" the dial feels: lower is heavier.
    pub const SENSITIVITY_DEG_PER_PX: f32 = 0.5;
    /// Movement (either axis, px) required before a press becomes a drag.
    /// Anything released inside it is a tap.
    pub const DEADZONE_PX: f32 = 8.0;
}

/// Snap spring.
pub mod spring {
    /// Spring stiffness (1/s^2 with unit mass).
    pub const STIFFNESS: f32 = 170.0;
    /// Mass of the animated value.
    pub const MASS: f32 = 1.0;
    /// 2 * sqrt(STIFFNESS * MASS): critical damping, no overshoot.
    pub const DAMPING: f32 = 26.076_809;
    /// Frame gaps longer than this are clamped to avoid jumps after stalls.
    pub const MAX_DT_S: f32 = 0.05;
    /// Fixed integration substep (s).
    pub const SUBSTEP_S: f32 = 1.0 / 240.0;
    /// Distance to target (degrees) under which the spring may rest.
    pub const REST_DISTANCE_DEG: f32 = 0.05;
    /// Speed (deg/s) under which the spring may rest.
    pub const REST_VELOCITY_DEG_PER_S: f32 = 0.5;
}

/// Size and opacity falloff by circular distance from the active item.
pub mod weight {
    /// Distances at or beyond this share the last table entry.
    pub const FAR_DISTANCE: usize = 4;
    /// Scale factor per distance `0..=FAR_DISTANCE`.
    pub const SCALES: [f32; FAR_DISTANCE + 1] = [1.0, 0.82, 0.68, 0.58, 0.5];
    /// Opacity per distance `0..=FAR_DISTANCE`; the last entry is the floor.
    pub const OPACITIES: [f32; FAR_DISTANCE + 1] = [1.0, 0.85, 0.65, 0.45, 0.3];
}
