//! Arc layout: where each item sits for a given rotation
//!
//! Everything here is pure. The same `(item_count, threshold, index,
//! rotation)` always maps to the same coordinate.

use crate::constants::layout as lc;

/// Screen-space point (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Whether items spread over half or the whole circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcMode {
    HalfCircle,
    FullCircle,
}

/// Derived angular configuration for an item count. Rebuilt (never mutated)
/// when the count changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcLayout {
    item_count: usize,
    mode: ArcMode,
    arc_angle: f32,
    angle_step: f32,
    start_angle: f32,
}

impl ArcLayout {
    /// Layout with the stock full-circle threshold.
    pub fn new(item_count: usize) -> Self {
        Self::with_threshold(item_count, lc::FULL_CIRCLE_THRESHOLD)
    }

    pub fn with_threshold(item_count: usize, threshold: usize) -> Self {
        let mode = if item_count >= threshold.saturating_mul(2) {
            ArcMode::FullCircle
        } else {
            ArcMode::HalfCircle
        };
        let arc_angle = match mode {
            ArcMode::FullCircle => lc::FULL_CIRCLE_DEG,
            ArcMode::HalfCircle => lc::HALF_CIRCLE_DEG,
        };
        // Zero items never divide by the step; keep it finite anyway.
        let angle_step = if item_count == 0 {
            0.0
        } else {
            arc_angle / item_count as f32
        };
        let start_angle = match mode {
            ArcMode::FullCircle => 0.0,
            ArcMode::HalfCircle => -arc_angle / 2.0,
        };
        Self {
            item_count,
            mode,
            arc_angle,
            angle_step,
            start_angle,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }

    pub fn mode(&self) -> ArcMode {
        self.mode
    }

    pub fn arc_angle(&self) -> f32 {
        self.arc_angle
    }

    pub fn angle_step(&self) -> f32 {
        self.angle_step
    }

    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    /// Angle (degrees, 0 = straight above the pivot) of `index` under
    /// `rotation`. A lone item is pinned at 0.
    pub fn item_angle(&self, index: usize, rotation: f32) -> Option<f32> {
        if index >= self.item_count {
            return None;
        }
        if self.item_count == 1 {
            return Some(0.0);
        }
        Some(self.start_angle + index as f32 * self.angle_step + rotation)
    }
}

/// Pivot and radius for a viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    pub pivot: Point,
    pub radius: f32,
}

impl ArcGeometry {
    /// The pivot sits `pivot_drop` below the bottom edge, horizontally
    /// centered, and the radius spans the padded width edge to edge.
    pub fn from_viewport(
        viewport: Size,
        horizontal_padding: f32,
        pivot_drop: f32,
    ) -> Self {
        let radius = ((viewport.width - horizontal_padding) / 2.0)
            .max(lc::MIN_RADIUS);
        Self {
            pivot: Point::new(
                viewport.width / 2.0,
                viewport.height + pivot_drop,
            ),
            radius,
        }
    }

    /// Center of `index` under `rotation`, or `None` for an empty layout or
    /// an out-of-range index.
    pub fn position(
        &self,
        layout: &ArcLayout,
        index: usize,
        rotation: f32,
    ) -> Option<Point> {
        let theta = layout.item_angle(index, rotation)?.to_radians();
        Some(self.point_at(theta))
    }

    /// Top-of-arc reading position (θ = 0).
    pub fn top(&self) -> Point {
        self.point_at(0.0)
    }

    fn point_at(&self, theta: f32) -> Point {
        Point::new(
            self.pivot.x + self.radius * theta.sin(),
            self.pivot.y - self.radius * theta.cos(),
        )
    }
}
