//! Gesture controller: pointer input -> rotation and selection
//!
//! A press only arms the controller. Movement past the deadzone on either
//! axis grants the drag (interrupting any settle); from then on every sample
//! rotates the ring by `dx * sensitivity`. A release inside the deadzone is a
//! tap and is handed back to the caller for hit-testing.

use std::time::Instant;

use log::{debug, trace};

use super::angle::{release_angle, resolve_top_index, settle_target};
use super::layout::{ArcLayout, Point};
use super::rotation::RotationState;
use super::spring::SpringConfig;
use crate::constants::gesture as gc;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Degrees of rotation per horizontal pixel.
    pub sensitivity_deg_per_px: f32,
    /// Movement needed before a press becomes a drag (px, per axis).
    pub deadzone_px: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            sensitivity_deg_per_px: gc::SENSITIVITY_DEG_PER_PX,
            deadzone_px: gc::DEADZONE_PX,
        }
    }
}

/// Pointer offset from the press position. `seq` must increase with every
/// sample; anything not newer than the last applied sample is dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    pub seq: u64,
    pub dx: f32,
    pub dy: f32,
}

impl DragSample {
    pub fn new(seq: u64, dx: f32, dy: f32) -> Self {
        Self { seq, dx, dy }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tracking {
    Idle,
    /// Pressed, still inside the deadzone.
    Pending { origin: Point },
    /// Drag granted.
    Dragging,
}

/// Result of feeding one drag sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragUpdate {
    /// No gesture, empty carousel, stale or non-finite sample.
    Ignored,
    /// Still inside the deadzone.
    Pending,
    /// This sample granted the drag and rotated the ring.
    Granted,
    /// Rotation updated.
    Moved,
}

/// Result of a release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReleaseOutcome {
    /// Nothing was being tracked.
    Ignored,
    /// Released inside the deadzone at the press position.
    Tap(Point),
    /// A drag ended. `selection` is `Some` only when the resolved index
    /// differs from the active one.
    Settled {
        index: usize,
        selection: Option<usize>,
        target: f32,
    },
}

#[derive(Debug, Clone)]
pub struct GestureController {
    config: GestureConfig,
    tracking: Tracking,
    last_seq: Option<u64>,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureController {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            tracking: Tracking::Idle,
            last_seq: None,
        }
    }

    pub fn config(&self) -> GestureConfig {
        self.config
    }

    pub fn set_config(&mut self, config: GestureConfig) {
        self.config = config;
    }

    /// A press is armed (pending or dragging).
    pub fn is_tracking(&self) -> bool {
        !matches!(self.tracking, Tracking::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.tracking, Tracking::Dragging)
    }

    /// Arm for a new gesture. Ignored on an empty carousel.
    pub fn press(&mut self, layout: &ArcLayout, position: Point) {
        if layout.is_empty() {
            return;
        }
        self.tracking = Tracking::Pending { origin: position };
        self.last_seq = None;
    }

    /// Feed the latest offset from the press position.
    pub fn drag(
        &mut self,
        rotation: &mut RotationState,
        layout: &ArcLayout,
        sample: DragSample,
    ) -> DragUpdate {
        if layout.is_empty() || matches!(self.tracking, Tracking::Idle) {
            return DragUpdate::Ignored;
        }
        if self.last_seq.is_some_and(|last| sample.seq <= last) {
            trace!("Dropping stale drag sample {}", sample.seq);
            return DragUpdate::Ignored;
        }
        if !(sample.dx.is_finite() && sample.dy.is_finite()) {
            return DragUpdate::Ignored;
        }
        self.last_seq = Some(sample.seq);

        let granted = match self.tracking {
            Tracking::Pending { .. } => {
                let deadzone = self.config.deadzone_px;
                if sample.dx.abs() <= deadzone && sample.dy.abs() <= deadzone {
                    return DragUpdate::Pending;
                }
                let origin = rotation.begin_drag();
                debug!("Drag granted at angle {origin}");
                self.tracking = Tracking::Dragging;
                true
            }
            Tracking::Dragging => false,
            Tracking::Idle => return DragUpdate::Ignored,
        };

        rotation.apply_drag(sample.dx * self.config.sensitivity_deg_per_px);
        if granted {
            DragUpdate::Granted
        } else {
            DragUpdate::Moved
        }
    }

    /// End the gesture. A drag resolves the nearest index and starts the
    /// settle spring; a press that never left the deadzone is a tap.
    pub fn release(
        &mut self,
        rotation: &mut RotationState,
        layout: &ArcLayout,
        active_index: usize,
        spring: SpringConfig,
        now: Instant,
    ) -> ReleaseOutcome {
        let tracking = std::mem::replace(&mut self.tracking, Tracking::Idle);
        self.last_seq = None;
        match tracking {
            Tracking::Idle => ReleaseOutcome::Ignored,
            Tracking::Pending { origin } => ReleaseOutcome::Tap(origin),
            Tracking::Dragging => {
                let raw = rotation.current_angle();
                let Some(index) = resolve_top_index(layout, raw) else {
                    // Items vanished mid-drag; nothing to snap to.
                    rotation.stop();
                    return ReleaseOutcome::Ignored;
                };
                let target = settle_target(layout, index, raw).unwrap_or(raw);
                debug!(
                    "Release at {raw} (resolved {}) -> index {index}, target {target}",
                    release_angle(layout, raw)
                );
                rotation.settle_to(target, spring, now);
                ReleaseOutcome::Settled {
                    index,
                    selection: (index != active_index).then_some(index),
                    target,
                }
            }
        }
    }

    /// Abort the gesture (pointer left, window lost focus). A granted drag
    /// springs back to the active item without proposing a selection.
    pub fn cancel(
        &mut self,
        rotation: &mut RotationState,
        layout: &ArcLayout,
        active_index: usize,
        spring: SpringConfig,
        now: Instant,
    ) {
        let tracking = std::mem::replace(&mut self.tracking, Tracking::Idle);
        self.last_seq = None;
        if !matches!(tracking, Tracking::Dragging) {
            return;
        }
        let raw = rotation.current_angle();
        match settle_target(layout, active_index, raw) {
            Some(target) => {
                debug!("Drag cancelled, returning to index {active_index}");
                rotation.settle_to(target, spring, now);
            }
            None => rotation.stop(),
        }
    }
}
