//! Index <-> rotation contract shared by release and tap selection
//!
//! Sign convention: a positive rotation moves every item clockwise on screen
//! (toward the right along the top of the arc). Item `i` sits at the top
//! reading position when `start_angle + i * step + rotation == 0`, so
//!
//! ```text
//! rotation(i) = -start_angle - i * step
//! i(rotation) = round((-start_angle - rotation) / step)
//! ```
//!
//! In full-circle mode `start_angle` is 0 and the index wraps modulo the item
//! count, which is the same as `round((360 - normalized) / step) mod n`. In
//! half-circle mode the rotation is clamped to the reachable targets and the
//! index is clamped, never wrapped.

use super::layout::{ArcLayout, ArcMode};

/// Wrap into `[0, 360)`.
pub fn normalize_degrees(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Signed shortest rotation from `from` to `to`, in `[-180, 180)`.
pub fn shortest_delta(from: f32, to: f32) -> f32 {
    (to - from + 180.0).rem_euclid(360.0) - 180.0
}

/// Bring a raw release angle into the range used for index resolution:
/// wrapped into `[0, 360)` on a full circle, clamped to the reachable target
/// interval on a half circle (the arc has two real endpoints).
pub fn release_angle(layout: &ArcLayout, raw: f32) -> f32 {
    match layout.mode() {
        ArcMode::FullCircle => normalize_degrees(raw),
        ArcMode::HalfCircle => {
            let (lo, hi) = half_circle_bounds(layout);
            raw.clamp(lo, hi)
        }
    }
}

/// Index of the item nearest the top reading position for `angle`.
///
/// `None` only for an empty layout. The result is always `< item_count`.
pub fn resolve_top_index(layout: &ArcLayout, angle: f32) -> Option<usize> {
    let count = layout.item_count();
    match count {
        0 => None,
        1 => Some(0),
        _ => {
            let angle = release_angle(layout, angle);
            let steps =
                ((-layout.start_angle() - angle) / layout.angle_step()).round();
            let index = match layout.mode() {
                ArcMode::FullCircle => {
                    (steps as i64).rem_euclid(count as i64) as usize
                }
                ArcMode::HalfCircle => steps.clamp(0.0, (count - 1) as f32) as usize,
            };
            Some(index.min(count - 1))
        }
    }
}

/// Rotation that centers `index` at the top: normalized into `[0, 360)` on a
/// full circle, exact on a half circle. Out-of-range indices are clamped.
pub fn target_angle_for_index(layout: &ArcLayout, index: usize) -> Option<f32> {
    let count = layout.item_count();
    match count {
        0 => None,
        1 => Some(0.0),
        _ => {
            let index = index.min(count - 1);
            let raw = -layout.start_angle() - index as f32 * layout.angle_step();
            Some(match layout.mode() {
                ArcMode::FullCircle => normalize_degrees(raw),
                ArcMode::HalfCircle => raw,
            })
        }
    }
}

/// Rotation the settle spring should head to from `current` so that `index`
/// ends up centered. On a full circle this is the equivalent of the target
/// nearest `current`, so the ring never spins the long way round.
pub fn settle_target(
    layout: &ArcLayout,
    index: usize,
    current: f32,
) -> Option<f32> {
    let target = target_angle_for_index(layout, index)?;
    Some(match layout.mode() {
        ArcMode::FullCircle if layout.item_count() > 1 => {
            current + shortest_delta(normalize_degrees(current), target)
        }
        _ => target,
    })
}

fn half_circle_bounds(layout: &ArcLayout) -> (f32, f32) {
    let hi = -layout.start_angle();
    let span = layout.item_count().saturating_sub(1) as f32 * layout.angle_step();
    (hi - span, hi)
}
