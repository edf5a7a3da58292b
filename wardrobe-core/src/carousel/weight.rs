//! Visual falloff away from the active item

use super::layout::ArcMode;
use crate::constants::weight::{FAR_DISTANCE, OPACITIES, SCALES};

/// Size and opacity for one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemWeight {
    pub scale: f32,
    pub opacity: f32,
}

impl ItemWeight {
    pub fn for_distance(distance: usize) -> Self {
        let slot = distance.min(FAR_DISTANCE);
        Self {
            scale: SCALES[slot],
            opacity: OPACITIES[slot],
        }
    }
}

/// Steps between `index` and `active`.
///
/// On a full circle the smallest of the direct, wrapped-forward and
/// wrapped-backward distances wins, so the falloff is continuous across the
/// seam between the last and first items. A half circle has two real
/// endpoints and only the direct distance applies.
pub fn circular_distance(
    index: usize,
    active: usize,
    count: usize,
    mode: ArcMode,
) -> usize {
    if count == 0 {
        return 0;
    }
    let direct = index.abs_diff(active);
    match mode {
        ArcMode::HalfCircle => direct,
        ArcMode::FullCircle => {
            let forward = (index + count).abs_diff(active);
            let backward = (active + count).abs_diff(index);
            direct.min(forward).min(backward)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_across_the_seam() {
        assert_eq!(circular_distance(9, 0, 10, ArcMode::FullCircle), 1);
        assert_eq!(circular_distance(0, 9, 10, ArcMode::FullCircle), 1);
        assert_eq!(circular_distance(5, 0, 10, ArcMode::FullCircle), 5);
        assert_eq!(circular_distance(3, 7, 10, ArcMode::FullCircle), 4);
    }

    #[test]
    fn half_circle_uses_direct_distance() {
        assert_eq!(circular_distance(8, 0, 9, ArcMode::HalfCircle), 8);
        assert_eq!(circular_distance(2, 4, 9, ArcMode::HalfCircle), 2);
    }

    #[test]
    fn far_items_share_the_floor() {
        let floor = ItemWeight::for_distance(FAR_DISTANCE);
        assert_eq!(ItemWeight::for_distance(7), floor);
        assert_eq!(ItemWeight::for_distance(100), floor);
        assert_eq!(ItemWeight::for_distance(0).opacity, 1.0);

        let weights: Vec<_> = (0..=FAR_DISTANCE)
            .map(|d| ItemWeight::for_distance(d).opacity)
            .collect();
        assert!(weights.windows(2).all(|w| w[0] > w[1]));
    }
}
