//! One mounted carousel: layout + rotation + gestures + the caller's index
//!
//! The caller owns the item list and the active index. The engine reads the
//! item count and active index, and proposes new indices as return values
//! from `release`. Proposals are remembered so that echoing the same index
//! back through `sync_active_index` does not restart the spring; echoing a
//! different one (the caller vetoed) springs to that instead.

use std::time::Instant;

use log::debug;
use wardrobe_model::WardrobeItem;

use super::angle::{settle_target, target_angle_for_index};
use super::gesture::{
    DragSample, DragUpdate, GestureController, ReleaseOutcome,
};
use super::layout::{ArcGeometry, ArcLayout, Point, Size};
use super::rotation::{
    ListenerId, PhaseKind, RotationSnapshot, RotationState,
};
use super::spring::SpringConfig;
use super::weight::{ItemWeight, circular_distance};
use crate::config::CarouselSettings;
use crate::constants::layout as lc;

/// One item as it should be painted this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedItem {
    pub index: usize,
    pub center: Point,
    pub diameter: f32,
    pub opacity: f32,
    /// Circular distance to the active item.
    pub distance: usize,
    pub is_active: bool,
}

impl PlacedItem {
    pub fn contains(&self, point: Point, slop: f32) -> bool {
        self.center.distance(point) <= self.diameter / 2.0 + slop
    }
}

#[derive(Debug)]
pub struct CarouselEngine {
    settings: CarouselSettings,
    spring: SpringConfig,
    layout: ArcLayout,
    geometry: ArcGeometry,
    viewport: Size,
    rotation: RotationState,
    gesture: GestureController,
    active_index: usize,
    mounted: bool,
}

impl CarouselEngine {
    /// Mount a carousel with `item_count` items, resting on `active_index`
    /// (clamped) without animation.
    pub fn mount(
        settings: CarouselSettings,
        item_count: usize,
        active_index: usize,
        viewport: Size,
    ) -> Self {
        let layout = ArcLayout::with_threshold(
            item_count,
            settings.full_circle_threshold(),
        );
        let active_index = clamp_index(active_index, item_count);
        let initial =
            target_angle_for_index(&layout, active_index).unwrap_or(0.0);
        debug!(
            "Mounting carousel: {item_count} items, active {active_index}, angle {initial}"
        );
        Self {
            spring: settings.spring_config(),
            gesture: GestureController::new(settings.gesture_config()),
            geometry: geometry_for(&settings, viewport),
            settings,
            layout,
            viewport,
            rotation: RotationState::new(initial),
            active_index,
            mounted: true,
        }
    }

    /// Tear down: listeners dropped, spring cancelled, further input ignored.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.rotation.clear_listeners();
        self.rotation.stop();
        self.gesture = GestureController::new(self.settings.gesture_config());
        self.mounted = false;
        debug!("Carousel unmounted");
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    // ========== QUERIES ==========

    pub fn layout(&self) -> &ArcLayout {
        &self.layout
    }

    pub fn geometry(&self) -> &ArcGeometry {
        &self.geometry
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn item_count(&self) -> usize {
        self.layout.item_count()
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn current_angle(&self) -> f32 {
        self.rotation.current_angle()
    }

    pub fn phase(&self) -> PhaseKind {
        self.rotation.phase_kind()
    }

    pub fn is_dragging(&self) -> bool {
        self.rotation.is_dragging()
    }

    /// True while a frame clock is needed.
    pub fn is_settling(&self) -> bool {
        self.mounted && self.rotation.is_settling()
    }

    pub fn item_position(&self, index: usize) -> Option<Point> {
        self.geometry.position(
            &self.layout,
            index,
            self.rotation.current_angle(),
        )
    }

    /// Items in paint order: farthest from the active item first, active
    /// last so it lands on top. Empty for an empty carousel.
    pub fn render_plan(&self) -> Vec<PlacedItem> {
        let count = self.layout.item_count();
        let base = self.settings.item_diameter();
        let mut plan: Vec<PlacedItem> = (0..count)
            .filter_map(|index| {
                let center = self.item_position(index)?;
                let distance = circular_distance(
                    index,
                    self.active_index,
                    count,
                    self.layout.mode(),
                );
                let weight = ItemWeight::for_distance(distance);
                Some(PlacedItem {
                    index,
                    center,
                    diameter: base * weight.scale,
                    opacity: weight.opacity,
                    distance,
                    is_active: index == self.active_index,
                })
            })
            .collect();
        plan.sort_by(|a, b| b.distance.cmp(&a.distance));
        plan
    }

    /// Topmost item under `point`, if any.
    pub fn hit_test(&self, point: Point) -> Option<usize> {
        self.render_plan()
            .iter()
            .rev()
            .find(|item| item.contains(point, lc::HIT_SLOP))
            .map(|item| item.index)
    }

    // ========== OBSERVERS ==========

    pub fn subscribe<F>(&mut self, listener: F) -> Option<ListenerId>
    where
        F: FnMut(&RotationSnapshot) + 'static,
    {
        self.mounted.then(|| self.rotation.subscribe(listener))
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.rotation.unsubscribe(id)
    }

    // ========== CALLER-DRIVEN CHANGES ==========

    /// Follow the caller's item count. Clamps the active index and springs
    /// to it unless a drag is in progress.
    pub fn set_item_count(&mut self, item_count: usize, now: Instant) {
        if !self.mounted || item_count == self.layout.item_count() {
            return;
        }
        self.layout = ArcLayout::with_threshold(
            item_count,
            self.settings.full_circle_threshold(),
        );
        self.active_index = clamp_index(self.active_index, item_count);
        debug!("Carousel now has {item_count} items");

        if item_count == 0 {
            self.gesture =
                GestureController::new(self.settings.gesture_config());
            self.rotation.stop();
            return;
        }
        if !self.rotation.is_dragging() {
            self.settle_on_active(now);
        }
    }

    /// `set_item_count` from the caller's item slice.
    pub fn sync_items(&mut self, items: &[WardrobeItem], now: Instant) {
        self.set_item_count(items.len(), now);
    }

    /// The caller's item at the active index.
    pub fn active_item<'a>(
        &self,
        items: &'a [WardrobeItem],
    ) -> Option<&'a WardrobeItem> {
        if items.len() != self.layout.item_count() {
            return None;
        }
        items.get(self.active_index)
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.geometry = geometry_for(&self.settings, viewport);
    }

    /// External selection effect: the caller's active index changed without a
    /// drag (e.g. picked elsewhere on the screen). Springs to it from the
    /// current interpolated angle. During a drag only the index is recorded;
    /// the release compares against it.
    pub fn sync_active_index(&mut self, index: usize, now: Instant) {
        if !self.mounted || self.layout.is_empty() {
            return;
        }
        let index = clamp_index(index, self.layout.item_count());
        if index == self.active_index {
            return;
        }
        self.active_index = index;
        if !self.rotation.is_dragging() {
            debug!("Active index set externally to {index}");
            self.settle_on_active(now);
        }
    }

    /// Tap-to-select path: spring straight to `index` using the same
    /// index->angle contract as drag release. Returns the index when it
    /// differs from the active one.
    pub fn select(&mut self, index: usize, now: Instant) -> Option<usize> {
        if !self.mounted || self.layout.is_empty() {
            return None;
        }
        let index = clamp_index(index, self.layout.item_count());
        let changed = index != self.active_index;
        self.active_index = index;
        self.settle_on_active(now);
        changed.then_some(index)
    }

    // ========== POINTER INPUT ==========

    pub fn press(&mut self, position: Point) {
        if !self.mounted {
            return;
        }
        self.gesture.press(&self.layout, position);
    }

    pub fn drag(&mut self, sample: DragSample) -> DragUpdate {
        if !self.mounted {
            return DragUpdate::Ignored;
        }
        self.gesture.drag(&mut self.rotation, &self.layout, sample)
    }

    /// End the gesture. Returns the newly selected index at most once per
    /// gesture: a drag that lands on a different item, or a tap on one.
    pub fn release(&mut self, now: Instant) -> Option<usize> {
        if !self.mounted {
            return None;
        }
        let outcome = self.gesture.release(
            &mut self.rotation,
            &self.layout,
            self.active_index,
            self.spring,
            now,
        );
        match outcome {
            ReleaseOutcome::Ignored => None,
            ReleaseOutcome::Settled { index, selection, .. } => {
                self.active_index = index;
                if let Some(index) = selection {
                    debug!("Drag selected index {index}");
                }
                selection
            }
            ReleaseOutcome::Tap(point) => {
                let hit = self.hit_test(point)?;
                if hit == self.active_index {
                    return None;
                }
                debug!("Tap selected index {hit}");
                self.select(hit, now)
            }
        }
    }

    pub fn cancel(&mut self, now: Instant) {
        if !self.mounted {
            return;
        }
        self.gesture.cancel(
            &mut self.rotation,
            &self.layout,
            self.active_index,
            self.spring,
            now,
        );
    }

    /// Frame tick. Returns true while still settling.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.mounted {
            return false;
        }
        self.rotation.tick(now)
    }

    fn settle_on_active(&mut self, now: Instant) {
        let current = self.rotation.current_angle();
        if let Some(target) =
            settle_target(&self.layout, self.active_index, current)
        {
            self.rotation.settle_to(target, self.spring, now);
        }
    }
}

fn clamp_index(index: usize, count: usize) -> usize {
    index.min(count.saturating_sub(1))
}

fn geometry_for(settings: &CarouselSettings, viewport: Size) -> ArcGeometry {
    ArcGeometry::from_viewport(
        viewport,
        settings.horizontal_padding(),
        settings.pivot_drop(),
    )
}
