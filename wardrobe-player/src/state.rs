use std::rc::Rc;

use iced::widget::canvas;
use log::debug;
use wardrobe_core::{
    CarouselEngine, CarouselSettings, ListenerId, RotationSnapshot, Size,
};
use wardrobe_model::WardrobeItem;

/// Canvas size the carousel is mounted with before the first layout pass
/// reports the real bounds.
pub const INITIAL_CAROUSEL_SIZE: Size = Size::new(560.0, 360.0);

/// Outfit screen state. The screen owns the items and the active index; the
/// carousel engine only reads them and proposes selections.
pub struct State {
    pub items: Vec<WardrobeItem>,
    pub active_index: usize,
    pub engine: CarouselEngine,
    /// Disc layer of the carousel canvas; cleared on every rotation change.
    pub carousel_cache: Rc<canvas::Cache>,
    rotation_listener: Option<ListenerId>,
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("items", &self.items.len())
            .field("active_index", &self.active_index)
            .field("engine", &self.engine)
            .field("rotation_listener", &self.rotation_listener)
            .finish()
    }
}

impl State {
    pub fn new(
        items: Vec<WardrobeItem>,
        active_index: usize,
        settings: CarouselSettings,
    ) -> Self {
        let active_index = active_index.min(items.len().saturating_sub(1));
        let mut engine = CarouselEngine::mount(
            settings,
            items.len(),
            active_index,
            INITIAL_CAROUSEL_SIZE,
        );
        let carousel_cache = Rc::new(canvas::Cache::new());
        let rotation_listener = engine.subscribe({
            let cache = Rc::clone(&carousel_cache);
            move |_: &RotationSnapshot| cache.clear()
        });
        debug!("Carousel mounted with listener {rotation_listener:?}");

        Self {
            items,
            active_index,
            engine,
            carousel_cache,
            rotation_listener,
        }
    }

    pub fn active_item(&self) -> Option<&WardrobeItem> {
        self.items.get(self.active_index)
    }

    pub fn active_item_mut(&mut self) -> Option<&mut WardrobeItem> {
        self.items.get_mut(self.active_index)
    }

    /// Redraw the discs on the next frame (badges or labels changed).
    pub fn invalidate_carousel(&self) {
        self.carousel_cache.clear();
    }

    pub fn is_animating(&self) -> bool {
        self.engine.is_settling()
    }
}

impl Drop for State {
    fn drop(&mut self) {
        if let Some(id) = self.rotation_listener.take() {
            self.engine.unsubscribe(id);
        }
        self.engine.unmount();
    }
}
