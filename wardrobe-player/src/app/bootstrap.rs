use std::path::{Path, PathBuf};

use log::{info, warn};
use wardrobe_core::CarouselSettings;

use crate::catalog;
use crate::state::State;

/// Stock demo wardrobe size: enough items for the full circle.
pub const DEFAULT_DEMO_ITEMS: usize = 12;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub settings_path: Option<PathBuf>,
    pub catalog_path: Option<PathBuf>,
    pub demo_items: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings_path: None,
            catalog_path: None,
            demo_items: DEFAULT_DEMO_ITEMS,
        }
    }
}

impl AppConfig {
    pub fn from_environment() -> Self {
        let settings_path = std::env::var_os("WARDROBE_CAROUSEL_CONFIG")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let catalog_path = std::env::var_os("WARDROBE_CATALOG")
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        let demo_items = std::env::var("WARDROBE_DEMO_ITEMS")
            .ok()
            .and_then(|raw| parse_demo_items(&raw))
            .unwrap_or(DEFAULT_DEMO_ITEMS);

        Self {
            settings_path,
            catalog_path,
            demo_items,
        }
    }

    pub fn with_demo_items(mut self, count: usize) -> Self {
        self.demo_items = count;
        self
    }

    pub fn settings_path(&self) -> Option<&Path> {
        self.settings_path.as_deref()
    }

    pub fn catalog_path(&self) -> Option<&Path> {
        self.catalog_path.as_deref()
    }

    /// Carousel settings from the configured file, or the stock values when
    /// there is none or it is rejected.
    pub fn carousel_settings(&self) -> CarouselSettings {
        let Some(path) = self.settings_path() else {
            return CarouselSettings::default();
        };
        CarouselSettings::load(path).unwrap_or_else(|err| {
            warn!(
                "Ignoring carousel settings {}: {err}",
                path.display()
            );
            CarouselSettings::default()
        })
    }
}

fn parse_demo_items(raw: &str) -> Option<usize> {
    match raw.trim().parse::<usize>() {
        Ok(count) => Some(count),
        Err(err) => {
            warn!("WARDROBE_DEMO_ITEMS={raw:?} is not a count: {err}");
            None
        }
    }
}

/// Initial state for the application and the update-level tests.
pub fn base_state(config: &AppConfig) -> State {
    let items = catalog::load_or_demo(config.catalog_path(), config.demo_items);
    info!("Outfit screen starting with {} items", items.len());
    State::new(items, 0, config.carousel_settings())
}
