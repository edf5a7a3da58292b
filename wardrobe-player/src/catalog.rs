//! Item catalog: the built-in demo wardrobe and JSON catalog files

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::{debug, warn};
use serde::Deserialize;
use wardrobe_model::{ImageRef, WardrobeItem};

const DEMO_LABELS: &[&str] = &[
    "Linen shirt",
    "Denim jacket",
    "Wool coat",
    "Chinos",
    "Sneakers",
    "Leather boots",
    "Silk scarf",
    "Knit sweater",
    "Rain jacket",
    "Oxford shoes",
    "Cargo shorts",
    "Beanie",
];

/// One entry of a catalog file. Ids are assigned on load.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    pub label: String,
    pub image: String,
    #[serde(default)]
    pub accepted: bool,
    #[serde(default)]
    pub rejected: bool,
}

impl CatalogEntry {
    fn into_item(self) -> Result<WardrobeItem> {
        let image = ImageRef::parse(&self.image)?;
        let item = WardrobeItem::new(self.label, image)
            .with_flags(self.accepted, self.rejected);
        item.validate()?;
        Ok(item)
    }
}

/// `count` demo items, cycling through the stock labels.
pub fn demo_items(count: usize) -> Vec<WardrobeItem> {
    (0..count)
        .map(|i| {
            let label = DEMO_LABELS[i % DEMO_LABELS.len()];
            let label = if i < DEMO_LABELS.len() {
                label.to_string()
            } else {
                format!("{label} {}", i / DEMO_LABELS.len() + 1)
            };
            let image = PathBuf::from(format!("wardrobe/item-{i:02}.png"));
            // A few pre-judged items so both badges show up
            WardrobeItem::new(label, ImageRef::Local(image))
                .with_flags(i % 5 == 1, i % 7 == 3)
        })
        .collect()
}

/// Parse a JSON array of catalog entries.
pub fn parse_catalog(raw: &str) -> Result<Vec<WardrobeItem>> {
    let entries: Vec<CatalogEntry> =
        serde_json::from_str(raw).context("catalog is not a JSON array of items")?;
    if entries.is_empty() {
        bail!("catalog has no items");
    }
    entries
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            entry.into_item().with_context(|| format!("catalog entry {i}"))
        })
        .collect()
}

pub fn load_catalog(path: &Path) -> Result<Vec<WardrobeItem>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading catalog {}", path.display()))?;
    let items = parse_catalog(&raw)
        .with_context(|| format!("loading catalog {}", path.display()))?;
    debug!("Loaded {} items from {}", items.len(), path.display());
    Ok(items)
}

/// Catalog from `path` when given, falling back to `demo_count` demo items
/// when it is missing or unreadable.
pub fn load_or_demo(path: Option<&Path>, demo_count: usize) -> Vec<WardrobeItem> {
    match path.map(load_catalog) {
        Some(Ok(items)) => items,
        Some(Err(err)) => {
            warn!("Falling back to the demo wardrobe: {err:#}");
            demo_items(demo_count)
        }
        None => demo_items(demo_count),
    }
}
