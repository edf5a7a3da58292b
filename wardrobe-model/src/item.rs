use std::path::{Path, PathBuf};

use url::Url;

use crate::error::{ModelError, Result};
use crate::ids::ItemId;

/// Where an item's picture lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ImageRef {
    /// File on the local disk.
    Local(PathBuf),
    /// Remote picture; the carousel never fetches it.
    Remote(Url),
}

impl ImageRef {
    /// Interpret a catalog string: `http(s)://` becomes `Remote`, anything
    /// else is treated as a local path.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ModelError::InvalidImage(
                "image reference cannot be empty".to_string(),
            ));
        }
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            let url = Url::parse(trimmed).map_err(|err| {
                ModelError::InvalidImage(format!("{trimmed}: {err}"))
            })?;
            return Ok(ImageRef::Remote(url));
        }
        Ok(ImageRef::Local(PathBuf::from(trimmed)))
    }

    pub fn local_path(&self) -> Option<&Path> {
        match self {
            ImageRef::Local(path) => Some(path),
            ImageRef::Remote(_) => None,
        }
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageRef::Local(path) => write!(f, "{}", path.display()),
            ImageRef::Remote(url) => write!(f, "{url}"),
        }
    }
}

/// A garment or accessory shown on the outfit carousel.
///
/// `accepted` and `rejected` are independent display flags; both may be set
/// at once and the carousel only uses them to draw badges.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WardrobeItem {
    pub id: ItemId,
    pub label: String,
    pub image: ImageRef,
    #[cfg_attr(feature = "serde", serde(default))]
    pub accepted: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rejected: bool,
}

impl WardrobeItem {
    pub fn new(label: impl Into<String>, image: ImageRef) -> Self {
        Self {
            id: ItemId::new(),
            label: label.into(),
            image,
            accepted: false,
            rejected: false,
        }
    }

    pub fn with_flags(mut self, accepted: bool, rejected: bool) -> Self {
        self.accepted = accepted;
        self.rejected = rejected;
        self
    }

    /// First visible character of the label, used as a placeholder glyph.
    pub fn initial(&self) -> char {
        self.label
            .chars()
            .find(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }

    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(ModelError::InvalidItem(format!(
                "item {} has an empty label",
                self.id
            )));
        }
        Ok(())
    }
}
