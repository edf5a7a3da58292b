//! Runtime settings for the carousel
//!
//! `CarouselSettings` carries `Option<T>` overrides for the compiled
//! constants. Accessors fall back to the constants when a field is `None`,
//! so an empty settings file yields the stock carousel.

use std::path::Path;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::carousel::gesture::GestureConfig;
use crate::carousel::spring::SpringConfig;
use crate::constants::{gesture, layout, spring};
use crate::error::{CarouselError, Result};

/// Carousel overrides. Fields are None by default, falling back to compiled
/// constants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselSettings {
    // ========== GESTURE ==========
    /// Degrees of rotation per dragged pixel
    pub sensitivity_deg_per_px: Option<f32>,
    /// Press movement before a drag is granted (px)
    pub deadzone_px: Option<f32>,

    // ========== SPRING ==========
    /// Snap spring stiffness
    pub spring_stiffness: Option<f32>,
    /// Snap spring damping; critical for the stiffness when unset
    pub spring_damping: Option<f32>,
    /// Snap spring mass
    pub spring_mass: Option<f32>,

    // ========== LAYOUT ==========
    /// Half items needed to switch to the full circle
    pub full_circle_threshold: Option<usize>,
    /// Total horizontal padding around the arc (px)
    pub horizontal_padding: Option<f32>,
    /// Pivot distance below the viewport bottom (px)
    pub pivot_drop: Option<f32>,
    /// Diameter of the active item disc (px)
    pub item_diameter: Option<f32>,
}

/// On-disk layout: a `[carousel]` table inside a TOML file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct SettingsFile {
    carousel: CarouselSettings,
}

impl CarouselSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse settings from a TOML document with a `[carousel]` table.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: SettingsFile = toml::from_str(raw)?;
        file.carousel.validate()?;
        Ok(file.carousel)
    }

    /// Read and validate a settings file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&raw).inspect_err(|err| {
            warn!("Rejected carousel settings {}: {err}", path.display());
        })?;
        debug!("Loaded carousel settings from {}", path.display());
        Ok(settings)
    }

    /// Check every override that is present.
    pub fn validate(&self) -> Result<()> {
        positive("sensitivity_deg_per_px", self.sensitivity_deg_per_px)?;
        non_negative("deadzone_px", self.deadzone_px)?;
        positive("spring_stiffness", self.spring_stiffness)?;
        non_negative("spring_damping", self.spring_damping)?;
        positive("spring_mass", self.spring_mass)?;
        non_negative("horizontal_padding", self.horizontal_padding)?;
        non_negative("pivot_drop", self.pivot_drop)?;
        positive("item_diameter", self.item_diameter)?;
        if self.full_circle_threshold == Some(0) {
            return Err(CarouselError::InvalidSetting {
                name: "full_circle_threshold",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    // ========== GESTURE ACCESSORS ==========

    pub fn sensitivity_deg_per_px(&self) -> f32 {
        self.sensitivity_deg_per_px
            .unwrap_or(gesture::SENSITIVITY_DEG_PER_PX)
    }

    pub fn deadzone_px(&self) -> f32 {
        self.deadzone_px.unwrap_or(gesture::DEADZONE_PX)
    }

    pub fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            sensitivity_deg_per_px: self.sensitivity_deg_per_px(),
            deadzone_px: self.deadzone_px(),
        }
    }

    // ========== SPRING ACCESSORS ==========

    pub fn spring_stiffness(&self) -> f32 {
        self.spring_stiffness.unwrap_or(spring::STIFFNESS)
    }

    pub fn spring_mass(&self) -> f32 {
        self.spring_mass.unwrap_or(spring::MASS)
    }

    /// Explicit damping, or critical damping for the effective stiffness and
    /// mass.
    pub fn spring_damping(&self) -> f32 {
        match (self.spring_damping, self.spring_stiffness, self.spring_mass) {
            (Some(damping), _, _) => damping,
            (None, None, None) => spring::DAMPING,
            _ => {
                SpringConfig::critical(
                    self.spring_stiffness(),
                    self.spring_mass(),
                )
                .damping
            }
        }
    }

    pub fn spring_config(&self) -> SpringConfig {
        SpringConfig {
            stiffness: self.spring_stiffness(),
            damping: self.spring_damping(),
            mass: self.spring_mass(),
        }
    }

    // ========== LAYOUT ACCESSORS ==========

    pub fn full_circle_threshold(&self) -> usize {
        self.full_circle_threshold
            .unwrap_or(layout::FULL_CIRCLE_THRESHOLD)
    }

    pub fn horizontal_padding(&self) -> f32 {
        self.horizontal_padding
            .unwrap_or(layout::HORIZONTAL_PADDING_TOTAL)
    }

    pub fn pivot_drop(&self) -> f32 {
        self.pivot_drop.unwrap_or(layout::PIVOT_DROP)
    }

    pub fn item_diameter(&self) -> f32 {
        self.item_diameter.unwrap_or(layout::ITEM_DIAMETER)
    }
}

fn positive(name: &'static str, value: Option<f32>) -> Result<()> {
    match value {
        Some(v) if !(v.is_finite() && v > 0.0) => {
            Err(CarouselError::InvalidSetting {
                name,
                reason: format!("expected a positive number, got {v}"),
            })
        }
        _ => Ok(()),
    }
}

fn non_negative(name: &'static str, value: Option<f32>) -> Result<()> {
    match value {
        Some(v) if !(v.is_finite() && v >= 0.0) => {
            Err(CarouselError::InvalidSetting {
                name,
                reason: format!("expected zero or more, got {v}"),
            })
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_constants() {
        let settings = CarouselSettings::from_toml_str("").expect("empty ok");
        assert_eq!(settings, CarouselSettings::default());
        assert_eq!(
            settings.sensitivity_deg_per_px(),
            gesture::SENSITIVITY_DEG_PER_PX
        );
        assert_eq!(settings.deadzone_px(), gesture::DEADZONE_PX);
        assert_eq!(settings.spring_damping(), spring::DAMPING);
        assert_eq!(
            settings.full_circle_threshold(),
            layout::FULL_CIRCLE_THRESHOLD
        );
    }

    #[test]
    fn stiffness_override_recomputes_critical_damping() {
        let settings = CarouselSettings {
            spring_stiffness: Some(100.0),
            ..Default::default()
        };
        assert!((settings.spring_damping() - 20.0).abs() < 1e-4);

        let explicit = CarouselSettings {
            spring_stiffness: Some(100.0),
            spring_damping: Some(12.0),
            ..Default::default()
        };
        assert_eq!(explicit.spring_damping(), 12.0);
    }

    #[test]
    fn parses_carousel_table() {
        let raw = r#"
            [carousel]
            sensitivity_deg_per_px = 0.25
            deadzone_px = 12.0
            full_circle_threshold = 4
        "#;
        let settings = CarouselSettings::from_toml_str(raw).expect("parse");
        assert_eq!(settings.sensitivity_deg_per_px(), 0.25);
        assert_eq!(settings.gesture_config().deadzone_px, 12.0);
        assert_eq!(settings.full_circle_threshold(), 4);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        let unknown = "[carousel]\nwobble = 3\n";
        assert!(matches!(
            CarouselSettings::from_toml_str(unknown),
            Err(CarouselError::Parse(_))
        ));

        let negative = "[carousel]\nsensitivity_deg_per_px = -1.0\n";
        assert!(matches!(
            CarouselSettings::from_toml_str(negative),
            Err(CarouselError::InvalidSetting {
                name: "sensitivity_deg_per_px",
                ..
            })
        ));

        let zero_threshold = "[carousel]\nfull_circle_threshold = 0\n";
        assert!(CarouselSettings::from_toml_str(zero_threshold).is_err());
    }
}
