//! Minimap configuration: display size, zoom persistence policy, and fill palette.
//!
//! Hosts either deserialize a [`MinimapConfig`] from their own settings (every
//! field has a default) or call [`MinimapConfig::from_env`]:
//!
//! - `MINIMAP_WIDTH`: display width in layout units, default 200
//! - `MINIMAP_HEIGHT`: display height in layout units, default 150
//! - `MINIMAP_ZOOM_POLICY`: `reset` (default) or `restore`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::collections::HashMap;
use std::env::VarError;

use serde::{Deserialize, Serialize};

use crate::consts::{MINIMAP_HEIGHT, MINIMAP_WIDTH};
use crate::layer::LayerKind;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a number: {value:?}")]
    InvalidNumber { var: &'static str, value: String },
    #[error("minimap size must be positive and finite, got {width} x {height}")]
    NonPositiveSize { width: f64, height: f64 },
    #[error("unknown zoom policy {0:?}; expected `reset` or `restore`")]
    UnknownZoomPolicy(String),
    #[error("{var} is not valid unicode")]
    Env { var: &'static str, source: VarError },
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whether a host-supplied zoom is honoured when the minimap loads.
///
/// The engine itself never stores zoom; `Restore` only lets the host hand a
/// previously saved value back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomPolicy {
    /// Every load starts at the default zoom.
    #[default]
    Reset,
    /// Accept the zoom the host restores.
    Restore,
}

impl ZoomPolicy {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "reset" => Ok(Self::Reset),
            "restore" => Ok(Self::Restore),
            other => Err(ConfigError::UnknownZoomPolicy(other.to_string())),
        }
    }
}

/// CSS fill color per layer kind. Kinds without an entry are left to the
/// renderer's own default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette(HashMap<LayerKind, String>);

impl Default for Palette {
    fn default() -> Self {
        // Drawing and text have no agreed color yet.
        Self(HashMap::from([
            (LayerKind::Image, "#3B82F6".to_string()),
            (LayerKind::Video, "#8B5CF6".to_string()),
            (LayerKind::Audio, "#10B981".to_string()),
            (LayerKind::Note, "#F59E0B".to_string()),
            (LayerKind::Group, "#6B7280".to_string()),
        ]))
    }
}

impl Palette {
    #[must_use]
    pub fn fill(&self, kind: LayerKind) -> Option<&str> {
        self.0.get(&kind).map(String::as_str)
    }

    /// Set or replace the fill for `kind`.
    pub fn set(&mut self, kind: LayerKind, fill: impl Into<String>) {
        self.0.insert(kind, fill.into());
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinimapConfig {
    /// Display width in host layout units.
    pub width: f64,
    /// Display height in host layout units.
    pub height: f64,
    pub zoom_policy: ZoomPolicy,
    pub palette: Palette,
}

impl Default for MinimapConfig {
    fn default() -> Self {
        Self {
            width: MINIMAP_WIDTH,
            height: MINIMAP_HEIGHT,
            zoom_policy: ZoomPolicy::default(),
            palette: Palette::default(),
        }
    }
}

impl MinimapConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable, or the
    /// resulting size is not positive.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let width = match env_var("MINIMAP_WIDTH")? {
            Some(raw) => parse_f64("MINIMAP_WIDTH", &raw)?,
            None => defaults.width,
        };
        let height = match env_var("MINIMAP_HEIGHT")? {
            Some(raw) => parse_f64("MINIMAP_HEIGHT", &raw)?,
            None => defaults.height,
        };
        let zoom_policy = match env_var("MINIMAP_ZOOM_POLICY")? {
            Some(raw) => ZoomPolicy::parse(&raw)?,
            None => defaults.zoom_policy,
        };

        let config = Self { width, height, zoom_policy, ..defaults };
        config.validate()?;
        Ok(config)
    }

    /// Parse config from a JSON document; missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` on malformed input, or a validation error.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the display size is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NonPositiveSize` if either dimension is zero,
    /// negative, or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let usable = |v: f64| v.is_finite() && v > 0.0;
        if usable(self.width) && usable(self.height) {
            Ok(())
        } else {
            Err(ConfigError::NonPositiveSize { width: self.width, height: self.height })
        }
    }
}

fn env_var(var: &'static str) -> Result<Option<String>, ConfigError> {
    match std::env::var(var) {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(source) => Err(ConfigError::Env { var, source }),
    }
}

fn parse_f64(var: &'static str, raw: &str) -> Result<f64, ConfigError> {
    raw.trim().parse::<f64>().map_err(|_| ConfigError::InvalidNumber { var, value: raw.to_string() })
}
