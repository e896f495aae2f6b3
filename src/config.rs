//! Runtime configuration installed by the harness through `configure(json)`.
//!
//! Every field is optional in the JSON; missing fields keep their defaults from
//! [`crate::consts`].

use log::LevelFilter;
use serde::Deserialize;

use crate::consts::{MARKER_COLOR, MARKER_DIAMETER_PX, MARKER_ID, OVERLAY_BORDER, OVERLAY_BORDER_RADIUS, OVERLAY_ID, Z_INDEX};
use crate::error::MarkError;

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarkerConfig {
    pub overlay_id: String,
    pub marker_id: String,
    pub z_index: i32,
    pub overlay_border: String,
    pub overlay_border_radius: String,
    pub marker_diameter_px: f64,
    pub marker_color: String,
    pub log_level: LevelFilter,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            overlay_id: OVERLAY_ID.to_owned(),
            marker_id: MARKER_ID.to_owned(),
            z_index: Z_INDEX,
            overlay_border: OVERLAY_BORDER.to_owned(),
            overlay_border_radius: OVERLAY_BORDER_RADIUS.to_owned(),
            marker_diameter_px: MARKER_DIAMETER_PX,
            marker_color: MARKER_COLOR.to_owned(),
            log_level: LevelFilter::Info,
        }
    }
}

impl MarkerConfig {
    /// Parse and validate a config object.
    ///
    /// # Errors
    ///
    /// [`MarkError::ConfigJson`] for malformed JSON or unknown fields,
    /// [`MarkError::Config`] for values that fail validation.
    pub fn from_json(raw: &str) -> Result<Self, MarkError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`MarkError::Config`] naming the first invalid field.
    pub fn validate(&self) -> Result<(), MarkError> {
        validate_id("overlay_id", &self.overlay_id)?;
        validate_id("marker_id", &self.marker_id)?;
        if self.overlay_id == self.marker_id {
            return Err(MarkError::Config("overlay_id and marker_id must differ".to_owned()));
        }
        if !self.marker_diameter_px.is_finite() || self.marker_diameter_px <= 0.0 {
            return Err(MarkError::Config(format!(
                "marker_diameter_px must be a positive number, got {}",
                self.marker_diameter_px
            )));
        }
        Ok(())
    }
}

// Ids are pasted unescaped into `#id` selectors, so they must be plain CSS identifiers:
// `[A-Za-z_-][A-Za-z0-9_-]*` with no digit right after a leading `-`.
fn validate_id(field: &str, id: &str) -> Result<(), MarkError> {
    if !is_css_identifier(id) {
        return Err(MarkError::Config(format!(
            "{field} must be a CSS identifier (letters, digits, `_` or `-`, not starting with a digit), got {id:?}"
        )));
    }
    Ok(())
}

fn is_css_identifier(id: &str) -> bool {
    let bytes = id.as_bytes();
    let Some(&first) = bytes.first() else {
        return false;
    };
    let starts_ok = match first {
        b'-' => bytes.get(1).is_some_and(|b| b.is_ascii_alphabetic() || *b == b'_' || *b == b'-'),
        b => b.is_ascii_alphabetic() || b == b'_',
    };
    starts_ok && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'_' || *b == b'-')
}
