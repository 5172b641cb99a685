//! Toolbar configuration.
//!
//! [`ToolbarConfig`] holds the fixed dimensions the placement math uses and
//! the timing of the grow transition. It can be built in code or read from a
//! TOML document; missing keys take their defaults.
//!
//! ```
//! use inline_toolbar::ToolbarConfig;
//!
//! let config = ToolbarConfig::from_toml_str("toolbar_height = 36.0").unwrap();
//! assert_eq!(config.toolbar_height, 36.0);
//! assert_eq!(config.edge_margin, 10.0);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ToolbarError};

/// Dimensions and timing for one toolbar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarConfig {
    /// Vertical space reserved above the selection.
    ///
    /// This is a fixed value, not the panel's measured height. If the panel
    /// renders taller, it overlaps the top of the selection.
    pub toolbar_height: f32,
    /// Extra width added to the panel when checking viewport clearance.
    pub edge_margin: f32,
    /// Pulls the indicator left by this much when the panel was shifted off
    /// the left edge.
    pub indicator_inset: f32,
    /// Duration of the grow transition, in milliseconds.
    pub transition_ms: u64,
}

impl Default for ToolbarConfig {
    fn default() -> Self {
        Self {
            toolbar_height: 30.0,
            edge_margin: 10.0,
            indicator_inset: 5.0,
            transition_ms: 150,
        }
    }
}

impl ToolbarConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a TOML document.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Check that every dimension is finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("toolbar_height", self.toolbar_height),
            ("edge_margin", self.edge_margin),
            ("indicator_inset", self.indicator_inset),
        ] {
            if !value.is_finite() {
                return Err(ToolbarError::invalid_config(field, "must be finite"));
            }
            if value < 0.0 {
                return Err(ToolbarError::invalid_config(
                    field,
                    format!("must not be negative, got {value}"),
                ));
            }
        }
        Ok(())
    }

    /// The grow transition duration.
    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Set the toolbar height using builder pattern.
    pub fn with_toolbar_height(mut self, height: f32) -> Self {
        self.toolbar_height = height;
        self
    }

    /// Set the edge margin using builder pattern.
    pub fn with_edge_margin(mut self, margin: f32) -> Self {
        self.edge_margin = margin;
        self
    }

    /// Set the indicator inset using builder pattern.
    pub fn with_indicator_inset(mut self, inset: f32) -> Self {
        self.indicator_inset = inset;
        self
    }

    /// Set the transition duration using builder pattern.
    pub fn with_transition_ms(mut self, ms: u64) -> Self {
        self.transition_ms = ms;
        self
    }
}
