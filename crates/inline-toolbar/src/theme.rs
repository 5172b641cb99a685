//! Class-name tokens for the toolbar and its buttons.

use serde::{Deserialize, Serialize};

/// Class names for the panel itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarStyles {
    /// Class applied to the panel root; its indicator markers hang off it.
    pub toolbar: String,
}

impl Default for ToolbarStyles {
    fn default() -> Self {
        Self {
            toolbar: "inline-toolbar".to_string(),
        }
    }
}

/// Class names handed to every action rendered inside the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyles {
    pub button: String,
    pub button_wrapper: String,
    pub active: String,
}

impl Default for ButtonStyles {
    fn default() -> Self {
        Self {
            button: "inline-toolbar__button".to_string(),
            button_wrapper: "inline-toolbar__button-wrapper".to_string(),
            active: "inline-toolbar__button--active".to_string(),
        }
    }
}

/// The full theme a toolbar is constructed with.
///
/// Actions only ever see [`ButtonStyles`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolbarTheme {
    pub toolbar_styles: ToolbarStyles,
    pub button_styles: ButtonStyles,
}

impl ToolbarTheme {
    /// Set the panel class using builder pattern.
    pub fn with_toolbar_class(mut self, class: impl Into<String>) -> Self {
        self.toolbar_styles.toolbar = class.into();
        self
    }

    /// Set the button styles using builder pattern.
    pub fn with_button_styles(mut self, styles: ButtonStyles) -> Self {
        self.button_styles = styles;
        self
    }
}
