//! Error types for the inline toolbar.

/// Result type alias for toolbar operations.
pub type Result<T> = std::result::Result<T, ToolbarError>;

/// Errors that can occur while configuring or driving a toolbar.
///
/// Placement itself never fails: missing geometry keeps the previous
/// position instead.
#[derive(Debug, thiserror::Error)]
pub enum ToolbarError {
    /// Error from the editor-session plumbing.
    #[error(transparent)]
    Core(#[from] inline_toolbar_core::Error),

    /// A configuration value is out of range.
    #[error("Invalid value for '{field}': {message}")]
    InvalidConfig {
        field: &'static str,
        message: String,
    },

    /// The configuration document could not be decoded.
    #[error("Failed to parse toolbar configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The configuration could not be encoded.
    #[error("Failed to serialize toolbar configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

impl ToolbarError {
    /// Create an invalid-config error.
    pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            message: message.into(),
        }
    }
}
