//! Error types for the editor-session plumbing.

use crate::store::StoreKey;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the editor-session plumbing.
///
/// Missing selection geometry or an unmounted toolbar are not errors; those
/// degrade to keeping the previous visual state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An editor accessor was used before the editor wired it into the store.
    #[error("store item '{key}' has not been provided by the editor")]
    AccessorsMissing { key: StoreKey },

    /// The tick queue was asked to run while it was already running a tick.
    #[error("tick queue is already running a tick")]
    TickReentered,
}

impl Error {
    /// Create an accessor-missing error.
    pub fn accessors_missing(key: StoreKey) -> Self {
        Self::AccessorsMissing { key }
    }
}
