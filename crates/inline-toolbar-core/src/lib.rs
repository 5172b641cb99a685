//! Editor-session plumbing for the inline toolbar.
//!
//! This crate provides the pieces an editor session shares with its plugins,
//! without knowing anything about toolbars:
//!
//! - **Signal/Slot System**: Type-safe change notification
//! - **Editor Store**: Per-session pub/sub registry of named items
//! - **Selection Views**: The read-only questions a plugin may ask of a selection
//! - **Tick Queue**: Work deferred until the current notification is handled
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use inline_toolbar_core::{EditorStore, SelectionSnapshot, StoreKey, TickQueue};
//!
//! let ticks = Arc::new(TickQueue::new());
//! let store = Arc::new(EditorStore::<SelectionSnapshot>::new(ticks.clone()));
//!
//! let deferred = ticks.clone();
//! store.subscribe_to_item(StoreKey::Selection, move || {
//!     deferred.post(|| println!("selection settled"));
//! });
//!
//! store.selection_changed();
//! ticks.run_tick().unwrap();
//! ```

mod error;
pub mod logging;
pub mod selection;
pub mod signal;
pub mod store;
mod task;

pub use error::{Error, Result};
pub use selection::{EditorState, Selection, SelectionSnapshot};
pub use signal::{ConnectionGuard, ConnectionId, Signal, Slot};
pub use store::{EditorStore, GetEditorState, SetEditorState, StoreKey, SubscriptionId};
pub use task::{BoxedTask, Scheduler, TaskId, TickQueue};
