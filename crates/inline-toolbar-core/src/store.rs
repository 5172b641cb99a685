//! The editor-session store.
//!
//! [`EditorStore`] is the context object an editor session hands to its
//! plugins. It owns a notification channel per [`StoreKey`], the editor-state
//! accessors the editing engine provides, and the [`Scheduler`] used for work
//! that must run after the current notification has been handled.
//!
//! A store lives as long as the editor session that created it; it is never a
//! process-wide singleton.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use inline_toolbar_core::{EditorState, EditorStore, SelectionSnapshot, StoreKey, TickQueue};
//!
//! #[derive(Clone)]
//! struct Doc(SelectionSnapshot);
//!
//! impl EditorState for Doc {
//!     type Selection = SelectionSnapshot;
//!     fn selection(&self) -> SelectionSnapshot {
//!         self.0
//!     }
//! }
//!
//! let store = EditorStore::<Doc>::new(Arc::new(TickQueue::new()));
//! let subscription = store.subscribe_to_item(StoreKey::Selection, || println!("selection moved"));
//! store.selection_changed();
//! store.unsubscribe_from_item(subscription);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Error, Result};
use crate::logging::targets;
use crate::selection::EditorState;
use crate::signal::{ConnectionId, Signal, Slot};
use crate::task::Scheduler;

/// The named items held by an [`EditorStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    /// The editor's selection. Notified whenever the selection changes.
    Selection,
    /// The accessor returning the current editor state.
    GetEditorState,
    /// The accessor replacing the current editor state.
    SetEditorState,
}

impl StoreKey {
    /// All keys, in declaration order.
    pub const ALL: [StoreKey; 3] = [
        StoreKey::Selection,
        StoreKey::GetEditorState,
        StoreKey::SetEditorState,
    ];

    /// The item name as the editing engine spells it.
    pub fn as_str(self) -> &'static str {
        match self {
            StoreKey::Selection => "selection",
            StoreKey::GetEditorState => "getEditorState",
            StoreKey::SetEditorState => "setEditorState",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the current editor state.
pub type GetEditorState<S> = Arc<dyn Fn() -> S + Send + Sync>;

/// Replaces the current editor state.
pub type SetEditorState<S> = Arc<dyn Fn(S) + Send + Sync>;

/// Handle for one store subscription, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId {
    key: StoreKey,
    connection: ConnectionId,
}

impl SubscriptionId {
    /// The item this subscription listens to.
    pub fn key(&self) -> StoreKey {
        self.key
    }
}

/// Pub/sub registry for one editor session.
pub struct EditorStore<S: EditorState> {
    selection: Signal<()>,
    get_editor_state_changed: Signal<()>,
    set_editor_state_changed: Signal<()>,
    get_editor_state: RwLock<Option<GetEditorState<S>>>,
    set_editor_state: RwLock<Option<SetEditorState<S>>>,
    scheduler: Arc<dyn Scheduler>,
}

impl<S: EditorState> EditorStore<S> {
    /// Create a store whose deferred work goes to `scheduler`.
    pub fn new(scheduler: Arc<dyn Scheduler>) -> Self {
        Self {
            selection: Signal::new(),
            get_editor_state_changed: Signal::new(),
            set_editor_state_changed: Signal::new(),
            get_editor_state: RwLock::new(None),
            set_editor_state: RwLock::new(None),
            scheduler,
        }
    }

    /// The scheduler for work that runs after the current notification.
    pub fn scheduler(&self) -> &Arc<dyn Scheduler> {
        &self.scheduler
    }

    fn channel(&self, key: StoreKey) -> &Signal<()> {
        match key {
            StoreKey::Selection => &self.selection,
            StoreKey::GetEditorState => &self.get_editor_state_changed,
            StoreKey::SetEditorState => &self.set_editor_state_changed,
        }
    }

    /// Subscribe `handler` to change notifications for `key`.
    pub fn subscribe_to_item<F>(&self, key: StoreKey, handler: F) -> SubscriptionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.subscribe_shared(key, Arc::new(move |_: &()| handler()))
    }

    /// Subscribe an already shared handler to `key`.
    pub fn subscribe_shared(&self, key: StoreKey, handler: Slot<()>) -> SubscriptionId {
        let connection = self.channel(key).connect_shared(handler);
        tracing::debug!(target: targets::STORE, %key, "subscribed to store item");
        SubscriptionId { key, connection }
    }

    /// Remove a subscription.
    ///
    /// Returns `false` if it had already been removed.
    pub fn unsubscribe_from_item(&self, subscription: SubscriptionId) -> bool {
        let removed = self.channel(subscription.key).disconnect(subscription.connection);
        tracing::debug!(target: targets::STORE, key = %subscription.key, removed, "unsubscribed from store item");
        removed
    }

    /// Number of live subscriptions to `key`.
    pub fn subscriber_count(&self, key: StoreKey) -> usize {
        self.channel(key).connection_count()
    }

    /// Notify every subscriber of `key`.
    ///
    /// Returns the number of handlers notified.
    pub fn update_item(&self, key: StoreKey) -> usize {
        self.channel(key).emit(())
    }

    /// Notify selection subscribers. Called by the editing engine.
    pub fn selection_changed(&self) -> usize {
        self.update_item(StoreKey::Selection)
    }

    /// Install the editor-state accessors. Called by the editing engine.
    pub fn set_editor_accessors(&self, get: GetEditorState<S>, set: SetEditorState<S>) {
        *self.get_editor_state.write() = Some(get);
        *self.set_editor_state.write() = Some(set);
        self.update_item(StoreKey::GetEditorState);
        self.update_item(StoreKey::SetEditorState);
    }

    /// Whether the editing engine has installed its accessors.
    pub fn has_editor_accessors(&self) -> bool {
        self.get_editor_state.read().is_some() && self.set_editor_state.read().is_some()
    }

    /// The `getEditorState` accessor, if provided.
    pub fn editor_state_getter(&self) -> Option<GetEditorState<S>> {
        self.get_editor_state.read().clone()
    }

    /// The `setEditorState` accessor, if provided.
    pub fn editor_state_setter(&self) -> Option<SetEditorState<S>> {
        self.set_editor_state.read().clone()
    }

    /// Read the current editor state, if the editor has provided an accessor.
    pub fn get_editor_state(&self) -> Option<S> {
        // Clone the accessor out so it runs without the lock held.
        let get = self.editor_state_getter()?;
        Some(get())
    }

    /// Replace the current editor state.
    pub fn set_editor_state(&self, next: S) -> Result<()> {
        let Some(set) = self.editor_state_setter() else {
            tracing::warn!(target: targets::STORE, "set_editor_state before the editor provided an accessor");
            return Err(Error::accessors_missing(StoreKey::SetEditorState));
        };
        set(next);
        Ok(())
    }
}

static_assertions::assert_impl_all!(EditorStore<crate::selection::SelectionSnapshot>: Send, Sync);
