//! The toolbar's content slot.
//!
//! The panel shows either its default structure or exactly one piece of
//! override content supplied by an action. Setting new content replaces the
//! old one; setting `None` returns to the default structure.

use std::fmt;

use inline_toolbar_core::EditorState;

use crate::action::SharedAction;

/// What the panel body currently shows.
pub enum ContentSlot<S: EditorState> {
    /// The fixed action structure.
    Default,
    /// A single action's content in place of the structure.
    Overridden(SharedAction<S>),
}

/// Which way a [`ContentSlot::set`] call moved the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTransition {
    /// Default to overridden.
    Activated,
    /// Overridden to overridden with different content.
    Replaced,
    /// Overridden to default.
    Cleared,
    /// No change.
    Unchanged,
}

impl<S: EditorState> ContentSlot<S> {
    /// Whether override content is active.
    pub fn is_overridden(&self) -> bool {
        matches!(self, ContentSlot::Overridden(_))
    }

    /// The active override content, if any.
    pub fn content(&self) -> Option<&SharedAction<S>> {
        match self {
            ContentSlot::Default => None,
            ContentSlot::Overridden(content) => Some(content),
        }
    }

    /// Install new content, or clear with `None`. Last caller wins.
    pub fn set(&mut self, content: Option<SharedAction<S>>) -> SlotTransition {
        let transition = match (&*self, &content) {
            (ContentSlot::Default, None) => SlotTransition::Unchanged,
            (ContentSlot::Default, Some(_)) => SlotTransition::Activated,
            (ContentSlot::Overridden(_), None) => SlotTransition::Cleared,
            (ContentSlot::Overridden(current), Some(next)) if same_action(current, next) => {
                SlotTransition::Unchanged
            }
            (ContentSlot::Overridden(_), Some(_)) => SlotTransition::Replaced,
        };
        *self = match content {
            Some(content) => ContentSlot::Overridden(content),
            None => ContentSlot::Default,
        };
        transition
    }
}

/// Pointer identity, ignoring vtable differences.
fn same_action<S: EditorState>(a: &SharedAction<S>, b: &SharedAction<S>) -> bool {
    std::ptr::addr_eq(std::sync::Arc::as_ptr(a), std::sync::Arc::as_ptr(b))
}

impl<S: EditorState> Default for ContentSlot<S> {
    fn default() -> Self {
        ContentSlot::Default
    }
}

impl<S: EditorState> Clone for ContentSlot<S> {
    fn clone(&self) -> Self {
        match self {
            ContentSlot::Default => ContentSlot::Default,
            ContentSlot::Overridden(content) => ContentSlot::Overridden(content.clone()),
        }
    }
}

impl<S: EditorState> fmt::Debug for ContentSlot<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentSlot::Default => f.write_str("Default"),
            ContentSlot::Overridden(content) => {
                f.debug_tuple("Overridden").field(&content.name()).finish()
            }
        }
    }
}
