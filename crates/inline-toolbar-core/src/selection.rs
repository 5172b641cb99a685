//! Read-only views of the editing engine's selection.
//!
//! The editing engine owns the document model and its selection. The toolbar
//! only ever asks two questions of a selection, expressed by [`Selection`].

/// An immutable selection value owned by the editing engine.
pub trait Selection {
    /// Whether the selection is a caret (start and end coincide).
    fn is_collapsed(&self) -> bool;

    /// Whether the editor holding this selection currently has focus.
    fn has_focus(&self) -> bool;
}

/// The editing engine's state value, as far as the toolbar cares.
///
/// Editor states are cheap to clone snapshots; `set_editor_state` replaces the
/// whole value.
pub trait EditorState: Clone + Send + Sync + 'static {
    /// The selection type this editor state exposes.
    type Selection: Selection;

    /// The current selection.
    fn selection(&self) -> Self::Selection;
}

/// A plain selection value.
///
/// Useful for editors that keep richer selection types internally but can
/// summarise them, and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionSnapshot {
    /// Whether the selection is collapsed.
    pub collapsed: bool,
    /// Whether the editor has focus.
    pub focused: bool,
}

impl SelectionSnapshot {
    /// A collapsed caret in an unfocused editor.
    pub const IDLE: Self = Self {
        collapsed: true,
        focused: false,
    };

    /// Create a selection snapshot.
    pub const fn new(collapsed: bool, focused: bool) -> Self {
        Self { collapsed, focused }
    }

    /// A non-empty range in a focused editor.
    pub const fn ranged() -> Self {
        Self::new(false, true)
    }
}

impl Selection for SelectionSnapshot {
    fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    fn has_focus(&self) -> bool {
        self.focused
    }
}

/// A bare selection is the smallest possible editor state.
impl EditorState for SelectionSnapshot {
    type Selection = SelectionSnapshot;

    fn selection(&self) -> SelectionSnapshot {
        *self
    }
}

impl<T: Selection + ?Sized> Selection for &T {
    fn is_collapsed(&self) -> bool {
        (**self).is_collapsed()
    }

    fn has_focus(&self) -> bool {
        (**self).has_focus()
    }
}
