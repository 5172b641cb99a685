//! The contract between the toolbar and the actions rendered inside it.
//!
//! Actions are opaque to the toolbar. Each one implements [`ToolbarAction`]
//! and is handed an [`ActionProps`] on every render: the button theme, the
//! editor-state accessors, and an [`OverrideHandle`] it may use to replace the
//! panel's content with something of its own.
//!
//! # Example
//!
//! ```
//! use inline_toolbar::{ActionProps, ToolbarAction, UiNode};
//! use inline_toolbar_core::{EditorState, Selection};
//!
//! struct BoldButton;
//!
//! impl<S: EditorState> ToolbarAction<S> for BoldButton {
//!     fn render(&self, props: &ActionProps<S>) -> UiNode {
//!         let active = props
//!             .get_editor_state()
//!             .is_some_and(|state| !state.selection().is_collapsed());
//!         UiNode::button("B", &props.theme, active)
//!     }
//! }
//! ```

use std::fmt;
use std::sync::Arc;

use inline_toolbar_core::{EditorState, GetEditorState, SetEditorState, StoreKey};

use crate::error::Result;
use crate::theme::ButtonStyles;

/// A renderable unit inside the toolbar.
///
/// Default structure entries and override content are both actions.
pub trait ToolbarAction<S: EditorState>: Send + Sync {
    /// Produce this action's UI for the current render.
    fn render(&self, props: &ActionProps<S>) -> UiNode;

    /// A short name for logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A shared action reference.
pub type SharedAction<S> = Arc<dyn ToolbarAction<S>>;

/// The closed set of UI nodes an action can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum UiNode {
    /// A pressable button.
    Button {
        label: String,
        class: String,
        active: bool,
    },
    /// A visual divider between groups of buttons.
    Separator,
    /// A single-line text input.
    Input {
        placeholder: String,
        value: String,
        class: String,
    },
    /// Plain text.
    Text(String),
    /// Several nodes rendered in order.
    Group(Vec<UiNode>),
}

impl UiNode {
    /// A button using the theme's button classes.
    pub fn button(label: impl Into<String>, theme: &ButtonStyles, active: bool) -> Self {
        let class = if active {
            format!("{} {}", theme.button, theme.active)
        } else {
            theme.button.clone()
        };
        UiNode::Button {
            label: label.into(),
            class,
            active,
        }
    }

    /// Count of leaf nodes, descending into groups.
    pub fn leaf_count(&self) -> usize {
        match self {
            UiNode::Group(children) => children.iter().map(UiNode::leaf_count).sum(),
            _ => 1,
        }
    }
}

/// Callback through which an action replaces or restores the panel content.
pub struct OverrideHandle<S: EditorState> {
    callback: Arc<dyn Fn(Option<SharedAction<S>>) + Send + Sync>,
}

impl<S: EditorState> OverrideHandle<S> {
    /// Wrap a callback.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(Option<SharedAction<S>>) + Send + Sync + 'static,
    {
        Self {
            callback: Arc::new(callback),
        }
    }

    /// Show `content` instead of the default structure, or restore the
    /// default structure with `None`.
    ///
    /// The action that installs an override is expected to clear it when it
    /// is done; the toolbar never clears it on its own.
    pub fn set(&self, content: Option<SharedAction<S>>) {
        (self.callback)(content);
    }

    /// Restore the default structure.
    pub fn clear(&self) {
        self.set(None);
    }
}

impl<S: EditorState> Clone for OverrideHandle<S> {
    fn clone(&self) -> Self {
        Self {
            callback: self.callback.clone(),
        }
    }
}

impl<S: EditorState> fmt::Debug for OverrideHandle<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverrideHandle").finish_non_exhaustive()
    }
}

/// Everything an action receives when it renders.
pub struct ActionProps<S: EditorState> {
    /// Button class names.
    pub theme: ButtonStyles,
    get_editor_state: Option<GetEditorState<S>>,
    set_editor_state: Option<SetEditorState<S>>,
    on_override_content: OverrideHandle<S>,
}

impl<S: EditorState> ActionProps<S> {
    /// Assemble props. The accessors are `None` until the editor provides them.
    pub fn new(
        theme: ButtonStyles,
        get_editor_state: Option<GetEditorState<S>>,
        set_editor_state: Option<SetEditorState<S>>,
        on_override_content: OverrideHandle<S>,
    ) -> Self {
        Self {
            theme,
            get_editor_state,
            set_editor_state,
            on_override_content,
        }
    }

    /// The current editor state.
    pub fn get_editor_state(&self) -> Option<S> {
        self.get_editor_state.as_ref().map(|get| get())
    }

    /// Replace the editor state.
    pub fn set_editor_state(&self, next: S) -> Result<()> {
        match &self.set_editor_state {
            Some(set) => {
                set(next);
                Ok(())
            }
            None => Err(inline_toolbar_core::Error::accessors_missing(StoreKey::SetEditorState).into()),
        }
    }

    /// Replace the panel content, or restore the default with `None`.
    pub fn on_override_content(&self, content: Option<SharedAction<S>>) {
        self.on_override_content.set(content);
    }

    /// A handle the action can keep past this render (e.g. in a callback).
    pub fn override_handle(&self) -> OverrideHandle<S> {
        self.on_override_content.clone()
    }
}

impl<S: EditorState> Clone for ActionProps<S> {
    fn clone(&self) -> Self {
        Self {
            theme: self.theme.clone(),
            get_editor_state: self.get_editor_state.clone(),
            set_editor_state: self.set_editor_state.clone(),
            on_override_content: self.on_override_content.clone(),
        }
    }
}
