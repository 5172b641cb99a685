//! Visibility derivation and the panel's presentation style.
//!
//! Visibility is never stored. Every render derives it from the current
//! selection and whether override content is active.

use inline_toolbar_core::Selection;

use crate::animation::TransitionSpec;
use crate::config::ToolbarConfig;
use crate::geometry::AnchorPosition;

/// Whether the panel should be shown.
///
/// Override content always shows. Otherwise the selection must be a
/// non-empty range in a focused editor. A missing selection (editor not wired
/// yet) counts as collapsed and unfocused.
pub fn is_visible<Sel: Selection>(selection: Option<&Sel>, overridden: bool) -> bool {
    overridden || selection.is_some_and(|sel| !sel.is_collapsed() && sel.has_focus())
}

/// Presentation visibility of the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    Visible,
    #[default]
    Hidden,
}

/// The panel's transform: always centered on its anchor horizontally, scaled
/// between 0 (hidden) and 1 (shown).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translate_x_percent: f32,
    pub scale: f32,
}

impl Transform {
    /// Centered at full size.
    pub const SHOWN: Transform = Transform {
        translate_x_percent: -50.0,
        scale: 1.0,
    };

    /// Centered and collapsed to nothing.
    pub const COLLAPSED: Transform = Transform {
        translate_x_percent: -50.0,
        scale: 0.0,
    };
}

/// Everything a host needs to lay out and paint the panel root.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelStyle {
    /// Offset from the positioned ancestor; `None` until the first placement.
    pub position: Option<AnchorPosition>,
    pub visibility: Visibility,
    pub transform: Transform,
    /// Present only while shown; hiding is instant.
    pub transition: Option<TransitionSpec>,
    /// Whether the panel may receive pointer and keyboard input.
    pub interactive: bool,
    /// Whether the panel should be skipped by layout and accessibility queries.
    pub hidden_from_layout: bool,
}

impl PanelStyle {
    /// Derive the style for a panel at `position`.
    pub fn derive(position: Option<AnchorPosition>, visible: bool, config: &ToolbarConfig) -> Self {
        if visible {
            Self {
                position,
                visibility: Visibility::Visible,
                transform: Transform::SHOWN,
                transition: Some(TransitionSpec::grow(config.transition_duration())),
                interactive: true,
                hidden_from_layout: false,
            }
        } else {
            Self {
                position,
                visibility: Visibility::Hidden,
                transform: Transform::COLLAPSED,
                transition: None,
                interactive: false,
                hidden_from_layout: true,
            }
        }
    }

    /// Whether this style shows the panel.
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }
}
