//! A floating formatting toolbar anchored to the editor's text selection.
//!
//! The toolbar appears above a non-empty selection in a focused editor,
//! centered on it, and is pushed back inside the viewport when it would cross
//! an edge. A small indicator under the panel keeps pointing at the selection
//! after such a shift. Actions rendered inside the panel can temporarily
//! replace its content (a link-URL prompt, say) through an override handle.
//!
//! The crate is host-agnostic: layout queries go through [`HostEnvironment`],
//! editor state comes from an [`EditorStore`](inline_toolbar_core::EditorStore),
//! and rendering produces a plain [`RenderedToolbar`] value.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use inline_toolbar::{
//!     ActionProps, HostEnvironment, InlineToolbar, NodeId, PositionMode, Rect, ToolbarAction,
//!     UiNode,
//! };
//! use inline_toolbar_core::{EditorStore, SelectionSnapshot, TickQueue};
//!
//! struct Page;
//!
//! impl HostEnvironment for Page {
//!     fn viewport_width(&self) -> f32 { 1000.0 }
//!     fn bounding_rect(&self, _node: NodeId) -> Rect { Rect::new(0.0, 0.0, 1000.0, 800.0) }
//!     fn position_mode(&self, _node: NodeId) -> PositionMode { PositionMode::Static }
//!     fn parent(&self, _node: NodeId) -> Option<NodeId> { None }
//!     fn document_root(&self) -> NodeId { NodeId::new(0) }
//!     fn offset_width(&self, _node: NodeId) -> f32 { 200.0 }
//!     fn visible_selection_rect(&self) -> Option<Rect> {
//!         Some(Rect::new(480.0, 300.0, 40.0, 18.0))
//!     }
//! }
//!
//! struct Bold;
//!
//! impl ToolbarAction<SelectionSnapshot> for Bold {
//!     fn render(&self, props: &ActionProps<SelectionSnapshot>) -> UiNode {
//!         UiNode::button("B", &props.theme, false)
//!     }
//! }
//!
//! let ticks = Arc::new(TickQueue::new());
//! let store = Arc::new(EditorStore::<SelectionSnapshot>::new(ticks.clone()));
//! let toolbar = InlineToolbar::builder(store.clone(), Arc::new(Page))
//!     .with_action(Arc::new(Bold))
//!     .build()
//!     .unwrap();
//!
//! toolbar.mount();
//! toolbar.attach_node(NodeId::new(1));
//! store.selection_changed();
//! ticks.run_tick().unwrap();
//!
//! let frame = toolbar.render();
//! assert_eq!(frame.children.len(), 1);
//! assert_eq!(frame.style.position.map(|p| p.left), Some(500.0));
//! ```

mod action;
pub mod animation;
mod config;
mod error;
mod geometry;
mod host;
mod indicator;
mod override_slot;
pub mod positioning;
mod theme;
mod toolbar;
pub mod visibility;

pub use action::{ActionProps, OverrideHandle, SharedAction, ToolbarAction, UiNode};
pub use animation::{Easing, TransitionSpec};
pub use config::ToolbarConfig;
pub use error::{Result, ToolbarError};
pub use geometry::{AnchorPosition, Point, PositionMode, Rect, Size};
pub use host::{find_positioned_ancestor, reference_rect, HostEnvironment, NodeId};
pub use indicator::{IndicatorMarkers, IndicatorStyle};
pub use override_slot::{ContentSlot, SlotTransition};
pub use positioning::{compute_placement, EdgeOverflow, Placement};
pub use theme::{ButtonStyles, ToolbarStyles, ToolbarTheme};
pub use toolbar::{ContentKind, InlineToolbar, RenderedToolbar, ToolbarBuilder};
pub use visibility::{is_visible, PanelStyle, Transform, Visibility};
