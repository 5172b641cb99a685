//! Host-environment geometry reads.
//!
//! The toolbar never owns a render tree. Everything it needs to know about
//! layout it asks the host through [`HostEnvironment`], addressing nodes by
//! opaque [`NodeId`]s the host hands out.

use crate::geometry::{PositionMode, Rect};

/// An opaque handle to a node in the host's render tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    /// Wrap a host-defined node identifier.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw u64 value of this node ID.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

/// Read-only layout queries answered by the host.
///
/// Every method reflects the host's state at call time. Implementations must
/// not call back into the toolbar.
pub trait HostEnvironment: Send + Sync {
    /// Current viewport width.
    fn viewport_width(&self) -> f32;

    /// A node's bounding rectangle in viewport coordinates.
    fn bounding_rect(&self, node: NodeId) -> Rect;

    /// A node's computed positioning mode.
    fn position_mode(&self, node: NodeId) -> PositionMode;

    /// A node's parent, or `None` at the top of the tree.
    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// The document root used as the reference frame of last resort.
    fn document_root(&self) -> NodeId;

    /// A node's rendered width. Zero before first layout.
    fn offset_width(&self, node: NodeId) -> f32;

    /// The bounding rectangle of the visible selection range, if any.
    fn visible_selection_rect(&self) -> Option<Rect>;
}

/// Find the nearest positioned ancestor, starting at `start` itself.
///
/// Returns `None` if nothing from `start` up to the top of the tree is
/// positioned.
pub fn find_positioned_ancestor<H>(host: &H, start: Option<NodeId>) -> Option<NodeId>
where
    H: HostEnvironment + ?Sized,
{
    let mut current = start;
    while let Some(node) = current {
        if host.position_mode(node).is_positioned() {
            return Some(node);
        }
        current = host.parent(node);
    }
    None
}

/// The rectangle of the reference frame the toolbar is positioned in.
///
/// Walks up from the toolbar's parent to the first positioned node and falls
/// back to the document root when there is none.
pub fn reference_rect<H>(host: &H, toolbar: NodeId) -> Rect
where
    H: HostEnvironment + ?Sized,
{
    let frame = find_positioned_ancestor(host, host.parent(toolbar))
        .unwrap_or_else(|| host.document_root());
    host.bounding_rect(frame)
}
