//! Placement math for the inline toolbar.
//!
//! Given the selection rectangle, the reference frame's rectangle, and the
//! toolbar's rendered width, compute where the panel's horizontal center and
//! top edge go, and where its pointer indicator sits so it keeps pointing at
//! the selection after the panel is pushed back inside the viewport.
//!
//! Everything here is pure; the controller feeds it host reads.

use crate::config::ToolbarConfig;
use crate::geometry::{AnchorPosition, Rect};

/// Which viewport edge the panel would have crossed, and by how much.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EdgeOverflow {
    /// The panel fits.
    #[default]
    None,
    /// The panel would cross the left edge by this many units.
    Left(f32),
    /// The panel would cross the right edge by this many units.
    Right(f32),
}

impl EdgeOverflow {
    /// The overflow magnitude, 0 when the panel fits.
    pub fn amount(self) -> f32 {
        match self {
            EdgeOverflow::None => 0.0,
            EdgeOverflow::Left(amount) | EdgeOverflow::Right(amount) => amount,
        }
    }
}

/// The result of one placement computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Where the panel goes, relative to the reference frame.
    pub anchor: AnchorPosition,
    /// Indicator offset from the panel's own left edge.
    pub indicator_left: f32,
    /// Which edge forced a shift, if any.
    pub overflow: EdgeOverflow,
}

/// Anchor above the horizontal center of the selection, before any overflow
/// correction.
///
/// The vertical reservation is the configured toolbar height, not a measured
/// one; a panel taller than that overlaps the selection.
pub fn raw_anchor(selection: Rect, reference: Rect, toolbar_height: f32) -> AnchorPosition {
    AnchorPosition {
        top: selection.top() - reference.top() - toolbar_height,
        left: selection.left() - reference.left() + selection.width() / 2.0,
    }
}

/// Space left of and right of the panel if it were centered at `anchor_left`.
///
/// Negative values mean the panel would cross that edge.
pub fn clearances(anchor_left: f32, toolbar_width: f32, viewport_width: f32, margin: f32) -> (f32, f32) {
    let half = (toolbar_width + margin) / 2.0;
    (anchor_left - half, viewport_width - anchor_left - half)
}

/// Compute the full placement.
///
/// Left overflow is checked before right overflow; a panel wider than the
/// viewport is pushed right. A zero `toolbar_width` (not yet laid out) is
/// accepted and produces a degenerate but harmless result that corrects itself
/// on the next recomputation.
pub fn compute_placement(
    selection: Rect,
    reference: Rect,
    toolbar_width: f32,
    viewport_width: f32,
    config: &ToolbarConfig,
) -> Placement {
    let mut anchor = raw_anchor(selection, reference, config.toolbar_height);
    let (left_clearance, right_clearance) =
        clearances(anchor.left, toolbar_width, viewport_width, config.edge_margin);

    if left_clearance < 0.0 {
        anchor.left += left_clearance.abs();
        Placement {
            anchor,
            indicator_left: left_clearance + anchor.left - config.indicator_inset,
            overflow: EdgeOverflow::Left(left_clearance.abs()),
        }
    } else if right_clearance < 0.0 {
        anchor.left -= right_clearance.abs();
        Placement {
            anchor,
            indicator_left: right_clearance.abs() + toolbar_width / 2.0,
            overflow: EdgeOverflow::Right(right_clearance.abs()),
        }
    } else {
        Placement {
            anchor,
            indicator_left: toolbar_width / 2.0,
            overflow: EdgeOverflow::None,
        }
    }
}
