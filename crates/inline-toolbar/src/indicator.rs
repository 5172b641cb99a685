//! The pointer indicator under the panel.
//!
//! The indicator is drawn as two symmetric markers (a caret made of a fill
//! and an outline). Both always share the same horizontal offset, measured
//! from the panel's own left edge. The offset is stored per toolbar instance
//! and replaced on every placement; nothing is shared between toolbars.

/// Style of one indicator marker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorStyle {
    /// Offset from the panel's left edge.
    pub left: f32,
}

/// The two markers forming the indicator.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorMarkers {
    pub before: IndicatorStyle,
    pub after: IndicatorStyle,
}

impl IndicatorMarkers {
    /// Both markers at `left`.
    pub fn at(left: f32) -> Self {
        let style = IndicatorStyle { left };
        Self {
            before: style,
            after: style,
        }
    }

    /// The shared offset.
    pub fn left(&self) -> f32 {
        self.before.left
    }
}
