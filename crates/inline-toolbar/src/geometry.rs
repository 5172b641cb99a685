//! Geometry types for toolbar placement.
//!
//! All rectangles are in viewport coordinates unless noted otherwise; an
//! [`AnchorPosition`] is relative to the toolbar's positioned ancestor.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle defined by origin (top-left) and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle. `x` is the left edge, `y` the top edge.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    /// Left edge x coordinate.
    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    /// Top edge y coordinate.
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    /// Right edge x coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size.width
    }

    /// Bottom edge y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size.height
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// Horizontal center.
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.origin.x + self.size.width / 2.0
    }
}

/// The toolbar's offset from its positioned ancestor.
///
/// `left` is the horizontal center the panel is translated around (the
/// panel renders with a -50% horizontal translate); `top` is the panel's top
/// edge.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnchorPosition {
    pub top: f32,
    pub left: f32,
}

impl AnchorPosition {
    /// Create an anchor position.
    #[inline]
    pub const fn new(top: f32, left: f32) -> Self {
        Self { top, left }
    }
}

/// A node's computed layout positioning mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionMode {
    /// Normal flow; does not establish a reference frame.
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

impl PositionMode {
    /// Whether a node in this mode is a reference frame for absolutely
    /// positioned descendants.
    #[inline]
    pub fn is_positioned(self) -> bool {
        !matches!(self, PositionMode::Static)
    }
}
