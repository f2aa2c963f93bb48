//! Geometry value types shared by the tree and the layout engine.
//!
//! All values are in layout units. The engine never reconciles a viewport, so
//! the coordinate space of a [`Rect`] is whatever the root was given.

use glam::Vec2;

/// A width/height pair.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Grow the size by a thickness on every side.
    pub fn inflate(&self, thickness: Thickness) -> Size {
        Size::new(
            self.width + thickness.horizontal(),
            self.height + thickness.vertical(),
        )
    }
}

impl From<Vec2> for Size {
    fn from(v: Vec2) -> Self {
        Size::new(v.x, v.y)
    }
}

impl From<Size> for Vec2 {
    fn from(s: Size) -> Self {
        Vec2::new(s.width, s.height)
    }
}

/// Axis-aligned rectangle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    /// Create a rect with position and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rect from position and size vectors.
    pub fn from_vecs(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    /// A rect at the origin with the given size.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// True when either extent is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Compute the overlapping area with another rect, if any.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x1 < x2 && y1 < y2 {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Compute the bounding box of both rects.
    pub fn union(&self, other: &Rect) -> Rect {
        let x1 = self.x.min(other.x);
        let y1 = self.y.min(other.y);
        let x2 = self.right().max(other.right());
        let y2 = self.bottom().max(other.bottom());
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }

    /// Shrink the rect by a thickness. Extents never go below zero.
    pub fn deflate(&self, thickness: Thickness) -> Rect {
        Rect::new(
            self.x + thickness.left,
            self.y + thickness.top,
            (self.width - thickness.horizontal()).max(0.0),
            (self.height - thickness.vertical()).max(0.0),
        )
    }

    /// Round position and size to whole units.
    pub fn round(&self) -> Rect {
        let x = self.x.round();
        let y = self.y.round();
        Rect::new(x, y, self.right().round() - x, self.bottom().round() - y)
    }
}

/// Four-sided thickness used for margins and padding.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thickness {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Thickness {
    pub const ZERO: Thickness = Thickness::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Create uniform thickness.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create symmetric thickness.
    pub const fn symmetric(horizontal: f32, vertical: f32) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Total horizontal thickness.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical thickness.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

/// Paint color. Opaque to the layout engine.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from 8-bit RGB values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}
