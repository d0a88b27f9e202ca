// Copyright 2025 Dustin McAfee
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Shape geometry shared by every encoder.
//!
//! A [`Scene`] is an ordered list of shapes. Shapes later in the list are
//! drawn over earlier ones, so [`Scene::region_at`] walks the list backwards
//! and returns the first hit. The reference scene draws, in order:
//!
//! ```text
//! rectangle  x 50..250, y 50..150
//! circle     centre (400, 150), radius 100, scanned over x 300..500, y 50..250
//! line       y = 200, x 50..500
//! ```
//!
//! All ranges are half-open. Coordinates outside the canvas are never
//! queried, which clamps every shape to the canvas independently.

use crate::EncodeError;

/// Frame dimensions in pixels. Both are non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
}

impl Canvas {
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidDimension`] if either side is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, EncodeError> {
        if width == 0 || height == 0 {
            return Err(EncodeError::InvalidDimension { width, height });
        }
        Ok(Self {
            width: width as usize,
            height: height as usize,
        })
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The whole canvas as a rectangle.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

/// Half-open rectangle `x0..x1` x `y0..y1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: usize,
    pub y0: usize,
    pub x1: usize,
    pub y1: usize,
}

impl Rect {
    #[must_use]
    pub const fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        self.x0 <= x && x < self.x1 && self.y0 <= y && y < self.y1
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Intersection with the canvas, or `None` if nothing remains.
    #[must_use]
    pub fn clamp(&self, canvas: &Canvas) -> Option<Rect> {
        let clamped = Rect {
            x0: self.x0,
            y0: self.y0,
            x1: self.x1.min(canvas.width()),
            y1: self.y1.min(canvas.height()),
        };
        (!clamped.is_empty()).then_some(clamped)
    }

    /// Smallest rectangle covering both.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }
}

/// Filled circle, tested only inside its scan window.
///
/// The window is half-open, so the rightmost and bottom points of the
/// circle (`cx + r`, `cy + r`) are never painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub cx: usize,
    pub cy: usize,
    pub r: usize,
    pub window: Rect,
}

impl Circle {
    /// Circle scanned over `cx - r..cx + r` x `cy - r..cy + r`.
    #[must_use]
    pub const fn new(cx: usize, cy: usize, r: usize) -> Self {
        Self {
            cx,
            cy,
            r,
            window: Rect::new(
                cx.saturating_sub(r),
                cy.saturating_sub(r),
                cx.saturating_add(r),
                cy.saturating_add(r),
            ),
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        if !self.window.contains(x, y) {
            return false;
        }
        let dx = x as i64 - self.cx as i64;
        let dy = y as i64 - self.cy as i64;
        let r = self.r as i64;
        dx * dx + dy * dy <= r * r
    }
}

/// One-pixel-high horizontal line at row `y`, spanning `x0..x1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HLine {
    pub y: usize,
    pub x0: usize,
    pub x1: usize,
}

impl HLine {
    #[must_use]
    pub const fn new(y: usize, x0: usize, x1: usize) -> Self {
        Self { y, x0, x1 }
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, x: usize, y: usize) -> bool {
        y == self.y && self.x0 <= x && x < self.x1
    }
}

/// What covers a pixel. Each region has its own colour per format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    Background,
    Rectangle,
    Circle,
    Line,
}

impl Region {
    /// Every region, background first.
    pub const ALL: [Region; 4] = [
        Region::Background,
        Region::Rectangle,
        Region::Circle,
        Region::Line,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Rectangle(Rect),
    Circle(Circle),
    HorizontalLine(HLine),
}

impl Shape {
    /// The colour region this shape paints.
    #[must_use]
    pub const fn region(&self) -> Region {
        match self {
            Shape::Rectangle(_) => Region::Rectangle,
            Shape::Circle(_) => Region::Circle,
            Shape::HorizontalLine(_) => Region::Line,
        }
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        match self {
            Shape::Rectangle(rect) => rect.contains(x, y),
            Shape::Circle(circle) => circle.contains(x, y),
            Shape::HorizontalLine(line) => line.contains(x, y),
        }
    }

    /// Every pixel the shape can paint lies inside this rectangle.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        match self {
            Shape::Rectangle(rect) => *rect,
            Shape::Circle(circle) => circle.window,
            Shape::HorizontalLine(line) => Rect::new(line.x0, line.y, line.x1, line.y.saturating_add(1)),
        }
    }
}

/// Shapes in draw order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Red rectangle, then blue circle, then green line.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(vec![
            Shape::Rectangle(Rect::new(50, 50, 250, 150)),
            Shape::Circle(Circle::new(400, 150, 100)),
            Shape::HorizontalLine(HLine::new(200, 50, 500)),
        ])
    }

    /// A scene drawn in the given order; later shapes cover earlier ones.
    #[must_use]
    pub fn new(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Topmost region at `(x, y)`.
    #[inline]
    #[must_use]
    pub fn region_at(&self, x: usize, y: usize) -> Region {
        self.shapes
            .iter()
            .rev()
            .find(|shape| shape.contains(x, y))
            .map_or(Region::Background, Shape::region)
    }

    /// Bounding box of everything the scene paints on `canvas`.
    ///
    /// Pixels outside it are background. `None` when no shape reaches the
    /// canvas.
    #[must_use]
    pub fn coverage(&self, canvas: &Canvas) -> Option<Rect> {
        self.shapes
            .iter()
            .filter_map(|shape| shape.bounds().clamp(canvas))
            .reduce(|acc, rect| acc.union(&rect))
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::reference()
    }
}
