//! Viewport and element geometry

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in page coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn area(&self) -> f32 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Grow the rect outward by `margin` on every side
    pub fn expand(&self, margin: f32) -> Self {
        Self {
            x: self.x - margin,
            y: self.y - margin,
            width: self.width + margin * 2.0,
            height: self.height + margin * 2.0,
        }
    }

    /// The overlapping region of two rects (zero-sized when disjoint)
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x0 = self.x.max(other.x);
        let y0 = self.y.max(other.y);
        let x1 = (self.x + self.width).min(other.x + other.width);
        let y1 = (self.y + self.height).min(other.y + other.height);

        Rect {
            x: x0,
            y: y0,
            width: (x1 - x0).max(0.0),
            height: (y1 - y0).max(0.0),
        }
    }

    /// Fraction of this rect's area visible inside `root` (0.0 to 1.0)
    ///
    /// Degenerate rects report 0.0 rather than dividing by zero.
    pub fn intersection_ratio(&self, root: &Rect) -> f32 {
        let own = self.area();
        if own <= 0.0 {
            return 0.0;
        }
        self.intersection(root).area() / own
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersection_of_disjoint_rects_is_empty() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(200.0, 200.0, 50.0, 50.0);
        assert_eq!(a.intersection(&b).area(), 0.0);
        assert_eq!(a.intersection_ratio(&b), 0.0);
    }

    #[test]
    fn fully_contained_rect_has_ratio_one() {
        let root = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let inner = Rect::new(10.0, 10.0, 100.0, 100.0);
        assert_eq!(inner.intersection_ratio(&root), 1.0);
    }

    #[test]
    fn half_visible_rect_has_ratio_half() {
        let root = Rect::new(0.0, 0.0, 100.0, 100.0);
        let target = Rect::new(50.0, 0.0, 100.0, 100.0);
        assert!((target.intersection_ratio(&root) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn expand_grows_all_sides() {
        let r = Rect::new(10.0, 10.0, 100.0, 50.0).expand(50.0);
        assert_eq!(r.x, -40.0);
        assert_eq!(r.y, -40.0);
        assert_eq!(r.width, 200.0);
        assert_eq!(r.height, 150.0);
    }

    #[test]
    fn degenerate_rect_reports_zero_ratio() {
        let root = Rect::new(0.0, 0.0, 100.0, 100.0);
        let empty = Rect::new(10.0, 10.0, 0.0, 0.0);
        assert_eq!(empty.intersection_ratio(&root), 0.0);
    }
}
