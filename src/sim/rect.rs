//! Axis-aligned rectangle geometry for bricks, ball and pad
//!
//! Screen space: +x right, +y down. A rectangle is anchored at its top-left
//! corner (`pos`) and extends by `width`/`height`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// In-place vector operations that return `&mut Self` so they can be chained,
/// e.g. `velocity.invert_x().invert_y()`.
///
/// Arithmetic (`+=`, `-=`, `*=`) is left to glam's operators.
pub trait PointExt {
    fn set(&mut self, x: f32, y: f32) -> &mut Self;
    fn invert_x(&mut self) -> &mut Self;
    fn invert_y(&mut self) -> &mut Self;
    fn invert(&mut self) -> &mut Self;
}

impl PointExt for Vec2 {
    #[inline]
    fn set(&mut self, x: f32, y: f32) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    #[inline]
    fn invert_x(&mut self) -> &mut Self {
        self.x = -self.x;
        self
    }

    #[inline]
    fn invert_y(&mut self) -> &mut Self {
        self.y = -self.y;
        self
    }

    #[inline]
    fn invert(&mut self) -> &mut Self {
        self.invert_x().invert_y()
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0 && height >= 0.0, "negative rect size");
        Self {
            pos: Vec2::new(x, y),
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    #[inline]
    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    #[inline]
    pub fn half_height(&self) -> f32 {
        self.height * 0.5
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.half_width()
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.half_height()
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }

    pub fn top_left(&self) -> Vec2 {
        self.pos
    }

    pub fn bottom_right(&self) -> Vec2 {
        Vec2::new(self.right(), self.bottom())
    }

    /// Corners in order: top-left, top-right, bottom-left, bottom-right
    pub fn corners(&self) -> [Vec2; 4] {
        [
            Vec2::new(self.left(), self.top()),
            Vec2::new(self.right(), self.top()),
            Vec2::new(self.left(), self.bottom()),
            Vec2::new(self.right(), self.bottom()),
        ]
    }

    /// Strict containment: points lying exactly on an edge are outside.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > self.left() && y > self.top() && x < self.right() && y < self.bottom()
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        self.contains(p.x, p.y)
    }

    /// True when both the top-left and bottom-right corners of `other` are
    /// strictly inside.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains_point(other.top_left()) && self.contains_point(other.bottom_right())
    }

    /// True when any corner of `other` lies strictly inside `self`.
    ///
    /// This is a corner test, not an overlap test. It is not symmetric:
    /// `a.collides(&b)` can differ from `b.collides(&a)`, and it reports no
    /// collision when `other` fully encloses `self`, or when the two only
    /// cross like a plus sign. The game always tests a small ball against
    /// larger bricks and pad (`brick.collides(&ball)`), where the corner
    /// test is enough.
    pub fn collides(&self, other: &Rect) -> bool {
        other.corners().iter().any(|&c| self.contains_point(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_point_chaining() {
        let mut v = Vec2::new(3.0, -4.0);
        v.invert_x().invert_y();
        assert_eq!(v, Vec2::new(-3.0, 4.0));

        v.set(1.0, 2.0).invert();
        assert_eq!(v, Vec2::new(-1.0, -2.0));
        assert_eq!(Vec2::new(3.0, 4.0).length(), 5.0);
    }

    #[test]
    fn test_rect_accessors() {
        let r = Rect::new(10.0, 20.0, 50.0, 20.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.right(), 60.0);
        assert_eq!(r.bottom(), 40.0);
        assert_eq!(r.half_width(), 25.0);
        assert_eq!(r.half_height(), 10.0);
        assert_eq!(r.center(), Vec2::new(35.0, 30.0));
    }

    #[test]
    fn test_contains_is_strict() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(5.0, 5.0));
        assert!(!r.contains(0.0, 5.0));
        assert!(!r.contains(10.0, 5.0));
        assert!(!r.contains(5.0, 0.0));
        assert!(!r.contains(5.0, 10.0));
        assert!(!r.contains(0.0, 0.0));
    }

    #[test]
    fn test_contains_rect() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 20.0, 20.0)));
        assert!(!outer.contains_rect(&Rect::new(90.0, 90.0, 20.0, 20.0)));
        // Touching the edge is not containment
        assert!(!outer.contains_rect(&Rect::new(0.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn test_collides_small_inside_large() {
        let brick = Rect::new(0.0, 0.0, 50.0, 20.0);
        let ball = Rect::new(45.0, 15.0, 10.0, 10.0);
        assert!(brick.collides(&ball));
        assert!(!brick.collides(&Rect::new(60.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn test_collides_is_corner_only() {
        let big = Rect::new(0.0, 0.0, 100.0, 100.0);
        let small = Rect::new(40.0, 40.0, 10.0, 10.0);
        // Every corner of `small` is inside `big`...
        assert!(big.collides(&small));
        // ...but no corner of `big` is inside `small`.
        assert!(!small.collides(&big));

        // A plus-shaped crossing has no corner inside either rect
        let wide = Rect::new(0.0, 40.0, 100.0, 10.0);
        let tall = Rect::new(40.0, 0.0, 10.0, 100.0);
        assert!(!wide.collides(&tall));
        assert!(!tall.collides(&wide));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-100.0f32..100.0, -100.0f32..100.0, 0.0f32..80.0, 0.0f32..80.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_collides_matches_corner_containment(a in rect_strategy(), b in rect_strategy()) {
            let any_corner = b.corners().iter().any(|c| a.contains(c.x, c.y));
            prop_assert_eq!(a.collides(&b), any_corner);
        }

        #[test]
        fn prop_edge_points_never_contained(r in rect_strategy(), t in 0.0f32..=1.0) {
            let x = r.left() + r.width * t;
            prop_assert!(!r.contains(x, r.top()));
            prop_assert!(!r.contains(x, r.bottom()));
            let y = r.top() + r.height * t;
            prop_assert!(!r.contains(r.left(), y));
            prop_assert!(!r.contains(r.right(), y));
        }
    }
}
