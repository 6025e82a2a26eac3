//! Axis-aligned rectangles and the overlap test every actor shares
//!
//! Positions are top-left corners, y grows downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Platforms are plain rectangles that never move
pub type Platform = Rect;

impl Rect {
    /// Build a rectangle, rejecting non-positive (or NaN) sizes
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Result<Self> {
        Self { x, y, w, h }.validated("rect")
    }

    /// Rectangle at `pos` with `size`, no validation (for already-validated actors)
    #[inline]
    pub fn at(pos: Vec2, size: Vec2) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            w: size.x,
            h: size.y,
        }
    }

    /// Return `self` if its size is positive, otherwise an error naming `what`
    pub fn validated(self, what: &'static str) -> Result<Self> {
        check_size(what, self.size())?;
        Ok(self)
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }
}

/// Reject sizes that are not strictly positive; NaN fails as well
pub(crate) fn check_size(what: &'static str, size: Vec2) -> Result<()> {
    if size.x > 0.0 && size.y > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidSize {
            what,
            w: size.x,
            h: size.y,
        })
    }
}

/// Strict AABB overlap: rectangles that only share an edge do not overlap
#[inline]
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h).unwrap()
    }

    #[test]
    fn test_overlap_basic() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
        assert!(overlaps(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        // Shares the right edge
        assert!(!overlaps(&a, &rect(10.0, 0.0, 10.0, 10.0)));
        // Shares the bottom edge
        assert!(!overlaps(&a, &rect(0.0, 10.0, 10.0, 10.0)));
        // Only a corner in common
        assert!(!overlaps(&a, &rect(10.0, 10.0, 5.0, 5.0)));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = rect(0.0, 0.0, 100.0, 100.0);
        let inner = rect(40.0, 40.0, 1.0, 1.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    #[test]
    fn test_rejects_non_positive_size() {
        assert!(matches!(
            Rect::new(0.0, 0.0, 0.0, 5.0),
            Err(Error::InvalidSize { .. })
        ));
        assert!(Rect::new(0.0, 0.0, 5.0, -1.0).is_err());
        assert!(Rect::new(0.0, 0.0, f32::NAN, 5.0).is_err());
    }

    #[test]
    fn test_edges() {
        let r = rect(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(Rect::at(r.pos(), r.size()), r);
    }
}
