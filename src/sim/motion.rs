//! Shared actor motion: gravity, integration, and platform resolution
//!
//! Every "was above / was left of" test uses the body's position from before
//! the move, so a body moving faster than its own size per tick can pass
//! through thin platforms. Platforms are always scanned in list order.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, check_size};
use crate::consts::GRAVITY;
use crate::error::Result;

/// Physical state common to the player and enemies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Body {
    /// Top-left corner of the hitbox
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    /// Where `reset` puts the body back
    pub spawn: Vec2,
    /// True only if this tick's vertical move ended on a platform top
    pub grounded: bool,
}

impl Body {
    pub fn new(spawn: Vec2, size: Vec2, what: &'static str) -> Result<Self> {
        check_size(what, size)?;
        Ok(Self {
            pos: spawn,
            vel: Vec2::ZERO,
            size,
            spawn,
            grounded: false,
        })
    }

    #[inline]
    pub fn hitbox(&self) -> Rect {
        Rect::at(self.pos, self.size)
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Back to spawn, at rest, airborne
    pub fn reset(&mut self, vel: Vec2) {
        self.pos = self.spawn;
        self.vel = vel;
        self.grounded = false;
    }

    /// Add one tick of gravity. Fall speed is deliberately uncapped.
    #[inline]
    pub fn apply_gravity(&mut self) {
        self.vel.y += GRAVITY;
    }

    /// Would moving to `next` land on top of `p`?
    ///
    /// `span_x` is the left edge used for the horizontal span test; the
    /// player tests at its next x, enemies at their current x.
    #[inline]
    pub fn lands_on(&self, span_x: f32, next_y: f32, p: &Rect) -> bool {
        span_x + self.size.x > p.x
            && span_x < p.right()
            && next_y + self.size.y > p.y
            && self.bottom() <= p.y
    }

    /// Would moving to `next` drive the head into the underside of `p`?
    #[inline]
    pub fn bumps_head(&self, next: Vec2, p: &Rect) -> bool {
        next.x + self.size.x > p.x
            && next.x < p.right()
            && next.y < p.bottom()
            && self.pos.y >= p.bottom()
    }

    /// Vertical band of a body at height `y` overlaps `p`
    #[inline]
    pub fn spans_vertically(&self, y: f32, p: &Rect) -> bool {
        y + self.size.y > p.y && y < p.bottom()
    }

    /// Would moving to `next_x` push into the left face of `p`?
    #[inline]
    pub fn hits_left_face(&self, next_x: f32, p: &Rect) -> bool {
        next_x + self.size.x > p.x && self.pos.x + self.size.x <= p.x
    }

    /// Would moving to `next_x` push into the right face of `p`?
    #[inline]
    pub fn hits_right_face(&self, next_x: f32, p: &Rect) -> bool {
        next_x < p.right() && self.pos.x >= p.right()
    }

    /// Full integration step used by the player.
    ///
    /// Each platform is resolved vertically and then horizontally before the
    /// next one is looked at, so the horizontal test sees the height that
    /// earlier platforms already corrected. A later matching platform
    /// overrides an earlier one.
    pub fn integrate(&mut self, platforms: &[Rect]) {
        self.apply_gravity();
        self.grounded = false;
        let mut next = self.pos + self.vel;

        for p in platforms {
            if self.lands_on(next.x, next.y, p) {
                self.vel.y = 0.0;
                next.y = p.y - self.size.y;
                self.grounded = true;
            } else if self.bumps_head(next, p) {
                self.vel.y = 0.0;
                next.y = p.bottom();
            }

            if self.spans_vertically(next.y, p) {
                if self.hits_left_face(next.x, p) {
                    self.vel.x = 0.0;
                    next.x = p.x - self.size.x;
                } else if self.hits_right_face(next.x, p) {
                    self.vel.x = 0.0;
                    next.x = p.right();
                }
            }
        }

        self.pos = next;

        // Left edge of the world; there is no right wall
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(x, y, w, h).unwrap()
    }

    fn body(x: f32, y: f32) -> Body {
        Body::new(Vec2::new(x, y), Vec2::new(40.0, 40.0), "body").unwrap()
    }

    #[test]
    fn test_rejects_bad_size() {
        assert!(Body::new(Vec2::ZERO, Vec2::new(0.0, 10.0), "body").is_err());
        assert!(Body::new(Vec2::ZERO, Vec2::new(10.0, -2.0), "body").is_err());
    }

    #[test]
    fn test_falls_without_platforms() {
        let mut b = body(0.0, 0.0);
        for _ in 0..10 {
            b.integrate(&[]);
            assert!(!b.grounded);
        }
        // Fall speed keeps growing: 10 ticks of gravity
        assert!((b.vel.y - 6.0).abs() < 1e-4);
    }

    #[test]
    fn test_lands_and_stays() {
        let ground = [rect(0.0, 360.0, 3000.0, 40.0)];
        let mut b = body(100.0, 100.0);
        for _ in 0..60 {
            b.integrate(&ground);
        }
        assert_eq!(b.pos.y, 320.0);
        assert!(b.grounded);

        for _ in 0..100 {
            b.integrate(&ground);
            assert_eq!(b.pos.y, 320.0);
            assert!(b.grounded);
            assert_eq!(b.vel.y, 0.0);
        }
    }

    #[test]
    fn test_head_bump() {
        let ceiling = [rect(0.0, 0.0, 200.0, 20.0)];
        let mut b = body(50.0, 25.0);
        b.vel.y = -10.0;
        b.integrate(&ceiling);
        assert_eq!(b.pos.y, 20.0);
        assert_eq!(b.vel.y, 0.0);
        assert!(!b.grounded);
    }

    #[test]
    fn test_side_collision_from_left_and_right() {
        let wall = [rect(100.0, 0.0, 20.0, 100.0)];

        let mut b = body(55.0, 30.0);
        b.vel.x = 10.0;
        b.integrate(&wall);
        assert_eq!(b.pos.x, 60.0);
        assert_eq!(b.vel.x, 0.0);

        let mut b = body(125.0, 30.0);
        b.vel.x = -10.0;
        b.integrate(&wall);
        assert_eq!(b.pos.x, 120.0);
        assert_eq!(b.vel.x, 0.0);
    }

    #[test]
    fn test_left_world_clamp() {
        let mut b = body(2.0, 0.0);
        b.vel.x = -5.0;
        b.integrate(&[]);
        assert_eq!(b.pos.x, 0.0);
        assert_eq!(b.vel.x, 0.0);
    }

    #[test]
    fn test_no_right_world_clamp() {
        let mut b = body(5000.0, 0.0);
        b.vel.x = 5.0;
        b.integrate(&[]);
        assert_eq!(b.pos.x, 5005.0);
    }

    #[test]
    fn test_platform_order_is_significant() {
        // A ledge tucked against a wall: landing on the ledge depends on
        // whether the wall has already pushed the body back this tick.
        let ledge = rect(102.0, 50.0, 50.0, 20.0);
        let wall = rect(100.0, 0.0, 20.0, 200.0);

        let mut b = body(55.0, 0.0);
        b.vel = Vec2::new(10.0, 20.0);
        b.integrate(&[ledge, wall]);
        assert_eq!(b.pos, Vec2::new(60.0, 10.0));
        assert!(b.grounded);

        let mut b = body(55.0, 0.0);
        b.vel = Vec2::new(10.0, 20.0);
        b.integrate(&[wall, ledge]);
        assert_eq!(b.pos.x, 60.0);
        assert!(!b.grounded);
    }

    #[test]
    fn test_fast_diagonal_tunnels_small_platform() {
        // Known approximation: no swept test, so a fast diagonal move can
        // skip over a platform corner entirely.
        let block = [rect(100.0, 100.0, 20.0, 20.0)];
        let mut b = Body::new(Vec2::new(80.0, 80.0), Vec2::new(10.0, 10.0), "body").unwrap();
        b.vel = Vec2::new(40.0, 40.0);
        b.integrate(&block);
        assert_eq!(b.pos.x, 120.0);
        assert!(b.pos.y > 120.0);
        assert!(!b.grounded);
    }
}
