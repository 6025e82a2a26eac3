//! The player avatar: input-driven run speed, jumping, stomp detection

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::enemy::Enemy;
use super::motion::Body;
use crate::consts::*;
use crate::error::Result;
use crate::lerp;

/// Horizontal input for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    #[default]
    Idle,
    Right,
}

impl Direction {
    /// -1, 0 or +1
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Direction::Left => -1.0,
            Direction::Idle => 0.0,
            Direction::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    pub facing_right: bool,
    /// Horizontal speed the player is steering toward this tick
    target_vel_x: f32,
}

impl Player {
    pub fn new(spawn: Vec2, size: Vec2) -> Result<Self> {
        Ok(Self {
            body: Body::new(spawn, size, "player")?,
            facing_right: true,
            target_vel_x: 0.0,
        })
    }

    #[inline]
    pub fn hitbox(&self) -> Rect {
        self.body.hitbox()
    }

    /// Set this tick's steering direction.
    ///
    /// Facing flips as soon as a new direction is pressed, unless the player
    /// is already clearly moving that way.
    pub fn set_horizontal_intent(&mut self, dir: Direction) {
        match dir {
            Direction::Left if self.body.vel.x > -VELOCITY_DEAD_ZONE => self.facing_right = false,
            Direction::Right if self.body.vel.x < VELOCITY_DEAD_ZONE => self.facing_right = true,
            _ => {}
        }
        self.target_vel_x = dir.sign() * MOVE_SPEED;
    }

    /// Jump if standing on something. Returns whether the jump happened.
    pub fn jump(&mut self) -> bool {
        if !self.body.grounded {
            return false;
        }
        self.body.vel.y = JUMP_FORCE;
        self.body.grounded = false;
        true
    }

    /// Run speed steering, then the shared integration step
    pub fn update(&mut self, platforms: &[Rect]) {
        let mut vx = lerp(self.body.vel.x, self.target_vel_x, ACCEL_LERP);
        if self.target_vel_x == 0.0 {
            vx *= FRICTION;
        }
        vx = vx.clamp(-MAX_SPEED, MAX_SPEED);
        if vx.abs() < VELOCITY_DEAD_ZONE {
            vx = 0.0;
        }
        self.body.vel.x = vx;

        self.body.integrate(platforms);
    }

    /// Falling, with the feet above the enemy's vertical midpoint.
    ///
    /// Uses the enemy's position after its own update for this tick.
    pub fn is_stomping_onto(&self, enemy: &Enemy) -> bool {
        let e = enemy.hitbox();
        self.body.vel.y > 0.0 && self.body.bottom() < e.y + e.h / 2.0
    }

    pub fn reset(&mut self) {
        self.body.reset(Vec2::ZERO);
        self.facing_right = true;
        self.target_vel_x = 0.0;
    }
}
