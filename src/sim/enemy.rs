//! Patrolling enemies
//!
//! Enemies walk at a constant speed and turn around when the ground runs out
//! ahead of them, when they walk into a wall, or at the left edge of the
//! world. A stomp squashes them for a short while; after that they are gone
//! for the rest of the session. Neither state moves or interacts.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::motion::Body;
use crate::consts::*;
use crate::error::Result;

/// Lifecycle of an enemy within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyState {
    /// Walking back and forth
    Patrolling,
    /// Flattened by a stomp, shown for `ticks_left` more ticks
    Stomped { ticks_left: u32 },
    /// Gone until the session resets
    Dead,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub body: Body,
    pub facing_right: bool,
    pub state: EnemyState,
}

impl Enemy {
    /// New enemy at `spawn`, walking left
    pub fn new(spawn: Vec2, size: Vec2) -> Result<Self> {
        let mut body = Body::new(spawn, size, "enemy")?;
        body.vel.x = -ENEMY_SPEED;
        Ok(Self {
            body,
            facing_right: false,
            state: EnemyState::Patrolling,
        })
    }

    #[inline]
    pub fn hitbox(&self) -> Rect {
        self.body.hitbox()
    }

    /// Only patrolling enemies can hurt or be stomped
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state == EnemyState::Patrolling
    }

    pub fn update(&mut self, platforms: &[Rect]) {
        match self.state {
            EnemyState::Patrolling => self.patrol(platforms),
            EnemyState::Stomped { ticks_left } => {
                self.state = if ticks_left <= 1 {
                    EnemyState::Dead
                } else {
                    EnemyState::Stomped {
                        ticks_left: ticks_left - 1,
                    }
                };
            }
            EnemyState::Dead => {}
        }
    }

    fn patrol(&mut self, platforms: &[Rect]) {
        let body = &mut self.body;

        // Vertical: landing only, first supporting platform wins
        body.apply_gravity();
        body.grounded = false;
        let mut next_y = body.pos.y + body.vel.y;
        if let Some(p) = platforms
            .iter()
            .find(|p| body.lands_on(body.pos.x, next_y, p))
        {
            body.vel.y = 0.0;
            next_y = p.y - body.size.y;
            body.grounded = true;
        }
        body.pos.y = next_y;

        // Horizontal: edge probe, then walls
        let mut next_x = body.pos.x + body.vel.x;
        let mut turn_around = body.grounded && !Self::ground_ahead(body, next_x, platforms);

        for p in platforms {
            if !body.spans_vertically(body.pos.y, p) {
                continue;
            }
            if body.vel.x < 0.0 && body.hits_right_face(next_x, p) {
                turn_around = true;
                next_x = p.right();
                break;
            } else if body.vel.x > 0.0 && body.hits_left_face(next_x, p) {
                turn_around = true;
                next_x = p.x - body.size.x;
                break;
            }
        }

        if turn_around {
            body.vel.x = -body.vel.x;
            self.facing_right = body.vel.x > 0.0;
        }
        body.pos.x = next_x;

        // Left edge of the world
        if body.pos.x <= 0.0 && body.vel.x < 0.0 {
            body.pos.x = 0.0;
            body.vel.x = -body.vel.x;
            self.facing_right = true;
        }
    }

    /// Is there a platform just below the leading foot at `next_x`?
    fn ground_ahead(body: &Body, next_x: f32, platforms: &[Rect]) -> bool {
        let lead_x = if body.vel.x < 0.0 {
            next_x
        } else {
            next_x + body.size.x
        };
        let foot_y = body.bottom() + EDGE_PROBE_DEPTH;
        platforms.iter().any(|p| {
            lead_x > p.x
                && lead_x < p.right()
                && foot_y > p.y
                && foot_y < p.bottom() + EDGE_PROBE_TOLERANCE
        })
    }

    /// Squash the enemy. Returns false if it was already stomped or dead.
    pub fn stomp(&mut self) -> bool {
        if !self.is_alive() {
            return false;
        }
        self.state = EnemyState::Stomped {
            ticks_left: STOMP_SQUASH_TICKS,
        };
        self.body.vel = Vec2::ZERO;
        true
    }

    pub fn reset(&mut self) {
        self.body.reset(Vec2::new(-ENEMY_SPEED, 0.0));
        self.facing_right = false;
        self.state = EnemyState::Patrolling;
    }
}
