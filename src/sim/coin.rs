//! Bobbing coin pickups

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{Rect, check_size};
use crate::consts::{COIN_BOB_AMPLITUDE, COIN_BOB_STEP};
use crate::error::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub pos: Vec2,
    pub size: Vec2,
    pub collected: bool,
    /// Resting height the bob oscillates around
    spawn_y: f32,
}

impl Coin {
    pub fn new(pos: Vec2, size: Vec2) -> Result<Self> {
        check_size("coin", size)?;
        Ok(Self {
            pos,
            size,
            collected: false,
            spawn_y: pos.y,
        })
    }

    #[inline]
    pub fn hitbox(&self) -> Rect {
        Rect::at(self.pos, self.size)
    }

    /// Bob position for simulation tick `tick`
    pub fn update(&mut self, tick: u64) {
        self.pos.y = self.spawn_y + (tick as f32 * COIN_BOB_STEP).sin() * COIN_BOB_AMPLITUDE;
    }

    /// Mark collected. Returns false if it already was, so callers never
    /// reward the same coin twice.
    pub fn collect(&mut self) -> bool {
        if self.collected {
            return false;
        }
        self.collected = true;
        true
    }

    pub fn reset(&mut self) {
        self.collected = false;
        self.pos.y = self.spawn_y;
    }
}
