//! Level descriptions as plain data
//!
//! A level is just rectangles: platforms, actor spawn boxes and the goal.
//! Validation happens when a `GameState` is built from it.

use serde::{Deserialize, Serialize};

use crate::consts::LEVEL_WIDTH;
use crate::sim::Rect;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelData {
    /// World width the camera may scroll across
    #[serde(default = "default_width")]
    pub width: f32,
    /// Platforms in resolution order
    pub platforms: Vec<Rect>,
    /// Player spawn position and hitbox size
    pub player: Rect,
    /// Enemy spawn boxes, in spawn order
    #[serde(default)]
    pub enemies: Vec<Rect>,
    #[serde(default)]
    pub coins: Vec<Rect>,
    pub goal: Rect,
}

fn default_width() -> f32 {
    LEVEL_WIDTH
}

/// Shorthand for literal level tables
const fn r(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect { x, y, w, h }
}

const ENEMY_W: f32 = 28.5;
const ENEMY_H: f32 = 37.5;
const COIN_SIZE: f32 = 20.0;

impl LevelData {
    /// The stock level: a 3000px run over a solid floor with floating ledges
    pub fn builtin() -> Self {
        let platforms = vec![
            // Ground
            r(0.0, 360.0, LEVEL_WIDTH, 40.0),
            r(200.0, 300.0, 100.0, 20.0),
            r(350.0, 240.0, 150.0, 20.0),
            r(600.0, 280.0, 80.0, 20.0),
            r(800.0, 200.0, 120.0, 20.0),
            r(1000.0, 250.0, 200.0, 20.0),
            // Staircase
            r(1300.0, 300.0, 50.0, 20.0),
            r(1350.0, 250.0, 50.0, 20.0),
            r(1400.0, 200.0, 50.0, 20.0),
            r(1600.0, 220.0, 100.0, 20.0),
            r(1800.0, 150.0, 150.0, 20.0),
            r(2100.0, 280.0, 200.0, 20.0),
            r(2400.0, 200.0, 100.0, 20.0),
            r(2600.0, 250.0, 150.0, 20.0),
        ];

        let enemies = [
            (400.0, 320.0),
            (700.0, 340.0),
            (1100.0, 230.0),
            (1700.0, 340.0),
            (2200.0, 260.0),
            (2650.0, 230.0),
        ]
        .into_iter()
        .map(|(x, y)| r(x, y, ENEMY_W, ENEMY_H))
        .collect();

        let coins = [
            (225.0, 270.0),
            (380.0, 210.0),
            (410.0, 210.0),
            (630.0, 250.0),
            (850.0, 170.0),
            (1050.0, 220.0),
            (1150.0, 220.0),
            (1640.0, 190.0),
            (1850.0, 120.0),
            (2150.0, 250.0),
            (2440.0, 170.0),
            (2660.0, 220.0),
        ]
        .into_iter()
        .map(|(x, y)| r(x, y, COIN_SIZE, COIN_SIZE))
        .collect();

        Self {
            width: LEVEL_WIDTH,
            platforms,
            player: r(100.0, 100.0, 40.0, 40.0),
            enemies,
            coins,
            goal: r(LEVEL_WIDTH - 100.0, 300.0, 20.0, 60.0),
        }
    }
}

impl Default for LevelData {
    fn default() -> Self {
        Self::builtin()
    }
}
