//! Session state and core simulation types
//!
//! Everything the tick mutates lives in `GameState`. Actor lists keep their
//! spawn order for the whole session; that order is part of the behavior.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::coin::Coin;
use super::collision::Rect;
use super::enemy::Enemy;
use super::player::Player;
use crate::consts::*;
use crate::error::Result;
use crate::level::LevelData;
use crate::lerp;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Reached the goal
    Won,
    /// Fell out of the world
    Lost,
}

/// Things that happened during a tick, for audio and presentation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    PlayerJumped,
    CoinCollected { index: usize },
    EnemyStomped { index: usize },
    /// Touched an enemy from the side; player and score were reset
    PlayerHurt { index: usize },
    LevelWon,
    PlayerFell,
    SessionReset,
}

/// Screen dimensions plus the fall-out threshold below them
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub fall_margin: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            fall_margin: FALL_MARGIN,
        }
    }
}

/// Horizontal scroll offset that trails the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f32,
}

impl Camera {
    /// Ease toward keeping the player a third of the way across the screen,
    /// never showing anything left of 0 or right of the level end.
    pub fn follow(&mut self, player_x: f32, viewport_width: f32, level_width: f32) {
        let target = player_x - viewport_width / 3.0;
        // Levels narrower than the screen pin the camera at 0
        let max_x = (level_width - viewport_width).max(0.0);
        self.x = lerp(self.x, target, CAMERA_LERP).clamp(0.0, max_x);
    }
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Static level geometry, in resolution order
    pub platforms: Vec<Rect>,
    pub goal: Rect,
    pub level_width: f32,
    pub viewport: Viewport,

    pub player: Player,
    /// Enemies in spawn order
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,

    pub score: u64,
    pub camera: Camera,
    pub phase: GamePhase,
    /// Simulation tick counter, drives the coin bob
    pub time_ticks: u64,
}

impl GameState {
    /// Build a fresh session from level data. Fails if any actor, platform
    /// or the goal has a non-positive size.
    pub fn new(level: &LevelData, viewport: Viewport) -> Result<Self> {
        let platforms = level
            .platforms
            .iter()
            .map(|p| p.validated("platform"))
            .collect::<Result<Vec<_>>>()?;
        let enemies = level
            .enemies
            .iter()
            .map(|e| Enemy::new(e.pos(), e.size()))
            .collect::<Result<Vec<_>>>()?;
        let coins = level
            .coins
            .iter()
            .map(|c| Coin::new(c.pos(), c.size()))
            .collect::<Result<Vec<_>>>()?;

        let state = Self {
            platforms,
            goal: level.goal.validated("goal")?,
            level_width: level.width,
            viewport,
            player: Player::new(level.player.pos(), level.player.size())?,
            enemies,
            coins,
            score: 0,
            camera: Camera::default(),
            phase: GamePhase::Playing,
            time_ticks: 0,
        };

        log::info!(
            "Session built: {} platforms, {} enemies, {} coins, level width {}",
            state.platforms.len(),
            state.enemies.len(),
            state.coins.len(),
            state.level_width
        );
        Ok(state)
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase != GamePhase::Playing
    }

    #[inline]
    pub fn is_won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Player y beyond which the run is lost
    #[inline]
    pub fn fall_limit(&self) -> f32 {
        self.viewport.height + self.viewport.fall_margin
    }

    /// Restore every actor, the score, the camera and the phase
    pub fn reset_session(&mut self) {
        self.player.reset();
        for enemy in &mut self.enemies {
            enemy.reset();
        }
        for coin in &mut self.coins {
            coin.reset();
        }
        self.score = 0;
        self.camera = Camera::default();
        self.phase = GamePhase::Playing;
        self.time_ticks = 0;
        log::info!("Session reset");
    }

    /// Coins still on the board
    pub fn coins_remaining(&self) -> usize {
        self.coins.iter().filter(|c| !c.collected).count()
    }

    /// Enemies still patrolling
    pub fn enemies_alive(&self) -> usize {
        self.enemies.iter().filter(|e| e.is_alive()).count()
    }

    /// Player position, for presentation
    pub fn player_pos(&self) -> Vec2 {
        self.player.body.pos
    }
}
