//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, time is the tick counter
//! - Stable iteration order (platforms and actors in list order)
//! - No rendering, audio or platform dependencies

pub mod coin;
pub mod collision;
pub mod enemy;
pub mod motion;
pub mod player;
pub mod replay;
pub mod state;
pub mod tick;

pub use coin::Coin;
pub use collision::{Platform, Rect, overlaps};
pub use enemy::{Enemy, EnemyState};
pub use motion::Body;
pub use player::{Direction, Player};
pub use replay::{Replay, ReplayOutcome};
pub use state::{Camera, GameEvent, GamePhase, GameState, Viewport};
pub use tick::{TickInput, tick};
