//! Fixed-step simulation tick
//!
//! One call advances the whole session by one step. The step order is
//! observable: enemies move before the player is checked against them, and
//! the player moves before coins, camera and goal are looked at.

use serde::{Deserialize, Serialize};

use super::collision::overlaps;
use super::player::Direction;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held horizontal direction
    #[serde(default)]
    pub move_dir: Direction,
    /// Jump pressed this tick (edge, not level)
    #[serde(default)]
    pub jump: bool,
    /// Play again; only honored once the session is over
    #[serde(default)]
    pub restart: bool,
}

/// Advance the game state by one tick and report what happened
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.is_game_over() {
        if input.restart {
            state.reset_session();
            events.push(GameEvent::SessionReset);
        }
        return events;
    }

    state.time_ticks += 1;

    let mut jumped = input.jump && state.player.jump();

    // Enemies move first, including squashed ones counting down
    for enemy in &mut state.enemies {
        enemy.update(&state.platforms);
    }

    // Player against live enemies, at their post-move positions
    for (index, enemy) in state.enemies.iter_mut().enumerate() {
        if !enemy.is_alive() || !overlaps(&state.player.hitbox(), &enemy.hitbox()) {
            continue;
        }
        if state.player.is_stomping_onto(enemy) {
            enemy.stomp();
            state.player.body.vel.y = STOMP_BOUNCE;
            state.score += STOMP_REWARD;
            log::debug!("Enemy {} stomped, score {}", index, state.score);
            events.push(GameEvent::EnemyStomped { index });
        } else {
            state.player.reset();
            state.score = 0;
            state.camera.x = 0.0;
            // The reset cancels this tick's jump
            jumped = false;
            log::debug!("Player hurt by enemy {}", index);
            events.push(GameEvent::PlayerHurt { index });
        }
    }
    if jumped {
        events.push(GameEvent::PlayerJumped);
    }

    // Intent is read after any reset so a held direction still steers
    state.player.set_horizontal_intent(input.move_dir);
    state.player.update(&state.platforms);

    for (index, coin) in state.coins.iter_mut().enumerate() {
        if coin.collected {
            continue;
        }
        coin.update(state.time_ticks);
        if overlaps(&state.player.hitbox(), &coin.hitbox()) && coin.collect() {
            state.score += COIN_REWARD;
            log::debug!("Coin {} collected, score {}", index, state.score);
            events.push(GameEvent::CoinCollected { index });
        }
    }

    state.camera.follow(
        state.player.body.pos.x,
        state.viewport.width,
        state.level_width,
    );

    if overlaps(&state.player.hitbox(), &state.goal) && !state.is_game_over() {
        state.phase = GamePhase::Won;
        log::info!("Goal reached at tick {}, score {}", state.time_ticks, state.score);
        events.push(GameEvent::LevelWon);
    }

    if state.player.body.pos.y > state.fall_limit() && !state.is_won() {
        state.phase = GamePhase::Lost;
        log::info!("Player fell out at tick {}, score {}", state.time_ticks, state.score);
        events.push(GameEvent::PlayerFell);
    }

    events
}
