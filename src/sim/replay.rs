//! Input recordings
//!
//! A replay is just the per-tick input list. Because the simulation is keyed
//! to the tick counter and never reads a clock, feeding the same inputs to a
//! fresh session reproduces it exactly.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};
use super::tick::{TickInput, tick};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Replay {
    pub inputs: Vec<TickInput>,
}

/// What a replay run produced
#[derive(Debug, Clone, PartialEq)]
pub struct ReplayOutcome {
    /// Events from every tick, in order
    pub events: Vec<GameEvent>,
    /// Ticks actually fed before the session ended (or the inputs ran out)
    pub ticks_run: usize,
    pub phase: GamePhase,
    pub score: u64,
}

impl Replay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tick `state` with `input` and keep the input
    pub fn record(&mut self, state: &mut GameState, input: TickInput) -> Vec<GameEvent> {
        self.inputs.push(input);
        tick(state, &input)
    }

    /// Feed every recorded input to `state`, stopping early once the session
    /// is over unless a later input asks for a restart.
    pub fn play(&self, state: &mut GameState) -> ReplayOutcome {
        let mut events = Vec::new();
        let mut ticks_run = 0;
        let last_restart = self.inputs.iter().rposition(|input| input.restart);
        for (i, input) in self.inputs.iter().enumerate() {
            if state.is_game_over() && last_restart.is_none_or(|r| r < i) {
                break;
            }
            events.extend(tick(state, input));
            ticks_run += 1;
        }
        log::debug!("Replay fed {} of {} inputs", ticks_run, self.inputs.len());
        ReplayOutcome {
            events,
            ticks_run,
            phase: state.phase,
            score: state.score,
        }
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelData;
    use crate::sim::player::Direction;
    use crate::sim::state::Viewport;

    fn session() -> GameState {
        GameState::new(&LevelData::builtin(), Viewport::default()).unwrap()
    }

    fn scripted_input(i: usize) -> TickInput {
        TickInput {
            move_dir: if i % 50 < 40 { Direction::Right } else { Direction::Idle },
            jump: i % 30 == 5,
            restart: false,
        }
    }

    #[test]
    fn test_replay_reproduces_recording() {
        let mut live = session();
        let mut replay = Replay::new();
        let mut live_events = Vec::new();
        for i in 0..600 {
            live_events.extend(replay.record(&mut live, scripted_input(i)));
        }
        assert_eq!(replay.len(), 600);

        let mut again = session();
        let outcome = replay.play(&mut again);
        assert_eq!(outcome.events, live_events);
        assert_eq!(outcome.score, live.score);
        assert_eq!(outcome.phase, live.phase);
        assert_eq!(again.player.body.pos, live.player.body.pos);
        assert_eq!(again.camera, live.camera);
    }

    #[test]
    fn test_replay_survives_json() {
        let mut replay = Replay::new();
        let mut state = session();
        for i in 0..120 {
            replay.record(&mut state, scripted_input(i));
        }
        let json = serde_json::to_string(&replay).unwrap();
        let back: Replay = serde_json::from_str(&json).unwrap();
        assert_eq!(back, replay);
    }

    #[test]
    fn test_replay_stops_after_game_over() {
        let mut level = LevelData::builtin();
        level.platforms.clear();
        let mut state = GameState::new(&level, Viewport::default()).unwrap();
        let replay = Replay {
            inputs: vec![TickInput::default(); 200],
        };
        let outcome = replay.play(&mut state);
        assert_eq!(outcome.phase, GamePhase::Lost);
        assert!(outcome.ticks_run < 200);
        assert_eq!(outcome.events, vec![GameEvent::PlayerFell]);
    }

    #[test]
    fn test_replay_continues_through_restart() {
        let mut level = LevelData::builtin();
        level.platforms.clear();
        let mut state = GameState::new(&level, Viewport::default()).unwrap();
        let mut inputs = vec![TickInput::default(); 100];
        inputs.push(TickInput {
            restart: true,
            ..Default::default()
        });
        inputs.extend(vec![TickInput::default(); 10]);
        let replay = Replay { inputs };

        let outcome = replay.play(&mut state);
        assert_eq!(outcome.ticks_run, 111);
        assert_eq!(
            outcome.events,
            vec![GameEvent::PlayerFell, GameEvent::SessionReset]
        );
        assert_eq!(outcome.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, 10);
    }

    #[test]
    fn test_empty_replay() {
        let replay = Replay::new();
        assert!(replay.is_empty());
        let mut state = session();
        let outcome = replay.play(&mut state);
        assert_eq!(outcome.ticks_run, 0);
        assert_eq!(outcome.phase, GamePhase::Playing);
    }
}
