//! Headless native runner
//!
//! Builds a session, drives it with a recorded replay or a simple autopilot,
//! and reports the outcome. Rendering and real input belong to a frontend.

use std::path::PathBuf;
use std::process::ExitCode;

use coin_hop::audio::{AudioManager, LogSink};
use coin_hop::sim::{Direction, GameEvent, GamePhase, GameState, Replay, TickInput};
use coin_hop::{LevelData, Settings, loader};

/// Default number of ticks for an autopilot run (about a minute at 60 Hz)
const DEFAULT_TICKS: usize = 3600;

#[derive(Debug, Default)]
struct Args {
    level: Option<PathBuf>,
    settings: Option<PathBuf>,
    replay: Option<PathBuf>,
    record: Option<PathBuf>,
    ticks: Option<usize>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut it = std::env::args().skip(1);
    while let Some(flag) = it.next() {
        let mut value = || it.next().ok_or_else(|| format!("{flag} needs a value"));
        match flag.as_str() {
            "--level" => args.level = Some(value()?.into()),
            "--settings" => args.settings = Some(value()?.into()),
            "--replay" => args.replay = Some(value()?.into()),
            "--record" => args.record = Some(value()?.into()),
            "--ticks" => {
                let v = value()?;
                args.ticks = Some(v.parse().map_err(|_| format!("bad tick count: {v}"))?);
            }
            "-h" | "--help" => {
                return Err(
                    "usage: coin-hop [--level FILE] [--settings FILE] [--replay FILE] \
                     [--record FILE] [--ticks N]"
                        .to_string(),
                );
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }
    Ok(args)
}

/// Run right, hop over enemies ahead and over anything that stops us
fn autopilot(state: &GameState) -> TickInput {
    let player = &state.player.body;
    let ahead = player.pos.x + player.size.x;
    let enemy_close = state.enemies.iter().filter(|e| e.is_alive()).any(|e| {
        let gap = e.body.pos.x - ahead;
        (0.0..80.0).contains(&gap) && (e.body.pos.y - player.pos.y).abs() < 60.0
    });
    let stalled = state.time_ticks > 10 && player.vel.x < 0.5;
    TickInput {
        move_dir: Direction::Right,
        jump: player.grounded && (enemy_close || stalled),
        restart: false,
    }
}

fn run(args: Args) -> coin_hop::Result<()> {
    let settings = args
        .settings
        .as_deref()
        .map(Settings::load)
        .unwrap_or_default();
    let level = match &args.level {
        Some(path) => loader::read_json::<LevelData>(path)?,
        None => LevelData::builtin(),
    };

    let mut state = GameState::new(&level, settings.viewport())?;
    let mut audio = AudioManager::new(LogSink, &settings);

    let mut recording = Replay::new();
    let phase = if let Some(path) = &args.replay {
        let replay: Replay = loader::read_json(path)?;
        log::info!("Replaying {} inputs from {}", replay.len(), path.display());
        let outcome = replay.play(&mut state);
        audio.handle_events(&outcome.events);
        outcome.phase
    } else {
        let ticks = args.ticks.unwrap_or(DEFAULT_TICKS);
        for _ in 0..ticks {
            let input = autopilot(&state);
            let events = recording.record(&mut state, input);
            audio.handle_events(&events);
            if events.iter().any(|e| matches!(e, GameEvent::PlayerHurt { .. })) {
                log::info!("Autopilot got hurt at tick {}", state.time_ticks);
            }
            if state.is_game_over() {
                break;
            }
        }
        state.phase
    };

    if let Some(path) = args.record.as_deref().filter(|_| !recording.is_empty()) {
        loader::write_json(path, &recording)?;
        log::info!("Recorded {} inputs to {}", recording.len(), path.display());
    }

    let outcome = match phase {
        GamePhase::Won => "YOU WIN!",
        GamePhase::Lost => "GAME OVER",
        GamePhase::Playing => "still running",
    };
    println!(
        "{outcome}  score: {}  ticks: {}  coins left: {}  enemies left: {}",
        state.score,
        state.time_ticks,
        state.coins_remaining(),
        state.enemies_alive()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Coin Hop (headless) starting...");

    let args = match parse_args() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
