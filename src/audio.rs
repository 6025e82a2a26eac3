//! Event-driven sound effects
//!
//! The simulation never plays sounds itself. It reports `GameEvent`s, and the
//! `AudioManager` turns the audible ones into `SoundEffect`s for whatever
//! backend implements `AudioSink`. Effects are described as simple
//! procedural tones so a backend needs no asset files.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// Coin picked up
    Coin,
    /// Enemy squashed
    Stomp,
    /// Player ran into an enemy
    Hurt,
    /// Goal reached
    Win,
    /// Fell out of the level
    GameOver,
}

/// Oscillator recipe for an effect: sweep from `start_hz` to `end_hz`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub start_hz: f32,
    pub end_hz: f32,
    pub duration_secs: f32,
    /// Loudness relative to the other effects
    pub level: f32,
}

impl SoundEffect {
    /// The effect for an event, if it makes a sound
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PlayerJumped => Some(SoundEffect::Jump),
            GameEvent::CoinCollected { .. } => Some(SoundEffect::Coin),
            GameEvent::EnemyStomped { .. } => Some(SoundEffect::Stomp),
            GameEvent::PlayerHurt { .. } => Some(SoundEffect::Hurt),
            GameEvent::LevelWon => Some(SoundEffect::Win),
            GameEvent::PlayerFell => Some(SoundEffect::GameOver),
            GameEvent::SessionReset => None,
        }
    }

    pub fn tone(self) -> Tone {
        match self {
            // Rising chirp
            SoundEffect::Jump => Tone {
                start_hz: 300.0,
                end_hz: 600.0,
                duration_secs: 0.12,
                level: 0.4,
            },
            // Bright ping
            SoundEffect::Coin => Tone {
                start_hz: 990.0,
                end_hz: 1320.0,
                duration_secs: 0.1,
                level: 0.35,
            },
            // Solid thump
            SoundEffect::Stomp => Tone {
                start_hz: 150.0,
                end_hz: 60.0,
                duration_secs: 0.15,
                level: 0.6,
            },
            SoundEffect::Hurt => Tone {
                start_hz: 220.0,
                end_hz: 110.0,
                duration_secs: 0.3,
                level: 0.5,
            },
            SoundEffect::Win => Tone {
                start_hz: 523.0,
                end_hz: 1046.0,
                duration_secs: 0.6,
                level: 0.5,
            },
            SoundEffect::GameOver => Tone {
                start_hz: 392.0,
                end_hz: 98.0,
                duration_secs: 0.8,
                level: 0.5,
            },
        }
    }
}

/// Something that can actually make noise
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect, tone: Tone, volume: f32);
}

/// Sink for headless runs: writes each effect to the log
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect, tone: Tone, volume: f32) {
        log::debug!(
            "sfx {:?}: {:.0}->{:.0} Hz for {:.2}s at {:.2}",
            effect,
            tone.start_hz,
            tone.end_hz,
            tone.duration_secs,
            volume
        );
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S, settings: &Settings) -> Self {
        let mut manager = Self {
            sink,
            master_volume: 0.0,
            sfx_volume: 0.0,
            muted: settings.muted,
        };
        manager.set_master_volume(settings.master_volume);
        manager.set_sfx_volume(settings.sfx_volume);
        manager
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let tone = effect.tone();
        self.sink.play(effect, tone, vol * tone.level);
    }

    /// Play whatever a tick's events call for, in event order
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        played: Vec<(SoundEffect, f32)>,
    }

    impl AudioSink for Recorder {
        fn play(&mut self, effect: SoundEffect, _tone: Tone, volume: f32) {
            self.played.push((effect, volume));
        }
    }

    #[test]
    fn test_events_map_to_effects() {
        let mut audio = AudioManager::new(Recorder::default(), &Settings::default());
        audio.handle_events(&[
            GameEvent::PlayerJumped,
            GameEvent::SessionReset,
            GameEvent::CoinCollected { index: 3 },
            GameEvent::EnemyStomped { index: 0 },
        ]);
        let effects: Vec<_> = audio.sink().played.iter().map(|(e, _)| *e).collect();
        assert_eq!(
            effects,
            vec![SoundEffect::Jump, SoundEffect::Coin, SoundEffect::Stomp]
        );
    }

    #[test]
    fn test_muted_plays_nothing() {
        let settings = Settings {
            muted: true,
            ..Default::default()
        };
        let mut audio = AudioManager::new(Recorder::default(), &settings);
        audio.handle_events(&[GameEvent::PlayerJumped, GameEvent::LevelWon]);
        assert!(audio.sink().played.is_empty());

        audio.set_muted(false);
        audio.play(SoundEffect::Win);
        assert_eq!(audio.sink().played.len(), 1);
    }

    #[test]
    fn test_volume_scales_and_clamps() {
        let mut audio = AudioManager::new(Recorder::default(), &Settings::default());
        audio.set_master_volume(2.0);
        audio.set_sfx_volume(0.5);
        audio.play(SoundEffect::Stomp);
        let (_, vol) = audio.sink().played[0];
        assert!((vol - 0.5 * SoundEffect::Stomp.tone().level).abs() < 1e-6);
    }
}
