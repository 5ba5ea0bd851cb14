//! Audio cue dispatch
//!
//! The simulation emits [`AudioCue`]s; the [`AudioManager`] applies the
//! session's sound preferences and forwards them to a host [`AudioSink`]
//! that owns the actual sound handles.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::sim::AudioCue;

/// Named sound effects and music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    /// Looping level music
    BackgroundMusic,
    /// Bubble in flight
    BubbleAttack,
    CollectBottle,
    CollectCoins,
    /// Bumping into a barrier
    Collision,
    /// Hurt by a jellyfish
    ElectricShock,
    EndbossAttack,
    /// Looping boss track
    EndbossMusic,
    FinSlap,
    GameOver,
    /// Hurt by a pufferfish or the boss
    Poisoned,
    Swimming,
    Snoring,
    WinningMusic,
}

impl Sound {
    pub const ALL: [Sound; 14] = [
        Sound::BackgroundMusic,
        Sound::BubbleAttack,
        Sound::CollectBottle,
        Sound::CollectCoins,
        Sound::Collision,
        Sound::ElectricShock,
        Sound::EndbossAttack,
        Sound::EndbossMusic,
        Sound::FinSlap,
        Sound::GameOver,
        Sound::Poisoned,
        Sound::Swimming,
        Sound::Snoring,
        Sound::WinningMusic,
    ];

    /// Asset path the host loads for this sound
    pub fn asset(&self) -> &'static str {
        match self {
            Sound::BackgroundMusic => "audio/background-music.mp3",
            Sound::BubbleAttack => "audio/bubble-attack.mp3",
            Sound::CollectBottle => "audio/collect-bottle.mp3",
            Sound::CollectCoins => "audio/collect-coins.mp3",
            Sound::Collision => "audio/collision.mp3",
            Sound::ElectricShock => "audio/electric-shock.mp3",
            Sound::EndbossAttack => "audio/endboss-attack.mp3",
            Sound::EndbossMusic => "audio/endboss-music.mp3",
            Sound::FinSlap => "audio/fin-slap.mp3",
            Sound::GameOver => "audio/game-over.mp3",
            Sound::Poisoned => "audio/poisoned.mp3",
            Sound::Swimming => "audio/swimming.mp3",
            Sound::Snoring => "audio/snoring.mp3",
            Sound::WinningMusic => "audio/winning-music.mp3",
        }
    }

    pub fn is_music(&self) -> bool {
        matches!(
            self,
            Sound::BackgroundMusic | Sound::EndbossMusic | Sound::WinningMusic
        )
    }
}

/// Host-side sound handles keyed by [`Sound`]
pub trait AudioSink {
    fn play(&mut self, sound: Sound);
    fn pause(&mut self, sound: Sound);
    fn reset_position(&mut self, sound: Sound);
    fn set_loop(&mut self, sound: Sound, looping: bool);
    fn set_volume(&mut self, sound: Sound, volume: f32);
}

/// Audio manager for one game session
pub struct AudioManager {
    sink: Box<dyn AudioSink>,
    enabled: bool,
    music_volume: f32,
    effect_volume: f32,
    current_music: Option<Sound>,
}

impl AudioManager {
    pub fn new(sink: Box<dyn AudioSink>, enabled: bool, music_volume: f32, effect_volume: f32) -> Self {
        Self {
            sink,
            enabled,
            music_volume: music_volume.clamp(0.0, 1.0),
            effect_volume: effect_volume.clamp(0.0, 1.0),
            current_music: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn current_music(&self) -> Option<Sound> {
        self.current_music
    }

    /// Turn sound on or off; music pauses and resumes with it
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if let Some(music) = self.current_music {
            if enabled {
                self.sink.play(music);
            } else {
                self.sink.pause(music);
            }
        }
    }

    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
        if let Some(music) = self.current_music {
            self.sink.set_volume(music, self.music_volume);
        }
    }

    pub fn set_effect_volume(&mut self, vol: f32) {
        self.effect_volume = vol.clamp(0.0, 1.0);
    }

    /// Start the looping level music
    pub fn start_music(&mut self) {
        self.switch_music(Sound::BackgroundMusic, self.music_volume);
    }

    fn switch_music(&mut self, track: Sound, volume: f32) {
        if let Some(previous) = self.current_music.take() {
            self.sink.pause(previous);
            self.sink.reset_position(previous);
        }
        self.current_music = Some(track);
        self.sink.set_volume(track, volume.clamp(0.0, 1.0));
        self.sink.set_loop(track, true);
        if self.enabled {
            self.sink.play(track);
        }
    }

    fn stop_music(&mut self) {
        if let Some(music) = self.current_music {
            self.sink.pause(music);
            self.sink.reset_position(music);
        }
    }

    /// Apply one simulation cue
    pub fn dispatch(&mut self, cue: &AudioCue) {
        match *cue {
            AudioCue::Play(sound) => {
                if self.enabled {
                    self.sink.play(sound);
                }
            }
            AudioCue::Restart(sound) => {
                self.sink.reset_position(sound);
                if self.enabled {
                    self.sink.play(sound);
                }
            }
            AudioCue::Pause(sound) => self.sink.pause(sound),
            AudioCue::Stop(sound) => {
                self.sink.pause(sound);
                self.sink.reset_position(sound);
            }
            AudioCue::Loop(sound, looping) => self.sink.set_loop(sound, looping),
            AudioCue::Volume(sound, volume) => {
                self.sink.set_volume(sound, (volume * self.effect_volume).clamp(0.0, 1.0));
            }
            AudioCue::SwitchMusic { track, volume } => self.switch_music(track, volume),
            AudioCue::StopMusic => self.stop_music(),
        }
    }

    /// Silence and rewind every sound
    pub fn stop_all(&mut self) {
        self.silence(|_| true);
    }

    /// Like [`stop_all`](Self::stop_all) but lets `keep` finish playing
    pub fn stop_all_except(&mut self, keep: Sound) {
        self.silence(|sound| sound != keep);
    }

    fn silence(&mut self, filter: impl Fn(Sound) -> bool) {
        for sound in Sound::ALL.into_iter().filter(|s| filter(*s)) {
            self.sink.pause(sound);
            self.sink.reset_position(sound);
        }
        self.current_music = None;
    }
}

/// One call made on an [`AudioSink`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCall {
    Play(Sound),
    Pause(Sound),
    ResetPosition(Sound),
    SetLoop(Sound, bool),
    SetVolume(Sound, f32),
}

/// Sink that records every call; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    calls: Rc<RefCell<Vec<AudioCall>>>,
}

impl RecordingAudio {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<AudioCall> {
        self.calls.borrow().clone()
    }

    /// How many times `sound` was started
    pub fn play_count(&self, sound: Sound) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| **c == AudioCall::Play(sound))
            .count()
    }

    pub fn clear(&self) {
        self.calls.borrow_mut().clear();
    }
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, sound: Sound) {
        self.calls.borrow_mut().push(AudioCall::Play(sound));
    }

    fn pause(&mut self, sound: Sound) {
        self.calls.borrow_mut().push(AudioCall::Pause(sound));
    }

    fn reset_position(&mut self, sound: Sound) {
        self.calls.borrow_mut().push(AudioCall::ResetPosition(sound));
    }

    fn set_loop(&mut self, sound: Sound, looping: bool) {
        self.calls.borrow_mut().push(AudioCall::SetLoop(sound, looping));
    }

    fn set_volume(&mut self, sound: Sound, volume: f32) {
        self.calls.borrow_mut().push(AudioCall::SetVolume(sound, volume));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(enabled: bool) -> (AudioManager, RecordingAudio) {
        let recorder = RecordingAudio::new();
        let manager = AudioManager::new(Box::new(recorder.clone()), enabled, 0.2, 1.0);
        (manager, recorder)
    }

    #[test]
    fn test_music_switch_stops_previous_track() {
        let (mut audio, rec) = manager(true);
        audio.start_music();
        audio.dispatch(&AudioCue::SwitchMusic {
            track: Sound::EndbossMusic,
            volume: 0.2,
        });
        let calls = rec.calls();
        assert!(calls.contains(&AudioCall::Pause(Sound::BackgroundMusic)));
        assert!(calls.contains(&AudioCall::SetLoop(Sound::EndbossMusic, true)));
        assert_eq!(rec.play_count(Sound::EndbossMusic), 1);
        assert_eq!(audio.current_music(), Some(Sound::EndbossMusic));
    }

    #[test]
    fn test_disabled_sounds_never_play() {
        let (mut audio, rec) = manager(false);
        audio.start_music();
        audio.dispatch(&AudioCue::Play(Sound::CollectCoins));
        audio.dispatch(&AudioCue::Restart(Sound::FinSlap));
        assert_eq!(rec.play_count(Sound::CollectCoins), 0);
        assert_eq!(rec.play_count(Sound::FinSlap), 0);
        assert_eq!(rec.play_count(Sound::BackgroundMusic), 0);

        audio.set_enabled(true);
        assert_eq!(rec.play_count(Sound::BackgroundMusic), 1);
    }

    #[test]
    fn test_stop_all_rewinds_everything() {
        let (mut audio, rec) = manager(true);
        audio.start_music();
        rec.clear();
        audio.stop_all();
        let calls = rec.calls();
        for sound in Sound::ALL {
            assert!(calls.contains(&AudioCall::Pause(sound)));
            assert!(calls.contains(&AudioCall::ResetPosition(sound)));
        }
        assert_eq!(audio.current_music(), None);
    }

    #[test]
    fn test_stop_all_except_keeps_end_cue() {
        let (mut audio, rec) = manager(true);
        audio.dispatch(&AudioCue::Play(Sound::WinningMusic));
        rec.clear();
        audio.stop_all_except(Sound::WinningMusic);
        let calls = rec.calls();
        assert!(!calls.contains(&AudioCall::Pause(Sound::WinningMusic)));
        assert!(calls.contains(&AudioCall::Pause(Sound::Snoring)));
    }

    #[test]
    fn test_music_flags() {
        assert!(Sound::EndbossMusic.is_music());
        assert!(!Sound::Snoring.is_music());
        assert_eq!(Sound::Snoring.asset(), "audio/snoring.mp3");
    }
}
