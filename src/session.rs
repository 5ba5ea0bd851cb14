//! Game session
//!
//! Owns everything one run needs: settings, the world, the keyboard, audio
//! and the host's screen sink. The host calls [`GameSession::advance`] from
//! its update timer and [`GameSession::render`] once per display frame. Both
//! check the single `running` flag first, so calls arriving after a stop do
//! nothing.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::audio::{AudioManager, AudioSink, Sound};
use crate::consts::{SIM_STEP_MS, TOTAL_COINS};
use crate::error::GameError;
use crate::platform::{Key, Keyboard};
use crate::renderer::{self, RenderTarget};
use crate::settings::Settings;
use crate::sim::{GameEvent, World, tick};

/// Longest stretch of wall time a single advance will simulate
const MAX_FRAME_MS: f32 = 100.0;

/// End-of-run screens the host can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    GameOver,
    Winning,
}

impl Screen {
    /// The cue that keeps playing over this screen
    pub fn sound(&self) -> Sound {
        match self {
            Screen::GameOver => Sound::GameOver,
            Screen::Winning => Sound::WinningMusic,
        }
    }
}

/// Host-side screen switching
pub trait ScreenSink {
    /// Show `screen` with the collected coin tally ("coins / total")
    fn show(&mut self, screen: Screen, coins: u32, total: u32);
}

/// Screen sink that records what was shown; clones share the same log
#[derive(Debug, Clone, Default)]
pub struct RecordingScreens {
    shown: Rc<RefCell<Vec<(Screen, u32)>>>,
}

impl RecordingScreens {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Vec<(Screen, u32)> {
        self.shown.borrow().clone()
    }
}

impl ScreenSink for RecordingScreens {
    fn show(&mut self, screen: Screen, coins: u32, _total: u32) {
        self.shown.borrow_mut().push((screen, coins));
    }
}

pub struct GameSession {
    settings: Settings,
    world: World,
    keyboard: Keyboard,
    audio: AudioManager,
    screens: Box<dyn ScreenSink>,
    running: bool,
    accumulator: f32,
}

impl GameSession {
    /// Build the world for `seed` and start the level music
    pub fn start(
        settings: Settings,
        seed: u64,
        audio_sink: Box<dyn AudioSink>,
        screens: Box<dyn ScreenSink>,
    ) -> Result<Self, GameError> {
        settings.validate()?;
        let world = World::new(seed, &settings)?;
        let mut audio = AudioManager::new(
            audio_sink,
            settings.sounds_enabled,
            settings.music_volume,
            settings.effect_volume,
        );
        audio.start_music();
        log::info!("Session started (seed {})", seed);

        Ok(Self {
            settings,
            world,
            keyboard: Keyboard::default(),
            audio,
            screens,
            running: true,
            accumulator: 0.0,
        })
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn set_key(&mut self, key: Key, pressed: bool) {
        if self.running {
            self.keyboard.set(key, pressed);
        }
    }

    /// Map a host key code; returns whether the code belongs to the game
    pub fn handle_key(&mut self, code: &str, pressed: bool) -> bool {
        self.running && self.keyboard.handle_code(code, pressed)
    }

    pub fn set_sounds_enabled(&mut self, enabled: bool) {
        self.settings.sounds_enabled = enabled;
        self.audio.set_enabled(enabled);
    }

    /// Simulation driver: run as many fixed steps as `elapsed_ms` covers.
    /// Returns the number of steps taken.
    pub fn advance(&mut self, elapsed_ms: f32) -> u32 {
        if !self.running {
            return 0;
        }
        self.accumulator += elapsed_ms.clamp(0.0, MAX_FRAME_MS);

        let mut substeps = 0;
        while self.accumulator >= SIM_STEP_MS && substeps < self.settings.max_substeps {
            tick(&mut self.world, &self.keyboard, SIM_STEP_MS);
            self.accumulator -= SIM_STEP_MS;
            substeps += 1;

            self.dispatch_events();
            if !self.running {
                break;
            }
        }
        substeps
    }

    /// Render driver: draw the current world. Returns false once stopped.
    pub fn render(&self, target: &mut dyn RenderTarget) -> bool {
        if !self.running {
            return false;
        }
        renderer::render(&self.world, target);
        true
    }

    /// Halt both drivers and silence everything
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.halt();
        self.audio.stop_all();
        log::info!("Session stopped");
    }

    fn halt(&mut self) {
        self.running = false;
        self.accumulator = 0.0;
        self.world.bubbles.clear();
        self.keyboard.reset();
    }

    /// End the run on `screen`; its cue keeps playing
    fn finish(&mut self, screen: Screen, coins: u32) {
        self.halt();
        self.audio.stop_all_except(screen.sound());
        self.screens.show(screen, coins, TOTAL_COINS);
        log::info!("Session finished: {:?}, {} / {} coins", screen, coins, TOTAL_COINS);
    }

    fn dispatch_events(&mut self) {
        for event in self.world.drain_events() {
            match event {
                GameEvent::Audio(cue) => self.audio.dispatch(&cue),
                GameEvent::GameOver { coins } => {
                    self.finish(Screen::GameOver, coins);
                    return;
                }
                GameEvent::Victory { coins } => {
                    self.finish(Screen::Winning, coins);
                    return;
                }
                other => log::debug!("{:?}", other),
            }
        }
    }
}
