//! World state and the events the simulation reports to its host
//!
//! The world is the single owner of every entity in a running level. Only
//! [`super::tick`] mutates it; renderers read it.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::camera::Camera;
use super::character::Character;
use super::entity::Foe;
use super::items::{Bubble, PickupClock, StatusBar};
use super::level::Level;
use crate::audio::Sound;
use crate::error::GameError;
use crate::settings::Settings;

/// Instruction for the host's audio sink
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AudioCue {
    Play(Sound),
    /// Rewind, then play
    Restart(Sound),
    Pause(Sound),
    /// Pause and rewind
    Stop(Sound),
    Loop(Sound, bool),
    Volume(Sound, f32),
    /// Replace the current music track
    SwitchMusic { track: Sound, volume: f32 },
    StopMusic,
}

/// Something the host may want to react to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Audio(AudioCue),
    BossIntroduced,
    EnemyKilled(Foe),
    CoinCollected { total: u32 },
    BottleCollected { ammo: u32 },
    CharacterDied { killer: Option<Foe> },
    /// The game-over delay elapsed
    GameOver { coins: u32 },
    /// The boss is gone
    Victory { coins: u32 },
}

/// Current phase of the run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    /// Character died; the world keeps running until the game-over delay is up
    CharacterDown,
    Won,
    Lost,
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::Won | GamePhase::Lost)
    }
}

/// The live simulation aggregate for one session
#[derive(Debug, Clone)]
pub struct World {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    /// Simulation clock in milliseconds
    pub time_ms: f64,
    pub phase: GamePhase,
    pub character: Character,
    pub level: Level,
    /// Bubbles in flight; at most one is active
    pub bubbles: Vec<Bubble>,
    pub status_life: StatusBar,
    pub status_bottles: StatusBar,
    pub status_coins: StatusBar,
    pub camera: Camera,
    /// Damage dealt by the character's attacks; follows the current attack
    pub attack_damage: i32,
    /// Time since the last combat pass
    pub combat_elapsed: f32,
    pub combat_interval: f32,
    /// World time at which the game-over cue fires
    pub game_over_at: Option<f64>,
    pub pickup_clock: PickupClock,
    /// Events produced since the host last drained them
    pub events: Vec<GameEvent>,
}

impl World {
    /// Build a fresh world: generate the level from `seed` and place the character
    pub fn new(seed: u64, settings: &Settings) -> Result<Self, GameError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let level = Level::generate(&mut rng, &settings.generation)?;
        let character = Character::new()?;
        let mut camera = Camera::default();
        camera.follow(character.body.pos.x);

        log::info!("World created with seed {}", seed);

        Ok(Self {
            seed,
            rng,
            time_ms: 0.0,
            phase: GamePhase::Playing,
            character,
            level,
            bubbles: Vec::new(),
            status_life: StatusBar::life(),
            status_bottles: StatusBar::bottles(),
            status_coins: StatusBar::coins(),
            camera,
            attack_damage: 1,
            combat_elapsed: 0.0,
            combat_interval: settings.combat_interval_ms,
            game_over_at: None,
            pickup_clock: PickupClock::default(),
            events: Vec::new(),
        })
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn cue(&mut self, cue: AudioCue) {
        self.events.push(GameEvent::Audio(cue));
    }

    /// Hand all pending events to the caller
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::ENEMY_COUNT;

    #[test]
    fn test_new_world() {
        let world = World::new(7, &Settings::default()).unwrap();
        assert_eq!(world.phase, GamePhase::Playing);
        assert_eq!(world.level.enemies.len(), ENEMY_COUNT);
        assert_eq!(world.status_life.percentage(), 100);
        assert_eq!(world.camera.x, 0.0);
        assert_eq!(world.attack_damage, 1);
    }

    #[test]
    fn test_drain_events() {
        let mut world = World::new(7, &Settings::default()).unwrap();
        world.emit(GameEvent::BossIntroduced);
        world.cue(AudioCue::StopMusic);
        assert_eq!(world.drain_events().len(), 2);
        assert!(world.events.is_empty());
    }

    #[test]
    fn test_phase_over() {
        assert!(!GamePhase::CharacterDown.is_over());
        assert!(GamePhase::Won.is_over());
    }
}
