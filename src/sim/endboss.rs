//! The level's boss: dormant until the character reaches the arena, then an
//! introduction followed by a floating/attacking cycle.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::animation::{Animation, Beat};
use super::entity::{Body, Drawable, EntityKind, Foe, Hostile, Offset};
use super::state::{AudioCue, GameEvent};
use crate::audio::Sound;
use crate::consts::{BOSS_START_X, MUSIC_VOLUME};
use crate::error::GameError;
use crate::sprites::{self, SpriteId};

pub const BOSS_WIDTH: f32 = 576.0;
pub const BOSS_HEIGHT: f32 = 720.0;
pub const BOSS_HEALTH: i32 = 10;
pub const BOSS_CONTACT_DAMAGE: i32 = 20;
pub const BOSS_ATTACK_DAMAGE: i32 = 40;
/// Animation beat while alive
pub const BOSS_FRAME_MS: f32 = 150.0;
/// Frame interval of the death sequence
pub const BOSS_DYING_FRAME_MS: f32 = 200.0;
/// Attack cadence bounds (inclusive)
pub const ATTACK_PERIOD_MIN_MS: u32 = 1000;
pub const ATTACK_PERIOD_MAX_MS: u32 = 4000;
const ATTACK_VOLUME: f32 = 0.2;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Endboss {
    pub body: Body,
    pub health: i32,
    pub first_contact: bool,
    pub move_direction: MoveDirection,
    pub attacking: bool,
    pub dying: bool,
    /// Current attack speed
    pub speed: f32,
    collision_damage: i32,
    facing_right: bool,
    animation: Animation,
    beat: Beat,
    /// Frames shown since first contact; the first ten are the introduction
    intro_frames: u32,
    music_switched: bool,
    hurt_ms: f32,
    attack_ms: f32,
    next_attack_ms: f32,
    dying_ms: f32,
}

impl Endboss {
    pub fn new() -> Result<Self, GameError> {
        Self::at(BOSS_START_X)
    }

    pub fn at(x: f32) -> Result<Self, GameError> {
        Ok(Self {
            body: Body::new(
                x,
                0.0,
                BOSS_WIDTH,
                BOSS_HEIGHT,
                Offset::from_shifted(330.0, 25.0, 60.0, 450.0),
            ),
            health: BOSS_HEALTH,
            first_contact: false,
            move_direction: MoveDirection::Left,
            attacking: false,
            dying: false,
            speed: 0.0,
            collision_damage: BOSS_CONTACT_DAMAGE,
            facing_right: false,
            animation: Animation::new("endboss", sprites::ENDBOSS_INTRODUCE)?,
            beat: Beat::new(BOSS_FRAME_MS),
            intro_frames: 0,
            music_switched: false,
            hurt_ms: 0.0,
            attack_ms: 0.0,
            next_attack_ms: 0.0,
            dying_ms: 0.0,
        })
    }

    pub fn is_hurt(&self) -> bool {
        self.hurt_ms > 0.0
    }

    /// Show the hurt frames for one full pass of the hurt sequence
    pub fn hurt(&mut self) {
        self.hurt_ms = sprites::ENDBOSS_HURT.len() as f32 * BOSS_FRAME_MS;
    }

    /// Mark the encounter as started; arms the attack timer once
    pub fn engage(&mut self, rng: &mut impl Rng) {
        if !self.first_contact {
            self.first_contact = true;
            self.next_attack_ms = roll_attack_period(rng);
            log::info!("Endboss engaged, first attack in {}ms", self.next_attack_ms);
        }
    }

    pub fn attack_duration_ms() -> f32 {
        sprites::ENDBOSS_ATTACK.len() as f32 * BOSS_FRAME_MS
    }

    pub fn death_duration_ms() -> f32 {
        sprites::ENDBOSS_DEAD.len() as f32 * BOSS_DYING_FRAME_MS
    }

    /// Advance timers, movement and animation. Returns true once the death
    /// sequence has played out and the boss should be removed.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng, events: &mut Vec<GameEvent>) -> bool {
        if self.dying {
            if self.beat.tick(dt) {
                self.animation.advance(sprites::ENDBOSS_DEAD);
            }
            self.dying_ms += dt;
            return self.dying_ms >= Self::death_duration_ms();
        }

        if self.attacking {
            match self.move_direction {
                MoveDirection::Left => {
                    self.body.move_left(self.speed, dt);
                    self.facing_right = false;
                }
                MoveDirection::Right => {
                    self.body.move_right(self.speed, dt);
                    self.facing_right = true;
                }
            }
            self.attack_ms -= dt;
            if self.attack_ms <= 0.0 {
                self.attacking = false;
                self.collision_damage = BOSS_CONTACT_DAMAGE;
            }
        }

        if self.first_contact {
            self.next_attack_ms -= dt;
            if self.next_attack_ms <= 0.0 {
                self.start_attack(rng);
            }
        }

        if self.hurt_ms > 0.0 {
            self.hurt_ms -= dt;
        }

        if self.beat.tick(dt) {
            self.animate(events);
        }
        false
    }

    fn start_attack(&mut self, rng: &mut impl Rng) {
        self.attacking = true;
        self.collision_damage = BOSS_ATTACK_DAMAGE;
        self.speed = 5.0 + rng.random::<f32>() * 5.0;
        self.attack_ms = Self::attack_duration_ms();
        self.next_attack_ms = roll_attack_period(rng);
        log::debug!("Endboss attacks at speed {:.2}", self.speed);
    }

    fn animate(&mut self, events: &mut Vec<GameEvent>) {
        if self.is_hurt() {
            self.animation.advance(sprites::ENDBOSS_HURT);
            events.push(GameEvent::Audio(AudioCue::Play(Sound::Poisoned)));
            return;
        }

        let intro_len = sprites::ENDBOSS_INTRODUCE.len() as u32;
        if self.first_contact && self.intro_frames < intro_len {
            if !self.music_switched {
                self.music_switched = true;
                events.push(GameEvent::Audio(AudioCue::SwitchMusic {
                    track: Sound::EndbossMusic,
                    volume: MUSIC_VOLUME,
                }));
                events.push(GameEvent::BossIntroduced);
            }
            self.animation.advance(sprites::ENDBOSS_INTRODUCE);
        } else if self.intro_frames >= intro_len && self.attacking {
            events.push(GameEvent::Audio(AudioCue::Volume(Sound::EndbossAttack, ATTACK_VOLUME)));
            events.push(GameEvent::Audio(AudioCue::Play(Sound::EndbossAttack)));
            self.animation.advance(sprites::ENDBOSS_ATTACK);
        } else if self.intro_frames >= intro_len {
            self.animation.advance(sprites::ENDBOSS_FLOATING);
        }

        if self.first_contact {
            self.intro_frames = self.intro_frames.saturating_add(1);
        }
    }
}

fn roll_attack_period(rng: &mut impl Rng) -> f32 {
    rng.random_range(ATTACK_PERIOD_MIN_MS..=ATTACK_PERIOD_MAX_MS) as f32
}

impl Drawable for Endboss {
    fn kind(&self) -> EntityKind {
        EntityKind::Endboss
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn sprite(&self) -> SpriteId {
        self.animation.current()
    }

    /// The art faces left; moving right mirrors it
    fn mirrored(&self) -> bool {
        self.facing_right
    }
}

impl Hostile for Endboss {
    fn foe(&self) -> Foe {
        Foe::Endboss
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    fn collision_damage(&self) -> i32 {
        self.collision_damage
    }

    fn is_dying(&self) -> bool {
        self.dying
    }

    fn start_dying(&mut self) {
        if self.dying {
            return;
        }
        self.dying = true;
        self.attacking = false;
        self.dying_ms = 0.0;
        self.beat.set_interval(BOSS_DYING_FRAME_MS);
        self.animation.advance(sprites::ENDBOSS_DEAD);
        log::info!("Endboss defeated");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn run(boss: &mut Endboss, ms: f32, rng: &mut Pcg32, events: &mut Vec<GameEvent>) -> bool {
        let mut t = 0.0;
        while t < ms {
            if boss.update(16.0, rng, events) {
                return true;
            }
            t += 16.0;
        }
        false
    }

    #[test]
    fn test_dormant_until_contact() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut events = Vec::new();
        let mut boss = Endboss::new().unwrap();
        run(&mut boss, 5000.0, &mut rng, &mut events);
        assert!(!boss.attacking);
        assert_eq!(boss.body.pos.x, BOSS_START_X);
        assert!(events.is_empty());
    }

    #[test]
    fn test_introduction_switches_music_once() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut events = Vec::new();
        let mut boss = Endboss::new().unwrap();
        boss.engage(&mut rng);
        run(&mut boss, 1500.0, &mut rng, &mut events);
        let switches = events
            .iter()
            .filter(|e| matches!(e, GameEvent::Audio(AudioCue::SwitchMusic { .. })))
            .count();
        assert_eq!(switches, 1);
        assert!(events.contains(&GameEvent::BossIntroduced));
    }

    #[test]
    fn test_attack_cycle_moves_toward_direction() {
        let mut rng = Pcg32::seed_from_u64(11);
        let mut events = Vec::new();
        let mut boss = Endboss::new().unwrap();
        boss.engage(&mut rng);
        boss.move_direction = MoveDirection::Left;

        // The first attack starts within the longest period
        let mut t = 0.0;
        while !boss.attacking {
            boss.update(16.0, &mut rng, &mut events);
            t += 16.0;
            assert!(t <= ATTACK_PERIOD_MAX_MS as f32 + 16.0);
        }
        assert_eq!(boss.collision_damage(), BOSS_ATTACK_DAMAGE);
        assert!((5.0..10.0).contains(&boss.speed));

        let x = boss.body.pos.x;
        run(&mut boss, 100.0, &mut rng, &mut events);
        assert!(boss.body.pos.x < x);
        assert!(!boss.mirrored());

        run(&mut boss, Endboss::attack_duration_ms(), &mut rng, &mut events);
        assert!(!boss.attacking);
        assert_eq!(boss.collision_damage(), BOSS_CONTACT_DAMAGE);
    }

    #[test]
    fn test_hurt_preempts_animation() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut events = Vec::new();
        let mut boss = Endboss::new().unwrap();
        boss.hurt();
        assert!(boss.is_hurt());
        run(&mut boss, 160.0, &mut rng, &mut events);
        assert!(sprites::ENDBOSS_HURT.contains(&boss.sprite()));
        assert!(events.contains(&GameEvent::Audio(AudioCue::Play(Sound::Poisoned))));
        run(&mut boss, 600.0, &mut rng, &mut events);
        assert!(!boss.is_hurt());
    }

    #[test]
    fn test_death_removes_after_sequence() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut events = Vec::new();
        let mut boss = Endboss::new().unwrap();
        boss.take_damage(BOSS_HEALTH);
        boss.start_dying();
        assert!(!run(&mut boss, 1100.0, &mut rng, &mut events));
        assert!(run(&mut boss, 200.0, &mut rng, &mut events));
    }
}
