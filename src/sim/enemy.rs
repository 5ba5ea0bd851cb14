//! Regular enemies: jellyfish and pufferfish
//!
//! The variant is rolled once at spawn and fixes size, health, speed range,
//! collision inset and animation timing. Colors are cosmetic.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::animation::{Animation, Beat};
use super::entity::{Body, Drawable, EntityKind, Foe, Hostile, Offset};
use crate::consts::SIM_STEP_MS;
use crate::error::GameError;
use crate::sprites::{self, Sequence, SpriteId};

/// Damage an enemy deals on contact
pub const ENEMY_COLLISION_DAMAGE: i32 = 20;
/// Spawn span along x
pub const SPAWN_MIN_X: f32 = 1000.0;
pub const SPAWN_SPAN_X: f32 = 23000.0;
pub const SPAWN_SPAN_Y: f32 = 450.0;
/// Jellyfish bob amplitude and the band it stays in
const JELLY_BOB: f32 = 5.0;
const JELLY_MIN_Y: f32 = 50.0;
const JELLY_MAX_Y: f32 = 450.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyVariant {
    JellyGreen,
    JellyLila,
    JellyPink,
    JellyYellow,
    PufferOrange,
    PufferPink,
    PufferGreen,
}

/// Physical stats shared by every color of one enemy type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    pub width: f32,
    pub height: f32,
    pub health: i32,
    pub min_speed: f32,
    pub speed_spread: f32,
    pub frame_ms: f32,
    pub dying_frame_ms: f32,
    pub offset: Offset,
}

const JELLY_STATS: EnemyStats = EnemyStats {
    width: 150.0,
    height: 150.0,
    health: 1,
    min_speed: 1.15,
    speed_spread: 0.25,
    frame_ms: 120.0,
    dying_frame_ms: 100.0,
    offset: Offset::from_shifted(20.0, 10.0, 25.0, 50.0),
};

const PUFFER_STATS: EnemyStats = EnemyStats {
    width: 300.0,
    height: 300.0,
    health: 2,
    min_speed: 0.15,
    speed_spread: 0.25,
    frame_ms: 100.0,
    dying_frame_ms: 130.0,
    offset: Offset::from_shifted(30.0, 15.0, 80.0, 120.0),
};

impl EnemyVariant {
    pub const COUNT: u8 = 7;

    pub fn from_index(index: u8) -> Result<Self, GameError> {
        Ok(match index {
            0 => EnemyVariant::JellyGreen,
            1 => EnemyVariant::JellyLila,
            2 => EnemyVariant::JellyPink,
            3 => EnemyVariant::JellyYellow,
            4 => EnemyVariant::PufferOrange,
            5 => EnemyVariant::PufferPink,
            6 => EnemyVariant::PufferGreen,
            other => return Err(GameError::UnknownEnemyVariant(other)),
        })
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        match rng.random_range(0..Self::COUNT) {
            0 => EnemyVariant::JellyGreen,
            1 => EnemyVariant::JellyLila,
            2 => EnemyVariant::JellyPink,
            3 => EnemyVariant::JellyYellow,
            4 => EnemyVariant::PufferOrange,
            5 => EnemyVariant::PufferPink,
            _ => EnemyVariant::PufferGreen,
        }
    }

    pub fn foe(&self) -> Foe {
        match self {
            EnemyVariant::JellyGreen
            | EnemyVariant::JellyLila
            | EnemyVariant::JellyPink
            | EnemyVariant::JellyYellow => Foe::JellyFish,
            EnemyVariant::PufferOrange | EnemyVariant::PufferPink | EnemyVariant::PufferGreen => {
                Foe::PufferFish
            }
        }
    }

    pub fn stats(&self) -> EnemyStats {
        match self.foe() {
            Foe::PufferFish => PUFFER_STATS,
            _ => JELLY_STATS,
        }
    }

    pub fn swim_sequence(&self) -> Sequence {
        match self {
            EnemyVariant::JellyGreen => sprites::JELLY_FISH_GREEN,
            EnemyVariant::JellyLila => sprites::JELLY_FISH_LILA,
            EnemyVariant::JellyPink => sprites::JELLY_FISH_PINK,
            EnemyVariant::JellyYellow => sprites::JELLY_FISH_YELLOW,
            EnemyVariant::PufferOrange => sprites::PUFFER_FISH_ORANGE,
            EnemyVariant::PufferPink => sprites::PUFFER_FISH_PINK,
            EnemyVariant::PufferGreen => sprites::PUFFER_FISH_GREEN,
        }
    }

    pub fn dying_sequence(&self) -> Sequence {
        match self {
            EnemyVariant::JellyGreen => sprites::JELLY_FISH_GREEN_DYING,
            EnemyVariant::JellyLila => sprites::JELLY_FISH_LILA_DYING,
            EnemyVariant::JellyPink => sprites::JELLY_FISH_PINK_DYING,
            EnemyVariant::JellyYellow => sprites::JELLY_FISH_YELLOW_DYING,
            EnemyVariant::PufferOrange => sprites::PUFFER_FISH_ORANGE_DYING,
            EnemyVariant::PufferPink => sprites::PUFFER_FISH_PINK_DYING,
            EnemyVariant::PufferGreen => sprites::PUFFER_FISH_GREEN_DYING,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Enemy {
    pub variant: EnemyVariant,
    pub body: Body,
    pub health: i32,
    pub speed: f32,
    pub dying: bool,
    animation: Animation,
    beat: Beat,
    /// Time spent in the death sequence
    dying_ms: f32,
    /// Jellyfish bob phase
    wave: f32,
}

impl Enemy {
    /// Build an enemy of a known variant at a fixed position
    pub fn new(variant: EnemyVariant, x: f32, y: f32, speed: f32) -> Result<Self, GameError> {
        let stats = variant.stats();
        Ok(Self {
            variant,
            body: Body::new(x, y, stats.width, stats.height, stats.offset),
            health: stats.health,
            speed,
            dying: false,
            animation: Animation::new("enemy swim", variant.swim_sequence())?,
            beat: Beat::new(stats.frame_ms),
            dying_ms: 0.0,
            wave: 0.0,
        })
    }

    /// Roll variant, position and speed
    pub fn spawn(rng: &mut impl Rng) -> Result<Self, GameError> {
        let x = SPAWN_MIN_X + rng.random::<f32>() * SPAWN_SPAN_X;
        let y = rng.random::<f32>() * SPAWN_SPAN_Y;
        let variant = EnemyVariant::random(rng);
        let stats = variant.stats();
        let speed = stats.min_speed + rng.random::<f32>() * stats.speed_spread;
        Self::new(variant, x, y, speed)
    }

    /// Total length of the death sequence
    pub fn death_duration_ms(&self) -> f32 {
        self.variant.dying_sequence().len() as f32 * self.variant.stats().dying_frame_ms
    }

    /// Advance movement and animation. Returns true once the death sequence
    /// has fully played and the enemy should be removed.
    pub fn update(&mut self, dt: f32, rng: &mut impl Rng) -> bool {
        if self.dying {
            if self.beat.tick(dt) {
                self.animation.advance(self.variant.dying_sequence());
            }
            self.dying_ms += dt;
            return self.dying_ms >= self.death_duration_ms();
        }

        self.body.move_left(self.speed, dt);
        if self.variant.foe() == Foe::JellyFish {
            let steps = dt / SIM_STEP_MS;
            self.body.pos.y = (self.body.pos.y + self.wave.cos() * JELLY_BOB * steps)
                .clamp(JELLY_MIN_Y, JELLY_MAX_Y);
            self.wave += rng.random::<f32>() * 0.1 * steps;
        }
        if self.beat.tick(dt) {
            self.animation.advance(self.variant.swim_sequence());
        }
        false
    }
}

impl Drawable for Enemy {
    fn kind(&self) -> EntityKind {
        EntityKind::Enemy(self.variant.foe())
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn sprite(&self) -> SpriteId {
        self.animation.current()
    }
}

impl Hostile for Enemy {
    fn foe(&self) -> Foe {
        self.variant.foe()
    }

    fn health(&self) -> i32 {
        self.health
    }

    fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    fn collision_damage(&self) -> i32 {
        ENEMY_COLLISION_DAMAGE
    }

    fn is_dying(&self) -> bool {
        self.dying
    }

    fn start_dying(&mut self) {
        if self.dying {
            return;
        }
        self.dying = true;
        self.dying_ms = 0.0;
        self.beat.set_interval(self.variant.stats().dying_frame_ms);
        self.animation.advance(self.variant.dying_sequence());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_variant_table() {
        for i in 0..EnemyVariant::COUNT {
            let variant = EnemyVariant::from_index(i).unwrap();
            let expected = if i < 4 { Foe::JellyFish } else { Foe::PufferFish };
            assert_eq!(variant.foe(), expected);
            assert!(!variant.swim_sequence().is_empty());
            assert!(!variant.dying_sequence().is_empty());
        }
        assert!(matches!(
            EnemyVariant::from_index(7),
            Err(GameError::UnknownEnemyVariant(7))
        ));
    }

    #[test]
    fn test_spawn_ranges() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..200 {
            let enemy = Enemy::spawn(&mut rng).unwrap();
            let stats = enemy.variant.stats();
            assert!(enemy.body.pos.x >= SPAWN_MIN_X && enemy.body.pos.x < SPAWN_MIN_X + SPAWN_SPAN_X);
            assert!(enemy.body.pos.y >= 0.0 && enemy.body.pos.y < SPAWN_SPAN_Y);
            assert!(enemy.speed >= stats.min_speed && enemy.speed <= stats.min_speed + stats.speed_spread);
            assert_eq!(enemy.health, stats.health);
        }
    }

    #[test]
    fn test_drifts_left_and_jelly_stays_in_band() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut jelly = Enemy::new(EnemyVariant::JellyPink, 5000.0, 449.0, 1.2).unwrap();
        for _ in 0..500 {
            jelly.update(SIM_STEP_MS, &mut rng);
            assert!((JELLY_MIN_Y..=JELLY_MAX_Y).contains(&jelly.body.pos.y));
        }
        assert!(jelly.body.pos.x < 5000.0);

        let mut puffer = Enemy::new(EnemyVariant::PufferGreen, 5000.0, 100.0, 0.2).unwrap();
        puffer.update(SIM_STEP_MS, &mut rng);
        assert_eq!(puffer.body.pos.y, 100.0);
        assert!((puffer.body.pos.x - 4999.8).abs() < 1e-3);
    }

    #[test]
    fn test_death_sequence_then_removal() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut puffer = Enemy::new(EnemyVariant::PufferOrange, 3000.0, 100.0, 0.2).unwrap();
        puffer.take_damage(2);
        assert!(puffer.health() <= 0);
        puffer.start_dying();
        assert!(puffer.is_dying());
        assert_eq!(puffer.sprite(), sprites::PUFFER_FISH_ORANGE_DYING[0]);

        // 3 frames at 130ms
        let mut elapsed = 0.0;
        let x = puffer.body.pos.x;
        while !puffer.update(SIM_STEP_MS, &mut rng) {
            elapsed += SIM_STEP_MS;
            assert!(elapsed < 1000.0);
        }
        assert!(elapsed + SIM_STEP_MS >= 390.0);
        // Dying enemies stop swimming
        assert_eq!(puffer.body.pos.x, x);
    }
}
