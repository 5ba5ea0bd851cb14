//! Level bounds and the procedural level generator
//!
//! Placement is rejection sampling: draw a candidate, throw it away while it
//! sits too close to something already placed. Every loop is bounded; a
//! layout that cannot be completed is discarded and started over, and
//! running out of layouts is an error rather than a hang.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::barrier::{Barrier, BarrierShape};
use super::endboss::Endboss;
use super::enemy::{Enemy, SPAWN_MIN_X, SPAWN_SPAN_X};
use super::items::{BOTTLE_Y, BackgroundLayer, Bottle, Coin, Light};
use crate::consts::{LEVEL_END_X, LEVEL_END_Y, LEVEL_START_X, LEVEL_START_Y};
use crate::error::GameError;
use crate::settings::GenerationLimits;
use crate::sprites;

pub const BARRIER_COUNT: usize = 7;
pub const COIN_GROUP_COUNT: usize = 5;
pub const COINS_PER_GROUP: usize = 5;
pub const BOTTLE_COUNT: usize = 5;
pub const ENEMY_COUNT: usize = 20;

pub const BARRIER_SPACING: f32 = 2000.0;
pub const COIN_GROUP_SPACING: f32 = 500.0;
pub const COIN_BARRIER_CLEARANCE: f32 = 1000.0;
pub const BOTTLE_SPACING: f32 = 500.0;
pub const BOTTLE_BARRIER_CLEARANCE: f32 = 1000.0;
pub const BOTTLE_COIN_CLEARANCE: f32 = 500.0;
pub const ENEMY_SPACING: f32 = 500.0;

const BARRIER_MIN_X: f32 = 1000.0;
const BARRIER_SPAN_X: f32 = 20000.0;
const ITEM_MIN_X: f32 = 1000.0;
const ITEM_SPAN_X: f32 = 22000.0;
const COIN_MIN_Y: f32 = 200.0;
/// Coin anchors use whole-pixel heights in `[200, 400]`
const COIN_Y_STEPS: u32 = 201;
const COIN_STRIDE_X: f32 = 100.0;

/// Vertical coin offsets, one formation per group
pub const COIN_FORMATIONS: [[f32; COINS_PER_GROUP]; 4] = [
    [0.0, 75.0, 105.0, 75.0, 0.0],
    [0.0, -75.0, -105.0, -75.0, 0.0],
    [0.0, -45.0, -90.0, -135.0, -180.0],
    [0.0, 45.0, 90.0, 135.0, 180.0],
];

/// The region the character may move in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelBounds {
    pub start_x: f32,
    pub end_x: f32,
    pub start_y: f32,
    pub end_y: f32,
}

impl Default for LevelBounds {
    fn default() -> Self {
        Self {
            start_x: LEVEL_START_X,
            end_x: LEVEL_END_X,
            start_y: LEVEL_START_Y,
            end_y: LEVEL_END_Y,
        }
    }
}

/// Everything the world owns for one level. Lists only shrink during play.
#[derive(Debug, Clone)]
pub struct Level {
    pub bounds: LevelBounds,
    pub enemies: Vec<Enemy>,
    /// Removed once its death sequence has played
    pub boss: Option<Endboss>,
    pub barriers: Vec<Barrier>,
    pub coins: Vec<Coin>,
    pub bottles: Vec<Bottle>,
    pub lights: Vec<Light>,
    pub background: Vec<BackgroundLayer>,
    /// Anchor of each coin formation, kept for inspection
    pub coin_anchors: Vec<Vec2>,
}

/// Positions chosen by one layout attempt
struct Layout {
    barriers: Vec<(BarrierShape, Vec2)>,
    coin_anchors: Vec<(Vec2, usize)>,
    bottles: Vec<Vec2>,
}

impl Level {
    /// Generate a complete level from `rng`
    pub fn generate(rng: &mut Pcg32, limits: &GenerationLimits) -> Result<Self, GameError> {
        let mut last_err = None;
        for attempt in 1..=limits.max_layout_attempts {
            match Self::try_generate(rng, limits) {
                Ok(level) => {
                    log::info!(
                        "Level generated after {} layout attempt(s): {} barriers, {} coins, {} bottles, {} enemies",
                        attempt,
                        level.barriers.len(),
                        level.coins.len(),
                        level.bottles.len(),
                        level.enemies.len()
                    );
                    return Ok(level);
                }
                Err(err @ GameError::LevelGenerationFailed { .. }) => {
                    log::debug!("Layout attempt {} rejected: {}", attempt, err);
                    last_err = Some(err);
                }
                Err(err) => return Err(err),
            }
        }
        log::warn!("Level generation gave up after {} layouts", limits.max_layout_attempts);
        Err(last_err.unwrap_or(GameError::LevelGenerationFailed {
            item: "layout",
            placed: 0,
            attempts: limits.max_layout_attempts,
        }))
    }

    fn try_generate(rng: &mut Pcg32, limits: &GenerationLimits) -> Result<Self, GameError> {
        let layout = Layout::sample(rng, limits.max_placement_attempts)?;

        let mut enemies = (0..ENEMY_COUNT)
            .map(|_| Enemy::spawn(rng))
            .collect::<Result<Vec<_>, _>>()?;
        adjust_enemy_spacing(&mut enemies, rng, limits.max_placement_attempts)?;

        let barriers = layout
            .barriers
            .iter()
            .map(|(shape, pos)| Barrier::new(*shape, pos.x))
            .collect();

        let mut coins = Vec::with_capacity(COIN_GROUP_COUNT * COINS_PER_GROUP);
        for (anchor, formation) in &layout.coin_anchors {
            for pos in coin_formation(*anchor, *formation) {
                coins.push(Coin::new(pos.x, pos.y)?);
            }
        }

        let bottles = layout
            .bottles
            .iter()
            .map(|pos| Bottle::new(pos.x))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            bounds: LevelBounds::default(),
            enemies,
            boss: Some(Endboss::new()?),
            barriers,
            coins,
            bottles,
            lights: lights(),
            background: BackgroundLayer::strip(),
            coin_anchors: layout.coin_anchors.iter().map(|(a, _)| *a).collect(),
        })
    }
}

impl Layout {
    fn sample(rng: &mut Pcg32, max_attempts: u32) -> Result<Self, GameError> {
        let mut barriers: Vec<(BarrierShape, Vec2)> = Vec::with_capacity(BARRIER_COUNT);
        for placed in 0..BARRIER_COUNT {
            let taken: Vec<Vec2> = barriers.iter().map(|(_, p)| *p).collect();
            let candidate = sample(
                rng,
                max_attempts,
                "barriers",
                placed,
                |rng| {
                    let shape = BarrierShape::ALL[rng.random_range(0..BarrierShape::ALL.len())];
                    let x = BARRIER_MIN_X + rng.random::<f32>() * BARRIER_SPAN_X;
                    (shape, Vec2::new(x, shape.anchor_y()))
                },
                |(_, pos)| !within(*pos, &taken, BARRIER_SPACING),
            )?;
            barriers.push(candidate);
        }
        let barrier_points: Vec<Vec2> = barriers.iter().map(|(_, p)| *p).collect();

        let mut anchors: Vec<Vec2> = Vec::with_capacity(COIN_GROUP_COUNT);
        let mut coin_anchors = Vec::with_capacity(COIN_GROUP_COUNT);
        for placed in 0..COIN_GROUP_COUNT {
            let anchor = sample(
                rng,
                max_attempts,
                "coin groups",
                placed,
                |rng| {
                    let x = ITEM_MIN_X + rng.random::<f32>() * ITEM_SPAN_X;
                    let y = COIN_MIN_Y + rng.random_range(0..COIN_Y_STEPS) as f32;
                    Vec2::new(x, y)
                },
                |pos| {
                    !within(*pos, &anchors, COIN_GROUP_SPACING)
                        && !within(*pos, &barrier_points, COIN_BARRIER_CLEARANCE)
                },
            )?;
            anchors.push(anchor);
            coin_anchors.push((anchor, rng.random_range(0..COIN_FORMATIONS.len())));
        }
        let coin_points: Vec<Vec2> = coin_anchors
            .iter()
            .flat_map(|(anchor, formation)| coin_formation(*anchor, *formation))
            .collect();

        let mut bottles: Vec<Vec2> = Vec::with_capacity(BOTTLE_COUNT);
        for placed in 0..BOTTLE_COUNT {
            let bottle = sample(
                rng,
                max_attempts,
                "bottles",
                placed,
                |rng| Vec2::new(ITEM_MIN_X + rng.random::<f32>() * ITEM_SPAN_X, BOTTLE_Y),
                |pos| {
                    !within(*pos, &bottles, BOTTLE_SPACING)
                        && !within(*pos, &barrier_points, BOTTLE_BARRIER_CLEARANCE)
                        && !within(*pos, &coin_points, BOTTLE_COIN_CLEARANCE)
                },
            )?;
            bottles.push(bottle);
        }

        Ok(Self {
            barriers,
            coin_anchors,
            bottles,
        })
    }
}

/// Draw candidates until one is valid or the attempts run out
fn sample<T>(
    rng: &mut Pcg32,
    max_attempts: u32,
    item: &'static str,
    placed: usize,
    mut candidate: impl FnMut(&mut Pcg32) -> T,
    valid: impl Fn(&T) -> bool,
) -> Result<T, GameError> {
    for _ in 0..max_attempts {
        let c = candidate(rng);
        if valid(&c) {
            return Ok(c);
        }
    }
    Err(GameError::LevelGenerationFailed {
        item,
        placed,
        attempts: max_attempts,
    })
}

/// Whether `point` is closer than `min_distance` to any of `others`
fn within(point: Vec2, others: &[Vec2], min_distance: f32) -> bool {
    others.iter().any(|o| o.distance(point) < min_distance)
}

/// Coin positions of one formation, 100 px apart from the anchor
pub fn coin_formation(anchor: Vec2, formation: usize) -> impl Iterator<Item = Vec2> {
    let offsets = COIN_FORMATIONS[formation % COIN_FORMATIONS.len()];
    offsets
        .into_iter()
        .enumerate()
        .map(move |(j, dy)| Vec2::new(anchor.x + j as f32 * COIN_STRIDE_X, anchor.y + dy))
}

/// Move regular enemies until every pair is at least `ENEMY_SPACING` apart on x.
///
/// Each enemy is settled against all others in turn; once settled it never
/// moves again, and later ones are placed clear of it. The boss is not part
/// of this pass.
pub fn adjust_enemy_spacing(enemies: &mut [Enemy], rng: &mut Pcg32, max_attempts: u32) -> Result<(), GameError> {
    for index in 0..enemies.len() {
        let mut attempts = 0;
        while crowded(enemies, index) {
            attempts += 1;
            if attempts > max_attempts {
                return Err(GameError::LevelGenerationFailed {
                    item: "enemies",
                    placed: index,
                    attempts: max_attempts,
                });
            }
            enemies[index].body.pos.x = SPAWN_MIN_X + rng.random::<f32>() * SPAWN_SPAN_X;
        }
    }
    Ok(())
}

fn crowded(enemies: &[Enemy], index: usize) -> bool {
    let x = enemies[index].body.pos.x;
    enemies
        .iter()
        .enumerate()
        .any(|(i, other)| i != index && (x - other.body.pos.x).abs() < ENEMY_SPACING)
}

/// Light shafts: two per 7680 px stretch
fn lights() -> Vec<Light> {
    (0..4)
        .flat_map(|i| {
            let base = i as f32 * 7680.0;
            [
                Light::new(sprites::LIGHT_1, 2560.0 + base),
                Light::new(sprites::LIGHT_2, 3840.0 + base),
            ]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn generate(seed: u64) -> Level {
        let mut rng = Pcg32::seed_from_u64(seed);
        Level::generate(&mut rng, &GenerationLimits::default()).unwrap()
    }

    fn assert_invariants(level: &Level) {
        let barriers: Vec<Vec2> = level.barriers.iter().map(|b| b.body.pos).collect();
        for (i, a) in barriers.iter().enumerate() {
            for b in &barriers[i + 1..] {
                assert!(a.distance(*b) >= BARRIER_SPACING);
            }
        }
        for (i, a) in level.coin_anchors.iter().enumerate() {
            for b in &level.coin_anchors[i + 1..] {
                assert!(a.distance(*b) >= COIN_GROUP_SPACING);
            }
            assert!(!within(*a, &barriers, COIN_BARRIER_CLEARANCE));
        }
        let bottles: Vec<Vec2> = level.bottles.iter().map(|b| b.body.pos).collect();
        let coins: Vec<Vec2> = level.coins.iter().map(|c| c.body.pos).collect();
        for (i, a) in bottles.iter().enumerate() {
            for b in &bottles[i + 1..] {
                assert!(a.distance(*b) >= BOTTLE_SPACING);
            }
            assert!(!within(*a, &barriers, BOTTLE_BARRIER_CLEARANCE));
            assert!(!within(*a, &coins, BOTTLE_COIN_CLEARANCE));
        }
        for (i, a) in level.enemies.iter().enumerate() {
            for b in &level.enemies[i + 1..] {
                assert!((a.body.pos.x - b.body.pos.x).abs() >= ENEMY_SPACING);
            }
        }
    }

    #[test]
    fn test_entity_counts() {
        let level = generate(1);
        assert_eq!(level.barriers.len(), BARRIER_COUNT);
        assert_eq!(level.coins.len(), COIN_GROUP_COUNT * COINS_PER_GROUP);
        assert_eq!(level.bottles.len(), BOTTLE_COUNT);
        assert_eq!(level.enemies.len(), ENEMY_COUNT);
        assert!(level.boss.is_some());
        assert_eq!(level.lights.len(), 8);
        assert_eq!(level.background.len(), 80);
        assert_invariants(&level);
    }

    #[test]
    fn test_same_seed_same_level() {
        let a = generate(99);
        let b = generate(99);
        let xs = |l: &Level| l.barriers.iter().map(|b| b.body.pos.x).collect::<Vec<_>>();
        assert_eq!(xs(&a), xs(&b));
        assert_eq!(a.coin_anchors, b.coin_anchors);
    }

    #[test]
    fn test_coin_formation_layout() {
        let coins: Vec<Vec2> = coin_formation(Vec2::new(1000.0, 300.0), 2).collect();
        assert_eq!(coins.len(), 5);
        assert_eq!(coins[4], Vec2::new(1400.0, 120.0));
    }

    #[test]
    fn test_impossible_limits_fail_explicitly() {
        let mut rng = Pcg32::seed_from_u64(5);
        let limits = GenerationLimits {
            max_placement_attempts: 1,
            max_layout_attempts: 1,
        };
        // A single draw per item cannot place seven barriers 2000 apart every time
        let mut failures = 0;
        for _ in 0..20 {
            match Level::generate(&mut rng, &limits) {
                Err(GameError::LevelGenerationFailed { attempts, .. }) => {
                    assert_eq!(attempts, 1);
                    failures += 1;
                }
                Err(other) => panic!("unexpected error {other}"),
                Ok(_) => {}
            }
        }
        assert!(failures > 0);
    }

    #[test]
    fn test_enemy_spacing_pass() {
        let mut rng = Pcg32::seed_from_u64(8);
        let mut enemies: Vec<Enemy> = (0..ENEMY_COUNT).map(|_| Enemy::spawn(&mut rng).unwrap()).collect();
        for e in enemies.iter_mut() {
            e.body.pos.x = 5000.0;
        }
        adjust_enemy_spacing(&mut enemies, &mut rng, 2000).unwrap();
        for (i, a) in enemies.iter().enumerate() {
            for b in &enemies[i + 1..] {
                assert!((a.body.pos.x - b.body.pos.x).abs() >= ENEMY_SPACING);
            }
        }
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(48))]

            #[test]
            fn generated_levels_respect_spacing(seed in any::<u64>()) {
                let mut rng = Pcg32::seed_from_u64(seed);
                let level = Level::generate(&mut rng, &GenerationLimits::default());
                prop_assert!(level.is_ok());
                if let Ok(level) = level {
                    assert_invariants(&level);
                }
            }
        }
    }
}
