//! The player character
//!
//! One `update` per simulation step handles barrier permissions, movement,
//! idle sinking, the death drift and the animation state machine. Attacks
//! take effect on the last frame of their animation, not the first.

use std::f32::consts::FRAC_PI_4;

use serde::{Deserialize, Serialize};

use super::animation::{Animation, Beat};
use super::barrier::Barrier;
use super::collision::BlockedFaces;
use super::entity::{Body, Drawable, EntityKind, Foe, Hostile, Offset};
use super::items::BubbleKind;
use super::level::LevelBounds;
use super::state::{AudioCue, GameEvent};
use crate::audio::Sound;
use crate::consts::*;
use crate::error::GameError;
use crate::platform::Keyboard;
use crate::sprites::{self, Sequence, SpriteId};

pub const CHARACTER_WIDTH: f32 = 407.0;
pub const CHARACTER_HEIGHT: f32 = 500.0;
/// Distance above the floor where a jellyfish-killed character comes to rest
const SHOCK_REST_ABOVE_FLOOR: f32 = 30.0;
/// Distance below the ceiling where a poisoned character comes to rest
const POISON_REST_BELOW_TOP: f32 = 100.0;

/// Per-direction movement permissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permissions {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Permissions {
    pub const ALL: Permissions = Permissions {
        left: true,
        right: true,
        up: true,
        down: true,
    };
    pub const NONE: Permissions = Permissions {
        left: false,
        right: false,
        up: false,
        down: false,
    };

    pub fn block(&mut self, faces: BlockedFaces) {
        self.right &= !faces.right;
        self.left &= !faces.left;
        self.down &= !faces.down;
        self.up &= !faces.up;
    }

    pub fn any_blocked(&self) -> bool {
        !(self.left && self.right && self.up && self.down)
    }
}

/// A bubble the character just blew, in world coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BubbleLaunch {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub kind: BubbleKind,
}

/// Effects of one character step the world has to apply
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CharacterOutcome {
    /// New value for the world's attack damage
    pub attack_damage: Option<i32>,
    pub launch: Option<BubbleLaunch>,
    /// The fin slap reached its finishing frame this step
    pub finishing_slap: bool,
}

#[derive(Debug, Clone)]
pub struct Character {
    pub body: Body,
    pub speed: f32,
    pub energy: i32,
    pub coins: u32,
    pub coin_percentage: i32,
    /// Bubble ammo, in steps of `BOTTLE_AMMO`
    pub bottles: u32,
    pub can_move: Permissions,
    /// Counts up once per `IDLE_BEAT_MS` without input
    pub idle_count: u32,
    /// Last enemy type touched; picks hurt and death visuals
    pub enemy_type: Option<Foe>,
    /// World time of the last damaging hit
    pub last_hit: Option<f64>,
    pub facing_left: bool,
    /// Set while a fin slap is landing on a pufferfish
    pub execute_attack: bool,
    tilt: f32,
    animation: Animation,
    beat: Beat,
    idle_beat: Beat,
    /// Slap finished; the key must be released before the next one
    slap_latched: bool,
    /// Bubble blown; the key must be released before the next one
    bubble_latched: bool,
    was_slapping: bool,
    swimming: bool,
    snoring: bool,
    bumping: bool,
    death_ms: f32,
    frozen: bool,
}

impl Character {
    pub fn new() -> Result<Self, GameError> {
        Ok(Self {
            body: Body::new(
                CHARACTER_START_X,
                CHARACTER_START_Y,
                CHARACTER_WIDTH,
                CHARACTER_HEIGHT,
                Offset::from_shifted(240.0, 80.0, 160.0, 360.0),
            ),
            speed: CHARACTER_SPEED,
            energy: CHARACTER_MAX_ENERGY,
            coins: 0,
            coin_percentage: 0,
            bottles: 0,
            can_move: Permissions::ALL,
            idle_count: 0,
            enemy_type: None,
            last_hit: None,
            facing_left: false,
            execute_attack: false,
            tilt: 0.0,
            animation: Animation::new("character idle", sprites::CHARACTER_IDLE)?,
            beat: Beat::new(CHARACTER_FRAME_MS),
            idle_beat: Beat::new(IDLE_BEAT_MS),
            slap_latched: false,
            bubble_latched: false,
            was_slapping: false,
            swimming: false,
            snoring: false,
            bumping: false,
            death_ms: 0.0,
            frozen: false,
        })
    }

    // --- Stats ---

    pub fn is_dead(&self) -> bool {
        self.energy == 0
    }

    /// Inside the hurt window of the last hit
    pub fn is_hurt(&self, now: f64) -> bool {
        self.last_hit.is_some_and(|hit| now - hit < HURT_WINDOW_MS)
    }

    /// Apply damage unless still hurt. Returns whether it landed.
    pub fn hit(&mut self, damage: i32, now: f64) -> bool {
        if self.is_hurt(now) {
            return false;
        }
        self.energy = (self.energy - damage).max(0);
        self.last_hit = Some(now);
        true
    }

    pub fn count_coins(&mut self) {
        if self.coins > 100 {
            return;
        }
        self.coins += 1;
        self.coin_percentage = match self.coins {
            c if c == TOTAL_COINS => 100,
            c if c >= 20 => 80,
            c if c >= 15 => 60,
            c if c >= 10 => 40,
            c if c >= 5 => 20,
            _ => self.coin_percentage,
        };
    }

    pub fn count_bottles(&mut self) {
        self.bottles = (self.bottles + BOTTLE_AMMO).min(MAX_AMMO);
    }

    /// Whether the fin-slap stance is held (a finished slap needs a fresh press)
    pub fn slap_held(&self, keyboard: &Keyboard) -> bool {
        keyboard.space && !self.slap_latched
    }

    pub fn bubble_held(&self, keyboard: &Keyboard) -> bool {
        keyboard.d && !self.bubble_latched
    }

    /// Stance rule: pufferfish only take damage from the slap stance,
    /// jellyfish and the boss from anything else. Never while hurt.
    pub fn can_damage(&self, foe: Foe, now: f64, keyboard: &Keyboard) -> bool {
        if self.is_hurt(now) {
            return false;
        }
        let slap = self.slap_held(keyboard);
        match foe {
            Foe::PufferFish => slap,
            Foe::JellyFish | Foe::Endboss => !slap,
        }
    }

    /// Damage `target` if the stance rule allows it
    pub fn attack(&self, target: &mut dyn Hostile, damage: i32, now: f64, keyboard: &Keyboard) -> bool {
        if self.can_damage(target.foe(), now, keyboard) {
            target.take_damage(damage);
            true
        } else {
            false
        }
    }

    /// Finishing fin-slap frame: pufferfish in reach take the heavier hit.
    /// The slap stance is implied by the frame itself.
    pub fn finishing_strike(&self, target: &mut dyn Hostile, now: f64) -> bool {
        if target.foe() != Foe::PufferFish || self.is_hurt(now) {
            return false;
        }
        target.take_damage(FINISHING_SLAP_DAMAGE);
        true
    }

    pub fn hurt_sound(&self) -> Sound {
        match self.enemy_type {
            Some(Foe::JellyFish) => Sound::ElectricShock,
            _ => Sound::Poisoned,
        }
    }

    /// Death animation has finished; nothing about the character changes anymore
    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    // --- Per-step update ---

    pub fn update(
        &mut self,
        dt: f32,
        now: f64,
        keyboard: &Keyboard,
        barriers: &[Barrier],
        bounds: &LevelBounds,
        events: &mut Vec<GameEvent>,
    ) -> CharacterOutcome {
        let mut outcome = CharacterOutcome::default();
        if self.frozen {
            return outcome;
        }

        if self.idle_beat.tick(dt) {
            self.idle_count = self.idle_count.saturating_add(1);
        }
        if !keyboard.space {
            self.slap_latched = false;
        }
        if !keyboard.d {
            self.bubble_latched = false;
        }
        self.handle_attack_input(keyboard, events);

        self.check_barriers(barriers);
        self.bump_sound(keyboard, events);

        if !self.is_dead() {
            self.handle_movement(dt, keyboard, bounds, events);
            self.handle_idle_sink(dt, bounds, events);
        }

        self.tilt = if keyboard.up {
            -FRAC_PI_4
        } else if keyboard.down {
            FRAC_PI_4
        } else {
            0.0
        };

        if self.is_dead() {
            self.death_drift(dt, bounds);
        }

        let sequence = self.select_sequence(now, keyboard);
        if sequence == sprites::CHARACTER_ATTACK_FIN_SLAP {
            outcome.attack_damage = Some(SLAP_DAMAGE);
        }
        if !self.frozen && self.beat.tick(dt) {
            self.play(sequence, now, keyboard, &mut outcome);
        }
        outcome
    }

    fn handle_attack_input(&mut self, keyboard: &Keyboard, events: &mut Vec<GameEvent>) {
        let slapping = self.slap_held(keyboard);
        if self.bubble_held(keyboard) {
            self.idle_count = 0;
        } else if slapping {
            self.idle_count = 0;
            if !self.was_slapping {
                events.push(GameEvent::Audio(AudioCue::Restart(Sound::FinSlap)));
            }
        }
        self.was_slapping = slapping;
    }

    /// Restore permissions unless dead, then let every barrier veto directions
    fn check_barriers(&mut self, barriers: &[Barrier]) {
        if !self.is_dead() {
            self.can_move = Permissions::ALL;
        }
        for barrier in barriers {
            if barrier.is_colliding_top(&self.body) || barrier.is_colliding_bottom(&self.body) {
                self.can_move.block(barrier.blocked_faces(&self.body));
            }
        }
    }

    fn bump_sound(&mut self, keyboard: &Keyboard, events: &mut Vec<GameEvent>) {
        let bumping = keyboard.is_moving() && self.can_move.any_blocked();
        if bumping && !self.bumping {
            events.push(GameEvent::Audio(AudioCue::Play(Sound::Collision)));
        }
        self.bumping = bumping;
    }

    fn handle_movement(
        &mut self,
        dt: f32,
        keyboard: &Keyboard,
        bounds: &LevelBounds,
        events: &mut Vec<GameEvent>,
    ) {
        let mut moved = false;
        if keyboard.right && self.body.pos.x < bounds.end_x && self.can_move.right {
            self.body.move_right(self.speed, dt);
            self.facing_left = false;
            moved = true;
        }
        if keyboard.left && self.body.pos.x > bounds.start_x && self.can_move.left {
            self.body.move_left(self.speed, dt);
            self.facing_left = true;
            moved = true;
        }
        if keyboard.up && self.body.pos.y > bounds.start_y && self.can_move.up {
            self.body.move_up(self.speed, dt);
            moved = true;
        }
        if keyboard.down && self.body.pos.y < bounds.end_y && self.can_move.down {
            self.body.move_down(self.speed, dt);
            moved = true;
        }

        if keyboard.is_moving() {
            self.idle_count = 0;
        }
        if moved && !self.swimming {
            events.push(GameEvent::Audio(AudioCue::Play(Sound::Swimming)));
        } else if !moved && self.swimming {
            events.push(GameEvent::Audio(AudioCue::Pause(Sound::Swimming)));
        }
        self.swimming = moved;
    }

    /// Dozing off: sink slowly toward the floor and snore
    fn handle_idle_sink(&mut self, dt: f32, bounds: &LevelBounds, events: &mut Vec<GameEvent>) {
        let dozing = self.idle_count >= IDLE_SINK_AFTER;
        if dozing && !self.snoring {
            events.push(GameEvent::Audio(AudioCue::Loop(Sound::Snoring, true)));
            events.push(GameEvent::Audio(AudioCue::Play(Sound::Snoring)));
            self.snoring = true;
        } else if !dozing && self.snoring {
            events.push(GameEvent::Audio(AudioCue::Pause(Sound::Snoring)));
            self.snoring = false;
        }
        if dozing && self.body.pos.y < bounds.end_y && self.can_move.down {
            self.body.move_down(self.speed, dt / DRIFT_DIVISOR);
        }
    }

    fn death_drift(&mut self, dt: f32, bounds: &LevelBounds) {
        let limit = match self.enemy_type {
            Some(Foe::JellyFish) => {
                if self.body.pos.y < bounds.end_y - SHOCK_REST_ABOVE_FLOOR {
                    self.body.move_down(self.speed, dt / DRIFT_DIVISOR);
                }
                SHOCK_DEATH_MS
            }
            _ => {
                if self.body.pos.y > bounds.start_y + POISON_REST_BELOW_TOP {
                    self.body.move_up(self.speed, dt / DRIFT_DIVISOR);
                }
                POISON_DEATH_MS
            }
        };
        self.death_ms += dt;
        if self.death_ms >= limit {
            self.frozen = true;
            log::info!("Character death animation finished after {}ms", self.death_ms);
        }
    }

    /// Animation state machine, highest priority first
    fn select_sequence(&self, now: f64, keyboard: &Keyboard) -> Sequence {
        let shocked = self.enemy_type == Some(Foe::JellyFish);
        if self.is_dead() {
            return if shocked {
                sprites::CHARACTER_DEAD_SHOCKED
            } else {
                sprites::CHARACTER_DEAD_POISONED
            };
        }
        if self.is_hurt(now) {
            return if shocked {
                sprites::CHARACTER_HURT_SHOCKED
            } else {
                sprites::CHARACTER_HURT_POISONED
            };
        }
        if self.bubble_held(keyboard) {
            return if self.bottles > 0 {
                sprites::CHARACTER_ATTACK_POISONED_BUBBLE
            } else {
                sprites::CHARACTER_ATTACK_BUBBLE
            };
        }
        if self.slap_held(keyboard) {
            return sprites::CHARACTER_ATTACK_FIN_SLAP;
        }
        if keyboard.is_moving() {
            return sprites::CHARACTER_SWIM;
        }
        match self.idle_count {
            n if n >= IDLE_SLEEP_AFTER => sprites::CHARACTER_SLEEP,
            n if n >= IDLE_SINK_AFTER => sprites::CHARACTER_FALL_ASLEEP,
            _ => sprites::CHARACTER_IDLE,
        }
    }

    fn play(
        &mut self,
        sequence: Sequence,
        now: f64,
        keyboard: &Keyboard,
        outcome: &mut CharacterOutcome,
    ) {
        // The death sequence holds on its last frame
        let last = sequence.len().saturating_sub(1);
        if self.is_dead() && self.animation.sequence() == sequence && self.animation.current() == sequence[last] {
            return;
        }
        let shown = self.animation.advance(sequence);
        if shown != last || self.is_dead() {
            return;
        }
        if self.bubble_held(keyboard) && !self.is_hurt(now) {
            let launch = self.blow_bubble(keyboard);
            outcome.attack_damage = Some(launch.kind.damage());
            outcome.launch = Some(launch);
        }
        if self.slap_held(keyboard) {
            outcome.finishing_slap = true;
            self.slap_latched = true;
        }
    }

    /// Spend ammo on a poisoned bubble if there is any and report where it starts
    fn blow_bubble(&mut self, keyboard: &Keyboard) -> BubbleLaunch {
        let (dx, dy, speed) = if keyboard.right {
            (300.0, 280.0, 10.0)
        } else if keyboard.left {
            (0.0, 280.0, -30.0)
        } else if self.facing_left {
            (0.0, 280.0, -20.0)
        } else {
            (300.0, 280.0, 0.0)
        };
        let kind = if self.bottles > 0 {
            self.bottles = self.bottles.saturating_sub(BOTTLE_AMMO);
            BubbleKind::Poisoned
        } else {
            BubbleKind::Normal
        };
        self.bubble_latched = true;
        self.execute_attack = false;
        BubbleLaunch {
            x: self.body.pos.x + dx,
            y: self.body.pos.y + dy,
            speed,
            kind,
        }
    }
}

impl Drawable for Character {
    fn kind(&self) -> EntityKind {
        EntityKind::Character
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn sprite(&self) -> SpriteId {
        self.animation.current()
    }

    fn mirrored(&self) -> bool {
        self.facing_left
    }

    /// Tilted while swimming up or down
    fn rotation(&self) -> Option<f32> {
        Some(self.tilt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::barrier::BarrierShape;

    fn step(
        character: &mut Character,
        ms: f32,
        start: f64,
        keyboard: &Keyboard,
        barriers: &[Barrier],
        events: &mut Vec<GameEvent>,
    ) -> Vec<CharacterOutcome> {
        let bounds = LevelBounds::default();
        let mut outcomes = Vec::new();
        let mut t = 0.0;
        while t < ms {
            outcomes.push(character.update(SIM_STEP_MS, start + t as f64, keyboard, barriers, &bounds, events));
            t += SIM_STEP_MS;
        }
        outcomes
    }

    #[test]
    fn test_hit_clamps_and_respects_hurt_window() {
        let mut c = Character::new().unwrap();
        c.energy = 5;
        assert!(c.hit(20, 1000.0));
        assert_eq!(c.energy, 0);
        assert!(c.is_dead());

        let mut c = Character::new().unwrap();
        assert!(c.hit(20, 0.0));
        assert!(!c.hit(20, 1499.0));
        assert_eq!(c.energy, 80);
        assert!(c.hit(20, 1500.0));
        assert_eq!(c.energy, 60);
    }

    #[test]
    fn test_hurt_check_is_idempotent() {
        let mut c = Character::new().unwrap();
        assert!(!c.is_hurt(0.0));
        c.hit(10, 100.0);
        for _ in 0..5 {
            assert!(c.is_hurt(1599.0));
        }
        assert!(!c.is_hurt(1600.0));
    }

    #[test]
    fn test_bottle_ammo_caps() {
        let mut c = Character::new().unwrap();
        for _ in 0..10 {
            c.count_bottles();
            assert!(c.bottles <= MAX_AMMO);
        }
        assert_eq!(c.bottles, 100);
    }

    #[test]
    fn test_coin_percentage_steps() {
        let mut c = Character::new().unwrap();
        for _ in 0..4 {
            c.count_coins();
        }
        assert_eq!(c.coin_percentage, 0);
        c.count_coins();
        assert_eq!(c.coin_percentage, 20);
        for _ in 5..25 {
            c.count_coins();
        }
        assert_eq!(c.coins, 25);
        assert_eq!(c.coin_percentage, 100);
    }

    #[test]
    fn test_stance_rule() {
        let c = Character::new().unwrap();
        let slap = Keyboard {
            space: true,
            ..Keyboard::default()
        };
        let none = Keyboard::default();
        assert!(c.can_damage(Foe::PufferFish, 0.0, &slap));
        assert!(!c.can_damage(Foe::PufferFish, 0.0, &none));
        assert!(c.can_damage(Foe::JellyFish, 0.0, &none));
        assert!(!c.can_damage(Foe::JellyFish, 0.0, &slap));
        assert!(c.can_damage(Foe::Endboss, 0.0, &none));

        let mut hurt = Character::new().unwrap();
        hurt.hit(10, 0.0);
        assert!(!hurt.can_damage(Foe::JellyFish, 100.0, &none));
    }

    #[test]
    fn test_movement_within_bounds_and_facing() {
        let mut c = Character::new().unwrap();
        let mut events = Vec::new();
        let right = Keyboard {
            right: true,
            ..Keyboard::default()
        };
        step(&mut c, 160.0, 0.0, &right, &[], &mut events);
        assert_eq!(c.body.pos.x, CHARACTER_START_X + 100.0);
        assert!(!c.mirrored());
        assert!(events.contains(&GameEvent::Audio(AudioCue::Play(Sound::Swimming))));

        // Start x is left of the level's start bound
        let mut c = Character::new().unwrap();
        let left = Keyboard {
            left: true,
            ..Keyboard::default()
        };
        step(&mut c, 160.0, 0.0, &left, &[], &mut events);
        assert_eq!(c.body.pos.x, CHARACTER_START_X);
    }

    #[test]
    fn test_barrier_blocks_direction() {
        let mut c = Character::new().unwrap();
        let hb = c.body.hitbox();
        // Pillar whose top region starts just left of the character's right edge
        let barrier = Barrier::new(BarrierShape::Pillar, hb.right() - 35.0);
        let right = Keyboard {
            right: true,
            ..Keyboard::default()
        };
        let mut events = Vec::new();
        let x = c.body.pos.x;
        step(&mut c, 16.0, 0.0, &right, &[barrier], &mut events);
        assert!(!c.can_move.right);
        assert_eq!(c.body.pos.x, x);
        assert!(events.contains(&GameEvent::Audio(AudioCue::Play(Sound::Collision))));
    }

    #[test]
    fn test_idle_staging_and_sinking() {
        let mut c = Character::new().unwrap();
        let idle = Keyboard::default();
        let mut events = Vec::new();
        step(&mut c, 14_900.0, 0.0, &idle, &[], &mut events);
        assert_eq!(c.idle_count, 149);
        assert_eq!(c.body.pos.y, CHARACTER_START_Y);

        step(&mut c, 200.0, 14_900.0, &idle, &[], &mut events);
        assert!(c.idle_count >= IDLE_SINK_AFTER);
        assert!(c.body.pos.y > CHARACTER_START_Y);
        assert!(events.contains(&GameEvent::Audio(AudioCue::Loop(Sound::Snoring, true))));

        step(&mut c, 1_500.0, 15_100.0, &idle, &[], &mut events);
        assert!(sprites::CHARACTER_SLEEP.contains(&c.sprite()));

        // Any direction wakes it up
        let up = Keyboard {
            up: true,
            ..Keyboard::default()
        };
        step(&mut c, 16.0, 16_600.0, &up, &[], &mut events);
        assert_eq!(c.idle_count, 0);
        assert!(events.contains(&GameEvent::Audio(AudioCue::Pause(Sound::Snoring))));
    }

    #[test]
    fn test_bubble_fires_on_last_frame() {
        let mut c = Character::new().unwrap();
        c.bottles = 40;
        let d = Keyboard {
            d: true,
            ..Keyboard::default()
        };
        let mut events = Vec::new();
        // 8 frames at 125ms: nothing before the last frame
        let early = step(&mut c, 7.0 * 125.0 - 16.0, 0.0, &d, &[], &mut events);
        assert!(early.iter().all(|o| o.launch.is_none()));

        let rest = step(&mut c, 300.0, 7.0 * 125.0, &d, &[], &mut events);
        let launches: Vec<_> = rest.iter().filter_map(|o| o.launch).collect();
        assert_eq!(launches.len(), 1);
        let launch = launches[0];
        assert_eq!(launch.kind, BubbleKind::Poisoned);
        assert_eq!(launch.x, c.body.pos.x + 300.0);
        assert_eq!(launch.y, c.body.pos.y + 280.0);
        assert_eq!(c.bottles, 20);

        // Holding the key does not fire again
        let held = step(&mut c, 2000.0, 2000.0, &d, &[], &mut events);
        assert!(held.iter().all(|o| o.launch.is_none()));
    }

    #[test]
    fn test_slap_sets_attack_damage() {
        let mut c = Character::new().unwrap();
        let space = Keyboard {
            space: true,
            ..Keyboard::default()
        };
        let mut events = Vec::new();
        let outcomes = step(&mut c, 1100.0, 0.0, &space, &[], &mut events);
        // Windup frames deal the normal slap damage
        assert_eq!(outcomes[0].attack_damage, Some(SLAP_DAMAGE));
        assert!(!outcomes[0].finishing_slap);
        // Exactly one finishing frame, after the windup beats
        let finishing: Vec<_> = outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| o.finishing_slap)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(finishing.len(), 1);
        assert!(finishing[0] as f32 * SIM_STEP_MS >= 6.0 * CHARACTER_FRAME_MS);
        assert!(!c.slap_held(&space));
        assert_eq!(
            events
                .iter()
                .filter(|e| **e == GameEvent::Audio(AudioCue::Restart(Sound::FinSlap)))
                .count(),
            1
        );
    }

    #[test]
    fn test_jellyfish_death_drifts_down_then_freezes() {
        let mut c = Character::new().unwrap();
        c.enemy_type = Some(Foe::JellyFish);
        c.energy = 0;
        let mut events = Vec::new();
        let y = c.body.pos.y;
        step(&mut c, 1400.0, 0.0, &Keyboard::default(), &[], &mut events);
        assert!(c.is_frozen());
        assert!(c.body.pos.y > y);
        let frozen_y = c.body.pos.y;
        step(&mut c, 500.0, 1400.0, &Keyboard::default(), &[], &mut events);
        assert_eq!(c.body.pos.y, frozen_y);
        assert!(sprites::CHARACTER_DEAD_SHOCKED.contains(&c.sprite()));
    }

    #[test]
    fn test_poison_death_drifts_up() {
        let mut c = Character::new().unwrap();
        c.enemy_type = Some(Foe::PufferFish);
        c.energy = 0;
        let mut events = Vec::new();
        let y = c.body.pos.y;
        step(&mut c, 1000.0, 0.0, &Keyboard::default(), &[], &mut events);
        assert!(!c.is_frozen());
        assert!(c.body.pos.y < y);
        step(&mut c, 700.0, 1000.0, &Keyboard::default(), &[], &mut events);
        assert!(c.is_frozen());
    }
}
