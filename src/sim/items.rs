//! Collectibles, projectiles and scenery
//!
//! Coins and bottles are static animated pickups. The bubble is the
//! character's only projectile. Lights, background layers and status bars
//! carry no gameplay but are owned by the world so one driver animates them.

use serde::{Deserialize, Serialize};

use super::animation::{Animation, Beat};
use super::entity::{Body, Drawable, EntityKind, Offset, Rect};
use crate::consts::{BUBBLE_RANGE, BUBBLE_SIZE, SIM_STEP_MS};
use crate::error::GameError;
use crate::sprites::{self, Sequence, SpriteId};

/// Frame interval shared by coins and bottles
pub const PICKUP_FRAME_MS: f32 = 200.0;

pub const COIN_SIZE: f32 = 75.0;
pub const BOTTLE_WIDTH: f32 = 98.0;
pub const BOTTLE_HEIGHT: f32 = 170.0;
/// Every bottle sits on this line
pub const BOTTLE_Y: f32 = 300.0;

/// Collectible coin
#[derive(Debug, Clone)]
pub struct Coin {
    pub body: Body,
    animation: Animation,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Result<Self, GameError> {
        Ok(Self {
            body: Body::new(x, y, COIN_SIZE, COIN_SIZE, Offset::ZERO),
            animation: Animation::new("coin", sprites::COIN)?,
        })
    }

    pub fn animate(&mut self) {
        self.animation.advance(sprites::COIN);
    }
}

impl Drawable for Coin {
    fn kind(&self) -> EntityKind {
        EntityKind::Coin
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn sprite(&self) -> SpriteId {
        self.animation.current()
    }
}

/// Poison bottle; each one adds bubble ammo
#[derive(Debug, Clone)]
pub struct Bottle {
    pub body: Body,
    animation: Animation,
}

impl Bottle {
    pub fn new(x: f32) -> Result<Self, GameError> {
        Ok(Self {
            body: Body::new(
                x,
                BOTTLE_Y,
                BOTTLE_WIDTH,
                BOTTLE_HEIGHT,
                Offset::from_shifted(50.0, 10.0, 20.0, 50.0),
            ),
            animation: Animation::new("bottle", sprites::BOTTLE)?,
        })
    }

    pub fn animate(&mut self) {
        self.animation.advance(sprites::BOTTLE);
    }
}

impl Drawable for Bottle {
    fn kind(&self) -> EntityKind {
        EntityKind::Bottle
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn sprite(&self) -> SpriteId {
        self.animation.current()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BubbleKind {
    Normal,
    /// Fired while the character carries bottle ammo
    Poisoned,
}

impl BubbleKind {
    pub fn damage(&self) -> i32 {
        match self {
            BubbleKind::Normal => 1,
            BubbleKind::Poisoned => 2,
        }
    }

    pub fn sprite(&self) -> SpriteId {
        match self {
            BubbleKind::Normal => sprites::BUBBLE_NORMAL,
            BubbleKind::Poisoned => sprites::BUBBLE_POISONED,
        }
    }
}

/// Bubble projectile.
///
/// `body.pos` is the bubble's center; the collision inset is negative on the
/// leading edges so the box sits around that point.
#[derive(Debug, Clone)]
pub struct Bubble {
    pub kind: BubbleKind,
    pub body: Body,
    pub start_x: f32,
    /// Extra horizontal speed on top of the base 10 per step
    pub speed: f32,
    pub active: bool,
    /// Phase of the vertical wobble
    wave: f32,
    /// Spin in radians
    angle: f32,
}

impl Bubble {
    pub const BASE_SPEED: f32 = 10.0;
    pub const WOBBLE: f32 = 7.5;
    pub const WAVE_STEP: f32 = 0.1;
    pub const SPIN_PER_STEP: f32 = 5.0_f32 * std::f32::consts::PI / 180.0;

    pub fn new(x: f32, y: f32, speed: f32, kind: BubbleKind) -> Self {
        Self {
            kind,
            body: Body::new(
                x,
                y,
                BUBBLE_SIZE,
                BUBBLE_SIZE,
                Offset::from_shifted(-37.0, -40.0, 0.0, 0.0),
            ),
            start_x: x,
            speed,
            active: true,
            wave: 0.0,
            angle: 0.0,
        }
    }

    pub fn damage(&self) -> i32 {
        self.kind.damage()
    }

    /// Fly, wobble and spin. Returns true on the step the bubble runs out of range.
    pub fn update(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        let steps = dt / SIM_STEP_MS;
        self.body.pos.x += (Self::BASE_SPEED + self.speed) * steps;
        self.body.pos.y += self.wave.cos() * Self::WOBBLE * steps;
        self.wave += Self::WAVE_STEP * steps;
        self.angle += Self::SPIN_PER_STEP * steps;

        // Leftward bubbles expire too
        if (self.body.pos.x - self.start_x).abs() >= BUBBLE_RANGE {
            self.active = false;
            return true;
        }
        false
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Drawable for Bubble {
    fn kind(&self) -> EntityKind {
        EntityKind::Bubble
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn sprite(&self) -> SpriteId {
        self.kind.sprite()
    }

    fn rotation(&self) -> Option<f32> {
        Some(self.angle)
    }

    fn draw_rect(&self) -> Rect {
        Rect::new(
            self.body.pos.x - self.body.width / 2.0,
            self.body.pos.y - self.body.height / 2.0,
            self.body.width,
            self.body.height,
        )
    }
}

/// Light shaft drifting slowly to the right
#[derive(Debug, Clone)]
pub struct Light {
    pub body: Body,
    pub sprite: SpriteId,
    pub speed: f32,
}

impl Light {
    pub const WIDTH: f32 = 1280.0;
    pub const HEIGHT: f32 = 720.0;
    pub const DRIFT: f32 = 0.75;

    pub fn new(sprite: SpriteId, x: f32) -> Self {
        Self {
            body: Body::new(x, 0.0, Self::WIDTH, Self::HEIGHT, Offset::ZERO),
            sprite,
            speed: Self::DRIFT,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.body.move_right(self.speed, dt);
    }
}

impl Drawable for Light {
    fn kind(&self) -> EntityKind {
        EntityKind::Light
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn sprite(&self) -> SpriteId {
        self.sprite
    }
}

/// One parallax tile; drawn in screen space at `x + camera.x * factor`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BackgroundLayer {
    pub sprite: SpriteId,
    pub x: f32,
    pub factor: f32,
}

impl BackgroundLayer {
    /// Tiles overlap by a pixel to hide seams
    pub const WIDTH: f32 = 1281.0;
    pub const HEIGHT: f32 = 720.0;
    pub const TILE_STRIDE: f32 = 1280.0;
    /// Pairs of tiles laid out along the level
    pub const REPETITIONS: usize = 10;

    /// Full parallax strip: every layer pair repeated, back to front per pair
    pub fn strip() -> Vec<BackgroundLayer> {
        let mut layers = Vec::with_capacity(Self::REPETITIONS * sprites::BACKGROUND_LAYERS.len() * 2);
        for i in 0..Self::REPETITIONS {
            let even = Self::TILE_STRIDE * (2 * i) as f32;
            let odd = Self::TILE_STRIDE * (2 * i + 1) as f32;
            for (first, _, factor) in sprites::BACKGROUND_LAYERS {
                layers.push(BackgroundLayer { sprite: first, x: even, factor });
            }
            for (_, second, factor) in sprites::BACKGROUND_LAYERS {
                layers.push(BackgroundLayer { sprite: second, x: odd, factor });
            }
        }
        layers
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusKind {
    Life,
    Bottles,
    Coins,
}

/// Screen-space gauge picking one of six images from a percentage
#[derive(Debug, Clone)]
pub struct StatusBar {
    pub kind: StatusKind,
    pub rect: Rect,
    percentage: i32,
}

impl StatusBar {
    pub const WIDTH: f32 = 250.0;
    pub const HEIGHT: f32 = 70.0;

    pub fn new(kind: StatusKind, x: f32, y: f32, percentage: i32) -> Self {
        Self {
            kind,
            rect: Rect::new(x, y, Self::WIDTH, Self::HEIGHT),
            percentage,
        }
    }

    pub fn life() -> Self {
        Self::new(StatusKind::Life, 20.0, 0.0, 100)
    }

    pub fn bottles() -> Self {
        Self::new(StatusKind::Bottles, 20.0, 60.0, 0)
    }

    pub fn coins() -> Self {
        Self::new(StatusKind::Coins, 20.0, 120.0, 0)
    }

    pub fn set_percentage(&mut self, percentage: i32) {
        self.percentage = percentage;
    }

    pub fn percentage(&self) -> i32 {
        self.percentage
    }

    pub fn image_index(&self) -> usize {
        match self.percentage {
            p if p >= 100 => 5,
            p if p >= 80 => 4,
            p if p >= 60 => 3,
            p if p >= 40 => 2,
            p if p >= 20 => 1,
            _ => 0,
        }
    }

    fn images(&self) -> Sequence {
        match self.kind {
            StatusKind::Life => sprites::STATUS_LIFE,
            StatusKind::Bottles => sprites::STATUS_BOTTLES,
            StatusKind::Coins => sprites::STATUS_COINS,
        }
    }

    pub fn sprite(&self) -> SpriteId {
        self.images()[self.image_index()]
    }
}

/// Animation clock for all pickups on the map
#[derive(Debug, Clone)]
pub struct PickupClock(Beat);

impl Default for PickupClock {
    fn default() -> Self {
        Self(Beat::new(PICKUP_FRAME_MS))
    }
}

impl PickupClock {
    pub fn tick(&mut self, dt: f32) -> bool {
        self.0.tick(dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bubble_expires_after_range() {
        let mut bubble = Bubble::new(500.0, 300.0, 0.0, BubbleKind::Normal);
        let mut steps = 0;
        while bubble.active {
            bubble.update(SIM_STEP_MS);
            steps += 1;
            assert!(steps <= 100, "bubble never expired");
        }
        assert_eq!(steps, 100);
        assert!(bubble.body.pos.x >= bubble.start_x + BUBBLE_RANGE);
    }

    #[test]
    fn test_leftward_bubble_expires() {
        let mut bubble = Bubble::new(5000.0, 300.0, -30.0, BubbleKind::Poisoned);
        for _ in 0..60 {
            bubble.update(SIM_STEP_MS);
        }
        assert!(!bubble.active);
        assert_eq!(bubble.damage(), 2);
    }

    #[test]
    fn test_bubble_spins_and_draws_centered() {
        let mut bubble = Bubble::new(100.0, 100.0, 0.0, BubbleKind::Normal);
        bubble.update(SIM_STEP_MS);
        assert!(bubble.rotation().unwrap() > 0.0);
        let rect = bubble.draw_rect();
        let center = rect.center();
        assert!((center.x - bubble.body.pos.x).abs() < 1e-4);
        assert!((center.y - bubble.body.pos.y).abs() < 1e-4);
    }

    #[test]
    fn test_status_bar_thresholds() {
        let mut bar = StatusBar::life();
        assert_eq!(bar.image_index(), 5);
        for (p, idx) in [(99, 4), (80, 4), (79, 3), (40, 2), (20, 1), (19, 0), (0, 0)] {
            bar.set_percentage(p);
            assert_eq!(bar.image_index(), idx, "percentage {p}");
        }
        assert_eq!(bar.sprite(), sprites::STATUS_LIFE[0]);
    }

    #[test]
    fn test_background_strip_layout() {
        let strip = BackgroundLayer::strip();
        assert_eq!(strip.len(), 80);
        assert_eq!(strip[0].x, 0.0);
        assert_eq!(strip[4].x, 1280.0);
        assert_eq!(strip[79].x, 1280.0 * 19.0);
        assert_eq!(strip[3].factor, 1.0);
    }

    #[test]
    fn test_pickups_animate() {
        let mut coin = Coin::new(0.0, 0.0).unwrap();
        let first = coin.sprite();
        coin.animate();
        assert_eq!(coin.sprite(), first);
        coin.animate();
        assert_ne!(coin.sprite(), first);

        let bottle = Bottle::new(2000.0).unwrap();
        assert_eq!(bottle.body.pos.y, BOTTLE_Y);
    }
}
