//! Entity base: bodies, collision boxes and capability traits
//!
//! Every world object carries a [`Body`]: a sprite rectangle plus an inset
//! [`Offset`] that shrinks it to the collision box. Drawing and combat are
//! dispatched through the [`Drawable`] and [`Hostile`] traits instead of
//! branching on concrete types.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::SIM_STEP_MS;
use crate::sprites::SpriteId;

/// Collision-box inset relative to the sprite box
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Offset {
    pub top: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(top: f32, left: f32, right: f32, bottom: f32) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
        }
    }

    /// Build an inset from art-sheet measurements where `right` and `bottom`
    /// are subtracted from the width/height *after* shifting by `left`/`top`.
    pub const fn from_shifted(top: f32, left: f32, right: f32, bottom: f32) -> Self {
        Self::new(top, left, right - left, bottom - top)
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle from its edges; inverted edges collapse to zero size
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, (right - left).max(0.0), (bottom - top).max(0.0))
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Inclusive overlap on both axes
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.right() >= other.x
            && self.x <= other.right()
            && self.bottom() >= other.y
            && self.y <= other.bottom()
    }
}

/// Position, size and collision inset shared by all entities
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub offset: Offset,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32, offset: Offset) -> Self {
        Self {
            pos: Vec2::new(x, y),
            width,
            height,
            offset,
        }
    }

    pub fn sprite_rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Sprite box minus offsets
    pub fn hitbox(&self) -> Rect {
        self.hitbox_with(&self.offset)
    }

    /// Collision box for an alternative inset (barrier sub-boxes)
    pub fn hitbox_with(&self, offset: &Offset) -> Rect {
        Rect::from_edges(
            self.pos.x + offset.left,
            self.pos.y + offset.top,
            self.pos.x + self.width - offset.right,
            self.pos.y + self.height - offset.bottom,
        )
    }

    pub fn is_colliding(&self, other: &Body) -> bool {
        self.hitbox().overlaps(&other.hitbox())
    }

    /// Distance a body with `speed` covers in `dt_ms`
    #[inline]
    pub fn travel(speed: f32, dt_ms: f32) -> f32 {
        speed * dt_ms / SIM_STEP_MS
    }

    pub fn move_left(&mut self, speed: f32, dt_ms: f32) {
        self.pos.x -= Self::travel(speed, dt_ms);
    }

    pub fn move_right(&mut self, speed: f32, dt_ms: f32) {
        self.pos.x += Self::travel(speed, dt_ms);
    }

    pub fn move_up(&mut self, speed: f32, dt_ms: f32) {
        self.pos.y -= Self::travel(speed, dt_ms);
    }

    pub fn move_down(&mut self, speed: f32, dt_ms: f32) {
        self.pos.y += Self::travel(speed, dt_ms);
    }
}

/// Which enemy family something is (also what last touched the character)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Foe {
    JellyFish,
    PufferFish,
    Endboss,
}

/// Explicit entity tag used by the render pass and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Character,
    Enemy(Foe),
    Endboss,
    Bubble,
    Coin,
    Bottle,
    Barrier,
    Light,
}

/// Something the render pass can blit
pub trait Drawable {
    fn kind(&self) -> EntityKind;
    fn body(&self) -> &Body;
    fn sprite(&self) -> SpriteId;

    /// Facing left: mirrored about the sprite's own vertical centerline
    fn mirrored(&self) -> bool {
        false
    }

    /// Rotatable entities return an angle (radians) about their center
    fn rotation(&self) -> Option<f32> {
        None
    }

    /// Where the sprite is blitted (world space)
    fn draw_rect(&self) -> Rect {
        self.body().sprite_rect()
    }

    /// Entities with split top/bottom collision regions
    fn sub_hitboxes(&self) -> Option<[Rect; 2]> {
        None
    }
}

/// Anything the character can fight
pub trait Hostile: Drawable {
    fn foe(&self) -> Foe;
    fn health(&self) -> i32;
    fn take_damage(&mut self, amount: i32);
    fn collision_damage(&self) -> i32;
    fn is_dying(&self) -> bool;
    fn start_dying(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hitbox_is_sprite_minus_offsets() {
        let body = Body::new(100.0, 50.0, 200.0, 100.0, Offset::new(10.0, 20.0, 30.0, 40.0));
        let hb = body.hitbox();
        assert_eq!(hb.x, 120.0);
        assert_eq!(hb.y, 60.0);
        assert_eq!(hb.right(), 270.0);
        assert_eq!(hb.bottom(), 110.0);
    }

    #[test]
    fn test_shifted_offset_conversion() {
        // Character art: 407x500, shifted inset (240, 80, 160, 360)
        let offset = Offset::from_shifted(240.0, 80.0, 160.0, 360.0);
        let body = Body::new(0.0, 0.0, 407.0, 500.0, offset);
        let hb = body.hitbox();
        assert_eq!(hb.x, 80.0);
        assert_eq!(hb.right(), 80.0 + 407.0 - 160.0);
        assert_eq!(hb.y, 240.0);
        assert_eq!(hb.bottom(), 240.0 + 500.0 - 360.0);
    }

    #[test]
    fn test_oversized_offset_never_negative() {
        let body = Body::new(0.0, 0.0, 50.0, 50.0, Offset::new(40.0, 40.0, 40.0, 40.0));
        let hb = body.hitbox();
        assert!(hb.width >= 0.0 && hb.height >= 0.0);
        assert_eq!(hb.area(), 0.0);
    }

    #[test]
    fn test_touching_edges_collide() {
        let a = Body::new(0.0, 0.0, 10.0, 10.0, Offset::ZERO);
        let b = Body::new(10.0, 10.0, 10.0, 10.0, Offset::ZERO);
        let c = Body::new(10.1, 0.0, 10.0, 10.0, Offset::ZERO);
        assert!(a.is_colliding(&b));
        assert!(!a.is_colliding(&c));
    }

    #[test]
    fn test_movement_scales_with_step() {
        let mut body = Body::new(0.0, 0.0, 1.0, 1.0, Offset::ZERO);
        body.move_right(10.0, SIM_STEP_MS);
        assert_eq!(body.pos.x, 10.0);
        body.move_down(10.0, SIM_STEP_MS / 2.0);
        assert_eq!(body.pos.y, 5.0);
    }

    mod props {
        use super::super::*;
        use proptest::prelude::*;

        fn body() -> impl Strategy<Value = Body> {
            (
                -500.0f32..500.0,
                -500.0f32..500.0,
                1.0f32..300.0,
                1.0f32..300.0,
                0.0f32..50.0,
                0.0f32..50.0,
            )
                .prop_map(|(x, y, w, h, inset_x, inset_y)| {
                    Body::new(x, y, w, h, Offset::new(inset_y, inset_x, inset_x, inset_y))
                })
        }

        proptest! {
            #[test]
            fn collision_is_symmetric(a in body(), b in body()) {
                prop_assert_eq!(a.is_colliding(&b), b.is_colliding(&a));
            }

            #[test]
            fn hitbox_inside_sprite_for_positive_insets(a in body()) {
                let hb = a.hitbox();
                let sprite = a.sprite_rect();
                prop_assert!(hb.width >= 0.0 && hb.height >= 0.0);
                prop_assert!(hb.x >= sprite.x && hb.y >= sprite.y);
            }
        }
    }
}
