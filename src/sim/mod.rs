//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (entity lists keep their generation order)
//! - No rendering or platform dependencies beyond reading the keyboard

pub mod animation;
pub mod barrier;
pub mod camera;
pub mod character;
pub mod collision;
pub mod endboss;
pub mod enemy;
pub mod entity;
pub mod items;
pub mod level;
pub mod state;
pub mod tick;

pub use animation::{Animation, Beat};
pub use barrier::{Barrier, BarrierShape};
pub use camera::Camera;
pub use character::{Character, Permissions};
pub use collision::BlockedFaces;
pub use endboss::{Endboss, MoveDirection};
pub use enemy::{Enemy, EnemyVariant};
pub use entity::{Body, Drawable, EntityKind, Foe, Hostile, Offset, Rect};
pub use items::{Bottle, Bubble, BubbleKind, Coin, Light, StatusBar};
pub use level::{Level, LevelBounds};
pub use state::{AudioCue, GameEvent, GamePhase, World};
pub use tick::{resolve_interactions, tick};
