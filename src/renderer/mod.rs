//! Rendering module
//!
//! The game draws through a small blitting interface the host implements on
//! top of its 2D surface. Rendering only reads the world.

pub mod scene;

pub use scene::render;

use crate::sim::Rect;
use crate::sprites::SpriteId;

/// Host 2D drawing surface
pub trait RenderTarget {
    fn clear(&mut self);
    /// Shift every following draw by `(dx, dy)`; translations accumulate
    fn translate(&mut self, dx: f32, dy: f32);
    fn draw_image(&mut self, sprite: SpriteId, rect: Rect);
    /// Draw flipped about the rect's vertical centerline
    fn draw_image_mirrored(&mut self, sprite: SpriteId, rect: Rect);
    /// Draw rotated by `angle` radians about the rect's center, optionally flipped first
    fn draw_image_rotated(&mut self, sprite: SpriteId, rect: Rect, angle: f32, mirrored: bool);
}

/// One call made on a [`RenderTarget`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear,
    Translate { dx: f32, dy: f32 },
    Image { sprite: SpriteId, rect: Rect },
    Mirrored { sprite: SpriteId, rect: Rect },
    Rotated {
        sprite: SpriteId,
        rect: Rect,
        angle: f32,
        mirrored: bool,
    },
}

impl DrawCommand {
    pub fn sprite(&self) -> Option<SpriteId> {
        match self {
            DrawCommand::Image { sprite, .. }
            | DrawCommand::Mirrored { sprite, .. }
            | DrawCommand::Rotated { sprite, .. } => Some(*sprite),
            DrawCommand::Clear | DrawCommand::Translate { .. } => None,
        }
    }
}

/// Target that records every call; used by tests and the headless binary
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    pub commands: Vec<DrawCommand>,
    /// Net translation currently applied
    pub offset: (f32, f32),
}

impl RecordingTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of image blits in the last recorded frame
    pub fn draw_count(&self) -> usize {
        self.commands.iter().filter(|c| c.sprite().is_some()).count()
    }
}

impl RenderTarget for RecordingTarget {
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn translate(&mut self, dx: f32, dy: f32) {
        self.offset.0 += dx;
        self.offset.1 += dy;
        self.commands.push(DrawCommand::Translate { dx, dy });
    }

    fn draw_image(&mut self, sprite: SpriteId, rect: Rect) {
        self.commands.push(DrawCommand::Image { sprite, rect });
    }

    fn draw_image_mirrored(&mut self, sprite: SpriteId, rect: Rect) {
        self.commands.push(DrawCommand::Mirrored { sprite, rect });
    }

    fn draw_image_rotated(&mut self, sprite: SpriteId, rect: Rect, angle: f32, mirrored: bool) {
        self.commands.push(DrawCommand::Rotated {
            sprite,
            rect,
            angle,
            mirrored,
        });
    }
}
