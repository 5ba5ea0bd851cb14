//! Horizontal camera following the character

use serde::{Deserialize, Serialize};

use crate::consts::CAMERA_LEAD;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Translation applied to world-space draws (negative as the level scrolls)
    pub x: f32,
}

impl Camera {
    /// Keep the character `CAMERA_LEAD` pixels from the left screen edge
    pub fn follow(&mut self, character_x: f32) {
        self.x = -character_x + CAMERA_LEAD;
    }

    /// Screen x of a parallax layer scrolling at `factor` of camera speed
    pub fn parallax_x(&self, layer_x: f32, factor: f32) -> f32 {
        layer_x + self.x * factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow() {
        let mut camera = Camera::default();
        camera.follow(220.0);
        assert_eq!(camera.x, 0.0);
        camera.follow(1220.0);
        assert_eq!(camera.x, -1000.0);
        assert_eq!(camera.parallax_x(1280.0, 0.2), 1080.0);
    }
}
