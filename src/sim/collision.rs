//! Barrier contact resolution
//!
//! A barrier blocks movement per face: touching its left face stops the
//! character moving right, and so on. Faces are detected by where the
//! character's leading edge sits relative to the barrier box.

use super::entity::Rect;

/// Horizontal tolerance band inside a barrier's extent
pub const SIDE_BAND: f32 = 50.0;
/// Vertical tolerance band at a barrier's top/bottom face
pub const CAP_BAND: f32 = 10.0;

/// Movement directions a contact forbids this tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockedFaces {
    pub right: bool,
    pub left: bool,
    pub down: bool,
    pub up: bool,
}

impl BlockedFaces {
    pub fn any(&self) -> bool {
        self.right || self.left || self.down || self.up
    }

    pub fn merge(self, other: BlockedFaces) -> BlockedFaces {
        BlockedFaces {
            right: self.right || other.right,
            left: self.left || other.left,
            down: self.down || other.down,
            up: self.up || other.up,
        }
    }
}

/// Which faces of `barrier` the `mover` box is pressing against.
///
/// Returns nothing blocked when the boxes do not overlap.
pub fn barrier_contact(mover: &Rect, barrier: &Rect) -> BlockedFaces {
    if !mover.overlaps(barrier) {
        return BlockedFaces::default();
    }
    BlockedFaces {
        // Leading right edge entered through the barrier's left face
        right: mover.right() >= barrier.x && mover.right() < barrier.right() - SIDE_BAND,
        left: mover.x <= barrier.right() && mover.x > barrier.x + SIDE_BAND,
        down: mover.bottom() >= barrier.y && mover.bottom() < barrier.y + CAP_BAND,
        up: mover.y <= barrier.bottom() && mover.y > barrier.bottom() - CAP_BAND,
    }
}
