//! Static reef barriers with split top/bottom collision regions

use serde::{Deserialize, Serialize};

use super::collision::{BlockedFaces, barrier_contact};
use super::entity::{Body, Drawable, EntityKind, Offset, Rect};
use crate::sprites::{self, SpriteId};

/// Barrier catalog: each shape has a fixed image, size and anchor height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BarrierShape {
    /// Full-height rock with a gap between its upper and lower parts
    Tall,
    /// Wide low reef on the floor
    Wide,
    /// Narrow pillar
    Pillar,
}

impl BarrierShape {
    pub const ALL: [BarrierShape; 3] = [BarrierShape::Tall, BarrierShape::Wide, BarrierShape::Pillar];

    pub fn sprite(&self) -> SpriteId {
        match self {
            BarrierShape::Tall => sprites::BARRIER_TALL,
            BarrierShape::Wide => sprites::BARRIER_WIDE,
            BarrierShape::Pillar => sprites::BARRIER_PILLAR,
        }
    }

    /// Fixed y for this shape
    pub fn anchor_y(&self) -> f32 {
        match self {
            BarrierShape::Tall => 0.0,
            BarrierShape::Wide => 320.0,
            BarrierShape::Pillar => 100.0,
        }
    }

    /// (width, height)
    pub fn size(&self) -> (f32, f32) {
        match self {
            BarrierShape::Tall => (750.0, 720.0),
            BarrierShape::Wide => (872.0, 400.0),
            BarrierShape::Pillar => (200.0, 409.0),
        }
    }

    /// Insets for the (top, bottom) collision regions
    pub fn offsets(&self) -> (Offset, Offset) {
        match self {
            BarrierShape::Tall => (
                Offset::from_shifted(0.0, 4.0, 7.0, 510.0),
                Offset::from_shifted(550.0, 0.0, 10.0, 0.0),
            ),
            BarrierShape::Wide => {
                let o = Offset::from_shifted(70.0, 50.0, 100.0, 0.0);
                (o, o)
            }
            BarrierShape::Pillar => {
                let o = Offset::from_shifted(0.0, 30.0, 50.0, 10.0);
                (o, o)
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Barrier {
    pub shape: BarrierShape,
    /// `body.offset` is the top region's inset
    pub body: Body,
    pub offset_bottom: Offset,
}

impl Barrier {
    pub fn new(shape: BarrierShape, x: f32) -> Self {
        let (width, height) = shape.size();
        let (top, bottom) = shape.offsets();
        Self {
            shape,
            body: Body::new(x, shape.anchor_y(), width, height, top),
            offset_bottom: bottom,
        }
    }

    pub fn hitbox_top(&self) -> Rect {
        self.body.hitbox()
    }

    pub fn hitbox_bottom(&self) -> Rect {
        self.body.hitbox_with(&self.offset_bottom)
    }

    pub fn is_colliding_top(&self, other: &Body) -> bool {
        other.hitbox().overlaps(&self.hitbox_top())
    }

    pub fn is_colliding_bottom(&self, other: &Body) -> bool {
        other.hitbox().overlaps(&self.hitbox_bottom())
    }

    /// Directions `other` may not move this tick, merged over both regions
    pub fn blocked_faces(&self, other: &Body) -> BlockedFaces {
        let mover = other.hitbox();
        barrier_contact(&mover, &self.hitbox_top()).merge(barrier_contact(&mover, &self.hitbox_bottom()))
    }
}

impl Drawable for Barrier {
    fn kind(&self) -> EntityKind {
        EntityKind::Barrier
    }

    fn body(&self) -> &Body {
        &self.body
    }

    fn sprite(&self) -> SpriteId {
        self.shape.sprite()
    }

    fn sub_hitboxes(&self) -> Option<[Rect; 2]> {
        Some([self.hitbox_top(), self.hitbox_bottom()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tall_barrier_has_gap() {
        let barrier = Barrier::new(BarrierShape::Tall, 1000.0);
        let top = barrier.hitbox_top();
        let bottom = barrier.hitbox_bottom();
        assert_eq!(top.y, 0.0);
        assert_eq!(top.bottom(), 210.0);
        assert_eq!(bottom.y, 550.0);
        assert!(top.bottom() < bottom.y);

        // A small body swimming through the gap touches neither region
        let swimmer = Body::new(1200.0, 300.0, 50.0, 50.0, Offset::ZERO);
        assert!(!barrier.is_colliding_top(&swimmer));
        assert!(!barrier.is_colliding_bottom(&swimmer));
        assert!(!barrier.blocked_faces(&swimmer).any());
    }

    #[test]
    fn test_pillar_blocks_from_left() {
        let barrier = Barrier::new(BarrierShape::Pillar, 1000.0);
        let hb = barrier.hitbox_top();
        let swimmer = Body::new(hb.x - 40.0, 200.0, 50.0, 50.0, Offset::ZERO);
        assert!(barrier.is_colliding_top(&swimmer));
        let faces = barrier.blocked_faces(&swimmer);
        assert!(faces.right);
        assert!(!faces.left);
    }

    #[test]
    fn test_regions_share_box_for_single_region_shapes() {
        for shape in [BarrierShape::Wide, BarrierShape::Pillar] {
            let barrier = Barrier::new(shape, 0.0);
            assert_eq!(barrier.hitbox_top(), barrier.hitbox_bottom());
            assert_eq!(barrier.body.pos.y, shape.anchor_y());
        }
    }
}
