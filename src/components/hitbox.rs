//! Melee hit box carried by a fighter.
//!
//! The box is described relative to its owner's position and re-anchored
//! once per tick with [`HitBox::follow`]; between calls it keeps the
//! position it was last given.

use serde::{Deserialize, Serialize};

use crate::components::geometry::{Rect, Size, Vector};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HitBox {
    /// Displacement from the owner's position to the box's top-left corner.
    pub offset: Vector,
    pub width: f32,
    pub height: f32,
    /// World position computed by the last [`follow`](Self::follow).
    #[serde(skip)]
    pub position: Vector,
}

impl HitBox {
    pub fn new(offset: Vector, width: f32, height: f32) -> Self {
        Self {
            offset,
            width,
            height,
            position: Vector::ZERO,
        }
    }

    /// Re-anchor the box to its owner.
    pub fn follow(&mut self, owner: Vector) {
        self.position = owner + self.offset;
    }

    pub fn rect(&self) -> Rect {
        Rect::from_parts(self.position, Size::new(self.width, self.height))
    }

    /// Whether the box, as last anchored, touches `body`.
    pub fn strikes(&self, body: &Rect) -> bool {
        self.rect().overlaps(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_follow_adds_offset() {
        let mut hit_box = HitBox::new(Vector::new(-170.0, 50.0), 170.0, 50.0);
        hit_box.follow(Vector::new(400.0, 330.0));
        assert_eq!(hit_box.position, Vector::new(230.0, 380.0));
        assert_eq!(hit_box.rect(), Rect::new(230.0, 380.0, 170.0, 50.0));
    }

    #[test]
    fn test_strikes_body() {
        let mut hit_box = HitBox::new(Vector::new(100.0, 50.0), 160.0, 50.0);
        hit_box.follow(Vector::ZERO);
        assert!(hit_box.strikes(&Rect::new(150.0, 0.0, 50.0, 150.0)));
        assert!(!hit_box.strikes(&Rect::new(261.0, 0.0, 50.0, 150.0)));
    }

    #[test]
    fn test_position_is_not_deserialized() {
        let hit_box: HitBox =
            serde_json::from_str(r#"{"offset":{"x":100.0,"y":50.0},"width":160.0,"height":50.0}"#)
                .unwrap();
        assert_eq!(hit_box.position, Vector::ZERO);
        assert_eq!(hit_box.width, 160.0);
    }
}
