//! Collision detection: world bounds, then broad phase rectangles, then pixel masks.

use crate::mask::PixelMask;
use crate::pipe::{Pipe, PipePiece};
use crate::types::Rect;

/// What the bird hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    Ceiling,
    Floor,
    Pipe,
}

impl Collision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collision::Ceiling => "ceiling",
            Collision::Floor => "floor",
            Collision::Pipe => "pipe",
        }
    }
}

/// First collision found for the bird's volume and mask, if any.
///
/// Bounds are checked before any pipe: the top edge at or above `0` is a
/// ceiling hit, the bottom edge at or below `world_height` a floor hit.
pub fn detect(
    bird_rect: Rect,
    bird_mask: &PixelMask,
    pipes: &[Pipe],
    world_height: f32,
) -> Option<Collision> {
    if bird_rect.top() <= 0.0 {
        return Some(Collision::Ceiling);
    }
    if bird_rect.bottom() >= world_height {
        return Some(Collision::Floor);
    }

    pipes
        .iter()
        .flat_map(|pipe| pipe.pieces())
        .any(|piece| piece_hit(bird_rect, bird_mask, piece))
        .then_some(Collision::Pipe)
}

fn piece_hit(bird_rect: Rect, bird_mask: &PixelMask, piece: &PipePiece) -> bool {
    let rect = piece.rect();
    if !bird_rect.intersects(&rect) {
        return false;
    }
    // Piece mask placed relative to the bird mask, in whole pixels.
    let dx = rect.x.floor() as i32 - bird_rect.x.floor() as i32;
    let dy = rect.y.floor() as i32 - bird_rect.y.floor() as i32;
    bird_mask.overlap(piece.mask(), dx, dy)
}
