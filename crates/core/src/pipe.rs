//! Pipe pairs - gapped obstacles scrolling right to left.

use std::rc::Rc;

use crate::config::GameConfig;
use crate::mask::{MaskSet, PixelMask};
use crate::rng::SimpleRng;
use crate::types::{PipeOrientation, Rect, SpriteId, Vec2};

/// One half of a pipe pair.
///
/// The mask is resolved once when the piece is created; orientation never
/// changes afterwards, so neither does the mask.
#[derive(Debug, Clone)]
pub struct PipePiece {
    rect: Rect,
    orientation: PipeOrientation,
    mask: Rc<PixelMask>,
}

impl PipePiece {
    fn new(rect: Rect, world_height: f32, masks: &MaskSet) -> Self {
        // Pieces above the midline hang from the top edge, cap facing down.
        let orientation = if rect.center_y() < world_height / 2.0 {
            PipeOrientation::Flipped
        } else {
            PipeOrientation::Upright
        };
        Self {
            rect,
            orientation,
            mask: masks.pipe(orientation),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn orientation(&self) -> PipeOrientation {
        self.orientation
    }

    pub fn mask(&self) -> &PixelMask {
        &self.mask
    }

    pub fn sprite(&self) -> SpriteId {
        SpriteId::Pipe(self.orientation)
    }
}

#[derive(Debug, Clone)]
pub struct Pipe {
    top: PipePiece,
    bottom: PipePiece,
    scored: bool,
}

impl Pipe {
    /// Pipe pair centred horizontally on `center_x` with its gap centred on `gap_center`.
    pub fn at(center_x: f32, gap_center: f32, config: &GameConfig, masks: &MaskSet) -> Self {
        let half_gap = config.pipe_gap / 2.0;
        let top = Rect::from_midbottom(
            Vec2::new(center_x, gap_center - half_gap),
            config.pipe_width,
            config.pipe_height,
        );
        let bottom = Rect::from_midtop(
            Vec2::new(center_x, gap_center + half_gap),
            config.pipe_width,
            config.pipe_height,
        );
        Self {
            top: PipePiece::new(top, config.world_height, masks),
            bottom: PipePiece::new(bottom, config.world_height, masks),
            scored: false,
        }
    }

    /// New pipe just beyond the right edge, gap centre drawn uniformly from the config range.
    pub fn spawn(config: &GameConfig, rng: &mut SimpleRng, masks: &MaskSet) -> Self {
        let center = rng.range_inclusive(config.pipe_center_min, config.pipe_center_max);
        Self::at(config.spawn_x(), center as f32, config, masks)
    }

    pub fn advance(&mut self, speed: f32) {
        self.top.rect.translate_x(-speed);
        self.bottom.rect.translate_x(-speed);
    }

    /// True once the right edge is strictly left of the world.
    pub fn is_offscreen(&self) -> bool {
        self.top.rect.right().max(self.bottom.rect.right()) < 0.0
    }

    pub fn center_x(&self) -> f32 {
        self.bottom.rect.center_x()
    }

    /// Distance between the top piece's bottom edge and the bottom piece's top edge.
    pub fn gap(&self) -> f32 {
        self.bottom.rect.top() - self.top.rect.bottom()
    }

    pub fn top(&self) -> &PipePiece {
        &self.top
    }

    pub fn bottom(&self) -> &PipePiece {
        &self.bottom
    }

    pub fn pieces(&self) -> [&PipePiece; 2] {
        [&self.top, &self.bottom]
    }

    pub fn is_scored(&self) -> bool {
        self.scored
    }

    pub(crate) fn mark_scored(&mut self) {
        self.scored = true;
    }
}
