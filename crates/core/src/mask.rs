//! Pixel masks - per-pixel opacity for the narrow collision phase
//!
//! A mask is a packed bitset, one row at a time, built from a sprite bitmap.
//! Overlap follows the usual convention: `other` is placed at `(dx, dy)`
//! relative to `self`'s top-left corner, and the test succeeds as soon as one
//! pixel is set in both.

use std::rc::Rc;

use crate::sprites::{Bitmap, SpriteSheet};
use crate::types::{PipeOrientation, SpriteId, FRAME_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMask {
    width: u16,
    height: u16,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl PixelMask {
    /// Empty mask of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        let words_per_row = (width as usize).div_ceil(64);
        Self {
            width,
            height,
            words_per_row,
            bits: vec![0; words_per_row * height as usize],
        }
    }

    /// Every pixel set.
    pub fn filled(width: u16, height: u16) -> Self {
        let mut mask = Self::new(width, height);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                mask.set(x, y);
            }
        }
        mask
    }

    /// One bit per opaque pixel of `bitmap`.
    pub fn from_bitmap(bitmap: &Bitmap) -> Self {
        let mut mask = Self::new(bitmap.width(), bitmap.height());
        for y in 0..bitmap.height() as i32 {
            for x in 0..bitmap.width() as i32 {
                if bitmap.is_opaque(x, y) {
                    mask.set(x, y);
                }
            }
        }
        mask
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    fn set(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let word = y as usize * self.words_per_row + x as usize / 64;
        self.bits[word] |= 1u64 << (x as usize % 64);
    }

    #[inline(always)]
    pub fn is_set(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return false;
        }
        let word = y as usize * self.words_per_row + x as usize / 64;
        self.bits[word] & (1u64 << (x as usize % 64)) != 0
    }

    /// Number of set pixels.
    pub fn count(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// True if any set pixel of `other`, placed at `(dx, dy)`, lands on a set pixel of `self`.
    pub fn overlap(&self, other: &PixelMask, dx: i32, dy: i32) -> bool {
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (self.width as i32).min(dx + other.width as i32);
        let y1 = (self.height as i32).min(dy + other.height as i32);
        if x0 >= x1 || y0 >= y1 {
            return false;
        }

        for y in y0..y1 {
            for x in x0..x1 {
                if self.is_set(x, y) && other.is_set(x - dx, y - dy) {
                    return true;
                }
            }
        }
        false
    }
}

/// Masks for every collidable sprite, built once from the sheet.
///
/// Pipe masks are shared (`Rc`) by every pipe piece with that orientation.
#[derive(Debug, Clone)]
pub struct MaskSet {
    bird: [PixelMask; FRAME_COUNT as usize],
    pipe_upright: Rc<PixelMask>,
    pipe_flipped: Rc<PixelMask>,
}

impl MaskSet {
    pub fn from_sheet(sheet: &SpriteSheet) -> Self {
        Self {
            bird: std::array::from_fn(|frame| {
                PixelMask::from_bitmap(sheet.bitmap(SpriteId::Bird(frame as u8)))
            }),
            pipe_upright: Rc::new(PixelMask::from_bitmap(
                sheet.bitmap(SpriteId::Pipe(PipeOrientation::Upright)),
            )),
            pipe_flipped: Rc::new(PixelMask::from_bitmap(
                sheet.bitmap(SpriteId::Pipe(PipeOrientation::Flipped)),
            )),
        }
    }

    pub fn bird(&self, frame: u8) -> &PixelMask {
        &self.bird[(frame % FRAME_COUNT) as usize]
    }

    pub fn pipe(&self, orientation: PipeOrientation) -> Rc<PixelMask> {
        match orientation {
            PipeOrientation::Upright => Rc::clone(&self.pipe_upright),
            PipeOrientation::Flipped => Rc::clone(&self.pipe_flipped),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::types::Rgb;

    fn dot(w: u16, h: u16, x: i32, y: i32) -> PixelMask {
        let mut bmp = Bitmap::new(w, h);
        bmp.set(x, y, Rgb::WHITE);
        PixelMask::from_bitmap(&bmp)
    }

    #[test]
    fn test_filled_masks_overlap_when_rects_overlap() {
        let a = PixelMask::filled(10, 10);
        let b = PixelMask::filled(10, 10);
        assert!(a.overlap(&b, 9, 9));
        assert!(a.overlap(&b, -9, -9));
        assert!(!a.overlap(&b, 10, 0));
        assert!(!a.overlap(&b, 0, -10));
    }

    #[test]
    fn test_transparent_pixels_do_not_collide() {
        let a = dot(10, 10, 0, 0);
        let b = dot(10, 10, 9, 9);
        // Bounding boxes overlap completely, the single pixels do not.
        assert!(!a.overlap(&b, 0, 0));
        // Shift b so its pixel lands on a's.
        assert!(a.overlap(&b, -9, -9));
    }

    #[test]
    fn test_overlap_is_symmetric_under_negated_offset() {
        let a = dot(8, 8, 3, 4);
        let b = dot(6, 6, 1, 2);
        assert!(a.overlap(&b, 2, 2));
        assert!(b.overlap(&a, -2, -2));
    }

    #[test]
    fn test_wide_masks_cross_word_boundaries() {
        let a = dot(130, 2, 100, 1);
        let b = dot(4, 4, 0, 0);
        assert!(a.overlap(&b, 100, 1));
        assert!(!a.overlap(&b, 99, 1));
        assert_eq!(a.count(), 1);
    }

    #[test]
    fn test_from_bitmap_matches_opacity() {
        let mut bmp = Bitmap::new(3, 2);
        bmp.set(0, 0, Rgb::BLACK);
        bmp.set(2, 1, Rgb::WHITE);
        let mask = PixelMask::from_bitmap(&bmp);
        assert!(mask.is_set(0, 0));
        assert!(mask.is_set(2, 1));
        assert!(!mask.is_set(1, 0));
        assert!(!mask.is_set(-1, 0));
        assert_eq!(mask.count(), 2);
    }

    #[test]
    fn test_mask_set_shares_pipe_masks() {
        let sheet = SpriteSheet::new(&GameConfig::default());
        let masks = MaskSet::from_sheet(&sheet);
        let a = masks.pipe(PipeOrientation::Flipped);
        let b = masks.pipe(PipeOrientation::Flipped);
        assert!(Rc::ptr_eq(&a, &b));
        assert_ne!(*masks.pipe(PipeOrientation::Upright), *a);
        assert!(masks.bird(0).count() > 0);
    }
}
