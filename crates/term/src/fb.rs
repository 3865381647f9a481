//! Half-block framebuffer.
//!
//! Each terminal cell holds either two stacked world pixels or one glyph of
//! overlay text. The renderer diffs two of these buffers row by row.

pub use crate::types::Rgb;

/// Upper half block: foreground paints the top pixel, background the bottom one.
pub const HALF_BLOCK: char = '▀';

/// Contents of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Two vertically stacked pixels.
    Pixels { top: Rgb, bottom: Rgb },
    /// Bold overlay text on a solid background.
    Glyph { ch: char, fg: Rgb, bg: Rgb },
}

impl Cell {
    pub const fn pixels(top: Rgb, bottom: Rgb) -> Self {
        Cell::Pixels { top, bottom }
    }

    pub const fn glyph(ch: char, fg: Rgb, bg: Rgb) -> Self {
        Cell::Glyph { ch, fg, bg }
    }

    /// Character printed for this cell.
    pub fn ch(&self) -> char {
        match *self {
            Cell::Pixels { .. } => HALF_BLOCK,
            Cell::Glyph { ch, .. } => ch,
        }
    }

    /// `(foreground, background)` as sent to the terminal.
    pub fn colors(&self) -> (Rgb, Rgb) {
        match *self {
            Cell::Pixels { top, bottom } => (top, bottom),
            Cell::Glyph { fg, bg, .. } => (fg, bg),
        }
    }

    /// Both pixels share one color, so only the background matters.
    pub fn is_solid(&self) -> bool {
        matches!(*self, Cell::Pixels { top, bottom } if top == bottom)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::pixels(Rgb::BLACK, Rgb::BLACK)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn same_size(&self, other: &FrameBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }

    /// Resize in place, reusing the allocation when it is large enough.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells
            .resize(width as usize * height as usize, Cell::default());
    }

    /// Cells of row `y`; empty past the bottom edge.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let w = self.width as usize;
        let start = y as usize * w;
        &self.cells[start..start + w]
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y).get(x as usize).copied()
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            self.cells[y as usize * self.width as usize + x as usize] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Row `y` as printed characters, for tests.
    pub fn row_string(&self, y: u16) -> String {
        self.row(y).iter().map(Cell::ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_and_bounds() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.set(1, 1, Cell::glyph('x', Rgb::WHITE, Rgb::BLACK));
        fb.set(9, 9, Cell::glyph('y', Rgb::WHITE, Rgb::BLACK));
        assert_eq!(fb.row(0).len(), 3);
        assert!(fb.row(2).is_empty());
        assert_eq!(fb.get(9, 9), None);
        assert_eq!(fb.row_string(1), "▀x▀");
    }

    #[test]
    fn test_resize_changes_shape() {
        let mut fb = FrameBuffer::new(4, 2);
        fb.resize(2, 3);
        assert_eq!((fb.width(), fb.height()), (2, 3));
        assert_eq!(fb.row(2).len(), 2);
        assert!(!fb.same_size(&FrameBuffer::new(4, 2)));
    }

    #[test]
    fn test_cell_colors() {
        let px = Cell::pixels(Rgb::WHITE, Rgb::BLACK);
        assert_eq!(px.ch(), HALF_BLOCK);
        assert_eq!(px.colors(), (Rgb::WHITE, Rgb::BLACK));
        assert!(!px.is_solid());
        assert!(Cell::pixels(Rgb::WHITE, Rgb::WHITE).is_solid());
        assert!(!Cell::glyph(' ', Rgb::WHITE, Rgb::WHITE).is_solid());
    }
}
