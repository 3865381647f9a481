//! Letterboxed mapping between the world and the terminal grid.
//!
//! Each cell holds two pixels stacked vertically, so a `cols x rows` terminal
//! offers `cols x rows*2` roughly square pixels. The world is scaled uniformly
//! to the largest size that fits and centred; leftover cells are bars.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    cols: u16,
    rows: u16,
    /// World units per pixel.
    scale: f32,
    px_w: u16,
    px_h: u16,
    off_col: u16,
    off_row: u16,
}

impl Viewport {
    pub fn fit(cols: u16, rows: u16, world_w: f32, world_h: f32) -> Self {
        let avail_w = cols as f32;
        let avail_h = rows as f32 * 2.0;
        if cols == 0 || rows == 0 || world_w <= 0.0 || world_h <= 0.0 {
            return Self {
                cols,
                rows,
                scale: 1.0,
                px_w: 0,
                px_h: 0,
                off_col: 0,
                off_row: 0,
            };
        }

        let scale = (world_w / avail_w).max(world_h / avail_h);
        let px_w = ((world_w / scale).floor() as u16).min(cols);
        let px_h = ((world_h / scale).floor() as u16).min(rows.saturating_mul(2));
        let used_rows = px_h.div_ceil(2);
        Self {
            cols,
            rows,
            scale,
            px_w,
            px_h,
            off_col: (cols - px_w) / 2,
            off_row: (rows - used_rows) / 2,
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Pixel size of the world area.
    pub fn pixel_size(&self) -> (u16, u16) {
        (self.px_w, self.px_h)
    }

    /// Cell size of the world area.
    pub fn cell_size(&self) -> (u16, u16) {
        (self.px_w, self.px_h.div_ceil(2))
    }

    /// Top-left cell of the world area.
    pub fn origin(&self) -> (u16, u16) {
        (self.off_col, self.off_row)
    }

    /// Centre of a terminal cell in world coordinates, or `None` in the bars.
    pub fn cell_to_world(&self, col: u16, row: u16) -> Option<(f32, f32)> {
        let (cw, ch) = self.cell_size();
        if col < self.off_col || row < self.off_row {
            return None;
        }
        let c = col - self.off_col;
        let r = row - self.off_row;
        if c >= cw || r >= ch {
            return None;
        }
        let x = (c as f32 + 0.5) * self.scale;
        let y = (r as f32 * 2.0 + 1.0) * self.scale;
        Some((x, y))
    }
}
