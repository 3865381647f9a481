//! Half-block pixel canvas.
//!
//! `TermCanvas` implements the core [`Canvas`] on a pixel buffer sized to the
//! current [`Viewport`]. Sprites are blitted from the shared sprite sheet with
//! nearest-neighbour sampling and transparent pixels skipped. Text goes to a
//! separate cell layer drawn over the pixels. [`TermCanvas::compose_into`]
//! turns both into framebuffer cells.
//!
//! All buffers are reused across frames; steady-state frames do not allocate.

use std::rc::Rc;

use crate::core::{Canvas, SpriteSheet};
use crate::fb::{Cell, FrameBuffer};
use crate::types::{Rect, Rgb, SpriteId, Vec2};
use crate::viewport::Viewport;

/// Color of the letterbox bars.
const BAR: Rgb = Rgb::new(12, 12, 16);

pub struct TermCanvas {
    sheet: Rc<SpriteSheet>,
    world_w: f32,
    world_h: f32,
    viewport: Viewport,
    pixels: Vec<Rgb>,
    text: Vec<Option<(char, Rgb)>>,
}

impl TermCanvas {
    pub fn new(sheet: Rc<SpriteSheet>, world_w: f32, world_h: f32) -> Self {
        Self {
            sheet,
            world_w,
            world_h,
            viewport: Viewport::fit(0, 0, world_w, world_h),
            pixels: Vec::new(),
            text: Vec::new(),
        }
    }

    /// Start a frame for a `cols x rows` terminal, clearing both layers.
    pub fn begin_frame(&mut self, cols: u16, rows: u16) {
        if self.viewport.cols() != cols || self.viewport.rows() != rows {
            self.viewport = Viewport::fit(cols, rows, self.world_w, self.world_h);
        }
        let (pw, ph) = self.viewport.pixel_size();
        let (cw, ch) = self.viewport.cell_size();
        self.pixels.clear();
        self.pixels.resize(pw as usize * ph as usize, Rgb::BLACK);
        self.text.clear();
        self.text.resize(cw as usize * ch as usize, None);
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Pixel of the world area, for tests.
    pub fn pixel(&self, x: u16, y: u16) -> Option<Rgb> {
        let (pw, ph) = self.viewport.pixel_size();
        if x >= pw || y >= ph {
            return None;
        }
        Some(self.pixels[y as usize * pw as usize + x as usize])
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        let (pw, ph) = self.viewport.pixel_size();
        if x < 0 || y < 0 || x >= pw as i32 || y >= ph as i32 {
            return;
        }
        self.pixels[y as usize * pw as usize + x as usize] = color;
    }

    /// Pixel range `[start, end)` covered by world span `[a, a+len)`, clipped to `max`.
    fn span(&self, a: f32, len: f32, max: u16) -> (i32, i32) {
        let s = self.viewport.scale();
        let start = (a / s).floor().max(0.0) as i32;
        let end = ((a + len) / s).ceil().min(max as f32) as i32;
        (start, end)
    }

    /// Write the composed frame into `fb`, resizing it to the terminal.
    pub fn compose_into(&self, fb: &mut FrameBuffer) {
        let vp = &self.viewport;
        fb.resize(vp.cols(), vp.rows());
        fb.clear(Cell::pixels(BAR, BAR));

        let (pw, ph) = vp.pixel_size();
        let (cw, ch) = vp.cell_size();
        let (ox, oy) = vp.origin();
        for row in 0..ch {
            for col in 0..cw {
                let top_y = row * 2;
                let top = self.pixels[top_y as usize * pw as usize + col as usize];
                let bottom = if top_y + 1 < ph {
                    self.pixels[(top_y + 1) as usize * pw as usize + col as usize]
                } else {
                    BAR
                };
                let cell = match self.text[row as usize * cw as usize + col as usize] {
                    Some((c, color)) => Cell::glyph(c, color, top),
                    None => Cell::pixels(top, bottom),
                };
                fb.set(ox + col, oy + row, cell);
            }
        }
    }
}

impl Canvas for TermCanvas {
    fn draw(&mut self, sprite: SpriteId, pos: Vec2) {
        let sheet = Rc::clone(&self.sheet);
        let bmp = sheet.bitmap(sprite);
        let (pw, ph) = self.viewport.pixel_size();
        let s = self.viewport.scale();
        let (x0, x1) = self.span(pos.x, bmp.width() as f32, pw);
        let (y0, y1) = self.span(pos.y, bmp.height() as f32, ph);

        for py in y0..y1 {
            let sy = ((py as f32 + 0.5) * s - pos.y).floor() as i32;
            for px in x0..x1 {
                let sx = ((px as f32 + 0.5) * s - pos.x).floor() as i32;
                if let Some(color) = bmp.get(sx, sy) {
                    self.put_pixel(px, py, color);
                }
            }
        }
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgb) {
        let (pw, ph) = self.viewport.pixel_size();
        let (x0, x1) = self.span(rect.x, rect.w, pw);
        let (y0, y1) = self.span(rect.y, rect.h, ph);
        for py in y0..y1 {
            for px in x0..x1 {
                self.put_pixel(px, py, color);
            }
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: Rgb) {
        let (cw, ch) = self.viewport.cell_size();
        let s = self.viewport.scale();
        let row = (pos.y / (s * 2.0)).floor() as i32;
        if row < 0 || row >= ch as i32 {
            return;
        }
        let mut col = (pos.x / s).floor() as i32;
        for c in text.chars() {
            if col >= cw as i32 {
                break;
            }
            if col >= 0 {
                self.text[row as usize * cw as usize + col as usize] = Some((c, color));
            }
            col += 1;
        }
    }

    /// One cell per character.
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.viewport.scale()
    }
}
