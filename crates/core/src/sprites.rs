//! Procedural sprite sheet.
//!
//! Asset decoding lives outside the core, so every sprite is generated here
//! from the config. The same bitmaps back the pixel masks used for collision
//! and the pixels the platform draws: what you see is what you hit.

use crate::config::GameConfig;
use crate::types::{PipeOrientation, Rgb, SpriteId, FRAME_COUNT};

/// A small RGBA-like image: `None` pixels are fully transparent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u16,
    height: u16,
    pixels: Vec<Option<Rgb>>,
}

impl Bitmap {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![None; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline(always)]
    pub fn get(&self, x: i32, y: i32) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        self.pixels[y as usize * self.width as usize + x as usize] = Some(color);
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, color);
            }
        }
    }

    /// Fill an axis-aligned ellipse centred on `(cx, cy)`.
    pub fn fill_ellipse(&mut self, cx: f32, cy: f32, rx: f32, ry: f32, color: Rgb) {
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }
        let y0 = (cy - ry).floor() as i32;
        let y1 = (cy + ry).ceil() as i32;
        let x0 = (cx - rx).floor() as i32;
        let x1 = (cx + rx).ceil() as i32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let nx = (x as f32 + 0.5 - cx) / rx;
                let ny = (y as f32 + 0.5 - cy) / ry;
                if nx * nx + ny * ny <= 1.0 {
                    self.set(x, y, color);
                }
            }
        }
    }

    pub fn is_opaque(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some()
    }

    /// Mirror top-to-bottom.
    pub fn flipped_vertical(&self) -> Bitmap {
        let w = self.width as usize;
        let mut pixels = Vec::with_capacity(self.pixels.len());
        for row in self.pixels.chunks(w.max(1)).rev() {
            pixels.extend_from_slice(row);
        }
        Bitmap {
            width: self.width,
            height: self.height,
            pixels,
        }
    }
}

const SKY_TOP: Rgb = Rgb::new(78, 178, 206);
const SKY_BOTTOM: Rgb = Rgb::new(196, 234, 244);
const CLOUD: Rgb = Rgb::new(250, 252, 255);
const CLOUD_SHADE: Rgb = Rgb::new(222, 232, 240);
const MOUNTAIN_FAR: Rgb = Rgb::new(120, 150, 170);
const MOUNTAIN_NEAR: Rgb = Rgb::new(96, 128, 140);
const SNOW: Rgb = Rgb::new(236, 240, 244);
const GRASS: Rgb = Rgb::new(92, 178, 60);
const GRASS_LIGHT: Rgb = Rgb::new(124, 206, 80);
const DIRT: Rgb = Rgb::new(214, 188, 112);
const DIRT_DARK: Rgb = Rgb::new(188, 162, 92);
const PIPE_DARK: Rgb = Rgb::new(64, 112, 24);
const PIPE_LIGHT: Rgb = Rgb::new(150, 218, 66);
const PIPE_EDGE: Rgb = Rgb::new(40, 72, 16);
const BIRD_BODY: Rgb = Rgb::new(245, 200, 66);
const BIRD_BELLY: Rgb = Rgb::new(255, 230, 130);
const BIRD_WING: Rgb = Rgb::new(215, 160, 35);
const BIRD_EYE: Rgb = Rgb::new(255, 255, 255);
const BIRD_PUPIL: Rgb = Rgb::new(20, 20, 20);
const BIRD_BEAK: Rgb = Rgb::new(230, 80, 40);

/// Wing offsets per frame, as a fraction of the sprite size (down is positive).
const WING_PHASES: [f32; FRAME_COUNT as usize] = [-0.10, -0.03, 0.06, -0.03];

/// Every bitmap the game draws, generated once per process.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    background: Bitmap,
    clouds: Bitmap,
    mountains: Bitmap,
    ground: Bitmap,
    bird: [Bitmap; FRAME_COUNT as usize],
    pipe_upright: Bitmap,
    pipe_flipped: Bitmap,
}

impl SpriteSheet {
    pub fn new(config: &GameConfig) -> Self {
        let world_w = to_px(config.world_width);
        let world_h = to_px(config.world_height);
        let bird_size = to_px(config.bird_size);
        let pipe_upright = pipe_bitmap(to_px(config.pipe_width), to_px(config.pipe_height));
        let pipe_flipped = pipe_upright.flipped_vertical();
        let mountain_h = to_px(config.world_height - config.ground_height - config.mountain_y);

        Self {
            background: sky_bitmap(world_w, world_h),
            clouds: clouds_bitmap(world_w, to_px(config.mountain_y + 40.0)),
            mountains: mountains_bitmap(world_w, mountain_h),
            ground: ground_bitmap(world_w, to_px(config.ground_height)),
            bird: std::array::from_fn(|frame| bird_bitmap(bird_size, WING_PHASES[frame])),
            pipe_upright,
            pipe_flipped,
        }
    }

    pub fn bitmap(&self, sprite: SpriteId) -> &Bitmap {
        match sprite {
            SpriteId::Background => &self.background,
            SpriteId::Clouds => &self.clouds,
            SpriteId::Mountains => &self.mountains,
            SpriteId::Ground => &self.ground,
            SpriteId::Bird(frame) => &self.bird[(frame % FRAME_COUNT) as usize],
            SpriteId::Pipe(PipeOrientation::Upright) => &self.pipe_upright,
            SpriteId::Pipe(PipeOrientation::Flipped) => &self.pipe_flipped,
        }
    }
}

fn to_px(v: f32) -> u16 {
    v.round().clamp(1.0, u16::MAX as f32) as u16
}

fn sky_bitmap(w: u16, h: u16) -> Bitmap {
    let mut bmp = Bitmap::new(w, h);
    let denom = (h.max(2) - 1) as f32;
    for y in 0..h as i32 {
        let color = SKY_TOP.lerp(SKY_BOTTOM, y as f32 / denom);
        bmp.fill_rect(0, y, w as i32, 1, color);
    }
    bmp
}

fn clouds_bitmap(w: u16, h: u16) -> Bitmap {
    let mut bmp = Bitmap::new(w, h);
    let wf = w as f32;
    let hf = h as f32;
    // (x, y, scale) as fractions; x stays inside the strip so wrapping is seamless.
    let puffs = [
        (0.10, 0.35, 1.0),
        (0.38, 0.22, 0.8),
        (0.62, 0.45, 1.2),
        (0.86, 0.30, 0.9),
    ];
    for (fx, fy, scale) in puffs {
        let cx = fx * wf;
        let cy = fy * hf;
        let r = hf * 0.18 * scale;
        bmp.fill_ellipse(cx, cy + r * 0.3, r * 2.2, r * 0.7, CLOUD_SHADE);
        bmp.fill_ellipse(cx - r, cy + r * 0.1, r, r * 0.75, CLOUD);
        bmp.fill_ellipse(cx, cy - r * 0.2, r * 1.2, r, CLOUD);
        bmp.fill_ellipse(cx + r * 1.1, cy + r * 0.15, r * 0.9, r * 0.7, CLOUD);
    }
    bmp
}

fn mountains_bitmap(w: u16, h: u16) -> Bitmap {
    let mut bmp = Bitmap::new(w, h);
    let wf = w as f32;
    let hf = h as f32;
    // (peak x, peak height, half base width) as fractions of the strip.
    let far = [(0.15, 0.70, 0.22), (0.55, 0.80, 0.25), (0.90, 0.65, 0.20)];
    let near = [(0.32, 0.50, 0.20), (0.74, 0.55, 0.22)];
    for (layer, color) in [(&far[..], MOUNTAIN_FAR), (&near[..], MOUNTAIN_NEAR)] {
        for &(px, ph, half) in layer {
            draw_peak(&mut bmp, px * wf, hf - ph * hf, half * wf, color);
        }
    }
    bmp
}

/// Triangle from `(peak_x, peak_y)` down to the strip bottom, wrapping horizontally.
fn draw_peak(bmp: &mut Bitmap, peak_x: f32, peak_y: f32, half_base: f32, color: Rgb) {
    let w = bmp.width() as i32;
    let h = bmp.height() as i32;
    let height = h as f32 - peak_y;
    if height <= 0.0 {
        return;
    }
    for y in peak_y.max(0.0) as i32..h {
        let t = (y as f32 - peak_y) / height;
        let half = half_base * t;
        let snow = t < 0.18;
        for x in (peak_x - half) as i32..=(peak_x + half) as i32 {
            let wrapped = x.rem_euclid(w);
            bmp.set(wrapped, y, if snow { SNOW } else { color });
        }
    }
}

fn ground_bitmap(w: u16, h: u16) -> Bitmap {
    let mut bmp = Bitmap::new(w, h);
    let grass_h = (h as i32 / 8).max(1);
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let color = if y < grass_h {
                if (x / 12 + y / 4) % 2 == 0 {
                    GRASS
                } else {
                    GRASS_LIGHT
                }
            } else if ((x + y) / 16) % 2 == 0 {
                DIRT
            } else {
                DIRT_DARK
            };
            bmp.set(x, y, color);
        }
    }
    bmp
}

/// Upright pipe: lip at the top, narrower body below it.
fn pipe_bitmap(w: u16, h: u16) -> Bitmap {
    let mut bmp = Bitmap::new(w, h);
    let wi = w as i32;
    let hi = h as i32;
    let inset = (wi / 20).max(1);
    let lip_h = (wi * 3 / 10).max(1).min(hi);

    let shade = |x: i32, left: i32, right: i32| {
        let span = (right - left).max(1) as f32;
        let t = (x - left) as f32 / span;
        // Brightest a third of the way in.
        let k = 1.0 - ((t - 0.33).abs() * 1.5).min(1.0);
        PIPE_DARK.lerp(PIPE_LIGHT, k)
    };

    for y in lip_h..hi {
        for x in inset..wi - inset {
            let edge = x == inset || x == wi - inset - 1;
            bmp.set(x, y, if edge { PIPE_EDGE } else { shade(x, inset, wi - inset) });
        }
    }
    for y in 0..lip_h {
        for x in 0..wi {
            let edge = x == 0 || x == wi - 1 || y == 0 || y == lip_h - 1;
            bmp.set(x, y, if edge { PIPE_EDGE } else { shade(x, 0, wi) });
        }
    }
    bmp
}

/// One bird frame; `wing_phase` moves the wing up or down.
fn bird_bitmap(size: u16, wing_phase: f32) -> Bitmap {
    let mut bmp = Bitmap::new(size, size);
    let s = size as f32;
    let cx = s * 0.48;
    let cy = s * 0.52;

    bmp.fill_ellipse(cx, cy, s * 0.34, s * 0.27, BIRD_BODY);
    bmp.fill_ellipse(cx + s * 0.02, cy + s * 0.10, s * 0.22, s * 0.12, BIRD_BELLY);
    bmp.fill_ellipse(
        cx - s * 0.16,
        cy + wing_phase * s,
        s * 0.16,
        s * 0.10,
        BIRD_WING,
    );
    bmp.fill_ellipse(cx + s * 0.17, cy - s * 0.10, s * 0.09, s * 0.09, BIRD_EYE);
    bmp.fill_ellipse(cx + s * 0.20, cy - s * 0.10, s * 0.035, s * 0.045, BIRD_PUPIL);
    bmp.fill_ellipse(cx + s * 0.36, cy + s * 0.03, s * 0.12, s * 0.06, BIRD_BEAK);
    bmp
}
