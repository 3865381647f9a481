//! Shared types module - constants and plain data used by every crate
//!
//! Everything here is pure data with no external dependencies, so the same
//! types flow through the simulation core, the input mapper and the terminal
//! platform layer.
//!
//! # World Dimensions
//!
//! The simulation runs in a fixed logical world, independent of the terminal:
//!
//! - **Width**: 800 units
//! - **Height**: 600 units (y grows downward)
//!
//! # Physics Constants
//!
//! All physics values are expressed per tick:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICKS_PER_SECOND` | 60 | Fixed simulation rate |
//! | `GRAVITY` | 0.24 | Velocity gained every tick |
//! | `JUMP_VELOCITY` | -5.0 | Velocity after a flap (reset, not additive) |
//! | `PIPE_SPEED` | 1.0 | Horizontal pipe movement per tick |
//! | `PIPE_GAP` | 250 | Vertical gap between the two pieces of a pipe |
//! | `SPAWN_INTERVAL_TICKS` | 200 | Spawn timer threshold |
//!
//! # Examples
//!
//! ```
//! use tui_flappy_types::{Rect, Vec2, SoundCue, WORLD_WIDTH};
//!
//! let a = Rect::from_center(Vec2::new(100.0, 100.0), 64.0, 64.0);
//! let b = Rect::new(120.0, 120.0, 10.0, 10.0);
//! assert!(a.intersects(&b));
//!
//! assert_eq!(SoundCue::Flap.as_str(), "flap");
//! assert_eq!(WORLD_WIDTH, 800.0);
//! ```

/// World width in logical units
pub const WORLD_WIDTH: f32 = 800.0;

/// World height in logical units
pub const WORLD_HEIGHT: f32 = 600.0;

/// Target simulation rate
pub const TICKS_PER_SECOND: u32 = 60;

/// Velocity gained every tick while falling
pub const GRAVITY: f32 = 0.24;

/// Velocity set by a flap (negative is up)
pub const JUMP_VELOCITY: f32 = -5.0;

/// Bird sprite edge length (square frames)
pub const BIRD_SIZE: f32 = 64.0;

/// Fixed horizontal position of the bird's centre
pub const BIRD_X: f32 = 150.0;

/// Number of frames in the flap animation
pub const FRAME_COUNT: u8 = 4;

/// Ticks each animation frame stays on screen
pub const FRAMES_PER_SPRITE: u32 = 5;

/// Vertical gap between the top and bottom piece of a pipe pair
pub const PIPE_GAP: f32 = 250.0;

/// Horizontal pipe speed per tick
pub const PIPE_SPEED: f32 = 1.0;

/// Pipe sprite width
pub const PIPE_WIDTH: f32 = 80.0;

/// Pipe sprite height
pub const PIPE_HEIGHT: f32 = 500.0;

/// Lowest gap centre a pipe can spawn with (inclusive)
pub const PIPE_CENTER_MIN: i32 = 150;

/// Highest gap centre a pipe can spawn with (inclusive)
pub const PIPE_CENTER_MAX: i32 = 450;

/// Pipes spawn centred this far past the right edge of the world
pub const SPAWN_MARGIN: f32 = 50.0;

/// The spawn timer must exceed this many ticks before a pipe spawns
pub const SPAWN_INTERVAL_TICKS: u32 = 200;

/// Cloud layer scroll speed per tick
pub const CLOUD_SPEED: f32 = 1.0;

/// Mountain layer scroll speed per tick
pub const MOUNTAIN_SPEED: f32 = 2.0;

/// Vertical position of the mountain strip
pub const MOUNTAIN_Y: f32 = 100.0;

/// Height of the ground strip at the bottom of the world
pub const GROUND_HEIGHT: f32 = 100.0;


/// A point or displacement in world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_center(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    /// Rectangle whose bottom edge is centred on `anchor`.
    pub fn from_midbottom(anchor: Vec2, w: f32, h: f32) -> Self {
        Self::new(anchor.x - w / 2.0, anchor.y - h, w, h)
    }

    /// Rectangle whose top edge is centred on `anchor`.
    pub fn from_midtop(anchor: Vec2, w: f32, h: f32) -> Self {
        Self::new(anchor.x - w / 2.0, anchor.y, w, h)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn top_left(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// True when the two rectangles share a region of positive area.
    ///
    /// Rectangles that merely touch along an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Inclusive point test (used for button hit-testing).
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    pub fn translate_x(&mut self, dx: f32) {
        self.x += dx;
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const LIGHT_GREEN: Rgb = Rgb::new(144, 238, 144);
    pub const LIGHT_RED: Rgb = Rgb::new(255, 182, 193);
    pub const LIGHT_BLUE: Rgb = Rgb::new(173, 216, 230);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend; `t` is clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Keys the game reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Enter,
    Escape,
    Up,
    /// Printable key, always lowercase
    Char(char),
}

/// Platform input event, already mapped into world coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Window closed / Ctrl-C: leave immediately
    Quit,
    KeyDown(Key),
    MouseDown { x: f32, y: f32 },
}

/// Fire-and-forget sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Flap,
    Score,
    Hit,
}

impl SoundCue {
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Flap => "flap",
            SoundCue::Score => "score",
            SoundCue::Hit => "hit",
        }
    }
}

/// Looping background tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicTrack {
    Theme,
}

impl MusicTrack {
    pub fn as_str(&self) -> &'static str {
        match self {
            MusicTrack::Theme => "theme",
        }
    }
}

/// Which way a pipe sprite faces.
///
/// - **Upright**: cap on top, used for pieces below the midline
/// - **Flipped**: cap at the bottom, used for pieces above the midline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipeOrientation {
    Upright,
    Flipped,
}

/// Visual assets the core asks the platform to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteId {
    Background,
    Clouds,
    Mountains,
    Ground,
    /// Bird animation frame, `0..FRAME_COUNT`
    Bird(u8),
    Pipe(PipeOrientation),
}

impl SpriteId {
    /// Bird frame sprite, wrapping out-of-range indices
    pub fn bird(frame: u8) -> Self {
        SpriteId::Bird(frame % FRAME_COUNT)
    }
}
