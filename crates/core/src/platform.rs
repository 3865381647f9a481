//! Capability interfaces the core needs from its host.
//!
//! The core never talks to a window, a sound device or a font directly. It
//! draws through a [`Canvas`] and emits cues through an [`AudioSink`]; input
//! arrives as already-mapped [`InputEvent`](crate::types::InputEvent)s.

use crate::types::{MusicTrack, Rect, Rgb, SoundCue, SpriteId, Vec2};

/// Immediate-mode drawing surface in world coordinates.
pub trait Canvas {
    /// Blit a sprite with its top-left corner at `pos`.
    fn draw(&mut self, sprite: SpriteId, pos: Vec2);

    /// Fill a solid rectangle.
    fn draw_rect(&mut self, rect: Rect, color: Rgb);

    /// Draw a line of text with its top-left corner at `pos`.
    fn draw_text(&mut self, text: &str, pos: Vec2, color: Rgb);

    /// Width of `text` in world units, used to centre labels.
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * 12.0
    }
}

pub trait AudioSink {
    fn play_sound(&mut self, cue: SoundCue);
    fn play_music_loop(&mut self, track: MusicTrack);
}

/// Audio sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play_sound(&mut self, _cue: SoundCue) {}
    fn play_music_loop(&mut self, _track: MusicTrack) {}
}

/// Audio sink that records what it was asked to play.
///
/// Handy for tests and headless runs that want to assert on cues.
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    pub sounds: Vec<SoundCue>,
    pub music: Vec<MusicTrack>,
}

impl RecordingAudio {
    pub fn count(&self, cue: SoundCue) -> usize {
        self.sounds.iter().filter(|&&c| c == cue).count()
    }
}

impl AudioSink for RecordingAudio {
    fn play_sound(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }

    fn play_music_loop(&mut self, track: MusicTrack) {
        self.music.push(track);
    }
}

/// Canvas that counts draw calls and keeps the last text drawn.
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    pub sprites: Vec<(SpriteId, Vec2)>,
    pub rects: Vec<(Rect, Rgb)>,
    pub texts: Vec<(String, Vec2, Rgb)>,
}

impl RecordingCanvas {
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|(t, _, _)| t.contains(needle))
    }
}

impl Canvas for RecordingCanvas {
    fn draw(&mut self, sprite: SpriteId, pos: Vec2) {
        self.sprites.push((sprite, pos));
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgb) {
        self.rects.push((rect, color));
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, color: Rgb) {
        self.texts.push((text.to_string(), pos, color));
    }
}
