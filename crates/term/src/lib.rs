//! Terminal "game renderer" module.
//!
//! The platform side of the game for a plain terminal. It implements the
//! core capability traits and owns everything that touches the tty:
//!
//! - [`canvas`]: half-block pixel canvas implementing `Canvas`
//! - [`viewport`]: letterboxed world <-> cell mapping
//! - [`fb`] / [`renderer`]: framebuffer and diffing presenter
//! - [`pacer`]: fixed-rate tick pacing
//! - [`audio`]: log-and-bell `AudioSink`

pub mod audio;
pub mod canvas;
pub mod fb;
pub mod pacer;
pub mod renderer;
pub mod viewport;

pub use tui_flappy_core as core;
pub use tui_flappy_types as types;

pub use audio::TerminalAudio;
pub use canvas::TermCanvas;
pub use fb::{Cell, FrameBuffer, Rgb, HALF_BLOCK};
pub use pacer::FramePacer;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use viewport::Viewport;
