//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: physics, pipes, scrolling,
//! collision, scoring and the screen flow. It has **no dependency** on a
//! terminal, a window or an audio device. Drawing and sound go through the
//! capability traits in [`platform`], which makes it:
//!
//! - **Deterministic**: the same seed and inputs replay the same round
//! - **Testable**: every rule runs headless with recording sinks
//! - **Portable**: the terminal front end is just one `Canvas` implementation
//!
//! # Module Structure
//!
//! - [`bird`]: vertical physics and the flap animation
//! - [`pipe`]: gapped pipe pairs and their spawn rule
//! - [`parallax`]: three background layers at different speeds
//! - [`collision`]: bounds, rectangle broad phase, pixel-mask narrow phase
//! - [`session`]: the per-tick round controller
//! - [`mode`] / [`game`]: menu, playing, game-over and exit
//! - [`sprites`] / [`mask`]: procedural bitmaps and the masks built from them
//! - [`config`]: tuning values, loading and startup validation
//! - [`rng`]: seeded LCG for pipe placement
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use tui_flappy_core::{Game, GameConfig, MaskSet, Mode, NullAudio, SpriteSheet};
//! use tui_flappy_core::types::{InputEvent, Key};
//!
//! let config = GameConfig::default();
//! config.validate().unwrap();
//! let masks = Rc::new(MaskSet::from_sheet(&SpriteSheet::new(&config)));
//!
//! let mut audio = NullAudio;
//! let mut game = Game::new(config, masks, 12345, &mut audio);
//! game.handle_input(InputEvent::KeyDown(Key::Space), &mut audio);
//! assert_eq!(game.mode(), Mode::Playing);
//!
//! game.tick(&mut audio);
//! ```
//!
//! # Timing
//!
//! Every value is per tick; the host calls [`Game::tick`] at a fixed
//! 60 ticks per second and never passes elapsed time.

pub mod bird;
pub mod collision;
pub mod config;
pub mod game;
pub mod mask;
pub mod mode;
pub mod parallax;
pub mod pipe;
pub mod platform;
pub mod rng;
pub mod screens;
pub mod session;
pub mod sprites;

pub use tui_flappy_types as types;

// Re-export commonly used types for convenience
pub use bird::Bird;
pub use collision::{detect, Collision};
pub use config::{ConfigError, GameConfig};
pub use game::Game;
pub use mask::{MaskSet, PixelMask};
pub use mode::{next_mode, Mode, ModeEvent};
pub use parallax::{ParallaxScroller, ScrollLayer};
pub use pipe::{Pipe, PipePiece};
pub use platform::{AudioSink, Canvas, NullAudio, RecordingAudio, RecordingCanvas};
pub use rng::SimpleRng;
pub use screens::MenuLayout;
pub use session::{Session, TickOutcome};
pub use sprites::{Bitmap, SpriteSheet};
