//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key, mouse and resize events into [`crate::types::InputEvent`]s
//! and drains everything pending for the current tick into a fixed-capacity
//! batch, so polling never allocates.

pub mod map;
pub mod poll;

pub use tui_flappy_types as types;

pub use map::{map_event, map_key, should_quit, Polled};
pub use poll::{poll_input, InputBatch, MAX_EVENTS_PER_POLL};
