//! Non-blocking event draining.

use std::io;
use std::time::Duration;

use arrayvec::ArrayVec;
use crossterm::event;

use crate::map::{map_event, Polled};

/// Events handled per tick; anything beyond stays queued for the next tick.
pub const MAX_EVENTS_PER_POLL: usize = 32;

pub type InputBatch = ArrayVec<Polled, MAX_EVENTS_PER_POLL>;

/// Drain every pending terminal event without waiting.
///
/// Unmapped events (releases, mouse moves, focus) are consumed and dropped.
pub fn poll_input(to_world: impl Fn(u16, u16) -> Option<(f32, f32)>) -> io::Result<InputBatch> {
    let mut batch = InputBatch::new();
    while !batch.is_full() && event::poll(Duration::ZERO)? {
        let ev = event::read()?;
        if let Some(polled) = map_event(&ev, &to_world) {
            batch.push(polled);
        }
    }
    Ok(batch)
}
