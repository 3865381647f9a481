//! Terminal audio sink.
//!
//! A terminal cannot play samples, so cues are logged and a collision can ring
//! the bell. Write errors are logged and dropped: audio never fails a tick.

use std::io::{self, Write};

use crate::core::AudioSink;
use crate::types::{MusicTrack, SoundCue};

const BELL: &[u8] = b"\x07";

pub struct TerminalAudio<W: Write = io::Stdout> {
    out: W,
    bell: bool,
}

impl TerminalAudio {
    pub fn new(bell: bool) -> Self {
        Self::with_writer(io::stdout(), bell)
    }
}

impl<W: Write> TerminalAudio<W> {
    pub fn with_writer(out: W, bell: bool) -> Self {
        Self { out, bell }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn ring(&mut self) {
        let result = self.out.write_all(BELL).and_then(|()| self.out.flush());
        if let Err(err) = result {
            log::warn!("terminal bell failed: {err}");
        }
    }
}

impl<W: Write> AudioSink for TerminalAudio<W> {
    fn play_sound(&mut self, cue: SoundCue) {
        log::debug!("sound: {}", cue.as_str());
        if cue == SoundCue::Hit && self.bell {
            self.ring();
        }
    }

    fn play_music_loop(&mut self, track: MusicTrack) {
        log::info!("music loop: {}", track.as_str());
    }
}
