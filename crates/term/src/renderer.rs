//! TerminalRenderer: flushes half-block frames to a real terminal.
//!
//! The first frame, and any frame after a resize or `invalidate`, is a full
//! redraw. Every other frame only rewrites the spans of cells that changed.
//! Colors are emitted only when they differ from the previous cell, and solid
//! pixel pairs are printed as blank cells so they need a background only.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, FrameBuffer, Rgb};

const TITLE: &str = "tui-flappy";

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(EnableMouseCapture)?;
        self.buf.queue(terminal::SetTitle(TITLE))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, diffing against the previously presented frame.
    ///
    /// The presented frame is swapped into the renderer; `fb` comes back
    /// holding the older frame, ready to be recomposed.
    pub fn present_frame(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.as_mut() {
            Some(prev) => {
                encode_diff_into(prev, fb, &mut self.buf)?;
                std::mem::swap(prev, fb);
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Unchanged cells between two changed ones that are cheaper to reprint
/// than to skip with a cursor move.
const MERGE_GAP: usize = 3;

/// Encode a redraw of every cell into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::default();
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for &cell in fb.row(y) {
            pen.paint(out, cell)?;
        }
    }
    pen.finish(out)
}

/// Encode only the cells of `next` that differ from `prev` into `out`.
///
/// Frames of different sizes fall back to a full redraw.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if !prev.same_size(next) {
        return encode_full_into(next, out);
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let row = next.row(y);
        for_each_changed_span(prev.row(y), row, |start, end| {
            out.queue(cursor::MoveTo(start as u16, y))?;
            for &cell in &row[start..end] {
                pen.paint(out, cell)?;
            }
            Ok(())
        })?;
    }
    pen.finish(out)
}

/// Colors and weight last sent to the terminal within one frame.
#[derive(Debug, Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    bold: bool,
}

impl Pen {
    fn paint(&mut self, out: &mut Vec<u8>, cell: Cell) -> Result<()> {
        let (fg, bg) = cell.colors();
        if cell.is_solid() {
            // A blank cell shows only the background: leave fg and weight alone.
            self.set_bg(out, bg)?;
            out.queue(Print(' '))?;
            return Ok(());
        }

        if self.fg != Some(fg) {
            out.queue(SetForegroundColor(rgb_to_color(fg)))?;
            self.fg = Some(fg);
        }
        self.set_bg(out, bg)?;
        let bold = matches!(cell, Cell::Glyph { .. });
        if bold != self.bold {
            let attr = if bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            out.queue(SetAttribute(attr))?;
            self.bold = bold;
        }
        out.queue(Print(cell.ch()))?;
        Ok(())
    }

    fn set_bg(&mut self, out: &mut Vec<u8>, bg: Rgb) -> Result<()> {
        if self.bg != Some(bg) {
            out.queue(SetBackgroundColor(rgb_to_color(bg)))?;
            self.bg = Some(bg);
        }
        Ok(())
    }

    /// Reset the terminal style if this frame changed it.
    fn finish(self, out: &mut Vec<u8>) -> Result<()> {
        if self.fg.is_some() || self.bg.is_some() || self.bold {
            out.queue(ResetColor)?;
            out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(start, end)` for each changed span of a row. Spans separated by at
/// most [`MERGE_GAP`] unchanged cells are reported as one.
fn for_each_changed_span(
    prev: &[Cell],
    next: &[Cell],
    mut f: impl FnMut(usize, usize) -> Result<()>,
) -> Result<()> {
    let mut span: Option<(usize, usize)> = None;
    for (x, (a, b)) in prev.iter().zip(next).enumerate() {
        if a == b {
            continue;
        }
        span = match span {
            Some((start, end)) if x - end <= MERGE_GAP => Some((start, x + 1)),
            Some((start, end)) => {
                f(start, end)?;
                Some((x, x + 1))
            }
            None => Some((x, x + 1)),
        };
    }
    if let Some((start, end)) = span {
        f(start, end)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::HALF_BLOCK;

    fn pixel_row(colors: &[(Rgb, Rgb)]) -> FrameBuffer {
        let mut fb = FrameBuffer::new(colors.len() as u16, 1);
        for (x, &(top, bottom)) in colors.iter().enumerate() {
            fb.set(x as u16, 0, Cell::pixels(top, bottom));
        }
        fb
    }

    fn encode(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    const SKY: (Rgb, Rgb) = (Rgb::LIGHT_BLUE, Rgb::LIGHT_BLUE);
    const EDGE: (Rgb, Rgb) = (Rgb::WHITE, Rgb::BLACK);

    #[test]
    fn test_full_encode_prints_every_cell() {
        let fb = pixel_row(&[EDGE, SKY, EDGE]);
        let text = encode(|out| encode_full_into(&fb, out));
        assert_eq!(text.matches(HALF_BLOCK).count(), 2);
        // The solid cell is a space on its background.
        assert_eq!(text.matches(' ').count(), 1);
    }

    #[test]
    fn test_repeated_colors_are_sent_once() {
        let fb = pixel_row(&[EDGE, EDGE, EDGE, EDGE]);
        let text = encode(|out| encode_full_into(&fb, out));
        let fg = encode(|out| {
            out.queue(SetForegroundColor(rgb_to_color(Rgb::WHITE)))?;
            Ok(())
        });
        assert_eq!(text.matches(fg.as_str()).count(), 1);
        assert_eq!(text.matches(HALF_BLOCK).count(), 4);
    }

    #[test]
    fn test_solid_cells_leave_foreground_alone() {
        let fb = pixel_row(&[SKY, SKY]);
        let text = encode(|out| encode_full_into(&fb, out));
        assert!(!text.contains("[38;"));
        assert!(text.contains("[48;"));
    }

    #[test]
    fn test_bold_only_around_glyphs() {
        let mut fb = pixel_row(&[EDGE, EDGE, EDGE]);
        fb.set(1, 0, Cell::glyph('7', Rgb::WHITE, Rgb::BLACK));
        let text = encode(|out| encode_full_into(&fb, out));
        let bold = encode(|out| {
            out.queue(SetAttribute(Attribute::Bold))?;
            Ok(())
        });
        let normal = encode(|out| {
            out.queue(SetAttribute(Attribute::NormalIntensity))?;
            Ok(())
        });
        assert_eq!(text.matches(bold.as_str()).count(), 1);
        assert_eq!(text.matches(normal.as_str()).count(), 1);
        assert!(text.find(bold.as_str()) < text.find('7'));
    }

    #[test]
    fn test_diff_encode_only_prints_changes() {
        let prev = pixel_row(&[EDGE, EDGE, EDGE, EDGE]);
        let next = pixel_row(&[EDGE, SKY, EDGE, EDGE]);
        let text = encode(|out| encode_diff_into(&prev, &next, out));
        assert_eq!(text.matches(HALF_BLOCK).count(), 0);
        assert_eq!(text.matches(' ').count(), 1);

        assert!(encode(|out| encode_diff_into(&next, &next, out)).is_empty());
    }

    #[test]
    fn test_diff_of_resized_frame_is_full() {
        let prev = pixel_row(&[EDGE]);
        let next = pixel_row(&[EDGE, EDGE]);
        let text = encode(|out| encode_diff_into(&prev, &next, out));
        assert_eq!(text.matches(HALF_BLOCK).count(), 2);
    }

    #[test]
    fn test_close_spans_merge_and_far_spans_split() {
        let mut prev = vec![Cell::default(); 12];
        let mut next = prev.clone();
        for x in [1, 4, 10] {
            next[x] = Cell::pixels(Rgb::WHITE, Rgb::BLACK);
        }
        let mut spans = Vec::new();
        for_each_changed_span(&prev, &next, |s, e| {
            spans.push((s, e));
            Ok(())
        })
        .unwrap();
        // Gap of two between 1 and 4 merges; gap of five before 10 does not.
        assert_eq!(spans, vec![(1, 5), (10, 11)]);

        prev.copy_from_slice(&next);
        spans.clear();
        for_each_changed_span(&prev, &next, |s, e| {
            spans.push((s, e));
            Ok(())
        })
        .unwrap();
        assert!(spans.is_empty());
    }
}
