//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Output is row-granular: a row is rewritten in full when any glyph in it
//! differs from the previous frame, and skipped otherwise.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enable raw mode")?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.last = None;
        Ok(())
    }

    /// Undo [`enter`](Self::enter).
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode().context("disable raw mode")?;
        Ok(())
    }

    /// Force the next draw to repaint every row (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame. After the
    /// call `fb` holds the previous frame, ready to be drawn over.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let prev = self.last.take();
        let written = encode_rows_into(prev.as_ref(), fb, &mut self.buf)?;
        if written > 0 {
            self.flush_buf()?;
        }

        let mut prev = prev.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout
            .write_all(&self.buf)
            .context("write to terminal")?;
        self.stdout.flush().context("flush terminal")?;
        Ok(())
    }
}

/// Encode the rows of `next` that differ from `prev` into `out`.
///
/// With no previous frame, or one of a different size, the screen is cleared
/// and every row is written. Returns the number of rows written.
pub fn encode_rows_into(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<usize> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut current_style: Option<Style> = None;
    let mut written = 0;
    for y in 0..next.height() {
        let row = next.row(y);
        if prev.is_some_and(|p| p.row(y) == row) {
            continue;
        }

        out.queue(cursor::MoveTo(0, y))?;
        for glyph in row {
            if current_style != Some(glyph.style) {
                apply_style_into(out, glyph.style)?;
                current_style = Some(glyph.style);
            }
            out.queue(Print(glyph.ch))?;
        }
        written += 1;
    }

    if written > 0 {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(written)
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_writes_every_row() {
        let fb = FrameBuffer::new(4, 3);
        let mut out = Vec::new();
        assert_eq!(encode_rows_into(None, &fb, &mut out).unwrap(), 3);
        assert!(!out.is_empty());
    }

    #[test]
    fn unchanged_frame_writes_nothing() {
        let fb = FrameBuffer::new(4, 3);
        let mut out = Vec::new();
        assert_eq!(encode_rows_into(Some(&fb), &fb, &mut out).unwrap(), 0);
        assert!(out.is_empty());
    }

    #[test]
    fn only_changed_rows_are_written() {
        let prev = FrameBuffer::new(4, 3);
        let mut next = prev.clone();
        next.put_str(1, 2, "ab", Style::default());

        let mut out = Vec::new();
        assert_eq!(encode_rows_into(Some(&prev), &next, &mut out).unwrap(), 1);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("ab"));
    }

    #[test]
    fn resized_frame_is_a_full_redraw() {
        let prev = FrameBuffer::new(4, 3);
        let next = FrameBuffer::new(5, 3);
        let mut out = Vec::new();
        assert_eq!(encode_rows_into(Some(&prev), &next, &mut out).unwrap(), 3);
    }
}
