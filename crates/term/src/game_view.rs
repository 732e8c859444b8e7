//! GameView: draws a core [`Snapshot`] into a framebuffer.
//!
//! This module is pure (no I/O) so it can be unit-tested.

use crate::core::{Shape, Snapshot};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{Cell, PieceKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Columns reserved to the right of the board for score and preview
const PANEL_W: u16 = 12;
/// Gap between the board frame and the panel
const PANEL_GAP: u16 = 2;

const BLOCK: char = '█';
const EMPTY_DOT: char = '·';

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);

/// Display color of a cell value; `None` for empty or unknown values.
pub fn cell_color(cell: Cell) -> Option<Rgb> {
    let hex = match PieceKind::from_cell(cell)? {
        PieceKind::T => 0x00f0f0,
        PieceKind::O => 0x0000f0,
        PieceKind::L => 0xf0a000,
        PieceKind::J => 0xf0f000,
        PieceKind::I => 0x00f000,
        PieceKind::S => 0xa000f0,
        PieceKind::Z => 0xf00000,
    };
    Some(Rgb::hex(hex))
}

/// Draws the board, the falling piece, the side panel and the pause overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    fn frame_size(&self, snap: &Snapshot) -> (u16, u16) {
        (
            (snap.cols as u16) * self.cell_w + 2,
            (snap.rows as u16) * self.cell_h + 2,
        )
    }

    /// Top-left corner of the board frame. The board with its panel is centred
    /// in the viewport.
    pub fn frame_origin(&self, snap: &Snapshot, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size(snap);
        let total_w = frame_w + PANEL_GAP + PANEL_W;
        (
            viewport.width.saturating_sub(total_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Terminal position of the top-left corner of board cell (x, y)
    pub fn cell_origin(&self, snap: &Snapshot, viewport: Viewport, x: u16, y: u16) -> (u16, u16) {
        let (start_x, start_y) = self.frame_origin(snap, viewport);
        (
            start_x + 1 + x * self.cell_w,
            start_y + 1 + y * self.cell_h,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &Snapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (frame_w, frame_h) = self.frame_size(snap);
        let (start_x, start_y) = self.frame_origin(snap, viewport);

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        // Locked cells with the falling piece on top.
        let empty = Style::fg(Rgb::new(90, 90, 100)).on(BOARD_BG).dim();
        for y in 0..snap.rows as u16 {
            for x in 0..snap.cols as u16 {
                let (px, py) = self.cell_origin(snap, viewport, x, y);
                let glyph = match cell_color(snap.visible_cell(x as usize, y as usize)) {
                    Some(color) => Glyph::new(BLOCK, Style::fg(color).on(BOARD_BG)),
                    None => Glyph::new(EMPTY_DOT, empty),
                };
                fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph.ch, glyph.style);
            }
        }

        self.draw_side_panel(fb, snap, start_x + frame_w + PANEL_GAP, start_y);

        if snap.paused {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &Snapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = Style::fg(Rgb::new(200, 200, 200));

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &Snapshot, x: u16, start_y: u16) {
        let label = Style::default().bold();
        let value = Style::fg(Rgb::new(200, 200, 200));

        let mut y = start_y;
        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y + 1, snap.score, value);
        y += 3;

        fb.put_str(x, y, "LINES", label);
        fb.put_u32(x, y + 1, snap.lines_cleared, value);
        y += 3;

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        if let Some(next) = &snap.next {
            self.draw_preview(fb, &next.shape, x, y);
            y += next.shape.height() as u16 * self.cell_h;
        }
        y += 1;

        let hint = Style::fg(Rgb::new(140, 140, 140)).dim();
        fb.put_str(x, y, "p pause", hint);
        fb.put_str(x, y + 1, "q quit", hint);
    }

    fn draw_preview(&self, fb: &mut FrameBuffer, shape: &Shape, x: u16, y: u16) {
        for (dx, dy, v) in shape.occupied() {
            if let Some(color) = cell_color(v) {
                fb.fill_rect(
                    x + dx as u16 * self.cell_w,
                    y + dy as u16 * self.cell_h,
                    self.cell_w,
                    self.cell_h,
                    BLOCK,
                    Style::fg(color),
                );
            }
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style::fg(Rgb::new(255, 255, 255)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}
