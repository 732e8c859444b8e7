//! Terminal rendering for the game.
//!
//! Rendering is split in two: [`GameView`] draws a core [`Snapshot`](core::Snapshot)
//! into a character [`FrameBuffer`] without touching the terminal, and
//! [`TerminalRenderer`] flushes framebuffers to stdout, rewriting only the rows
//! that changed since the previous frame.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{cell_color, GameView, Viewport};
pub use renderer::{encode_rows_into, TerminalRenderer};
