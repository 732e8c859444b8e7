//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the five session [`Command`](types::Command)s
//! and recognizes the quit keys. Keys repeat through the terminal's own
//! autorepeat; there is no DAS/ARR layer.

pub mod map;

pub use blockfall_types as types;

pub use map::{map_key, should_quit};
