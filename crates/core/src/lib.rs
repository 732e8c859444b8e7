//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and all session state. It has no
//! dependencies on terminals or other I/O, so the same seed always replays the
//! same game.
//!
//! # Module Structure
//!
//! - [`shape`]: small rectangular piece matrices and their rotation
//! - [`pieces`]: the seven tetromino templates and SRS wall-kick tables
//! - [`piece`]: the falling piece and the queued next piece
//! - [`board`]: the grid, merging, row sweeping and the blocked-spawn reset
//! - [`collision`]: collision test and kick-resolved rotation
//! - [`rng`]: seedable uniform piece randomizer
//! - [`session`]: the game loop state machine
//! - [`snapshot`]: the renderer-facing view of a session
//! - [`config`]: board size and timing, overridable from the environment
//!
//! # Game Rules
//!
//! - **Gravity**: the piece falls one row once more than the drop interval
//!   (1000ms by default) has accumulated
//! - **Locking**: a piece that cannot move down locks immediately; there is no
//!   lock delay
//! - **Rotation**: quarter-turns with SRS wall kicks; the O piece never kicks
//! - **Scoring**: 10 points for the first row cleared by a lock, doubled for
//!   each further row (10, 30, 70, 150)
//! - **Blocked spawn**: the board and score are reset and play continues
//!
//! # Example
//!
//! ```
//! use blockfall_core::{Session, SessionConfig};
//! use blockfall_types::Command;
//!
//! let mut session = Session::new(SessionConfig::default().with_seed(12345));
//!
//! session.apply(Command::MOVE_RIGHT);
//! session.apply(Command::ROTATE_CW);
//! session.apply(Command::HardDrop);
//!
//! assert_eq!(session.pieces_locked(), 1);
//! assert!(session.take_last_event().is_some());
//! ```
//!
//! Drive gravity with [`Session::tick`](session::Session::tick) (elapsed
//! milliseconds) or [`Session::frame`](session::Session::frame) (a monotonic
//! timestamp).

pub mod board;
pub mod collision;
pub mod config;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Sweep};
pub use collision::{collides, rotate, try_rotate};
pub use config::{ConfigError, SessionConfig};
pub use piece::{ActivePiece, NextPiece};
pub use pieces::{shape_for, wall_kick_offsets};
pub use rng::SimpleRng;
pub use session::{LockEvent, Session};
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, NextSnapshot, Snapshot};
