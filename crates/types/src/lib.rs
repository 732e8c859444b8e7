//! Shared types and constants for the falling-block game.
//!
//! Everything here is plain data: piece kinds, facings, player commands and the
//! numeric constants the simulation is tuned with. The core, the input mapping
//! and the terminal view all speak in these types.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns by default (indexed 0-9, left to right)
//! - **Height**: 20 rows by default (indexed 0-19, row 0 is the top)
//!
//! Both are configurable per session; the defaults below are what the binary
//! uses when nothing else is configured.
//!
//! # Cell Values
//!
//! A board or shape cell is a [`Cell`] (`u8`): `0` is empty and `1..=7` is the
//! identifier of the piece that filled it.
//!
//! | Piece | Cell |
//! |-------|------|
//! | T | 1 |
//! | O | 2 |
//! | L | 3 |
//! | J | 4 |
//! | I | 5 |
//! | S | 6 |
//! | Z | 7 |
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the terminal driver (~60 FPS) |
//! | `DROP_INTERVAL_MS` | 1000 | Gravity: one row per second |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Command, Facing, PieceKind, Spin, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.cell(), 1);
//!
//! assert_eq!(Facing::North.turn(Spin::Cw), Facing::East);
//! assert_eq!(Facing::North.turn(Spin::Ccw), Facing::West);
//!
//! assert_eq!(Command::from_str("hardDrop"), Some(Command::HardDrop));
//!
//! assert_eq!(DEFAULT_COLS, 10);
//! assert_eq!(DEFAULT_ROWS, 20);
//! ```

use serde::Serialize;

/// Default board width in cells (10 columns)
pub const DEFAULT_COLS: u8 = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_ROWS: u8 = 20;

/// Frame interval used by the terminal frame driver (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval: the active piece falls one row once this much time has accumulated
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Reward for the first row cleared by a single sweep; each further row doubles it
pub const LINE_CLEAR_BASE: u32 = 10;

/// Largest side of any piece matrix
pub const MAX_SHAPE_SIDE: usize = 4;

/// Upper bound on the number of cells in a piece matrix
pub const MAX_SHAPE_CELLS: usize = MAX_SHAPE_SIDE * MAX_SHAPE_SIDE;

/// A cell on the board or inside a piece matrix.
///
/// `0` is empty, `1..=7` identifies the piece that occupies it.
pub type Cell = u8;

/// The empty cell value
pub const EMPTY: Cell = 0;

/// Highest valid cell value
pub const MAX_CELL: Cell = 7;

/// The seven tetromino piece kinds
///
/// Variant order follows the cell identifiers (T = 1 ... Z = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    T,
    O,
    L,
    J,
    I,
    S,
    Z,
}

impl PieceKind {
    /// All kinds, in cell-identifier order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::T,
        PieceKind::O,
        PieceKind::L,
        PieceKind::J,
        PieceKind::I,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Cell value written into the board for this kind (1..=7)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::T.cell(), 1);
    /// assert_eq!(PieceKind::Z.cell(), 7);
    /// ```
    pub fn cell(self) -> Cell {
        match self {
            PieceKind::T => 1,
            PieceKind::O => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::I => 5,
            PieceKind::S => 6,
            PieceKind::Z => 7,
        }
    }

    /// Inverse of [`PieceKind::cell`]; `None` for empty or invalid values
    pub fn from_cell(cell: Cell) -> Option<Self> {
        match cell {
            1..=7 => Some(Self::ALL[(cell - 1) as usize]),
            _ => None,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "t" => Some(PieceKind::T),
            "o" => Some(PieceKind::O),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "i" => Some(PieceKind::I),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Lowercase letter for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::T => "t",
            PieceKind::O => "o",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::I => "i",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Rotation direction of a single quarter-turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Spin {
    /// Clockwise
    Cw,
    /// Counter-clockwise
    Ccw,
}

impl Spin {
    /// Signed direction convention used by rotation: any positive value is
    /// clockwise, zero or negative is counter-clockwise.
    pub fn from_dir(dir: i8) -> Self {
        if dir > 0 {
            Spin::Cw
        } else {
            Spin::Ccw
        }
    }
}

/// Facing of a piece, counted in clockwise quarter-turns from its spawn matrix
///
/// The cycle goes: North (0) → East (1) → South (2) → West (3) → North
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    North,
    East,
    South,
    West,
}

impl Facing {
    /// Quarter-turn index (0..=3)
    pub fn index(self) -> u8 {
        match self {
            Facing::North => 0,
            Facing::East => 1,
            Facing::South => 2,
            Facing::West => 3,
        }
    }

    /// Facing for a quarter-turn index, taken modulo 4
    pub fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Facing::North,
            1 => Facing::East,
            2 => Facing::South,
            _ => Facing::West,
        }
    }

    /// Facing after one quarter-turn: `(dir + 1) % 4` clockwise, `(dir + 3) % 4`
    /// counter-clockwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::{Facing, Spin};
    ///
    /// assert_eq!(Facing::West.turn(Spin::Cw), Facing::North);
    /// assert_eq!(Facing::East.turn(Spin::Ccw), Facing::North);
    /// ```
    pub fn turn(self, spin: Spin) -> Self {
        let step = match spin {
            Spin::Cw => 1,
            Spin::Ccw => 3,
        };
        Self::from_index(self.index() + step)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Facing::North => "north",
            Facing::East => "east",
            Facing::South => "south",
            Facing::West => "west",
        }
    }
}

/// Horizontal shift direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shift {
    Left,
    Right,
}

impl Shift {
    /// Column delta: -1 for left, +1 for right
    pub fn dx(self) -> i16 {
        match self {
            Shift::Left => -1,
            Shift::Right => 1,
        }
    }
}

/// Discrete player commands submitted to a session
///
/// Each command is applied synchronously and atomically; invalid moves are
/// reverted silently rather than reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Shift the piece one column
    Move(Shift),
    /// Drop one row; locks the piece if it cannot descend
    SoftDrop,
    /// Drop to the lowest reachable row and lock
    HardDrop,
    /// Quarter-turn with wall kicks
    Rotate(Spin),
    /// Flip between running and paused
    TogglePause,
}

impl Command {
    pub const MOVE_LEFT: Command = Command::Move(Shift::Left);
    pub const MOVE_RIGHT: Command = Command::Move(Shift::Right);
    pub const ROTATE_CW: Command = Command::Rotate(Spin::Cw);
    pub const ROTATE_CCW: Command = Command::Rotate(Spin::Ccw);

    /// Parse a command from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::{Command, Shift, Spin};
    ///
    /// assert_eq!(Command::from_str("moveLeft"), Some(Command::Move(Shift::Left)));
    /// assert_eq!(Command::from_str("rotateCcw"), Some(Command::Rotate(Spin::Ccw)));
    /// assert_eq!(Command::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Command::MOVE_LEFT),
            "moveright" => Some(Command::MOVE_RIGHT),
            "softdrop" => Some(Command::SoftDrop),
            "harddrop" => Some(Command::HardDrop),
            "rotatecw" => Some(Command::ROTATE_CW),
            "rotateccw" => Some(Command::ROTATE_CCW),
            "pause" | "togglepause" => Some(Command::TogglePause),
            _ => None,
        }
    }

    /// camelCase name, used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Move(Shift::Left) => "moveLeft",
            Command::Move(Shift::Right) => "moveRight",
            Command::SoftDrop => "softDrop",
            Command::HardDrop => "hardDrop",
            Command::Rotate(Spin::Cw) => "rotateCw",
            Command::Rotate(Spin::Ccw) => "rotateCcw",
            Command::TogglePause => "togglePause",
        }
    }
}
