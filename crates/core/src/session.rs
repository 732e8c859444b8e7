//! Session module - the game loop state machine
//!
//! A [`Session`] owns the board, the active and next pieces, the score and the
//! paused flag. The frame driver feeds it elapsed time through [`Session::tick`]
//! (or timestamps through [`Session::frame`]); the input layer feeds it
//! [`Command`]s through [`Session::apply`]. Renderers read [`Session::snapshot`].
//!
//! Locking a piece always runs the same sequence: merge into the board, promote
//! the next piece to active at the spawn position, queue a new next piece, clear
//! board and score if the new piece is blocked, then sweep completed rows.

use log::{debug, info, trace, warn};

use crate::board::Board;
use crate::collision::{collides, try_rotate};
use crate::config::SessionConfig;
use crate::piece::{ActivePiece, NextPiece};
use crate::rng::SimpleRng;
use crate::snapshot::{ActiveSnapshot, NextSnapshot, Snapshot};
use crate::types::{Command, Shift, Spin};

/// Seed used when the configuration does not pick one
pub const DEFAULT_SEED: u32 = 1;

/// Outcome of the most recent lock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub rows_cleared: u32,
    pub score_delta: u32,
    /// The freshly spawned piece was blocked and the board was emptied
    pub board_reset: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    board: Board,
    active: ActivePiece,
    next: Option<NextPiece>,
    rng: SimpleRng,
    score: u32,
    lines_cleared: u32,
    pieces_locked: u32,
    paused: bool,
    drop_acc_ms: u32,
    last_frame_ms: Option<u64>,
    last_event: Option<LockEvent>,
}

impl Session {
    /// Start a new session: empty board, a queued next piece, and the first
    /// active piece at the spawn position.
    ///
    /// The configuration is used as given; see [`SessionConfig::validate`]. The
    /// first spawn goes through the same blocked-spawn check as every later one.
    pub fn new(config: SessionConfig) -> Self {
        let mut rng = SimpleRng::new(config.seed.unwrap_or(DEFAULT_SEED));
        let mut next = Some(NextPiece::random(&mut rng));
        let active = promote_next(&mut next, &mut rng, config.cols);
        let mut board = Board::new(config.cols, config.rows);
        if board.reset_if_blocked(&active) {
            warn!(
                "first piece {} does not fit a {}x{} board",
                active.kind.as_str(),
                config.cols,
                config.rows
            );
        }

        debug!(
            "session started: {}x{} board, first piece {}",
            config.cols,
            config.rows,
            active.kind.as_str()
        );

        Self {
            config,
            board,
            active,
            next,
            rng,
            score: 0,
            lines_cleared: 0,
            pieces_locked: 0,
            paused: false,
            drop_acc_ms: 0,
            last_frame_ms: None,
            last_event: None,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn next(&self) -> Option<&NextPiece> {
        self.next.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Time accumulated toward the next gravity drop
    pub fn drop_accumulator_ms(&self) -> u32 {
        self.drop_acc_ms
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn replace_active(&mut self, kind: crate::types::PieceKind) {
        self.active = ActivePiece::spawn(kind, crate::pieces::shape_for(kind), self.config.cols);
    }

    #[cfg(test)]
    pub(crate) fn replace_next(&mut self, next: Option<NextPiece>) {
        self.next = next;
    }

    /// Advance the gravity timer by `elapsed_ms`.
    ///
    /// Once the accumulator exceeds the drop interval the piece falls one row
    /// (locking if it cannot) and the accumulator restarts from zero. Returns
    /// true when a drop happened. Does nothing while paused.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.paused {
            return false;
        }

        self.drop_acc_ms = self.drop_acc_ms.saturating_add(elapsed_ms);
        if self.drop_acc_ms > self.config.drop_interval_ms {
            self.drop_one();
            return true;
        }

        false
    }

    /// Frame driver entry point with a monotonic timestamp in milliseconds.
    ///
    /// The first frame only records the timestamp. While paused the timestamp
    /// is still recorded, so the paused interval never reaches the gravity timer.
    pub fn frame(&mut self, now_ms: u64) -> bool {
        let elapsed = self
            .last_frame_ms
            .replace(now_ms)
            .map(|last| now_ms.saturating_sub(last))
            .unwrap_or(0);

        if self.paused {
            return false;
        }
        self.tick(u32::try_from(elapsed).unwrap_or(u32::MAX))
    }

    /// Apply a player command.
    ///
    /// Returns true when the command changed the session (moved, rotated,
    /// dropped, locked or toggled pause). While paused only `TogglePause` is
    /// accepted.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.paused && command != Command::TogglePause {
            trace!("ignoring {} while paused", command.as_str());
            return false;
        }

        match command {
            Command::Move(shift) => self.try_shift(shift),
            Command::SoftDrop => {
                self.drop_one();
                true
            }
            Command::HardDrop => {
                self.hard_drop();
                true
            }
            Command::Rotate(spin) => self.try_rotate(spin),
            Command::TogglePause => {
                self.paused = !self.paused;
                debug!("paused = {}", self.paused);
                true
            }
        }
    }

    /// Shift the active piece one column; stays put if the target collides.
    fn try_shift(&mut self, shift: Shift) -> bool {
        let moved = self.active.shifted(shift.dx(), 0);
        if collides(&self.board, &moved) {
            return false;
        }
        self.active = moved;
        true
    }

    /// Rotate with wall kicks; on failure shape, facing and position are unchanged.
    fn try_rotate(&mut self, spin: Spin) -> bool {
        match try_rotate(&self.board, &self.active, spin) {
            Some(rotated) => {
                self.active = rotated;
                true
            }
            None => false,
        }
    }

    /// Move down one row, or lock in place if that collides.
    /// Resets the gravity accumulator either way. Returns true if it locked.
    fn drop_one(&mut self) -> bool {
        self.drop_acc_ms = 0;
        let lower = self.active.shifted(0, 1);
        if collides(&self.board, &lower) {
            self.lock();
            return true;
        }
        self.active = lower;
        false
    }

    /// Descend while the piece fits, step back once, then lock.
    fn hard_drop(&mut self) {
        let mut probe = self.active.clone();
        while !collides(&self.board, &probe) {
            probe.y += 1;
        }
        probe.y -= 1;

        self.active = probe;
        self.lock();
        self.drop_acc_ms = 0;
    }

    /// Merge, respawn, reset if blocked, sweep.
    fn lock(&mut self) {
        self.board.merge(&self.active);
        self.pieces_locked += 1;

        self.active = promote_next(&mut self.next, &mut self.rng, self.config.cols);

        let board_reset = self.board.reset_if_blocked(&self.active);
        if board_reset {
            info!(
                "spawn blocked after {} pieces with score {}; board reset",
                self.pieces_locked, self.score
            );
            self.score = 0;
            self.lines_cleared = 0;
            self.pieces_locked = 0;
        }

        let sweep = self.board.sweep_completed_rows(self.config.line_clear_base);
        self.score = self.score.saturating_add(sweep.score);
        self.lines_cleared += sweep.rows_cleared;

        if sweep.rows_cleared > 0 {
            debug!(
                "cleared {} rows for {} points (score {})",
                sweep.rows_cleared, sweep.score, self.score
            );
        }

        self.last_event = Some(LockEvent {
            rows_cleared: sweep.rows_cleared,
            score_delta: sweep.score,
            board_reset,
        });
    }

    /// Write the renderer-facing state into `out`, reusing its allocations.
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.cols = self.board.cols();
        out.rows = self.board.rows();
        out.board.clear();
        out.board.extend_from_slice(self.board.cells());
        out.active = Some(ActiveSnapshot::from(&self.active));
        out.next = self.next.as_ref().map(NextSnapshot::from);
        out.score = self.score;
        out.paused = self.paused;
        out.drop_ms = self.drop_acc_ms;
        out.lines_cleared = self.lines_cleared;
        out.pieces_locked = self.pieces_locked;
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut s = Snapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

/// Turn the queued piece (or a fresh random one) into the active piece at the
/// spawn position, and queue a new next piece.
fn promote_next(next: &mut Option<NextPiece>, rng: &mut SimpleRng, cols: u8) -> ActivePiece {
    let queued = next.take().unwrap_or_else(|| NextPiece::random(rng));
    *next = Some(NextPiece::random(rng));
    ActivePiece::spawn(queued.kind, queued.shape, cols)
}
