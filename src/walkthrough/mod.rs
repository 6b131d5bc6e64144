//! Recorded walkthrough of both operation styles
//!
//! A [`Walkthrough`] runs one or more [`Scenario`]s. Each scenario owns a
//! [`StackFrame`] whose cells the operations are pointed at, and records a
//! [`Snapshot`] after every statement it executes: the listing line, every
//! variable in the frame, and the terminal so far.
//!
//! After recording, the history can be navigated with
//! [`step_forward`](Walkthrough::step_forward) /
//! [`step_backward`](Walkthrough::step_backward), which is what the TUI drives.

pub mod scenarios;

pub use scenarios::Scenario;

use crate::memory::stack::StackFrame;
use crate::ops::OpError;
use crate::snapshot::{HistoryError, MockTerminal, Snapshot, SnapshotManager};
use std::fmt;

/// Errors that stop a walkthrough
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalkthroughError {
    /// An operation failed where the scenario expected it to succeed
    Op(OpError),

    /// Recording or navigating the history failed
    History(HistoryError),

    /// A frame declaration was rejected
    Memory(String),
}

impl fmt::Display for WalkthroughError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkthroughError::Op(e) => write!(f, "Operation failed: {}", e),
            WalkthroughError::History(e) => write!(f, "{}", e),
            WalkthroughError::Memory(message) => write!(f, "Frame error: {}", message),
        }
    }
}

impl std::error::Error for WalkthroughError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WalkthroughError::Op(e) => Some(e),
            WalkthroughError::History(e) => Some(e),
            WalkthroughError::Memory(_) => None,
        }
    }
}

impl From<OpError> for WalkthroughError {
    fn from(e: OpError) -> Self {
        WalkthroughError::Op(e)
    }
}

impl From<HistoryError> for WalkthroughError {
    fn from(e: HistoryError) -> Self {
        WalkthroughError::History(e)
    }
}

/// Recorder and replayer for scenarios
#[derive(Debug)]
pub struct Walkthrough {
    listing: Vec<String>,
    terminal: MockTerminal,
    snapshot_manager: SnapshotManager,
    history_position: usize,
}

impl Walkthrough {
    /// Create an empty walkthrough whose history may use up to `snapshot_limit` bytes
    pub fn new(snapshot_limit: usize) -> Self {
        Walkthrough {
            listing: Vec::new(),
            terminal: MockTerminal::new(),
            snapshot_manager: SnapshotManager::new(snapshot_limit),
            history_position: 0,
        }
    }

    /// Record every scenario in order
    pub fn run(&mut self, scenarios: &[Scenario]) -> Result<(), WalkthroughError> {
        for scenario in scenarios {
            scenario.record(self)?;
        }
        Ok(())
    }

    // ========== Recording ==========

    /// Append `statement` to the listing and snapshot `frame` after it
    pub(crate) fn record(
        &mut self,
        statement: &str,
        frame: &StackFrame,
    ) -> Result<(), WalkthroughError> {
        let terminal = self.terminal.clone();
        self.commit(statement, frame, terminal)
    }

    /// Like [`record`](Self::record), echoing `text` as one terminal line
    pub(crate) fn record_echo(
        &mut self,
        statement: &str,
        frame: &StackFrame,
        text: impl Into<String>,
    ) -> Result<(), WalkthroughError> {
        let mut text = text.into();
        text.push('\n');
        let mut terminal = self.terminal.clone();
        terminal.print(text, self.listing.len());
        self.commit(statement, frame, terminal)
    }

    /// Snapshot the state after `statement`. Listing and terminal only advance
    /// once the snapshot is stored.
    fn commit(
        &mut self,
        statement: &str,
        frame: &StackFrame,
        terminal: MockTerminal,
    ) -> Result<(), WalkthroughError> {
        let snapshot = Snapshot {
            function_name: frame.function_name.clone(),
            vars: frame.view(),
            terminal: terminal.clone(),
            line: self.listing.len(),
        };
        self.snapshot_manager.push(snapshot)?;
        self.listing.push(statement.to_string());
        self.terminal = terminal;
        self.history_position = self.snapshot_manager.len() - 1;
        Ok(())
    }

    // ========== Navigation ==========

    /// Move to the next snapshot
    pub fn step_forward(&mut self) -> Result<(), HistoryError> {
        if self.history_position + 1 >= self.snapshot_manager.len() {
            return Err(HistoryError::AtEnd);
        }
        self.history_position += 1;
        Ok(())
    }

    /// Move to the previous snapshot
    pub fn step_backward(&mut self) -> Result<(), HistoryError> {
        if self.history_position == 0 {
            return Err(HistoryError::AtStart);
        }
        self.history_position -= 1;
        Ok(())
    }

    /// Rewind to the beginning of the history
    pub fn rewind_to_start(&mut self) -> Result<(), HistoryError> {
        if self.snapshot_manager.is_empty() {
            return Err(HistoryError::AtStart);
        }
        self.history_position = 0;
        Ok(())
    }

    /// Jump to the last recorded snapshot
    pub fn jump_to_end(&mut self) -> Result<(), HistoryError> {
        if self.snapshot_manager.is_empty() {
            return Err(HistoryError::AtEnd);
        }
        self.history_position = self.snapshot_manager.len() - 1;
        Ok(())
    }

    // ========== Getter methods for UI ==========

    /// Snapshot at the current history position
    pub fn current(&self) -> Option<&Snapshot> {
        self.snapshot_manager.get(self.history_position)
    }

    pub fn history_position(&self) -> usize {
        self.history_position
    }

    pub fn total_snapshots(&self) -> usize {
        self.snapshot_manager.len()
    }

    /// Every recorded statement, one per line
    pub fn listing(&self) -> &[String] {
        &self.listing
    }

    /// Everything echoed by recorded statements
    pub fn output(&self) -> Vec<String> {
        self.terminal.get_output()
    }

    pub fn memory_usage(&self) -> usize {
        self.snapshot_manager.memory_usage()
    }
}
