// Snapshot management for stepping through a recorded walkthrough

use crate::memory::stack::VarView;
use std::fmt;

/// Mock terminal for capturing echoed output
#[derive(Debug, Clone)]
pub struct MockTerminal {
    pub lines: Vec<TerminalLine>,
}

impl MockTerminal {
    pub fn new() -> Self {
        MockTerminal { lines: Vec::new() }
    }

    /// Print without newline. Text echoed from the same listing line is joined.
    pub fn print(&mut self, text: String, line: usize) {
        if let Some(last) = self.lines.last_mut() {
            if last.line == line && !last.text.ends_with('\n') {
                last.text.push_str(&text);
                return;
            }
        }
        self.lines.push(TerminalLine { text, line });
    }

    /// Get all lines as a vector of strings
    pub fn get_output(&self) -> Vec<String> {
        self.lines
            .iter()
            .flat_map(|tl| {
                // Split by newlines to handle multiple prints from same listing line
                let mut result: Vec<String> = tl.text.split('\n').map(|s| s.to_string()).collect();
                // Remove trailing empty string if text ended with newline
                if result.last().is_some_and(|s| s.is_empty()) {
                    result.pop();
                }
                result
            })
            .collect()
    }

    /// Total bytes of captured text
    pub fn byte_len(&self) -> usize {
        self.lines.iter().map(|tl| tl.text.len()).sum()
    }
}

impl Default for MockTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// A chunk of terminal output tagged with the listing line that produced it
#[derive(Debug, Clone)]
pub struct TerminalLine {
    pub text: String,
    pub line: usize,
}

/// State after one recorded statement
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub function_name: String,
    pub vars: Vec<VarView>,
    pub terminal: MockTerminal,
    pub line: usize, // Index into the walkthrough listing
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        // Rough estimate: fixed overhead per variable plus its name
        let vars_size: usize = self.vars.iter().map(|v| 48 + v.name.len()).sum();
        let terminal_size = self.terminal.byte_len() + self.terminal.lines.len() * 32;

        std::mem::size_of::<Snapshot>() + self.function_name.len() + vars_size + terminal_size
    }
}

/// Errors from moving through or growing the history
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    /// Already at the first snapshot (or there are none)
    AtStart,

    /// Already at the last snapshot
    AtEnd,

    /// Recording one more snapshot would exceed the configured limit
    SnapshotLimitExceeded { current: usize, limit: usize },
}

impl fmt::Display for HistoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryError::AtStart => write!(f, "Already at the beginning of the walkthrough"),
            HistoryError::AtEnd => write!(f, "No more snapshots available (walkthrough finished)"),
            HistoryError::SnapshotLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
        }
    }
}

impl std::error::Error for HistoryError {}

/// Manages recorded snapshots under a memory budget
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), HistoryError> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(HistoryError::SnapshotLimitExceeded {
                current: self.current_memory + snapshot_size,
                limit: self.max_memory,
            });
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(line: usize) -> Snapshot {
        Snapshot {
            function_name: "main".to_string(),
            vars: Vec::new(),
            terminal: MockTerminal::new(),
            line,
        }
    }

    #[test]
    fn terminal_joins_prints_from_one_line() {
        let mut terminal = MockTerminal::new();
        terminal.print("5".to_string(), 3);
        terminal.print(" 6\n".to_string(), 3);
        terminal.print("11\n".to_string(), 3);
        terminal.print("720\n".to_string(), 4);
        assert_eq!(terminal.get_output(), vec!["5 6", "11", "720"]);
    }

    #[test]
    fn manager_enforces_limit() {
        let size = snapshot(0).estimated_size();
        let mut manager = SnapshotManager::new(size * 2);
        assert!(manager.push(snapshot(0)).is_ok());
        assert!(manager.push(snapshot(1)).is_ok());
        assert!(matches!(
            manager.push(snapshot(2)),
            Err(HistoryError::SnapshotLimitExceeded { .. })
        ));
        assert_eq!(manager.len(), 2);
        assert_eq!(manager.memory_usage(), size * 2);
    }
}
