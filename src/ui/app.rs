//! Main TUI application state and logic

use super::panes::{self, ListingScrollState};
use crate::walkthrough::Walkthrough;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Listing,
    Memory,
    Terminal,
}

impl FocusedPane {
    /// Move focus to the next pane (listing -> terminal -> memory)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Listing => FocusedPane::Terminal,
            FocusedPane::Terminal => FocusedPane::Memory,
            FocusedPane::Memory => FocusedPane::Listing,
        }
    }
}

/// The main application state
pub struct App {
    pub walkthrough: Walkthrough,
    pub focused_pane: FocusedPane,

    pub listing_scroll: ListingScrollState,
    pub memory_scroll: usize,
    pub terminal_scroll: usize,

    pub should_quit: bool,
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,
}

impl App {
    pub fn new(walkthrough: Walkthrough) -> Self {
        App {
            walkthrough,
            focused_pane: FocusedPane::Listing,
            listing_scroll: ListingScrollState::default(),
            memory_scroll: 0,
            terminal_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= Duration::from_secs(1) {
                if self.walkthrough.step_forward().is_ok() {
                    self.status_message = "Playing...".to_string();
                    self.terminal_scroll = usize::MAX;
                } else {
                    self.is_playing = false;
                    self.status_message = "Playback complete".to_string();
                }
                self.last_play_time = Instant::now();
            }

            // Poll with a timeout so autoplay keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[0]);

        // Left column: listing (top) | terminal (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(columns[0]);

        let snapshot = self.walkthrough.current();

        panes::render_listing_pane(
            frame,
            left_rows[0],
            self.walkthrough.listing(),
            snapshot.map_or(0, |s| s.line),
            self.focused_pane == FocusedPane::Listing,
            &mut self.listing_scroll,
        );

        panes::render_terminal_pane(
            frame,
            left_rows[1],
            snapshot.map(|s| &s.terminal),
            self.focused_pane == FocusedPane::Terminal,
            &mut self.terminal_scroll,
        );

        panes::render_memory_pane(
            frame,
            columns[1],
            snapshot,
            self.focused_pane == FocusedPane::Memory,
            &mut self.memory_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.walkthrough.history_position(),
            self.walkthrough.total_snapshots(),
            self.is_playing,
        );
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.step_backward();
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.step_forward();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Listing => {
                    // Scrolling up makes the current line move down visually
                    if let Some(row) = self.listing_scroll.target_line_row {
                        self.listing_scroll.target_line_row = Some(row.saturating_add(1));
                    }
                }
                FocusedPane::Memory => {
                    self.memory_scroll = self.memory_scroll.saturating_sub(1);
                }
                FocusedPane::Terminal => {
                    self.terminal_scroll = self.terminal_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Listing => {
                    if let Some(row) = self.listing_scroll.target_line_row {
                        self.listing_scroll.target_line_row = Some(row.saturating_sub(1));
                    }
                }
                FocusedPane::Memory => {
                    self.memory_scroll = self.memory_scroll.saturating_add(1);
                }
                FocusedPane::Terminal => {
                    self.terminal_scroll = self.terminal_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                self.is_playing = !self.is_playing;
                if self.is_playing {
                    // Take the first step on the next tick
                    self.last_play_time = Instant::now()
                        .checked_sub(Duration::from_secs(1))
                        .unwrap_or_else(Instant::now);
                    self.status_message = "Playing...".to_string();
                } else {
                    self.status_message = "Paused".to_string();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                let _ = self.walkthrough.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.terminal_scroll = usize::MAX;
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                let _ = self.walkthrough.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
                self.terminal_scroll = usize::MAX;
            }
            _ => {}
        }
    }

    fn step_forward(&mut self) {
        match self.walkthrough.step_forward() {
            Ok(()) => {
                self.status_message = "Stepped forward".to_string();
                self.terminal_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Cannot step forward: {}", e);
            }
        }
    }

    fn step_backward(&mut self) {
        match self.walkthrough.step_backward() {
            Ok(()) => {
                self.status_message = "Stepped backward".to_string();
                self.terminal_scroll = usize::MAX;
            }
            Err(e) => {
                self.status_message = format!("Cannot step backward: {}", e);
            }
        }
    }
}
