//! TUI pane rendering modules
//!
//! - [`listing`]: recorded statements with the current one highlighted
//! - [`memory`]: the current frame's variables with addresses and values
//! - [`terminal`]: echoed output up to the current step
//! - [`status`]: step counter and keybindings
//!
//! Each module exports one `render_*` function that draws into a `Rect`.

pub mod listing;
pub mod memory;
pub mod status;
pub mod terminal;

pub use listing::{render_listing_pane, ListingScrollState};
pub use memory::render_memory_pane;
pub use status::render_status_bar;
pub use terminal::render_terminal_pane;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by every pane
pub(crate) fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `offset` so a list of `total` rows fills `visible` rows
pub(crate) fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}
