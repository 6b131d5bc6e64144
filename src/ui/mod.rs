//! Terminal step viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: application state, keyboard event loop, pane focus, autoplay
//! - **[`panes`]**: stateless render functions for each visible pane (listing,
//!   memory, terminal, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! Construct an [`App`] with a recorded [`Walkthrough`] and call [`App::run`].
//!
//! [`Walkthrough`]: crate::walkthrough::Walkthrough
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
