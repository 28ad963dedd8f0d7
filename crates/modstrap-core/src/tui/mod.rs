//! Interactive terminal front end
//!
//! This module is optional and only available when the `tui` feature is enabled.

#[cfg(feature = "tui")]
mod app;
#[cfg(feature = "tui")]
mod prompts;
#[cfg(feature = "tui")]
mod terminal;

#[cfg(feature = "tui")]
pub use app::{run, translate_key, EventLoop};
#[cfg(feature = "tui")]
pub use prompts::{preflight, print_packages};
#[cfg(feature = "tui")]
pub use terminal::{TerminalGuard, TuiTerminal};
