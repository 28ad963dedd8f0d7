//! Terminal setup and cleanup for the live view

use crate::view::VIEWPORT_HEIGHT;
use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal, TerminalOptions, Viewport};
use std::io::{self, Stdout};

/// Terminal backend used by the live view
pub type TuiTerminal = Terminal<CrosstermBackend<Stdout>>;

/// RAII guard for raw mode and the inline viewport.
///
/// The view is drawn in a viewport below the cursor rather than on the
/// alternate screen, so lines printed above it stay in the scrollback.
/// On drop raw mode is disabled; the terminal shows the cursor again when
/// it is dropped right after. Errors are ignored so cleanup also runs
/// while unwinding.
pub struct TerminalGuard {
    pub terminal: TuiTerminal,
}

impl TerminalGuard {
    pub fn new() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;

        let backend = CrosstermBackend::new(io::stdout());
        let options = TerminalOptions {
            viewport: Viewport::Inline(VIEWPORT_HEIGHT),
        };
        match Terminal::with_options(backend, options) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = disable_raw_mode();
                Err(e).context("failed to create terminal")
            }
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
