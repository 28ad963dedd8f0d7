//! Modstrap Core - Shared library for bootstrapping a module and its dependencies
//!
//! The library prompts for a project name, writes the module manifest into the
//! working directory and fetches a fixed list of packages one at a time with
//! the toolchain, showing a spinner, a progress bar and an `index/total`
//! counter while it works.
//!
//! # Architecture
//!
//! - **Layer 1: Core Operations** - Manifest writing, toolchain detection, package fetching
//! - **Layer 2: Session** - `Session` state machine that turns messages into state changes and effects
//! - **Layer 3: Terminal Interface** - Event loop on a ratatui inline viewport and cliclack prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the terminal front end
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use modstrap_core::{Msg, Key, Session, PackageList};
//!
//! let packages = PackageList::new(["github.com/charmbracelet/lipgloss"])?;
//! let mut session = Session::new(packages, "github.com/username/project_name");
//! let effects = session.update(Msg::Key(Key::Enter));
//! ```

pub mod config;
pub mod error;
pub mod manifest;
pub mod runtime;
pub mod session;
pub mod toolchain;
pub mod view;
pub mod widgets;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{Overrides, PackageList, Settings};
pub use error::{FetchError, ScaffoldError};
pub use manifest::ManifestWriter;
pub use runtime::{FetchOutcome, PackageFetcher};
pub use session::{Effect, Key, Msg, Notice, Session};
pub use toolchain::ToolchainConfig;

#[cfg(feature = "tui")]
pub use tui::run;
