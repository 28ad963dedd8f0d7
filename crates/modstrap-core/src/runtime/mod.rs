//! Toolchain detection and package fetching
//!
//! This module provides:
//! - Toolchain availability and version detection
//! - Version comparison against the manifest's language version
//! - The external fetch command runner used by the install driver

pub mod check;
pub mod fetch;
pub mod version;

pub use check::{check_toolchain, ToolchainInfo};
pub use fetch::{FetchOutcome, PackageFetcher};
pub use version::{check_compatibility, parse_toolchain_version};
