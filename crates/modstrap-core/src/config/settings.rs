//! Settings resolution from command-line overrides, environment and defaults

use super::packages::PackageList;
use crate::error::ScaffoldError;
use crate::toolchain::ToolchainConfig;
use std::path::PathBuf;
use std::time::Duration;

/// Upper bound of the random pause after each install attempt
pub const DEFAULT_MAX_DELAY: Duration = Duration::from_millis(500);

/// Values supplied on the command line. `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub dir: Option<PathBuf>,
    pub toolchain: Option<String>,
    pub language_version: Option<String>,
    pub packages_file: Option<PathBuf>,
    pub max_delay_ms: Option<u64>,
    pub name: Option<String>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub working_dir: PathBuf,
    pub binary: String,
    pub language_version: String,
    pub packages: PackageList,
    pub max_delay: Duration,
    /// Project name that skips the interactive prompt
    pub preset_name: Option<String>,
}

impl Settings {
    /// Resolve settings using the process environment
    pub fn resolve<C: ToolchainConfig>(
        config: &C,
        overrides: Overrides,
    ) -> Result<Self, ScaffoldError> {
        Self::resolve_with_env(config, overrides, |key| std::env::var(key).ok())
    }

    /// Resolve settings with an explicit environment lookup.
    /// Precedence is flag, then environment, then toolchain default.
    pub fn resolve_with_env<C, F>(
        config: &C,
        overrides: Overrides,
        env: F,
    ) -> Result<Self, ScaffoldError>
    where
        C: ToolchainConfig,
        F: Fn(&str) -> Option<String>,
    {
        let working_dir = match overrides.dir {
            Some(dir) => dir,
            None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        };

        let binary = overrides
            .toolchain
            .or_else(|| env(config.binary_env()).filter(|v| !v.trim().is_empty()))
            .unwrap_or_else(|| config.binary().to_string());

        let language_version = overrides
            .language_version
            .unwrap_or_else(|| config.language_version().to_string());

        let packages = match &overrides.packages_file {
            Some(path) => PackageList::from_file(path)?,
            None => PackageList::new(config.default_packages())?,
        };

        let max_delay = overrides
            .max_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_MAX_DELAY);

        Ok(Self {
            working_dir,
            binary,
            language_version,
            packages,
            max_delay,
            preset_name: overrides.name,
        })
    }
}
