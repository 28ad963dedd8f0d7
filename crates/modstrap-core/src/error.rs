//! Error types for manifest, configuration and fetch failures

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while preparing a project (configuration and manifest)
#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Failed to write {}: {source}", .path.display())]
    ManifestWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read packages file {}: {source}", .path.display())]
    PackagesRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse packages file {}: {source}", .path.display())]
    PackagesParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Package list is empty")]
    EmptyPackageList,
}

/// Errors from a single fetch attempt. Never fatal to the install sequence.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to run {binary}: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: io::Error,
    },

    #[error("exit status {}", describe_exit(.code, .stderr))]
    Exit { code: Option<i32>, stderr: String },
}

fn describe_exit(code: &Option<i32>, stderr: &str) -> String {
    let code = code.map_or_else(|| "unknown".to_string(), |c| c.to_string());
    if stderr.is_empty() {
        code
    } else {
        format!("{} ({})", code, stderr)
    }
}
