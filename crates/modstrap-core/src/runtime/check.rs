//! Toolchain detection

use std::process::Command;

/// Toolchain detection result
#[derive(Debug, Clone)]
pub struct ToolchainInfo {
    pub binary: String,
    pub version: Option<String>,
    pub available: bool,
}

/// Check if the toolchain binary runs and report the version it prints
pub fn check_toolchain(binary: &str, version_args: &[&str]) -> ToolchainInfo {
    let output = Command::new(binary).args(version_args).output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            ToolchainInfo {
                binary: binary.to_string(),
                version: (!version.is_empty()).then_some(version),
                available: true,
            }
        }
        _ => ToolchainInfo {
            binary: binary.to_string(),
            version: None,
            available: false,
        },
    }
}
