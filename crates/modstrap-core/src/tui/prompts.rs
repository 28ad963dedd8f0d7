//! Charm-style pre-flight output using cliclack

use crate::config::{PackageList, Settings};
use crate::runtime::{check_compatibility, check_toolchain};
use crate::toolchain::ToolchainConfig;
use anyhow::Result;
use colored::Colorize;

/// Report what is about to happen and check the toolchain before the
/// interactive view takes over the terminal.
///
/// A missing toolchain is only a warning: each fetch will then fail and be
/// reported, and the run still completes.
pub fn preflight<C: ToolchainConfig>(
    config: &C,
    settings: &Settings,
    skip_check: bool,
) -> Result<()> {
    cliclack::intro(config.display_name())?;
    cliclack::log::info(format!(
        "Fetching {} packages into {}",
        settings.packages.len(),
        settings.working_dir.display()
    ))?;

    if skip_check {
        cliclack::log::info("Skipping toolchain check")?;
    } else {
        check(config, settings)?;
    }

    cliclack::outro("Ready")?;
    Ok(())
}

fn check<C: ToolchainConfig>(config: &C, settings: &Settings) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start(format!("Checking {}...", settings.binary));

    let info = check_toolchain(&settings.binary, config.version_args());
    if !info.available {
        spinner.stop(format!("{} not found", settings.binary));
        cliclack::log::warning(format!(
            "{} is not installed or not on PATH (set {} to override)",
            settings.binary,
            config.binary_env()
        ))?;
        return Ok(());
    }

    let version = info.version.as_deref().unwrap_or("unknown");
    spinner.stop(format!("Found {} ({})", settings.binary, version));

    if let Some(warning) =
        check_compatibility(version, &settings.language_version, &settings.binary)
    {
        cliclack::log::warning(warning)?;
    }
    Ok(())
}

/// Print the packages that would be fetched, one per line
pub fn print_packages<C: ToolchainConfig>(config: &C, packages: &PackageList) -> Result<()> {
    cliclack::intro(config.display_name())?;

    println!();
    for (i, package) in packages.iter().enumerate() {
        println!("  {}.  {}", (i + 1).to_string().dimmed(), package.cyan());
    }
    println!();

    cliclack::outro(format!(
        "{} packages fetched with `{} {}`",
        packages.len().to_string().bold(),
        config.binary(),
        config.fetch_subcommand()
    ))?;
    Ok(())
}
