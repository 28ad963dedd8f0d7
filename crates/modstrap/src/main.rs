//! modstrap - Interactive Go module bootstrapper

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use modstrap_core::{Overrides, Settings, ToolchainConfig};
use std::path::PathBuf;
use std::process::ExitCode;

/// Go toolchain configuration
#[derive(Clone)]
pub struct GoToolchain;

impl ToolchainConfig for GoToolchain {
    fn display_name(&self) -> &'static str {
        "modstrap"
    }

    fn binary(&self) -> &'static str {
        "go"
    }

    fn binary_env(&self) -> &'static str {
        "MODSTRAP_TOOLCHAIN"
    }

    fn language_version(&self) -> &'static str {
        "1.20"
    }

    fn manifest_file(&self) -> &'static str {
        "go.mod"
    }

    fn render_manifest(&self, project: &str, language_version: &str) -> String {
        format!("module {}\n\ngo {}", project, language_version)
    }

    fn default_packages(&self) -> Vec<String> {
        [
            "github.com/charmbracelet/bubbles",
            "github.com/charmbracelet/bubbles/textinput",
            "github.com/charmbracelet/bubbles/progress",
            "github.com/charmbracelet/bubbles/list",
            "github.com/charmbracelet/bubbles/textarea",
            "github.com/charmbracelet/lipgloss",
            "github.com/charmbracelet/bubbletea",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }

    fn placeholder(&self) -> &'static str {
        "github.com/username/project_name"
    }
}

#[derive(Parser, Debug)]
#[command(name = "modstrap")]
#[command(about = "Create a go.mod and fetch the Charm packages into it")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write go.mod and install the packages (default)
    Init(InitArgs),
    /// Print the packages that would be installed
    Packages(PackagesArgs),
}

#[derive(Parser, Debug, Default)]
pub struct InitArgs {
    /// Directory to write go.mod into and run the toolchain from
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Toolchain binary used to fetch packages
    #[arg(long)]
    pub toolchain: Option<String>,

    /// Go version written into go.mod
    #[arg(long = "lang-version")]
    pub lang_version: Option<String>,

    /// YAML file with a `packages:` list replacing the built-in packages
    #[arg(long = "packages-file")]
    pub packages_file: Option<PathBuf>,

    /// Upper bound in milliseconds of the pause after each install
    #[arg(long = "max-delay-ms")]
    pub max_delay_ms: Option<u64>,

    /// Project name; skips the prompt
    #[arg(short, long)]
    pub name: Option<String>,

    /// Skip the toolchain check
    #[arg(long = "skip-check")]
    pub skip_check: bool,
}

impl From<&InitArgs> for Overrides {
    fn from(args: &InitArgs) -> Self {
        Overrides {
            dir: args.dir.clone(),
            toolchain: args.toolchain.clone(),
            language_version: args.lang_version.clone(),
            packages_file: args.packages_file.clone(),
            max_delay_ms: args.max_delay_ms,
            name: args.name.clone(),
        }
    }
}

#[derive(Parser, Debug)]
pub struct PackagesArgs {
    /// YAML file with a `packages:` list replacing the built-in packages
    #[arg(long = "packages-file")]
    pub packages_file: Option<PathBuf>,
}

async fn init(config: &GoToolchain, args: InitArgs) -> Result<()> {
    let settings = Settings::resolve(config, Overrides::from(&args))?;
    modstrap_core::tui::preflight(config, &settings, args.skip_check)?;
    modstrap_core::run(config, settings).await?;
    Ok(())
}

fn packages(config: &GoToolchain, args: PackagesArgs) -> Result<()> {
    let overrides = Overrides {
        packages_file: args.packages_file,
        ..Overrides::default()
    };
    let settings = Settings::resolve(config, overrides)?;
    modstrap_core::tui::print_packages(config, &settings.packages)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = console::Term::stdout().show_cursor();
        default_panic(info);
    }));

    // Raw mode delivers Ctrl+C as a key; this only fires outside it
    ctrlc::set_handler(move || {
        let _ = console::Term::stdout().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = GoToolchain;

    let result = match args.command {
        Some(Command::Init(init_args)) => init(&config, init_args).await,
        Some(Command::Packages(packages_args)) => packages(&config, packages_args),
        None => init(&config, InitArgs::default()).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stdout().show_cursor();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "Error running program:".red(), e);
            ExitCode::FAILURE
        }
    }
}
