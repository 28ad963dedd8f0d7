//! Toolchain configuration trait for bootstrapper binaries
//!
//! This trait defines what each target ecosystem must provide so the
//! prompt, manifest writer and install driver can run against it.

/// Configuration trait for different toolchains
///
/// Each binary implements this trait to define:
/// - Tool identity (display name)
/// - The toolchain binary and how packages are fetched with it
/// - The manifest file and its contents
/// - The default package list
pub trait ToolchainConfig: Clone + Send + Sync + 'static {
    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Toolchain binary used to fetch packages (e.g., "go")
    fn binary(&self) -> &'static str;

    /// Environment variable name for overriding the toolchain binary
    fn binary_env(&self) -> &'static str;

    /// Subcommand passed before each package identifier
    fn fetch_subcommand(&self) -> &'static str {
        "get"
    }

    /// Arguments that make the toolchain print its version
    fn version_args(&self) -> &'static [&'static str] {
        &["version"]
    }

    /// Language version recorded in the manifest
    fn language_version(&self) -> &'static str;

    /// File name of the manifest written into the working directory
    fn manifest_file(&self) -> &'static str;

    /// Render the manifest contents for a project
    fn render_manifest(&self, project: &str, language_version: &str) -> String;

    /// Packages fetched when no packages file is given
    fn default_packages(&self) -> Vec<String>;

    /// Placeholder shown in the project name input
    fn placeholder(&self) -> &'static str;
}

#[cfg(test)]
pub(crate) mod testing {
    use super::ToolchainConfig;

    /// Minimal toolchain used across unit tests
    #[derive(Clone)]
    pub struct TestToolchain;

    impl ToolchainConfig for TestToolchain {
        fn display_name(&self) -> &'static str {
            "Test"
        }

        fn binary(&self) -> &'static str {
            "true"
        }

        fn binary_env(&self) -> &'static str {
            "MODSTRAP_TEST_TOOLCHAIN"
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
            vec!["example.com/a".to_string(), "example.com/b".to_string()]
        }

        fn placeholder(&self) -> &'static str {
            "example.com/you/project"
        }
    }
}
