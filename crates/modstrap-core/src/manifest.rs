//! Module manifest generation

use crate::error::ScaffoldError;
use crate::toolchain::ToolchainConfig;
use std::path::{Path, PathBuf};

/// Writes the module manifest for a confirmed project name
#[derive(Debug, Clone)]
pub struct ManifestWriter {
    path: PathBuf,
    language_version: String,
}

impl ManifestWriter {
    pub fn new<C: ToolchainConfig>(config: &C, dir: &Path, language_version: &str) -> Self {
        Self {
            path: dir.join(config.manifest_file()),
            language_version: language_version.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the manifest, overwriting any existing file. The project name is
    /// written as given.
    pub fn write<C: ToolchainConfig>(
        &self,
        config: &C,
        project: &str,
    ) -> Result<&Path, ScaffoldError> {
        let contents = config.render_manifest(project, &self.language_version);
        std::fs::write(&self.path, contents).map_err(|source| ScaffoldError::ManifestWrite {
            path: self.path.clone(),
            source,
        })?;
        Ok(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toolchain::testing::TestToolchain;

    #[test]
    fn test_first_line_is_module_directive() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ManifestWriter::new(&TestToolchain, dir.path(), "1.20");

        writer.write(&TestToolchain, "example.com/foo").unwrap();

        let content = std::fs::read_to_string(dir.path().join("go.mod")).unwrap();
        assert_eq!(content.lines().next(), Some("module example.com/foo"));
        assert_eq!(content, "module example.com/foo\n\ngo 1.20");
    }

    #[test]
    fn test_empty_project_name_is_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let writer = ManifestWriter::new(&TestToolchain, dir.path(), "1.22");

        writer.write(&TestToolchain, "").unwrap();

        let content = std::fs::read_to_string(writer.path()).unwrap();
        assert_eq!(content, "module \n\ngo 1.22");
    }

    #[test]
    fn test_missing_directory_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("does-not-exist");
        let writer = ManifestWriter::new(&TestToolchain, &missing, "1.20");

        let err = writer.write(&TestToolchain, "example.com/foo").unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestWrite { .. }));
        assert!(err.to_string().contains("does-not-exist"));
    }
}
