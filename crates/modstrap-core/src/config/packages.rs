//! Package list types and parsing

use crate::error::ScaffoldError;
use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::path::Path;

/// On-disk shape of a packages file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackagesFile {
    #[serde(default)]
    pub packages: Vec<String>,
}

/// Ordered, non-empty list of package identifiers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageList(Vec<String>);

impl PackageList {
    /// Build a list, trimming entries and dropping blank ones
    pub fn new<I, S>(packages: I) -> Result<Self, ScaffoldError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let packages: Vec<String> = packages
            .into_iter()
            .map(|p| p.as_ref().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();

        if packages.is_empty() {
            return Err(ScaffoldError::EmptyPackageList);
        }
        Ok(Self(packages))
    }

    /// Load a list from a YAML packages file
    pub fn from_file(path: &Path) -> Result<Self, ScaffoldError> {
        let content = std::fs::read_to_string(path).map_err(|source| ScaffoldError::PackagesRead {
            path: path.to_path_buf(),
            source,
        })?;
        let file: PackagesFile =
            serde_yaml::from_str(&content).map_err(|source| ScaffoldError::PackagesParse {
                path: path.to_path_buf(),
                source,
            })?;
        Self::new(file.packages)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed list
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Index<usize> for PackageList {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_blank_entries_are_dropped() {
        let list = PackageList::new(["  example.com/a ", "", "   ", "example.com/b"]).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(&list[0], "example.com/a");
        assert_eq!(list.get(1), Some("example.com/b"));
        assert_eq!(list.get(2), None);
    }

    #[test]
    fn test_empty_list_rejected() {
        let err = PackageList::new(Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, ScaffoldError::EmptyPackageList));
    }

    #[test]
    fn test_from_file_preserves_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "packages:\n  - github.com/charmbracelet/lipgloss\n  - github.com/charmbracelet/bubbletea"
        )
        .unwrap();

        let list = PackageList::from_file(file.path()).unwrap();
        let names: Vec<&str> = list.iter().collect();
        assert_eq!(
            names,
            vec![
                "github.com/charmbracelet/lipgloss",
                "github.com/charmbracelet/bubbletea"
            ]
        );
    }

    #[test]
    fn test_from_file_without_packages_key_is_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "other: value").unwrap();

        let err = PackageList::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::EmptyPackageList));
    }

    #[test]
    fn test_from_file_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "packages: [unclosed").unwrap();

        let err = PackageList::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ScaffoldError::PackagesParse { .. }));
    }

    #[test]
    fn test_from_missing_file() {
        let err = PackageList::from_file(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, ScaffoldError::PackagesRead { .. }));
    }
}
