//! Version comparison between the installed toolchain and the manifest

use semver::Version;

/// Extract a version from toolchain output such as `go version go1.21.5 linux/amd64`
/// or a bare `1.20`. Missing components are zero; pre-release suffixes are dropped.
pub fn parse_toolchain_version(text: &str) -> Option<Version> {
    text.split_whitespace().find_map(parse_token)
}

fn parse_token(token: &str) -> Option<Version> {
    let cleaned = token.strip_prefix("go").unwrap_or(token);
    let cleaned = cleaned.strip_prefix('v').unwrap_or(cleaned);

    let mut parts = [0u64; 3];
    let mut found = 0;
    for (slot, component) in parts.iter_mut().zip(cleaned.split('.')) {
        let digits: String = component.chars().take_while(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            break;
        }
        *slot = digits.parse().ok()?;
        found += 1;
        if digits.len() != component.len() {
            break;
        }
    }

    // A lone number ("1") is too ambiguous to be a toolchain version
    if found < 2 {
        return None;
    }
    Some(Version::new(parts[0], parts[1], parts[2]))
}

/// Compare the installed toolchain against the manifest's language version.
/// Returns a warning message if the toolchain is older.
pub fn check_compatibility(installed: &str, required: &str, binary: &str) -> Option<String> {
    let installed_ver = parse_toolchain_version(installed)?;
    let required_ver = parse_toolchain_version(required)?;

    if installed_ver < required_ver {
        Some(format!(
            "{} {} is older than {} declared in the manifest; fetching may fail",
            binary, installed_ver, required
        ))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_go_version_output() {
        let v = parse_toolchain_version("go version go1.21.5 linux/amd64").unwrap();
        assert_eq!(v, Version::new(1, 21, 5));
    }

    #[test]
    fn test_parse_short_version() {
        assert_eq!(parse_toolchain_version("1.20"), Some(Version::new(1, 20, 0)));
    }

    #[test]
    fn test_parse_release_candidate() {
        assert_eq!(
            parse_toolchain_version("go version go1.22rc1 darwin/arm64"),
            Some(Version::new(1, 22, 0))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_toolchain_version("no digits here").is_none());
        assert!(parse_toolchain_version("7").is_none());
    }

    #[test]
    fn test_older_toolchain_warns() {
        let warning = check_compatibility("go version go1.19.2 linux/amd64", "1.20", "go");
        assert_eq!(
            warning.as_deref(),
            Some("go 1.19.2 is older than 1.20 declared in the manifest; fetching may fail")
        );
        assert!(!warning.unwrap().contains('\n'));
    }

    #[test]
    fn test_same_or_newer_toolchain_is_fine() {
        assert!(check_compatibility("go version go1.20 linux/amd64", "1.20", "go").is_none());
        assert!(check_compatibility("go version go1.22.3 linux/amd64", "1.20", "go").is_none());
    }

    #[test]
    fn test_unparseable_versions_skip_warning() {
        assert!(check_compatibility("unknown", "1.20", "go").is_none());
        assert!(check_compatibility("go version go1.19 linux/amd64", "latest", "go").is_none());
    }
}
