use std::fmt;

/// The release a documentation tree is being moved to.
///
/// Carried as text only: `"3.15"` and `"3.15.0"` are both accepted and no
/// numeric components are stored. Malformed input is kept as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetVersion(String);

impl TargetVersion {
    pub fn new(version: impl Into<String>) -> Self {
        TargetVersion(version.into())
    }

    /// The version exactly as given, used by the API URL rule.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the version is three dot-separated numeric components.
    pub fn is_patch_form(&self) -> bool {
        let parts: Vec<&str> = self.0.split('.').collect();
        parts.len() == 3
            && parts
                .iter()
                .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_digit()))
    }

    /// The `major.minor.patch` form used by the guides URL rule.
    ///
    /// A version already in patch form is returned unchanged, anything else
    /// gets `.0` appended.
    pub fn patch_version(&self) -> String {
        if self.is_patch_form() {
            self.0.clone()
        } else {
            format!("{}.0", self.0)
        }
    }

    /// True if the patch form is a plain `MAJOR.MINOR.PATCH` release number.
    pub fn is_recognized(&self) -> bool {
        let patch = self.patch_version();
        match semver::Version::parse(&patch) {
            Ok(v) => v.pre.is_empty() && v.build.is_empty(),
            Err(_) => false,
        }
    }
}

impl fmt::Display for TargetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TargetVersion {
    fn from(version: &str) -> Self {
        TargetVersion::new(version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patch_version_two_components() {
        assert_eq!(TargetVersion::new("3.15").patch_version(), "3.15.0");
    }

    #[test]
    fn test_patch_version_three_components() {
        assert_eq!(TargetVersion::new("3.16.0").patch_version(), "3.16.0");
        assert_eq!(TargetVersion::new("3.16.2").patch_version(), "3.16.2");
    }

    #[test]
    fn test_patch_version_malformed_is_kept() {
        assert_eq!(TargetVersion::new("latest").patch_version(), "latest.0");
        assert_eq!(TargetVersion::new("1.2.x").patch_version(), "1.2.x.0");
        assert_eq!(TargetVersion::new("").patch_version(), ".0");
    }

    #[test]
    fn test_is_patch_form() {
        assert!(TargetVersion::new("1.2.3").is_patch_form());
        assert!(!TargetVersion::new("1.2").is_patch_form());
        assert!(!TargetVersion::new("1.2.3.4").is_patch_form());
        assert!(!TargetVersion::new("1..3").is_patch_form());
    }

    #[test]
    fn test_is_recognized() {
        assert!(TargetVersion::new("3.15").is_recognized());
        assert!(TargetVersion::new("3.16.0").is_recognized());
        assert!(!TargetVersion::new("latest").is_recognized());
        assert!(!TargetVersion::new("3.15-beta").is_recognized());
        assert!(!TargetVersion::new("03.1").is_recognized());
    }

    #[test]
    fn test_display_is_verbatim() {
        assert_eq!(TargetVersion::new("3.15").to_string(), "3.15");
    }
}
