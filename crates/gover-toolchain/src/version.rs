//! Go version reference normalization.

use std::fmt;

/// A normalized Go version reference, e.g. `go1.7.4`.
///
/// Constructed from raw user input (`1.7.4` and `go1.7.4` both normalize to
/// `go1.7.4`) or from a tag listing entry. Immutable once constructed; the
/// string form is what gets encoded into snapshot directory names and the
/// VERSION marker file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reference(String);

impl Reference {
    /// Normalize a raw version specifier.
    ///
    /// Accepts both `go1.7.4` and `1.7.4`. Returns `None` for anything that
    /// does not look like a Go version; the caller must surface a usage
    /// error rather than fall back to a default.
    pub fn parse(raw: &str) -> Option<Self> {
        let rest = raw.strip_prefix("go").unwrap_or(raw);
        if !rest.starts_with('1') {
            return None;
        }
        Some(Reference(format!("go{}", rest)))
    }

    /// The normalized reference string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_version() {
        assert_eq!(Reference::parse("1.7.4").unwrap().as_str(), "go1.7.4");
    }

    #[test]
    fn test_parse_prefixed_version() {
        assert_eq!(Reference::parse("go1.7.4").unwrap().as_str(), "go1.7.4");
    }

    #[test]
    fn test_parse_prerelease() {
        assert_eq!(Reference::parse("1.8beta1").unwrap().as_str(), "go1.8beta1");
    }

    #[test]
    fn test_parse_rejects_non_go1() {
        assert!(Reference::parse("2.0").is_none());
        assert!(Reference::parse("").is_none());
        assert!(Reference::parse("go").is_none());
        assert!(Reference::parse("abc").is_none());
    }

    #[test]
    fn test_display_matches_as_str() {
        let r = Reference::parse("1.8").unwrap();
        assert_eq!(r.to_string(), "go1.8");
    }
}
