//! Python package version parsing and ordering
//!
//! Handles the dotted version grammar used by Python packages:
//! - Release segments: `1.24.3`, `3.8`
//! - Epochs: `1!2.0`
//! - Pre-releases: `1.0a1`, `1.0b2`, `1.0rc1` (also `alpha`, `beta`, `c`, `pre`, `preview`)
//! - Post-releases: `1.0.post1`, `1.0-1`, `1.0r2`
//! - Dev releases: `1.0.dev3`
//! - Local labels: `1.0+cpu.1`
//!
//! Parsing is case-insensitive, ignores surrounding whitespace and accepts a
//! leading `v`. `Display` prints the normalized form.

use crate::error::VersionError;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?ix)
        ^\s*v?
        (?:(?P<epoch>[0-9]+)!)?
        (?P<release>[0-9]+(?:\.[0-9]+)*)
        (?P<pre>[-_.]?(?P<pre_l>alpha|a|beta|b|preview|pre|c|rc)[-_.]?(?P<pre_n>[0-9]+)?)?
        (?P<post>(?:-(?P<post_n1>[0-9]+))|(?:[-_.]?(?P<post_l>post|rev|r)[-_.]?(?P<post_n2>[0-9]+)?))?
        (?P<dev>[-_.]?dev[-_.]?(?P<dev_n>[0-9]+)?)?
        (?:\+(?P<local>[a-z0-9]+(?:[-_.][a-z0-9]+)*))?
        \s*$",
    )
    .unwrap()
});

/// Pre-release phase, ordered alpha < beta < release candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PreReleaseKind {
    Alpha,
    Beta,
    ReleaseCandidate,
}

impl PreReleaseKind {
    fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "a" | "alpha" => PreReleaseKind::Alpha,
            "b" | "beta" => PreReleaseKind::Beta,
            _ => PreReleaseKind::ReleaseCandidate,
        }
    }

    /// Normalized label
    pub fn label(&self) -> &'static str {
        match self {
            PreReleaseKind::Alpha => "a",
            PreReleaseKind::Beta => "b",
            PreReleaseKind::ReleaseCandidate => "rc",
        }
    }
}

/// A segment of a local version label
///
/// Alphanumeric segments sort before numeric ones.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LocalSegment {
    Text(String),
    Number(u64),
}

impl fmt::Display for LocalSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocalSegment::Text(s) => write!(f, "{}", s),
            LocalSegment::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A parsed, comparable version
#[derive(Debug, Clone)]
pub struct Version {
    epoch: u64,
    release: Vec<u64>,
    pre: Option<(PreReleaseKind, u64)>,
    post: Option<u64>,
    dev: Option<u64>,
    local: Option<Vec<LocalSegment>>,
}

fn parse_number(digits: &str, input: &str) -> Result<u64, VersionError> {
    digits
        .parse::<u64>()
        .map_err(|_| VersionError::overflow(input))
}

impl Version {
    /// Parse a version string
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let caps = VERSION_RE
            .captures(input)
            .ok_or_else(|| VersionError::invalid(input))?;

        let epoch = match caps.name("epoch") {
            Some(m) => parse_number(m.as_str(), input)?,
            None => 0,
        };

        let release = caps["release"]
            .split('.')
            .map(|part| parse_number(part, input))
            .collect::<Result<Vec<_>, _>>()?;

        let pre = match caps.name("pre_l") {
            Some(label) => {
                let n = match caps.name("pre_n") {
                    Some(m) => parse_number(m.as_str(), input)?,
                    None => 0,
                };
                Some((PreReleaseKind::from_label(label.as_str()), n))
            }
            None => None,
        };

        let post = if let Some(m) = caps.name("post_n1") {
            Some(parse_number(m.as_str(), input)?)
        } else if caps.name("post_l").is_some() {
            match caps.name("post_n2") {
                Some(m) => Some(parse_number(m.as_str(), input)?),
                None => Some(0),
            }
        } else {
            None
        };

        let dev = if caps.name("dev").is_some() {
            match caps.name("dev_n") {
                Some(m) => Some(parse_number(m.as_str(), input)?),
                None => Some(0),
            }
        } else {
            None
        };

        let local = caps.name("local").map(|m| {
            m.as_str()
                .split(['-', '_', '.'])
                .map(|seg| match seg.parse::<u64>() {
                    Ok(n) if seg.bytes().all(|b| b.is_ascii_digit()) => LocalSegment::Number(n),
                    _ => LocalSegment::Text(seg.to_ascii_lowercase()),
                })
                .collect()
        });

        Ok(Self {
            epoch,
            release,
            pre,
            post,
            dev,
            local,
        })
    }

    /// Release segments with trailing zeros removed, so `1.0` and `1.0.0` compare equal
    fn trimmed_release(&self) -> &[u64] {
        let end = self
            .release
            .iter()
            .rposition(|&n| n != 0)
            .map_or(0, |i| i + 1);
        &self.release[..end]
    }

    /// Rank of the pre-release part: dev-only < pre-release < final
    fn pre_key(&self) -> (u8, Option<(PreReleaseKind, u64)>) {
        match (self.pre, self.post, self.dev) {
            (None, None, Some(_)) => (0, None),
            (Some(pre), _, _) => (1, Some(pre)),
            (None, _, _) => (2, None),
        }
    }

    /// A missing dev part sorts after any dev release
    fn dev_key(&self) -> (bool, Option<u64>) {
        (self.dev.is_none(), self.dev)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Version::parse(s)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.epoch
            .cmp(&other.epoch)
            .then_with(|| self.trimmed_release().cmp(other.trimmed_release()))
            .then_with(|| self.pre_key().cmp(&other.pre_key()))
            .then_with(|| self.post.cmp(&other.post))
            .then_with(|| self.dev_key().cmp(&other.dev_key()))
            .then_with(|| self.local.cmp(&other.local))
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.epoch != 0 {
            write!(f, "{}!", self.epoch)?;
        }
        let release: Vec<String> = self.release.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", release.join("."))?;
        if let Some((kind, n)) = self.pre {
            write!(f, "{}{}", kind.label(), n)?;
        }
        if let Some(n) = self.post {
            write!(f, ".post{}", n)?;
        }
        if let Some(n) = self.dev {
            write!(f, ".dev{}", n)?;
        }
        if let Some(local) = &self.local {
            let segments: Vec<String> = local.iter().map(|s| s.to_string()).collect();
            write!(f, "+{}", segments.join("."))?;
        }
        Ok(())
    }
}

impl Serialize for Version {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    #[test]
    fn test_parse_release() {
        let version = v("1.24.3");
        assert_eq!(version.release, vec![1, 24, 3]);
        assert_eq!(version.epoch, 0);
        assert!(version.pre.is_none() && version.dev.is_none());
    }

    #[test]
    fn test_parse_leading_v_and_whitespace() {
        assert_eq!(v("  v2.0 ").to_string(), "2.0");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Version::parse("").is_err());
        assert!(Version::parse("abc").is_err());
        assert!(Version::parse("1.2.x").is_err());
        assert!(Version::parse("1..2").is_err());
        assert!(Version::parse("N/A").is_err());
    }

    #[test]
    fn test_parse_overflow() {
        let err = Version::parse("1.99999999999999999999999").unwrap_err();
        assert!(matches!(err, VersionError::Overflow { .. }));
    }

    #[test]
    fn test_normalized_display() {
        assert_eq!(v("1.0RC1").to_string(), "1.0rc1");
        assert_eq!(v("1.0-alpha.2").to_string(), "1.0a2");
        assert_eq!(v("1.0c3").to_string(), "1.0rc3");
        assert_eq!(v("1.0-1").to_string(), "1.0.post1");
        assert_eq!(v("1.0.rev").to_string(), "1.0.post0");
        assert_eq!(v("1.0-dev").to_string(), "1.0.dev0");
        assert_eq!(v("1!2.0").to_string(), "1!2.0");
        assert_eq!(v("1.0+Ubuntu-1").to_string(), "1.0+ubuntu.1");
    }

    #[test]
    fn test_trailing_zeros_equal() {
        assert_eq!(v("1.0"), v("1.0.0"));
        assert_eq!(v("4.0"), v("4.0.0.0"));
        assert_ne!(v("1.0"), v("1.0.1"));
    }

    #[test]
    fn test_release_ordering() {
        assert!(v("1.24.3") < v("1.25.0"));
        assert!(v("1.9") < v("1.10"));
        assert!(v("2.0.0") > v("1.24.3"));
        assert!(v("3.7.17") < v("3.8"));
        assert!(v("3.12.1") >= v("3.8"));
    }

    #[test]
    fn test_prerelease_ordering() {
        let ordered = [
            "1.0.dev0", "1.0a1", "1.0a2.dev1", "1.0a2", "1.0b1", "1.0rc1", "1.0", "1.0.post1.dev0",
            "1.0.post1", "1.1",
        ];
        for pair in ordered.windows(2) {
            assert!(v(pair[0]) < v(pair[1]), "{} < {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_epoch_dominates() {
        assert!(v("1!0.1") > v("2.0"));
    }

    #[test]
    fn test_local_ordering() {
        assert!(v("1.0") < v("1.0+local"));
        assert!(v("1.0+abc") < v("1.0+5"));
        assert!(v("1.0+1") < v("1.0+1.1"));
    }

    #[test]
    fn test_from_str() {
        let version: Version = "3.8".parse().unwrap();
        assert_eq!(version.release, vec![3, 8]);
    }

    #[test]
    fn test_serialize_as_string() {
        let json = serde_json::to_string(&v("1.0RC1")).unwrap();
        assert_eq!(json, "\"1.0rc1\"");
    }
}
