use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"v?(\d+)\.(\d+)\.(\d+)").expect("version pattern is valid"));

/// A simple version struct for parsing and comparing version strings (e.g. "1.2.3").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    parts: Vec<u32>,
}

impl Version {
    /// Parse a version string into a `Version` object.
    ///
    /// A leading `v` is accepted. Returns `None` if any segment is non-numeric.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().strip_prefix('v').unwrap_or(s.trim());
        let parts: Vec<u32> =
            s.split('.').map(|segment| segment.parse::<u32>()).collect::<Result<_, _>>().ok()?;
        Some(Self { parts })
    }

    /// Extract `major.minor.patch` from the first line of a `--version` style output.
    pub fn from_version_output(output: &str) -> Option<Self> {
        let first_line = output.lines().next()?;
        let caps = VERSION_PATTERN.captures(first_line)?;
        let parts = (1..=3)
            .map(|idx| caps.get(idx).and_then(|m| m.as_str().parse::<u32>().ok()))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { parts })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<String> = self.parts.iter().map(u32::to_string).collect();
        write!(f, "{}", joined.join("."))
    }
}

impl Serialize for Version {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let max_len = self.parts.len().max(other.parts.len());
        for idx in 0..max_len {
            let left_value = *self.parts.get(idx).unwrap_or(&0);
            let right_value = *other.parts.get(idx).unwrap_or(&0);
            match left_value.cmp(&right_value) {
                Ordering::Less => return Ordering::Less,
                Ordering::Greater => return Ordering::Greater,
                Ordering::Equal => {}
            }
        }
        Ordering::Equal
    }
}

/// Versions of the IaC tool chain, probed once per session.
///
/// A missing entry means the probe failed or its output did not match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToolVersions {
    pub terragrunt: Option<Version>,
    pub terraform: Option<Version>,
    pub opentofu: Option<Version>,
}

impl ToolVersions {
    /// Whether the Terragrunt version is at or above `threshold`.
    pub fn terragrunt_at_least(&self, threshold: &Version) -> bool {
        self.terragrunt.as_ref().is_some_and(|version| version >= threshold)
    }
}
