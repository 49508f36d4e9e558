//! Version identifiers of the form `v?MAJOR.MINOR[.PATCH]`.
//!
//! The minor component rolls over at the decade boundary: `1.9` is followed
//! by `2.0`, never `1.10`. A patch component is accepted when parsing so
//! that backend-assigned identifiers can be read, but it plays no part in
//! the increment.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use docvault_core::error::AppError;

/// Version assigned to the first upload of a document.
pub const INITIAL_VERSION: VersionNumber = VersionNumber {
    major: 1,
    minor: 0,
    patch: None,
};

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v?([0-9]+)\.([0-9]+)(?:\.([0-9]+))?$").expect("version pattern is a valid regex")
});

/// A parsed version identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionNumber {
    /// Major component.
    pub major: u32,
    /// Minor component, conventionally `0..=9`.
    pub minor: u32,
    /// Optional patch component; ignored by [`VersionNumber::next`].
    pub patch: Option<u32>,
}

impl VersionNumber {
    /// Create a `MAJOR.MINOR` version.
    pub fn new(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor,
            patch: None,
        }
    }

    /// Parse a version string, accepting an optional leading `v`.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        let trimmed = input.trim();
        let caps = VERSION_PATTERN.captures(trimmed).ok_or_else(|| {
            AppError::invalid_version_format(format!(
                "Cannot edit file with invalid version format: {input}"
            ))
        })?;

        let component = |idx: usize| -> Result<Option<u32>, AppError> {
            caps.get(idx)
                .map(|m| {
                    m.as_str().parse::<u32>().map_err(|_| {
                        AppError::invalid_version_format(format!(
                            "Version component out of range: {input}"
                        ))
                    })
                })
                .transpose()
        };

        let major = component(1)?.unwrap_or_default();
        let minor = component(2)?.unwrap_or_default();
        let patch = component(3)?;

        Ok(Self {
            major,
            minor,
            patch,
        })
    }

    /// The version that follows this one.
    pub fn next(&self) -> Self {
        next_version(self.major, self.minor)
    }
}

/// Compute the successor of `major.minor`.
///
/// A minor of 9 or more carries into the major component and resets the
/// minor to 0; any other minor is incremented by one.
pub fn next_version(major: u32, minor: u32) -> VersionNumber {
    if minor >= 9 {
        VersionNumber::new(major.saturating_add(1), 0)
    } else {
        VersionNumber::new(major, minor + 1)
    }
}

impl FromStr for VersionNumber {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for VersionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl PartialOrd for VersionNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for VersionNumber {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch.unwrap_or(0)).cmp(&(
            other.major,
            other.minor,
            other.patch.unwrap_or(0),
        ))
    }
}
