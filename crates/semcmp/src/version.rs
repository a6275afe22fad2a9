//! Parsed version record

use std::cmp::Ordering;
use std::str::FromStr;

use serde::Serialize;

use crate::comparator::Comparator;
use crate::error::ParseError;
use crate::version_parser::{ParseOptions, VersionParser};

/// A parsed `major.minor.patch[-prerelease][+build]` version.
///
/// Equality is structural and includes build metadata. Precedence, which
/// ignores build metadata, is available through [`Version::cmp_precedence`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: u64,
    prerelease: Option<String>,
    build: Option<String>,
}

impl Version {
    pub(crate) fn new(
        major: u64,
        minor: u64,
        patch: u64,
        prerelease: Option<String>,
        build: Option<String>,
    ) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease,
            build,
        }
    }

    /// Parse `input` with the given options
    pub fn parse(input: &str, options: ParseOptions) -> Result<Self, ParseError> {
        VersionParser::new(options).parse(input)
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// The numeric core as a `(major, minor, patch)` triple
    pub fn core(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch)
    }

    /// Prerelease text without the leading `-`
    pub fn prerelease(&self) -> Option<&str> {
        self.prerelease.as_deref()
    }

    /// Build metadata without the leading `+`
    pub fn build(&self) -> Option<&str> {
        self.build.as_deref()
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// Dot-separated prerelease identifiers, empty for a release version
    pub fn prerelease_identifiers(&self) -> impl Iterator<Item = &str> {
        self.prerelease.as_deref().into_iter().flat_map(|p| p.split('.'))
    }

    /// Order two versions by precedence. Build metadata is ignored.
    pub fn cmp_precedence(&self, other: &Self) -> Ordering {
        Comparator::compare_versions(self, other)
    }
}

impl FromStr for Version {
    type Err = ParseError;

    /// Parses in loose mode, see [`ParseOptions::loose`]
    fn from_str(s: &str) -> Result<Self, ParseError> {
        Version::parse(s, ParseOptions::default())
    }
}
