//! Version comparison utilities

use std::cmp::Ordering;

use crate::error::ParseError;
use crate::version::Version;
use crate::version_parser::{ParseOptions, VersionParser};

/// Comparator for ordering versions by precedence
pub struct Comparator;

impl Comparator {
    /// Three-way comparison of two version strings: `-1`, `0` or `1`
    pub fn cmp(version1: &str, version2: &str, options: ParseOptions) -> Result<i32, ParseError> {
        Self::compare(version1, version2, options).map(|ordering| ordering as i32)
    }

    /// Parse both versions and order them. The left operand is parsed first
    /// and its error, if any, is returned unchanged.
    pub fn compare(version1: &str, version2: &str, options: ParseOptions) -> Result<Ordering, ParseError> {
        let parser = VersionParser::new(options);
        let v1 = parser.parse(version1)?;
        let v2 = parser.parse(version2)?;

        Ok(Self::compare_versions(&v1, &v2))
    }

    /// Order two parsed versions: the numeric core by significance, then the
    /// prerelease. Build metadata never participates.
    pub fn compare_versions(v1: &Version, v2: &Version) -> Ordering {
        match v1.core().cmp(&v2.core()) {
            Ordering::Equal => {}
            other => {
                log::debug!("Version core decides {:?} vs {:?}: {:?}", v1.core(), v2.core(), other);
                return other;
            }
        }

        Self::compare_prerelease(v1.prerelease(), v2.prerelease())
    }

    /// Compare two prerelease strings, `None` standing for a release.
    pub fn compare_prerelease(pre1: Option<&str>, pre2: Option<&str>) -> Ordering {
        let (pre1, pre2) = match (pre1, pre2) {
            (None, None) => return Ordering::Equal,
            // A release has higher precedence than any of its prereleases
            (None, Some(_)) => return Ordering::Greater,
            (Some(_), None) => return Ordering::Less,
            (Some(a), Some(b)) => (a, b),
        };

        let mut ids1 = pre1.split('.');
        let mut ids2 = pre2.split('.');

        loop {
            let ordering = match (ids1.next(), ids2.next()) {
                (None, None) => return Ordering::Equal,
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (Some(a), Some(b)) => compare_identifier(a, b),
            };

            if ordering != Ordering::Equal {
                log::debug!("Prerelease decides \"{}\" vs \"{}\": {:?}", pre1, pre2, ordering);
                return ordering;
            }
        }
    }

    /// Check if version1 > version2
    pub fn greater_than(version1: &str, version2: &str, options: ParseOptions) -> Result<bool, ParseError> {
        Ok(Self::compare(version1, version2, options)?.is_gt())
    }

    /// Check if version1 >= version2
    pub fn greater_than_or_equal_to(version1: &str, version2: &str, options: ParseOptions) -> Result<bool, ParseError> {
        Ok(Self::compare(version1, version2, options)?.is_ge())
    }

    /// Check if version1 < version2
    pub fn less_than(version1: &str, version2: &str, options: ParseOptions) -> Result<bool, ParseError> {
        Ok(Self::compare(version1, version2, options)?.is_lt())
    }

    /// Check if version1 <= version2
    pub fn less_than_or_equal_to(version1: &str, version2: &str, options: ParseOptions) -> Result<bool, ParseError> {
        Ok(Self::compare(version1, version2, options)?.is_le())
    }

    /// Check if version1 and version2 have equal precedence
    pub fn equal_to(version1: &str, version2: &str, options: ParseOptions) -> Result<bool, ParseError> {
        Ok(Self::compare(version1, version2, options)?.is_eq())
    }

    /// Check if version1 and version2 differ in precedence
    pub fn not_equal_to(version1: &str, version2: &str, options: ParseOptions) -> Result<bool, ParseError> {
        Ok(Self::compare(version1, version2, options)?.is_ne())
    }
}

/// Three-way comparison of two version strings: `-1`, `0` or `1`
pub fn cmp(version1: &str, version2: &str, options: ParseOptions) -> Result<i32, ParseError> {
    Comparator::cmp(version1, version2, options)
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    if is_numeric(a) && is_numeric(b) {
        return compare_numeric(a, b);
    }

    a.as_bytes().cmp(b.as_bytes())
}

fn is_numeric(identifier: &str) -> bool {
    !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit())
}

/// Compares digit strings by value without converting them, so arbitrarily
/// long identifiers cannot overflow.
fn compare_numeric(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');

    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}
