//! Semver facade providing high-level version operations

use std::cmp::Ordering;

use crate::{Comparator, ParseError, ParseOptions, Version, VersionParser};

/// Main facade for working with lists of versions
pub struct Semver;

impl Semver {
    /// Check if a version string parses under the given options
    pub fn is_valid(version: &str, options: ParseOptions) -> bool {
        VersionParser::new(options).is_valid(version)
    }

    /// Sort versions in ascending order of precedence
    pub fn sort(versions: &[&str], options: ParseOptions) -> Result<Vec<String>, ParseError> {
        Self::usort(versions, options, true)
    }

    /// Sort versions in descending order of precedence
    pub fn rsort(versions: &[&str], options: ParseOptions) -> Result<Vec<String>, ParseError> {
        Self::usort(versions, options, false)
    }

    /// The version with the highest precedence. Among equal-precedence
    /// versions the first one wins.
    pub fn max(versions: &[&str], options: ParseOptions) -> Result<Option<String>, ParseError> {
        let parsed = Self::parse_all(versions, options)?;

        let best = parsed.iter().fold(None::<&(Version, usize)>, |best, candidate| match best {
            Some(current) if Comparator::compare_versions(&candidate.0, &current.0) != Ordering::Greater => {
                Some(current)
            }
            _ => Some(candidate),
        });

        Ok(best.map(|(_, i)| versions[*i].to_string()))
    }

    fn usort(versions: &[&str], options: ParseOptions, ascending: bool) -> Result<Vec<String>, ParseError> {
        let mut parsed = Self::parse_all(versions, options)?;

        // sort_by is stable, equal versions keep their input order
        parsed.sort_by(|(a, _), (b, _)| {
            let cmp = Comparator::compare_versions(a, b);
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });

        log::debug!("Sorted {} versions (ascending: {})", parsed.len(), ascending);

        // Return original versions in sorted order
        Ok(parsed
            .into_iter()
            .map(|(_, i)| versions[i].to_string())
            .collect())
    }

    fn parse_all(versions: &[&str], options: ParseOptions) -> Result<Vec<(Version, usize)>, ParseError> {
        let parser = VersionParser::new(options);

        versions
            .iter()
            .enumerate()
            .map(|(i, v)| parser.parse(v).map(|parsed| (parsed, i)))
            .collect()
    }
}
