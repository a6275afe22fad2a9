//! Semantic version parsing and precedence ordering
//!
//! This crate parses `major.minor.patch[-prerelease][+build]` strings into a
//! [`Version`] record and orders pairs of versions by semantic versioning
//! precedence. Build metadata is parsed but never affects ordering.

mod comparator;
mod error;
mod semver;
mod version;
mod version_parser;

pub use comparator::{cmp, Comparator};
pub use error::ParseError;
pub use semver::Semver;
pub use version::Version;
pub use version_parser::{parse, parse_value, ParseOptions, VersionParser};
