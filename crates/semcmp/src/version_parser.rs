//! Version parsing module

use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde_json::Value;

use crate::error::ParseError;
use crate::version::Version;

/// Options shared by the parser and the comparator
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ParseOptions {
    /// Require a full `major.minor.patch` core. When unset, missing minor and
    /// patch components default to zero.
    pub strict: bool,
}

impl ParseOptions {
    pub fn strict() -> Self {
        Self { strict: true }
    }

    pub fn loose() -> Self {
        Self { strict: false }
    }
}

/// Prerelease identifiers: alphanumerics and hyphens, dot separated, none empty
const PRERELEASE_REGEX: &str = r"[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*";

/// Build identifiers. A hyphen after `+` would be a prerelease following build
/// metadata, so it is not accepted here.
const BUILD_REGEX: &str = r"[0-9A-Za-z]+(?:\.[0-9A-Za-z]+)*";

lazy_static! {
    // Full three-part core, everything after it is captured as labels
    static ref STRICT_CORE_RE: Regex =
        Regex::new(r"(?s)^v?([0-9]+)\.([0-9]+)\.([0-9]+)(.*)$").unwrap();

    // Minor and patch are optional
    static ref LOOSE_CORE_RE: Regex =
        Regex::new(r"(?s)^v?([0-9]+)(?:\.([0-9]+))?(?:\.([0-9]+))?(.*)$").unwrap();

    static ref BUILD_ONLY_RE: Regex =
        Regex::new(&format!(r"^\+({})$", BUILD_REGEX)).unwrap();

    static ref PRERELEASE_ONLY_RE: Regex =
        Regex::new(&format!(r"^-({})$", PRERELEASE_REGEX)).unwrap();

    static ref PRERELEASE_AND_BUILD_RE: Regex =
        Regex::new(&format!(r"^-({})\+({})$", PRERELEASE_REGEX, BUILD_REGEX)).unwrap();
}

/// Version parser for turning version strings into [`Version`] records
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionParser {
    options: ParseOptions,
}

impl VersionParser {
    /// Create a new version parser
    pub fn new(options: ParseOptions) -> Self {
        VersionParser { options }
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    /// Check if a version string is valid
    pub fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parses a version string.
    ///
    /// Leading and trailing whitespace is ignored. An optional `v` prefix is
    /// accepted in both modes.
    pub fn parse(&self, input: &str) -> Result<Version, ParseError> {
        let version = input.trim();

        let core_re: &Regex = if self.options.strict {
            &STRICT_CORE_RE
        } else {
            &LOOSE_CORE_RE
        };

        let Some(caps) = core_re.captures(version) else {
            log::trace!("No version core in \"{}\" (strict: {})", version, self.options.strict);
            return Err(ParseError::EmptyOrMalformedCore {
                version: version.to_string(),
            });
        };

        let major = parse_component(&caps, 1, version)?;
        let minor = parse_component(&caps, 2, version)?;
        let patch = parse_component(&caps, 3, version)?;
        let labels = caps.get(4).map_or("", |m| m.as_str());

        log::trace!(
            "Parsed core {}.{}.{} with labels \"{}\" from \"{}\"",
            major,
            minor,
            patch,
            labels,
            version
        );

        let (prerelease, build) = split_labels(labels).ok_or_else(|| {
            ParseError::InvalidPrereleaseOrBuildFormat {
                version: version.to_string(),
            }
        })?;

        Ok(Version::new(major, minor, patch, prerelease, build))
    }

    /// Parses a dynamically typed value. Anything other than a JSON string
    /// fails with [`ParseError::InvalidInputType`] without being inspected.
    pub fn parse_value(&self, input: &Value) -> Result<Version, ParseError> {
        match input {
            Value::String(version) => self.parse(version),
            other => Err(ParseError::InvalidInputType {
                input: other.to_string(),
            }),
        }
    }
}

/// Parse `input` with the given options
pub fn parse(input: &str, options: ParseOptions) -> Result<Version, ParseError> {
    VersionParser::new(options).parse(input)
}

/// Parse a dynamically typed value with the given options
pub fn parse_value(input: &Value, options: ParseOptions) -> Result<Version, ParseError> {
    VersionParser::new(options).parse_value(input)
}

/// Reads a numeric core component; an absent group defaults to zero
fn parse_component(caps: &Captures, index: usize, version: &str) -> Result<u64, ParseError> {
    match caps.get(index) {
        Some(m) => m.as_str().parse::<u64>().map_err(|_| ParseError::EmptyOrMalformedCore {
            version: version.to_string(),
        }),
        None => Ok(0),
    }
}

/// Splits the text following the core into prerelease and build parts.
/// Returns `None` when the labels have none of the accepted shapes.
fn split_labels(labels: &str) -> Option<(Option<String>, Option<String>)> {
    if labels.is_empty() {
        return Some((None, None));
    }

    if let Some(caps) = PRERELEASE_AND_BUILD_RE.captures(labels) {
        return Some((Some(caps[1].to_string()), Some(caps[2].to_string())));
    }

    if let Some(caps) = PRERELEASE_ONLY_RE.captures(labels) {
        return Some((Some(caps[1].to_string()), None));
    }

    if let Some(caps) = BUILD_ONLY_RE.captures(labels) {
        return Some((None, Some(caps[1].to_string())));
    }

    log::trace!("Rejected labels \"{}\"", labels);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(version: &str) -> Result<Version, ParseError> {
        parse(version, ParseOptions::strict())
    }

    fn loose(version: &str) -> Result<Version, ParseError> {
        parse(version, ParseOptions::loose())
    }

    #[test]
    fn test_parse_strict_versions() {
        let tests = [
            ("0.0.0", (0, 0, 0), None, None),
            ("1.2.3", (1, 2, 3), None, None),
            ("v1.2.3", (1, 2, 3), None, None),
            ("10.20.30", (10, 20, 30), None, None),
            ("1.2.3-alpha", (1, 2, 3), Some("alpha"), None),
            ("1.2.3-alpha.1", (1, 2, 3), Some("alpha.1"), None),
            ("1.2.3-0.3.7", (1, 2, 3), Some("0.3.7"), None),
            ("1.2.3-x.7.z.92", (1, 2, 3), Some("x.7.z.92"), None),
            ("1.2.3-x-y-z.--", (1, 2, 3), Some("x-y-z.--"), None),
            ("1.2.3+build", (1, 2, 3), None, Some("build")),
            ("1.2.3+20130313144700", (1, 2, 3), None, Some("20130313144700")),
            ("1.2.3+exp.sha.5114f85", (1, 2, 3), None, Some("exp.sha.5114f85")),
            ("1.2.3-beta+exp.sha.5114f85", (1, 2, 3), Some("beta"), Some("exp.sha.5114f85")),
            ("1.0.0-rc-1+build1", (1, 0, 0), Some("rc-1"), Some("build1")),
        ];

        for (input, core, prerelease, build) in tests {
            let v = strict(input).unwrap_or_else(|e| panic!("{input}: {e}"));
            assert_eq!(v.core(), core, "core of {input}");
            assert_eq!(v.prerelease(), prerelease, "prerelease of {input}");
            assert_eq!(v.build(), build, "build of {input}");
        }
    }

    #[test]
    fn test_parse_loose_defaults() {
        assert_eq!(loose("1.2").unwrap().core(), (1, 2, 0));
        assert_eq!(loose("1").unwrap().core(), (1, 0, 0));
        assert_eq!(loose("v7").unwrap().core(), (7, 0, 0));
        assert_eq!(loose("1.2.3").unwrap().core(), (1, 2, 3));

        let v = loose("1.2-beta.2+ci").unwrap();
        assert_eq!(v.core(), (1, 2, 0));
        assert_eq!(v.prerelease(), Some("beta.2"));
        assert_eq!(v.build(), Some("ci"));

        let v = loose("3+meta").unwrap();
        assert_eq!(v.core(), (3, 0, 0));
        assert_eq!(v.build(), Some("meta"));
    }

    #[test]
    fn test_parse_is_loose_by_default() {
        assert_eq!(ParseOptions::default(), ParseOptions::loose());
        assert_eq!(parse("1.2", ParseOptions::default()).unwrap().core(), (1, 2, 0));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(strict("  v1.2.3  ").unwrap(), strict("v1.2.3").unwrap());
        assert_eq!(strict("\t1.2.3\n").unwrap(), strict("1.2.3").unwrap());
        assert_eq!(loose(" 2 ").unwrap(), loose("2").unwrap());
    }

    #[test]
    fn test_strict_rejects_malformed_core() {
        let tests = ["foo", "", "   ", "-1.0.0", "0.-1.0", "0.0.-1", ".0.0.0", "foobar1.2.3", "1.2", "1", "v", "V1.2.3"];

        for input in tests {
            assert!(
                matches!(strict(input), Err(ParseError::EmptyOrMalformedCore { .. })),
                "{input} should fail with a malformed core"
            );
        }
    }

    #[test]
    fn test_strict_rejects_bad_labels() {
        let tests = [
            "0.0.0.",
            "1.2.3foobar",
            "1.2.3-%?",
            "1.2.3+%?",
            "1.2.3+build.0-rc1",
            "1.2.3-",
            "1.2.3+",
            "1.2.3-alpha..1",
            "1.2.3-alpha.",
            "1.2.3+build..1",
            "1.2.3-alpha+",
            "1.2.3-alpha+build+again",
            "1.2.3 -alpha",
            "1.2.3.4",
        ];

        for input in tests {
            assert!(
                matches!(strict(input), Err(ParseError::InvalidPrereleaseOrBuildFormat { .. })),
                "{input} should fail with invalid labels"
            );
        }
    }

    #[test]
    fn test_loose_rejections() {
        assert!(matches!(loose(""), Err(ParseError::EmptyOrMalformedCore { .. })));
        assert!(matches!(loose("foo"), Err(ParseError::EmptyOrMalformedCore { .. })));
        assert!(matches!(loose("-1.0.0"), Err(ParseError::EmptyOrMalformedCore { .. })));
        assert!(matches!(loose(".1"), Err(ParseError::EmptyOrMalformedCore { .. })));
        assert!(matches!(loose("1.2.3foobar"), Err(ParseError::InvalidPrereleaseOrBuildFormat { .. })));
        assert!(matches!(loose("0.-1.0"), Err(ParseError::InvalidPrereleaseOrBuildFormat { .. })));
        assert!(matches!(loose("1."), Err(ParseError::InvalidPrereleaseOrBuildFormat { .. })));
    }

    #[test]
    fn test_component_overflow() {
        assert!(matches!(
            strict("18446744073709551616.0.0"),
            Err(ParseError::EmptyOrMalformedCore { .. })
        ));
        assert_eq!(strict("18446744073709551615.0.0").unwrap().major(), u64::MAX);
    }

    #[test]
    fn test_error_carries_input() {
        let err = strict("  1.2.3-%?  ").unwrap_err();
        assert_eq!(err.input(), "1.2.3-%?");
        assert_eq!(
            err.to_string(),
            "Invalid version string \"1.2.3-%?\": malformed prerelease or build metadata"
        );
    }

    #[test]
    fn test_parse_value() {
        let parser = VersionParser::new(ParseOptions::strict());
        assert_eq!(
            parser.parse_value(&Value::from("1.2.3")).unwrap(),
            parser.parse("1.2.3").unwrap()
        );

        let tests = [
            Value::from(1.5),
            Value::from(1),
            Value::Null,
            Value::Bool(true),
            serde_json::json!({ "major": 1 }),
            serde_json::json!(["1.2.3"]),
        ];
        for input in tests {
            assert!(
                matches!(parser.parse_value(&input), Err(ParseError::InvalidInputType { .. })),
                "{input} should be rejected as a non-string"
            );
        }

        assert_eq!(
            parse_value(&Value::Null, ParseOptions::loose()).unwrap_err(),
            ParseError::InvalidInputType { input: "null".to_string() }
        );
    }

    #[test]
    fn test_is_valid() {
        let parser = VersionParser::new(ParseOptions::strict());
        assert!(parser.is_valid("1.0.0"));
        assert!(!parser.is_valid("1.0"));
        assert!(VersionParser::default().is_valid("1.0"));
        assert_eq!(VersionParser::default().options(), ParseOptions::loose());
    }
}
