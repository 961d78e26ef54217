//! Header line parsing.
//!
//! An Xdebug trace opens with:
//!
//! ```text
//! Version: 2.4.0
//! File format: 4
//!
//! TRACE START [2017-03-14 14:34:51]
//! ```

use super::scalar::decode_int64;
use crate::utils::config::{
    FORMAT_LINE, FORMAT_PREFIX, HEADER_LINES, START_LINE, START_PREFIX, START_TIME_FORMAT,
    START_TIME_WIDTH, VERSION_LINE, VERSION_PREFIX,
};
use crate::utils::error::HeaderError;
use chrono::NaiveDateTime;
use log::{debug, warn};
use regex::Regex;
use std::sync::LazyLock;

static VERSION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(&format!(r"{}\d+\.\d+\.\d+", VERSION_PREFIX)));

static FORMAT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| compile_regex(&format!(r"{}\d+", FORMAT_PREFIX)));

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        // Patterns are constants, covered by the tests below
        Err(err) => panic!("invalid regex pattern `{pattern}`: {err}"),
    }
}

/// How to treat header lines that don't match the expected patterns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderPolicy {
    /// Fail on the first malformed header line
    #[default]
    Strict,
    /// Log and substitute zero values (empty version, format 0, epoch)
    Lenient,
}

/// Values extracted from the header lines
#[derive(Debug, Clone, PartialEq)]
pub struct TraceHeader {
    pub version: String,
    pub format: i64,
    pub start_time: NaiveDateTime,
}

/// Extract `X.Y.Z` from a `Version: X.Y.Z` line
pub fn parse_version(line: &str) -> Result<String, HeaderError> {
    VERSION_REGEX
        .find(line)
        .map(|m| m.as_str()[VERSION_PREFIX.len()..].to_string())
        .ok_or(HeaderError::MissingVersion)
}

/// Extract the digits from a `File format: N` line
///
/// The digits are returned as text; integer conversion is left to the caller.
pub fn parse_format(line: &str) -> Result<String, HeaderError> {
    FORMAT_REGEX
        .find(line)
        .map(|m| m.as_str()[FORMAT_PREFIX.len()..].to_string())
        .ok_or(HeaderError::MissingFormat)
}

/// Parse the fixed-width timestamp in `TRACE START [YYYY-MM-DD HH:MM:SS]`
pub fn parse_start_time(line: &str) -> Result<NaiveDateTime, HeaderError> {
    let invalid = || HeaderError::InvalidStartTime {
        line: line.to_string(),
    };

    let timestamp = line
        .strip_prefix(START_PREFIX)
        .and_then(|rest| rest.get(..START_TIME_WIDTH))
        .ok_or_else(invalid)?;

    NaiveDateTime::parse_from_str(timestamp, START_TIME_FORMAT).map_err(|_| invalid())
}

/// Parse the header from the first lines of a trace
///
/// # Errors
/// * `HeaderError::Truncated` - fewer than 4 lines, under either policy
/// * `HeaderError::MissingVersion` / `MissingFormat` / `InvalidStartTime` -
///   only with `HeaderPolicy::Strict`
pub fn parse_header<S: AsRef<str>>(
    lines: &[S],
    policy: HeaderPolicy,
) -> Result<TraceHeader, HeaderError> {
    if lines.len() < HEADER_LINES {
        return Err(HeaderError::Truncated { lines: lines.len() });
    }

    let version = recover(parse_version(lines[VERSION_LINE].as_ref()), policy)?;
    let format = recover(parse_format(lines[FORMAT_LINE].as_ref()), policy)?;
    let start_time = recover(parse_start_time(lines[START_LINE].as_ref()), policy)?;

    let format = decode_int64(&format);

    debug!(
        "Parsed header: version {}, format {}, started {}",
        version, format, start_time
    );

    Ok(TraceHeader {
        version,
        format,
        start_time,
    })
}

/// Apply the header policy to a single header parse result
///
/// **Private** - internal helper for parse_header
fn recover<T: Default>(
    result: Result<T, HeaderError>,
    policy: HeaderPolicy,
) -> Result<T, HeaderError> {
    match (result, policy) {
        (Ok(value), _) => Ok(value),
        (Err(e), HeaderPolicy::Lenient) => {
            warn!("{}, using zero value", e);
            Ok(T::default())
        }
        (Err(e), HeaderPolicy::Strict) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_header() -> Vec<&'static str> {
        vec![
            "Version: 2.4.0",
            "File format: 4",
            "",
            "TRACE START [2017-03-14 14:34:51]",
        ]
    }

    #[test]
    fn test_load_regex() {
        LazyLock::force(&VERSION_REGEX);
        LazyLock::force(&FORMAT_REGEX);
    }

    #[test]
    fn test_parse_version() {
        assert_eq!(parse_version("Version: 2.4.0").unwrap(), "2.4.0");
        assert_eq!(parse_version("Version: 3.1.12-dev").unwrap(), "3.1.12");
        assert_eq!(parse_version("Version 2.4").unwrap_err(), HeaderError::MissingVersion);
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("File format: 4").unwrap(), "4");
        assert_eq!(parse_format("File format:").unwrap_err(), HeaderError::MissingFormat);
    }

    #[test]
    fn test_parse_start_time() {
        let expected = NaiveDate::from_ymd_opt(2017, 3, 14)
            .unwrap()
            .and_hms_opt(14, 34, 51)
            .unwrap();
        assert_eq!(
            parse_start_time("TRACE START [2017-03-14 14:34:51]").unwrap(),
            expected
        );
    }

    #[test]
    fn test_parse_start_time_rejects_bad_lines() {
        assert!(parse_start_time("TRACE END   [2017-03-14 14:34:51]").is_err());
        assert!(parse_start_time("TRACE START [2017-03-14").is_err());
        assert!(parse_start_time("TRACE START [2017-13-14 14:34:51]").is_err());
    }

    #[test]
    fn test_parse_header_strict() {
        let header = parse_header(&sample_header(), HeaderPolicy::Strict).unwrap();
        assert_eq!(header.version, "2.4.0");
        assert_eq!(header.format, 4);
        assert_eq!(header.start_time.to_string(), "2017-03-14 14:34:51");
    }

    #[test]
    fn test_parse_header_strict_fails_on_missing_version() {
        let mut lines = sample_header();
        lines[0] = "<?php echo 'hello';";
        assert_eq!(
            parse_header(&lines, HeaderPolicy::Strict).unwrap_err(),
            HeaderError::MissingVersion
        );
    }

    #[test]
    fn test_parse_header_lenient_zero_fills() {
        let lines = vec!["garbage", "more garbage", "", "TRACE START ["];
        let header = parse_header(&lines, HeaderPolicy::Lenient).unwrap();
        assert_eq!(header.version, "");
        assert_eq!(header.format, 0);
        assert_eq!(header.start_time, NaiveDateTime::default());
    }

    #[test]
    fn test_parse_header_truncated_under_both_policies() {
        let lines = vec!["Version: 2.4.0"];
        for policy in [HeaderPolicy::Strict, HeaderPolicy::Lenient] {
            assert_eq!(
                parse_header(&lines, policy).unwrap_err(),
                HeaderError::Truncated { lines: 1 }
            );
        }
    }
}
