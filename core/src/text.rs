//! Text shapes: extractors over string subjects.
//!
//! All four shapes accept any subject type that is `AsRef<str>`, so the
//! same extractor serves `String` and `&str` subjects alike. Because of
//! that the subject type does not pin itself down at the case site; name
//! it on the case method or on the handler's subject parameter:
//!
//! ```
//! use casus::prelude::*;
//!
//! let kv = text::SplitOnce::new("=");
//! let subject = String::from("level=debug");
//!
//! let result = match_value(&subject, |m| {
//!     m.case_pair::<String, _>(&kv).then(|_, key, value| format!("{key}: {value}"));
//!     m.otherwise(|| "bare".to_string());
//! });
//!
//! assert_eq!(result.unwrap(), "level: debug");
//! ```
//!
//! The regex-backed shapes compile their pattern up front and return the
//! `regex` crate's own error, so an invalid pattern surfaces at
//! construction and never at match time. Matching is linear time in the
//! subject (no `ReDoS`).

use crate::extractor::{EmptyExtractor, PairExtractor, SingleExtractor};
use std::fmt;

/// Matches when a regex matches anywhere in the subject, binding
/// nothing.
///
/// # Example
///
/// ```
/// use casus::prelude::*;
///
/// let hex = text::Pattern::new(r"^0x[0-9a-f]+$")?;
/// assert!(hex.matches(&"0xdeadbeef"));
/// assert!(!hex.matches(&"42"));
/// # Ok::<(), regex::Error>(())
/// ```
#[derive(Clone)]
pub struct Pattern {
    regex: regex::Regex,
}

impl Pattern {
    /// Compile `pattern` into a shape.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the regex pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        regex::Regex::new(pattern).map(|regex| Self { regex })
    }

    /// Compile `pattern` case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the regex pattern is invalid.
    pub fn new_ignore_case(pattern: &str) -> Result<Self, regex::Error> {
        regex::Regex::new(&format!("(?i){pattern}")).map(|regex| Self { regex })
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.regex.as_str()).finish()
    }
}

impl<S: AsRef<str>> EmptyExtractor<S> for Pattern {
    fn matches(&self, subject: &S) -> bool {
        self.regex.is_match(subject.as_ref())
    }
}

/// Binds text captured by a regex from the subject.
///
/// Extracts capture group 1 of the first match as an owned `String`.
/// When the pattern has no groups, or group 1 did not participate in
/// the match, the whole match is bound instead.
#[derive(Clone)]
pub struct Capture {
    regex: regex::Regex,
}

impl Capture {
    /// Compile `pattern` into a shape.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the regex pattern is invalid.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        regex::Regex::new(pattern).map(|regex| Self { regex })
    }
}

impl fmt::Debug for Capture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Capture").field(&self.regex.as_str()).finish()
    }
}

impl<S: AsRef<str>> SingleExtractor<S> for Capture {
    type Out = String;

    fn extract(&self, subject: &S) -> Option<String> {
        let captures = self.regex.captures(subject.as_ref())?;
        let text = match captures.get(1) {
            Some(group) => group.as_str(),
            None => captures.get(0)?.as_str(),
        };
        Some(text.to_string())
    }
}

/// Binds the subject parsed as an `i64`.
///
/// The whole subject must be the number; no surrounding whitespace is
/// tolerated. A parse failure is a definite "no" for the case, not an
/// error.
#[derive(Debug, Clone, Copy)]
pub struct ParseInt;

impl<S: AsRef<str>> SingleExtractor<S> for ParseInt {
    type Out = i64;

    fn extract(&self, subject: &S) -> Option<i64> {
        subject.as_ref().parse().ok()
    }
}

/// Binds the text before and after the first occurrence of a delimiter.
#[derive(Debug, Clone)]
pub struct SplitOnce {
    delimiter: String,
}

impl SplitOnce {
    pub fn new(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }
}

impl<S: AsRef<str>> PairExtractor<S> for SplitOnce {
    type First = String;
    type Second = String;

    fn extract(&self, subject: &S) -> Option<(String, String)> {
        let (before, after) = subject.as_ref().split_once(self.delimiter.as_str())?;
        Some((before.to_string(), after.to_string()))
    }
}
