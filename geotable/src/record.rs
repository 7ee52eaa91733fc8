//! Coordinate pair records.
//!
//! A record is the first two whitespace-separated tokens of an input line,
//! kept as the literal text that appeared in the file. Nothing here parses
//! the tokens as numbers: the generated declaration must reproduce the
//! source decimal representation exactly.

use std::fmt;

/// A longitude/latitude pair taken verbatim from one input line.
///
/// Borrows from the loaded input text, so a table of pairs costs no
/// allocations beyond the backing `Vec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinatePair<'a> {
    /// Longitude literal (first token of the line).
    pub longitude: &'a str,

    /// Latitude literal (second token of the line).
    pub latitude: &'a str,
}

impl<'a> CoordinatePair<'a> {
    /// Create a pair from two literal tokens.
    pub fn new(longitude: &'a str, latitude: &'a str) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// Formats as a tuple literal, e.g. `(-74.006, 40.7128)`.
impl fmt::Display for CoordinatePair<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.longitude, self.latitude)
    }
}

/// Parses one input line into a coordinate pair.
///
/// The line is split on whitespace. Lines with fewer than two tokens yield
/// `None`; any tokens after the second are discarded without inspection.
///
/// # Examples
///
/// ```
/// use geotable::{parse_line, CoordinatePair};
///
/// assert_eq!(
///     parse_line("1.0 2.0 extra_field"),
///     Some(CoordinatePair::new("1.0", "2.0"))
/// );
/// assert_eq!(parse_line("malformed"), None);
/// assert_eq!(parse_line(""), None);
/// ```
pub fn parse_line(line: &str) -> Option<CoordinatePair<'_>> {
    let mut tokens = line.split_whitespace();
    let longitude = tokens.next()?;
    let latitude = tokens.next()?;
    Some(CoordinatePair::new(longitude, latitude))
}
