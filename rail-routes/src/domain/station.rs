//! Station name types.

use std::fmt;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStation {
    reason: &'static str,
}

/// A validated station name.
///
/// Stations have no attributes beyond their name: two stations are the
/// same station exactly when their names are equal, case-sensitively.
/// This type guarantees that any `Station` value is non-blank and free of
/// the characters the line-oriented edge format reserves.
///
/// # Examples
///
/// ```
/// use rail_routes::domain::Station;
///
/// let lyon = Station::parse("Lyon").unwrap();
/// assert_eq!(lyon.as_str(), "Lyon");
///
/// // Blank names are rejected
/// assert!(Station::parse("").is_err());
/// assert!(Station::parse("   ").is_err());
///
/// // The record separator is rejected
/// assert!(Station::parse("Lyon,Part-Dieu").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Station(String);

impl Station {
    /// Parse a station name from a string.
    ///
    /// The input must contain at least one non-whitespace character and
    /// must not contain `,` or line breaks, which the edge-list format
    /// uses as record structure.
    pub fn parse(s: &str) -> Result<Self, InvalidStation> {
        if s.trim().is_empty() {
            return Err(InvalidStation {
                reason: "must be non-empty",
            });
        }

        if s.contains([',', '\n', '\r']) {
            return Err(InvalidStation {
                reason: "must not contain ',' or line breaks",
            });
        }

        Ok(Station(s.to_string()))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Station({})", self.as_str())
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating valid station names: printable, no reserved
    /// characters, at least one non-whitespace character.
    fn valid_name() -> impl Strategy<Value = String> {
        proptest::string::string_regex("[A-Za-z][A-Za-z '-]{0,20}")
            .unwrap()
            .prop_filter("must not be blank", |s| !s.trim().is_empty())
    }

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in valid_name()) {
            let station = Station::parse(&s).unwrap();
            prop_assert_eq!(station.as_str(), s.as_str());
        }

        /// Any valid name can be parsed
        #[test]
        fn valid_always_parses(s in valid_name()) {
            prop_assert!(Station::parse(&s).is_ok());
        }

        /// Whitespace-only names are always rejected
        #[test]
        fn blank_rejected(s in "[ \t]{0,10}") {
            prop_assert!(Station::parse(&s).is_err());
        }

        /// Names containing the record separator are always rejected
        #[test]
        fn separator_rejected(s in "[A-Za-z]{0,5},[A-Za-z]{0,5}") {
            prop_assert!(Station::parse(&s).is_err());
        }
    }
}
