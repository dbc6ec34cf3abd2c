//! Synthetic personal identifiers in the `DDMMYY-XXXX` shape

use crate::error::TypeError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MAX_DAY: u8 = 28;
pub const MIN_PSEUDO_YEAR: u8 = 60;
pub const MAX_PSEUDO_YEAR: u8 = 105;
pub const MIN_SEQUENCE: u16 = 1000;
pub const MAX_SEQUENCE: u16 = 9999;

/// Number of distinct identifiers `from_parts` can produce
pub const IDENTIFIER_SPACE: u64 = 28 * 12 * 46 * 9000;

static IDENTIFIER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{2})(\d{2})(\d{2})-(\d{4})$").expect("identifier pattern is a valid regex")
});

/// Strongly typed identifier, unique within a generated batch
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Build an identifier from its parts.
    ///
    /// `pseudo_year` runs 60..=105 for birth years 1960-2005 and is written
    /// modulo 100, so 2003 renders as `03`.
    pub fn from_parts(day: u8, month: u8, pseudo_year: u8, sequence: u16) -> Result<Self, TypeError> {
        let rendered = format!("{:02}{:02}{:02}-{:04}", day, month, pseudo_year % 100, sequence);
        let invalid = |reason: &str| TypeError::InvalidIdentifier {
            value: rendered.clone(),
            reason: reason.to_string(),
        };

        if !(1..=MAX_DAY).contains(&day) {
            return Err(invalid("day must be within 01-28"));
        }
        if !(1..=12).contains(&month) {
            return Err(invalid("month must be within 01-12"));
        }
        if !(MIN_PSEUDO_YEAR..=MAX_PSEUDO_YEAR).contains(&pseudo_year) {
            return Err(invalid("year must be within 1960-2005"));
        }
        if !(MIN_SEQUENCE..=MAX_SEQUENCE).contains(&sequence) {
            return Err(invalid("sequence must be within 1000-9999"));
        }

        Ok(Self(rendered))
    }

    /// Parse and validate an identifier read back from a spreadsheet
    pub fn parse(value: &str) -> Result<Self, TypeError> {
        let value = value.trim();
        let captures = IDENTIFIER_PATTERN.captures(value).ok_or_else(|| TypeError::InvalidIdentifier {
            value: value.to_string(),
            reason: "expected DDMMYY-XXXX".to_string(),
        })?;

        // The pattern guarantees every group is ASCII digits of a fixed width
        let number = |index: usize| -> u16 { captures[index].parse().unwrap_or_default() };
        let year_digits = number(3) as u8;
        let pseudo_year = if year_digits >= MIN_PSEUDO_YEAR {
            year_digits
        } else {
            year_digits + 100
        };

        Self::from_parts(number(1) as u8, number(2) as u8, pseudo_year, number(4))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Four-digit birth year encoded in the identifier
    pub fn birth_year(&self) -> u16 {
        let digits: u16 = self.0[4..6].parse().unwrap_or_default();
        if digits >= MIN_PSEUDO_YEAR as u16 {
            1900 + digits
        } else {
            2000 + digits
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Identifier {
    type Error = TypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Identifier> for String {
    fn from(identifier: Identifier) -> Self {
        identifier.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_parts_formats_fixed_width() {
        let id = Identifier::from_parts(3, 7, 85, 1234).unwrap();
        assert_eq!(id.as_str(), "030785-1234");
        assert_eq!(id.birth_year(), 1985);
    }

    #[test]
    fn test_years_after_1999_wrap_to_two_digits() {
        let id = Identifier::from_parts(28, 12, 105, 9999).unwrap();
        assert_eq!(id.as_str(), "281205-9999");
        assert_eq!(id.birth_year(), 2005);
    }

    #[test]
    fn test_from_parts_rejects_out_of_range() {
        assert!(Identifier::from_parts(0, 1, 60, 1000).is_err());
        assert!(Identifier::from_parts(29, 1, 60, 1000).is_err());
        assert!(Identifier::from_parts(1, 13, 60, 1000).is_err());
        assert!(Identifier::from_parts(1, 1, 59, 1000).is_err());
        assert!(Identifier::from_parts(1, 1, 106, 1000).is_err());
        assert!(Identifier::from_parts(1, 1, 60, 999).is_err());
    }

    #[test]
    fn test_parse_round_trips() {
        for raw in ["010160-1000", "150399-5555", "280805-9999"] {
            assert_eq!(Identifier::parse(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn test_parse_rejects_bad_shapes() {
        for raw in ["", "0101601000", "01016-1000", "010160-100", "AB0160-1000", "010150-1000", "010106-1000"] {
            assert!(Identifier::parse(raw).is_err(), "{} should be rejected", raw);
        }
    }

    #[test]
    fn test_serde_uses_plain_string() {
        let id = Identifier::parse("120490-4321").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"120490-4321\"");

        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<Identifier>("\"nope\"").is_err());
    }
}
