//! Letter templates a record can be rendered with

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LetterType {
    #[serde(rename = "Salary Regulation 2025")]
    SalaryRegulation2025,
    #[serde(rename = "Pension Change")]
    PensionChange,
    #[serde(rename = "Contract Amendment")]
    ContractAmendment,
    #[serde(rename = "Annual Salary Review")]
    AnnualSalaryReview,
}

impl LetterType {
    pub const ALL: [LetterType; 4] = [
        LetterType::SalaryRegulation2025,
        LetterType::PensionChange,
        LetterType::ContractAmendment,
        LetterType::AnnualSalaryReview,
    ];

    /// Label stored in the `LetterType` spreadsheet column
    pub fn label(self) -> &'static str {
        match self {
            LetterType::SalaryRegulation2025 => "Salary Regulation 2025",
            LetterType::PensionChange => "Pension Change",
            LetterType::ContractAmendment => "Contract Amendment",
            LetterType::AnnualSalaryReview => "Annual Salary Review",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL.into_iter().find(|letter_type| letter_type.label() == label)
    }
}

impl fmt::Display for LetterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for letter_type in LetterType::ALL {
            assert_eq!(LetterType::from_label(letter_type.label()), Some(letter_type));
        }
    }

    #[test]
    fn test_unknown_label_is_none() {
        assert_eq!(LetterType::from_label("Termination Notice"), None);
        assert_eq!(LetterType::from_label(""), None);
        assert_eq!(LetterType::from_label("pension change"), None);
    }

    #[test]
    fn test_serde_matches_label() {
        let json = serde_json::to_string(&LetterType::PensionChange).unwrap();
        assert_eq!(json, "\"Pension Change\"");
    }
}
