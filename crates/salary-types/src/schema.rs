//! Spreadsheet layouts shared by the writer and the reader

use crate::error::TypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Header row of the legacy eleven-column sheet
pub const BASIC_HEADERS: [&str; 11] = [
    "Identifier",
    "FirstName",
    "LastName",
    "BaseSalary",
    "NewBaseSalary",
    "GrossSalary",
    "NewGrossSalary",
    "IndividualAdjustment",
    "PercentageIncrease",
    "EffectiveDate",
    "PensionIncrease",
];

/// Header row of the full sheet, including the case-handling columns
pub const EXTENDED_HEADERS: [&str; 21] = [
    "Identifier",
    "FirstName",
    "LastName",
    "EmployeeNumber",
    "Department",
    "BaseSalary",
    "NewBaseSalary",
    "GrossSalary",
    "NewGrossSalary",
    "IndividualAdjustment",
    "PercentageIncrease",
    "EffectiveDate",
    "PensionIncrease",
    "LetterType",
    "ChangeDescription",
    "ManagerName",
    "AdditionalNotes",
    "DocumentType",
    "CaseNumber",
    "SecurityLevel",
    "LetterContent",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    Basic,
    #[default]
    Extended,
}

/// Positions of the columns the renderer reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderColumns {
    pub identifier: usize,
    pub first_name: usize,
    pub last_name: usize,
    pub base_salary: usize,
    pub new_base_salary: usize,
    pub gross_salary: usize,
    pub new_gross_salary: usize,
    pub individual_adjustment: usize,
    pub percentage_increase: usize,
    pub effective_date: usize,
    pub pension_increase: usize,
    pub letter_type: Option<usize>,
}

impl SchemaKind {
    pub fn headers(self) -> &'static [&'static str] {
        match self {
            SchemaKind::Basic => &BASIC_HEADERS,
            SchemaKind::Extended => &EXTENDED_HEADERS,
        }
    }

    /// Fewest populated columns a row needs before it can be rendered
    pub fn min_populated_columns(self) -> usize {
        self.render_columns().pension_increase + 1
    }

    /// Pick the schema from a header row. Anything that is not the extended
    /// layout is read as the basic one.
    pub fn detect<S: AsRef<str>>(header: &[S]) -> Self {
        match header.get(3) {
            Some(label) if label.as_ref().trim() == EXTENDED_HEADERS[3] => SchemaKind::Extended,
            _ => SchemaKind::Basic,
        }
    }

    pub fn render_columns(self) -> RenderColumns {
        match self {
            SchemaKind::Basic => RenderColumns {
                identifier: 0,
                first_name: 1,
                last_name: 2,
                base_salary: 3,
                new_base_salary: 4,
                gross_salary: 5,
                new_gross_salary: 6,
                individual_adjustment: 7,
                percentage_increase: 8,
                effective_date: 9,
                pension_increase: 10,
                letter_type: None,
            },
            SchemaKind::Extended => RenderColumns {
                identifier: 0,
                first_name: 1,
                last_name: 2,
                base_salary: 5,
                new_base_salary: 6,
                gross_salary: 7,
                new_gross_salary: 8,
                individual_adjustment: 9,
                percentage_increase: 10,
                effective_date: 11,
                pension_increase: 12,
                letter_type: Some(13),
            },
        }
    }
}

impl FromStr for SchemaKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(SchemaKind::Basic),
            "extended" => Ok(SchemaKind::Extended),
            other => Err(TypeError::UnknownSchema(other.to_string())),
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaKind::Basic => write!(f, "basic"),
            SchemaKind::Extended => write!(f, "extended"),
        }
    }
}

/// Spreadsheet column name for a zero-based index: 0 -> A, 25 -> Z, 26 -> AA
pub fn column_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut remaining = index + 1;
    while remaining > 0 {
        let digit = (remaining - 1) % 26;
        letters.push(b'A' + digit as u8);
        remaining = (remaining - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}
