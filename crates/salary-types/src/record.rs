//! Employee adjustment records and the render-ready view of them

use crate::error::TypeError;
use crate::identifier::Identifier;
use crate::letter_type::LetterType;
use crate::money::{Money, Percent};
use crate::schema::SchemaKind;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

const DANISH_MONTHS: [&str; 12] = [
    "januar", "februar", "marts", "april", "maj", "juni", "juli", "august", "september", "oktober",
    "november", "december",
];

/// Date a salary change takes effect, shown in Danish long form ("1. marts 2025")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EffectiveDate(NaiveDate);

impl EffectiveDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for EffectiveDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = DANISH_MONTHS[self.0.month0() as usize];
        write!(f, "{}. {} {}", self.0.day(), month, self.0.year())
    }
}

/// Salary figures derived from a base salary, a raise and a compensation factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryFigures {
    pub base_salary: Money,
    pub new_base_salary: Money,
    pub gross_salary: Money,
    pub new_gross_salary: Money,
    pub individual_adjustment: Money,
    pub percentage_increase: Percent,
    pub additional_comp_factor: f64,
}

impl SalaryFigures {
    /// Derive every dependent amount.
    ///
    /// The adjustment is rounded to the cent first and added exactly, so
    /// `new_base_salary - base_salary == individual_adjustment` always holds.
    pub fn compute(base_salary: Money, percentage_increase: Percent, additional_comp_factor: f64) -> Self {
        let individual_adjustment = base_salary.percent_of(percentage_increase);
        let new_base_salary = base_salary + individual_adjustment;

        Self {
            base_salary,
            new_base_salary,
            gross_salary: base_salary.scale(additional_comp_factor),
            new_gross_salary: new_base_salary.scale(additional_comp_factor),
            individual_adjustment,
            percentage_increase,
            additional_comp_factor,
        }
    }
}

/// One generated salary-adjustment record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub identifier: Identifier,
    pub first_name: String,
    pub last_name: String,
    pub employee_number: String,
    pub department: String,
    pub salary: SalaryFigures,
    pub effective_date: EffectiveDate,
    pub pension_increase: Percent,
    pub letter_type: LetterType,
    pub change_description: String,
    pub manager_name: String,
    pub additional_notes: String,
    pub document_type: String,
    pub case_number: String,
    pub security_level: String,
    pub letter_content: String,
}

impl EmployeeRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Display strings for the letter, exactly as they are written to the sheet
    pub fn letter_fields(&self) -> LetterFields {
        let salary = &self.salary;
        LetterFields {
            identifier: self.identifier.to_string(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            base_salary: salary.base_salary.to_string(),
            new_base_salary: salary.new_base_salary.to_string(),
            gross_salary: salary.gross_salary.to_string(),
            new_gross_salary: salary.new_gross_salary.to_string(),
            individual_adjustment: salary.individual_adjustment.to_string(),
            percentage_increase: salary.percentage_increase.to_string(),
            effective_date: self.effective_date.to_string(),
            pension_increase: self.pension_increase.to_string(),
            letter_type: Some(self.letter_type.label().to_string()),
        }
    }

    /// Cell values in header order for the given schema
    pub fn to_row(&self, schema: SchemaKind) -> Vec<String> {
        let fields = self.letter_fields();
        match schema {
            SchemaKind::Basic => vec![
                fields.identifier,
                fields.first_name,
                fields.last_name,
                fields.base_salary,
                fields.new_base_salary,
                fields.gross_salary,
                fields.new_gross_salary,
                fields.individual_adjustment,
                fields.percentage_increase,
                fields.effective_date,
                fields.pension_increase,
            ],
            SchemaKind::Extended => vec![
                fields.identifier,
                fields.first_name,
                fields.last_name,
                self.employee_number.clone(),
                self.department.clone(),
                fields.base_salary,
                fields.new_base_salary,
                fields.gross_salary,
                fields.new_gross_salary,
                fields.individual_adjustment,
                fields.percentage_increase,
                fields.effective_date,
                fields.pension_increase,
                self.letter_type.label().to_string(),
                self.change_description.clone(),
                self.manager_name.clone(),
                self.additional_notes.clone(),
                self.document_type.clone(),
                self.case_number.clone(),
                self.security_level.clone(),
                self.letter_content.clone(),
            ],
        }
    }
}

/// Pre-formatted fields of one letter.
///
/// This is what the composer and the document renderer consume; on the
/// rendering path it is rebuilt from spreadsheet text, never from a live
/// `EmployeeRecord`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterFields {
    pub identifier: String,
    pub first_name: String,
    pub last_name: String,
    pub base_salary: String,
    pub new_base_salary: String,
    pub gross_salary: String,
    pub new_gross_salary: String,
    pub individual_adjustment: String,
    pub percentage_increase: String,
    pub effective_date: String,
    pub pension_increase: String,
    pub letter_type: Option<String>,
}

impl LetterFields {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Rebuild the fields from one data row laid out as `schema`
    pub fn from_row<S: AsRef<str>>(row: &[S], schema: SchemaKind) -> Result<Self, TypeError> {
        let found = populated_width(row);
        let required = schema.min_populated_columns();
        if found < required {
            return Err(TypeError::RowTooShort { required, found });
        }

        let columns = schema.render_columns();
        let cell = |index: usize| row.get(index).map(|c| c.as_ref().to_string()).unwrap_or_default();

        Ok(Self {
            identifier: cell(columns.identifier),
            first_name: cell(columns.first_name),
            last_name: cell(columns.last_name),
            base_salary: cell(columns.base_salary),
            new_base_salary: cell(columns.new_base_salary),
            gross_salary: cell(columns.gross_salary),
            new_gross_salary: cell(columns.new_gross_salary),
            individual_adjustment: cell(columns.individual_adjustment),
            percentage_increase: cell(columns.percentage_increase),
            effective_date: cell(columns.effective_date),
            pension_increase: cell(columns.pension_increase),
            letter_type: columns.letter_type.map(cell).filter(|label| !label.is_empty()),
        })
    }
}

/// Width of a row up to and including its last non-blank cell
fn populated_width<S: AsRef<str>>(row: &[S]) -> usize {
    row.iter()
        .rposition(|cell| !cell.as_ref().trim().is_empty())
        .map_or(0, |last| last + 1)
}
