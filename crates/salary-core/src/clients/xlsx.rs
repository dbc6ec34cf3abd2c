//! Spreadsheet sink and source for `.xlsx` workbooks
//!
//! Writing goes through rust_xlsxwriter, reading through calamine. Cells are
//! always strings; amounts keep their two-decimal text form.

use crate::constants::SHEET_NAME;
use crate::error::{Result, SalaryError};
use crate::workflow::traits::{TabularSink, TabularSource};
use calamine::{open_workbook_auto, Data, Reader};
use rust_xlsxwriter::{Workbook, Worksheet};
use salary_types::column_letter;
use std::path::{Path, PathBuf};

const DEFAULT_COLUMN_WIDTH: f64 = 18.0;
const WIDE_COLUMN_WIDTH: f64 = 40.0;
const CONTENT_COLUMN_WIDTH: f64 = 80.0;

/// Column width by header label
pub fn column_width(header: &str) -> f64 {
    match header {
        "LetterContent" => CONTENT_COLUMN_WIDTH,
        "ChangeDescription" | "AdditionalNotes" => WIDE_COLUMN_WIDTH,
        _ => DEFAULT_COLUMN_WIDTH,
    }
}

pub struct XlsxSink {
    path: PathBuf,
    sheet_name: String,
}

impl XlsxSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet_name: SHEET_NAME.to_string(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TabularSink for XlsxSink {
    fn write_rows(&self, headers: &[&str], rows: &[Vec<String>]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(self.sheet_name.as_str())
            .map_err(|e| SalaryError::Spreadsheet(format!("Invalid sheet name '{}': {}", self.sheet_name, e)))?;

        for (col, header) in headers.iter().enumerate() {
            write_cell(worksheet, 0, col, header)?;
            worksheet
                .set_column_width(to_column(col)?, column_width(header))
                .map_err(|e| SalaryError::Spreadsheet(format!("Failed to size column {}: {}", column_letter(col), e)))?;
        }

        for (index, row) in rows.iter().enumerate() {
            for (col, value) in row.iter().enumerate() {
                write_cell(worksheet, index + 1, col, value)?;
            }
        }

        workbook.save(&self.path).map_err(|e| {
            SalaryError::Spreadsheet(format!("Failed to save {}: {}", self.path.display(), e))
        })?;

        log::info!(
            "Wrote {} rows x {} columns to {}",
            rows.len(),
            headers.len(),
            self.path.display()
        );
        Ok(())
    }
}

fn to_column(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| SalaryError::Spreadsheet(format!("Column index {} out of range", col)))
}

fn write_cell(worksheet: &mut Worksheet, row: usize, col: usize, value: &str) -> Result<()> {
    let row_num = u32::try_from(row)
        .map_err(|_| SalaryError::Spreadsheet(format!("Row index {} out of range", row)))?;

    worksheet
        .write_string(row_num, to_column(col)?, value)
        .map_err(|e| {
            SalaryError::Spreadsheet(format!("Failed to write cell {}{}: {}", column_letter(col), row + 1, e))
        })?;
    Ok(())
}

pub struct XlsxSource {
    path: PathBuf,
    sheet_name: String,
}

impl XlsxSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            sheet_name: SHEET_NAME.to_string(),
        }
    }
}

impl TabularSource for XlsxSource {
    fn read_rows(&self) -> Result<Vec<Vec<String>>> {
        let mut workbook = open_workbook_auto(&self.path).map_err(|e| {
            SalaryError::Spreadsheet(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let range = workbook.worksheet_range(&self.sheet_name).map_err(|e| {
            SalaryError::Spreadsheet(format!("Failed to read sheet '{}': {}", self.sheet_name, e))
        })?;

        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(cell_text).collect())
            .collect();

        log::debug!("Read {} rows from {}", rows.len(), self.path.display());
        Ok(rows)
    }
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        other => other.to_string(),
    }
}
