//! Seams between the pipeline stages and their I/O backends

use crate::error::Result;
use salary_types::LetterFields;

/// Persists a batch of string rows under a header row
///
/// Every value is written as text, so a `TabularSource` reading the same
/// file hands back exactly the strings that went in.
pub trait TabularSink {
    fn write_rows(&self, headers: &[&str], rows: &[Vec<String>]) -> Result<()>;
}

/// Reads every row of a sheet, header row included, as strings
pub trait TabularSource {
    fn read_rows(&self) -> Result<Vec<Vec<String>>>;
}

/// Turns one display-ready record into a finished document
///
/// Implementations are called from several workers at once and must not
/// depend on any other record.
pub trait DocumentRenderer: Send + Sync {
    fn render(&self, fields: &LetterFields) -> Result<Vec<u8>>;
}
