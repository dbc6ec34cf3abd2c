//! Shared types for the salary letter pipeline
//!
//! Everything that crosses a stage boundary lives here: the generated
//! employee record, the string-typed fields the renderer consumes, and the
//! spreadsheet schemas both sides agree on.

pub mod error;
pub mod identifier;
pub mod letter_type;
pub mod money;
pub mod record;
pub mod schema;

pub use error::TypeError;
pub use identifier::{Identifier, IDENTIFIER_SPACE};
pub use letter_type::LetterType;
pub use money::{Money, Percent};
pub use record::{EffectiveDate, EmployeeRecord, LetterFields, SalaryFigures};
pub use schema::{column_letter, SchemaKind, BASIC_HEADERS, EXTENDED_HEADERS};
