//! Salary Letters Core Library
//!
//! Synthetic salary-adjustment records, their spreadsheet storage and the
//! personalised PDF letters rendered from them.

pub mod clients;
pub mod config;
pub mod constants;
pub mod error;
pub mod paths;
pub mod services;
pub mod workflow;

// Re-export main types for easy access
pub use config::SalaryLettersConfig;
pub use error::{Result, SalaryError};

pub use clients::{PdfLetterRenderer, XlsxSink, XlsxSource};

pub use services::{LetterComposer, RecordGenerator, ValuePools};

pub use workflow::{
    generate_spreadsheet,
    render_spreadsheet,
    DispatchOptions,
    DispatchSummary,
    DocumentRenderer,
    RenderDispatcher,
    TabularSink,
    TabularSource,
};
