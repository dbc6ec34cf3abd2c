//! Client modules for the spreadsheet and PDF backends

pub mod letter_layout;
pub mod pdf;
pub mod text_metrics;
pub mod xlsx;

// Re-export all client types
pub use letter_layout::{layout_letter, LetterLayout};
pub use pdf::PdfLetterRenderer;
pub use xlsx::{XlsxSink, XlsxSource};
