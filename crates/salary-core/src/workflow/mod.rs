//! Pipeline stages and the concurrent render dispatcher

pub mod dispatcher;
pub mod pipeline;
pub mod traits;

pub use dispatcher::{DispatchOptions, DispatchSummary, RenderDispatcher};
pub use pipeline::{generate_spreadsheet, read_letter_fields, render_rows, render_spreadsheet, write_records};
pub use traits::{DocumentRenderer, TabularSink, TabularSource};
