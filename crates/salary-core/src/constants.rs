/// Pipeline tuning constants and fixed letter texts

/// Records generated per batch when nothing else is configured
pub const DEFAULT_ROW_COUNT: usize = 3000;

/// Identifier draws allowed per record before generation gives up
pub const DEFAULT_MAX_IDENTIFIER_ATTEMPTS: u32 = 10_000;

/// Concurrent render workers
pub const DEFAULT_WORKER_COUNT: usize = 8;

/// Records buffered between the row reader and the workers
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Log a progress line every this many records
pub const DEFAULT_PROGRESS_INTERVAL: usize = 100;

pub const DEFAULT_SPREADSHEET_FILE: &str = "dsb-mock-data-excel.xlsx";
pub const DEFAULT_OUTPUT_DIR: &str = "output_pdfs";
pub const SHEET_NAME: &str = "Sheet1";

pub const DEFAULT_SENDER: &str = "HR Services & Compensation";
pub const DEFAULT_CREATOR: &str = "DSB Salary Regulation System";

/// Title of the rendered letter, also the prefix of every output file name
pub const LETTER_TITLE: &str = "Lønregulering 2025";
pub const LETTER_KEYWORDS: &str = "lønregulering salary 2025";

/// Placeholder stored when a letter type has no template
pub const CONTENT_UNAVAILABLE: &str = "Letter content not available";
