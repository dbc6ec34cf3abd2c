//! End-to-end pipelines: generate a spreadsheet, render a spreadsheet

use super::dispatcher::{DispatchOptions, DispatchSummary, RenderDispatcher};
use super::traits::{DocumentRenderer, TabularSink, TabularSource};
use crate::clients::{PdfLetterRenderer, XlsxSink, XlsxSource};
use crate::config::SalaryLettersConfig;
use crate::error::{Result, SalaryError};
use crate::services::{LetterComposer, RecordGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use salary_types::{EmployeeRecord, LetterFields, SchemaKind};
use std::path::Path;
use std::sync::Arc;

/// Generate `generation.row_count` records and write them to `path`.
///
/// Returns the number of records written.
pub fn generate_spreadsheet(config: &SalaryLettersConfig, path: &Path) -> Result<usize> {
    let generation = &config.generation;

    let rng = match generation.seed {
        Some(seed) => {
            log::info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let composer = LetterComposer::new(config.letter.sender.clone());
    let mut generator = RecordGenerator::new(rng, composer)
        .with_max_identifier_attempts(generation.max_identifier_attempts);

    log::info!(
        "Generating {} records with the {} schema",
        generation.row_count,
        generation.schema
    );

    let interval = generation.progress_interval.max(1);
    let records = generator.generate_batch_with_progress(generation.row_count, |done| {
        if done % interval == 0 {
            log::info!("Generated {} rows...", done);
        }
    })?;

    write_records(&XlsxSink::new(path), &records, generation.schema)?;

    log::info!(
        "Successfully generated {} with {} rows of mock data",
        path.display(),
        records.len()
    );
    Ok(records.len())
}

/// Write records under the header row of `schema`
pub fn write_records<S: TabularSink>(sink: &S, records: &[EmployeeRecord], schema: SchemaKind) -> Result<()> {
    let rows: Vec<Vec<String>> = records.iter().map(|record| record.to_row(schema)).collect();
    sink.write_rows(schema.headers(), &rows)
}

/// Read display-ready records from a sheet whose first row is the header.
///
/// The schema is detected from the header; rows with too few populated
/// columns are skipped with a warning.
pub fn read_letter_fields<S: TabularSource>(source: &S) -> Result<Vec<LetterFields>> {
    let rows = source.read_rows()?;
    let Some((header, body)) = rows.split_first() else {
        log::warn!("Spreadsheet is empty, nothing to render");
        return Ok(Vec::new());
    };

    let schema = SchemaKind::detect(header);
    log::info!("Detected {} schema with {} data rows", schema, body.len());

    let mut records = Vec::with_capacity(body.len());
    for (index, row) in body.iter().enumerate() {
        match LetterFields::from_row(row, schema) {
            Ok(fields) => records.push(fields),
            // +2: one-based rows below the header
            Err(e) => log::warn!("Skipping row {}: {}", index + 2, e),
        }
    }

    if records.len() < body.len() {
        log::warn!("Skipped {} malformed rows", body.len() - records.len());
    }
    Ok(records)
}

/// Render every readable row of `source` with `renderer`
pub async fn render_rows<S, R>(
    source: S,
    renderer: Arc<R>,
    options: DispatchOptions,
    output_dir: &Path,
) -> Result<DispatchSummary>
where
    S: TabularSource + Send + 'static,
    R: DocumentRenderer + 'static,
{
    let records = tokio::task::spawn_blocking(move || read_letter_fields(&source))
        .await
        .map_err(|e| SalaryError::Spreadsheet(format!("Spreadsheet reader failed: {}", e)))??;

    RenderDispatcher::new(renderer, options)
        .dispatch_all(records, output_dir)
        .await
}

/// Render the letters of the spreadsheet at `input` into `output_dir` as PDFs
pub async fn render_spreadsheet(
    config: &SalaryLettersConfig,
    input: &Path,
    output_dir: &Path,
    limit: usize,
) -> Result<DispatchSummary> {
    let options = DispatchOptions {
        limit,
        ..DispatchOptions::from(&config.rendering)
    };
    let renderer = Arc::new(PdfLetterRenderer::new(&config.letter));

    log::info!("Reading letters from {}", input.display());
    render_rows(XlsxSource::new(input), renderer, options, output_dir).await
}
