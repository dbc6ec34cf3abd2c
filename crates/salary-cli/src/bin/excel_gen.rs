//! Synthetic salary adjustment spreadsheet generator

use anyhow::Context;
use salary_cli::{apply_generation_args, describe_file_size, excel_gen_command, init_logging, load_config};
use salary_core::generate_spreadsheet;

fn main() -> anyhow::Result<()> {
    init_logging();

    let matches = excel_gen_command().get_matches();
    let mut config = load_config(&matches)?;
    apply_generation_args(&mut config, &matches)?;

    let output = config.generation.output_file.clone();
    let rows = generate_spreadsheet(&config, &output)
        .with_context(|| format!("Failed to generate {}", output.display()))?;

    log::info!(
        "Wrote {} records to {} ({})",
        rows,
        output.display(),
        describe_file_size(&output)
    );
    Ok(())
}
