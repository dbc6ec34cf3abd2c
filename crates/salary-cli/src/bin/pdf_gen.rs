//! Renders one salary regulation letter per spreadsheet row

use anyhow::Context;
use salary_cli::{apply_rendering_args, init_logging, load_config, pdf_gen_command};
use salary_core::render_spreadsheet;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let matches = pdf_gen_command().get_matches();
    let mut config = load_config(&matches)?;
    apply_rendering_args(&mut config, &matches)?;

    let rendering = config.rendering.clone();
    let summary = render_spreadsheet(&config, &rendering.input_file, &rendering.output_dir, rendering.limit)
        .await
        .with_context(|| format!("Failed to render letters from {}", rendering.input_file.display()))?;

    if summary.failed > 0 {
        log::warn!("{} of {} letters could not be rendered", summary.failed, summary.queued);
    }
    Ok(())
}
