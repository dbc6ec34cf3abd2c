//! Command line plumbing shared by `excel-gen` and `pdf-gen`
//!
//! Configuration is resolved in three layers: built-in defaults, the optional
//! `--config` file together with `SALARY_LETTERS__*` variables, then flags.

use anyhow::Context;
use clap::{value_parser, Arg, ArgMatches, Command};
use salary_core::SalaryLettersConfig;
use salary_types::SchemaKind;
use std::path::{Path, PathBuf};

/// Initialize logging with INFO as default if RUST_LOG not set
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn config_arg() -> Arg {
    Arg::new("config")
        .long("config")
        .short('c')
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Configuration file (JSON, TOML or YAML)")
}

pub fn excel_gen_command() -> Command {
    Command::new("excel-gen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate a spreadsheet of synthetic salary adjustment records")
        .arg(config_arg())
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Spreadsheet to write"),
        )
        .arg(
            Arg::new("rows")
                .long("rows")
                .short('n')
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Number of records to generate"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .value_parser(value_parser!(u64))
                .help("Seed for reproducible output"),
        )
        .arg(
            Arg::new("schema")
                .long("schema")
                .value_name("SCHEMA")
                .value_parser(["basic", "extended"])
                .help("Column layout of the sheet"),
        )
}

pub fn pdf_gen_command() -> Command {
    Command::new("pdf-gen")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render one PDF letter per spreadsheet row")
        .arg(config_arg())
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Spreadsheet to read"),
        )
        .arg(
            Arg::new("output-dir")
                .long("output-dir")
                .short('o')
                .value_name("DIR")
                .value_parser(value_parser!(PathBuf))
                .help("Directory for the rendered letters"),
        )
        .arg(
            Arg::new("limit")
                .long("limit")
                .short('l')
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Render at most N letters (0 renders all)"),
        )
        .arg(
            Arg::new("workers")
                .long("workers")
                .short('w')
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Concurrent render workers"),
        )
}

/// Load defaults, the `--config` file and environment overrides
pub fn load_config(matches: &ArgMatches) -> anyhow::Result<SalaryLettersConfig> {
    let path = matches.get_one::<PathBuf>("config").map(PathBuf::as_path);
    let config = SalaryLettersConfig::load(path).with_context(|| match path {
        Some(path) => format!("Failed to load configuration from {}", path.display()),
        None => "Failed to load configuration".to_string(),
    })?;

    if let Some(path) = path {
        log::info!("Loaded configuration from {}", path.display());
    }
    Ok(config)
}

/// Apply `excel-gen` flags on top of `config`
pub fn apply_generation_args(config: &mut SalaryLettersConfig, matches: &ArgMatches) -> anyhow::Result<()> {
    let generation = &mut config.generation;

    if let Some(output) = matches.get_one::<PathBuf>("output") {
        generation.output_file = output.clone();
    }
    if let Some(rows) = matches.get_one::<usize>("rows") {
        generation.row_count = *rows;
    }
    if let Some(seed) = matches.get_one::<u64>("seed") {
        generation.seed = Some(*seed);
    }
    if let Some(schema) = matches.get_one::<String>("schema") {
        generation.schema = schema
            .parse::<SchemaKind>()
            .with_context(|| format!("Invalid schema '{}'", schema))?;
    }

    config.validate().context("Invalid generation settings")?;
    Ok(())
}

/// Apply `pdf-gen` flags on top of `config`
pub fn apply_rendering_args(config: &mut SalaryLettersConfig, matches: &ArgMatches) -> anyhow::Result<()> {
    let rendering = &mut config.rendering;

    if let Some(input) = matches.get_one::<PathBuf>("input") {
        rendering.input_file = input.clone();
    }
    if let Some(output_dir) = matches.get_one::<PathBuf>("output-dir") {
        rendering.output_dir = output_dir.clone();
    }
    if let Some(limit) = matches.get_one::<usize>("limit") {
        rendering.limit = *limit;
    }
    if let Some(workers) = matches.get_one::<usize>("workers") {
        rendering.worker_count = *workers;
    }

    config.validate().context("Invalid rendering settings")?;
    Ok(())
}

/// Human readable size of a file, for the final log line
pub fn describe_file_size(path: &Path) -> String {
    match std::fs::metadata(path) {
        Ok(metadata) => format!("{:.2} MB", metadata.len() as f64 / (1024.0 * 1024.0)),
        Err(_) => "unknown size".to_string(),
    }
}
