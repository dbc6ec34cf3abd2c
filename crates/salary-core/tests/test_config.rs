use salary_core::config::SalaryLettersConfig;
use salary_core::SalaryError;
use salary_types::SchemaKind;
use std::path::PathBuf;

#[test]
fn test_parse_full_config_json() {
    let json = r#"{
        "generation": {
            "row_count": 2000,
            "seed": 42,
            "max_identifier_attempts": 50,
            "schema": "basic",
            "output_file": "mock.xlsx",
            "progress_interval": 250
        },
        "rendering": {
            "worker_count": 4,
            "queue_capacity": 16,
            "progress_interval": 10,
            "limit": 25,
            "input_file": "mock.xlsx",
            "output_dir": "letters"
        },
        "letter": {
            "sender": "Lønservice",
            "creator": "Test Suite"
        }
    }"#;

    let config = SalaryLettersConfig::from_json_str(json).expect("Failed to parse config");

    assert_eq!(config.generation.row_count, 2000);
    assert_eq!(config.generation.seed, Some(42));
    assert_eq!(config.generation.max_identifier_attempts, 50);
    assert_eq!(config.generation.schema, SchemaKind::Basic);
    assert_eq!(config.generation.output_file, PathBuf::from("mock.xlsx"));
    assert_eq!(config.generation.progress_interval, 250);

    assert_eq!(config.rendering.worker_count, 4);
    assert_eq!(config.rendering.queue_capacity, 16);
    assert_eq!(config.rendering.limit, 25);
    assert_eq!(config.rendering.output_dir, PathBuf::from("letters"));

    assert_eq!(config.letter.sender, "Lønservice");
    assert_eq!(config.letter.creator, "Test Suite");
}

#[test]
fn test_parse_minimal_config() {
    let config = SalaryLettersConfig::from_json_str("{}").expect("Empty config should use defaults");

    assert_eq!(config.generation.row_count, 3000);
    assert_eq!(config.generation.seed, None);
    assert_eq!(config.generation.schema, SchemaKind::Extended, "Extended schema is the default");
    assert_eq!(config.generation.output_file, PathBuf::from("dsb-mock-data-excel.xlsx"));
    assert_eq!(config.rendering.worker_count, 8);
    assert_eq!(config.rendering.queue_capacity, 100);
    assert_eq!(config.rendering.limit, 0, "Limit 0 renders every row");
    assert_eq!(config.rendering.output_dir, PathBuf::from("output_pdfs"));
    assert_eq!(config.letter.sender, "HR Services & Compensation");
    assert_eq!(config.letter.creator, "DSB Salary Regulation System");
}

#[test]
fn test_short_aliases() {
    let json = r#"{ "generation": { "rows": 10 }, "rendering": { "workers": 2 } }"#;
    let config = SalaryLettersConfig::from_json_str(json).unwrap();

    assert_eq!(config.generation.row_count, 10);
    assert_eq!(config.rendering.worker_count, 2);
}

#[test]
fn test_validation_rejects_bad_values() {
    let cases = [
        r#"{ "generation": { "row_count": 0 } }"#,
        r#"{ "generation": { "row_count": 200000000 } }"#,
        r#"{ "generation": { "max_identifier_attempts": 0 } }"#,
        r#"{ "rendering": { "worker_count": 0 } }"#,
        r#"{ "rendering": { "queue_capacity": 0 } }"#,
        r#"{ "rendering": { "progress_interval": 0 } }"#,
        r#"{ "letter": { "sender": "   " } }"#,
    ];

    for json in cases {
        let err = SalaryLettersConfig::from_json_str(json).unwrap_err();
        assert!(matches!(err, SalaryError::Config(_)), "{} should be rejected, got {:?}", json, err);
    }
}

#[test]
fn test_malformed_json_is_config_error() {
    let err = SalaryLettersConfig::from_json_str("{ not json").unwrap_err();
    assert!(matches!(err, SalaryError::Config(_)));

    let err = SalaryLettersConfig::from_json_str(r#"{ "generation": { "schema": "wide" } }"#).unwrap_err();
    assert!(matches!(err, SalaryError::Config(_)));
}

#[test]
fn test_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("salary.json");
    std::fs::write(&path, r#"{ "generation": { "seed": 7 } }"#).unwrap();

    let config = SalaryLettersConfig::from_file(&path).unwrap();
    assert_eq!(config.generation.seed, Some(7));

    let err = SalaryLettersConfig::from_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, SalaryError::Config(_)));
}

#[test]
fn test_load_layers_file_and_environment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("salary.toml");
    std::fs::write(
        &path,
        r#"
[generation]
row_count = 500
schema = "basic"

[letter]
sender = "Lønservice"
"#,
    )
    .unwrap();

    std::env::set_var("SALARY_LETTERS__RENDERING__WORKER_COUNT", "3");
    let loaded = SalaryLettersConfig::load(Some(&path));
    std::env::remove_var("SALARY_LETTERS__RENDERING__WORKER_COUNT");
    let config = loaded.unwrap();

    assert_eq!(config.generation.row_count, 500);
    assert_eq!(config.generation.schema, SchemaKind::Basic);
    assert_eq!(config.letter.sender, "Lønservice");
    assert_eq!(config.rendering.worker_count, 3, "Environment overrides defaults");
    assert_eq!(config.rendering.queue_capacity, 100);
}

#[test]
fn test_load_without_file_uses_defaults() {
    let config = SalaryLettersConfig::load(None).unwrap();
    assert_eq!(config.generation.row_count, 3000);
    assert_eq!(config.letter.creator, "DSB Salary Regulation System");
}
