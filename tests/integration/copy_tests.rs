//! End-to-end tests for COPY INTO generation

use pretty_assertions::assert_eq;

use snowgen::{
    CommandEntity, CopyIntoCommand, CopyIntoSpec, OptionValue, RawOptions, SnowGenError,
    TracingObserver,
};

use crate::common::RecordingExecutor;

fn raw(pairs: &[(&str, OptionValue)]) -> RawOptions {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn target() -> CommandEntity {
    CommandEntity::named("MY_DB", "PUBLIC", "test").unwrap()
}

#[test]
fn test_copy_with_files_and_options() {
    let executor = RecordingExecutor::new();
    let command = CopyIntoCommand::new(
        target(),
        CopyIntoSpec {
            source: "@my_stage".to_string(),
            files: vec!["a.csv".to_string(), "b.csv".to_string()],
            file_format: Some("(FORMAT_NAME = 'my_fmt')".to_string()),
            copy_options: raw(&[
                ("on_error", "CONTINUE".into()),
                ("purge", true.into()),
                ("size_limit", 1000i64.into()),
            ]),
            ..Default::default()
        },
        &executor,
        &TracingObserver,
    )
    .unwrap();

    command.run().unwrap();

    assert_eq!(
        executor.statements(),
        vec![
            "COPY INTO MY_DB.PUBLIC.test\n\
             FROM @my_stage\n\
             FILES = ('a.csv', 'b.csv')\n\
             FILE_FORMAT = (FORMAT_NAME = 'my_fmt')\n\
             ON_ERROR = 'CONTINUE'\n\
             PURGE = TRUE\n\
             SIZE_LIMIT = 1000"
        ]
    );
}

#[test]
fn test_files_take_precedence_over_pattern() {
    let executor = RecordingExecutor::new();
    let command = CopyIntoCommand::new(
        target(),
        CopyIntoSpec {
            source: "@my_stage".to_string(),
            files: vec!["a.csv".to_string()],
            pattern: Some(r".*\.csv".to_string()),
            ..Default::default()
        },
        &executor,
        &TracingObserver,
    )
    .unwrap();

    let statement = command.statement_text();
    assert!(statement.contains("FILES = ('a.csv')"));
    assert!(!statement.contains("PATTERN"));
}

#[test]
fn test_pattern_used_when_no_files() {
    let executor = RecordingExecutor::new();
    let command = CopyIntoCommand::new(
        target(),
        CopyIntoSpec {
            source: "@my_stage".to_string(),
            pattern: Some(r".*\.csv".to_string()),
            ..Default::default()
        },
        &executor,
        &TracingObserver,
    )
    .unwrap();

    assert_eq!(
        command.statement_text(),
        "COPY INTO MY_DB.PUBLIC.test\nFROM @my_stage\nPATTERN = '.*\\.csv'"
    );
}

#[test]
fn test_minimal_copy_statement() {
    let executor = RecordingExecutor::new();
    let command = CopyIntoCommand::new(
        target(),
        CopyIntoSpec {
            source: " @my_stage ".to_string(),
            ..Default::default()
        },
        &executor,
        &TracingObserver,
    )
    .unwrap();

    assert_eq!(
        command.statement_text(),
        "COPY INTO MY_DB.PUBLIC.test\nFROM @my_stage"
    );
}

#[test]
fn test_empty_source_rejected() {
    let executor = RecordingExecutor::new();
    let err = CopyIntoCommand::new(
        target(),
        CopyIntoSpec {
            source: "  ".to_string(),
            ..Default::default()
        },
        &executor,
        &TracingObserver,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        SnowGenError::EmptyIdentifier { field: "source" }
    ));
}

#[test]
fn test_generic_options_accept_no_keys() {
    let executor = RecordingExecutor::new();
    let err = CopyIntoCommand::new(
        target(),
        CopyIntoSpec {
            source: "@my_stage".to_string(),
            options: raw(&[("on_error", "CONTINUE".into())]),
            ..Default::default()
        },
        &executor,
        &TracingObserver,
    )
    .unwrap_err();

    match err {
        SnowGenError::UnknownOption { key, .. } => assert_eq!(key, "on_error"),
        other => panic!("Expected UnknownOption, got {other:?}"),
    }
}

#[test]
fn test_invalid_copy_option_fails_before_execution() {
    let executor = RecordingExecutor::new();
    let err = CopyIntoCommand::new(
        target(),
        CopyIntoSpec {
            source: "@my_stage".to_string(),
            copy_options: raw(&[("purge", "yes".into())]),
            ..Default::default()
        },
        &executor,
        &TracingObserver,
    )
    .unwrap_err();

    assert!(matches!(err, SnowGenError::InvalidOptionType { .. }));
    assert!(executor.statements().is_empty());
}
