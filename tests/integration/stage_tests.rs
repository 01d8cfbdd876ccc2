//! End-to-end tests for CREATE STAGE generation

use pretty_assertions::assert_eq;

use snowgen::{
    AwsEncryption, AwsStageParams, AzureEncryption, AzureStageParams, CommandEntity,
    DirectoryTableParams, InternalEncryption, InternalStageParams, SnowGenError, StageCommand,
    StageKind, StageVariant, TracingObserver, VariantParams,
};

use crate::common::RecordingExecutor;

fn entity(name: &str) -> CommandEntity {
    CommandEntity::named("MY_DB", "PUBLIC", name).unwrap()
}

#[test]
fn test_internal_stage_with_encryption() {
    let executor = RecordingExecutor::new();
    let command = StageCommand::new(
        entity("my_internal"),
        StageVariant::Internal(InternalStageParams {
            encryption: Some(InternalEncryption::SnowflakeSse),
        }),
        &executor,
        &TracingObserver,
    )
    .unwrap();

    assert_eq!(
        command.statement_text(),
        "CREATE STAGE MY_DB.PUBLIC.my_internal\nENCRYPTION = 'SNOWFLAKE_SSE'"
    );
}

#[test]
fn test_internal_stage_without_params_renders_bare() {
    let executor = RecordingExecutor::new();
    let variant = StageVariant::from_parts(StageKind::Internal, VariantParams::default()).unwrap();
    let command =
        StageCommand::new(entity("plain"), variant, &executor, &TracingObserver).unwrap();

    assert_eq!(command.statement_text(), "CREATE STAGE MY_DB.PUBLIC.plain");
}

#[test]
fn test_aws_stage_full_statement() {
    let executor = RecordingExecutor::new();
    let mut params = AwsStageParams::new("s3://my-bucket/data");
    params.storage_integration = Some("MY_INTEGRATION".to_string());
    params.encryption = Some(AwsEncryption::SseS3);
    params.master_key = Some("MY_MASTER_KEY".to_string());
    params.kms_key_id = Some("MY_KMS_KEY_ID".to_string());
    params.use_privatelink_endpoint = true;

    let command = StageCommand::new(
        entity("my_aws_stage"),
        StageVariant::Aws(params),
        &executor,
        &TracingObserver,
    )
    .unwrap()
    .with_file_format("CSV")
    .with_comment("AWS external stage for loading data");

    command.create().unwrap();

    assert_eq!(
        executor.statements(),
        vec![
            "CREATE STAGE MY_DB.PUBLIC.my_aws_stage\n\
             URL = 's3://my-bucket/data'\n\
             STORAGE_INTEGRATION = 'MY_INTEGRATION'\n\
             ENCRYPTION_TYPE = 'AWS_SSE_S3'\n\
             MASTER_KEY = 'MY_MASTER_KEY'\n\
             KMS_KEY_ID = 'MY_KMS_KEY_ID'\n\
             USE_PRIVATELINK_ENDPOINT = TRUE\n\
             FILE_FORMAT = 'CSV'\n\
             COMMENT = 'AWS external stage for loading data'"
        ]
    );
}

#[test]
fn test_privatelink_flag_omitted_when_false() {
    let executor = RecordingExecutor::new();
    let command = StageCommand::new(
        entity("my_aws_stage"),
        StageVariant::Aws(AwsStageParams::new("s3://bucket")),
        &executor,
        &TracingObserver,
    )
    .unwrap();

    let statement = command.statement_text();
    assert!(!statement.contains("USE_PRIVATELINK_ENDPOINT"));
}

#[test]
fn test_azure_stage_with_sas_token() {
    let executor = RecordingExecutor::new();
    let mut params = AzureStageParams::new("azure://account.blob.core.windows.net/container");
    params.sas_token = Some("?sv=token".to_string());
    params.encryption = Some(AzureEncryption::None);

    let command = StageCommand::new(
        entity("my_azure"),
        StageVariant::Azure(params),
        &executor,
        &TracingObserver,
    )
    .unwrap();

    assert_eq!(
        command.statement_text(),
        "CREATE STAGE MY_DB.PUBLIC.my_azure\n\
         URL = 'azure://account.blob.core.windows.net/container'\n\
         AZURE_SAS_TOKEN = '?sv=token'\n\
         ENCRYPTION_TYPE = 'NONE'"
    );
}

#[test]
fn test_directory_table_fragments() {
    let executor = RecordingExecutor::new();
    let command = StageCommand::new(
        entity("dir_stage"),
        StageVariant::Internal(InternalStageParams::default()),
        &executor,
        &TracingObserver,
    )
    .unwrap()
    .with_directory_table(DirectoryTableParams {
        enable: true,
        refresh_on_create: false,
        auto_refresh: true,
        notification_integration: Some("MY_NOTIFY".to_string()),
    });

    assert_eq!(
        command.statement_text(),
        "CREATE STAGE MY_DB.PUBLIC.dir_stage\n\
         DIRECTORY_ENABLE = TRUE\n\
         AUTO_REFRESH = TRUE\n\
         NOTIFICATION_INTEGRATION = 'MY_NOTIFY'"
    );
}

#[test]
fn test_missing_variant_params_fails_before_render() {
    let err = StageVariant::from_parts(StageKind::Gcp, VariantParams::default()).unwrap_err();
    match err {
        SnowGenError::MissingVariantParams { kind } => assert_eq!(kind, "gcp"),
        other => panic!("Expected MissingVariantParams, got {other:?}"),
    }
}

#[test]
fn test_blank_external_url_rejected() {
    let executor = RecordingExecutor::new();
    let err = StageCommand::new(
        entity("bad"),
        StageVariant::Aws(AwsStageParams::new("   ")),
        &executor,
        &TracingObserver,
    )
    .unwrap_err();

    assert!(matches!(
        err,
        SnowGenError::EmptyIdentifier { field: "url" }
    ));
    assert!(executor.statements().is_empty());
}

#[test]
fn test_url_with_embedded_quote_is_escaped() {
    let executor = RecordingExecutor::new();
    let command = StageCommand::new(
        entity("odd"),
        StageVariant::Aws(AwsStageParams::new("s3://bu'cket")),
        &executor,
        &TracingObserver,
    )
    .unwrap();

    assert!(command.statement_text().contains("URL = 's3://bu''cket'"));
}
