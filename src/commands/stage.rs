//! CREATE STAGE statement generation
//!
//! A stage is one of four mutually exclusive variants (internal, AWS, GCP,
//! Azure), chosen once at construction. Each variant carries its own
//! parameter record and its own encryption enum, so accessing another
//! variant's fields is impossible by construction. Rendering dispatches
//! exhaustively on the variant tag.

use crate::entity::CommandEntity;
use crate::error::SnowGenError;
use crate::exec::{run_statement, CommandObserver, StatementExecutor};
use crate::options::sql_literal;

/// Encryption kinds for internal stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InternalEncryption {
    SnowflakeFull,
    SnowflakeSse,
}

impl InternalEncryption {
    pub fn as_str(&self) -> &'static str {
        match self {
            InternalEncryption::SnowflakeFull => "SNOWFLAKE_FULL",
            InternalEncryption::SnowflakeSse => "SNOWFLAKE_SSE",
        }
    }
}

/// Encryption kinds for AWS external stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AwsEncryption {
    Cse,
    SseS3,
    SseKms,
    None,
}

impl AwsEncryption {
    pub fn as_str(&self) -> &'static str {
        match self {
            AwsEncryption::Cse => "AWS_CSE",
            AwsEncryption::SseS3 => "AWS_SSE_S3",
            AwsEncryption::SseKms => "AWS_SSE_KMS",
            AwsEncryption::None => "NONE",
        }
    }
}

/// Encryption kinds for GCP external stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GcpEncryption {
    SseKms,
    None,
}

impl GcpEncryption {
    pub fn as_str(&self) -> &'static str {
        match self {
            GcpEncryption::SseKms => "GCS_SSE_KMS",
            GcpEncryption::None => "NONE",
        }
    }
}

/// Encryption kinds for Azure external stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AzureEncryption {
    Cse,
    None,
}

impl AzureEncryption {
    pub fn as_str(&self) -> &'static str {
        match self {
            AzureEncryption::Cse => "AZURE_CSE",
            AzureEncryption::None => "NONE",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InternalStageParams {
    pub encryption: Option<InternalEncryption>,
}

#[derive(Debug, Clone)]
pub struct AwsStageParams {
    pub url: String,
    pub storage_integration: Option<String>,
    pub encryption: Option<AwsEncryption>,
    pub master_key: Option<String>,
    pub kms_key_id: Option<String>,
    pub use_privatelink_endpoint: bool,
}

impl AwsStageParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            storage_integration: None,
            encryption: None,
            master_key: None,
            kms_key_id: None,
            use_privatelink_endpoint: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GcpStageParams {
    pub url: String,
    pub storage_integration: Option<String>,
    pub encryption: Option<GcpEncryption>,
    pub kms_key_id: Option<String>,
}

impl GcpStageParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            storage_integration: None,
            encryption: None,
            kms_key_id: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AzureStageParams {
    pub url: String,
    pub storage_integration: Option<String>,
    pub sas_token: Option<String>,
    pub encryption: Option<AzureEncryption>,
    pub master_key: Option<String>,
    pub use_privatelink_endpoint: bool,
}

impl AzureStageParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            storage_integration: None,
            sas_token: None,
            encryption: None,
            master_key: None,
            use_privatelink_endpoint: false,
        }
    }
}

/// Directory table clauses, attachable to any stage variant.
///
/// Booleans render only when true; the notification integration renders
/// only when non-empty.
#[derive(Debug, Clone, Default)]
pub struct DirectoryTableParams {
    pub enable: bool,
    pub refresh_on_create: bool,
    pub auto_refresh: bool,
    pub notification_integration: Option<String>,
}

/// Stage kind tag, for hosts that carry the tag and the parameter records
/// separately (config files, request payloads).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageKind {
    Internal,
    Aws,
    Gcp,
    Azure,
}

impl StageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageKind::Internal => "internal",
            StageKind::Aws => "aws",
            StageKind::Gcp => "gcp",
            StageKind::Azure => "azure",
        }
    }
}

/// Optional parameter records paired with a [`StageKind`] tag.
#[derive(Debug, Clone, Default)]
pub struct VariantParams {
    pub internal: Option<InternalStageParams>,
    pub aws: Option<AwsStageParams>,
    pub gcp: Option<GcpStageParams>,
    pub azure: Option<AzureStageParams>,
}

/// The populated variant of a stage. Exactly one record exists, matching
/// the tag, by construction.
#[derive(Debug, Clone)]
pub enum StageVariant {
    Internal(InternalStageParams),
    Aws(AwsStageParams),
    Gcp(GcpStageParams),
    Azure(AzureStageParams),
}

impl StageVariant {
    /// Reassemble a variant from a tag plus separately-supplied records.
    ///
    /// An external tag whose record is missing fails with
    /// `MissingVariantParams`; a missing internal record falls back to the
    /// empty default, since internal stages need no parameters.
    pub fn from_parts(kind: StageKind, params: VariantParams) -> Result<Self, SnowGenError> {
        match kind {
            StageKind::Internal => Ok(StageVariant::Internal(
                params.internal.unwrap_or_default(),
            )),
            StageKind::Aws => params
                .aws
                .map(StageVariant::Aws)
                .ok_or(SnowGenError::MissingVariantParams { kind: "aws" }),
            StageKind::Gcp => params
                .gcp
                .map(StageVariant::Gcp)
                .ok_or(SnowGenError::MissingVariantParams { kind: "gcp" }),
            StageKind::Azure => params
                .azure
                .map(StageVariant::Azure)
                .ok_or(SnowGenError::MissingVariantParams { kind: "azure" }),
        }
    }

    pub fn kind(&self) -> StageKind {
        match self {
            StageVariant::Internal(_) => StageKind::Internal,
            StageVariant::Aws(_) => StageKind::Aws,
            StageVariant::Gcp(_) => StageKind::Gcp,
            StageVariant::Azure(_) => StageKind::Azure,
        }
    }

    fn url(&self) -> Option<&str> {
        match self {
            StageVariant::Internal(_) => None,
            StageVariant::Aws(p) => Some(&p.url),
            StageVariant::Gcp(p) => Some(&p.url),
            StageVariant::Azure(p) => Some(&p.url),
        }
    }

    fn fragments(&self) -> Vec<String> {
        let mut out = Vec::new();
        match self {
            StageVariant::Internal(p) => {
                if let Some(encryption) = p.encryption {
                    out.push(format!("ENCRYPTION = {}", sql_literal(encryption.as_str())));
                }
            }
            StageVariant::Aws(p) => {
                out.push(format!("URL = {}", sql_literal(&p.url)));
                push_text(&mut out, "STORAGE_INTEGRATION", &p.storage_integration);
                if let Some(encryption) = p.encryption {
                    out.push(format!(
                        "ENCRYPTION_TYPE = {}",
                        sql_literal(encryption.as_str())
                    ));
                }
                push_text(&mut out, "MASTER_KEY", &p.master_key);
                push_text(&mut out, "KMS_KEY_ID", &p.kms_key_id);
                push_flag(&mut out, "USE_PRIVATELINK_ENDPOINT", p.use_privatelink_endpoint);
            }
            StageVariant::Gcp(p) => {
                out.push(format!("URL = {}", sql_literal(&p.url)));
                push_text(&mut out, "STORAGE_INTEGRATION", &p.storage_integration);
                if let Some(encryption) = p.encryption {
                    out.push(format!(
                        "ENCRYPTION_TYPE = {}",
                        sql_literal(encryption.as_str())
                    ));
                }
                push_text(&mut out, "KMS_KEY_ID", &p.kms_key_id);
            }
            StageVariant::Azure(p) => {
                out.push(format!("URL = {}", sql_literal(&p.url)));
                push_text(&mut out, "STORAGE_INTEGRATION", &p.storage_integration);
                push_text(&mut out, "AZURE_SAS_TOKEN", &p.sas_token);
                if let Some(encryption) = p.encryption {
                    out.push(format!(
                        "ENCRYPTION_TYPE = {}",
                        sql_literal(encryption.as_str())
                    ));
                }
                push_text(&mut out, "MASTER_KEY", &p.master_key);
                push_flag(&mut out, "USE_PRIVATELINK_ENDPOINT", p.use_privatelink_endpoint);
            }
        }
        out
    }
}

fn push_text(out: &mut Vec<String>, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        if !value.is_empty() {
            out.push(format!("{} = {}", key, sql_literal(value)));
        }
    }
}

fn push_flag(out: &mut Vec<String>, key: &str, value: bool) {
    if value {
        out.push(format!("{} = TRUE", key));
    }
}

/// A CREATE STAGE command.
pub struct StageCommand<'a> {
    entity: CommandEntity,
    variant: StageVariant,
    file_format: Option<String>,
    comment: Option<String>,
    directory: Option<DirectoryTableParams>,
    executor: &'a dyn StatementExecutor,
    observer: &'a dyn CommandObserver,
}

impl std::fmt::Debug for StageCommand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StageCommand")
            .field("entity", &self.entity)
            .field("variant", &self.variant)
            .field("file_format", &self.file_format)
            .field("comment", &self.comment)
            .field("directory", &self.directory)
            .finish_non_exhaustive()
    }
}

impl<'a> StageCommand<'a> {
    /// Validates the variant (external URLs must be non-empty after
    /// trimming) before any statement text can be produced.
    pub fn new(
        entity: CommandEntity,
        variant: StageVariant,
        executor: &'a dyn StatementExecutor,
        observer: &'a dyn CommandObserver,
    ) -> Result<Self, SnowGenError> {
        if let Some(url) = variant.url() {
            if url.trim().is_empty() {
                return Err(SnowGenError::EmptyIdentifier { field: "url" });
            }
        }
        Ok(Self {
            entity,
            variant,
            file_format: None,
            comment: None,
            directory: None,
            executor,
            observer,
        })
    }

    pub fn with_file_format(mut self, file_format: impl Into<String>) -> Self {
        self.file_format = Some(file_format.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn with_directory_table(mut self, params: DirectoryTableParams) -> Self {
        self.directory = Some(params);
        self
    }

    pub fn variant(&self) -> &StageVariant {
        &self.variant
    }

    /// Render the full statement: variant fragments first, then the shared
    /// FILE_FORMAT / COMMENT / directory-table clauses.
    pub fn statement_text(&self) -> String {
        let mut lines = vec![format!(
            "CREATE STAGE {}",
            self.entity.fully_qualified_name()
        )];
        lines.extend(self.variant.fragments());
        push_text(&mut lines, "FILE_FORMAT", &self.file_format);
        push_text(&mut lines, "COMMENT", &self.comment);
        if let Some(directory) = &self.directory {
            push_flag(&mut lines, "DIRECTORY_ENABLE", directory.enable);
            push_flag(&mut lines, "REFRESH_ON_CREATE", directory.refresh_on_create);
            push_flag(&mut lines, "AUTO_REFRESH", directory.auto_refresh);
            push_text(
                &mut lines,
                "NOTIFICATION_INTEGRATION",
                &directory.notification_integration,
            );
        }
        lines.join("\n")
    }

    /// Render and execute the statement, at most once.
    pub fn create(&self) -> Result<(), SnowGenError> {
        let statement = self.statement_text();
        run_statement(self.executor, self.observer, &statement)
    }
}
