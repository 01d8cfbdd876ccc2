//! snowgen: a typed generator for Snowflake command statements
//!
//! This library compiles validated configuration values into Snowflake
//! DDL/DML statement text (CREATE FILE FORMAT, CREATE STAGE, COPY INTO,
//! PUT) and hands the text to an injected executor. It owns no connection,
//! performs no retries, and never parses SQL — it is a statement compiler,
//! not a driver.
//!
//! The pieces:
//! - [`options`]: per-feature option schemas, strict validation, and the
//!   shared fragment-rendering engine.
//! - [`entity`]: two/three-part qualified naming for addressable objects.
//! - [`commands`]: one builder per statement kind, each validating eagerly
//!   at construction and rendering deterministically.
//! - [`exec`]: the injected execute/observe capabilities.

pub mod commands;
pub mod entity;
pub mod error;
pub mod exec;
pub mod options;

pub use commands::{
    AwsEncryption, AwsStageParams, AzureEncryption, AzureStageParams, CopyIntoCommand,
    CopyIntoSpec, DirectoryTableParams, FileFormatCommand, FileLister, FormatType, GcpEncryption,
    GcpStageParams, InternalEncryption, InternalStageParams, PutCommand, StageCommand, StageKind,
    StageVariant, VariantParams, WalkdirLister,
};
pub use entity::CommandEntity;
pub use error::SnowGenError;
pub use exec::{CommandObserver, ExecutionError, StatementExecutor, TracingObserver};
pub use options::{OptionSchema, OptionSet, OptionValue, RawOptions, SemanticType};
