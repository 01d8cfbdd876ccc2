//! Command builders for the supported statement kinds

pub mod copy_into;
pub mod file_format;
pub mod put;
pub mod stage;

pub use copy_into::{CopyIntoCommand, CopyIntoSpec};
pub use file_format::{FileFormatCommand, FormatType};
pub use put::{FileLister, PutCommand, WalkdirLister};
pub use stage::{
    AwsEncryption, AwsStageParams, AzureEncryption, AzureStageParams, DirectoryTableParams,
    GcpEncryption, GcpStageParams, InternalEncryption, InternalStageParams, StageCommand,
    StageKind, StageVariant, VariantParams,
};
