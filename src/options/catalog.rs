//! Static option schemas for every command feature
//!
//! One schema per file format plus the COPY and PUT option sets. Field
//! declaration order here is the order fragments appear in rendered
//! statements, so reordering a field is an external-contract change.

use super::{FieldSpec, OptionSchema, SemanticType};

/// Compression codecs accepted by the CSV/JSON/AVRO/XML formats.
pub const COMPRESSION_CODECS: &[&str] = &[
    "AUTO",
    "GZIP",
    "BZ2",
    "BROTLI",
    "ZSTD",
    "DEFLATE",
    "RAW_DEFLATE",
    "NONE",
];

/// Binary column encodings.
pub const BINARY_FORMATS: &[&str] = &["HEX", "BASE64", "UTF8"];

/// Parquet-specific compression codecs.
pub const PARQUET_CODECS: &[&str] = &["AUTO", "LZO", "SNAPPY", "NONE"];

const fn opt(key: &'static str, ty: SemanticType) -> FieldSpec {
    FieldSpec {
        key,
        ty,
        render_key: None,
        required: false,
    }
}

const fn renamed(key: &'static str, ty: SemanticType, render_key: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        ty,
        render_key: Some(render_key),
        required: false,
    }
}

pub static CSV_FORMAT_OPTIONS: OptionSchema = OptionSchema {
    name: "CSV file format",
    fields: &[
        opt("compression", SemanticType::Enum(COMPRESSION_CODECS)),
        opt("record_delimiter", SemanticType::Text),
        opt("field_delimiter", SemanticType::Text),
        opt("multi_line", SemanticType::Bool),
        opt("file_extension", SemanticType::Text),
        opt("parse_header", SemanticType::Bool),
        opt("skip_header", SemanticType::Int),
        opt("skip_blank_lines", SemanticType::Bool),
        opt("date_format", SemanticType::Text),
        opt("time_format", SemanticType::Text),
        opt("timestamp_format", SemanticType::Text),
        opt("binary_format", SemanticType::Enum(BINARY_FORMATS)),
        opt("escape", SemanticType::Text),
        opt("escape_unenclosed_field", SemanticType::Text),
        opt("trim_space", SemanticType::Bool),
        opt("field_optionally_enclosed_by", SemanticType::Text),
        opt("null_if", SemanticType::TextList),
        opt("error_on_column_count_mismatch", SemanticType::Bool),
        opt("replace_invalid_characters", SemanticType::Bool),
        opt("empty_field_as_null", SemanticType::Bool),
        opt("skip_byte_order_mark", SemanticType::Bool),
        opt("encoding", SemanticType::Text),
    ],
};

pub static JSON_FORMAT_OPTIONS: OptionSchema = OptionSchema {
    name: "JSON file format",
    fields: &[
        opt("compression", SemanticType::Enum(COMPRESSION_CODECS)),
        opt("date_format", SemanticType::Text),
        opt("time_format", SemanticType::Text),
        opt("timestamp_format", SemanticType::Text),
        opt("binary_format", SemanticType::Enum(BINARY_FORMATS)),
        opt("trim_space", SemanticType::Bool),
        opt("multi_line", SemanticType::Bool),
        opt("null_if", SemanticType::TextList),
        opt("file_extension", SemanticType::Text),
        opt("enable_octal", SemanticType::Bool),
        opt("allow_duplicate", SemanticType::Bool),
        opt("strip_outer_array", SemanticType::Bool),
        opt("strip_null_values", SemanticType::Bool),
        opt("replace_invalid_characters", SemanticType::Bool),
        opt("ignore_utf8_errors", SemanticType::Bool),
        opt("skip_byte_order_mark", SemanticType::Bool),
    ],
};

pub static AVRO_FORMAT_OPTIONS: OptionSchema = OptionSchema {
    name: "Avro file format",
    fields: &[
        opt("compression", SemanticType::Enum(COMPRESSION_CODECS)),
        opt("trim_space", SemanticType::Bool),
        opt("replace_invalid_characters", SemanticType::Bool),
        opt("null_if", SemanticType::TextList),
    ],
};

pub static ORC_FORMAT_OPTIONS: OptionSchema = OptionSchema {
    name: "ORC file format",
    fields: &[
        opt("trim_space", SemanticType::Bool),
        opt("replace_invalid_characters", SemanticType::Bool),
        opt("null_if", SemanticType::TextList),
    ],
};

pub static PARQUET_FORMAT_OPTIONS: OptionSchema = OptionSchema {
    name: "Parquet file format",
    fields: &[
        // Snowflake spells the fragment COMPRESSION even though the option
        // key keeps its parquet-specific name.
        renamed(
            "parquetcompression",
            SemanticType::Enum(PARQUET_CODECS),
            "COMPRESSION",
        ),
        opt("snappy_compression", SemanticType::Bool),
        opt("binary_as_text", SemanticType::Bool),
        opt("use_logical_type", SemanticType::Bool),
        opt("trim_space", SemanticType::Bool),
        opt("use_vectorized_scanner", SemanticType::Bool),
        opt("replace_invalid_characters", SemanticType::Bool),
        opt("null_if", SemanticType::TextList),
    ],
};

pub static XML_FORMAT_OPTIONS: OptionSchema = OptionSchema {
    name: "XML file format",
    fields: &[
        opt("compression", SemanticType::Enum(COMPRESSION_CODECS)),
        opt("ignore_utf8_errors", SemanticType::Bool),
        opt("preserve_space", SemanticType::Bool),
        opt("strip_outer_element", SemanticType::Bool),
        opt("disable_snowflake_data", SemanticType::Bool),
        opt("disable_auto_convert", SemanticType::Bool),
        opt("replace_invalid_characters", SemanticType::Bool),
        opt("skip_byte_order_mark", SemanticType::Bool),
    ],
};

/// Generic per-statement options for COPY INTO. Deliberately empty: the
/// slot exists in the COPY statement layout but no generic key is
/// recognized, so anything supplied here fails as an unknown option.
pub static COPY_GENERIC_OPTIONS: OptionSchema = OptionSchema {
    name: "COPY",
    fields: &[],
};

pub static COPY_OPTIONS: OptionSchema = OptionSchema {
    name: "COPY INTO",
    fields: &[
        opt("on_error", SemanticType::Text),
        opt("match_by_column_name", SemanticType::Text),
        opt("validation_mode", SemanticType::Text),
        opt("purge", SemanticType::Bool),
        opt("return_failed_only", SemanticType::Bool),
        opt("enforce_length", SemanticType::Bool),
        opt("truncate_columns", SemanticType::Bool),
        opt("force", SemanticType::Bool),
        opt("auto_compress", SemanticType::Bool),
        opt("size_limit", SemanticType::Int),
    ],
};

pub static PUT_OPTIONS: OptionSchema = OptionSchema {
    name: "PUT",
    fields: &[
        opt("source_compression", SemanticType::Text),
        opt("auto_compress", SemanticType::Bool),
        opt("overwrite", SemanticType::Bool),
        opt("parallel", SemanticType::Int),
    ],
};
