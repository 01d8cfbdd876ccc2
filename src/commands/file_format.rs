//! CREATE FILE FORMAT statement generation

use crate::entity::CommandEntity;
use crate::error::SnowGenError;
use crate::exec::{run_statement, CommandObserver, StatementExecutor};
use crate::options::{catalog, sql_literal, OptionSchema, OptionSet, RawOptions};

/// Supported file format types, each bound to its own option schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatType {
    Csv,
    Json,
    Avro,
    Orc,
    Parquet,
    Xml,
}

impl FormatType {
    /// The `TYPE = '<tag>'` literal.
    pub fn tag(&self) -> &'static str {
        match self {
            FormatType::Csv => "CSV",
            FormatType::Json => "JSON",
            FormatType::Avro => "AVRO",
            FormatType::Orc => "ORC",
            FormatType::Parquet => "PARQUET",
            FormatType::Xml => "XML",
        }
    }

    /// The option schema recognized for this format.
    pub fn schema(&self) -> &'static OptionSchema {
        match self {
            FormatType::Csv => &catalog::CSV_FORMAT_OPTIONS,
            FormatType::Json => &catalog::JSON_FORMAT_OPTIONS,
            FormatType::Avro => &catalog::AVRO_FORMAT_OPTIONS,
            FormatType::Orc => &catalog::ORC_FORMAT_OPTIONS,
            FormatType::Parquet => &catalog::PARQUET_FORMAT_OPTIONS,
            FormatType::Xml => &catalog::XML_FORMAT_OPTIONS,
        }
    }
}

/// A CREATE FILE FORMAT command for one named format object.
///
/// Options are validated against the format's schema at construction;
/// rendering and execution cannot see invalid input.
pub struct FileFormatCommand<'a> {
    entity: CommandEntity,
    format_type: FormatType,
    options: OptionSet,
    executor: &'a dyn StatementExecutor,
    observer: &'a dyn CommandObserver,
}

impl std::fmt::Debug for FileFormatCommand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileFormatCommand")
            .field("entity", &self.entity)
            .field("format_type", &self.format_type)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<'a> FileFormatCommand<'a> {
    pub fn new(
        entity: CommandEntity,
        format_type: FormatType,
        options: RawOptions,
        executor: &'a dyn StatementExecutor,
        observer: &'a dyn CommandObserver,
    ) -> Result<Self, SnowGenError> {
        let options = format_type.schema().validate(options)?;
        Ok(Self {
            entity,
            format_type,
            options,
            executor,
            observer,
        })
    }

    pub fn entity(&self) -> &CommandEntity {
        &self.entity
    }

    /// Render the full statement without executing it.
    pub fn statement_text(&self, if_not_exists: bool) -> String {
        let clause = if if_not_exists { "IF NOT EXISTS " } else { "" };
        let mut lines = vec![
            format!(
                "CREATE FILE FORMAT {}{}",
                clause,
                self.entity.fully_qualified_name()
            ),
            format!("TYPE = {}", sql_literal(self.format_type.tag())),
        ];
        lines.extend(self.options.fragments());
        lines.join("\n")
    }

    /// Render and execute the statement, at most once.
    pub fn create(&self, if_not_exists: bool) -> Result<(), SnowGenError> {
        let statement = self.statement_text(if_not_exists);
        run_statement(self.executor, self.observer, &statement)
    }
}
