//! COPY INTO statement generation

use crate::entity::CommandEntity;
use crate::error::SnowGenError;
use crate::exec::{run_statement, CommandObserver, StatementExecutor};
use crate::options::{catalog, sql_literal, OptionSet, RawOptions};

/// Caller-supplied pieces of a COPY INTO command.
///
/// `files` and `pattern` are mutually exclusive in the rendered statement:
/// a non-empty file list always wins and the pattern is never emitted
/// alongside it. `file_format` is passed through verbatim — the caller
/// supplies Snowflake-ready syntax (for example `(FORMAT_NAME = 'my_fmt')`).
#[derive(Debug, Clone, Default)]
pub struct CopyIntoSpec {
    pub source: String,
    pub files: Vec<String>,
    pub pattern: Option<String>,
    pub file_format: Option<String>,
    pub options: RawOptions,
    pub copy_options: RawOptions,
}

/// A COPY INTO command targeting one table.
pub struct CopyIntoCommand<'a> {
    entity: CommandEntity,
    source: String,
    files: Vec<String>,
    pattern: Option<String>,
    file_format: Option<String>,
    options: OptionSet,
    copy_options: OptionSet,
    executor: &'a dyn StatementExecutor,
    observer: &'a dyn CommandObserver,
}

impl std::fmt::Debug for CopyIntoCommand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CopyIntoCommand")
            .field("entity", &self.entity)
            .field("source", &self.source)
            .field("files", &self.files)
            .field("pattern", &self.pattern)
            .field("file_format", &self.file_format)
            .field("options", &self.options)
            .field("copy_options", &self.copy_options)
            .finish_non_exhaustive()
    }
}

impl<'a> CopyIntoCommand<'a> {
    pub fn new(
        entity: CommandEntity,
        spec: CopyIntoSpec,
        executor: &'a dyn StatementExecutor,
        observer: &'a dyn CommandObserver,
    ) -> Result<Self, SnowGenError> {
        let source = spec.source.trim().to_string();
        if source.is_empty() {
            return Err(SnowGenError::EmptyIdentifier { field: "source" });
        }
        let options = catalog::COPY_GENERIC_OPTIONS.validate(spec.options)?;
        let copy_options = catalog::COPY_OPTIONS.validate(spec.copy_options)?;
        Ok(Self {
            entity,
            source,
            files: spec.files,
            pattern: spec.pattern,
            file_format: spec.file_format,
            options,
            copy_options,
            executor,
            observer,
        })
    }

    /// Render the full statement: blank clauses are dropped before joining.
    pub fn statement_text(&self) -> String {
        let mut clauses = vec![
            format!("COPY INTO {}", self.entity.fully_qualified_name()),
            format!("FROM {}", self.source),
        ];
        // An explicit file list wins over a pattern; the two clauses are
        // never emitted together.
        if !self.files.is_empty() {
            let quoted: Vec<String> = self.files.iter().map(|f| sql_literal(f)).collect();
            clauses.push(format!("FILES = ({})", quoted.join(", ")));
        } else if let Some(pattern) = &self.pattern {
            if !pattern.is_empty() {
                clauses.push(format!("PATTERN = {}", sql_literal(pattern)));
            }
        }
        if let Some(file_format) = &self.file_format {
            if !file_format.is_empty() {
                clauses.push(format!("FILE_FORMAT = {}", file_format));
            }
        }
        clauses.extend(self.options.fragments());
        clauses.extend(self.copy_options.fragments());
        clauses.join("\n").trim().to_string()
    }

    /// Render and execute the statement, at most once.
    pub fn run(&self) -> Result<(), SnowGenError> {
        let statement = self.statement_text();
        run_statement(self.executor, self.observer, &statement)
    }
}
