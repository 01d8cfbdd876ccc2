//! PUT statement generation and batch file upload

use std::path::{Path, PathBuf};

use crate::entity::CommandEntity;
use crate::error::SnowGenError;
use crate::exec::{run_statement, CommandObserver, StatementExecutor};
use crate::options::{catalog, sql_literal, OptionSet, RawOptions};

/// Capability that enumerates the files to upload.
///
/// Implementations must yield regular files only, in a deterministic order,
/// and reject paths that are not directories.
pub trait FileLister {
    fn list_files(&self, directory: &Path) -> Result<Vec<PathBuf>, SnowGenError>;
}

/// Production lister: recursive walk in sorted file-name order.
#[derive(Debug, Clone, Copy, Default)]
pub struct WalkdirLister;

impl FileLister for WalkdirLister {
    fn list_files(&self, directory: &Path) -> Result<Vec<PathBuf>, SnowGenError> {
        if !directory.is_dir() {
            return Err(SnowGenError::InvalidDirectory {
                path: directory.to_path_buf(),
            });
        }
        let mut files = Vec::new();
        for entry in walkdir::WalkDir::new(directory).sort_by_file_name() {
            let entry = entry.map_err(|source| SnowGenError::DirectoryRead {
                path: directory.to_path_buf(),
                source,
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

/// A PUT command uploading the contents of a directory to a stage.
pub struct PutCommand<'a> {
    entity: CommandEntity,
    stage_name: String,
    options: OptionSet,
    executor: &'a dyn StatementExecutor,
    observer: &'a dyn CommandObserver,
    lister: &'a dyn FileLister,
}

impl std::fmt::Debug for PutCommand<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PutCommand")
            .field("entity", &self.entity)
            .field("stage_name", &self.stage_name)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl<'a> PutCommand<'a> {
    pub fn new(
        entity: CommandEntity,
        stage_name: impl Into<String>,
        options: RawOptions,
        executor: &'a dyn StatementExecutor,
        observer: &'a dyn CommandObserver,
        lister: &'a dyn FileLister,
    ) -> Result<Self, SnowGenError> {
        let stage_name = stage_name.into().trim().to_string();
        if stage_name.is_empty() {
            return Err(SnowGenError::EmptyIdentifier { field: "stage name" });
        }
        let options = catalog::PUT_OPTIONS.validate(options)?;
        Ok(Self {
            entity,
            stage_name,
            options,
            executor,
            observer,
            lister,
        })
    }

    pub fn entity(&self) -> &CommandEntity {
        &self.entity
    }

    /// Render the PUT statement for one file. Path separators are
    /// normalized to forward slashes.
    pub fn statement_for(&self, file_path: &Path) -> String {
        let normalized = file_path.to_string_lossy().replace('\\', "/");
        let mut lines = vec![format!(
            "PUT {} {}",
            sql_literal(&format!("file://{normalized}")),
            sql_literal(&self.stage_name)
        )];
        lines.extend(self.options.fragments());
        lines.join("\n")
    }

    /// Upload every file under `directory`, one statement per file,
    /// sequentially in traversal order.
    ///
    /// Fails with `NoFilesFound` before building any statement when the
    /// directory is empty; a failure mid-batch aborts the remaining
    /// uploads, with the failing file's statement attached to the error.
    pub fn upload(&self, directory: &Path) -> Result<(), SnowGenError> {
        let files = self.lister.list_files(directory)?;
        if files.is_empty() {
            return Err(SnowGenError::NoFilesFound {
                path: directory.to_path_buf(),
            });
        }
        for file_path in &files {
            let statement = self.statement_for(file_path);
            run_statement(self.executor, self.observer, &statement)?;
        }
        Ok(())
    }
}
