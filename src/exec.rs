//! Execution and observation capabilities
//!
//! Commands never talk to Snowflake themselves. They render statement text
//! and hand it to a [`StatementExecutor`] injected at construction time; a
//! [`CommandObserver`] (also injected) sees the exact text before execution
//! and the outcome afterwards. Both are plain object-safe traits so hosts
//! and tests can substitute their own implementations.

use tracing::{error, info};

use crate::error::SnowGenError;

/// Whatever the executor reports on failure. Boxed so drivers with any
/// error type can plug in.
pub type ExecutionError = Box<dyn std::error::Error + Send + Sync>;

/// Capability that runs one statement against the warehouse.
///
/// Execution is at-most-once per call: the library never retries.
pub trait StatementExecutor {
    fn execute(&self, statement: &str) -> Result<(), ExecutionError>;
}

/// Capability that observes statement execution.
///
/// The provided methods log through `tracing`; override them to capture
/// statements elsewhere (tests use a recording implementation).
pub trait CommandObserver {
    fn statement_started(&self, statement: &str) {
        info!(%statement, "executing statement");
    }

    fn statement_succeeded(&self, statement: &str) {
        let _ = statement;
        info!("statement executed successfully");
    }

    fn statement_failed(&self, statement: &str, error: &(dyn std::error::Error + 'static)) {
        error!(%statement, %error, "statement execution failed");
    }
}

/// Observer that keeps the default `tracing`-backed behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CommandObserver for TracingObserver {}

/// Shared execute path: trim, notify the observer, run, wrap failures with
/// the attempted statement text attached.
pub(crate) fn run_statement(
    executor: &dyn StatementExecutor,
    observer: &dyn CommandObserver,
    statement: &str,
) -> Result<(), SnowGenError> {
    let statement = statement.trim();
    observer.statement_started(statement);
    match executor.execute(statement) {
        Ok(()) => {
            observer.statement_succeeded(statement);
            Ok(())
        }
        Err(source) => {
            observer.statement_failed(statement, source.as_ref());
            Err(SnowGenError::CommandExecution {
                statement: statement.to_string(),
                source,
            })
        }
    }
}
