//! Error handling for the gostrap application.
//! Defines the typed error taxonomy shared by the engine and the CLI front end.

use colored::Colorize;
use std::io;
use thiserror::Error;

/// Custom error types for gostrap operations.
///
/// Every failure of a generation run surfaces as one of these variants.
/// All of them are terminal for the run; nothing is retried internally.
#[derive(Error, Debug)]
pub enum Error {
    /// The requested project name failed validation
    #[error("Invalid project name: {0}.")]
    InvalidName(String),

    /// The project root directory already exists; it is never overwritten
    #[error("Directory '{path}' already exists.")]
    AlreadyExists { path: String },

    /// A manifest entry references a template the store does not contain
    #[error("Template not found: '{id}'.")]
    TemplateNotFound { id: String },

    /// A template referenced an unknown field or contained a malformed tag
    #[error("Template substitution error: {detail}.")]
    Substitution { detail: String },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    Io(#[from] io::Error),
}

/// Convenience type alias for Results with gostrap's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error with a cause-specific hint
/// and exits the program with a non-zero status.
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{} {}", "error:".red().bold(), err);

    match &err {
        Error::TemplateNotFound { .. } | Error::Substitution { .. } => {
            eprintln!(
                "{}",
                "This looks like a defect in the bundled templates. Please report it."
                    .yellow()
            );
        }
        Error::AlreadyExists { .. } => {
            eprintln!(
                "{}",
                "Choose a different name or remove the existing directory.".yellow()
            );
        }
        Error::Io(io_err) if io_err.kind() == io::ErrorKind::PermissionDenied => {
            eprintln!(
                "{}",
                "Try a different target directory or adjust its permissions.".yellow()
            );
        }
        Error::Io(io_err) if io_err.kind() == io::ErrorKind::StorageFull => {
            eprintln!("{}", "Check available disk space.".yellow());
        }
        _ => {}
    }

    std::process::exit(1);
}
