//! Error types for mdeck operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during parsing or presentation writing.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

impl Error {
    /// Shorthand for a [`Error::Validation`] with a formatted message.
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
