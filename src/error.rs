// SPDX-License-Identifier: MPL-2.0
use crate::application::port::tags::TagName;
use std::borrow::Cow;
use thiserror::Error;

/// Errors raised while extracting capture metadata or loading configuration.
///
/// A file without embedded metadata is not an error; extraction returns an
/// empty record instead.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The tag container was found but could not be parsed.
    #[error("failed to collect exif data: {0}")]
    TagCollection(String),

    /// A recognized tag carried a payload of the wrong type or length.
    #[error("{tag} was not in expected format: {raw}")]
    FieldFormat { tag: TagName, raw: String },

    /// The capture time did not match `YYYY:MM:DD HH:MM:SS`.
    #[error("failed to parse time {value:?}: {source}")]
    DateParse {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A field failure, with the directory it was found in.
    #[error("failed to walk exif data tree at {ifd}: {source}")]
    Field {
        tag: TagName,
        ifd: Cow<'static, str>,
        #[source]
        source: Box<Error>,
    },

    #[error("Config Error: {0}")]
    Config(String),

    #[error("I/O Error: {0}")]
    Io(String),
}

impl Error {
    /// Returns the innermost error, skipping walk context.
    #[must_use]
    pub fn root(&self) -> &Error {
        match self {
            Error::Field { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
