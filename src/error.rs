// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlancheckError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("invalid parameter value: {value} is not a finite number")]
    InvalidValue { value: f64 },

    #[error("unknown graphical element: {id}")]
    UnknownElement { id: String },

    #[error("unknown parameter: {parameter_id} (category: {category_id})")]
    UnknownParameter {
        category_id: String,
        parameter_id: String,
    },

    #[error("element detection failed: {0}")]
    Detection(String),

    #[error("parameter extraction failed: {0}")]
    Extraction(String),

    #[error("record not found: {id}")]
    NotFound { id: String },

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlancheckError>;

// Allow `?` on std::io::Error by converting to PlancheckError::Io with unknown path.
impl From<std::io::Error> for PlancheckError {
    fn from(source: std::io::Error) -> Self {
        PlancheckError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors, keeping the offending path when known.
impl From<walkdir::Error> for PlancheckError {
    fn from(e: walkdir::Error) -> Self {
        let path = e
            .path()
            .map_or_else(|| PathBuf::from("<unknown>"), std::path::Path::to_path_buf);
        let source = e
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, "walk error"));
        PlancheckError::Io { source, path }
    }
}
