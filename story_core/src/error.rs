//! Errors from reading and writing route documents.

use std::path::PathBuf;
use thiserror::Error;

/// The document could not be turned into a tree.
#[derive(Debug, Error)]
pub enum ParseError {
    /// Malformed JSON, a missing required key, or a value of the wrong type.
    #[error("malformed route document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("character id \"{0}\" is listed more than once")]
    DuplicateName(String),

    #[error("character entry with an empty id")]
    EmptyName,

    #[error("branch \"{branch}\" on route \"{route}\" has no choices")]
    EmptyBranch { route: String, branch: String },

    #[error("death count {count} for \"{id}\" is too large")]
    CountOutOfRange { id: String, count: i64 },
}

/// Errors from whole-file load and save.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("could not encode route document: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Errors from reading the TOML settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("display.indent is {0}, at most {} is allowed", crate::MAX_INDENT)]
    IndentTooLarge(usize),
}
