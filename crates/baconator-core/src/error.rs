//! Error types for Baconator Core

use serde::Serialize;
use thiserror::Error;

/// Result type alias using Baconator's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Baconator error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Malformed request: {0}")]
    Malformed(String),

    #[error("Actor already exists: {0}")]
    ActorExists(String),

    #[error("Actor name already taken: {0}")]
    ActorNameExists(String),

    #[error("Movie already exists: {0}")]
    MovieExists(String),

    #[error("Movie name already taken: {0}")]
    MovieNameExists(String),

    #[error("Relationship already exists: {actor} <-> {movie}")]
    RelationshipExists { actor: String, movie: String },

    #[error("Actor not found: {0}")]
    ActorNotFound(String),

    #[error("Movie not found: {0}")]
    MovieNotFound(String),

    #[error("Unknown actor: {0}")]
    UnknownActor(String),

    #[error("No path found: {from} -> {to}")]
    NoPathFound { from: String, to: String },
}

/// Coarse classification of an [`Error`], as seen by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Payload shape is invalid; caught before any graph access
    Malformed,
    /// Uniqueness or duplicate-edge violation
    Conflict,
    /// Referenced actor or movie does not exist
    NotFound,
    /// Queried actor of a Bacon computation does not exist
    BadInput,
    /// Both ends exist but are not connected
    NoPathFound,
}

impl ErrorKind {
    /// External status code for this kind of failure.
    pub fn status_code(self) -> u16 {
        match self {
            Self::Malformed | Self::Conflict | Self::BadInput => 400,
            Self::NotFound | Self::NoPathFound => 404,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Malformed => "malformed",
            Self::Conflict => "conflict",
            Self::NotFound => "not_found",
            Self::BadInput => "bad_input",
            Self::NoPathFound => "no_path_found",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Malformed(_) => ErrorKind::Malformed,
            Self::ActorExists(_)
            | Self::ActorNameExists(_)
            | Self::MovieExists(_)
            | Self::MovieNameExists(_)
            | Self::RelationshipExists { .. } => ErrorKind::Conflict,
            Self::ActorNotFound(_) | Self::MovieNotFound(_) => ErrorKind::NotFound,
            Self::UnknownActor(_) => ErrorKind::BadInput,
            Self::NoPathFound { .. } => ErrorKind::NoPathFound,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}

impl From<crate::limits::ValidationError> for Error {
    fn from(err: crate::limits::ValidationError) -> Self {
        Self::Malformed(err.to_string())
    }
}
