//! Movie (node) types

use crate::actor::ActorId;
use crate::limits::{validate_id, validate_name, ValidationError};
use serde::{Deserialize, Serialize};

/// Externally supplied movie identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub String);

impl MovieId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MovieId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A movie in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// Display name (unique across movies)
    pub name: String,

    /// Identifier (unique across movies)
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,

    /// Cast, in the order the relationships were added
    pub actors: Vec<ActorId>,
}

impl Movie {
    pub fn new(movie_id: impl Into<MovieId>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            movie_id: movie_id.into(),
            actors: Vec::new(),
        }
    }
}

/// Payload for adding a movie
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewMovie {
    pub name: String,
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
}

impl NewMovie {
    pub fn new(movie_id: impl Into<MovieId>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            movie_id: movie_id.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id("movieId", self.movie_id.as_str())?;
        validate_name(&self.name)
    }
}
