//! Relationship (edge) types

use crate::actor::ActorId;
use crate::limits::{validate_id, ValidationError};
use crate::movie::MovieId;
use serde::{Deserialize, Serialize};

/// An undirected, unweighted edge between an actor and a movie
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Relationship {
    #[serde(rename = "actorId")]
    pub actor_id: ActorId,
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
}

impl Relationship {
    pub fn new(actor_id: impl Into<ActorId>, movie_id: impl Into<MovieId>) -> Self {
        Self {
            actor_id: actor_id.into(),
            movie_id: movie_id.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id("actorId", self.actor_id.as_str())?;
        validate_id("movieId", self.movie_id.as_str())
    }
}

/// Answer to a has-relationship query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationshipStatus {
    #[serde(rename = "actorId")]
    pub actor_id: ActorId,
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
    #[serde(rename = "hasRelationship")]
    pub has_relationship: bool,
}

impl RelationshipStatus {
    pub fn new(relationship: Relationship, has_relationship: bool) -> Self {
        Self {
            actor_id: relationship.actor_id,
            movie_id: relationship.movie_id,
            has_relationship,
        }
    }
}
