//! Actor (node) types

use crate::limits::{validate_id, validate_name, ValidationError};
use crate::movie::MovieId;
use serde::{Deserialize, Serialize};

/// Externally supplied actor identifier (e.g. an IMDb `nm` id)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(pub String);

impl ActorId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ActorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ActorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ActorId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// An actor in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// Display name (unique across actors)
    pub name: String,

    /// Identifier (unique across actors)
    #[serde(rename = "actorId")]
    pub actor_id: ActorId,

    /// Movies this actor appears in, in the order the relationships were added
    pub movies: Vec<MovieId>,
}

impl Actor {
    pub fn new(actor_id: impl Into<ActorId>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actor_id: actor_id.into(),
            movies: Vec::new(),
        }
    }
}

/// Payload for adding an actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewActor {
    pub name: String,
    #[serde(rename = "actorId")]
    pub actor_id: ActorId,
}

impl NewActor {
    pub fn new(actor_id: impl Into<ActorId>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            actor_id: actor_id.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_id("actorId", self.actor_id.as_str())?;
        validate_name(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_serializes_with_wire_names() {
        let mut actor = Actor::new("nm0000102", "Kevin Bacon");
        actor.movies.push(MovieId::from("1"));

        let json = serde_json::to_value(&actor).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Kevin Bacon",
                "actorId": "nm0000102",
                "movies": ["1"]
            })
        );
    }

    #[test]
    fn test_new_actor_rejects_foreign_fields() {
        let parsed: Result<NewActor, _> = serde_json::from_value(serde_json::json!({
            "name": "Kevin Bacon",
            "actorId": "nm0000102",
            "movieId": "1"
        }));
        assert!(parsed.is_err());

        let parsed: Result<NewActor, _> =
            serde_json::from_value(serde_json::json!({ "trash": "trash" }));
        assert!(parsed.is_err());
    }

    #[test]
    fn test_new_actor_validate() {
        assert!(NewActor::new("3", "poops").validate().is_ok());
        assert!(NewActor::new("", "poops").validate().is_err());
        assert!(NewActor::new("3", "").validate().is_err());
    }
}
