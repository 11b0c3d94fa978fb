//! Request handlers
//!
//! Each operation decodes its payload strictly, then calls into storage.
//! A payload with missing, extra or mistyped fields is rejected as malformed
//! before the graph is touched.

use std::str::FromStr;
use std::sync::Arc;

use baconator_core::{
    ActorId, BaconHop, Error, MovieId, NewActor, NewMovie, Relationship, RelationshipStatus,
};
use baconator_storage::{StorageBackend, StorageError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// HTTP method an operation is served on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMethod {
    Get,
    Put,
}

/// Operations exposed under `/api/v1/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AddActor,
    AddMovie,
    AddRelationship,
    GetActor,
    GetMovie,
    HasRelationship,
    ComputeBaconNumber,
    ComputeBaconPath,
    Reset,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("Unknown operation: {0}")]
pub struct UnknownOperation(pub String);

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::AddActor,
        Operation::AddMovie,
        Operation::AddRelationship,
        Operation::GetActor,
        Operation::GetMovie,
        Operation::HasRelationship,
        Operation::ComputeBaconNumber,
        Operation::ComputeBaconPath,
        Operation::Reset,
    ];

    /// Path segment after `/api/v1/`
    pub fn path(self) -> &'static str {
        match self {
            Self::AddActor => "addActor",
            Self::AddMovie => "addMovie",
            Self::AddRelationship => "addRelationship",
            Self::GetActor => "getActor",
            Self::GetMovie => "getMovie",
            Self::HasRelationship => "hasRelationship",
            Self::ComputeBaconNumber => "computeBaconNumber",
            Self::ComputeBaconPath => "computeBaconPath",
            Self::Reset => "reset",
        }
    }

    pub fn method(self) -> OperationMethod {
        match self {
            Self::AddActor | Self::AddMovie | Self::AddRelationship => OperationMethod::Put,
            _ => OperationMethod::Get,
        }
    }
}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.path() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ActorQuery {
    #[serde(rename = "actorId")]
    actor_id: ActorId,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct MovieQuery {
    #[serde(rename = "movieId")]
    movie_id: MovieId,
}

#[derive(Debug, Serialize)]
struct BaconNumberResponse {
    #[serde(rename = "baconNumber")]
    bacon_number: String,
}

#[derive(Debug, Serialize)]
struct BaconPathResponse {
    #[serde(rename = "baconPath")]
    bacon_path: Vec<BaconHop>,
    #[serde(rename = "baconNumber")]
    bacon_number: String,
}

/// Response body
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    Empty,
    Json(serde_json::Value),
    Text(String),
}

/// Transport-neutral result of handling one operation
#[derive(Debug, Clone, PartialEq)]
pub struct HandlerResponse {
    pub status: u16,
    pub body: ResponseBody,
}

impl HandlerResponse {
    pub fn ok() -> Self {
        Self {
            status: 200,
            body: ResponseBody::Empty,
        }
    }

    pub fn json<T: Serialize>(data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Self {
                status: 200,
                body: ResponseBody::Json(value),
            },
            Err(e) => Self::internal(format!("JSON serialization error: {}", e)),
        }
    }

    pub fn error(err: &Error) -> Self {
        Self {
            status: err.status_code(),
            body: ResponseBody::Text(err.to_string()),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: 500,
            body: ResponseBody::Text(message.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

impl From<StorageError> for HandlerResponse {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Graph(err) => Self::error(&err),
            other => Self::internal(other.to_string()),
        }
    }
}

/// Decode a JSON payload, rejecting anything that is not exactly `T`
fn parse<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    Ok(serde_json::from_slice(body)?)
}

/// Dispatches operations to a storage backend
pub struct RequestHandler<S: StorageBackend> {
    storage: Arc<S>,
}

impl<S: StorageBackend + 'static> RequestHandler<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    pub async fn handle(&self, op: Operation, body: &[u8]) -> HandlerResponse {
        tracing::debug!("Handling {} ({} byte body)", op, body.len());

        let result = match op {
            Operation::AddActor => self.add_actor(body).await,
            Operation::AddMovie => self.add_movie(body).await,
            Operation::AddRelationship => self.add_relationship(body).await,
            Operation::GetActor => self.get_actor(body).await,
            Operation::GetMovie => self.get_movie(body).await,
            Operation::HasRelationship => self.has_relationship(body).await,
            Operation::ComputeBaconNumber => self.compute_bacon_number(body).await,
            Operation::ComputeBaconPath => self.compute_bacon_path(body).await,
            Operation::Reset => self.reset().await,
        };

        let response = result.unwrap_or_else(|response| response);
        if !response.is_success() {
            if let ResponseBody::Text(message) = &response.body {
                tracing::warn!("{} rejected with {}: {}", op, response.status, message);
            }
        }
        response
    }

    async fn add_actor(&self, body: &[u8]) -> Result<HandlerResponse, HandlerResponse> {
        let actor: NewActor = parse(body).map_err(|e| HandlerResponse::error(&e))?;
        actor
            .validate()
            .map_err(|e| HandlerResponse::error(&e.into()))?;

        let actor = self.storage.add_actor(actor).await?;
        tracing::info!("Added actor {} ({})", actor.actor_id, actor.name);
        Ok(HandlerResponse::ok())
    }

    async fn add_movie(&self, body: &[u8]) -> Result<HandlerResponse, HandlerResponse> {
        let movie: NewMovie = parse(body).map_err(|e| HandlerResponse::error(&e))?;
        movie
            .validate()
            .map_err(|e| HandlerResponse::error(&e.into()))?;

        let movie = self.storage.add_movie(movie).await?;
        tracing::info!("Added movie {} ({})", movie.movie_id, movie.name);
        Ok(HandlerResponse::ok())
    }

    async fn add_relationship(&self, body: &[u8]) -> Result<HandlerResponse, HandlerResponse> {
        let relationship = Self::parse_relationship(body)?;

        self.storage.add_relationship(relationship.clone()).await?;
        tracing::info!(
            "Added relationship {} <-> {}",
            relationship.actor_id,
            relationship.movie_id
        );
        Ok(HandlerResponse::ok())
    }

    async fn get_actor(&self, body: &[u8]) -> Result<HandlerResponse, HandlerResponse> {
        let query = Self::parse_actor_query(body)?;
        let actor = self.storage.get_actor(&query.actor_id).await?;
        Ok(HandlerResponse::json(&actor))
    }

    async fn get_movie(&self, body: &[u8]) -> Result<HandlerResponse, HandlerResponse> {
        let query: MovieQuery = parse(body).map_err(|e| HandlerResponse::error(&e))?;
        baconator_core::limits::validate_id("movieId", query.movie_id.as_str())
            .map_err(|e| HandlerResponse::error(&e.into()))?;

        let movie = self.storage.get_movie(&query.movie_id).await?;
        Ok(HandlerResponse::json(&movie))
    }

    async fn has_relationship(&self, body: &[u8]) -> Result<HandlerResponse, HandlerResponse> {
        let relationship = Self::parse_relationship(body)?;
        let exists = self.storage.has_relationship(&relationship).await?;
        Ok(HandlerResponse::json(&RelationshipStatus::new(
            relationship,
            exists,
        )))
    }

    async fn compute_bacon_number(&self, body: &[u8]) -> Result<HandlerResponse, HandlerResponse> {
        let query = Self::parse_actor_query(body)?;
        let number = self.storage.compute_bacon_number(&query.actor_id).await?;
        Ok(HandlerResponse::json(&BaconNumberResponse {
            bacon_number: number.to_string(),
        }))
    }

    async fn compute_bacon_path(&self, body: &[u8]) -> Result<HandlerResponse, HandlerResponse> {
        let query = Self::parse_actor_query(body)?;
        let path = self.storage.compute_bacon_path(&query.actor_id).await?;
        Ok(HandlerResponse::json(&BaconPathResponse {
            bacon_path: path.hops,
            bacon_number: path.bacon_number.to_string(),
        }))
    }

    async fn reset(&self) -> Result<HandlerResponse, HandlerResponse> {
        self.storage.reset().await?;
        Ok(HandlerResponse::ok())
    }

    fn parse_actor_query(body: &[u8]) -> Result<ActorQuery, HandlerResponse> {
        let query: ActorQuery = parse(body).map_err(|e| HandlerResponse::error(&e))?;
        baconator_core::limits::validate_id("actorId", query.actor_id.as_str())
            .map_err(|e| HandlerResponse::error(&e.into()))?;
        Ok(query)
    }

    fn parse_relationship(body: &[u8]) -> Result<Relationship, HandlerResponse> {
        let relationship: Relationship = parse(body).map_err(|e| HandlerResponse::error(&e))?;
        relationship
            .validate()
            .map_err(|e| HandlerResponse::error(&e.into()))?;
        Ok(relationship)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use baconator_storage::MemoryStorage;
    use serde_json::json;

    fn handler() -> RequestHandler<MemoryStorage> {
        RequestHandler::new(Arc::new(MemoryStorage::new("nm0000102")))
    }

    fn body(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn test_operation_paths_round_trip() {
        for op in Operation::ALL {
            assert_eq!(op.path().parse::<Operation>(), Ok(op));
        }
        assert_eq!(
            "addactor".parse::<Operation>(),
            Err(UnknownOperation("addactor".into()))
        );
    }

    #[test]
    fn test_operation_methods() {
        assert_eq!(Operation::AddRelationship.method(), OperationMethod::Put);
        assert_eq!(Operation::Reset.method(), OperationMethod::Get);
        assert_eq!(Operation::ComputeBaconPath.method(), OperationMethod::Get);
    }

    #[tokio::test]
    async fn test_garbage_payloads_are_malformed() {
        let handler = handler();
        let garbage = body(json!({ "trash": "trash" }));

        for op in Operation::ALL {
            if op == Operation::Reset {
                continue;
            }
            let response = handler.handle(op, &garbage).await;
            assert_eq!(response.status, 400, "{} accepted garbage", op);
        }

        let raws: [&[u8]; 4] = [b"", b"not json", b"[]", b"null"];
        for raw in raws {
            let response = handler.handle(Operation::AddActor, raw).await;
            assert_eq!(response.status, 400);
        }
    }

    #[tokio::test]
    async fn test_malformed_does_not_touch_the_graph() {
        let handler = handler();

        let extra = body(json!({ "name": "Kevin Bacon", "actorId": "nm0000102", "x": 1 }));
        assert_eq!(handler.handle(Operation::AddActor, &extra).await.status, 400);

        let mistyped = body(json!({ "name": "Kevin Bacon", "actorId": 102 }));
        assert_eq!(handler.handle(Operation::AddActor, &mistyped).await.status, 400);

        let empty = body(json!({ "name": "", "actorId": "nm0000102" }));
        assert_eq!(handler.handle(Operation::AddActor, &empty).await.status, 400);

        assert_eq!(handler.storage().stats().await.unwrap().actors, 0);
    }

    #[tokio::test]
    async fn test_reset_ignores_body() {
        let handler = handler();
        let response = handler.handle(Operation::Reset, b"whatever").await;
        assert_eq!(response, HandlerResponse::ok());
    }

    #[tokio::test]
    async fn test_bacon_number_is_string_encoded() {
        let handler = handler();
        let actor = body(json!({ "name": "Kevin Bacon", "actorId": "nm0000102" }));
        assert!(handler.handle(Operation::AddActor, &actor).await.is_success());

        let query = body(json!({ "actorId": "nm0000102" }));
        let response = handler.handle(Operation::ComputeBaconNumber, &query).await;
        assert_eq!(
            response.body,
            ResponseBody::Json(json!({ "baconNumber": "0" }))
        );
    }

    #[tokio::test]
    async fn test_missing_actor_status_depends_on_operation() {
        let handler = handler();
        let query = body(json!({ "actorId": "doesNotExist" }));

        let lookup = handler.handle(Operation::GetActor, &query).await;
        let compute = handler.handle(Operation::ComputeBaconNumber, &query).await;
        assert_eq!(lookup.status, 404);
        assert_eq!(compute.status, 400);
    }

    #[test]
    fn test_lock_error_is_internal() {
        let response: HandlerResponse = StorageError::Lock("poisoned".into()).into();
        assert_eq!(response.status, 500);
    }
}
