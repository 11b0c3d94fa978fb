//! Storage backend trait definitions

use std::sync::Arc;

use crate::error::StorageResult;
use async_trait::async_trait;
use baconator_core::{
    Actor, ActorId, BaconEngine, BaconPath, Movie, MovieGraph, MovieId, NewActor, NewMovie,
    Relationship,
};
use serde::Serialize;

/// Size of the stored graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub actors: usize,
    pub movies: usize,
    pub relationships: usize,
}

impl GraphStats {
    pub fn of(graph: &MovieGraph) -> Self {
        Self {
            actors: graph.actor_count(),
            movies: graph.movie_count(),
            relationships: graph.relationship_count(),
        }
    }
}

/// Trait for storage backend implementations
///
/// Mutations are serialized against each other. Reads observe a consistent
/// snapshot that later mutations cannot change.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Initialize the storage
    async fn initialize(&self) -> StorageResult<()>;

    /// Health check
    async fn health_check(&self) -> StorageResult<bool>;

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add an actor; id and name must both be unused
    async fn add_actor(&self, actor: NewActor) -> StorageResult<Actor>;

    /// Add a movie; id and name must both be unused
    async fn add_movie(&self, movie: NewMovie) -> StorageResult<Movie>;

    /// Connect an existing actor and movie
    async fn add_relationship(&self, relationship: Relationship) -> StorageResult<()>;

    /// Drop all actors, movies and relationships
    async fn reset(&self) -> StorageResult<()>;

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    /// Immutable view of the graph as of now
    async fn snapshot(&self) -> StorageResult<Arc<MovieGraph>>;

    async fn get_actor(&self, actor_id: &ActorId) -> StorageResult<Actor> {
        Ok(self.snapshot().await?.get_actor(actor_id)?)
    }

    async fn get_movie(&self, movie_id: &MovieId) -> StorageResult<Movie> {
        Ok(self.snapshot().await?.get_movie(movie_id)?)
    }

    async fn has_relationship(&self, relationship: &Relationship) -> StorageResult<bool> {
        Ok(self.snapshot().await?.has_relationship(relationship)?)
    }

    async fn stats(&self) -> StorageResult<GraphStats> {
        Ok(GraphStats::of(&*self.snapshot().await?))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Bacon Operations
    // ─────────────────────────────────────────────────────────────────────────

    async fn compute_bacon_number(&self, actor_id: &ActorId) -> StorageResult<usize> {
        let graph = self.snapshot().await?;
        Ok(BaconEngine::bacon_number(&graph, actor_id)?)
    }

    async fn compute_bacon_path(&self, actor_id: &ActorId) -> StorageResult<BaconPath> {
        let graph = self.snapshot().await?;
        Ok(BaconEngine::bacon_path(&graph, actor_id)?)
    }
}
