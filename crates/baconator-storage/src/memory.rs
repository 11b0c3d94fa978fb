//! In-memory storage backend

use std::sync::{Arc, RwLock};

use crate::error::{StorageError, StorageResult};
use crate::traits::StorageBackend;
use async_trait::async_trait;
use baconator_core::{Actor, Movie, MovieGraph, NewActor, NewMovie, Relationship};

/// In-memory storage backend
///
/// One lock guards the whole graph. Writers mutate through
/// [`Arc::make_mut`], so a snapshot handed out earlier keeps its contents.
/// A write made while any snapshot is still alive clones the whole graph.
pub struct MemoryStorage {
    graph: RwLock<Arc<MovieGraph>>,
}

impl MemoryStorage {
    /// Empty storage measuring Bacon numbers from `reference_actor`
    pub fn new(reference_actor: &str) -> Self {
        Self {
            graph: RwLock::new(Arc::new(MovieGraph::new(reference_actor))),
        }
    }

    fn write<T>(
        &self,
        op: impl FnOnce(&mut MovieGraph) -> baconator_core::Result<T>,
    ) -> StorageResult<T> {
        let mut guard = self
            .graph
            .write()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(op(Arc::make_mut(&mut *guard))?)
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new(baconator_core::DEFAULT_REFERENCE_ACTOR)
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    async fn initialize(&self) -> StorageResult<()> {
        let graph = self.snapshot().await?;
        tracing::debug!(
            "Memory storage ready, reference actor {}",
            graph.reference_actor()
        );
        Ok(())
    }

    async fn health_check(&self) -> StorageResult<bool> {
        Ok(!self.graph.is_poisoned())
    }

    async fn add_actor(&self, actor: NewActor) -> StorageResult<Actor> {
        self.write(|graph| graph.add_actor(actor))
    }

    async fn add_movie(&self, movie: NewMovie) -> StorageResult<Movie> {
        self.write(|graph| graph.add_movie(movie))
    }

    async fn add_relationship(&self, relationship: Relationship) -> StorageResult<()> {
        self.write(|graph| graph.add_relationship(relationship))
    }

    async fn reset(&self) -> StorageResult<()> {
        let mut guard = self
            .graph
            .write()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        // Outstanding snapshots keep the old graph
        let reference = guard.reference_actor().clone();
        *guard = Arc::new(MovieGraph::new(reference));
        tracing::info!("Graph reset");
        Ok(())
    }

    async fn snapshot(&self) -> StorageResult<Arc<MovieGraph>> {
        let guard = self
            .graph
            .read()
            .map_err(|e| StorageError::Lock(e.to_string()))?;
        Ok(Arc::clone(&guard))
    }
}
