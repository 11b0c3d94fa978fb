//! In-memory bipartite actor/movie graph

use crate::actor::{Actor, ActorId, NewActor};
use crate::error::{Error, Result};
use crate::movie::{Movie, MovieId, NewMovie};
use crate::relationship::Relationship;
use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// Kevin Bacon's IMDb identifier
pub const DEFAULT_REFERENCE_ACTOR: &str = "nm0000102";

/// Actor/movie graph with unique ids and names per namespace
///
/// Actors and movies live in separate namespaces: an actor and a movie may
/// share an identifier or a name. Within a namespace both the identifier and
/// the name must be unique. Relationships are add-only.
#[derive(Debug, Clone)]
pub struct MovieGraph {
    reference_actor: ActorId,
    actors: IndexMap<ActorId, Actor>,
    actor_names: HashMap<String, ActorId>,
    movies: IndexMap<MovieId, Movie>,
    movie_names: HashMap<String, MovieId>,
    relationships: HashSet<Relationship>,
}

impl Default for MovieGraph {
    fn default() -> Self {
        Self::new(DEFAULT_REFERENCE_ACTOR)
    }
}

impl MovieGraph {
    /// Create an empty graph measuring distances from `reference_actor`
    pub fn new(reference_actor: impl Into<ActorId>) -> Self {
        Self {
            reference_actor: reference_actor.into(),
            actors: IndexMap::new(),
            actor_names: HashMap::new(),
            movies: IndexMap::new(),
            movie_names: HashMap::new(),
            relationships: HashSet::new(),
        }
    }

    pub fn reference_actor(&self) -> &ActorId {
        &self.reference_actor
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Add an actor with no movies
    pub fn add_actor(&mut self, new: NewActor) -> Result<Actor> {
        if self.actors.contains_key(&new.actor_id) {
            return Err(Error::ActorExists(new.actor_id.0));
        }
        if self.actor_names.contains_key(&new.name) {
            return Err(Error::ActorNameExists(new.name));
        }

        let actor = Actor::new(new.actor_id, new.name);
        self.actor_names
            .insert(actor.name.clone(), actor.actor_id.clone());
        self.actors.insert(actor.actor_id.clone(), actor.clone());
        Ok(actor)
    }

    /// Add a movie with an empty cast
    pub fn add_movie(&mut self, new: NewMovie) -> Result<Movie> {
        if self.movies.contains_key(&new.movie_id) {
            return Err(Error::MovieExists(new.movie_id.0));
        }
        if self.movie_names.contains_key(&new.name) {
            return Err(Error::MovieNameExists(new.name));
        }

        let movie = Movie::new(new.movie_id, new.name);
        self.movie_names
            .insert(movie.name.clone(), movie.movie_id.clone());
        self.movies.insert(movie.movie_id.clone(), movie.clone());
        Ok(movie)
    }

    /// Connect an existing actor to an existing movie
    ///
    /// The actor is looked up before the movie. Adding an edge twice is a
    /// conflict, not a no-op.
    pub fn add_relationship(&mut self, relationship: Relationship) -> Result<()> {
        self.ensure_endpoints(&relationship)?;
        if self.relationships.contains(&relationship) {
            return Err(Error::RelationshipExists {
                actor: relationship.actor_id.0,
                movie: relationship.movie_id.0,
            });
        }

        if let Some(actor) = self.actors.get_mut(&relationship.actor_id) {
            actor.movies.push(relationship.movie_id.clone());
        }
        if let Some(movie) = self.movies.get_mut(&relationship.movie_id) {
            movie.actors.push(relationship.actor_id.clone());
        }
        self.relationships.insert(relationship);
        Ok(())
    }

    /// Remove every actor, movie and relationship
    ///
    /// The reference actor id is kept; it is configuration, not data.
    pub fn reset(&mut self) {
        self.actors.clear();
        self.actor_names.clear();
        self.movies.clear();
        self.movie_names.clear();
        self.relationships.clear();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Queries
    // ─────────────────────────────────────────────────────────────────────────

    pub fn get_actor(&self, actor_id: &ActorId) -> Result<Actor> {
        self.actor(actor_id)
            .cloned()
            .ok_or_else(|| Error::ActorNotFound(actor_id.0.clone()))
    }

    pub fn get_movie(&self, movie_id: &MovieId) -> Result<Movie> {
        self.movie(movie_id)
            .cloned()
            .ok_or_else(|| Error::MovieNotFound(movie_id.0.clone()))
    }

    /// Whether the edge exists; both endpoints must exist
    pub fn has_relationship(&self, relationship: &Relationship) -> Result<bool> {
        self.ensure_endpoints(relationship)?;
        Ok(self.relationships.contains(relationship))
    }

    pub fn actor(&self, actor_id: &ActorId) -> Option<&Actor> {
        self.actors.get(actor_id)
    }

    pub fn movie(&self, movie_id: &MovieId) -> Option<&Movie> {
        self.movies.get(movie_id)
    }

    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty() && self.movies.is_empty()
    }

    fn ensure_endpoints(&self, relationship: &Relationship) -> Result<()> {
        if !self.actors.contains_key(&relationship.actor_id) {
            return Err(Error::ActorNotFound(relationship.actor_id.0.clone()));
        }
        if !self.movies.contains_key(&relationship.movie_id) {
            return Err(Error::MovieNotFound(relationship.movie_id.0.clone()));
        }
        Ok(())
    }
}
