//! Baconator Core - Actor/movie graph engine
//!
//! This crate provides the data types, the in-memory bipartite graph and the
//! breadth-first Bacon-number search for the Baconator service.

pub mod actor;
pub mod error;
pub mod graph;
pub mod limits;
pub mod movie;
pub mod relationship;
pub mod traversal;

pub use actor::{Actor, ActorId, NewActor};
pub use error::{Error, ErrorKind, Result};
pub use graph::{MovieGraph, DEFAULT_REFERENCE_ACTOR};
pub use movie::{Movie, MovieId, NewMovie};
pub use relationship::{Relationship, RelationshipStatus};
pub use traversal::{BaconEngine, BaconHop, BaconPath, TraversalStats};
