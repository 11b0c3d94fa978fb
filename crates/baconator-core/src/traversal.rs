//! Bacon number and Bacon path search

use crate::actor::ActorId;
use crate::error::{Error, Result};
use crate::graph::MovieGraph;
use crate::movie::MovieId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};

/// One step of a Bacon path: an actor and the movie used to move on
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaconHop {
    #[serde(rename = "actorId")]
    pub actor_id: ActorId,
    #[serde(rename = "movieId")]
    pub movie_id: MovieId,
}

impl BaconHop {
    pub fn new(actor_id: impl Into<ActorId>, movie_id: impl Into<MovieId>) -> Self {
        Self {
            actor_id: actor_id.into(),
            movie_id: movie_id.into(),
        }
    }
}

/// A shortest chain from an actor to the reference actor
///
/// `hops.len() == bacon_number + 1`; the last hop is always the reference
/// actor paired with the movie it was reached through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaconPath {
    pub hops: Vec<BaconHop>,
    pub bacon_number: usize,
}

/// Traversal statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraversalStats {
    pub actors_visited: usize,
    pub movies_visited: usize,
    pub edges_traversed: usize,
    pub max_depth_reached: usize,
    pub path_found: bool,
}

/// predecessor actor and the shared movie, keyed by the actor reached
type ParentMap = HashMap<ActorId, (ActorId, MovieId)>;

/// Breadth-first search over the bipartite actor/movie graph
pub struct BaconEngine;

impl BaconEngine {
    /// Distance in co-star hops from `actor_id` to the reference actor
    pub fn bacon_number(graph: &MovieGraph, actor_id: &ActorId) -> Result<usize> {
        Self::bacon_path_inner(graph, actor_id, false).map(|path| path.bacon_number)
    }

    /// One shortest path from `actor_id` to the reference actor
    pub fn bacon_path(graph: &MovieGraph, actor_id: &ActorId) -> Result<BaconPath> {
        Self::bacon_path_inner(graph, actor_id, true)
    }

    fn bacon_path_inner(
        graph: &MovieGraph,
        actor_id: &ActorId,
        need_hops: bool,
    ) -> Result<BaconPath> {
        let reference = graph.reference_actor();
        let start = graph
            .actor(actor_id)
            .ok_or_else(|| Error::UnknownActor(actor_id.0.clone()))?;

        tracing::debug!("Computing Bacon path: start={}, reference={}", actor_id, reference);

        if actor_id == reference {
            if !need_hops {
                return Ok(BaconPath {
                    hops: Vec::new(),
                    bacon_number: 0,
                });
            }
            // Any movie will do; the first one added is stable across calls
            return match start.movies.first() {
                Some(movie_id) => Ok(BaconPath {
                    hops: vec![BaconHop::new(reference.clone(), movie_id.clone())],
                    bacon_number: 0,
                }),
                None => Err(Self::no_path(actor_id, reference)),
            };
        }

        let (parent, stats) = Self::bfs(graph, actor_id, reference);
        tracing::debug!(
            "BFS visited {} actors and {} movies, traversed {} edges",
            stats.actors_visited,
            stats.movies_visited,
            stats.edges_traversed
        );

        if !stats.path_found {
            return Err(Self::no_path(actor_id, reference));
        }

        let hops = Self::reconstruct_path(actor_id, reference, &parent);
        if hops.len() < 2 {
            return Err(Self::no_path(actor_id, reference));
        }

        Ok(BaconPath {
            bacon_number: hops.len() - 1,
            hops,
        })
    }

    /// Expand actor -> movie -> actor layers until `target` is discovered
    ///
    /// Neighbors are visited in adjacency insertion order, so the first
    /// shortest path found is deterministic for a given graph.
    fn bfs(graph: &MovieGraph, start: &ActorId, target: &ActorId) -> (ParentMap, TraversalStats) {
        let mut visited_actors: HashSet<&ActorId> = HashSet::new();
        let mut visited_movies: HashSet<&MovieId> = HashSet::new();
        let mut parent: ParentMap = HashMap::new();
        let mut queue: VecDeque<(&ActorId, usize)> = VecDeque::new();
        let mut stats = TraversalStats::default();

        queue.push_back((start, 0));
        visited_actors.insert(start);

        'search: while let Some((current, depth)) = queue.pop_front() {
            stats.actors_visited += 1;
            stats.max_depth_reached = stats.max_depth_reached.max(depth);

            let Some(actor) = graph.actor(current) else {
                continue;
            };

            for movie_id in &actor.movies {
                if !visited_movies.insert(movie_id) {
                    continue;
                }
                stats.movies_visited += 1;

                let Some(movie) = graph.movie(movie_id) else {
                    continue;
                };

                for co_star in &movie.actors {
                    stats.edges_traversed += 1;
                    if !visited_actors.insert(co_star) {
                        continue;
                    }
                    parent.insert(co_star.clone(), (current.clone(), movie_id.clone()));

                    if co_star == target {
                        stats.path_found = true;
                        stats.max_depth_reached = depth + 1;
                        tracing::debug!("BFS reached {} at depth {}", target, depth + 1);
                        break 'search;
                    }
                    queue.push_back((co_star, depth + 1));
                }
            }
        }

        (parent, stats)
    }

    /// Walk predecessor links back from `end`, then emit hops start-first
    fn reconstruct_path(start: &ActorId, end: &ActorId, parent: &ParentMap) -> Vec<BaconHop> {
        let mut links: Vec<BaconHop> = Vec::new();
        let mut current = end;

        while current != start {
            match parent.get(current) {
                Some((prev, movie_id)) => {
                    links.push(BaconHop::new(prev.clone(), movie_id.clone()));
                    current = prev;
                }
                None => return Vec::new(),
            }
        }

        links.reverse();
        if let Some(last_movie) = links.last().map(|hop| hop.movie_id.clone()) {
            links.push(BaconHop::new(end.clone(), last_movie));
        }
        links
    }

    fn no_path(from: &ActorId, to: &ActorId) -> Error {
        Error::NoPathFound {
            from: from.0.clone(),
            to: to.0.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::NewActor;
    use crate::error::ErrorKind;
    use crate::movie::NewMovie;
    use crate::relationship::Relationship;

    const BACON: &str = "nm0000102";

    fn add_actor(graph: &mut MovieGraph, id: &str, name: &str) {
        graph.add_actor(NewActor::new(id, name)).unwrap();
    }

    fn add_movie(graph: &mut MovieGraph, id: &str, name: &str) {
        graph.add_movie(NewMovie::new(id, name)).unwrap();
    }

    fn link(graph: &mut MovieGraph, actor: &str, movie: &str) {
        graph
            .add_relationship(Relationship::new(actor, movie))
            .unwrap();
    }

    /// Kevin Bacon and poops share "space jam"; poops and johnny share "bleach";
    /// johnnyyy has no movies.
    fn create_test_graph() -> MovieGraph {
        let mut graph = MovieGraph::new(BACON);
        add_actor(&mut graph, BACON, "Kevin Bacon");
        add_movie(&mut graph, "1", "space jam");
        link(&mut graph, BACON, "1");
        add_actor(&mut graph, "3", "poops");
        add_movie(&mut graph, "3", "naruto");
        link(&mut graph, "3", "1");
        add_movie(&mut graph, "5", "bleach");
        add_actor(&mut graph, "4", "johnny");
        link(&mut graph, "4", "5");
        link(&mut graph, "3", "5");
        add_actor(&mut graph, "9", "johnnyyy");
        graph
    }

    fn id(s: &str) -> ActorId {
        ActorId::from(s)
    }

    #[test]
    fn test_reference_actor_is_zero() {
        let graph = create_test_graph();
        assert_eq!(BaconEngine::bacon_number(&graph, &id(BACON)).unwrap(), 0);

        let path = BaconEngine::bacon_path(&graph, &id(BACON)).unwrap();
        assert_eq!(path.bacon_number, 0);
        assert_eq!(path.hops, vec![BaconHop::new(BACON, "1")]);
    }

    #[test]
    fn test_direct_co_star() {
        let graph = create_test_graph();
        assert_eq!(BaconEngine::bacon_number(&graph, &id("3")).unwrap(), 1);

        let path = BaconEngine::bacon_path(&graph, &id("3")).unwrap();
        assert_eq!(
            path.hops,
            vec![BaconHop::new("3", "1"), BaconHop::new(BACON, "1")]
        );
    }

    #[test]
    fn test_two_hops() {
        let graph = create_test_graph();
        assert_eq!(BaconEngine::bacon_number(&graph, &id("4")).unwrap(), 2);

        let path = BaconEngine::bacon_path(&graph, &id("4")).unwrap();
        assert_eq!(path.bacon_number, 2);
        assert_eq!(
            path.hops,
            vec![
                BaconHop::new("4", "5"),
                BaconHop::new("3", "1"),
                BaconHop::new(BACON, "1"),
            ]
        );
    }

    #[test]
    fn test_unknown_actor_is_bad_input() {
        let graph = create_test_graph();
        let err = BaconEngine::bacon_number(&graph, &id("12")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadInput);
        let err = BaconEngine::bacon_path(&graph, &id("12")).unwrap_err();
        assert_eq!(err, Error::UnknownActor("12".into()));
    }

    #[test]
    fn test_disconnected_actor() {
        let graph = create_test_graph();
        let err = BaconEngine::bacon_number(&graph, &id("9")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoPathFound);
        let err = BaconEngine::bacon_path(&graph, &id("9")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoPathFound);
    }

    #[test]
    fn test_reference_actor_missing() {
        let mut graph = MovieGraph::new(BACON);
        add_actor(&mut graph, "3", "poops");
        add_movie(&mut graph, "1", "space jam");
        link(&mut graph, "3", "1");

        let err = BaconEngine::bacon_number(&graph, &id("3")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoPathFound);
    }

    #[test]
    fn test_reference_actor_without_movies_has_no_path() {
        let mut graph = MovieGraph::new(BACON);
        add_actor(&mut graph, BACON, "Kevin Bacon");

        assert_eq!(BaconEngine::bacon_number(&graph, &id(BACON)).unwrap(), 0);
        let err = BaconEngine::bacon_path(&graph, &id(BACON)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoPathFound);
    }

    #[test]
    fn test_shortest_path_wins_over_first_found_branch() {
        // a -> long chain via movie "m1" inserted first, short route via "m2"
        let mut graph = MovieGraph::new(BACON);
        add_actor(&mut graph, BACON, "Kevin Bacon");
        for (actor, name) in [("a", "A"), ("b", "B"), ("c", "C")] {
            add_actor(&mut graph, actor, name);
        }
        for (movie, name) in [("m1", "M1"), ("m2", "M2"), ("m3", "M3"), ("m4", "M4")] {
            add_movie(&mut graph, movie, name);
        }
        // Long: a -m1- b -m3- c -m4- bacon
        link(&mut graph, "a", "m1");
        link(&mut graph, "b", "m1");
        link(&mut graph, "b", "m3");
        link(&mut graph, "c", "m3");
        link(&mut graph, "c", "m4");
        link(&mut graph, BACON, "m4");
        // Short: a -m2- bacon
        link(&mut graph, "a", "m2");
        link(&mut graph, BACON, "m2");

        let path = BaconEngine::bacon_path(&graph, &id("a")).unwrap();
        assert_eq!(path.bacon_number, 1);
        assert_eq!(
            path.hops,
            vec![BaconHop::new("a", "m2"), BaconHop::new(BACON, "m2")]
        );
    }

    #[test]
    fn test_path_length_matches_number() {
        let graph = create_test_graph();
        for actor in [BACON, "3", "4"] {
            let number = BaconEngine::bacon_number(&graph, &id(actor)).unwrap();
            let path = BaconEngine::bacon_path(&graph, &id(actor)).unwrap();
            assert_eq!(path.hops.len(), number + 1);
            assert_eq!(path.bacon_number, number);
            assert_eq!(path.hops.last().unwrap().actor_id.as_str(), BACON);
            assert_eq!(path.hops.first().unwrap().actor_id.as_str(), actor);
        }
    }

    #[test]
    fn test_consecutive_hops_share_movies() {
        let graph = create_test_graph();
        let path = BaconEngine::bacon_path(&graph, &id("4")).unwrap();

        for window in path.hops.windows(2) {
            let (hop, next) = (&window[0], &window[1]);
            let movie = graph.movie(&hop.movie_id).unwrap();
            assert!(movie.actors.contains(&hop.actor_id));
            assert!(movie.actors.contains(&next.actor_id));
        }
    }

    #[test]
    fn test_bfs_stats() {
        let graph = create_test_graph();
        let (_, stats) = BaconEngine::bfs(&graph, &id("4"), &id(BACON));
        assert!(stats.path_found);
        assert_eq!(stats.max_depth_reached, 2);
        assert!(stats.movies_visited >= 2);

        let (parent, stats) = BaconEngine::bfs(&graph, &id("9"), &id(BACON));
        assert!(!stats.path_found);
        assert!(parent.is_empty());
        assert_eq!(stats.actors_visited, 1);
    }
}
