//! Undirected adjacency-list graph of named locations

use std::collections::{HashMap, HashSet};

use crate::bail_invalid_map;
use crate::error::Result;

/// Immutable undirected graph.
///
/// Locations keep their declaration order, and each neighbor list keeps the
/// order it was declared in. Traversals depend on both orders for
/// deterministic tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    names: Vec<String>,
    adjacency: Vec<Vec<String>>,
    positions: HashMap<String, usize>,
}

impl Graph {
    /// Build a graph from `(location, neighbors)` pairs.
    ///
    /// Rejects duplicate locations, unknown neighbors, self-loops, repeated
    /// neighbors and asymmetric adjacency.
    pub fn from_adjacency<I, S, N>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, N)>,
        S: Into<String>,
        N: IntoIterator,
        N::Item: Into<String>,
    {
        let mut names = Vec::new();
        let mut adjacency = Vec::new();
        let mut positions = HashMap::new();

        for (name, neighbors) in entries {
            let name = name.into();
            if positions.contains_key(&name) {
                bail_invalid_map!("duplicate location '{}'", name);
            }
            positions.insert(name.clone(), names.len());
            names.push(name);
            adjacency.push(neighbors.into_iter().map(Into::into).collect::<Vec<String>>());
        }

        let graph = Graph {
            names,
            adjacency,
            positions,
        };
        graph.validate()?;
        Ok(graph)
    }

    fn validate(&self) -> Result<()> {
        for (name, neighbors) in self.names.iter().zip(&self.adjacency) {
            let mut seen = HashSet::new();
            for neighbor in neighbors {
                if neighbor == name {
                    bail_invalid_map!("self-loop at '{}'", name);
                }
                if !seen.insert(neighbor.as_str()) {
                    bail_invalid_map!("'{}' lists neighbor '{}' more than once", name, neighbor);
                }
                let Some(back) = self.neighbors_of(neighbor) else {
                    bail_invalid_map!("'{}' lists unknown neighbor '{}'", name, neighbor);
                };
                if !back.iter().any(|n| n == name) {
                    bail_invalid_map!(
                        "edge '{}' -> '{}' has no matching '{}' -> '{}'",
                        name,
                        neighbor,
                        neighbor,
                        name
                    );
                }
            }
        }
        Ok(())
    }

    /// Number of locations
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Location names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub(crate) fn neighbors_of(&self, name: &str) -> Option<&[String]> {
        self.position(name).map(|i| self.adjacency[i].as_slice())
    }

    /// `(location, neighbors)` pairs in declaration order
    pub fn adjacency(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.names
            .iter()
            .zip(&self.adjacency)
            .map(|(name, neighbors)| (name.as_str(), neighbors.as_slice()))
    }

    /// Each undirected edge exactly once, ordered by its earlier-declared endpoint
    pub fn edges(&self) -> Vec<(&str, &str)> {
        let mut edges = Vec::new();
        for (i, (name, neighbors)) in self.names.iter().zip(&self.adjacency).enumerate() {
            for neighbor in neighbors {
                if self.position(neighbor).is_some_and(|j| j > i) {
                    edges.push((name.as_str(), neighbor.as_str()));
                }
            }
        }
        edges
    }

    /// Whether `a` and `b` are joined by an edge
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.neighbors_of(a)
            .is_some_and(|neighbors| neighbors.iter().any(|n| n == b))
    }
}
