use crate::error::{ArrakisError, Result};
use crate::graph::model::Graph;

/// Trait for providing read-only graph adjacency
pub trait GraphProvider {
    /// Neighbors of a location in adjacency order.
    ///
    /// Unknown locations fail with `LocationNotFound`; there is no implicit
    /// empty default.
    fn neighbors(&self, name: &str) -> Result<&[String]>;
    fn contains(&self, name: &str) -> bool;
    fn node_count(&self) -> usize;
    /// Location names in declaration order
    fn node_names(&self) -> Vec<&str>;
}

impl GraphProvider for Graph {
    fn neighbors(&self, name: &str) -> Result<&[String]> {
        self.neighbors_of(name)
            .ok_or_else(|| ArrakisError::location_not_found(name))
    }

    fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    fn node_count(&self) -> usize {
        self.len()
    }

    fn node_names(&self) -> Vec<&str> {
        self.names().collect()
    }
}

/// Fail with `LocationNotFound` unless the provider knows `name`
pub(crate) fn require_location(provider: &dyn GraphProvider, name: &str) -> Result<()> {
    if provider.contains(name) {
        Ok(())
    } else {
        Err(ArrakisError::location_not_found(name))
    }
}
