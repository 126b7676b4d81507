use crate::error::Result;
use crate::graph::traversal::require_location;
use crate::graph::GraphProvider;
use std::collections::HashSet;

/// Depth-first pre-order walk.
///
/// Each location is yielded the first time it is reached, before any of its
/// neighbors are explored; neighbors are explored in adjacency order. The
/// walk keeps an explicit stack of `(location, next neighbor index)` frames
/// instead of recursing, so depth is bounded by the heap rather than the call
/// stack while the visiting order matches the recursive form exactly.
pub struct DepthFirst<'g> {
    provider: &'g dyn GraphProvider,
    stack: Vec<(String, usize)>,
    visited: HashSet<String>,
    pending: Option<String>,
}

impl<'g> DepthFirst<'g> {
    /// Start a walk at `start`, which must exist
    pub fn new(provider: &'g dyn GraphProvider, start: &str) -> Result<Self> {
        require_location(provider, start)?;
        Ok(DepthFirst {
            provider,
            stack: Vec::new(),
            visited: HashSet::new(),
            pending: Some(start.to_string()),
        })
    }

    /// Locations yielded so far
    pub fn visited(&self) -> &HashSet<String> {
        &self.visited
    }

    fn visit(&mut self, name: String) -> String {
        self.visited.insert(name.clone());
        self.stack.push((name.clone(), 0));
        name
    }

    /// Advance the top frame to its next unvisited neighbor, popping
    /// exhausted frames
    fn next_unvisited(&mut self) -> Result<Option<String>> {
        let provider = self.provider;
        while let Some((current, cursor)) = self.stack.last_mut() {
            let neighbors = provider.neighbors(current)?;
            match neighbors[*cursor..]
                .iter()
                .position(|n| !self.visited.contains(n))
            {
                Some(offset) => {
                    *cursor += offset + 1;
                    return Ok(Some(neighbors[*cursor - 1].clone()));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        Ok(None)
    }
}

impl Iterator for DepthFirst<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(start) = self.pending.take() {
            return Some(Ok(self.visit(start)));
        }

        match self.next_unvisited() {
            Ok(Some(name)) => Some(Ok(self.visit(name))),
            Ok(None) => None,
            Err(e) => {
                self.stack.clear();
                Some(Err(e))
            }
        }
    }
}
