use serde::Serialize;

/// Ordered sequence of distinct locations, each consecutive pair joined by an edge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Route {
    pub stops: Vec<String>,
}

impl Route {
    pub fn new(stops: Vec<String>) -> Self {
        Route { stops }
    }

    /// Number of edges traversed (stops - 1, or 0 for an empty route)
    pub fn hops(&self) -> usize {
        self.stops.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.stops.iter().any(|s| s == name)
    }

    pub fn first(&self) -> Option<&str> {
        self.stops.first().map(String::as_str)
    }

    pub fn last(&self) -> Option<&str> {
        self.stops.last().map(String::as_str)
    }

    /// Consecutive pairs of stops
    pub fn edges(&self) -> Vec<(&str, &str)> {
        consecutive_pairs(&self.stops)
    }

    /// True when no location repeats
    pub fn is_simple(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.stops.iter().all(|s| seen.insert(s.as_str()))
    }
}

impl From<Vec<String>> for Route {
    fn from(stops: Vec<String>) -> Self {
        Route::new(stops)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.stops.join(" -> "))
    }
}

/// Consecutive `(a, b)` pairs of an ordered sequence
pub fn consecutive_pairs(items: &[String]) -> Vec<(&str, &str)> {
    items
        .windows(2)
        .map(|w| (w[0].as_str(), w[1].as_str()))
        .collect()
}

/// Shortest path result
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub route: Route,
    pub hops: usize,
}

/// Options for safe route enumeration
#[derive(Debug, Clone, Default)]
pub struct RouteOptions {
    /// Location no route may pass through
    pub avoid: Option<String>,
    /// Stop after this many complete routes
    pub max_routes: Option<usize>,
}

/// All simple routes between two locations
#[derive(Debug, Clone, Serialize)]
pub struct RoutesResult {
    pub from: String,
    pub to: String,
    pub avoid: Option<String>,
    pub truncated: bool,
    pub routes: Vec<Route>,
}

/// Reachability report for a depth-first connectivity check
#[derive(Debug, Clone, Serialize)]
pub struct ConnectivityReport {
    pub start: String,
    pub connected: bool,
    pub reachable: usize,
    pub total: usize,
    /// Locations not reached from `start`, in declaration order
    pub unreachable: Vec<String>,
}

/// Depth-first exploration order
#[derive(Debug, Clone, Serialize)]
pub struct ExploreResult {
    pub start: String,
    pub order: Vec<String>,
}
