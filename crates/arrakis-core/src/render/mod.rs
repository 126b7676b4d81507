//! Map rendering
//!
//! Renders the map as a node-and-edge diagram with an optional highlighted
//! route and an optional highlighted exploration order:
//! - **DOT**: Graphviz format (`dot -Tpng map.dot -o map.png`)
//! - **Mermaid**: Markdown-compatible flowchart for documentation
//!
//! Route edges are drawn red. Consecutive pairs of the exploration order
//! are drawn green; pairs that are not map edges (where the depth-first
//! walk backtracked) are drawn as extra dashed green lines.

mod dot;
mod mermaid;

use std::collections::HashSet;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::{ArrakisError, Result};
use crate::graph::types::{consecutive_pairs, Route};
use crate::graph::Graph;

pub use dot::render_dot;
pub use mermaid::render_mermaid;

pub const ROUTE_COLOR: &str = "red";
pub const VISIT_COLOR: &str = "green";
pub const HIGHLIGHT_WIDTH: u32 = 4;

/// Diagram syntax to emit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStyle {
    #[default]
    Dot,
    Mermaid,
}

impl FromStr for RenderStyle {
    type Err = ArrakisError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "dot" | "graphviz" => Ok(RenderStyle::Dot),
            "mermaid" => Ok(RenderStyle::Mermaid),
            other => Err(ArrakisError::invalid_value(
                "render style (expected: dot, mermaid)",
                other,
            )),
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderStyle::Dot => write!(f, "dot"),
            RenderStyle::Mermaid => write!(f, "mermaid"),
        }
    }
}

/// Results to draw on top of the map
#[derive(Debug, Clone, Copy, Default)]
pub struct Highlight<'a> {
    pub route: Option<&'a Route>,
    pub visits: Option<&'a [String]>,
}

/// How a single line of the diagram is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EdgeMark {
    Plain,
    Route,
    Visit,
    RouteAndVisit,
    /// Exploration jump between locations that share no edge
    VisitJump,
}

/// A line to draw, in output order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DrawnEdge<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub mark: EdgeMark,
}

fn unordered<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Every map edge once, marked by highlight membership, followed by the
/// exploration jumps that are not map edges
pub(crate) fn plan_edges<'a>(graph: &'a Graph, highlight: &Highlight<'a>) -> Vec<DrawnEdge<'a>> {
    let route_pairs: HashSet<(&str, &str)> = highlight
        .route
        .map(|route| {
            route
                .edges()
                .into_iter()
                .map(|(a, b)| unordered(a, b))
                .collect()
        })
        .unwrap_or_default();
    let visit_pairs: Vec<(&str, &str)> = highlight.visits.map(consecutive_pairs).unwrap_or_default();
    let visit_set: HashSet<(&str, &str)> =
        visit_pairs.iter().map(|&(a, b)| unordered(a, b)).collect();

    let mut drawn: Vec<DrawnEdge> = graph
        .edges()
        .into_iter()
        .map(|(from, to)| {
            let key = unordered(from, to);
            let mark = match (route_pairs.contains(&key), visit_set.contains(&key)) {
                (true, true) => EdgeMark::RouteAndVisit,
                (true, false) => EdgeMark::Route,
                (false, true) => EdgeMark::Visit,
                (false, false) => EdgeMark::Plain,
            };
            DrawnEdge { from, to, mark }
        })
        .collect();

    for (from, to) in visit_pairs {
        if !graph.has_edge(from, to) {
            drawn.push(DrawnEdge {
                from,
                to,
                mark: EdgeMark::VisitJump,
            });
        }
    }

    drawn
}

/// Render `graph` with `highlight` in the given style
pub fn render<W: Write>(
    graph: &Graph,
    name: &str,
    highlight: &Highlight,
    style: RenderStyle,
    out: &mut W,
) -> Result<()> {
    match style {
        RenderStyle::Dot => render_dot(graph, name, highlight, out),
        RenderStyle::Mermaid => render_mermaid(graph, name, highlight, out),
    }
}

/// Render to an in-memory string
pub fn render_to_string(
    graph: &Graph,
    name: &str,
    highlight: &Highlight,
    style: RenderStyle,
) -> Result<String> {
    let mut buf = Vec::new();
    render(graph, name, highlight, style, &mut buf)?;
    String::from_utf8(buf).map_err(|e| ArrakisError::Other(e.to_string()))
}
