use std::io::Write;

use super::{plan_edges, EdgeMark, Highlight, HIGHLIGHT_WIDTH, ROUTE_COLOR, VISIT_COLOR};
use crate::error::Result;
use crate::graph::Graph;

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

fn attributes(mark: EdgeMark) -> Option<String> {
    match mark {
        EdgeMark::Plain => None,
        EdgeMark::Route => Some(format!(
            "color={}, penwidth={}",
            ROUTE_COLOR, HIGHLIGHT_WIDTH
        )),
        EdgeMark::Visit => Some(format!(
            "color={}, penwidth={}",
            VISIT_COLOR, HIGHLIGHT_WIDTH
        )),
        EdgeMark::RouteAndVisit => Some(format!(
            "color=\"{}:{}\", penwidth={}",
            ROUTE_COLOR, VISIT_COLOR, HIGHLIGHT_WIDTH
        )),
        EdgeMark::VisitJump => Some(format!(
            "color={}, penwidth={}, style=dashed",
            VISIT_COLOR, HIGHLIGHT_WIDTH
        )),
    }
}

/// Render the map as an undirected Graphviz graph
pub fn render_dot<W: Write>(
    graph: &Graph,
    name: &str,
    highlight: &Highlight,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "graph {} {{", quote(name))?;
    writeln!(out, "    label={};", quote(name))?;
    writeln!(out, "    layout=neato;")?;
    writeln!(out, "    overlap=false;")?;
    writeln!(
        out,
        "    node [shape=ellipse, style=filled, fillcolor=lightblue, fontname=\"Helvetica-Bold\"];"
    )?;

    for location in graph.names() {
        writeln!(out, "    {};", quote(location))?;
    }

    for edge in plan_edges(graph, highlight) {
        match attributes(edge.mark) {
            Some(attrs) => writeln!(
                out,
                "    {} -- {} [{}];",
                quote(edge.from),
                quote(edge.to),
                attrs
            )?,
            None => writeln!(out, "    {} -- {};", quote(edge.from), quote(edge.to))?,
        }
    }

    writeln!(out, "}}")?;
    Ok(())
}
