use std::collections::HashMap;
use std::io::Write;

use super::{plan_edges, EdgeMark, Highlight, HIGHLIGHT_WIDTH, ROUTE_COLOR, VISIT_COLOR};
use crate::error::Result;
use crate::graph::Graph;

fn label(s: &str) -> String {
    s.replace('"', "#quot;")
}

/// Mermaid has no two-color strokes, so edges on both the route and the
/// exploration are drawn as a dashed route line
fn link_style(mark: EdgeMark) -> Option<String> {
    let (color, dashed) = match mark {
        EdgeMark::Plain => return None,
        EdgeMark::Route => (ROUTE_COLOR, false),
        EdgeMark::RouteAndVisit => (ROUTE_COLOR, true),
        EdgeMark::Visit | EdgeMark::VisitJump => (VISIT_COLOR, false),
    };
    let mut style = format!("stroke:{},stroke-width:{}px", color, HIGHLIGHT_WIDTH);
    if dashed {
        style.push_str(",stroke-dasharray:5 5");
    }
    Some(style)
}

/// Render the map as a Mermaid flowchart.
///
/// Locations get positional ids (`n0`, `n1`, ...) so names with spaces or
/// accents stay valid; the name is kept as the node label.
pub fn render_mermaid<W: Write>(
    graph: &Graph,
    name: &str,
    highlight: &Highlight,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "---")?;
    writeln!(out, "title: {}", name)?;
    writeln!(out, "---")?;
    writeln!(out, "flowchart LR")?;

    let mut ids: HashMap<&str, String> = HashMap::new();
    for (i, location) in graph.names().enumerate() {
        let id = format!("n{}", i);
        writeln!(out, "    {}[\"{}\"]", id, label(location))?;
        ids.insert(location, id);
    }

    // linkStyle indexes count emitted links only
    let mut styles = Vec::new();
    let mut emitted = 0;
    for edge in plan_edges(graph, highlight) {
        let (Some(from), Some(to)) = (ids.get(edge.from), ids.get(edge.to)) else {
            continue;
        };
        let connector = if edge.mark == EdgeMark::VisitJump {
            "-.-"
        } else {
            "---"
        };
        writeln!(out, "    {} {} {}", from, connector, to)?;
        if let Some(style) = link_style(edge.mark) {
            styles.push((emitted, style));
        }
        emitted += 1;
    }

    for (index, style) in styles {
        writeln!(out, "    linkStyle {} {}", index, style)?;
    }
    Ok(())
}
