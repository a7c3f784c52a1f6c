//! GraphViz (DOT) rendering of a solved lattice, for debugging.

use std::collections::HashSet;
use std::fmt::Write;

use super::lattice::{Lattice, NodeId, NodeKind};
use crate::dict::ConnectionMatrix;

/// Render every reached node and its back-pointer edge. Edges on
/// `best_path` are drawn bold.
pub fn render_dot(lattice: &Lattice<'_>, best_path: &[NodeId], matrix: &ConnectionMatrix) -> String {
    let on_path: HashSet<(NodeId, NodeId)> = best_path.windows(2).map(|w| (w[0], w[1])).collect();

    let mut out = String::new();
    out.push_str("digraph lattice {\n");
    out.push_str("\tgraph [rankdir=LR splines=true fontname=\"Helvetica\"];\n");
    out.push_str("\tnode [shape=Mrecord style=filled fillcolor=\"#e8e8f0\" fontname=\"Helvetica\"];\n");
    out.push_str("\tedge [fontname=\"Helvetica\" color=\"#606060\"];\n");

    for (id, node) in lattice.nodes().iter().enumerate() {
        if !node.is_reached() {
            continue;
        }
        let label = match node.kind {
            NodeKind::Bos => "BOS".to_string(),
            NodeKind::Eos => format!("EOS | total: {}", node.best_cost),
            NodeKind::Known { entry, .. } | NodeKind::Unknown { entry, .. } => {
                let tags: Vec<&str> = entry.pos_tags.iter().map(|t| t.as_str()).collect();
                format!(
                    "{} | {} | left: {} right: {} | word: {} | total: {}",
                    escape(lattice.surface(id)),
                    tags.join("+"),
                    entry.left_id,
                    entry.right_id,
                    entry.word_cost,
                    node.best_cost,
                )
            }
        };
        let _ = writeln!(out, "\tn{id} [label=\"{label}\"];");
    }

    for (id, node) in lattice.nodes().iter().enumerate() {
        let Some(prev) = node.back else {
            continue;
        };
        let conn = matrix.cost(lattice.node(prev).right_id(), node.left_id());
        let mut label = format!("conn: {conn}");
        if node.space_cost != 0 {
            let _ = write!(label, " space: {}", node.space_cost);
        }
        let style = if on_path.contains(&(prev, id)) {
            " color=red penwidth=2"
        } else {
            ""
        };
        let _ = writeln!(out, "\tn{prev} -> n{id} [label=\"{label}\"{style}];");
    }

    out.push_str("}\n");
    out
}

fn escape(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '"' | '\\' | '|' | '{' | '}' | '<' | '>') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
