use tracing::{debug, debug_span};

use super::lattice::{Lattice, NodeId};
use super::AnalysisError;
use crate::dict::ConnectionMatrix;

/// Find the minimum-cost path from BOS to EOS.
///
/// Nodes are relaxed in order of start position, so every predecessor is
/// final before its successors read it. On equal cost the candidate seen
/// first is kept, which makes the result deterministic and lets earlier
/// lattice nodes (user entries) win ties.
///
/// Returns node ids from BOS to EOS inclusive.
pub fn find_best_path(
    lattice: &mut Lattice<'_>,
    matrix: &ConnectionMatrix,
) -> Result<Vec<NodeId>, AnalysisError> {
    let _span = debug_span!("find_best_path", nodes = lattice.nodes.len()).entered();
    let Lattice {
        nodes,
        starts_at,
        ends_at,
        eos,
        ..
    } = lattice;

    for ids in starts_at.iter() {
        for &id in ids {
            let node = &nodes[id];
            let left_id = node.left_id();
            let own = node.word_cost() as i64 + node.space_cost as i64;

            let mut best: Option<(i64, NodeId)> = None;
            for &prev_id in &ends_at[node.boundary] {
                let prev = &nodes[prev_id];
                if !prev.is_reached() {
                    continue;
                }
                let total = prev.best_cost + matrix.cost(prev.right_id(), left_id) as i64 + own;
                if best.map_or(true, |(cost, _)| total < cost) {
                    best = Some((total, prev_id));
                }
            }

            if let Some((cost, prev_id)) = best {
                let node = &mut nodes[id];
                node.best_cost = cost;
                node.back = Some(prev_id);
            }
        }
    }

    let eos = *eos;
    if nodes[eos].back.is_none() {
        let position = nodes
            .iter()
            .filter(|n| n.is_reached())
            .map(|n| n.end)
            .max()
            .unwrap_or(0);
        return Err(AnalysisError::Unreachable { position });
    }

    let mut path = vec![eos];
    let mut cur = eos;
    while let Some(prev) = nodes[cur].back {
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    debug!(cost = nodes[eos].best_cost, len = path.len(), "best path found");
    Ok(path)
}
