use crate::digraph::DirectedGraph;
use crate::error::UnchopError;

/// Eliminate every strict pass-through vertex (indegree 1 and outdegree 1),
/// rewiring its sole predecessor directly to its sole successor.
///
/// The pass is two-phase: candidates are collected against the graph state
/// at pass start, then eliminated in snapshot order, so contracting one
/// vertex never changes which others were judged eligible. A vertex whose
/// degrees drop to 1/1 only as a consequence of this pass is left alone; run
/// the pass again to keep contracting. Returns the number of vertices
/// removed.
pub fn contract_chains(graph: &mut DirectedGraph) -> Result<usize, UnchopError> {
    let mut candidates = Vec::new();
    for v in graph.vertices() {
        if graph.indegree(v)? == 1 && graph.outdegree(v)? == 1 {
            candidates.push(v.to_string());
        }
    }

    let mut removed = 0;
    for v in &candidates {
        // An earlier elimination may have taken this candidate with it
        // (possible only when the two were direct neighbors).
        if !graph.contains(v) {
            continue;
        }

        // Current neighbors, not snapshot-time ones: an earlier step may
        // have rewired this candidate's predecessor.
        let pred = graph.adjacent_in_to(v)?.first().map(|p| p.to_string());
        let succ = graph.adjacent_out_of(v)?.first().map(|s| s.to_string());

        graph.remove_vertex(v)?;
        removed += 1;

        if let (Some(p), Some(s)) = (pred, succ) {
            // Value comparison: when predecessor and successor coincide the
            // pass-through collapses to nothing, not to a self-edge.
            if p != s {
                graph.add_edge(&p, &s);
            }
        }
    }

    Ok(removed)
}
