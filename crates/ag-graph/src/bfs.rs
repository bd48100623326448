//! Shortest-hop path search.

use std::collections::VecDeque;

use ag_core::{AgError, AgResult, Airport, AirportId};

use crate::graph::Graph;

/// Find a fewest-hops path between two airports of the graph.
///
/// Returns `Ok(None)` when the endpoints lie in different connected
/// components; that is a result, not an error. Fails with
/// [`AgError::UnknownAirport`] when an endpoint is not a vertex.
///
/// The search is a plain breadth-first traversal owning its visited set and
/// parent array: the first visit to a vertex fixes a shortest parent chain
/// back to the source, so the reconstructed path minimizes edge count and
/// repeats no vertex. The traversal stops as soon as the target is reached.
pub fn find_path(
    graph: &Graph,
    source: AirportId,
    target: AirportId,
) -> AgResult<Option<Vec<Airport>>> {
    let src = graph
        .index_of(source)
        .ok_or(AgError::UnknownAirport { airport: source })?;
    let dst = graph
        .index_of(target)
        .ok_or(AgError::UnknownAirport { airport: target })?;

    // A vertex trivially reaches itself. The parent walk below never
    // assigns the source a parent, so this cannot fall through to it.
    if src == dst {
        return Ok(Some(vec![graph.vertices()[src].clone()]));
    }

    let n = graph.vertex_count();
    let mut visited = vec![false; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut queue = VecDeque::new();
    visited[src] = true;
    queue.push_back(src);

    let mut found = false;
    'search: while let Some(u) = queue.pop_front() {
        for &(v, _) in graph.neighbor_slice(u) {
            if visited[v] {
                continue;
            }
            visited[v] = true;
            parent[v] = Some(u);
            if v == dst {
                found = true;
                break 'search;
            }
            queue.push_back(v);
        }
    }

    if !found {
        return Ok(None);
    }

    // Walk the parent chain from the target back to the source, then flip.
    let mut indices = vec![dst];
    let mut step = dst;
    while let Some(p) = parent[step] {
        indices.push(p);
        step = p;
    }
    indices.reverse();

    Ok(Some(
        indices
            .into_iter()
            .map(|i| graph.vertices()[i].clone())
            .collect(),
    ))
}
