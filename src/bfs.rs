use std::collections::VecDeque;

use ahash::AHashSet;
use tracing::debug;

use crate::{
    errors::MemGraphResult,
    graph::MemGraph,
    types::{Label, VertexId},
};

/// Distance value shared by "unvisited" and "distance zero". The start vertex is never
/// assigned a distance, so it stays unvisited until a cycle leads back to it.
const UNVISITED: usize = 0;

/// Finds a minimum edge-count walk `start, p1, .., end` where every vertex after `start`
/// carries `label`.
///
/// A zero-edge walk is never returned: with `start == end` the result is the shortest
/// cycle through `start`. Returns an empty vector when no walk exists. Among equal-length
/// walks, the one using earlier-created outgoing edges wins.
pub fn shortest_path(
    graph: &MemGraph,
    start: VertexId,
    end: VertexId,
    label: &Label,
) -> MemGraphResult<Vec<VertexId>> {
    graph.ensure_vertex(start)?;
    graph.ensure_vertex(end)?;
    let vertices = graph.vertices();
    let mut distance = vec![UNVISITED; vertices.len()];
    let mut parent: Vec<Option<VertexId>> = vec![None; vertices.len()];
    let mut queue = VecDeque::new();
    queue.push_back(start);
    let mut hops = None;
    while let Some(node) = queue.pop_front() {
        let depth = distance[node];
        if node == end && depth != UNVISITED {
            hops = Some(depth);
            break;
        }
        for &next in vertices[node].outgoing() {
            if distance[next] == UNVISITED && vertices[next].has_label(label) {
                distance[next] = depth + 1;
                parent[next] = Some(node);
                queue.push_back(next);
            }
        }
    }
    let Some(hops) = hops else {
        debug!(start, end, label = %label, "no labelled path");
        return Ok(Vec::new());
    };
    // Stop one short of start: when start == end its parent slot holds the cycle's last hop.
    let mut path = Vec::with_capacity(hops + 1);
    let mut current = end;
    path.push(current);
    while path.len() < hops {
        let Some(prev) = parent[current] else {
            break;
        };
        path.push(prev);
        current = prev;
    }
    path.push(start);
    path.reverse();
    debug!(start, end, label = %label, hops, "found labelled path");
    Ok(path)
}

/// Vertices reachable from `start` through labelled targets, in BFS order, within
/// `max_depth` hops. `start` is always first and is not required to carry `label`.
pub fn bfs_labeled(
    graph: &MemGraph,
    start: VertexId,
    label: &Label,
    max_depth: u32,
) -> MemGraphResult<Vec<VertexId>> {
    graph.ensure_vertex(start)?;
    let vertices = graph.vertices();
    let mut visited = Vec::new();
    let mut seen = AHashSet::new();
    let mut queue = VecDeque::new();
    queue.push_back((start, 0));
    seen.insert(start);
    while let Some((node, depth)) = queue.pop_front() {
        visited.push(node);
        if depth >= max_depth {
            continue;
        }
        for &next in vertices[node].outgoing() {
            if vertices[next].has_label(label) && seen.insert(next) {
                queue.push_back((next, depth + 1));
            }
        }
    }
    Ok(visited)
}
