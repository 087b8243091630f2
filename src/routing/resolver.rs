//! Single-source route resolution
//!
//! Selection-based Dijkstra (O(V²), no priority queue) over a snapshot
//! matrix, with parent-pointer path reconstruction. Weights must be
//! non-negative.

use crate::store::{is_edge, NO_EDGE};

/// Vertex sequence of a minimum-sum path from `src` to `dst`, endpoints
/// inclusive. Empty when `dst` is unreachable; `[src]` when `src == dst`.
pub fn shortest_path(dists: &[Vec<f64>], src: usize, dst: usize) -> Vec<usize> {
    let v = dists.len();
    debug_assert!(src < v && dst < v);

    if src == dst {
        return vec![src];
    }

    let mut distance = vec![NO_EDGE; v];
    let mut visited = vec![false; v];
    let mut parent: Vec<Option<usize>> = vec![None; v];
    distance[src] = 0.0;

    for _ in 0..v.saturating_sub(1) {
        let next = match min_unvisited(&distance, &visited) {
            Some(k) => k,
            // Every remaining vertex is unreachable.
            None => break,
        };
        visited[next] = true;

        for j in 0..v {
            if visited[j] || j == next {
                continue;
            }
            let w = dists[next][j];
            if is_edge(w) && distance[next] + w < distance[j] {
                distance[j] = distance[next] + w;
                parent[j] = Some(next);
            }
        }
    }

    if !is_edge(distance[dst]) {
        return Vec::new();
    }

    // Walk the parent pointers backward from the destination.
    let mut path = vec![dst];
    let mut current = dst;
    while let Some(p) = parent[current] {
        path.push(p);
        current = p;
    }
    path.reverse();
    debug_assert_eq!(path[0], src);
    path
}

/// Unvisited vertex with the smallest finite tentative distance.
fn min_unvisited(distance: &[f64], visited: &[bool]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, &d) in distance.iter().enumerate() {
        if visited[i] || !is_edge(d) {
            continue;
        }
        if best.map_or(true, |b| d < distance[b]) {
            best = Some(i);
        }
    }
    best
}
