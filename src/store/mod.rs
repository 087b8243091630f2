//! Adjacency storage for the exchange graph
//!
//! Two interchangeable representations behind one trait: a dense weight
//! matrix and a sparse adjacency list. Both work purely in index space;
//! symbol bookkeeping lives in the graph.

mod dense;
mod sparse;

pub use dense::DenseMatrixStore;
pub use sparse::SparseListStore;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinel weight meaning "no edge".
///
/// Distinct from `0.0`, which is the zero-cost self conversion on the
/// diagonal.
pub const NO_EDGE: f64 = f64::INFINITY;

/// True when `w` is a real edge weight rather than the sentinel.
#[inline]
pub fn is_edge(w: f64) -> bool {
    w != NO_EDGE
}

/// Which adjacency representation a graph uses, chosen at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreKind {
    /// O(V²) space, O(1) edge access, O(V) vertex churn.
    DenseMatrix,
    /// O(V+E) space, O(log degree) edge access.
    SparseList,
}

/// Index-space storage of symmetric edge weights.
///
/// Implementations keep an exact `0..n-1` index range: inserting appends
/// index `n`, removing index `i` shifts every index above `i` down by one.
pub trait AdjacencyStore: fmt::Debug {
    /// Number of vertices currently stored.
    fn vertex_count(&self) -> usize;

    /// Append a vertex at the next index, connected to nothing, with a zero
    /// self weight.
    fn insert_vertex(&mut self);

    /// Remove vertex `index`, compacting all higher indices down by one.
    fn remove_vertex(&mut self, index: usize);

    /// Set the symmetric weight between `i` and `j` (`i != j`). Passing
    /// `NO_EDGE` clears the edge.
    fn set_weight(&mut self, i: usize, j: usize, weight: f64);

    /// Weight between `i` and `j`; `NO_EDGE` when not connected, `0.0` on
    /// the diagonal.
    fn weight(&self, i: usize, j: usize) -> f64;

    /// Visit the neighbors of `index` in ascending index order.
    fn for_each_neighbor(&self, index: usize, visit: &mut dyn FnMut(usize, f64));

    /// Owned dense copy of the weight table for the path engines.
    fn snapshot(&self) -> Vec<Vec<f64>>;

    /// Drop every vertex and edge.
    fn clear(&mut self);
}

/// Construct an empty store of the requested kind.
pub fn new_store(kind: StoreKind) -> Box<dyn AdjacencyStore> {
    match kind {
        StoreKind::DenseMatrix => Box::new(DenseMatrixStore::new()),
        StoreKind::SparseList => Box::new(SparseListStore::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both stores must behave identically under the trait contract.
    fn stores() -> Vec<Box<dyn AdjacencyStore>> {
        vec![new_store(StoreKind::DenseMatrix), new_store(StoreKind::SparseList)]
    }

    #[test]
    fn test_insert_gives_zero_diagonal_and_no_edges() {
        for mut store in stores() {
            store.insert_vertex();
            store.insert_vertex();
            store.insert_vertex();

            assert_eq!(store.vertex_count(), 3);
            for i in 0..3 {
                assert_eq!(store.weight(i, i), 0.0);
                for j in 0..3 {
                    if i != j {
                        assert!(!is_edge(store.weight(i, j)));
                    }
                }
            }
        }
    }

    #[test]
    fn test_set_weight_is_symmetric() {
        for mut store in stores() {
            store.insert_vertex();
            store.insert_vertex();
            store.set_weight(0, 1, 2.5);

            assert_eq!(store.weight(0, 1), 2.5);
            assert_eq!(store.weight(1, 0), 2.5);
        }
    }

    #[test]
    fn test_clear_edge_with_sentinel() {
        for mut store in stores() {
            store.insert_vertex();
            store.insert_vertex();
            store.set_weight(0, 1, 2.5);
            store.set_weight(0, 1, NO_EDGE);

            assert!(!is_edge(store.weight(0, 1)));
            assert!(!is_edge(store.weight(1, 0)));
        }
    }

    #[test]
    fn test_remove_compacts_indices() {
        for mut store in stores() {
            for _ in 0..4 {
                store.insert_vertex();
            }
            // 0-2 and 0-3 must survive removal of 1
            store.set_weight(0, 2, 5.0);
            store.set_weight(0, 3, 7.0);
            store.set_weight(1, 2, 9.0);

            store.remove_vertex(1);

            assert_eq!(store.vertex_count(), 3);
            assert_eq!(store.weight(0, 1), 5.0); // was 0-2
            assert_eq!(store.weight(0, 2), 7.0); // was 0-3
            for i in 0..3 {
                assert_eq!(store.weight(i, i), 0.0);
            }
        }
    }

    #[test]
    fn test_neighbor_order_is_ascending() {
        for mut store in stores() {
            for _ in 0..5 {
                store.insert_vertex();
            }
            store.set_weight(2, 4, 1.0);
            store.set_weight(2, 0, 1.0);
            store.set_weight(2, 3, 1.0);

            let mut seen = Vec::new();
            store.for_each_neighbor(2, &mut |j, _| seen.push(j));
            assert_eq!(seen, vec![0, 3, 4]);
        }
    }

    #[test]
    fn test_snapshot_matches_weights() {
        for mut store in stores() {
            for _ in 0..3 {
                store.insert_vertex();
            }
            store.set_weight(0, 1, 2.0);
            store.set_weight(1, 2, 3.0);

            let snap = store.snapshot();
            assert_eq!(snap.len(), 3);
            for i in 0..3 {
                for j in 0..3 {
                    assert_eq!(snap[i][j], store.weight(i, j));
                }
            }
        }
    }

    #[test]
    fn test_clear() {
        for mut store in stores() {
            store.insert_vertex();
            store.insert_vertex();
            store.set_weight(0, 1, 1.0);
            store.clear();
            assert_eq!(store.vertex_count(), 0);
        }
    }
}
