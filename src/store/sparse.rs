//! Sparse adjacency-list store

use super::{is_edge, AdjacencyStore, NO_EDGE};
use std::collections::BTreeMap;

/// One ordered neighbor map per vertex.
///
/// `BTreeMap` keeps neighbor iteration in ascending index order, matching the
/// dense store. Only real edges are stored; the zero diagonal is implicit.
#[derive(Debug, Clone, Default)]
pub struct SparseListStore {
    rows: Vec<BTreeMap<usize, f64>>,
}

impl SparseListStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }
}

impl AdjacencyStore for SparseListStore {
    fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    fn insert_vertex(&mut self) {
        self.rows.push(BTreeMap::new());
    }

    fn remove_vertex(&mut self, index: usize) {
        self.rows.remove(index);
        for row in &mut self.rows {
            *row = row
                .iter()
                .filter(|&(&j, _)| j != index)
                .map(|(&j, &w)| (if j > index { j - 1 } else { j }, w))
                .collect();
        }
    }

    fn set_weight(&mut self, i: usize, j: usize, weight: f64) {
        debug_assert_ne!(i, j, "diagonal weights are fixed at zero");
        if is_edge(weight) {
            self.rows[i].insert(j, weight);
            self.rows[j].insert(i, weight);
        } else {
            self.rows[i].remove(&j);
            self.rows[j].remove(&i);
        }
    }

    fn weight(&self, i: usize, j: usize) -> f64 {
        if i == j {
            debug_assert!(i < self.rows.len());
            return 0.0;
        }
        self.rows[i].get(&j).copied().unwrap_or(NO_EDGE)
    }

    fn for_each_neighbor(&self, index: usize, visit: &mut dyn FnMut(usize, f64)) {
        for (&j, &w) in &self.rows[index] {
            visit(j, w);
        }
    }

    fn snapshot(&self) -> Vec<Vec<f64>> {
        let n = self.rows.len();
        let mut matrix = vec![vec![NO_EDGE; n]; n];
        for (i, row) in self.rows.iter().enumerate() {
            matrix[i][i] = 0.0;
            for (&j, &w) in row {
                matrix[i][j] = w;
            }
        }
        matrix
    }

    fn clear(&mut self) {
        self.rows.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_shifts_neighbor_keys() {
        let mut store = SparseListStore::new();
        for _ in 0..4 {
            store.insert_vertex();
        }
        store.set_weight(0, 3, 7.0);
        store.set_weight(2, 3, 8.0);

        store.remove_vertex(1);

        // former index 3 is now 2
        assert_eq!(store.weight(0, 2), 7.0);
        assert_eq!(store.weight(1, 2), 8.0);
    }

    #[test]
    fn test_clearing_edge_removes_entry() {
        let mut store = SparseListStore::new();
        store.insert_vertex();
        store.insert_vertex();
        store.set_weight(0, 1, 2.0);
        store.set_weight(0, 1, NO_EDGE);

        let mut count = 0;
        store.for_each_neighbor(0, &mut |_, _| count += 1);
        assert_eq!(count, 0);
    }
}
