//! Dense matrix adjacency store

use super::{is_edge, AdjacencyStore, NO_EDGE};

/// V×V weight matrix.
///
/// Constant-time edge access; vertex insertion and removal resize every row.
#[derive(Debug, Clone, Default)]
pub struct DenseMatrixStore {
    matrix: Vec<Vec<f64>>,
}

impl DenseMatrixStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self { matrix: Vec::new() }
    }
}

impl AdjacencyStore for DenseMatrixStore {
    fn vertex_count(&self) -> usize {
        self.matrix.len()
    }

    fn insert_vertex(&mut self) {
        let n = self.matrix.len() + 1;
        for row in &mut self.matrix {
            row.push(NO_EDGE);
        }
        let mut row = vec![NO_EDGE; n];
        row[n - 1] = 0.0;
        self.matrix.push(row);
    }

    fn remove_vertex(&mut self, index: usize) {
        self.matrix.remove(index);
        for row in &mut self.matrix {
            row.remove(index);
        }
    }

    fn set_weight(&mut self, i: usize, j: usize, weight: f64) {
        debug_assert_ne!(i, j, "diagonal weights are fixed at zero");
        self.matrix[i][j] = weight;
        self.matrix[j][i] = weight;
    }

    fn weight(&self, i: usize, j: usize) -> f64 {
        self.matrix[i][j]
    }

    fn for_each_neighbor(&self, index: usize, visit: &mut dyn FnMut(usize, f64)) {
        for (j, &w) in self.matrix[index].iter().enumerate() {
            if j != index && is_edge(w) {
                visit(j, w);
            }
        }
    }

    fn snapshot(&self) -> Vec<Vec<f64>> {
        self.matrix.clone()
    }

    fn clear(&mut self) {
        self.matrix.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_extends_existing_rows() {
        let mut store = DenseMatrixStore::new();
        store.insert_vertex();
        store.insert_vertex();
        store.set_weight(0, 1, 4.0);

        store.insert_vertex();

        // prior weights untouched, new column disconnected
        assert_eq!(store.weight(0, 1), 4.0);
        assert!(!is_edge(store.weight(0, 2)));
        assert!(!is_edge(store.weight(1, 2)));
        assert_eq!(store.weight(2, 2), 0.0);
    }

    #[test]
    fn test_rows_stay_square() {
        let mut store = DenseMatrixStore::new();
        for _ in 0..5 {
            store.insert_vertex();
        }
        store.remove_vertex(2);

        let snap = store.snapshot();
        assert_eq!(snap.len(), 4);
        for row in &snap {
            assert_eq!(row.len(), 4);
        }
    }
}
