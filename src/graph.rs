//! Exchange graph: vertex registry plus adjacency storage
//!
//! Symbols are registered against dense integer indices; edge weights live in
//! an [`AdjacencyStore`] chosen at construction time. Mutations degrade to
//! no-ops when an endpoint is missing, so callers never need error handling
//! for "already absent" cases. Queries run over an owned snapshot of the
//! weight table and return value objects only.

use crate::routing::{floyd_warshall, shortest_path};
use crate::store::{is_edge, new_store, AdjacencyStore, StoreKind, NO_EDGE};
use crate::types::{CurrencyPair, Rate, Symbol, Vertex};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Weighted undirected graph of tradeable symbols.
///
/// # Example
/// ```
/// use fx_graph::prelude::*;
///
/// let mut graph: ExchangeGraph<String> = ExchangeGraph::new();
/// graph.add_vertex("BTC".to_string());
/// graph.add_vertex("ETH".to_string());
/// graph.add_edge("BTC", "ETH", 15.2);
///
/// assert_eq!(graph.weight("BTC", "ETH"), Some(15.2));
/// assert_eq!(graph.weight("ETH", "BTC"), Some(15.2));
/// ```
#[derive(Debug)]
pub struct ExchangeGraph<S: Symbol> {
    /// Vertex values in index order.
    vertices: Vec<S>,
    /// Symbol -> index registry, keyed on the symbol itself.
    registry: HashMap<S, usize>,
    store: Box<dyn AdjacencyStore>,
}

impl<S: Symbol> ExchangeGraph<S> {
    /// Create an empty graph backed by the dense matrix store
    pub fn new() -> Self {
        Self::with_store(StoreKind::DenseMatrix)
    }

    /// Create an empty graph backed by the requested store
    pub fn with_store(kind: StoreKind) -> Self {
        Self {
            vertices: Vec::new(),
            registry: HashMap::new(),
            store: new_store(kind),
        }
    }

    /// Number of registered symbols
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True when no symbols are registered
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Index assigned to `value`, if registered
    pub fn lookup<Q>(&self, value: &Q) -> Option<usize>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.registry.get(value).copied()
    }

    /// Register a symbol. Re-adding an existing symbol is a no-op.
    pub fn add_vertex(&mut self, value: S) {
        if self.registry.contains_key(&value) {
            log::trace!("add_vertex: {} already registered", value);
            return;
        }

        let index = self.vertices.len();
        self.store.insert_vertex();
        self.registry.insert(value.clone(), index);
        self.vertices.push(value);
        self.check_dimensions();
    }

    /// Unregister a symbol, dropping its row and column.
    ///
    /// Every index greater than the removed one is decremented so indices
    /// stay a dense `0..n-1` range. Unknown symbols are a no-op.
    pub fn remove_vertex<Q>(&mut self, value: &Q)
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = match self.registry.remove(value) {
            Some(index) => index,
            None => return,
        };

        self.vertices.remove(index);
        self.store.remove_vertex(index);
        for i in self.registry.values_mut() {
            if *i > index {
                *i -= 1;
            }
        }

        log::debug!("remove_vertex: removed index {}", index);
        self.check_dimensions();
    }

    /// Set the symmetric weight between two registered symbols, overwriting
    /// any prior weight. No-op unless both endpoints exist; self edges and
    /// non-finite or negative costs are rejected.
    pub fn add_edge<Q>(&mut self, from: &Q, to: &Q, cost: Rate)
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        if !cost.is_finite() || cost < 0.0 {
            log::warn!("add_edge: rejecting invalid cost {}", cost);
            return;
        }
        let (i, j) = match (self.lookup(from), self.lookup(to)) {
            (Some(i), Some(j)) => (i, j),
            _ => return,
        };
        if i == j {
            log::warn!("add_edge: self weight is fixed at zero, ignoring");
            return;
        }
        self.store.set_weight(i, j, cost);
    }

    /// Reset the weight between two symbols to "no edge". No-op unless both
    /// endpoints exist and an edge is currently set.
    pub fn remove_edge<Q>(&mut self, from: &Q, to: &Q)
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (i, j) = match (self.lookup(from), self.lookup(to)) {
            (Some(i), Some(j)) if i != j => (i, j),
            _ => return,
        };
        if !is_edge(self.store.weight(i, j)) {
            log::trace!("remove_edge: no edge between {} and {}", i, j);
            return;
        }
        self.store.set_weight(i, j, NO_EDGE);
    }

    /// Weight of the direct edge between two symbols. `None` when either
    /// endpoint is missing or no edge is set.
    pub fn weight<Q>(&self, from: &Q, to: &Q) -> Option<Rate>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let i = self.lookup(from)?;
        let j = self.lookup(to)?;
        let w = self.store.weight(i, j);
        is_edge(w).then_some(w)
    }

    /// Vertices reachable by one edge from `value`, in ascending index
    /// order. Empty when the symbol is missing.
    pub fn neighbors<Q>(&self, value: &Q) -> Vec<Vertex<S>>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut found = Vec::new();
        if let Some(index) = self.lookup(value) {
            self.store.for_each_neighbor(index, &mut |j, _| {
                found.push(Vertex::new(j, self.vertices[j].clone()));
            });
        }
        found
    }

    /// Apply a batch of quotes as vertex/edge upserts.
    ///
    /// Endpoints are registered on first sight; an existing edge weight is
    /// overwritten by a later quote for the same pair.
    pub fn load_pairs<I>(&mut self, pairs: I)
    where
        I: IntoIterator<Item = CurrencyPair<S>>,
    {
        for CurrencyPair { from, to, price } in pairs {
            self.add_vertex(from.clone());
            self.add_vertex(to.clone());
            self.add_edge(&from, &to, price);
        }
    }

    /// Minimum path sums between every pair of symbols, indexed like the
    /// registry. Unreachable pairs hold `f64::INFINITY`.
    pub fn all_pairs_distances(&self) -> Vec<Vec<f64>> {
        floyd_warshall(self.store.snapshot())
    }

    /// Cheapest conversion from `from` to `to`: either a multi-hop chain or
    /// the direct edge, whichever is more favorable.
    ///
    /// The chain is found by a minimum-sum search, then kept only when the
    /// product of its prices is strictly smaller than the direct weight.
    /// Missing endpoints yield an empty sequence, never an error.
    pub fn best_route<Q>(&self, from: &Q, to: &Q) -> Vec<CurrencyPair<S>>
    where
        S: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (src, dst) = match (self.lookup(from), self.lookup(to)) {
            (Some(src), Some(dst)) => (src, dst),
            _ => return Vec::new(),
        };

        let snapshot = self.store.snapshot();
        let path = shortest_path(&snapshot, src, dst);

        let chain: Vec<CurrencyPair<S>> = path
            .windows(2)
            .map(|hop| {
                CurrencyPair::new(
                    self.vertices[hop[0]].clone(),
                    self.vertices[hop[1]].clone(),
                    snapshot[hop[0]][hop[1]],
                )
            })
            .collect();

        let direct = snapshot[src][dst];

        if chain.is_empty() {
            // No multi-hop chain: fall back to the direct edge when one
            // exists. The zero diagonal makes `from == to` a zero-cost pair.
            if is_edge(direct) {
                return vec![self.direct_pair(src, dst, direct)];
            }
            return Vec::new();
        }

        // Arbitrage decision: the chain converts multiplicatively, so its
        // aggregate rate is the product of hop prices. Note the search above
        // minimized the *sum* of weights; that mismatch is inherited behavior
        // kept for compatibility (see tests).
        let chained_price: f64 = chain.iter().map(|pair| pair.price).product();
        if is_edge(direct) && chained_price >= direct {
            log::debug!(
                "best_route: direct rate {} beats chained rate {}",
                direct,
                chained_price
            );
            return vec![self.direct_pair(src, dst, direct)];
        }

        chain
    }

    /// Fixed-width dump of the weight matrix for diagnostics.
    pub fn render_table(&self) -> String {
        let snapshot = self.store.snapshot();
        let labels: Vec<String> = self.vertices.iter().map(|s| s.to_string()).collect();
        let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);
        let cell_width = label_width.max(8);

        let mut out = String::new();
        out.push_str(&format!("{:w$}", "", w = label_width));
        for label in &labels {
            out.push_str(&format!(" {:>w$}", label, w = cell_width));
        }
        out.push('\n');

        for (i, row) in snapshot.iter().enumerate() {
            out.push_str(&format!("{:w$}", labels[i], w = label_width));
            for &w in row {
                if is_edge(w) {
                    out.push_str(&format!(" {:>width$.2}", w, width = cell_width));
                } else {
                    out.push_str(&format!(" {:>w$}", "INF", w = cell_width));
                }
            }
            out.push('\n');
        }
        out
    }

    /// Drop every symbol and edge
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.registry.clear();
        self.store.clear();
    }

    fn direct_pair(&self, src: usize, dst: usize, price: Rate) -> CurrencyPair<S> {
        CurrencyPair::new(
            self.vertices[src].clone(),
            self.vertices[dst].clone(),
            price,
        )
    }

    // Registry and store must agree on the index range at all times. A
    // desync is a programming defect, so abort loudly.
    fn check_dimensions(&self) {
        assert!(
            self.vertices.len() == self.registry.len()
                && self.vertices.len() == self.store.vertex_count(),
            "vertex registry and adjacency store out of sync: {} symbols, {} registered, {} stored",
            self.vertices.len(),
            self.registry.len(),
            self.store.vertex_count(),
        );
    }
}

impl<S: Symbol> Default for ExchangeGraph<S> {
    fn default() -> Self {
        Self::new()
    }
}
