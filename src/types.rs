//! Core value objects shared by the graph and routing modules

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;

/// Exchange rate / edge weight type (using f64 for precision)
pub type Rate = f64;

/// Bound required of anything used as a graph symbol.
///
/// Symbols are compared and hashed directly; the registry never coerces them
/// to text. `Display` is only needed for the diagnostic table dump.
pub trait Symbol: Clone + Eq + Hash + fmt::Display {}

impl<T: Clone + Eq + Hash + fmt::Display> Symbol for T {}

/// A registered vertex: a symbol plus the index the graph assigned to it.
///
/// Indices form a dense `0..n-1` range and are only stable until the next
/// removal, so treat a `Vertex` as a snapshot, not a handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex<S> {
    pub index: usize,
    pub value: S,
}

impl<S> Vertex<S> {
    /// Create a new vertex
    pub fn new(index: usize, value: S) -> Self {
        Self { index, value }
    }
}

/// A single conversion quote: `price` units of `to` per unit of `from`.
///
/// Produced by queries and by the quote loader; the canonical edge
/// representation is always the adjacency store's indexed weight table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyPair<S> {
    pub from: S,
    pub to: S,
    pub price: Rate,
}

impl<S> CurrencyPair<S> {
    /// Create a new currency pair
    pub fn new(from: S, to: S, price: Rate) -> Self {
        Self { from, to, price }
    }
}

impl<S: fmt::Display> fmt::Display for CurrencyPair<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} @ {}", self.from, self.to, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_display() {
        let pair = CurrencyPair::new("EUR", "USD", 1.2);
        assert_eq!(format!("{}", pair), "EUR/USD @ 1.2");
    }

    #[test]
    fn test_vertex_fields() {
        let vertex = Vertex::new(3, "BTC".to_string());
        assert_eq!(vertex.index, 3);
        assert_eq!(vertex.value, "BTC");
    }
}
