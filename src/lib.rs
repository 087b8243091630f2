//! # fx-graph
//!
//! A currency exchange graph: tradeable symbols as vertices of a weighted
//! undirected graph whose edges carry an exchange rate. Answers two
//! questions: the shortest aggregate cost between every pair of symbols
//! (Floyd–Warshall closure), and the cheapest sequence of single-hop
//! conversions between two symbols, falling back to the direct conversion
//! when that is more favorable.
//!
//! ## Example
//!
//! ```rust
//! use fx_graph::prelude::*;
//!
//! let mut graph: ExchangeGraph<String> = ExchangeGraph::new();
//! graph.load_pairs(vec![
//!     CurrencyPair::new("BTC".to_string(), "ETH".to_string(), 2.0),
//!     CurrencyPair::new("ETH".to_string(), "XRP".to_string(), 3.0),
//!     CurrencyPair::new("BTC".to_string(), "XRP".to_string(), 10.0),
//! ]);
//!
//! // Two hops convert at 2.0 * 3.0 = 6.0, beating the direct 10.0.
//! let route = graph.best_route("BTC", "XRP");
//! assert_eq!(route.len(), 2);
//! assert_eq!(route[0].to, "ETH");
//! ```

pub mod error;
pub mod graph;
pub mod quotes;
pub mod routing;
pub mod store;
pub mod types;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::error::{FxGraphError, Result};
    pub use crate::graph::ExchangeGraph;
    pub use crate::quotes::{parse_line, parse_quote_file, parse_quotes};
    pub use crate::store::{StoreKind, NO_EDGE};
    pub use crate::types::{CurrencyPair, Rate, Symbol, Vertex};
}
