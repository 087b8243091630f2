//! Shortest-path engines over weight-matrix snapshots
//!
//! Both engines are pure: they read an owned snapshot of the adjacency store
//! and never touch the graph, so a query always sees one consistent state.

pub mod all_pairs;
pub mod resolver;

pub use all_pairs::floyd_warshall;
pub use resolver::shortest_path;
