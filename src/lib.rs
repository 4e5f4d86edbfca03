//! Composable, zero-copy views over directed and undirected graphs.
//!
//! A *view* wraps another graph by reference and presents it reversed,
//! filtered, re-oriented, residual or node-split, without ever copying the
//! wrapped storage.
//! Algorithms are written once against the contract traits in [graph]
//! and run unmodified over any concrete graph or any stack of views.
//!
//! ```
//! use viewgraph::graph::*;
//! use viewgraph::view::ReverseDigraph;
//!
//! let mut g = TreeBackedDigraph::new();
//! let a = g.add_node();
//! let b = g.add_node();
//! g.add_arc(a, b);
//!
//! let rev = ReverseDigraph::new(&g);
//! let arc = rev.first_out(b).unwrap();
//! assert_eq!(rev.target(arc), a);
//! ```

pub mod graph;
pub mod map;
pub mod view;
