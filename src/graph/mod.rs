//! Handle types, contract traits and concrete graph backends.
//!
//! # Handles
//!
//! Vertices and edges are lightweight ID's, essentially `usize`.
//! Algorithm authors may feel free to copy and store them.
//! Absence is always expressed as `None`; no operation has an error path,
//! because none of them performs I/O.
//!
//! # The contract
//!
//! [GraphBase], [Digraph] and [Graph] describe the first/next iteration
//! protocol, endpoint queries and the dense-ID scheme that every concrete
//! graph and every view satisfies.
//! Mutation lives in separate traits ([GrowableDigraph] and friends), so a
//! read-only view simply does not implement them.
//!
//! # Capabilities
//!
//! O(1) counting and logarithmic arc lookup are not part of the base
//! contract.
//! A graph that really offers them implements [NodeCount], [ArcCount],
//! [EdgeCount], [ArcLookup] or [EdgeLookup]; generic code that needs the
//! fast path asks for the bound, everything else falls back to the linear
//! `count_*`/`find_arc_scan` members of the base traits.

mod node;
pub use self::node::*;
mod edge;
pub use self::edge::*;
mod r#trait;
pub use self::r#trait::*;

pub mod directed;
pub use self::directed::TreeBackedDigraph;
pub mod undirected;
pub use self::undirected::TreeBackedGraph;
