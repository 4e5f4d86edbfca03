//! The delegation layer every view builds on.
//!
//! A view wraps "something that satisfies the graph contract" by value.
//! These impls make shared and mutable borrows satisfy the contract by
//! forwarding every operation verbatim to the borrowed graph, which is
//! what turns `V<&G>` and `V<&mut G>` into non-owning views: the borrow
//! checker enforces that the base graph outlives every view over it.

use crate::graph::*;

macro_rules! forward_graph_contract {
    ($lt:lifetime, $t:ty) => {
        impl<$lt, G: GraphBase> GraphBase for $t {
            type Node = G::Node;

            fn first_node(&self) -> Option<G::Node> {
                (**self).first_node()
            }
            fn next_node(&self, n: G::Node) -> Option<G::Node> {
                (**self).next_node(n)
            }
            fn node_id(&self, n: G::Node) -> usize {
                (**self).node_id(n)
            }
            fn node_from_id(&self, id: usize) -> Option<G::Node> {
                (**self).node_from_id(id)
            }
            fn max_node_id(&self) -> Option<usize> {
                (**self).max_node_id()
            }
        }

        impl<$lt, G: Digraph> Digraph for $t {
            type Arc = G::Arc;

            fn first_arc(&self) -> Option<G::Arc> {
                (**self).first_arc()
            }
            fn next_arc(&self, a: G::Arc) -> Option<G::Arc> {
                (**self).next_arc(a)
            }
            fn first_out(&self, n: G::Node) -> Option<G::Arc> {
                (**self).first_out(n)
            }
            fn next_out(&self, a: G::Arc) -> Option<G::Arc> {
                (**self).next_out(a)
            }
            fn first_in(&self, n: G::Node) -> Option<G::Arc> {
                (**self).first_in(n)
            }
            fn next_in(&self, a: G::Arc) -> Option<G::Arc> {
                (**self).next_in(a)
            }
            fn source(&self, a: G::Arc) -> G::Node {
                (**self).source(a)
            }
            fn target(&self, a: G::Arc) -> G::Node {
                (**self).target(a)
            }
            fn arc_id(&self, a: G::Arc) -> usize {
                (**self).arc_id(a)
            }
            fn arc_from_id(&self, id: usize) -> Option<G::Arc> {
                (**self).arc_from_id(id)
            }
            fn max_arc_id(&self) -> Option<usize> {
                (**self).max_arc_id()
            }
        }

        impl<$lt, G: Graph> Graph for $t {
            type Edge = G::Edge;

            fn first_edge(&self) -> Option<G::Edge> {
                (**self).first_edge()
            }
            fn next_edge(&self, e: G::Edge) -> Option<G::Edge> {
                (**self).next_edge(e)
            }
            fn first_inc(&self, n: G::Node) -> Option<(G::Edge, bool)> {
                (**self).first_inc(n)
            }
            fn next_inc(&self, n: G::Node, e: G::Edge, d: bool) -> Option<(G::Edge, bool)> {
                (**self).next_inc(n, e, d)
            }
            fn u(&self, e: G::Edge) -> G::Node {
                (**self).u(e)
            }
            fn v(&self, e: G::Edge) -> G::Node {
                (**self).v(e)
            }
            fn edge_id(&self, e: G::Edge) -> usize {
                (**self).edge_id(e)
            }
            fn edge_from_id(&self, id: usize) -> Option<G::Edge> {
                (**self).edge_from_id(id)
            }
            fn max_edge_id(&self) -> Option<usize> {
                (**self).max_edge_id()
            }
        }

        impl<$lt, G: NodeCount> NodeCount for $t {
            fn node_num(&self) -> usize {
                (**self).node_num()
            }
        }

        impl<$lt, G: ArcCount> ArcCount for $t {
            fn arc_num(&self) -> usize {
                (**self).arc_num()
            }
        }

        impl<$lt, G: EdgeCount> EdgeCount for $t {
            fn edge_num(&self) -> usize {
                (**self).edge_num()
            }
        }

        impl<$lt, G: ArcLookup> ArcLookup for $t {
            fn find_arc(&self, s: G::Node, t: G::Node, prev: Option<G::Arc>) -> Option<G::Arc> {
                (**self).find_arc(s, t, prev)
            }
        }

        impl<$lt, G: EdgeLookup> EdgeLookup for $t {
            fn find_edge(&self, u: G::Node, v: G::Node, prev: Option<G::Edge>) -> Option<G::Edge> {
                (**self).find_edge(u, v, prev)
            }
        }
    };
}

forward_graph_contract!('g, &'g G);
forward_graph_contract!('g, &'g mut G);

impl<'g, G: GrowableDigraph> GrowableDigraph for &'g mut G {
    fn add_node(&mut self) -> G::Node {
        (**self).add_node()
    }

    fn add_arc(&mut self, source: G::Node, target: G::Node) -> G::Arc {
        (**self).add_arc(source, target)
    }
}

impl<'g, G: ErasableDigraph> ErasableDigraph for &'g mut G {
    fn erase_node(&mut self, n: G::Node) {
        (**self).erase_node(n)
    }

    fn erase_arc(&mut self, a: G::Arc) {
        (**self).erase_arc(a)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}

impl<'g, G: GrowableGraph> GrowableGraph for &'g mut G {
    fn add_node(&mut self) -> G::Node {
        (**self).add_node()
    }

    fn add_edge(&mut self, u: G::Node, v: G::Node) -> G::Edge {
        (**self).add_edge(u, v)
    }
}

impl<'g, G: ErasableGraph> ErasableGraph for &'g mut G {
    fn erase_node(&mut self, n: G::Node) {
        (**self).erase_node(n)
    }

    fn erase_edge(&mut self, e: G::Edge) {
        (**self).erase_edge(e)
    }

    fn clear(&mut self) {
        (**self).clear()
    }
}
