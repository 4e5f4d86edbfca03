use crate::graph::*;

/// A digraph with every arc read in the opposite direction.
///
/// Nothing is copied and no handle changes: an arc of the view *is* the
/// arc of the wrapped digraph, only `source`/`target` and the in/out
/// iteration swap roles.
/// Consequently all ID's, counts and lookup capabilities pass through
/// unchanged, and wrapping twice restores the original behavior.
pub struct ReverseDigraph<G> {
    inner: G,
}

impl<G: Digraph> ReverseDigraph<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: Digraph> GraphBase for ReverseDigraph<G> {
    type Node = G::Node;

    fn first_node(&self) -> Option<G::Node> {
        self.inner.first_node()
    }

    fn next_node(&self, n: G::Node) -> Option<G::Node> {
        self.inner.next_node(n)
    }

    fn node_id(&self, n: G::Node) -> usize {
        self.inner.node_id(n)
    }

    fn node_from_id(&self, id: usize) -> Option<G::Node> {
        self.inner.node_from_id(id)
    }

    fn max_node_id(&self) -> Option<usize> {
        self.inner.max_node_id()
    }
}

impl<G: Digraph> Digraph for ReverseDigraph<G> {
    type Arc = G::Arc;

    fn first_arc(&self) -> Option<G::Arc> {
        self.inner.first_arc()
    }

    fn next_arc(&self, a: G::Arc) -> Option<G::Arc> {
        self.inner.next_arc(a)
    }

    fn first_out(&self, n: G::Node) -> Option<G::Arc> {
        self.inner.first_in(n)
    }

    fn next_out(&self, a: G::Arc) -> Option<G::Arc> {
        self.inner.next_in(a)
    }

    fn first_in(&self, n: G::Node) -> Option<G::Arc> {
        self.inner.first_out(n)
    }

    fn next_in(&self, a: G::Arc) -> Option<G::Arc> {
        self.inner.next_out(a)
    }

    fn source(&self, a: G::Arc) -> G::Node {
        self.inner.target(a)
    }

    fn target(&self, a: G::Arc) -> G::Node {
        self.inner.source(a)
    }

    fn arc_id(&self, a: G::Arc) -> usize {
        self.inner.arc_id(a)
    }

    fn arc_from_id(&self, id: usize) -> Option<G::Arc> {
        self.inner.arc_from_id(id)
    }

    fn max_arc_id(&self) -> Option<usize> {
        self.inner.max_arc_id()
    }
}

impl<G: GrowableDigraph> GrowableDigraph for ReverseDigraph<G> {
    fn add_node(&mut self) -> G::Node {
        self.inner.add_node()
    }

    /// Adds an arc that the view reads from `source` to `target`, so the
    /// wrapped digraph receives it the other way around.
    fn add_arc(&mut self, source: G::Node, target: G::Node) -> G::Arc {
        self.inner.add_arc(target, source)
    }
}

impl<G: ErasableDigraph> ErasableDigraph for ReverseDigraph<G> {
    fn erase_node(&mut self, n: G::Node) {
        self.inner.erase_node(n)
    }

    fn erase_arc(&mut self, a: G::Arc) {
        self.inner.erase_arc(a)
    }

    fn clear(&mut self) {
        self.inner.clear()
    }
}

impl<G: NodeCount + Digraph> NodeCount for ReverseDigraph<G> {
    fn node_num(&self) -> usize {
        self.inner.node_num()
    }
}

impl<G: ArcCount> ArcCount for ReverseDigraph<G> {
    fn arc_num(&self) -> usize {
        self.inner.arc_num()
    }
}

impl<G: ArcLookup> ArcLookup for ReverseDigraph<G> {
    fn find_arc(&self, s: G::Node, t: G::Node, prev: Option<G::Arc>) -> Option<G::Arc> {
        self.inner.find_arc(t, s, prev)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::ArbitraryDigraph;
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    #[test]
    fn endpoints_swap() {
        let mut g = TreeBackedDigraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let ab = g.add_arc(a, b);

        let rev = ReverseDigraph::new(&g);
        assert_eq!(rev.source(ab), b);
        assert_eq!(rev.target(ab), a);
        assert_eq!(rev.out_arcs(b).collect::<Vec<_>>(), vec![ab]);
        assert_eq!(rev.in_arcs(a).collect::<Vec<_>>(), vec![ab]);
        assert_eq!(rev.find_arc(b, a, None), Some(ab));
        assert_eq!(rev.find_arc(a, b, None), None);
    }

    #[quickcheck]
    fn double_reversal_is_identity(d: ArbitraryDigraph) {
        let (g, nodes, _) = d.build();
        let back = ReverseDigraph::new(ReverseDigraph::new(&g));
        for s in nodes.iter() {
            let outs: BTreeSet<_> = g.out_arcs(*s).collect();
            let back_outs: BTreeSet<_> = back.out_arcs(*s).collect();
            assert_eq!(outs, back_outs);
            for t in nodes.iter() {
                assert_eq!(g.find_arc(*s, *t, None), back.find_arc(*s, *t, None));
            }
        }
        for a in back.arcs() {
            assert_eq!(back.source(a), g.source(a));
            assert_eq!(back.target(a), g.target(a));
        }
    }

    #[quickcheck]
    fn view_transparency(d: ArbitraryDigraph) {
        let (g, _, _) = d.build();
        let rev = ReverseDigraph::new(&g);
        let seen: BTreeSet<_> = rev.arcs().collect();
        let base: BTreeSet<_> = g.arcs().collect();
        assert_eq!(seen, base);
        assert_eq!(rev.count_arcs(), g.arc_num());
        assert_eq!(rev.arc_num(), g.arc_num());
    }
}
