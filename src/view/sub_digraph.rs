use crate::graph::*;
use crate::map::*;

/// A digraph with nodes and arcs hidden by caller-owned boolean filter
/// maps.
///
/// An arc is visible when its own filter bit is true *and* both of its
/// endpoints are node-visible.
/// Hiding is not erasing: toggling a bit never touches the wrapped
/// digraph, so several views layered over the same base may hide
/// different parts of it.
///
/// Iteration skips hidden items one base step at a time, so a single
/// `next_*` costs time proportional to the run of consecutively hidden
/// items it crosses; under adversarial filters this degrades toward
/// O(n) per step.
/// For the same reason the view advertises no O(1) counting capability:
/// count through [Digraph::count_arcs] or keep a count next to the filter.
pub struct SubDigraph<G, NF, AF> {
    inner: G,
    node_filter: NF,
    arc_filter: AF,
}

/// A node-filtered digraph; every arc bit is constantly true.
pub type FilterNodes<G, NF> = SubDigraph<G, NF, ConstMap<<G as Digraph>::Arc, bool>>;

/// An arc-filtered digraph; every node bit is constantly true.
pub type FilterArcs<G, AF> = SubDigraph<G, ConstMap<<G as GraphBase>::Node, bool>, AF>;

/// Hides the nodes whose bit in `node_filter` is false, and every arc
/// touching them.
pub fn filter_nodes<G, NF>(inner: G, node_filter: NF) -> FilterNodes<G, NF>
where
    G: Digraph,
    NF: ReadMap<G::Node, Value = bool>,
{
    SubDigraph::new(inner, node_filter, ConstMap::new(true))
}

/// Hides the arcs whose bit in `arc_filter` is false.
pub fn filter_arcs<G, AF>(inner: G, arc_filter: AF) -> FilterArcs<G, AF>
where
    G: Digraph,
    AF: ReadMap<G::Arc, Value = bool>,
{
    SubDigraph::new(inner, ConstMap::new(true), arc_filter)
}

impl<G, NF, AF> SubDigraph<G, NF, AF>
where
    G: Digraph,
    NF: ReadMap<G::Node, Value = bool>,
    AF: ReadMap<G::Arc, Value = bool>,
{
    pub fn new(inner: G, node_filter: NF, arc_filter: AF) -> Self {
        Self {
            inner,
            node_filter,
            arc_filter,
        }
    }

    /// Whether `n` is visible in this view.
    pub fn node_status(&self, n: G::Node) -> bool {
        self.node_filter.get(&n)
    }

    /// Whether the arc bit of `a` is set; the arc may still be hidden by
    /// an endpoint.
    pub fn arc_status(&self, a: G::Arc) -> bool {
        self.arc_filter.get(&a)
    }

    fn node_visible(&self, n: G::Node) -> bool {
        self.node_filter.get(&n)
    }

    fn arc_visible(&self, a: G::Arc) -> bool {
        self.arc_filter.get(&a)
            && self.node_visible(self.inner.source(a))
            && self.node_visible(self.inner.target(a))
    }

    fn skip_hidden_nodes(&self, mut cur: Option<G::Node>) -> Option<G::Node> {
        while let Some(n) = cur {
            if self.node_visible(n) {
                return Some(n);
            }
            cur = self.inner.next_node(n);
        }
        None
    }

    fn skip_hidden_arcs<F>(&self, mut cur: Option<G::Arc>, step: F) -> Option<G::Arc>
    where
        F: Fn(&G, G::Arc) -> Option<G::Arc>,
    {
        while let Some(a) = cur {
            if self.arc_visible(a) {
                return Some(a);
            }
            cur = step(&self.inner, a);
        }
        None
    }
}

impl<G, NF, AF> SubDigraph<G, NF, AF>
where
    G: Digraph,
    NF: WriteMap<G::Node, Value = bool>,
    AF: ReadMap<G::Arc, Value = bool>,
{
    pub fn set_node_status(&mut self, n: G::Node, visible: bool) {
        self.node_filter.set(&n, visible);
    }

    pub fn enable_node(&mut self, n: G::Node) {
        self.set_node_status(n, true);
    }

    pub fn disable_node(&mut self, n: G::Node) {
        self.set_node_status(n, false);
    }
}

impl<G, NF, AF> SubDigraph<G, NF, AF>
where
    G: Digraph,
    NF: ReadMap<G::Node, Value = bool>,
    AF: WriteMap<G::Arc, Value = bool>,
{
    pub fn set_arc_status(&mut self, a: G::Arc, visible: bool) {
        self.arc_filter.set(&a, visible);
    }

    pub fn enable_arc(&mut self, a: G::Arc) {
        self.set_arc_status(a, true);
    }

    pub fn disable_arc(&mut self, a: G::Arc) {
        self.set_arc_status(a, false);
    }
}

impl<G, NF, AF> GraphBase for SubDigraph<G, NF, AF>
where
    G: Digraph,
    NF: ReadMap<G::Node, Value = bool>,
    AF: ReadMap<G::Arc, Value = bool>,
{
    type Node = G::Node;

    fn first_node(&self) -> Option<G::Node> {
        self.skip_hidden_nodes(self.inner.first_node())
    }

    fn next_node(&self, n: G::Node) -> Option<G::Node> {
        self.skip_hidden_nodes(self.inner.next_node(n))
    }

    fn node_id(&self, n: G::Node) -> usize {
        self.inner.node_id(n)
    }

    fn node_from_id(&self, id: usize) -> Option<G::Node> {
        self.inner.node_from_id(id).filter(|n| self.node_visible(*n))
    }

    fn max_node_id(&self) -> Option<usize> {
        self.inner.max_node_id()
    }
}

impl<G, NF, AF> Digraph for SubDigraph<G, NF, AF>
where
    G: Digraph,
    NF: ReadMap<G::Node, Value = bool>,
    AF: ReadMap<G::Arc, Value = bool>,
{
    type Arc = G::Arc;

    fn first_arc(&self) -> Option<G::Arc> {
        self.skip_hidden_arcs(self.inner.first_arc(), G::next_arc)
    }

    fn next_arc(&self, a: G::Arc) -> Option<G::Arc> {
        self.skip_hidden_arcs(self.inner.next_arc(a), G::next_arc)
    }

    fn first_out(&self, n: G::Node) -> Option<G::Arc> {
        self.skip_hidden_arcs(self.inner.first_out(n), G::next_out)
    }

    fn next_out(&self, a: G::Arc) -> Option<G::Arc> {
        self.skip_hidden_arcs(self.inner.next_out(a), G::next_out)
    }

    fn first_in(&self, n: G::Node) -> Option<G::Arc> {
        self.skip_hidden_arcs(self.inner.first_in(n), G::next_in)
    }

    fn next_in(&self, a: G::Arc) -> Option<G::Arc> {
        self.skip_hidden_arcs(self.inner.next_in(a), G::next_in)
    }

    fn source(&self, a: G::Arc) -> G::Node {
        self.inner.source(a)
    }

    fn target(&self, a: G::Arc) -> G::Node {
        self.inner.target(a)
    }

    fn arc_id(&self, a: G::Arc) -> usize {
        self.inner.arc_id(a)
    }

    fn arc_from_id(&self, id: usize) -> Option<G::Arc> {
        self.inner.arc_from_id(id).filter(|a| self.arc_visible(*a))
    }

    fn max_arc_id(&self) -> Option<usize> {
        self.inner.max_arc_id()
    }
}

impl<G, NF, AF> GrowableDigraph for SubDigraph<G, NF, AF>
where
    G: GrowableDigraph,
    NF: WriteMap<G::Node, Value = bool>,
    AF: WriteMap<G::Arc, Value = bool>,
{
    /// Adds to the wrapped digraph and makes the new node visible here.
    fn add_node(&mut self) -> G::Node {
        let n = self.inner.add_node();
        self.node_filter.set(&n, true);
        n
    }

    fn add_arc(&mut self, source: G::Node, target: G::Node) -> G::Arc {
        let a = self.inner.add_arc(source, target);
        self.arc_filter.set(&a, true);
        a
    }
}

impl<G, NF, AF> ErasableDigraph for SubDigraph<G, NF, AF>
where
    G: ErasableDigraph,
    NF: ReadMap<G::Node, Value = bool>,
    AF: ReadMap<G::Arc, Value = bool>,
{
    /// Really erases from the wrapped digraph, unlike `disable_node`.
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

impl<G, NF, AF> ArcLookup for SubDigraph<G, NF, AF>
where
    G: ArcLookup,
    NF: ReadMap<G::Node, Value = bool>,
    AF: ReadMap<G::Arc, Value = bool>,
{
    fn find_arc(&self, s: G::Node, t: G::Node, prev: Option<G::Arc>) -> Option<G::Arc> {
        let mut cur = self.inner.find_arc(s, t, prev);
        while let Some(a) = cur {
            if self.arc_visible(a) {
                return Some(a);
            }
            cur = self.inner.find_arc(s, t, Some(a));
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::ArbitraryDigraph;
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    fn bit(bits: &[bool], i: usize) -> bool {
        if bits.is_empty() {
            true
        } else {
            bits[i % bits.len()]
        }
    }

    #[quickcheck]
    fn view_transparency(d: ArbitraryDigraph, nbits: Vec<bool>, abits: Vec<bool>) {
        let (g, nodes, arcs) = d.build();
        let mut nf = g.node_map(true);
        let mut af = g.arc_map(true);
        for (i, n) in nodes.iter().enumerate() {
            nf.set(n, bit(&nbits, i));
        }
        for (i, a) in arcs.iter().enumerate() {
            af.set(a, bit(&abits, i));
        }
        let sub = SubDigraph::new(&g, &nf, &af);

        let expected_nodes: BTreeSet<_> = g.nodes().filter(|n| nf.get(n)).collect();
        assert_eq!(sub.nodes().collect::<BTreeSet<_>>(), expected_nodes);

        let expected_arcs: BTreeSet<_> = g
            .arcs()
            .filter(|a| af.get(a) && nf.get(&g.source(*a)) && nf.get(&g.target(*a)))
            .collect();
        assert_eq!(sub.arcs().collect::<BTreeSet<_>>(), expected_arcs);

        let by_out: BTreeSet<_> = sub.nodes().flat_map(|n| sub.out_arcs(n)).collect();
        assert_eq!(by_out, expected_arcs);
        let by_in: BTreeSet<_> = sub.nodes().flat_map(|n| sub.in_arcs(n)).collect();
        assert_eq!(by_in, expected_arcs);

        // INVALID propagation: hidden items are not reachable by ID.
        for n in nodes.iter() {
            let expect = nf.get(n).then(|| *n);
            assert_eq!(sub.node_from_id(g.node_id(*n)), expect);
        }
        for a in arcs.iter() {
            let expect = expected_arcs.contains(a).then(|| *a);
            assert_eq!(sub.arc_from_id(g.arc_id(*a)), expect);
        }
    }

    #[quickcheck]
    fn find_arc_skips_hidden(d: ArbitraryDigraph, abits: Vec<bool>) {
        let (g, nodes, arcs) = d.build();
        let mut af = g.arc_map(true);
        for (i, a) in arcs.iter().enumerate() {
            af.set(a, bit(&abits, i));
        }
        let sub = filter_arcs(&g, &af);
        for s in nodes.iter() {
            for t in nodes.iter() {
                let mut fast = sub.find_arc(*s, *t, None);
                let mut slow = sub.find_arc_scan(*s, *t, None);
                loop {
                    assert_eq!(fast, slow);
                    match fast {
                        None => break,
                        Some(_) => {
                            fast = sub.find_arc(*s, *t, fast);
                            slow = sub.find_arc_scan(*s, *t, slow);
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn disable_is_idempotent_and_enable_restores() {
        let mut g = TreeBackedDigraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();
        g.add_arc(a, b);
        g.add_arc(b, c);
        g.add_arc(a, c);

        let mut nf = g.node_map(true);
        let mut sub = filter_nodes(&g, &mut nf);
        let full: Vec<_> = sub.arcs().collect();

        sub.disable_node(b);
        let hidden_once: Vec<_> = sub.arcs().collect();
        assert_eq!(hidden_once.len(), 1);
        sub.disable_node(b);
        let hidden_twice: Vec<_> = sub.arcs().collect();
        assert_eq!(hidden_once, hidden_twice);

        sub.enable_node(b);
        assert_eq!(sub.arcs().collect::<Vec<_>>(), full);

        // Hiding never erased anything underneath.
        drop(sub);
        assert_eq!(g.arc_num(), 3);
        assert_eq!(g.node_num(), 3);
    }

    #[test]
    fn growth_through_the_view_is_visible_everywhere() {
        let mut g = TreeBackedDigraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let mut nf = HashedMap::new(false);
        nf.set(&a, true);
        nf.set(&b, true);
        let mut af = HashedMap::new(false);

        let mut sub = SubDigraph::new(&mut g, &mut nf, &mut af);
        let c = sub.add_node();
        let bc = sub.add_arc(b, c);
        assert!(sub.node_status(c));
        assert!(sub.arc_status(bc));
        assert_eq!(sub.arcs().collect::<Vec<_>>(), vec![bc]);
        drop(sub);
        assert_eq!(g.node_num(), 3);
        assert_eq!(g.arc_num(), 1);
    }
}
