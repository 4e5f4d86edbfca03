use crate::graph::*;
use crate::map::*;

/// The undirected counterpart of [SubDigraph](crate::view::SubDigraph):
/// nodes and edges hidden by caller-owned boolean filter maps.
///
/// An edge is visible when its own bit is true and both endpoints are
/// node-visible.
/// The amortized-cost caveat of the directed view applies to the
/// skip-while-hidden iteration here as well.
pub struct SubGraph<G, NF, EF> {
    inner: G,
    node_filter: NF,
    edge_filter: EF,
}

/// An edge-filtered graph; every node bit is constantly true.
pub type FilterEdges<G, EF> = SubGraph<G, ConstMap<<G as GraphBase>::Node, bool>, EF>;

/// A node-filtered graph; every edge bit is constantly true.
pub type FilterGraphNodes<G, NF> = SubGraph<G, NF, ConstMap<<G as Graph>::Edge, bool>>;

/// Hides the edges whose bit in `edge_filter` is false.
pub fn filter_edges<G, EF>(inner: G, edge_filter: EF) -> FilterEdges<G, EF>
where
    G: Graph,
    EF: ReadMap<G::Edge, Value = bool>,
{
    SubGraph::new(inner, ConstMap::new(true), edge_filter)
}

/// Hides the nodes whose bit in `node_filter` is false, and every edge
/// touching them; the undirected counterpart of
/// [filter_nodes](crate::view::filter_nodes).
pub fn filter_graph_nodes<G, NF>(inner: G, node_filter: NF) -> FilterGraphNodes<G, NF>
where
    G: Graph,
    NF: ReadMap<G::Node, Value = bool>,
{
    SubGraph::new(inner, node_filter, ConstMap::new(true))
}

impl<G, NF, EF> SubGraph<G, NF, EF>
where
    G: Graph,
    NF: ReadMap<G::Node, Value = bool>,
    EF: ReadMap<G::Edge, Value = bool>,
{
    pub fn new(inner: G, node_filter: NF, edge_filter: EF) -> Self {
        Self {
            inner,
            node_filter,
            edge_filter,
        }
    }

    pub fn node_status(&self, n: G::Node) -> bool {
        self.node_filter.get(&n)
    }

    pub fn edge_status(&self, e: G::Edge) -> bool {
        self.edge_filter.get(&e)
    }

    fn node_visible(&self, n: G::Node) -> bool {
        self.node_filter.get(&n)
    }

    fn edge_visible(&self, e: G::Edge) -> bool {
        self.edge_filter.get(&e)
            && self.node_visible(self.inner.u(e))
            && self.node_visible(self.inner.v(e))
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

    fn skip_hidden_edges(&self, mut cur: Option<G::Edge>) -> Option<G::Edge> {
        while let Some(e) = cur {
            if self.edge_visible(e) {
                return Some(e);
            }
            cur = self.inner.next_edge(e);
        }
        None
    }

    fn skip_hidden_inc(
        &self,
        n: G::Node,
        mut cur: Option<(G::Edge, bool)>,
    ) -> Option<(G::Edge, bool)> {
        while let Some((e, d)) = cur {
            if self.edge_visible(e) {
                return Some((e, d));
            }
            cur = self.inner.next_inc(n, e, d);
        }
        None
    }
}

impl<G, NF, EF> SubGraph<G, NF, EF>
where
    G: Graph,
    NF: WriteMap<G::Node, Value = bool>,
    EF: ReadMap<G::Edge, Value = bool>,
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

impl<G, NF, EF> SubGraph<G, NF, EF>
where
    G: Graph,
    NF: ReadMap<G::Node, Value = bool>,
    EF: WriteMap<G::Edge, Value = bool>,
{
    pub fn set_edge_status(&mut self, e: G::Edge, visible: bool) {
        self.edge_filter.set(&e, visible);
    }

    pub fn enable_edge(&mut self, e: G::Edge) {
        self.set_edge_status(e, true);
    }

    pub fn disable_edge(&mut self, e: G::Edge) {
        self.set_edge_status(e, false);
    }
}

impl<G, NF, EF> GraphBase for SubGraph<G, NF, EF>
where
    G: Graph,
    NF: ReadMap<G::Node, Value = bool>,
    EF: ReadMap<G::Edge, Value = bool>,
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

impl<G, NF, EF> Graph for SubGraph<G, NF, EF>
where
    G: Graph,
    NF: ReadMap<G::Node, Value = bool>,
    EF: ReadMap<G::Edge, Value = bool>,
{
    type Edge = G::Edge;

    fn first_edge(&self) -> Option<G::Edge> {
        self.skip_hidden_edges(self.inner.first_edge())
    }

    fn next_edge(&self, e: G::Edge) -> Option<G::Edge> {
        self.skip_hidden_edges(self.inner.next_edge(e))
    }

    fn first_inc(&self, n: G::Node) -> Option<(G::Edge, bool)> {
        self.skip_hidden_inc(n, self.inner.first_inc(n))
    }

    fn next_inc(&self, n: G::Node, e: G::Edge, d: bool) -> Option<(G::Edge, bool)> {
        self.skip_hidden_inc(n, self.inner.next_inc(n, e, d))
    }

    fn u(&self, e: G::Edge) -> G::Node {
        self.inner.u(e)
    }

    fn v(&self, e: G::Edge) -> G::Node {
        self.inner.v(e)
    }

    fn edge_id(&self, e: G::Edge) -> usize {
        self.inner.edge_id(e)
    }

    fn edge_from_id(&self, id: usize) -> Option<G::Edge> {
        self.inner.edge_from_id(id).filter(|e| self.edge_visible(*e))
    }

    fn max_edge_id(&self) -> Option<usize> {
        self.inner.max_edge_id()
    }
}

impl<G, NF, EF> GrowableGraph for SubGraph<G, NF, EF>
where
    G: GrowableGraph,
    NF: WriteMap<G::Node, Value = bool>,
    EF: WriteMap<G::Edge, Value = bool>,
{
    fn add_node(&mut self) -> G::Node {
        let n = self.inner.add_node();
        self.node_filter.set(&n, true);
        n
    }

    fn add_edge(&mut self, u: G::Node, v: G::Node) -> G::Edge {
        let e = self.inner.add_edge(u, v);
        self.edge_filter.set(&e, true);
        e
    }
}

impl<G, NF, EF> ErasableGraph for SubGraph<G, NF, EF>
where
    G: ErasableGraph,
    NF: ReadMap<G::Node, Value = bool>,
    EF: ReadMap<G::Edge, Value = bool>,
{
    fn erase_node(&mut self, n: G::Node) {
        self.inner.erase_node(n)
    }

    fn erase_edge(&mut self, e: G::Edge) {
        self.inner.erase_edge(e)
    }

    fn clear(&mut self) {
        self.inner.clear()
    }
}

impl<G, NF, EF> EdgeLookup for SubGraph<G, NF, EF>
where
    G: EdgeLookup,
    NF: ReadMap<G::Node, Value = bool>,
    EF: ReadMap<G::Edge, Value = bool>,
{
    fn find_edge(&self, u: G::Node, v: G::Node, prev: Option<G::Edge>) -> Option<G::Edge> {
        let mut cur = self.inner.find_edge(u, v, prev);
        while let Some(e) = cur {
            if self.edge_visible(e) {
                return Some(e);
            }
            cur = self.inner.find_edge(u, v, Some(e));
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

    // Reuses the directed generator as an endpoint-list description.
    fn build_undirected(d: &ArbitraryDigraph) -> (TreeBackedGraph, Vec<NodeId>, Vec<EdgeId>) {
        let mut g = TreeBackedGraph::new();
        let nodes: Vec<_> = (0..d.node_count).map(|_| g.add_node()).collect();
        let edges: Vec<_> = d
            .arcs
            .iter()
            .map(|(a, b)| g.add_edge(nodes[*a], nodes[*b]))
            .collect();
        (g, nodes, edges)
    }

    #[quickcheck]
    fn view_transparency(d: ArbitraryDigraph, nbits: Vec<bool>, ebits: Vec<bool>) {
        let (g, nodes, edges) = build_undirected(&d);
        let mut nf = g.node_map(true);
        let mut ef = g.edge_map(true);
        for (i, n) in nodes.iter().enumerate() {
            nf.set(n, bit(&nbits, i));
        }
        for (i, e) in edges.iter().enumerate() {
            ef.set(e, bit(&ebits, i));
        }
        let sub = SubGraph::new(&g, &nf, &ef);

        let expected_edges: BTreeSet<_> = g
            .edges()
            .filter(|e| ef.get(e) && nf.get(&g.u(*e)) && nf.get(&g.v(*e)))
            .collect();
        assert_eq!(sub.edges().collect::<BTreeSet<_>>(), expected_edges);

        let by_inc: BTreeSet<_> = sub.nodes().flat_map(|n| sub.inc_edges(n)).collect();
        assert_eq!(by_inc, expected_edges);
    }

    #[test]
    fn hiding_a_node_takes_incident_edges() {
        let mut g = TreeBackedGraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();
        let ab = g.add_edge(a, b);
        let bc = g.add_edge(b, c);
        let ac = g.add_edge(a, c);

        let mut nf = g.node_map(true);
        let mut sub = filter_graph_nodes(&g, &mut nf);
        sub.disable_node(b);
        assert_eq!(sub.nodes().collect::<Vec<_>>(), vec![a, c]);
        assert_eq!(sub.edges().collect::<Vec<_>>(), vec![ac]);
        assert_eq!(sub.node_from_id(g.node_id(b)), None);
        assert_eq!(sub.edge_from_id(g.edge_id(ab)), None);
        assert_eq!(sub.edge_from_id(g.edge_id(bc)), None);
        assert_eq!(sub.find_edge(a, b, None), None);
        assert!(sub.inc_edges(a).all(|e| e == ac));

        sub.enable_node(b);
        assert_eq!(sub.count_edges(), 3);
        drop(sub);
        assert_eq!(g.edge_num(), 3);
    }

    #[test]
    fn hiding_an_edge_spares_the_graph() {
        let mut g = TreeBackedGraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let ab = g.add_edge(a, b);

        let mut ef = g.edge_map(true);
        let mut sub = filter_edges(&g, &mut ef);
        sub.disable_edge(ab);
        assert_eq!(sub.count_edges(), 0);
        assert_eq!(sub.find_edge(a, b, None), None);
        sub.enable_edge(ab);
        assert_eq!(sub.find_edge(a, b, None), Some(ab));
        drop(sub);
        assert_eq!(g.edge_num(), 1);
    }
}
