use crate::graph::*;
use crate::map::*;

/// Reads an undirected graph as a digraph, with the direction of every
/// edge taken from a caller-owned boolean map.
///
/// `true` orients an edge from its `u` endpoint to its `v` endpoint.
/// An arc of the view *is* an edge of the wrapped graph, so ID's pass
/// through untouched and flipping a bit in the map redirects the arc
/// without invalidating any handle.
pub struct Orienter<G, DM> {
    inner: G,
    direction: DM,
}

impl<G, DM> Orienter<G, DM>
where
    G: Graph,
    DM: ReadMap<G::Edge, Value = bool>,
{
    pub fn new(inner: G, direction: DM) -> Self {
        Self { inner, direction }
    }

    /// True when the arc runs from `u` to `v` of the underlying edge.
    pub fn direction(&self, e: G::Edge) -> bool {
        self.direction.get(&e)
    }

    // An incidence visit (e, d) at n is an out-arc of n exactly when the
    // direction bit agrees with the role bit; a loop passes once in each
    // phase of its double visit.
    fn skip_non_out(&self, cur: Option<(G::Edge, bool)>, n: G::Node) -> Option<G::Edge> {
        let mut cur = cur;
        while let Some((e, d)) = cur {
            if self.direction.get(&e) == d {
                return Some(e);
            }
            cur = self.inner.next_inc(n, e, d);
        }
        None
    }

    fn skip_non_in(&self, cur: Option<(G::Edge, bool)>, n: G::Node) -> Option<G::Edge> {
        let mut cur = cur;
        while let Some((e, d)) = cur {
            if self.direction.get(&e) != d {
                return Some(e);
            }
            cur = self.inner.next_inc(n, e, d);
        }
        None
    }
}

impl<G, DM> Orienter<G, DM>
where
    G: Graph,
    DM: WriteMap<G::Edge, Value = bool>,
{
    pub fn set_direction(&mut self, e: G::Edge, u_to_v: bool) {
        self.direction.set(&e, u_to_v);
    }

    pub fn reverse_arc(&mut self, e: G::Edge) {
        let d = self.direction.get(&e);
        self.direction.set(&e, !d);
    }
}

impl<G, DM> GraphBase for Orienter<G, DM>
where
    G: Graph,
    DM: ReadMap<G::Edge, Value = bool>,
{
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

impl<G, DM> Digraph for Orienter<G, DM>
where
    G: Graph,
    DM: ReadMap<G::Edge, Value = bool>,
{
    type Arc = G::Edge;

    fn first_arc(&self) -> Option<G::Edge> {
        self.inner.first_edge()
    }

    fn next_arc(&self, a: G::Edge) -> Option<G::Edge> {
        self.inner.next_edge(a)
    }

    fn first_out(&self, n: G::Node) -> Option<G::Edge> {
        self.skip_non_out(self.inner.first_inc(n), n)
    }

    fn next_out(&self, a: G::Edge) -> Option<G::Edge> {
        let n = self.source(a);
        let d = self.direction.get(&a);
        self.skip_non_out(self.inner.next_inc(n, a, d), n)
    }

    fn first_in(&self, n: G::Node) -> Option<G::Edge> {
        self.skip_non_in(self.inner.first_inc(n), n)
    }

    fn next_in(&self, a: G::Edge) -> Option<G::Edge> {
        let n = self.target(a);
        let d = !self.direction.get(&a);
        self.skip_non_in(self.inner.next_inc(n, a, d), n)
    }

    fn source(&self, a: G::Edge) -> G::Node {
        if self.direction.get(&a) {
            self.inner.u(a)
        } else {
            self.inner.v(a)
        }
    }

    fn target(&self, a: G::Edge) -> G::Node {
        if self.direction.get(&a) {
            self.inner.v(a)
        } else {
            self.inner.u(a)
        }
    }

    fn arc_id(&self, a: G::Edge) -> usize {
        self.inner.edge_id(a)
    }

    fn arc_from_id(&self, id: usize) -> Option<G::Edge> {
        self.inner.edge_from_id(id)
    }

    fn max_arc_id(&self) -> Option<usize> {
        self.inner.max_edge_id()
    }
}

impl<G, DM> GrowableDigraph for Orienter<G, DM>
where
    G: GrowableGraph,
    DM: WriteMap<G::Edge, Value = bool>,
{
    fn add_node(&mut self) -> G::Node {
        self.inner.add_node()
    }

    fn add_arc(&mut self, source: G::Node, target: G::Node) -> G::Edge {
        let e = self.inner.add_edge(source, target);
        self.direction.set(&e, self.inner.u(e) == source);
        e
    }
}

impl<G, DM> ErasableDigraph for Orienter<G, DM>
where
    G: ErasableGraph,
    DM: ReadMap<G::Edge, Value = bool>,
{
    fn erase_node(&mut self, n: G::Node) {
        self.inner.erase_node(n)
    }

    fn erase_arc(&mut self, a: G::Edge) {
        self.inner.erase_edge(a)
    }

    fn clear(&mut self) {
        self.inner.clear()
    }
}

impl<G, DM> NodeCount for Orienter<G, DM>
where
    G: NodeCount + Graph,
    DM: ReadMap<G::Edge, Value = bool>,
{
    fn node_num(&self) -> usize {
        self.inner.node_num()
    }
}

impl<G, DM> ArcCount for Orienter<G, DM>
where
    G: EdgeCount,
    DM: ReadMap<G::Edge, Value = bool>,
{
    fn arc_num(&self) -> usize {
        self.inner.edge_num()
    }
}

impl<G, DM> ArcLookup for Orienter<G, DM>
where
    G: EdgeLookup,
    DM: ReadMap<G::Edge, Value = bool>,
{
    fn find_arc(&self, s: G::Node, t: G::Node, prev: Option<G::Edge>) -> Option<G::Edge> {
        let mut cur = self.inner.find_edge(s, t, prev);
        while let Some(e) = cur {
            if self.source(e) == s && self.target(e) == t {
                return Some(e);
            }
            cur = self.inner.find_edge(s, t, Some(e));
        }
        None
    }
}
