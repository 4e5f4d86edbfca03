use crate::graph::*;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

/// An undirected graph with balanced computational complexity.
///
/// The complexity table of [TreeBackedDigraph] applies, with edges in
/// place of arcs.
///
/// A self-loop is incident to its node twice: incidence iteration yields
/// it once for each endpoint role, which is what the orientation views
/// rely on to expose a loop as both an out-arc and an in-arc.
#[derive(Clone)]
pub struct TreeBackedGraph {
    node_factory: NodeIdFactory,
    edge_factory: EdgeIdFactory,
    nodes: BTreeSet<NodeId>,
    edges: BTreeMap<EdgeId, (NodeId, NodeId)>,
    // (n, other endpoint, e); loops keep a single entry.
    inc_edges: BTreeSet<(NodeId, NodeId, EdgeId)>,
}

impl Default for TreeBackedGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBackedGraph {
    pub fn new() -> Self {
        Self {
            node_factory: NodeIdFactory::new(),
            edge_factory: EdgeIdFactory::new(),
            nodes: BTreeSet::new(),
            edges: BTreeMap::new(),
            inc_edges: BTreeSet::new(),
        }
    }

    fn endpoints(&self, e: EdgeId) -> (NodeId, NodeId) {
        self.edges[&e]
    }

    fn is_loop(&self, e: EdgeId) -> bool {
        let (u, v) = self.endpoints(e);
        u == v
    }

    /// The endpoint of `e` that is not `n` (or `n` itself for a loop).
    fn opposite(&self, n: NodeId, e: EdgeId) -> NodeId {
        let (u, v) = self.endpoints(e);
        if u == n {
            v
        } else {
            u
        }
    }

    fn inc_of(&self, n: NodeId, e: EdgeId) -> (EdgeId, bool) {
        if self.is_loop(e) {
            (e, true)
        } else {
            (e, self.endpoints(e).0 == n)
        }
    }
}

impl std::fmt::Debug for TreeBackedGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TreeBackedGraph {{")?;
        for e in self.edges() {
            let (u, v) = self.endpoints(e);
            writeln!(f, "  {:?} --{:?}-- {:?}", u, e, v)?;
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl GraphBase for TreeBackedGraph {
    type Node = NodeId;

    fn first_node(&self) -> Option<NodeId> {
        self.nodes.iter().next().copied()
    }

    fn next_node(&self, n: NodeId) -> Option<NodeId> {
        self.nodes.range(n.next()..).next().copied()
    }

    fn node_id(&self, n: NodeId) -> usize {
        n.to_raw()
    }

    fn node_from_id(&self, id: usize) -> Option<NodeId> {
        let n = NodeId::new(id);
        if self.nodes.contains(&n) {
            Some(n)
        } else {
            None
        }
    }

    fn max_node_id(&self) -> Option<usize> {
        self.node_factory.max_issued()
    }
}

impl Graph for TreeBackedGraph {
    type Edge = EdgeId;

    fn first_edge(&self) -> Option<EdgeId> {
        self.edges.keys().next().copied()
    }

    fn next_edge(&self, e: EdgeId) -> Option<EdgeId> {
        self.edges.range(e.next()..).next().map(|(k, _)| *k)
    }

    fn first_inc(&self, n: NodeId) -> Option<(EdgeId, bool)> {
        let start = (n, NodeId::MIN, EdgeId::MIN);
        let end = (n.next(), NodeId::MIN, EdgeId::MIN);
        self.inc_edges
            .range(start..end)
            .next()
            .map(|x| self.inc_of(n, x.2))
    }

    fn next_inc(&self, n: NodeId, e: EdgeId, d: bool) -> Option<(EdgeId, bool)> {
        // The second visit of a loop reuses its single incidence entry.
        if self.is_loop(e) && d {
            return Some((e, false));
        }
        let other = self.opposite(n, e);
        let end = (n.next(), NodeId::MIN, EdgeId::MIN);
        self.inc_edges
            .range((Bound::Excluded((n, other, e)), Bound::Excluded(end)))
            .next()
            .map(|x| self.inc_of(n, x.2))
    }

    fn u(&self, e: EdgeId) -> NodeId {
        self.endpoints(e).0
    }

    fn v(&self, e: EdgeId) -> NodeId {
        self.endpoints(e).1
    }

    fn edge_id(&self, e: EdgeId) -> usize {
        e.to_raw()
    }

    fn edge_from_id(&self, id: usize) -> Option<EdgeId> {
        let e = EdgeId::new(id);
        if self.edges.contains_key(&e) {
            Some(e)
        } else {
            None
        }
    }

    fn max_edge_id(&self) -> Option<usize> {
        self.edge_factory.max_issued()
    }
}

impl GrowableGraph for TreeBackedGraph {
    fn add_node(&mut self) -> NodeId {
        let n = self.node_factory.one_more();
        self.nodes.insert(n);
        n
    }

    fn add_edge(&mut self, u: NodeId, v: NodeId) -> EdgeId {
        debug_assert!(self.nodes.contains(&u));
        debug_assert!(self.nodes.contains(&v));
        let e = self.edge_factory.one_more();
        self.edges.insert(e, (u, v));
        self.inc_edges.insert((u, v, e));
        self.inc_edges.insert((v, u, e));
        e
    }
}

impl ErasableGraph for TreeBackedGraph {
    fn erase_node(&mut self, n: NodeId) {
        if !self.nodes.remove(&n) {
            return;
        }
        let start = (n, NodeId::MIN, EdgeId::MIN);
        let end = (n.next(), NodeId::MIN, EdgeId::MIN);
        let incident: Vec<EdgeId> = self.inc_edges.range(start..end).map(|x| x.2).collect();
        for e in incident {
            self.erase_edge(e);
        }
    }

    fn erase_edge(&mut self, e: EdgeId) {
        if let Some((u, v)) = self.edges.remove(&e) {
            self.inc_edges.remove(&(u, v, e));
            self.inc_edges.remove(&(v, u, e));
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.inc_edges.clear();
    }
}

impl NodeCount for TreeBackedGraph {
    fn node_num(&self) -> usize {
        self.nodes.len()
    }
}

impl EdgeCount for TreeBackedGraph {
    fn edge_num(&self) -> usize {
        self.edges.len()
    }
}

impl EdgeLookup for TreeBackedGraph {
    fn find_edge(&self, u: NodeId, v: NodeId, prev: Option<EdgeId>) -> Option<EdgeId> {
        let end = Bound::Included((u, v, EdgeId::MAX));
        let start = match prev {
            Some(p) => Bound::Excluded((u, v, p)),
            None => Bound::Included((u, v, EdgeId::MIN)),
        };
        self.inc_edges.range((start, end)).next().map(|x| x.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incidence_reaches_both_endpoints() {
        let mut g = TreeBackedGraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();
        let ab = g.add_edge(a, b);
        let bc = g.add_edge(b, c);

        let at_a: Vec<_> = g.inc_edges(a).collect();
        assert_eq!(at_a, vec![ab]);
        let at_b: Vec<_> = g.inc_edges(b).collect();
        assert_eq!(at_b, vec![ab, bc]);
        assert_eq!(g.u(ab), a);
        assert_eq!(g.v(ab), b);
    }

    #[test]
    fn incidence_direction_bit_tracks_the_u_role() {
        let mut g = TreeBackedGraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let ab = g.add_edge(a, b);

        assert_eq!(g.first_inc(a), Some((ab, true)));
        assert_eq!(g.first_inc(b), Some((ab, false)));
    }

    #[test]
    fn loops_are_incident_twice() {
        let mut g = TreeBackedGraph::new();
        let a = g.add_node();
        let aa = g.add_edge(a, a);

        let at_a: Vec<_> = g.inc_edges(a).collect();
        assert_eq!(at_a, vec![aa, aa]);
        assert_eq!(g.first_inc(a), Some((aa, true)));
        assert_eq!(g.next_inc(a, aa, true), Some((aa, false)));
        assert_eq!(g.next_inc(a, aa, false), None);
    }

    #[test]
    fn find_edge_works_in_both_orientations() {
        let mut g = TreeBackedGraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let ab = g.add_edge(a, b);

        assert_eq!(g.find_edge(a, b, None), Some(ab));
        assert_eq!(g.find_edge(b, a, None), Some(ab));
        assert_eq!(g.find_edge(a, b, Some(ab)), None);
    }

    #[test]
    fn erase_node_takes_incident_edges() {
        let mut g = TreeBackedGraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();
        g.add_edge(a, b);
        let bc = g.add_edge(b, c);
        g.erase_node(a);

        assert_eq!(g.node_num(), 2);
        assert_eq!(g.edge_num(), 1);
        assert_eq!(g.edges().collect::<Vec<_>>(), vec![bc]);
    }
}
