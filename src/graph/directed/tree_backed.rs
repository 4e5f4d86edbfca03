use crate::graph::*;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::Bound;

/// A directed graph with balanced computational complexity.
///
/// |                 | Complexity                                          |
/// | --------------- | --------------------------------------------------- |
/// | `add_node`      | $O(\log \|V\|)$                                     |
/// | `add_arc`       | $O(\log \|V\| + \log \|A\|)$                        |
/// | `erase_arc`     | $O(\log \|A\|)$                                     |
/// | `erase_node`    | $O(\log \|V\| + \|A'\| \log \|A\|)$, $A'$ incident  |
/// | `node_num`      | $O(1)$                                              |
/// | `arc_num`       | $O(1)$                                              |
/// | `next_*`        | $O(\log \|A\|)$, amortized $O(1)$ over a full sweep |
/// | `find_arc`      | $O(\log \|A\|)$ per parallel arc                    |
///
/// Iteration is always in insertion order of the ID's, which never get
/// reused after an erase.
#[derive(Clone)]
pub struct TreeBackedDigraph {
    node_factory: NodeIdFactory,
    arc_factory: ArcIdFactory,
    nodes: BTreeSet<NodeId>,
    arcs: BTreeMap<ArcId, (NodeId, NodeId)>,
    out_arcs: BTreeSet<(NodeId, NodeId, ArcId)>,
    in_arcs: BTreeSet<(NodeId, NodeId, ArcId)>,
}

impl Default for TreeBackedDigraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TreeBackedDigraph {
    pub fn new() -> Self {
        Self {
            node_factory: NodeIdFactory::new(),
            arc_factory: ArcIdFactory::new(),
            nodes: BTreeSet::new(),
            arcs: BTreeMap::new(),
            out_arcs: BTreeSet::new(),
            in_arcs: BTreeSet::new(),
        }
    }

    fn endpoints(&self, a: ArcId) -> (NodeId, NodeId) {
        self.arcs[&a]
    }
}

impl std::fmt::Debug for TreeBackedDigraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "TreeBackedDigraph {{")?;
        for n in self.nodes.iter() {
            writeln!(f, "{:?}:", n)?;
            for a in self.out_arcs(*n) {
                writeln!(f, "  -> {:?} by {:?}", self.target(a), a)?;
            }
        }
        writeln!(f, "}}")?;
        Ok(())
    }
}

impl GraphBase for TreeBackedDigraph {
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

impl Digraph for TreeBackedDigraph {
    type Arc = ArcId;

    fn first_arc(&self) -> Option<ArcId> {
        self.arcs.keys().next().copied()
    }

    fn next_arc(&self, a: ArcId) -> Option<ArcId> {
        self.arcs.range(a.next()..).next().map(|(k, _)| *k)
    }

    fn first_out(&self, n: NodeId) -> Option<ArcId> {
        let start = (n, NodeId::MIN, ArcId::MIN);
        let end = (n.next(), NodeId::MIN, ArcId::MIN);
        self.out_arcs.range(start..end).next().map(|x| x.2)
    }

    fn next_out(&self, a: ArcId) -> Option<ArcId> {
        let (s, t) = self.endpoints(a);
        let end = (s.next(), NodeId::MIN, ArcId::MIN);
        self.out_arcs
            .range((Bound::Excluded((s, t, a)), Bound::Excluded(end)))
            .next()
            .map(|x| x.2)
    }

    fn first_in(&self, n: NodeId) -> Option<ArcId> {
        let start = (n, NodeId::MIN, ArcId::MIN);
        let end = (n.next(), NodeId::MIN, ArcId::MIN);
        self.in_arcs.range(start..end).next().map(|x| x.2)
    }

    fn next_in(&self, a: ArcId) -> Option<ArcId> {
        let (s, t) = self.endpoints(a);
        let end = (t.next(), NodeId::MIN, ArcId::MIN);
        self.in_arcs
            .range((Bound::Excluded((t, s, a)), Bound::Excluded(end)))
            .next()
            .map(|x| x.2)
    }

    fn source(&self, a: ArcId) -> NodeId {
        self.endpoints(a).0
    }

    fn target(&self, a: ArcId) -> NodeId {
        self.endpoints(a).1
    }

    fn arc_id(&self, a: ArcId) -> usize {
        a.to_raw()
    }

    fn arc_from_id(&self, id: usize) -> Option<ArcId> {
        let a = ArcId::new(id);
        if self.arcs.contains_key(&a) {
            Some(a)
        } else {
            None
        }
    }

    fn max_arc_id(&self) -> Option<usize> {
        self.arc_factory.max_issued()
    }
}

impl GrowableDigraph for TreeBackedDigraph {
    fn add_node(&mut self) -> NodeId {
        let n = self.node_factory.one_more();
        self.nodes.insert(n);
        n
    }

    fn add_arc(&mut self, source: NodeId, target: NodeId) -> ArcId {
        debug_assert!(self.nodes.contains(&source));
        debug_assert!(self.nodes.contains(&target));
        let a = self.arc_factory.one_more();
        self.arcs.insert(a, (source, target));
        self.out_arcs.insert((source, target, a));
        self.in_arcs.insert((target, source, a));
        a
    }
}

impl ErasableDigraph for TreeBackedDigraph {
    fn erase_node(&mut self, n: NodeId) {
        if !self.nodes.remove(&n) {
            return;
        }
        let start = (n, NodeId::MIN, ArcId::MIN);
        let end = (n.next(), NodeId::MIN, ArcId::MIN);
        let incident: Vec<ArcId> = self
            .out_arcs
            .range(start..end)
            .chain(self.in_arcs.range(start..end))
            .map(|x| x.2)
            .collect();
        for a in incident {
            self.erase_arc(a);
        }
    }

    fn erase_arc(&mut self, a: ArcId) {
        if let Some((s, t)) = self.arcs.remove(&a) {
            self.out_arcs.remove(&(s, t, a));
            self.in_arcs.remove(&(t, s, a));
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.arcs.clear();
        self.out_arcs.clear();
        self.in_arcs.clear();
    }
}

impl NodeCount for TreeBackedDigraph {
    fn node_num(&self) -> usize {
        self.nodes.len()
    }
}

impl ArcCount for TreeBackedDigraph {
    fn arc_num(&self) -> usize {
        self.arcs.len()
    }
}

impl ArcLookup for TreeBackedDigraph {
    fn find_arc(&self, s: NodeId, t: NodeId, prev: Option<ArcId>) -> Option<ArcId> {
        let end = Bound::Included((s, t, ArcId::MAX));
        let start = match prev {
            Some(p) => Bound::Excluded((s, t, p)),
            None => Bound::Included((s, t, ArcId::MIN)),
        };
        self.out_arcs.range((start, end)).next().map(|x| x.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::directed::ArbitraryDigraph;
    use quickcheck_macros::quickcheck;
    use std::collections::BTreeSet;

    #[test]
    fn iteration_in_insertion_order() {
        let mut g = TreeBackedDigraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();
        let ab = g.add_arc(a, b);
        let ac = g.add_arc(a, c);
        let cb = g.add_arc(c, b);

        let nodes: Vec<_> = g.nodes().collect();
        assert_eq!(nodes, vec![a, b, c]);
        let arcs: Vec<_> = g.arcs().collect();
        assert_eq!(arcs, vec![ab, ac, cb]);
        let outs: Vec<_> = g.out_arcs(a).collect();
        assert_eq!(outs, vec![ab, ac]);
        let ins: Vec<_> = g.in_arcs(b).collect();
        assert_eq!(ins, vec![ab, cb]);
        assert_eq!(g.out_arcs(b).count(), 0);
    }

    #[test]
    fn id_round_trip() {
        let mut g = TreeBackedDigraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let ab = g.add_arc(a, b);
        assert_eq!(g.node_from_id(g.node_id(a)), Some(a));
        assert_eq!(g.arc_from_id(g.arc_id(ab)), Some(ab));
        assert_eq!(g.max_node_id(), Some(1));
        assert_eq!(g.max_arc_id(), Some(0));
        assert_eq!(g.node_from_id(17), None);
    }

    #[test]
    fn find_arc_enumerates_parallel_arcs() {
        let mut g = TreeBackedDigraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let e0 = g.add_arc(a, b);
        let _ba = g.add_arc(b, a);
        let e1 = g.add_arc(a, b);

        assert_eq!(g.find_arc(a, b, None), Some(e0));
        assert_eq!(g.find_arc(a, b, Some(e0)), Some(e1));
        assert_eq!(g.find_arc(a, b, Some(e1)), None);
    }

    #[test]
    fn erase_node_takes_incident_arcs() {
        let mut g = TreeBackedDigraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();
        g.add_arc(a, b);
        g.add_arc(b, c);
        let ac = g.add_arc(a, c);

        g.erase_node(b);
        assert_eq!(g.node_num(), 2);
        assert_eq!(g.arc_num(), 1);
        let arcs: Vec<_> = g.arcs().collect();
        assert_eq!(arcs, vec![ac]);
    }

    #[quickcheck]
    fn find_arc_agrees_with_linear_scan(d: ArbitraryDigraph) {
        let (g, nodes, _) = d.build();
        for s in nodes.iter() {
            for t in nodes.iter() {
                let mut fast = g.find_arc(*s, *t, None);
                let mut slow = g.find_arc_scan(*s, *t, None);
                loop {
                    assert_eq!(fast, slow);
                    match fast {
                        None => break,
                        Some(_) => {
                            fast = g.find_arc(*s, *t, fast);
                            slow = g.find_arc_scan(*s, *t, slow);
                        }
                    }
                }
            }
        }
    }

    #[quickcheck]
    fn adjacency_is_consistent(d: ArbitraryDigraph) {
        let (g, _, arcs) = d.build();
        let by_arcs: BTreeSet<_> = g.arcs().collect();
        assert_eq!(by_arcs, arcs.iter().copied().collect());
        let by_out: BTreeSet<_> = g.nodes().flat_map(|n| g.out_arcs(n)).collect();
        let by_in: BTreeSet<_> = g.nodes().flat_map(|n| g.in_arcs(n)).collect();
        assert_eq!(by_out, by_arcs);
        assert_eq!(by_in, by_arcs);
        for a in g.arcs() {
            assert!(g.out_arcs(g.source(a)).any(|x| x == a));
            assert!(g.in_arcs(g.target(a)).any(|x| x == a));
        }
    }
}
