use crate::graph::*;
use crate::map::*;

/// An arc of an [Undirector]: the wrapped digraph's arc plus a direction
/// bit.
///
/// `forward` means the arc points the same way as the wrapped arc.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct DirArc<E> {
    edge: E,
    forward: bool,
}

impl<E: Copy> DirArc<E> {
    pub fn new(edge: E, forward: bool) -> Self {
        Self { edge, forward }
    }

    /// The wrapped arc, which doubles as the edge handle of the view.
    pub fn edge(self) -> E {
        self.edge
    }

    pub fn forward(self) -> bool {
        self.forward
    }
}

// The packing scheme of view-arc ID's, kept in one place.
fn encode_arc_id(edge_id: usize, forward: bool) -> usize {
    (edge_id << 1) | (forward as usize)
}

fn decode_arc_id(id: usize) -> (usize, bool) {
    (id >> 1, id & 1 == 1)
}

/// Presents a digraph as an undirected graph.
///
/// An edge of the view *is* an arc of the wrapped digraph.
/// The view is also a digraph again, in which every edge appears as two
/// [DirArc]s, one per direction; flow algorithms use that double reading
/// through the residual view.
///
/// A self-loop arc yields one edge that is incident to its node twice
/// and two `DirArc`s, like any other edge.
pub struct Undirector<G> {
    inner: G,
}

impl<G: Digraph> Undirector<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    fn fwd(e: G::Arc) -> DirArc<G::Arc> {
        DirArc::new(e, true)
    }

    fn bwd(e: G::Arc) -> DirArc<G::Arc> {
        DirArc::new(e, false)
    }

    /// The arc reading edge `e` in the given direction.
    pub fn direct(&self, e: G::Arc, forward: bool) -> DirArc<G::Arc> {
        DirArc::new(e, forward)
    }

    fn is_loop(&self, e: G::Arc) -> bool {
        self.inner.source(e) == self.inner.target(e)
    }

    // In-phase of incidence iteration; loops already appeared in the
    // out-phase (twice, via the synthesized second visit).
    fn first_inc_in_phase(&self, n: G::Node) -> Option<(G::Arc, bool)> {
        let mut cur = self.inner.first_in(n);
        while let Some(e) = cur {
            if !self.is_loop(e) {
                return Some((e, false));
            }
            cur = self.inner.next_in(e);
        }
        None
    }
}

impl<G: Digraph> GraphBase for Undirector<G> {
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

impl<G: Digraph> Graph for Undirector<G> {
    type Edge = G::Arc;

    fn first_edge(&self) -> Option<G::Arc> {
        self.inner.first_arc()
    }

    fn next_edge(&self, e: G::Arc) -> Option<G::Arc> {
        self.inner.next_arc(e)
    }

    fn first_inc(&self, n: G::Node) -> Option<(G::Arc, bool)> {
        match self.inner.first_out(n) {
            Some(e) => Some((e, true)),
            None => self.first_inc_in_phase(n),
        }
    }

    fn next_inc(&self, n: G::Node, e: G::Arc, d: bool) -> Option<(G::Arc, bool)> {
        if d {
            if self.is_loop(e) {
                return Some((e, false));
            }
            match self.inner.next_out(e) {
                Some(e2) => Some((e2, true)),
                None => self.first_inc_in_phase(n),
            }
        } else if self.is_loop(e) {
            // Past the second visit of a loop: back to the out-phase.
            match self.inner.next_out(e) {
                Some(e2) => Some((e2, true)),
                None => self.first_inc_in_phase(n),
            }
        } else {
            let mut cur = self.inner.next_in(e);
            while let Some(e2) = cur {
                if !self.is_loop(e2) {
                    return Some((e2, false));
                }
                cur = self.inner.next_in(e2);
            }
            None
        }
    }

    fn u(&self, e: G::Arc) -> G::Node {
        self.inner.source(e)
    }

    fn v(&self, e: G::Arc) -> G::Node {
        self.inner.target(e)
    }

    fn edge_id(&self, e: G::Arc) -> usize {
        self.inner.arc_id(e)
    }

    fn edge_from_id(&self, id: usize) -> Option<G::Arc> {
        self.inner.arc_from_id(id)
    }

    fn max_edge_id(&self) -> Option<usize> {
        self.inner.max_arc_id()
    }
}

impl<G: Digraph> Digraph for Undirector<G> {
    type Arc = DirArc<G::Arc>;

    fn first_arc(&self) -> Option<Self::Arc> {
        self.inner.first_arc().map(Self::fwd)
    }

    fn next_arc(&self, a: Self::Arc) -> Option<Self::Arc> {
        if a.forward {
            Some(Self::bwd(a.edge))
        } else {
            self.inner.next_arc(a.edge).map(Self::fwd)
        }
    }

    fn first_out(&self, n: G::Node) -> Option<Self::Arc> {
        self.inner
            .first_out(n)
            .map(Self::fwd)
            .or_else(|| self.inner.first_in(n).map(Self::bwd))
    }

    fn next_out(&self, a: Self::Arc) -> Option<Self::Arc> {
        if a.forward {
            match self.inner.next_out(a.edge) {
                Some(e) => Some(Self::fwd(e)),
                None => {
                    let n = self.inner.source(a.edge);
                    self.inner.first_in(n).map(Self::bwd)
                }
            }
        } else {
            self.inner.next_in(a.edge).map(Self::bwd)
        }
    }

    fn first_in(&self, n: G::Node) -> Option<Self::Arc> {
        self.inner
            .first_in(n)
            .map(Self::fwd)
            .or_else(|| self.inner.first_out(n).map(Self::bwd))
    }

    fn next_in(&self, a: Self::Arc) -> Option<Self::Arc> {
        if a.forward {
            match self.inner.next_in(a.edge) {
                Some(e) => Some(Self::fwd(e)),
                None => {
                    let n = self.inner.target(a.edge);
                    self.inner.first_out(n).map(Self::bwd)
                }
            }
        } else {
            self.inner.next_out(a.edge).map(Self::bwd)
        }
    }

    fn source(&self, a: Self::Arc) -> G::Node {
        if a.forward {
            self.inner.source(a.edge)
        } else {
            self.inner.target(a.edge)
        }
    }

    fn target(&self, a: Self::Arc) -> G::Node {
        if a.forward {
            self.inner.target(a.edge)
        } else {
            self.inner.source(a.edge)
        }
    }

    fn arc_id(&self, a: Self::Arc) -> usize {
        encode_arc_id(self.inner.arc_id(a.edge), a.forward)
    }

    fn arc_from_id(&self, id: usize) -> Option<Self::Arc> {
        let (edge_id, forward) = decode_arc_id(id);
        self.inner
            .arc_from_id(edge_id)
            .map(|e| DirArc::new(e, forward))
    }

    fn max_arc_id(&self) -> Option<usize> {
        self.inner.max_arc_id().map(|m| encode_arc_id(m, true))
    }
}

impl<G: GrowableDigraph> GrowableGraph for Undirector<G> {
    fn add_node(&mut self) -> G::Node {
        self.inner.add_node()
    }

    fn add_edge(&mut self, u: G::Node, v: G::Node) -> G::Arc {
        self.inner.add_arc(u, v)
    }
}

impl<G: ErasableDigraph> ErasableGraph for Undirector<G> {
    fn erase_node(&mut self, n: G::Node) {
        self.inner.erase_node(n)
    }

    fn erase_edge(&mut self, e: G::Arc) {
        self.inner.erase_arc(e)
    }

    fn clear(&mut self) {
        self.inner.clear()
    }
}

impl<G: NodeCount + Digraph> NodeCount for Undirector<G> {
    fn node_num(&self) -> usize {
        self.inner.node_num()
    }
}

impl<G: ArcCount> ArcCount for Undirector<G> {
    fn arc_num(&self) -> usize {
        2 * self.inner.arc_num()
    }
}

impl<G: ArcCount> EdgeCount for Undirector<G> {
    fn edge_num(&self) -> usize {
        self.inner.arc_num()
    }
}

impl<G: ArcLookup> ArcLookup for Undirector<G> {
    /// When both orientations exist, the forward one is found first.
    fn find_arc(&self, s: G::Node, t: G::Node, prev: Option<Self::Arc>) -> Option<Self::Arc> {
        match prev {
            None => self
                .inner
                .find_arc(s, t, None)
                .map(Self::fwd)
                .or_else(|| self.inner.find_arc(t, s, None).map(Self::bwd)),
            Some(p) if p.forward => self
                .inner
                .find_arc(s, t, Some(p.edge))
                .map(Self::fwd)
                .or_else(|| self.inner.find_arc(t, s, None).map(Self::bwd)),
            Some(p) => self.inner.find_arc(t, s, Some(p.edge)).map(Self::bwd),
        }
    }
}

impl<G: ArcLookup> EdgeLookup for Undirector<G> {
    fn find_edge(&self, u: G::Node, v: G::Node, prev: Option<G::Arc>) -> Option<G::Arc> {
        if u == v {
            return self.inner.find_arc(u, u, prev);
        }
        match prev {
            None => self
                .inner
                .find_arc(u, v, None)
                .or_else(|| self.inner.find_arc(v, u, None)),
            Some(p) if self.inner.source(p) == u => self
                .inner
                .find_arc(u, v, Some(p))
                .or_else(|| self.inner.find_arc(v, u, None)),
            Some(p) => self.inner.find_arc(v, u, Some(p)),
        }
    }
}

/// An arc map over an [Undirector], combined from two maps keyed by the
/// wrapped arcs: one for the forward reading, one for the backward one.
pub struct CombinedArcMap<FW, BK> {
    forward: FW,
    backward: BK,
}

impl<FW, BK> CombinedArcMap<FW, BK> {
    pub fn new(forward: FW, backward: BK) -> Self {
        Self { forward, backward }
    }
}

impl<E, FW, BK> ReadMap<DirArc<E>> for CombinedArcMap<FW, BK>
where
    E: Copy,
    FW: ReadMap<E>,
    BK: ReadMap<E, Value = FW::Value>,
{
    type Value = FW::Value;

    fn get(&self, k: &DirArc<E>) -> Self::Value {
        if k.forward() {
            self.forward.get(&k.edge())
        } else {
            self.backward.get(&k.edge())
        }
    }
}

impl<E, FW, BK> WriteMap<DirArc<E>> for CombinedArcMap<FW, BK>
where
    E: Copy,
    FW: WriteMap<E>,
    BK: WriteMap<E, Value = FW::Value>,
{
    fn set(&mut self, k: &DirArc<E>, v: Self::Value) {
        if k.forward() {
            self.forward.set(&k.edge(), v)
        } else {
            self.backward.set(&k.edge(), v)
        }
    }
}
