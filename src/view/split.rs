use crate::graph::*;
use crate::map::*;

/// A node of a [SplitNodes] view: the in-half or the out-half of a
/// wrapped node.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum SplitNode<N> {
    In(N),
    Out(N),
}

impl<N: Copy> SplitNode<N> {
    /// The wrapped node this half belongs to.
    pub fn original(self) -> N {
        match self {
            SplitNode::In(n) | SplitNode::Out(n) => n,
        }
    }

    pub fn is_in(self) -> bool {
        matches!(self, SplitNode::In(_))
    }

    pub fn is_out(self) -> bool {
        matches!(self, SplitNode::Out(_))
    }
}

/// An arc of a [SplitNodes] view: a wrapped arc rerouted between node
/// halves, or the bind arc a split node got between its halves.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum SplitArc<A, N> {
    Orig(A),
    Bind(N),
}

impl<A: Copy, N: Copy> SplitArc<A, N> {
    pub fn is_orig(self) -> bool {
        matches!(self, SplitArc::Orig(_))
    }

    pub fn is_bind(self) -> bool {
        matches!(self, SplitArc::Bind(_))
    }
}

// Node ID's pack the side into the low bit, In on 0; arc ID's put
// original arcs on even numbers and bind arcs, keyed by the wrapped
// node's ID, on odd ones.
fn encode_node_id(id: usize, out: bool) -> usize {
    (id << 1) | (out as usize)
}

fn decode_node_id(id: usize) -> (usize, bool) {
    (id >> 1, id & 1 == 1)
}

/// Splits every node into an in-half and an out-half joined by a bind
/// arc.
///
/// Wrapped arcs are rerouted to run from the out-half of their source to
/// the in-half of their target, so everything that used to pass through
/// a node now crosses its bind arc.
/// Putting node costs or node capacities on the bind arcs turns
/// node-weighted problems into arc-weighted ones without touching the
/// wrapped digraph.
pub struct SplitNodes<G> {
    inner: G,
}

impl<G: Digraph> SplitNodes<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    pub fn in_node(&self, n: G::Node) -> SplitNode<G::Node> {
        SplitNode::In(n)
    }

    pub fn out_node(&self, n: G::Node) -> SplitNode<G::Node> {
        SplitNode::Out(n)
    }

    /// The arc joining the two halves of `n`, from in-half to out-half.
    pub fn bind_arc(&self, n: G::Node) -> SplitArc<G::Arc, G::Node> {
        SplitArc::Bind(n)
    }

    pub fn orig_arc(&self, a: G::Arc) -> SplitArc<G::Arc, G::Node> {
        SplitArc::Orig(a)
    }
}

impl<G: Digraph> GraphBase for SplitNodes<G> {
    type Node = SplitNode<G::Node>;

    fn first_node(&self) -> Option<Self::Node> {
        self.inner.first_node().map(SplitNode::In)
    }

    fn next_node(&self, n: Self::Node) -> Option<Self::Node> {
        match n {
            SplitNode::In(n) => Some(SplitNode::Out(n)),
            SplitNode::Out(n) => self.inner.next_node(n).map(SplitNode::In),
        }
    }

    fn node_id(&self, n: Self::Node) -> usize {
        match n {
            SplitNode::In(n) => encode_node_id(self.inner.node_id(n), false),
            SplitNode::Out(n) => encode_node_id(self.inner.node_id(n), true),
        }
    }

    fn node_from_id(&self, id: usize) -> Option<Self::Node> {
        let (inner_id, out) = decode_node_id(id);
        self.inner.node_from_id(inner_id).map(|n| {
            if out {
                SplitNode::Out(n)
            } else {
                SplitNode::In(n)
            }
        })
    }

    fn max_node_id(&self) -> Option<usize> {
        self.inner.max_node_id().map(|m| encode_node_id(m, true))
    }
}

impl<G: Digraph> Digraph for SplitNodes<G> {
    type Arc = SplitArc<G::Arc, G::Node>;

    fn first_arc(&self) -> Option<Self::Arc> {
        self.inner
            .first_arc()
            .map(SplitArc::Orig)
            .or_else(|| self.inner.first_node().map(SplitArc::Bind))
    }

    fn next_arc(&self, a: Self::Arc) -> Option<Self::Arc> {
        match a {
            SplitArc::Orig(a) => self
                .inner
                .next_arc(a)
                .map(SplitArc::Orig)
                .or_else(|| self.inner.first_node().map(SplitArc::Bind)),
            SplitArc::Bind(n) => self.inner.next_node(n).map(SplitArc::Bind),
        }
    }

    fn first_out(&self, n: Self::Node) -> Option<Self::Arc> {
        match n {
            // The in-half only leads to its own out-half.
            SplitNode::In(n) => Some(SplitArc::Bind(n)),
            SplitNode::Out(n) => self.inner.first_out(n).map(SplitArc::Orig),
        }
    }

    fn next_out(&self, a: Self::Arc) -> Option<Self::Arc> {
        match a {
            SplitArc::Orig(a) => self.inner.next_out(a).map(SplitArc::Orig),
            SplitArc::Bind(_) => None,
        }
    }

    fn first_in(&self, n: Self::Node) -> Option<Self::Arc> {
        match n {
            SplitNode::In(n) => self.inner.first_in(n).map(SplitArc::Orig),
            SplitNode::Out(n) => Some(SplitArc::Bind(n)),
        }
    }

    fn next_in(&self, a: Self::Arc) -> Option<Self::Arc> {
        match a {
            SplitArc::Orig(a) => self.inner.next_in(a).map(SplitArc::Orig),
            SplitArc::Bind(_) => None,
        }
    }

    fn source(&self, a: Self::Arc) -> Self::Node {
        match a {
            SplitArc::Orig(a) => SplitNode::Out(self.inner.source(a)),
            SplitArc::Bind(n) => SplitNode::In(n),
        }
    }

    fn target(&self, a: Self::Arc) -> Self::Node {
        match a {
            SplitArc::Orig(a) => SplitNode::In(self.inner.target(a)),
            SplitArc::Bind(n) => SplitNode::Out(n),
        }
    }

    fn arc_id(&self, a: Self::Arc) -> usize {
        match a {
            SplitArc::Orig(a) => self.inner.arc_id(a) << 1,
            SplitArc::Bind(n) => (self.inner.node_id(n) << 1) | 1,
        }
    }

    fn arc_from_id(&self, id: usize) -> Option<Self::Arc> {
        if id & 1 == 0 {
            self.inner.arc_from_id(id >> 1).map(SplitArc::Orig)
        } else {
            self.inner.node_from_id(id >> 1).map(SplitArc::Bind)
        }
    }

    fn max_arc_id(&self) -> Option<usize> {
        let orig = self.inner.max_arc_id().map(|m| m << 1);
        let bind = self.inner.max_node_id().map(|m| (m << 1) | 1);
        match (orig, bind) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }
}

impl<G: NodeCount + Digraph> NodeCount for SplitNodes<G> {
    fn node_num(&self) -> usize {
        2 * self.inner.node_num()
    }
}

impl<G: NodeCount + ArcCount> ArcCount for SplitNodes<G> {
    fn arc_num(&self) -> usize {
        self.inner.arc_num() + self.inner.node_num()
    }
}

/// A node map over a [SplitNodes] view, combined from two maps keyed by
/// the wrapped nodes, one per half.
pub struct SplitNodeMap<IN, OUT> {
    in_half: IN,
    out_half: OUT,
}

impl<IN, OUT> SplitNodeMap<IN, OUT> {
    pub fn new(in_half: IN, out_half: OUT) -> Self {
        Self { in_half, out_half }
    }
}

impl<N, IN, OUT> ReadMap<SplitNode<N>> for SplitNodeMap<IN, OUT>
where
    N: Copy,
    IN: ReadMap<N>,
    OUT: ReadMap<N, Value = IN::Value>,
{
    type Value = IN::Value;

    fn get(&self, k: &SplitNode<N>) -> Self::Value {
        match *k {
            SplitNode::In(n) => self.in_half.get(&n),
            SplitNode::Out(n) => self.out_half.get(&n),
        }
    }
}

impl<N, IN, OUT> WriteMap<SplitNode<N>> for SplitNodeMap<IN, OUT>
where
    N: Copy,
    IN: WriteMap<N>,
    OUT: WriteMap<N, Value = IN::Value>,
{
    fn set(&mut self, k: &SplitNode<N>, v: Self::Value) {
        match *k {
            SplitNode::In(n) => self.in_half.set(&n, v),
            SplitNode::Out(n) => self.out_half.set(&n, v),
        }
    }
}

/// An arc map over a [SplitNodes] view: original arcs read an arc map of
/// the wrapped digraph, bind arcs a node map.
///
/// This is the map that carries node capacities or node costs once the
/// split has turned them into arc data.
pub struct SplitArcMap<AM, NM> {
    arcs: AM,
    bind: NM,
}

impl<AM, NM> SplitArcMap<AM, NM> {
    pub fn new(arcs: AM, bind: NM) -> Self {
        Self { arcs, bind }
    }
}

impl<A, N, AM, NM> ReadMap<SplitArc<A, N>> for SplitArcMap<AM, NM>
where
    A: Copy,
    N: Copy,
    AM: ReadMap<A>,
    NM: ReadMap<N, Value = AM::Value>,
{
    type Value = AM::Value;

    fn get(&self, k: &SplitArc<A, N>) -> Self::Value {
        match *k {
            SplitArc::Orig(a) => self.arcs.get(&a),
            SplitArc::Bind(n) => self.bind.get(&n),
        }
    }
}

impl<A, N, AM, NM> WriteMap<SplitArc<A, N>> for SplitArcMap<AM, NM>
where
    A: Copy,
    N: Copy,
    AM: WriteMap<A>,
    NM: WriteMap<N, Value = AM::Value>,
{
    fn set(&mut self, k: &SplitArc<A, N>, v: Self::Value) {
        match *k {
            SplitArc::Orig(a) => self.arcs.set(&a, v),
            SplitArc::Bind(n) => self.bind.set(&n, v),
        }
    }
}
