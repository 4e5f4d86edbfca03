use crate::graph::*;
use crate::map::*;
use num_traits::Zero;
use std::ops::{Add, Sub};

/// Decides whether a residual amount still counts as usable capacity.
///
/// Exact value types keep the default zero epsilon; floating-point flows
/// pick a small positive one to absorb rounding noise.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance<V> {
    epsilon: V,
}

impl<V> Tolerance<V> {
    pub fn new(epsilon: V) -> Self {
        Self { epsilon }
    }
}

impl<V: Zero> Default for Tolerance<V> {
    fn default() -> Self {
        Self { epsilon: V::zero() }
    }
}

impl<V: Copy + PartialOrd> Tolerance<V> {
    pub fn positive(&self, v: V) -> bool {
        v > self.epsilon
    }
}

// The packing scheme of residual-arc ID's, kept in one place.
fn encode_arc_id(arc_id: usize, forward: bool) -> usize {
    (arc_id << 1) | (forward as usize)
}

fn decode_arc_id(id: usize) -> (usize, bool) {
    (id >> 1, id & 1 == 1)
}

/// An arc of a [ResidualDigraph]: a wrapped arc read along the flow
/// direction or against it.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub enum ResidualArc<A> {
    Forward(A),
    Backward(A),
}

impl<A: Copy> ResidualArc<A> {
    /// The wrapped arc this residual arc reads.
    pub fn arc(self) -> A {
        match self {
            ResidualArc::Forward(a) | ResidualArc::Backward(a) => a,
        }
    }

    pub fn is_forward(self) -> bool {
        matches!(self, ResidualArc::Forward(_))
    }

    pub fn is_backward(self) -> bool {
        matches!(self, ResidualArc::Backward(_))
    }
}

/// The residual digraph of a flow: for every wrapped arc there is a
/// forward residual arc while `capacity - flow` is positive and a
/// backward one while `flow` is positive.
///
/// The capacity and flow maps stay owned by the caller and are read (the
/// flow map also written, through [augment](Self::augment)) live, so the
/// view tracks every flow change without any rebuilding.
/// Like the filtering views it cannot count its arcs in constant time;
/// iteration skips the arcs whose residual amount is not positive.
pub struct ResidualDigraph<G, C, F>
where
    G: Digraph,
    C: ReadMap<G::Arc>,
{
    inner: G,
    capacity: C,
    flow: F,
    tolerance: Tolerance<C::Value>,
}

impl<G, C, F> ResidualDigraph<G, C, F>
where
    G: Digraph,
    C: ReadMap<G::Arc>,
    C::Value: Copy + PartialOrd + Add<Output = C::Value> + Sub<Output = C::Value>,
    F: ReadMap<G::Arc, Value = C::Value>,
{
    pub fn new(inner: G, capacity: C, flow: F) -> Self
    where
        C::Value: Zero,
    {
        Self::with_tolerance(inner, capacity, flow, Tolerance::default())
    }

    pub fn with_tolerance(inner: G, capacity: C, flow: F, tolerance: Tolerance<C::Value>) -> Self {
        Self {
            inner,
            capacity,
            flow,
            tolerance,
        }
    }

    /// How much more flow the residual arc can carry.
    pub fn residual_capacity(&self, a: ResidualArc<G::Arc>) -> C::Value {
        match a {
            ResidualArc::Forward(e) => self.capacity.get(&e) - self.flow.get(&e),
            ResidualArc::Backward(e) => self.flow.get(&e),
        }
    }

    /// A read-only map of the residual capacities, keyed by the arcs of
    /// this view.
    pub fn residual_capacity_map(&self) -> ResidualCapacityMap<'_, G, C, F> {
        ResidualCapacityMap { view: self }
    }

    fn forward_visible(&self, e: G::Arc) -> bool {
        self.tolerance
            .positive(self.capacity.get(&e) - self.flow.get(&e))
    }

    fn backward_visible(&self, e: G::Arc) -> bool {
        self.tolerance.positive(self.flow.get(&e))
    }

    // Global iteration order: wrapped arcs in their own order, each one
    // read forward first, then backward, invisible readings skipped.
    fn global_from(
        &self,
        mut cur: Option<G::Arc>,
        mut try_forward: bool,
    ) -> Option<ResidualArc<G::Arc>> {
        while let Some(e) = cur {
            if try_forward && self.forward_visible(e) {
                return Some(ResidualArc::Forward(e));
            }
            if self.backward_visible(e) {
                return Some(ResidualArc::Backward(e));
            }
            cur = self.inner.next_arc(e);
            try_forward = true;
        }
        None
    }

    fn out_forward_from(&self, mut cur: Option<G::Arc>, n: G::Node) -> Option<ResidualArc<G::Arc>> {
        while let Some(e) = cur {
            if self.forward_visible(e) {
                return Some(ResidualArc::Forward(e));
            }
            cur = self.inner.next_out(e);
        }
        self.out_backward_from(self.inner.first_in(n))
    }

    fn out_backward_from(&self, mut cur: Option<G::Arc>) -> Option<ResidualArc<G::Arc>> {
        while let Some(e) = cur {
            if self.backward_visible(e) {
                return Some(ResidualArc::Backward(e));
            }
            cur = self.inner.next_in(e);
        }
        None
    }

    fn in_forward_from(&self, mut cur: Option<G::Arc>, n: G::Node) -> Option<ResidualArc<G::Arc>> {
        while let Some(e) = cur {
            if self.forward_visible(e) {
                return Some(ResidualArc::Forward(e));
            }
            cur = self.inner.next_in(e);
        }
        self.in_backward_from(self.inner.first_out(n))
    }

    fn in_backward_from(&self, mut cur: Option<G::Arc>) -> Option<ResidualArc<G::Arc>> {
        while let Some(e) = cur {
            if self.backward_visible(e) {
                return Some(ResidualArc::Backward(e));
            }
            cur = self.inner.next_out(e);
        }
        None
    }
}

impl<G, C, F> ResidualDigraph<G, C, F>
where
    G: Digraph,
    C: ReadMap<G::Arc>,
    C::Value: Copy + PartialOrd + Add<Output = C::Value> + Sub<Output = C::Value>,
    F: WriteMap<G::Arc, Value = C::Value>,
{
    /// Pushes `amount` of flow along the residual arc: forward arcs raise
    /// the flow of the wrapped arc, backward arcs cancel it.
    pub fn augment(&mut self, a: ResidualArc<G::Arc>, amount: C::Value) {
        match a {
            ResidualArc::Forward(e) => {
                let f = self.flow.get(&e);
                self.flow.set(&e, f + amount);
            }
            ResidualArc::Backward(e) => {
                let f = self.flow.get(&e);
                self.flow.set(&e, f - amount);
            }
        }
    }
}

impl<G, C, F> GraphBase for ResidualDigraph<G, C, F>
where
    G: Digraph,
    C: ReadMap<G::Arc>,
    C::Value: Copy + PartialOrd + Add<Output = C::Value> + Sub<Output = C::Value>,
    F: ReadMap<G::Arc, Value = C::Value>,
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

impl<G, C, F> Digraph for ResidualDigraph<G, C, F>
where
    G: Digraph,
    C: ReadMap<G::Arc>,
    C::Value: Copy + PartialOrd + Add<Output = C::Value> + Sub<Output = C::Value>,
    F: ReadMap<G::Arc, Value = C::Value>,
{
    type Arc = ResidualArc<G::Arc>;

    fn first_arc(&self) -> Option<Self::Arc> {
        self.global_from(self.inner.first_arc(), true)
    }

    fn next_arc(&self, a: Self::Arc) -> Option<Self::Arc> {
        match a {
            ResidualArc::Forward(e) => self.global_from(Some(e), false),
            ResidualArc::Backward(e) => self.global_from(self.inner.next_arc(e), true),
        }
    }

    fn first_out(&self, n: G::Node) -> Option<Self::Arc> {
        self.out_forward_from(self.inner.first_out(n), n)
    }

    fn next_out(&self, a: Self::Arc) -> Option<Self::Arc> {
        match a {
            ResidualArc::Forward(e) => {
                let n = self.inner.source(e);
                self.out_forward_from(self.inner.next_out(e), n)
            }
            ResidualArc::Backward(e) => self.out_backward_from(self.inner.next_in(e)),
        }
    }

    fn first_in(&self, n: G::Node) -> Option<Self::Arc> {
        self.in_forward_from(self.inner.first_in(n), n)
    }

    fn next_in(&self, a: Self::Arc) -> Option<Self::Arc> {
        match a {
            ResidualArc::Forward(e) => {
                let n = self.inner.target(e);
                self.in_forward_from(self.inner.next_in(e), n)
            }
            ResidualArc::Backward(e) => self.in_backward_from(self.inner.next_out(e)),
        }
    }

    fn source(&self, a: Self::Arc) -> G::Node {
        match a {
            ResidualArc::Forward(e) => self.inner.source(e),
            ResidualArc::Backward(e) => self.inner.target(e),
        }
    }

    fn target(&self, a: Self::Arc) -> G::Node {
        match a {
            ResidualArc::Forward(e) => self.inner.target(e),
            ResidualArc::Backward(e) => self.inner.source(e),
        }
    }

    fn arc_id(&self, a: Self::Arc) -> usize {
        match a {
            ResidualArc::Forward(e) => encode_arc_id(self.inner.arc_id(e), true),
            ResidualArc::Backward(e) => encode_arc_id(self.inner.arc_id(e), false),
        }
    }

    fn arc_from_id(&self, id: usize) -> Option<Self::Arc> {
        let (inner_id, forward) = decode_arc_id(id);
        let e = self.inner.arc_from_id(inner_id)?;
        if forward && self.forward_visible(e) {
            Some(ResidualArc::Forward(e))
        } else if !forward && self.backward_visible(e) {
            Some(ResidualArc::Backward(e))
        } else {
            None
        }
    }

    fn max_arc_id(&self) -> Option<usize> {
        self.inner.max_arc_id().map(|m| encode_arc_id(m, true))
    }
}

impl<G, C, F> ArcLookup for ResidualDigraph<G, C, F>
where
    G: ArcLookup,
    C: ReadMap<G::Arc>,
    C::Value: Copy + PartialOrd + Add<Output = C::Value> + Sub<Output = C::Value>,
    F: ReadMap<G::Arc, Value = C::Value>,
{
    /// Forward readings of the wrapped `s -> t` arcs come first, then
    /// backward readings of the `t -> s` ones; readings without residual
    /// capacity are skipped.
    fn find_arc(&self, s: G::Node, t: G::Node, prev: Option<Self::Arc>) -> Option<Self::Arc> {
        let mut fwd = match prev {
            None => self.inner.find_arc(s, t, None),
            Some(ResidualArc::Forward(p)) => self.inner.find_arc(s, t, Some(p)),
            Some(ResidualArc::Backward(_)) => None,
        };
        while let Some(e) = fwd {
            if self.forward_visible(e) {
                return Some(ResidualArc::Forward(e));
            }
            fwd = self.inner.find_arc(s, t, Some(e));
        }
        let mut bwd = match prev {
            Some(ResidualArc::Backward(p)) => self.inner.find_arc(t, s, Some(p)),
            _ => self.inner.find_arc(t, s, None),
        };
        while let Some(e) = bwd {
            if self.backward_visible(e) {
                return Some(ResidualArc::Backward(e));
            }
            bwd = self.inner.find_arc(t, s, Some(e));
        }
        None
    }
}

pub struct ResidualCapacityMap<'a, G, C, F>
where
    G: Digraph,
    C: ReadMap<G::Arc>,
{
    view: &'a ResidualDigraph<G, C, F>,
}

impl<'a, G, C, F> ReadMap<ResidualArc<G::Arc>> for ResidualCapacityMap<'a, G, C, F>
where
    G: Digraph,
    C: ReadMap<G::Arc>,
    C::Value: Copy + PartialOrd + Add<Output = C::Value> + Sub<Output = C::Value>,
    F: ReadMap<G::Arc, Value = C::Value>,
{
    type Value = C::Value;

    fn get(&self, k: &ResidualArc<G::Arc>) -> C::Value {
        self.view.residual_capacity(*k)
    }
}
