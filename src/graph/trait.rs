use crate::map::HashedMap;
use std::fmt::Debug;
use std::hash::Hash;

/// The node side of the graph contract, shared by directed and undirected
/// graphs.
///
/// Iteration follows a first/next protocol: `first_node` yields the first
/// node or `None` on an empty graph, `next_node` yields the successor of a
/// node or `None` when iteration is exhausted.
/// `None` is the single "invalid" value of the whole crate; feeding a dead
/// handle into any operation is a documented precondition violation, not a
/// checked error.
///
/// IDs are dense non-negative integers.
/// `node_from_id(node_id(n)) == Some(n)` holds for every live node `n`,
/// and `node_id(n) <= max_node_id()`.
pub trait GraphBase {
    type Node: Copy + Eq + Ord + Hash + Debug;

    fn first_node(&self) -> Option<Self::Node>;
    fn next_node(&self, n: Self::Node) -> Option<Self::Node>;

    fn node_id(&self, n: Self::Node) -> usize;
    /// Looks a node up by its ID. `None` if no live node carries it.
    fn node_from_id(&self, id: usize) -> Option<Self::Node>;
    /// The largest ID any live node may carry, `None` on an empty graph.
    fn max_node_id(&self) -> Option<usize>;

    fn nodes(&self) -> Nodes<'_, Self>
    where
        Self: Sized,
    {
        Nodes {
            graph: self,
            cur: self.first_node(),
        }
    }

    /// Counts nodes by full iteration.
    ///
    /// O(|V|). Graphs that can do better implement [NodeCount].
    fn count_nodes(&self) -> usize
    where
        Self: Sized,
    {
        self.nodes().count()
    }

    /// A fresh associative node map over this graph, `default` for absent
    /// keys.
    fn node_map<V: Clone>(&self, default: V) -> HashedMap<Self::Node, V>
    where
        Self: Sized,
    {
        HashedMap::new(default)
    }
}

/// The contract of directed graphs.
///
/// Every arc has a `source` and a `target`; `first_out`/`next_out` iterate
/// the arcs leaving a node, `first_in`/`next_in` the arcs entering it.
pub trait Digraph: GraphBase {
    type Arc: Copy + Eq + Ord + Hash + Debug;

    fn first_arc(&self) -> Option<Self::Arc>;
    fn next_arc(&self, a: Self::Arc) -> Option<Self::Arc>;

    fn first_out(&self, n: Self::Node) -> Option<Self::Arc>;
    fn next_out(&self, a: Self::Arc) -> Option<Self::Arc>;
    fn first_in(&self, n: Self::Node) -> Option<Self::Arc>;
    fn next_in(&self, a: Self::Arc) -> Option<Self::Arc>;

    fn source(&self, a: Self::Arc) -> Self::Node;
    fn target(&self, a: Self::Arc) -> Self::Node;

    fn arc_id(&self, a: Self::Arc) -> usize;
    fn arc_from_id(&self, id: usize) -> Option<Self::Arc>;
    fn max_arc_id(&self) -> Option<usize>;

    fn arcs(&self) -> Arcs<'_, Self>
    where
        Self: Sized,
    {
        Arcs {
            graph: self,
            cur: self.first_arc(),
        }
    }

    fn out_arcs(&self, n: Self::Node) -> OutArcs<'_, Self>
    where
        Self: Sized,
    {
        OutArcs {
            graph: self,
            cur: self.first_out(n),
        }
    }

    fn in_arcs(&self, n: Self::Node) -> InArcs<'_, Self>
    where
        Self: Sized,
    {
        InArcs {
            graph: self,
            cur: self.first_in(n),
        }
    }

    /// Counts arcs by full iteration.
    ///
    /// O(|A|). Graphs that can do better implement [ArcCount].
    fn count_arcs(&self) -> usize
    where
        Self: Sized,
    {
        self.arcs().count()
    }

    /// Finds an arc from `s` to `t` by scanning the out-arcs of `s`,
    /// starting after `prev` when given (so repeated calls enumerate
    /// parallel arcs).
    ///
    /// O(out-degree of `s`). Graphs that can do better implement
    /// [ArcLookup].
    fn find_arc_scan(
        &self,
        s: Self::Node,
        t: Self::Node,
        prev: Option<Self::Arc>,
    ) -> Option<Self::Arc>
    where
        Self: Sized,
    {
        let mut cur = match prev {
            Some(p) => self.next_out(p),
            None => self.first_out(s),
        };
        while let Some(a) = cur {
            if self.target(a) == t {
                return Some(a);
            }
            cur = self.next_out(a);
        }
        None
    }

    /// A fresh associative arc map over this graph.
    fn arc_map<V: Clone>(&self, default: V) -> HashedMap<Self::Arc, V>
    where
        Self: Sized,
    {
        HashedMap::new(default)
    }

    fn debug(&self) -> DigraphDebug<'_, Self>
    where
        Self: Sized,
    {
        DigraphDebug::new(self)
    }
}

/// The contract of undirected graphs.
///
/// An edge has unordered endpoints `u` and `v`.
/// Incidence iteration carries a direction bit: `true` when the pivot node
/// plays the `u` role of the yielded edge.
/// The bit lets views that orient edges tell the two roles apart without a
/// second endpoint query; plain callers may ignore it via [Graph::inc_edges].
pub trait Graph: GraphBase {
    type Edge: Copy + Eq + Ord + Hash + Debug;

    fn first_edge(&self) -> Option<Self::Edge>;
    fn next_edge(&self, e: Self::Edge) -> Option<Self::Edge>;

    fn first_inc(&self, n: Self::Node) -> Option<(Self::Edge, bool)>;
    fn next_inc(&self, n: Self::Node, e: Self::Edge, d: bool) -> Option<(Self::Edge, bool)>;

    fn u(&self, e: Self::Edge) -> Self::Node;
    fn v(&self, e: Self::Edge) -> Self::Node;

    fn edge_id(&self, e: Self::Edge) -> usize;
    fn edge_from_id(&self, id: usize) -> Option<Self::Edge>;
    fn max_edge_id(&self) -> Option<usize>;

    fn edges(&self) -> Edges<'_, Self>
    where
        Self: Sized,
    {
        Edges {
            graph: self,
            cur: self.first_edge(),
        }
    }

    fn inc_edges(&self, n: Self::Node) -> IncEdges<'_, Self>
    where
        Self: Sized,
    {
        IncEdges {
            graph: self,
            node: n,
            cur: self.first_inc(n),
        }
    }

    /// Counts edges by full iteration.
    ///
    /// O(|E|). Graphs that can do better implement [EdgeCount].
    fn count_edges(&self) -> usize
    where
        Self: Sized,
    {
        self.edges().count()
    }

    /// A fresh associative edge map over this graph.
    fn edge_map<V: Clone>(&self, default: V) -> HashedMap<Self::Edge, V>
    where
        Self: Sized,
    {
        HashedMap::new(default)
    }
}

/// Growing a directed graph.
pub trait GrowableDigraph: Digraph {
    fn add_node(&mut self) -> Self::Node;
    fn add_arc(&mut self, source: Self::Node, target: Self::Node) -> Self::Arc;
}

/// Really removing items from a directed graph.
///
/// Views forward these to the wrapped graph; hiding an item without
/// touching the wrapped graph is the business of the filtering views
/// instead.
pub trait ErasableDigraph: Digraph {
    /// Erases a node and every arc incident to it.
    fn erase_node(&mut self, n: Self::Node);
    fn erase_arc(&mut self, a: Self::Arc);
    fn clear(&mut self);
}

/// Growing an undirected graph.
pub trait GrowableGraph: Graph {
    fn add_node(&mut self) -> Self::Node;
    fn add_edge(&mut self, u: Self::Node, v: Self::Node) -> Self::Edge;
}

/// Really removing items from an undirected graph.
pub trait ErasableGraph: Graph {
    /// Erases a node and every edge incident to it.
    fn erase_node(&mut self, n: Self::Node);
    fn erase_edge(&mut self, e: Self::Edge);
    fn clear(&mut self);
}

/// Capability: node count in O(1).
pub trait NodeCount: GraphBase {
    fn node_num(&self) -> usize;
}

/// Capability: arc count in O(1).
pub trait ArcCount: Digraph {
    fn arc_num(&self) -> usize;
}

/// Capability: edge count in O(1).
pub trait EdgeCount: Graph {
    fn edge_num(&self) -> usize;
}

/// Capability: arc lookup between two nodes in better than O(out-degree).
pub trait ArcLookup: Digraph {
    /// The first arc from `s` to `t` after `prev`, or the very first one
    /// when `prev` is `None`.
    fn find_arc(
        &self,
        s: Self::Node,
        t: Self::Node,
        prev: Option<Self::Arc>,
    ) -> Option<Self::Arc>;
}

/// Capability: edge lookup between two nodes in better than O(degree).
pub trait EdgeLookup: Graph {
    fn find_edge(
        &self,
        u: Self::Node,
        v: Self::Node,
        prev: Option<Self::Edge>,
    ) -> Option<Self::Edge>;
}

/// Iterator over all nodes of a graph.
pub struct Nodes<'a, G: GraphBase> {
    graph: &'a G,
    cur: Option<G::Node>,
}

impl<'a, G: GraphBase> Iterator for Nodes<'a, G> {
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.cur?;
        self.cur = self.graph.next_node(n);
        Some(n)
    }
}

/// Iterator over all arcs of a directed graph.
pub struct Arcs<'a, G: Digraph> {
    graph: &'a G,
    cur: Option<G::Arc>,
}

impl<'a, G: Digraph> Iterator for Arcs<'a, G> {
    type Item = G::Arc;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.cur?;
        self.cur = self.graph.next_arc(a);
        Some(a)
    }
}

/// Iterator over the arcs leaving a node.
pub struct OutArcs<'a, G: Digraph> {
    graph: &'a G,
    cur: Option<G::Arc>,
}

impl<'a, G: Digraph> Iterator for OutArcs<'a, G> {
    type Item = G::Arc;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.cur?;
        self.cur = self.graph.next_out(a);
        Some(a)
    }
}

/// Iterator over the arcs entering a node.
pub struct InArcs<'a, G: Digraph> {
    graph: &'a G,
    cur: Option<G::Arc>,
}

impl<'a, G: Digraph> Iterator for InArcs<'a, G> {
    type Item = G::Arc;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.cur?;
        self.cur = self.graph.next_in(a);
        Some(a)
    }
}

/// Iterator over all edges of an undirected graph.
pub struct Edges<'a, G: Graph> {
    graph: &'a G,
    cur: Option<G::Edge>,
}

impl<'a, G: Graph> Iterator for Edges<'a, G> {
    type Item = G::Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let e = self.cur?;
        self.cur = self.graph.next_edge(e);
        Some(e)
    }
}

/// Iterator over the edges incident to a node.
pub struct IncEdges<'a, G: Graph> {
    graph: &'a G,
    node: G::Node,
    cur: Option<(G::Edge, bool)>,
}

impl<'a, G: Graph> Iterator for IncEdges<'a, G> {
    type Item = G::Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let (e, d) = self.cur?;
        self.cur = self.graph.next_inc(self.node, e, d);
        Some(e)
    }
}

/// A default implementation of inspecting into a directed graph with
/// customized indentation.
pub struct DigraphDebug<'a, G>
where
    G: Digraph,
{
    graph: &'a G,
    init_indent: usize,
    indent_step: usize,
}

impl<'a, G> DigraphDebug<'a, G>
where
    G: Digraph,
{
    fn new(graph: &'a G) -> Self {
        Self {
            graph,
            init_indent: 0,
            indent_step: 2,
        }
    }

    pub fn indent(mut self, init: usize, step: usize) -> Self {
        self.init_indent = init;
        self.indent_step = step;
        self
    }

    fn display_indent(&self, f: &mut std::fmt::Formatter<'_>, level: usize) -> std::fmt::Result {
        let indention = self.init_indent + self.indent_step * level;
        for _ in 0..indention {
            write!(f, " ")?;
        }
        Ok(())
    }
}

impl<'a, G> std::fmt::Debug for DigraphDebug<'a, G>
where
    G: Digraph,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for n in self.graph.nodes() {
            self.display_indent(f, 0)?;
            writeln!(f, "{:?}", n)?;
            for a in self.graph.out_arcs(n) {
                self.display_indent(f, 1)?;
                writeln!(f, "--{:?}-> {:?}", a, self.graph.target(a))?;
            }
        }
        Ok(())
    }
}
