mod tree_backed;
pub use self::tree_backed::*;

#[cfg(test)]
pub use self::tests::*;

#[cfg(test)]
mod tests {
    use crate::graph::*;

    /// A randomly shaped digraph, for property tests over views.
    ///
    /// Arc endpoints are indices into the node list, so shrinking keeps
    /// the description well formed.
    #[derive(Clone)]
    pub struct ArbitraryDigraph {
        pub node_count: usize,
        pub arcs: Vec<(usize, usize)>,
    }

    impl std::fmt::Debug for ArbitraryDigraph {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{} nodes, arcs {:?}", self.node_count, self.arcs)
        }
    }

    impl quickcheck::Arbitrary for ArbitraryDigraph {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            let node_count = usize::arbitrary(g) % 10 + 1;
            let arc_count = usize::arbitrary(g) % 24;
            let arcs = (0..arc_count)
                .map(|_| {
                    (
                        usize::arbitrary(g) % node_count,
                        usize::arbitrary(g) % node_count,
                    )
                })
                .collect();
            Self { node_count, arcs }
        }

        fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
            let node_count = self.node_count;
            let it = self
                .arcs
                .shrink()
                .filter(move |arcs| arcs.iter().all(|(s, t)| *s < node_count && *t < node_count))
                .map(move |arcs| Self { node_count, arcs });
            Box::new(it)
        }
    }

    impl ArbitraryDigraph {
        /// Materializes the description into a concrete digraph.
        pub fn build(&self) -> (TreeBackedDigraph, Vec<NodeId>, Vec<ArcId>) {
            let mut g = TreeBackedDigraph::new();
            let nodes: Vec<_> = (0..self.node_count).map(|_| g.add_node()).collect();
            let arcs: Vec<_> = self
                .arcs
                .iter()
                .map(|(s, t)| g.add_arc(nodes[*s], nodes[*t]))
                .collect();
            (g, nodes, arcs)
        }
    }
}
