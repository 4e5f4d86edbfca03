//! Views: graphs that transform another graph they borrow.
//!
//! Every view is a plain struct `V<G>` holding its wrapped graph `G` *by
//! value*, and `G` is in practice a borrow: the delegation layer in `base`
//! implements the whole contract for `&G` and `&mut G`, so
//! `ReverseDigraph::new(&g)` wraps a shared borrow and
//! `SubDigraph::new(&mut g, ...)` a mutable one.
//! Because views satisfy the same contract they consume, they stack by
//! ordinary nesting: `SplitNodes::new(ReverseDigraph::new(&g))` is a graph
//! like any other.
//!
//! External maps (filters, direction bits, capacities, flow) follow the
//! same discipline: the caller owns them, the view borrows them, and their
//! borrows end when the view is dropped.
//!
//! Structural mutation through a view is real mutation of the wrapped
//! graph.
//! The one exception is the `disable`/`enable` family of the filtering
//! views, which only flips bits in the caller-owned filter map.

mod base;
mod reverse;
pub use self::reverse::*;
mod sub_digraph;
pub use self::sub_digraph::*;
mod sub_graph;
pub use self::sub_graph::*;
mod undirector;
pub use self::undirector::*;
mod orienter;
pub use self::orienter::*;
mod residual;
pub use self::residual::*;
mod split;
pub use self::split::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::*;
    use crate::map::*;

    // Views keep satisfying the contract when stacked, so an algorithm
    // written against `Digraph` cannot tell a tower of views from a
    // concrete graph.
    #[test]
    fn views_stack() {
        let mut g = TreeBackedDigraph::new();
        let a = g.add_node();
        let b = g.add_node();
        let c = g.add_node();
        g.add_arc(a, b);
        let bc = g.add_arc(b, c);

        let mut arc_filter = g.arc_map(true);
        arc_filter.set(&bc, false);
        let sub = filter_arcs(&g, &arc_filter);
        let split = SplitNodes::new(ReverseDigraph::new(&sub));

        // One original arc (b->a reversed) plus one bind arc per node.
        assert_eq!(split.count_arcs(), 1 + 3);
        let orig: Vec<_> = split.arcs().filter(|x| x.is_orig()).collect();
        assert_eq!(orig, vec![SplitArc::Orig(g.find_arc(a, b, None).unwrap())]);
        assert_eq!(
            split.source(orig[0]),
            SplitNode::Out(b),
            "reversal must happen below the split"
        );
    }

    #[test]
    fn mutation_through_a_view_reaches_the_wrapped_graph() {
        let mut g = TreeBackedDigraph::new();
        let a = g.add_node();
        let b = g.add_node();
        {
            let mut rev = ReverseDigraph::new(&mut g);
            rev.add_arc(a, b);
        }
        // The reversal redirected the insertion.
        assert!(g.find_arc(b, a, None).is_some());
        assert!(g.find_arc(a, b, None).is_none());
    }
}
