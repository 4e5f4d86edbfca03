/// ID for nodes, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

/// A factory to generate `NodeId` uniquely.
#[derive(Clone, Default)]
pub struct NodeIdFactory(usize);

impl NodeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> NodeId {
        let cur = self.0;
        self.0 += 1;
        NodeId(cur)
    }

    /// The largest ID handed out so far.
    pub fn max_issued(&self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl NodeId {
    pub const MIN: NodeId = NodeId(0);
    pub const MAX: NodeId = NodeId(usize::MAX);

    pub fn new(x: usize) -> Self {
        Self(x)
    }

    pub fn to_raw(&self) -> usize {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}
