/// ID for arcs of a directed graph, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct ArcId(pub usize);

/// A factory to generate `ArcId` uniquely.
#[derive(Clone, Default)]
pub struct ArcIdFactory(usize);

impl ArcIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> ArcId {
        let cur = self.0;
        self.0 += 1;
        ArcId(cur)
    }

    pub fn max_issued(&self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl ArcId {
    pub const MIN: ArcId = ArcId(0);
    pub const MAX: ArcId = ArcId(usize::MAX);

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

/// ID for edges of an undirected graph, which are essentially `usize`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub usize);

/// A factory to generate `EdgeId` uniquely.
#[derive(Clone, Default)]
pub struct EdgeIdFactory(usize);

impl EdgeIdFactory {
    pub fn new() -> Self {
        Self(0)
    }

    pub fn one_more(&mut self) -> EdgeId {
        let cur = self.0;
        self.0 += 1;
        EdgeId(cur)
    }

    pub fn max_issued(&self) -> Option<usize> {
        self.0.checked_sub(1)
    }
}

impl EdgeId {
    pub const MIN: EdgeId = EdgeId(0);
    pub const MAX: EdgeId = EdgeId(usize::MAX);

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
