use crate::clipper::t_edge::TEdge;
use crate::geometry::point::IntPoint;
use std::cmp::Ordering;

/// A crossing of two edges inside the current scanbeam.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectNode {
    pub pt: IntPoint,
    pub edge1: usize,
    pub edge2: usize,
}

impl IntersectNode {
    pub fn new(edge1: usize, edge2: usize, pt: IntPoint) -> Self {
        Self { pt, edge1, edge2 }
    }

    pub fn edges_adjacent(&self, t_edge: &TEdge) -> bool {
        t_edge[self.edge1].next_in_ael == self.edge2 || t_edge[self.edge1].prev_in_ael == self.edge2
    }

    /// Bottom-up: descending y, then ascending x.
    pub fn sort(a: &IntersectNode, b: &IntersectNode) -> Ordering {
        b.pt.y.cmp(&a.pt.y).then(a.pt.x.cmp(&b.pt.x))
    }
}
