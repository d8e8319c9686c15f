use crate::clipper::enums::PolyType;
use crate::clipper::intersect_node::IntersectNode;
use crate::clipper::t_edge::{ActiveEdge, TEdge};
use crate::geometry::point::IntPoint;

#[test]
fn test_sort_bottom_up() {
    let mut nodes = vec![
        IntersectNode::new(0, 1, IntPoint::new(0, 5)),
        IntersectNode::new(1, 2, IntPoint::new(3, 10)),
        IntersectNode::new(2, 3, IntPoint::new(1, 10)),
    ];

    nodes.sort_by(IntersectNode::sort);

    let points: Vec<IntPoint> = nodes.iter().map(|node| node.pt).collect();
    assert_eq!(points, vec![IntPoint::new(1, 10), IntPoint::new(3, 10), IntPoint::new(0, 5)]);
}

#[test]
fn test_edges_adjacent() {
    let mut t_edge = TEdge::new();
    let edge = || ActiveEdge::new(IntPoint::new(0, 10), 0, IntPoint::new(0, 0), 1, 0, 0, PolyType::Subject, false);
    let a = t_edge.create(edge());
    let b = t_edge.create(edge());
    let c = t_edge.create(edge());

    t_edge.actives = a;
    t_edge[a].next_in_ael = b;
    t_edge[b].prev_in_ael = a;
    t_edge[b].next_in_ael = c;
    t_edge[c].prev_in_ael = b;

    assert!(IntersectNode::new(a, b, IntPoint::new(0, 5)).edges_adjacent(&t_edge));
    assert!(IntersectNode::new(c, b, IntPoint::new(0, 5)).edges_adjacent(&t_edge));
    assert!(!IntersectNode::new(a, c, IntPoint::new(0, 5)).edges_adjacent(&t_edge));
}
