use super::{path, square};
use crate::clipper::clipper_base::{ClipperBase, Vertex};
use crate::clipper::enums::PolyType;
use crate::geometry::point::IntPoint;

#[test]
fn test_square_classification() {
    let mut base = ClipperBase::new();

    assert!(base.add_path(&square(0, 0, 10), PolyType::Subject, false));
    assert_eq!(base.vertices.len(), 4);
    assert_eq!(base.local_minima.len(), 1);
    assert_eq!(base.local_minima.get(0).pt, IntPoint::new(0, 10));
    assert!(base.vertices[1].is_maxima());
    assert_ne!(base.vertices[3].flags & Vertex::LOCAL_MIN, 0);
    assert!(!base.has_open_paths);
}

#[test]
fn test_ring_links() {
    let mut base = ClipperBase::new();
    base.add_path(&square(0, 0, 10), PolyType::Subject, false);
    base.add_path(&square(20, 0, 10), PolyType::Clip, false);

    assert_eq!(base.vertices.len(), 8);
    assert_eq!(base.vertices[7].next, 4);
    assert_eq!(base.vertices[4].prev, 7);
    assert_eq!(base.vertices[3].next, 0);
    assert_eq!(base.local_minima.len(), 2);
}

#[test]
fn test_duplicates_are_stripped() {
    let mut base = ClipperBase::new();
    let input = path(&[(0, 0), (0, 0), (10, 0), (10, 10), (0, 0)]);

    assert!(base.add_path(&input, PolyType::Subject, false));
    assert_eq!(base.vertices.len(), 3);
}

#[test]
fn test_degenerate_closed_paths_are_dropped() {
    let mut base = ClipperBase::new();

    assert!(!base.add_path(&path(&[(0, 0), (10, 10)]), PolyType::Subject, false));
    assert!(!base.add_path(&path(&[(0, 0), (5, 0), (10, 0)]), PolyType::Subject, false));
    assert!(!base.add_path(&[], PolyType::Clip, false));
    assert!(base.vertices.is_empty());
    assert!(base.local_minima.is_empty());
}

#[test]
fn test_flat_open_path() {
    let mut base = ClipperBase::new();

    assert!(base.add_path(&path(&[(0, 0), (10, 0)]), PolyType::Subject, true));
    assert!(base.has_open_paths);
    assert_eq!(base.local_minima.len(), 1);
    assert_eq!(base.vertices[0].flags, Vertex::OPEN_START | Vertex::LOCAL_MIN);
    assert_eq!(base.vertices[1].flags, Vertex::OPEN_END | Vertex::LOCAL_MAX);
    assert!(base.local_minima.get(0).is_open);
}

#[test]
fn test_open_path_minimum_in_the_middle() {
    let mut base = ClipperBase::new();

    base.add_path(&path(&[(0, 0), (5, 10), (10, 0)]), PolyType::Subject, true);

    assert_eq!(base.local_minima.len(), 1);
    assert_eq!(base.local_minima.get(0).pt, IntPoint::new(5, 10));
    assert!(base.vertices[0].is_maxima());
    assert!(base.vertices[2].is_maxima());
    assert!(base.vertices[2].is_open_end());
}

#[test]
fn test_clear() {
    let mut base = ClipperBase::new();
    base.add_path(&path(&[(0, 0), (10, 0)]), PolyType::Subject, true);
    base.clear();

    assert!(base.vertices.is_empty());
    assert!(base.local_minima.is_empty());
    assert!(!base.has_open_paths);
}
