use super::{path, square};
use crate::clipper::clipper::Clipper;
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::geometry::point::{IntPoint, Paths};
use crate::geometry::polygon::{area, area_paths};

fn run(clipper: &mut Clipper, clip_type: ClipType, fill_rule: PolyFillType) -> (Paths, Paths) {
    let mut closed = Vec::new();
    let mut open = Vec::new();

    assert!(clipper.execute(clip_type, fill_rule, &mut closed, &mut open));

    (closed, open)
}

fn overlapping() -> Clipper {
    let mut clipper = Clipper::new();
    clipper.add_subject(&[square(0, 0, 10)]);
    clipper.add_clip(&[square(5, 5, 10)]);

    clipper
}

fn sorted(path: &[IntPoint]) -> Vec<(i64, i64)> {
    let mut result: Vec<(i64, i64)> = path.iter().map(|pt| (pt.x, pt.y)).collect();
    result.sort();

    result
}

#[test]
fn test_single_square_union() {
    let mut clipper = Clipper::new();
    clipper.add_subject(&[square(0, 0, 10)]);

    let (closed, open) = run(&mut clipper, ClipType::Union, PolyFillType::NonZero);

    assert_eq!(closed.len(), 1);
    assert!(open.is_empty());
    assert_eq!(area(&closed[0]), 100.0);
    assert_eq!(sorted(&closed[0]), vec![(0, 0), (0, 10), (10, 0), (10, 10)]);
}

#[test]
fn test_overlapping_squares() {
    let mut clipper = overlapping();

    let (closed, _) = run(&mut clipper, ClipType::Intersection, PolyFillType::NonZero);
    assert_eq!(closed.len(), 1);
    assert_eq!(area(&closed[0]), 25.0);
    assert_eq!(sorted(&closed[0]), vec![(5, 5), (5, 10), (10, 5), (10, 10)]);

    let (closed, _) = run(&mut clipper, ClipType::Union, PolyFillType::NonZero);
    assert_eq!(closed.len(), 1);
    assert_eq!(area(&closed[0]), 175.0);

    let (closed, _) = run(&mut clipper, ClipType::Difference, PolyFillType::NonZero);
    assert_eq!(closed.len(), 1);
    assert_eq!(area(&closed[0]), 75.0);

    let (closed, _) = run(&mut clipper, ClipType::Xor, PolyFillType::NonZero);
    assert_eq!(area_paths(&closed), 150.0);
}

#[test]
fn test_outer_contours_are_positive() {
    let mut clipper = overlapping();

    let (closed, _) = run(&mut clipper, ClipType::Union, PolyFillType::NonZero);
    assert!(closed.iter().all(|path| area(path) > 0.0));

    clipper.set_reverse_solution(true);
    let (closed, _) = run(&mut clipper, ClipType::Union, PolyFillType::NonZero);
    assert_eq!(area(&closed[0]), -175.0);
}

#[test]
fn test_clear_discards_input() {
    let mut clipper = overlapping();
    clipper.clear();

    let (closed, open) = run(&mut clipper, ClipType::Union, PolyFillType::NonZero);

    assert!(closed.is_empty());
    assert!(open.is_empty());
}

#[test]
fn test_empty_input() {
    let mut clipper = Clipper::new();

    let (closed, open) = run(&mut clipper, ClipType::Intersection, PolyFillType::EvenOdd);

    assert!(closed.is_empty());
    assert!(open.is_empty());
}

#[test]
fn test_degenerate_input_is_ignored() {
    let mut clipper = Clipper::new();

    assert!(!clipper.add_subject(&[path(&[(0, 0), (10, 10)])]));

    let (closed, _) = run(&mut clipper, ClipType::Union, PolyFillType::NonZero);
    assert!(closed.is_empty());
}

#[test]
fn test_open_clip_is_rejected() {
    let mut clipper = Clipper::new();

    assert!(!clipper.add_path(&path(&[(0, 0), (10, 0)]), PolyType::Clip, true));
    assert!(clipper.add_path(&path(&[(0, 0), (10, 0)]), PolyType::Subject, true));
}

#[test]
fn test_open_subject_is_clipped() {
    let mut clipper = Clipper::new();
    clipper.add_open_subject(&[path(&[(-5, 5), (15, 5)])]);
    clipper.add_clip(&[square(0, 0, 10)]);

    let (closed, open) = run(&mut clipper, ClipType::Intersection, PolyFillType::NonZero);

    assert!(closed.is_empty());
    assert_eq!(open, vec![path(&[(0, 5), (10, 5)])]);
}

#[test]
fn test_self_intersecting_bowtie() {
    let mut clipper = Clipper::new();
    clipper.add_subject(&[path(&[(0, 0), (10, 10), (10, 0), (0, 10)])]);

    let (closed, _) = run(&mut clipper, ClipType::Union, PolyFillType::NonZero);

    assert_eq!(closed.len(), 2);
    assert!(closed.iter().all(|path| area(path) == 25.0));
}

#[test]
fn test_donut() {
    let mut clipper = Clipper::new();
    clipper.add_subject(&[square(0, 0, 30)]);
    clipper.add_clip(&[square(10, 10, 10)]);

    let (closed, _) = run(&mut clipper, ClipType::Difference, PolyFillType::NonZero);

    assert_eq!(closed.len(), 2);
    assert_eq!(area_paths(&closed), 800.0);
    assert_eq!(closed.iter().filter(|path| area(path) < 0.0).count(), 1);
}

#[test]
fn test_preserve_collinear() {
    let rectangle = path(&[(0, 0), (10, 0), (10, 5), (10, 10), (0, 10)]);
    let mut clipper = Clipper::new();
    clipper.add_subject(&[rectangle]);

    clipper.set_preserve_collinear(false);
    let (closed, _) = run(&mut clipper, ClipType::Union, PolyFillType::NonZero);
    assert_eq!(closed[0].len(), 4);

    clipper.set_preserve_collinear(true);
    let (closed, _) = run(&mut clipper, ClipType::Union, PolyFillType::NonZero);
    assert_eq!(closed[0].len(), 5);
    assert_eq!(area(&closed[0]), 100.0);
}
