use super::square;
use crate::clipper::clipper::Clipper;
use crate::clipper::constants::UNASSIGNED;
use crate::clipper::enums::{ClipType, PolyFillType};
use crate::clipper::poly_tree::PolyTree;
use crate::geometry::point::IntPoint;
use crate::geometry::polygon::{area, reverse_path};

/// Adds a record holding a square ring, owned by `owner`.
fn square_record(clipper: &mut Clipper, owner: usize, left: i64, top: i64, size: i64) -> usize {
    let out_rec = &mut clipper.out_rec;
    let outrec = out_rec.create();
    let first = out_rec.create_point(IntPoint::new(left, top), outrec);
    let mut last = first;

    for (x, y) in [(left + size, top), (left + size, top + size), (left, top + size)] {
        last = out_rec.duplicate_op(last, true);
        out_rec.points[last].pt = IntPoint::new(x, y);
    }

    out_rec.records[outrec].pts = first;
    out_rec.records[outrec].owner = owner;

    outrec
}

fn build(clipper: &mut Clipper) -> PolyTree {
    let mut tree = PolyTree::new();
    let mut open = Vec::new();
    clipper.ctx.using_polytree = true;
    clipper.build_tree(&mut tree, &mut open);

    tree
}

#[test]
fn test_manual_nesting() {
    let mut tree = PolyTree::new();
    let root = tree.root();
    let outer = tree.add_child(root, square(0, 0, 30));
    let hole = tree.add_child(outer, reverse_path(&square(10, 10, 10)));

    assert_eq!(tree.count(), 2);
    assert_eq!(tree.child_count(root), 1);
    assert_eq!(tree.children(outer), &[hole]);
    assert_eq!(tree.parent(hole), Some(outer));
    assert_eq!(tree.parent(root), None);
    assert_eq!(tree.level(outer), 1);
    assert!(!tree.is_hole(outer));
    assert!(tree.is_hole(hole));
    assert!(!tree.is_hole(root));
    assert_eq!(tree.area(root), 800.0);
    assert_eq!(tree.to_paths().len(), 2);

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.child_count(tree.root()), 0);
}

#[test]
fn test_donut_tree() {
    let mut clipper = Clipper::new();
    let mut tree = PolyTree::new();
    let mut open = Vec::new();
    clipper.add_subject(&[square(0, 0, 30)]);
    clipper.add_clip(&[square(10, 10, 10)]);

    assert!(clipper.execute_tree(ClipType::Xor, PolyFillType::NonZero, &mut tree, &mut open));

    let root = tree.root();
    assert_eq!(tree.count(), 2);
    assert_eq!(tree.child_count(root), 1);

    let outer = tree.children(root)[0];
    assert_eq!(tree.child_count(outer), 1);
    assert_eq!(area(tree.polygon(outer)), 900.0);

    let hole = tree.children(outer)[0];
    assert!(tree.is_hole(hole));
    assert_eq!(area(tree.polygon(hole)), -100.0);
    assert_eq!(tree.area(root), 800.0);
}

#[test]
fn test_island_in_hole() {
    let mut clipper = Clipper::new();
    let mut tree = PolyTree::new();
    let mut open = Vec::new();
    clipper.add_subject(&[
        square(0, 0, 50),
        reverse_path(&square(10, 10, 30)),
        square(20, 20, 10),
    ]);

    assert!(clipper.execute_tree(ClipType::Union, PolyFillType::NonZero, &mut tree, &mut open));
    assert_eq!(tree.count(), 3);

    let outer = tree.children(tree.root())[0];
    let hole = tree.children(outer)[0];
    let island = tree.children(hole)[0];

    assert_eq!(tree.level(island), 3);
    assert!(!tree.is_hole(island));
    assert_eq!(area(tree.polygon(island)), 100.0);
    assert_eq!(tree.area(tree.root()), 2500.0 - 900.0 + 100.0);
}

#[test]
fn test_disjoint_contours_sit_under_root() {
    let mut clipper = Clipper::new();
    let mut tree = PolyTree::new();
    let mut open = Vec::new();
    clipper.add_subject(&[square(0, 0, 10), square(20, 0, 10)]);

    assert!(clipper.execute_tree(ClipType::Union, PolyFillType::NonZero, &mut tree, &mut open));

    assert_eq!(tree.child_count(tree.root()), 2);
    assert!(tree.children(tree.root()).iter().all(|&node| tree.child_count(node) == 0));
}

#[test]
fn test_split_owner_reverses_inverted_link() {
    let mut clipper = Clipper::new();
    let outer = square_record(&mut clipper, UNASSIGNED, 0, 0, 100);
    let inner = square_record(&mut clipper, outer, 40, 40, 10);
    // the split believes it sits inside `inner`, though it encloses it
    let split = square_record(&mut clipper, inner, 20, 20, 50);
    clipper.out_rec.records[outer].splits.push(split);

    let tree = build(&mut clipper);
    let outer_node = tree.children(tree.root())[0];

    assert_eq!(tree.count(), 3);
    assert_eq!(tree.child_count(tree.root()), 1);
    assert_eq!(tree.child_count(outer_node), 1);

    let split_node = tree.children(outer_node)[0];
    assert_eq!(area(tree.polygon(split_node)), 2500.0);

    let inner_node = tree.children(split_node)[0];
    assert_eq!(tree.level(inner_node), 3);
    assert_eq!(area(tree.polygon(inner_node)), 100.0);
    assert_eq!(clipper.out_rec.records[split].owner, outer);
    assert_eq!(clipper.out_rec.records[inner].owner, split);
}

#[test]
fn test_split_owner_looks_through_emptied_split() {
    let mut clipper = Clipper::new();
    let outer = square_record(&mut clipper, UNASSIGNED, 0, 0, 100);
    let emptied = clipper.out_rec.create();
    let split = square_record(&mut clipper, outer, 20, 20, 50);
    let inner = square_record(&mut clipper, outer, 40, 40, 10);
    clipper.out_rec.records[emptied].owner = outer;
    clipper.out_rec.records[emptied].splits.push(split);
    clipper.out_rec.records[outer].splits.push(emptied);

    let tree = build(&mut clipper);
    let outer_node = tree.children(tree.root())[0];

    assert_eq!(tree.count(), 3);
    assert_eq!(tree.child_count(outer_node), 1);

    let split_node = tree.children(outer_node)[0];
    assert_eq!(tree.children(split_node).len(), 1);
    assert_eq!(area(tree.polygon(tree.children(split_node)[0])), 100.0);
    assert_eq!(clipper.out_rec.records[inner].owner, split);
}
