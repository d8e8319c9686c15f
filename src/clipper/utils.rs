use crate::clipper::clipper::Clipper;
use crate::clipper::enums::{ClipType, PolyFillType};
use crate::clipper::poly_tree::PolyTree;
use crate::geometry::point::{Path, Paths};
use crate::geometry::polygon::area_paths;

/// One-shot boolean operation on closed paths. An empty result is returned
/// if the sweep fails.
pub fn boolean_op(clip_type: ClipType, fill_rule: PolyFillType, subject: &[Path], clip: &[Path]) -> Paths {
    let mut clipper = Clipper::new();
    let mut closed = Vec::new();
    let mut open = Vec::new();
    clipper.add_subject(subject);
    clipper.add_clip(clip);

    clipper.execute(clip_type, fill_rule, &mut closed, &mut open);

    closed
}

pub fn boolean_op_tree(
    clip_type: ClipType,
    fill_rule: PolyFillType,
    subject: &[Path],
    clip: &[Path],
    tree: &mut PolyTree,
) -> bool {
    let mut clipper = Clipper::new();
    let mut open = Vec::new();
    clipper.add_subject(subject);
    clipper.add_clip(clip);

    clipper.execute_tree(clip_type, fill_rule, tree, &mut open)
}

pub fn intersect(subject: &[Path], clip: &[Path], fill_rule: PolyFillType) -> Paths {
    boolean_op(ClipType::Intersection, fill_rule, subject, clip)
}

pub fn union(subject: &[Path], clip: &[Path], fill_rule: PolyFillType) -> Paths {
    boolean_op(ClipType::Union, fill_rule, subject, clip)
}

/// Union of subjects alone, which merges overlaps and resolves
/// self-intersections.
pub fn union_paths(subject: &[Path], fill_rule: PolyFillType) -> Paths {
    boolean_op(ClipType::Union, fill_rule, subject, &[])
}

pub fn difference(subject: &[Path], clip: &[Path], fill_rule: PolyFillType) -> Paths {
    boolean_op(ClipType::Difference, fill_rule, subject, clip)
}

pub fn xor(subject: &[Path], clip: &[Path], fill_rule: PolyFillType) -> Paths {
    boolean_op(ClipType::Xor, fill_rule, subject, clip)
}

/// Cleanup union for offset output: `Positive` fill when the summed area is
/// non-negative, `Negative` otherwise.
pub fn union_by_orientation(paths: &[Path]) -> Paths {
    let fill_rule = if area_paths(paths) >= 0.0 {
        PolyFillType::Positive
    } else {
        PolyFillType::Negative
    };

    union_paths(paths, fill_rule)
}
