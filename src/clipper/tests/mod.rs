mod clipper_base_tests;
mod clipper_tests;
mod intersect_node_tests;
mod local_minima_tests;
mod poly_tree_tests;
mod scanbeam_tests;

use crate::geometry::point::{IntPoint, Path};

pub(crate) fn path(coords: &[(i64, i64)]) -> Path {
    coords.iter().map(|&(x, y)| IntPoint::new(x, y)).collect()
}

pub(crate) fn square(left: i64, top: i64, size: i64) -> Path {
    path(&[
        (left, top),
        (left + size, top),
        (left + size, top + size),
        (left, top + size),
    ])
}
