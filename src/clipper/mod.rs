pub mod clipper;
pub mod clipper_base;
pub mod clipper_pool;
pub mod constants;
pub mod enums;
pub mod error;
pub mod intersect_node;
pub mod join;
pub mod local_minima;
pub mod out_pt;
pub mod out_rec;
pub mod poly_tree;
pub mod scanbeam;
pub mod t_edge;
pub mod utils;

#[cfg(test)]
mod tests;

pub use enums::*;
