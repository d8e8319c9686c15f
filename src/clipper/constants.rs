/// Null link in every index arena.
pub const UNASSIGNED: usize = usize::MAX;

/// Squared distance under which a point is treated as lying on the edge to its left.
pub const JOIN_LEFT_DIST_SQRD: f64 = 0.25;

/// Same for the edge to the right, which gets a little more slack.
pub const JOIN_RIGHT_DIST_SQRD: f64 = 0.35;

/// Edges with an absolute `dx` above this are close enough to horizontal that a
/// misplaced intersection is projected back onto the segment instead of clamped.
pub const STEEP_DX: f64 = 100.0;

/// Rings under this area are discarded while splitting self-intersections.
pub const MIN_SPLIT_AREA: f64 = 2.0;

/// Smallest triangle area that survives a self-intersection split.
pub const MIN_TRIANGLE_AREA: f64 = 1.0;
