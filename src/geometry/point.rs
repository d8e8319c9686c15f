use crate::utils::number::Number;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point<T: Number> {
    pub x: T,
    pub y: T,
}

/// Integer point used by the clipping engine.
pub type IntPoint = Point<i64>;

pub type Path = Vec<IntPoint>;

pub type Paths = Vec<Path>;

impl<T: Number> Point<T> {
    #[inline(always)]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl IntPoint {
    /// Turning direction of `pt1 -> pt2 -> pt3`.
    #[inline(always)]
    pub fn cross_product(pt1: &Self, pt2: &Self, pt3: &Self) -> i128 {
        (pt2.x as i128 - pt1.x as i128) * (pt3.y as i128 - pt2.y as i128)
            - (pt2.y as i128 - pt1.y as i128) * (pt3.x as i128 - pt2.x as i128)
    }

    #[inline(always)]
    pub fn dot_product(pt1: &Self, pt2: &Self, pt3: &Self) -> i128 {
        (pt2.x as i128 - pt1.x as i128) * (pt3.x as i128 - pt2.x as i128)
            + (pt2.y as i128 - pt1.y as i128) * (pt3.y as i128 - pt2.y as i128)
    }

    #[inline(always)]
    pub fn is_collinear(pt1: &Self, shared_pt: &Self, pt2: &Self) -> bool {
        Self::cross_product(pt1, shared_pt, pt2) == 0
    }

    #[inline(always)]
    pub fn really_close(&self, other: &Self) -> bool {
        (self.x - other.x).abs() < 2 && (self.y - other.y).abs() < 2
    }

    /// Slope `dx/dy` of the segment; horizontal segments map to infinities
    /// signed opposite to their heading.
    pub fn get_dx(pt1: &Self, pt2: &Self) -> f64 {
        let dy = (pt2.y - pt1.y) as f64;

        if dy != 0.0 {
            (pt2.x - pt1.x) as f64 / dy
        } else if pt2.x > pt1.x {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    }

    pub fn perpendic_dist_from_line_sqrd(&self, line1: &Self, line2: &Self) -> f64 {
        let a = (self.x - line1.x) as f64;
        let b = (self.y - line1.y) as f64;
        let c = (line2.x - line1.x) as f64;
        let d = (line2.y - line1.y) as f64;

        if c == 0.0 && d == 0.0 {
            return 0.0;
        }

        let cross = a * d - c * b;

        cross * cross / (c * c + d * d)
    }

    /// Intersection of the infinite lines through both segments, clamped to
    /// the first segment and truncated toward zero. `None` for parallel lines.
    pub fn segment_intersect_pt(ln1a: &Self, ln1b: &Self, ln2a: &Self, ln2b: &Self) -> Option<Self> {
        let dx1 = (ln1b.x - ln1a.x) as f64;
        let dy1 = (ln1b.y - ln1a.y) as f64;
        let dx2 = (ln2b.x - ln2a.x) as f64;
        let dy2 = (ln2b.y - ln2a.y) as f64;
        let det = dy1 * dx2 - dy2 * dx1;

        if det == 0.0 {
            return None;
        }

        let t = ((ln1a.x - ln2a.x) as f64 * dy2 - (ln1a.y - ln2a.y) as f64 * dx2) / det;

        if t <= 0.0 {
            Some(*ln1a)
        } else if t >= 1.0 {
            Some(*ln1b)
        } else {
            Some(Self::new(
                (ln1a.x as f64 + t * dx1) as i64,
                (ln1a.y as f64 + t * dy1) as i64,
            ))
        }
    }

    /// Strict crossing test; touching or collinear segments do not count.
    pub fn segments_intersect(seg1a: &Self, seg1b: &Self, seg2a: &Self, seg2b: &Self) -> bool {
        let d1 = Self::cross_product(seg1a, seg2a, seg2b).signum();
        let d2 = Self::cross_product(seg1b, seg2a, seg2b).signum();
        let d3 = Self::cross_product(seg2a, seg1a, seg1b).signum();
        let d4 = Self::cross_product(seg2b, seg1a, seg1b).signum();

        d1 * d2 < 0 && d3 * d4 < 0
    }

    pub fn closest_point_on_segment(&self, seg1: &Self, seg2: &Self) -> Self {
        if seg1 == seg2 {
            return *seg1;
        }

        let dx = (seg2.x - seg1.x) as f64;
        let dy = (seg2.y - seg1.y) as f64;
        let q = ((self.x - seg1.x) as f64 * dx + (self.y - seg1.y) as f64 * dy) / (dx * dx + dy * dy);
        let q = q.clamp(0.0, 1.0);

        Self::new(
            seg1.x + (q * dx).round_ties_even() as i64,
            seg1.y + (q * dy).round_ties_even() as i64,
        )
    }

    /// Twice the signed area of the triangle, in the orientation used by
    /// [`crate::geometry::polygon::area`].
    pub fn area_triangle(pt1: &Self, pt2: &Self, pt3: &Self) -> f64 {
        (pt3.y + pt1.y) as f64 * (pt3.x - pt1.x) as f64
            + (pt1.y + pt2.y) as f64 * (pt1.x - pt2.x) as f64
            + (pt2.y + pt3.y) as f64 * (pt2.x - pt3.x) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cross_product_sign() {
        let a = IntPoint::new(0, 0);
        let b = IntPoint::new(10, 0);
        let c = IntPoint::new(10, 10);

        assert!(IntPoint::cross_product(&a, &b, &c) > 0);
        assert!(IntPoint::cross_product(&c, &b, &a) < 0);
        assert!(IntPoint::is_collinear(&a, &b, &IntPoint::new(20, 0)));
    }

    #[test]
    fn test_cross_product_does_not_overflow() {
        let a = IntPoint::new(i64::MIN / 2, i64::MIN / 2);
        let b = IntPoint::new(i64::MAX / 2, i64::MIN / 2);
        let c = IntPoint::new(i64::MAX / 2, i64::MAX / 2);

        assert!(IntPoint::cross_product(&a, &b, &c) > 0);
    }

    #[test]
    fn test_get_dx() {
        let a = IntPoint::new(0, 0);

        assert_eq!(IntPoint::get_dx(&a, &IntPoint::new(10, 0)), f64::NEG_INFINITY);
        assert_eq!(IntPoint::get_dx(&a, &IntPoint::new(-10, 0)), f64::INFINITY);
        assert_eq!(IntPoint::get_dx(&a, &IntPoint::new(5, 10)), 0.5);
    }

    #[test]
    fn test_segment_intersect_pt() {
        let pt = IntPoint::segment_intersect_pt(
            &IntPoint::new(0, 0),
            &IntPoint::new(10, 10),
            &IntPoint::new(0, 10),
            &IntPoint::new(10, 0),
        );

        assert_eq!(pt, Some(IntPoint::new(5, 5)));

        let parallel = IntPoint::segment_intersect_pt(
            &IntPoint::new(0, 0),
            &IntPoint::new(10, 0),
            &IntPoint::new(0, 5),
            &IntPoint::new(10, 5),
        );

        assert!(parallel.is_none());
    }

    #[test]
    fn test_segment_intersect_pt_truncates() {
        let pt = IntPoint::segment_intersect_pt(
            &IntPoint::new(0, 0),
            &IntPoint::new(10, 3),
            &IntPoint::new(0, 3),
            &IntPoint::new(10, 0),
        );

        assert_eq!(pt, Some(IntPoint::new(5, 1)));

        let pt = IntPoint::segment_intersect_pt(
            &IntPoint::new(0, 0),
            &IntPoint::new(-10, -3),
            &IntPoint::new(0, -3),
            &IntPoint::new(-10, 0),
        );

        assert_eq!(pt, Some(IntPoint::new(-5, -1)));
    }

    #[test]
    fn test_segments_intersect_is_strict() {
        let a = IntPoint::new(0, 0);
        let b = IntPoint::new(10, 10);

        assert!(IntPoint::segments_intersect(
            &a,
            &b,
            &IntPoint::new(0, 10),
            &IntPoint::new(10, 0)
        ));
        assert!(!IntPoint::segments_intersect(
            &a,
            &b,
            &IntPoint::new(10, 10),
            &IntPoint::new(20, 0)
        ));
    }

    #[test]
    fn test_closest_point_on_segment() {
        let pt = IntPoint::new(5, 7);
        let closest = pt.closest_point_on_segment(&IntPoint::new(0, 0), &IntPoint::new(10, 0));

        assert_eq!(closest, IntPoint::new(5, 0));
        assert_eq!(
            IntPoint::new(-5, 3).closest_point_on_segment(&IntPoint::new(0, 0), &IntPoint::new(10, 0)),
            IntPoint::new(0, 0)
        );
    }

    #[test]
    fn test_perpendicular_distance() {
        let pt = IntPoint::new(5, 3);

        assert_eq!(
            pt.perpendic_dist_from_line_sqrd(&IntPoint::new(0, 0), &IntPoint::new(10, 0)),
            9.0
        );
    }
}
