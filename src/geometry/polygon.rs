use crate::clipper::enums::PointInPolygonResult;
use crate::geometry::bound_rect::BoundRect;
use crate::geometry::point::{IntPoint, Path, Paths};

/// Signed area. Counter-clockwise rings in a y-up frame (clockwise on screen)
/// are positive.
pub fn area(path: &[IntPoint]) -> f64 {
    let len = path.len();

    if len < 3 {
        return 0.0;
    }

    let mut result = 0.0;
    let mut prev = &path[len - 1];

    for point in path {
        result += (prev.y + point.y) as f64 * (prev.x - point.x) as f64;
        prev = point;
    }

    result * 0.5
}

pub fn area_paths(paths: &[Path]) -> f64 {
    paths.iter().map(|path| area(path)).sum()
}

pub fn is_positive(path: &[IntPoint]) -> bool {
    area(path) >= 0.0
}

pub fn reverse_path(path: &[IntPoint]) -> Path {
    path.iter().rev().copied().collect()
}

pub fn reverse_paths(paths: &[Path]) -> Paths {
    paths.iter().map(|path| reverse_path(path)).collect()
}

pub fn translate_path(path: &[IntPoint], dx: i64, dy: i64) -> Path {
    path.iter().map(|point| IntPoint::new(point.x + dx, point.y + dy)).collect()
}

pub fn get_bounds(path: &[IntPoint]) -> BoundRect<i64> {
    get_bounds_iter(path.iter())
}

pub fn get_bounds_paths(paths: &[Path]) -> BoundRect<i64> {
    get_bounds_iter(paths.iter().flatten())
}

fn get_bounds_iter<'a>(points: impl Iterator<Item = &'a IntPoint>) -> BoundRect<i64> {
    let mut left = i64::MAX;
    let mut top = i64::MAX;
    let mut right = i64::MIN;
    let mut bottom = i64::MIN;

    for point in points {
        left = left.min(point.x);
        top = top.min(point.y);
        right = right.max(point.x);
        bottom = bottom.max(point.y);
    }

    if left > right {
        return BoundRect::empty();
    }

    BoundRect::from_ltrb(left, top, right, bottom)
}

/// Drops consecutive duplicates, and for closed paths a closing point that
/// repeats the first.
pub fn strip_duplicates(path: &[IntPoint], is_closed: bool) -> Path {
    let mut result: Path = Vec::with_capacity(path.len());

    for point in path {
        if result.last() != Some(point) {
            result.push(*point);
        }
    }

    if is_closed {
        while result.len() > 1 && result.first() == result.last() {
            result.pop();
        }
    }

    result
}

/// Removes vertices lying on the line through their neighbours.
pub fn trim_collinear(path: &[IntPoint], is_open: bool) -> Path {
    let len = path.len();

    if len < 3 {
        if !is_open || len < 2 || path[0] == path[1] {
            return Vec::new();
        }

        return path.to_vec();
    }

    let mut start = 0;
    let mut stop = len - 1;

    if !is_open {
        while start != stop && IntPoint::is_collinear(&path[stop], &path[start], &path[start + 1]) {
            start += 1;
        }

        while start != stop && IntPoint::is_collinear(&path[stop - 1], &path[stop], &path[start]) {
            stop -= 1;
        }

        if start == stop {
            return Vec::new();
        }
    }

    let mut result: Path = Vec::with_capacity(len);
    let mut prev = start;
    result.push(path[prev]);

    for i in start + 1..stop {
        if !IntPoint::is_collinear(&path[prev], &path[i], &path[i + 1]) {
            prev = i;
            result.push(path[prev]);
        }
    }

    if is_open {
        result.push(path[stop]);
    } else if !IntPoint::is_collinear(&path[prev], &path[stop], &result[0]) {
        result.push(path[stop]);
    } else {
        while result.len() > 2
            && IntPoint::is_collinear(&result[result.len() - 1], &result[result.len() - 2], &result[0])
        {
            result.pop();
        }

        if result.len() < 3 {
            return Vec::new();
        }
    }

    result
}

#[inline]
fn on_segment(point: &IntPoint, seg1: &IntPoint, seg2: &IntPoint) -> bool {
    IntPoint::cross_product(seg1, seg2, point) == 0
        && point.x >= seg1.x.min(seg2.x)
        && point.x <= seg1.x.max(seg2.x)
        && point.y >= seg1.y.min(seg2.y)
        && point.y <= seg1.y.max(seg2.y)
}

/// Crossing-number test over the ring's edges. Returns `IsOn` as soon as the
/// point is found on an edge.
pub fn point_in_ring<'a>(
    point: &IntPoint,
    edges: impl Iterator<Item = (&'a IntPoint, &'a IntPoint)>,
) -> PointInPolygonResult {
    let mut inside = false;
    let mut edge_count = 0;

    for (prev, curr) in edges {
        edge_count += 1;

        if on_segment(point, prev, curr) {
            return PointInPolygonResult::IsOn;
        }

        if (prev.y > point.y) == (curr.y > point.y) {
            continue;
        }

        let cross = (curr.x as i128 - prev.x as i128) * (point.y as i128 - prev.y as i128)
            - (curr.y as i128 - prev.y as i128) * (point.x as i128 - prev.x as i128);

        if (cross > 0) == (curr.y > prev.y) {
            inside = !inside;
        }
    }

    if edge_count < 3 || !inside {
        PointInPolygonResult::IsOutside
    } else {
        PointInPolygonResult::IsInside
    }
}

pub fn point_in_polygon(point: &IntPoint, polygon: &[IntPoint]) -> PointInPolygonResult {
    let len = polygon.len();

    if len < 3 {
        return PointInPolygonResult::IsOutside;
    }

    point_in_ring(
        point,
        (0..len).map(|i| (&polygon[(i + len - 1) % len], &polygon[i])),
    )
}

/// Containment of `path1` in `path2` for paths that touch at most through
/// rounding: two vertices in a row decide, otherwise the bounds midpoint does.
pub fn path2_contains_path1(path1: &[IntPoint], path2: &[IntPoint]) -> bool {
    let mut pip = PointInPolygonResult::IsOn;

    for point in path1 {
        match point_in_polygon(point, path2) {
            PointInPolygonResult::IsOutside if pip == PointInPolygonResult::IsOutside => return false,
            PointInPolygonResult::IsInside if pip == PointInPolygonResult::IsInside => return true,
            PointInPolygonResult::IsOn => {}
            result => pip = result,
        }
    }

    if pip != PointInPolygonResult::IsInside {
        return false;
    }

    point_in_polygon(&get_bounds(path1).mid_point(), path2) == PointInPolygonResult::IsInside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(left: i64, top: i64, size: i64) -> Path {
        vec![
            IntPoint::new(left, top),
            IntPoint::new(left + size, top),
            IntPoint::new(left + size, top + size),
            IntPoint::new(left, top + size),
        ]
    }

    #[test]
    fn test_area_sign() {
        let path = square(0, 0, 10);

        assert_eq!(area(&path), 100.0);
        assert_eq!(area(&reverse_path(&path)), -100.0);
        assert!(is_positive(&path));
        assert_eq!(area(&path[..2]), 0.0);
    }

    #[test]
    fn test_area_paths() {
        let paths = vec![square(0, 0, 10), reverse_path(&square(2, 2, 4))];

        assert_eq!(area_paths(&paths), 84.0);
    }

    #[test]
    fn test_bounds() {
        let bounds = get_bounds(&[IntPoint::new(3, -2), IntPoint::new(-1, 5), IntPoint::new(0, 0)]);

        assert_eq!(bounds, BoundRect::from_ltrb(-1, -2, 3, 5));
        assert!(get_bounds(&[]).is_empty());

        let all = get_bounds_paths(&[square(0, 0, 2), square(10, 10, 2)]);
        assert_eq!(all, BoundRect::from_ltrb(0, 0, 12, 12));
    }

    #[test]
    fn test_point_in_polygon() {
        let path = square(0, 0, 10);

        assert_eq!(point_in_polygon(&IntPoint::new(5, 5), &path), PointInPolygonResult::IsInside);
        assert_eq!(point_in_polygon(&IntPoint::new(15, 5), &path), PointInPolygonResult::IsOutside);
        assert_eq!(point_in_polygon(&IntPoint::new(10, 5), &path), PointInPolygonResult::IsOn);
        assert_eq!(point_in_polygon(&IntPoint::new(0, 0), &path), PointInPolygonResult::IsOn);
        assert_eq!(point_in_polygon(&IntPoint::new(-1, 0), &path), PointInPolygonResult::IsOutside);
    }

    #[test]
    fn test_point_in_concave_polygon() {
        let path = vec![
            IntPoint::new(0, 0),
            IntPoint::new(10, 0),
            IntPoint::new(10, 10),
            IntPoint::new(5, 3),
            IntPoint::new(0, 10),
        ];

        assert_eq!(point_in_polygon(&IntPoint::new(5, 8), &path), PointInPolygonResult::IsOutside);
        assert_eq!(point_in_polygon(&IntPoint::new(5, 1), &path), PointInPolygonResult::IsInside);
        assert_eq!(point_in_polygon(&IntPoint::new(1, 5), &path), PointInPolygonResult::IsInside);
    }

    #[test]
    fn test_path_contains_path() {
        let outer = square(0, 0, 10);

        assert!(path2_contains_path1(&square(2, 2, 4), &outer));
        assert!(!path2_contains_path1(&outer, &square(2, 2, 4)));
        assert!(!path2_contains_path1(&square(20, 0, 4), &outer));
        // no vertex strictly inside
        assert!(!path2_contains_path1(
            &[IntPoint::new(0, 0), IntPoint::new(10, 0), IntPoint::new(10, 10)],
            &outer
        ));
        assert!(!path2_contains_path1(&outer, &outer));
    }

    #[test]
    fn test_strip_duplicates() {
        let path = vec![
            IntPoint::new(0, 0),
            IntPoint::new(0, 0),
            IntPoint::new(5, 0),
            IntPoint::new(5, 5),
            IntPoint::new(0, 0),
        ];

        assert_eq!(strip_duplicates(&path, true).len(), 3);
        assert_eq!(strip_duplicates(&path, false).len(), 4);
    }

    #[test]
    fn test_trim_collinear() {
        let path = vec![
            IntPoint::new(0, 0),
            IntPoint::new(5, 0),
            IntPoint::new(10, 0),
            IntPoint::new(10, 10),
            IntPoint::new(0, 10),
            IntPoint::new(0, 5),
        ];

        assert_eq!(trim_collinear(&path, false), square(0, 0, 10));

        let flat = vec![IntPoint::new(0, 0), IntPoint::new(5, 0), IntPoint::new(10, 0)];
        assert!(trim_collinear(&flat, false).is_empty());
        assert_eq!(
            trim_collinear(&flat, true),
            vec![IntPoint::new(0, 0), IntPoint::new(10, 0)]
        );
    }

    #[test]
    fn test_translate_path() {
        let moved = translate_path(&square(0, 0, 1), 3, -2);

        assert_eq!(moved[0], IntPoint::new(3, -2));
        assert_eq!(moved[2], IntPoint::new(4, -1));
    }
}
