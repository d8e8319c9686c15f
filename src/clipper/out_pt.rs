use crate::clipper::constants::UNASSIGNED;
use crate::clipper::enums::PointInPolygonResult;
use crate::clipper::out_rec::OutRec;
use crate::geometry::point::{IntPoint, Path};
use crate::geometry::polygon::{path2_contains_path1, point_in_ring};

/// One vertex of an output ring.
#[derive(Debug, Clone)]
pub struct OutPt {
    pub pt: IntPoint,
    pub next: usize,
    pub prev: usize,
    pub outrec: usize,
    pub horz: Option<usize>,
}

impl OutPt {
    pub fn new(pt: IntPoint, outrec: usize) -> Self {
        Self {
            pt,
            next: UNASSIGNED,
            prev: UNASSIGNED,
            outrec,
            horz: None,
        }
    }
}

impl OutRec {
    /// Allocates a single-point ring.
    pub fn create_point(&mut self, pt: IntPoint, outrec: usize) -> usize {
        let index = self.points.get(OutPt::new(pt, outrec));
        self.points[index].next = index;
        self.points[index].prev = index;

        index
    }

    #[inline(always)]
    pub fn pt(&self, op: usize) -> IntPoint {
        self.points[op].pt
    }

    #[inline(always)]
    pub fn next(&self, op: usize) -> usize {
        self.points[op].next
    }

    #[inline(always)]
    pub fn prev(&self, op: usize) -> usize {
        self.points[op].prev
    }

    /// Copies `op` into a new point linked right after (or before) it.
    pub fn duplicate_op(&mut self, op: usize, insert_after: bool) -> usize {
        let pt = self.points[op].pt;
        let outrec = self.points[op].outrec;
        let result = self.points.get(OutPt::new(pt, outrec));

        if insert_after {
            let next = self.points[op].next;
            self.points[result].next = next;
            self.points[next].prev = result;
            self.points[result].prev = op;
            self.points[op].next = result;
        } else {
            let prev = self.points[op].prev;
            self.points[result].prev = prev;
            self.points[prev].next = result;
            self.points[result].next = op;
            self.points[op].prev = result;
        }

        result
    }

    /// Unlinks `op` from its ring and returns the point that followed it.
    pub fn dispose_out_pt(&mut self, op: usize) -> usize {
        let next = self.points[op].next;
        let prev = self.points[op].prev;

        self.points[prev].next = next;
        self.points[next].prev = prev;
        self.points[op].next = op;
        self.points[op].prev = op;

        next
    }

    pub fn point_count(&self, op: usize) -> usize {
        if op == UNASSIGNED {
            return 0;
        }

        let mut result = 0;
        let mut op2 = op;

        loop {
            result += 1;
            op2 = self.points[op2].next;

            if op2 == op {
                break;
            }
        }

        result
    }

    /// Signed area of the ring starting at `op`.
    pub fn ring_area(&self, op: usize) -> f64 {
        let mut result = 0.0;
        let mut op2 = op;

        loop {
            let prev = self.points[self.points[op2].prev].pt;
            let curr = self.points[op2].pt;
            result += (prev.y + curr.y) as f64 * (prev.x - curr.x) as f64;
            op2 = self.points[op2].next;

            if op2 == op {
                break;
            }
        }

        result * 0.5
    }

    pub fn ring_path(&self, op: usize) -> Path {
        let mut result = Vec::new();
        let mut op2 = op;

        loop {
            result.push(self.points[op2].pt);
            op2 = self.points[op2].next;

            if op2 == op {
                break;
            }
        }

        result
    }

    pub fn is_very_small_triangle(&self, op: usize) -> bool {
        let next = self.points[op].next;
        let prev = self.points[op].prev;

        self.points[next].next == prev
            && (self.pt(prev).really_close(&self.pt(next))
                || self.pt(op).really_close(&self.pt(next))
                || self.pt(op).really_close(&self.pt(prev)))
    }

    pub fn is_valid_closed_path(&self, op: usize) -> bool {
        op != UNASSIGNED
            && self.points[op].next != op
            && self.points[op].next != self.points[op].prev
            && !self.is_very_small_triangle(op)
    }

    pub fn point_in_op_polygon(&self, pt: &IntPoint, op: usize) -> PointInPolygonResult {
        if op == self.points[op].next || self.points[op].prev == self.points[op].next {
            return PointInPolygonResult::IsOutside;
        }

        let points = &self.points;
        let mut curr = op;

        point_in_ring(
            pt,
            (0..self.point_count(op)).map(move |_| {
                let prev = &points[points[curr].prev].pt;
                let this = &points[curr].pt;
                curr = points[curr].next;

                (prev, this)
            }),
        )
    }

    /// Ring points without the inner vertices of axis-aligned runs.
    fn clean_ring_path(&self, op: usize) -> Path {
        let mut result = Vec::new();
        let mut op2 = op;

        while self.next(op2) != op && {
            let (pt, next, prev) = (self.pt(op2), self.pt(self.next(op2)), self.pt(self.prev(op2)));
            (pt.x == next.x && pt.x == prev.x) || (pt.y == next.y && pt.y == prev.y)
        } {
            op2 = self.next(op2);
        }

        result.push(self.pt(op2));
        let mut prev_op = op2;
        op2 = self.next(op2);

        while op2 != op {
            let (pt, next, prev) = (self.pt(op2), self.pt(self.next(op2)), self.pt(prev_op));

            if (pt.x != next.x || pt.x != prev.x) && (pt.y != next.y || pt.y != prev.y) {
                result.push(pt);
                prev_op = op2;
            }

            op2 = self.next(op2);
        }

        result
    }

    /// Tolerant containment test. Two vertices in a row on the same side
    /// decide it; otherwise the axis-cleaned rings are compared and the
    /// midpoint of `op1`'s bounds has the last word.
    pub fn path1_inside_path2(&self, op1: usize, op2: usize) -> bool {
        let mut pip = PointInPolygonResult::IsOn;
        let mut op = op1;

        loop {
            match self.point_in_op_polygon(&self.points[op].pt, op2) {
                PointInPolygonResult::IsOutside if pip == PointInPolygonResult::IsOutside => return false,
                PointInPolygonResult::IsInside if pip == PointInPolygonResult::IsInside => return true,
                PointInPolygonResult::IsOn => {}
                result => pip = result,
            }

            op = self.points[op].next;

            if op == op1 {
                break;
            }
        }

        path2_contains_path1(&self.clean_ring_path(op1), &self.clean_ring_path(op2))
    }

    /// Walks the ring into a path, skipping repeated points. Closed rings start
    /// one step after `op`; reversed rings start at `op` and walk backwards.
    pub fn build_path(&self, op: usize, reverse: bool, is_open: bool) -> Option<Path> {
        if op == UNASSIGNED
            || self.points[op].next == op
            || (!is_open && self.points[op].next == self.points[op].prev)
        {
            return None;
        }

        let mut result = Vec::new();
        let (start, mut op2) = if reverse {
            (op, self.points[op].prev)
        } else {
            let start = self.points[op].next;
            (start, self.points[start].next)
        };
        let mut last_pt = self.points[start].pt;
        result.push(last_pt);

        while op2 != start {
            if self.points[op2].pt != last_pt {
                last_pt = self.points[op2].pt;
                result.push(last_pt);
            }

            op2 = if reverse {
                self.points[op2].prev
            } else {
                self.points[op2].next
            };
        }

        if !is_open {
            while result.len() > 1 && result.first() == result.last() {
                result.pop();
            }
        }

        let min_len = if is_open { 2 } else { 3 };

        if result.len() < min_len || (result.len() == 3 && !is_open && self.is_very_small_triangle(op2)) {
            return None;
        }

        Some(result)
    }
}
