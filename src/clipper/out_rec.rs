use crate::clipper::clipper_pool::ClipperPool;
use crate::clipper::constants::{MIN_SPLIT_AREA, MIN_TRIANGLE_AREA, UNASSIGNED};
use crate::clipper::out_pt::OutPt;
use crate::geometry::bound_rect::BoundRect;
use crate::geometry::point::{IntPoint, Path};
use crate::geometry::polygon::get_bounds;

/// One output contour under construction.
///
/// While hot, `front_edge`/`back_edge` are the active edges extending it.
/// `pts` is the point at the front edge; its `next` is the point at the back
/// edge. A record whose `pts` is unassigned has been merged away and resolves
/// through `owner`.
#[derive(Debug, Clone)]
pub struct OutRecord {
    pub idx: usize,
    pub owner: usize,
    pub front_edge: usize,
    pub back_edge: usize,
    pub pts: usize,
    pub poly_path: usize,
    pub bounds: BoundRect<i64>,
    pub path: Path,
    pub is_open: bool,
    pub splits: Vec<usize>,
    pub recursive_split: usize,
}

impl OutRecord {
    pub fn new(idx: usize) -> Self {
        Self {
            idx,
            owner: UNASSIGNED,
            front_edge: UNASSIGNED,
            back_edge: UNASSIGNED,
            pts: UNASSIGNED,
            poly_path: UNASSIGNED,
            bounds: BoundRect::empty(),
            path: Vec::new(),
            is_open: false,
            splits: Vec::new(),
            recursive_split: UNASSIGNED,
        }
    }
}

/// Arena of output records and their points.
pub struct OutRec {
    pub records: ClipperPool<OutRecord>,
    pub points: ClipperPool<OutPt>,
}

impl OutRec {
    pub fn new() -> Self {
        Self {
            records: ClipperPool::new(),
            points: ClipperPool::new(),
        }
    }

    pub fn create(&mut self) -> usize {
        let idx = self.records.len();

        self.records.get(OutRecord::new(idx))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn dispose(&mut self) {
        self.records.drain();
        self.points.drain();
    }

    /// First record on the owner chain that still holds points.
    pub fn real_out_rec(&self, mut outrec: usize) -> usize {
        while outrec != UNASSIGNED && self.records[outrec].pts == UNASSIGNED {
            outrec = self.records[outrec].owner;
        }

        outrec
    }

    /// Sets `new_owner` as owner of `outrec`, compressing dead links above
    /// `new_owner` and breaking any cycle that would form.
    pub fn set_owner(&mut self, outrec: usize, new_owner: usize) {
        loop {
            let owner = self.records[new_owner].owner;

            if owner == UNASSIGNED || self.records[owner].pts != UNASSIGNED {
                break;
            }

            self.records[new_owner].owner = self.records[owner].owner;
        }

        let mut tmp = new_owner;

        while tmp != UNASSIGNED && tmp != outrec {
            tmp = self.records[tmp].owner;
        }

        if tmp != UNASSIGNED {
            self.records[new_owner].owner = self.records[outrec].owner;
        }

        self.records[outrec].owner = new_owner;
    }

    /// `false` when `outrec` already owns `test_owner`, directly or not.
    pub fn is_valid_owner(&self, outrec: usize, mut test_owner: usize) -> bool {
        while test_owner != UNASSIGNED && test_owner != outrec {
            test_owner = self.records[test_owner].owner;
        }

        test_owner == UNASSIGNED
    }

    pub fn move_splits(&mut self, from: usize, to: usize) {
        let splits = std::mem::take(&mut self.records[from].splits);

        for split in splits {
            if split != to {
                self.records[to].splits.push(split);
            }
        }
    }

    pub fn fix_out_rec_pts(&mut self, outrec: usize) {
        let start = self.records[outrec].pts;
        let mut op = start;

        loop {
            self.points[op].outrec = outrec;
            op = self.points[op].next;

            if op == start {
                break;
            }
        }
    }

    pub fn swap_front_back_sides(&mut self, outrec: usize) {
        let record = &mut self.records[outrec];
        std::mem::swap(&mut record.front_edge, &mut record.back_edge);
        let pts = record.pts;
        self.records[outrec].pts = self.points[pts].next;
    }

    pub fn dispose_out_pts(&mut self, outrec: usize) {
        self.records[outrec].pts = UNASSIGNED;
    }

    /// Removes collinear vertices (only 180 degree spikes when
    /// `preserve_collinear` is set), then splits off self-intersections.
    pub fn clean_collinear(&mut self, outrec: usize, preserve_collinear: bool, using_polytree: bool) {
        let outrec = self.real_out_rec(outrec);

        if outrec == UNASSIGNED || self.records[outrec].is_open {
            return;
        }

        if !self.is_valid_closed_path(self.records[outrec].pts) {
            self.dispose_out_pts(outrec);
            return;
        }

        let mut start_op = self.records[outrec].pts;
        let mut op2 = start_op;

        loop {
            let prev_pt = self.pt(self.prev(op2));
            let curr_pt = self.pt(op2);
            let next_pt = self.pt(self.next(op2));

            if IntPoint::cross_product(&prev_pt, &curr_pt, &next_pt) == 0
                && (curr_pt == prev_pt
                    || curr_pt == next_pt
                    || !preserve_collinear
                    || IntPoint::dot_product(&prev_pt, &curr_pt, &next_pt) < 0)
            {
                if op2 == self.records[outrec].pts {
                    self.records[outrec].pts = self.prev(op2);
                }

                op2 = self.dispose_out_pt(op2);

                if !self.is_valid_closed_path(op2) {
                    self.dispose_out_pts(outrec);
                    return;
                }

                start_op = op2;
                continue;
            }

            op2 = self.next(op2);

            if op2 == start_op {
                break;
            }
        }

        self.fix_self_intersects(outrec, using_polytree);
    }

    fn fix_self_intersects(&mut self, outrec: usize, using_polytree: bool) {
        let mut op2 = self.records[outrec].pts;

        loop {
            let prev = self.prev(op2);
            let next = self.next(op2);
            let next_next = self.next(next);

            // triangles can't self-intersect
            if prev == next_next {
                break;
            }

            if IntPoint::segments_intersect(&self.pt(prev), &self.pt(op2), &self.pt(next), &self.pt(next_next)) {
                let after = self.next(next_next);

                // the same edge also crosses the one after: a rounding kink,
                // so pin a copy of `next_next` in front of `op2` and look again
                if IntPoint::segments_intersect(&self.pt(prev), &self.pt(op2), &self.pt(next_next), &self.pt(after)) {
                    let pin = self.duplicate_op(op2, false);
                    self.points[pin].pt = self.pt(next_next);

                    if op2 == self.records[outrec].pts {
                        break;
                    }

                    continue;
                }

                let pts = self.records[outrec].pts;

                if op2 == pts || next == pts {
                    self.records[outrec].pts = self.prev(pts);
                }

                self.do_split_op(outrec, op2, using_polytree);

                if self.records[outrec].pts == UNASSIGNED {
                    break;
                }

                op2 = self.records[outrec].pts;
                continue;
            }

            op2 = next;

            if op2 == self.records[outrec].pts {
                break;
            }
        }
    }

    /// `split_op.prev -> split_op` crosses `split_op.next -> split_op.next.next`.
    /// Cuts the small loop out and keeps it as its own record when it has area.
    fn do_split_op(&mut self, outrec: usize, split_op: usize, using_polytree: bool) {
        let prev_op = self.prev(split_op);
        let split_next = self.next(split_op);
        let next_next_op = self.next(split_next);
        self.records[outrec].pts = prev_op;

        let ip = IntPoint::segment_intersect_pt(
            &self.pt(prev_op),
            &self.pt(split_op),
            &self.pt(split_next),
            &self.pt(next_next_op),
        )
        .unwrap_or_else(|| self.pt(split_op));

        let area1 = self.ring_area(prev_op);
        let abs_area1 = area1.abs();

        if abs_area1 < MIN_SPLIT_AREA {
            self.dispose_out_pts(outrec);
            return;
        }

        let area2 = IntPoint::area_triangle(&ip, &self.pt(split_op), &self.pt(split_next));
        let abs_area2 = area2.abs();

        // unlink split_op and its successor, inserting the intersection point
        if ip == self.pt(prev_op) || ip == self.pt(next_next_op) {
            self.points[next_next_op].prev = prev_op;
            self.points[prev_op].next = next_next_op;
        } else {
            let new_op2 = self.points.get(OutPt::new(ip, outrec));
            self.points[new_op2].prev = prev_op;
            self.points[new_op2].next = next_next_op;
            self.points[next_next_op].prev = new_op2;
            self.points[prev_op].next = new_op2;
        }

        // area1 is the whole ring before the split and area2 the cut triangle;
        // matching signs mean the triangle is the larger part or there are
        // further intersections
        if abs_area2 >= MIN_TRIANGLE_AREA && (abs_area2 > abs_area1 || (area2 > 0.0) == (area1 > 0.0)) {
            let new_or = self.create();
            self.records[new_or].owner = self.records[outrec].owner;

            self.points[split_op].outrec = new_or;
            self.points[split_next].outrec = new_or;

            let new_op = self.points.get(OutPt::new(ip, new_or));
            self.points[new_op].prev = split_next;
            self.points[new_op].next = split_op;
            self.records[new_or].pts = new_op;
            self.points[split_op].prev = new_op;
            self.points[split_next].next = new_op;

            if using_polytree {
                if self.path1_inside_path2(prev_op, new_op) {
                    self.records[new_or].splits.push(outrec);
                } else {
                    self.records[outrec].splits.push(new_or);
                }
            }
        }
    }

    /// Caches the cleaned path and its bounds. `false` if nothing usable is left.
    pub fn check_bounds(
        &mut self,
        outrec: usize,
        reverse_solution: bool,
        preserve_collinear: bool,
        using_polytree: bool,
    ) -> bool {
        if self.records[outrec].pts == UNASSIGNED {
            return false;
        }

        if !self.records[outrec].bounds.is_empty() {
            return true;
        }

        self.clean_collinear(outrec, preserve_collinear, using_polytree);

        let pts = self.records[outrec].pts;

        if pts == UNASSIGNED {
            return false;
        }

        match self.build_path(pts, reverse_solution, false) {
            Some(path) => {
                self.records[outrec].bounds = get_bounds(&path);
                self.records[outrec].path = path;
                true
            }
            None => false,
        }
    }
}

impl Default for OutRec {
    fn default() -> Self {
        Self::new()
    }
}
