use crate::clipper::constants::UNASSIGNED;
use crate::clipper::out_rec::OutRec;

/// Run of same-y output points left behind by a horizontal edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorzSegment {
    pub left_op: usize,
    pub right_op: usize,
    pub left_to_right: bool,
}

impl HorzSegment {
    pub fn new(op: usize) -> Self {
        Self {
            left_op: op,
            right_op: UNASSIGNED,
            left_to_right: true,
        }
    }
}

/// Two output points to be spliced together once the sweep is done.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorzJoin {
    pub op1: usize,
    pub op2: usize,
}

/// Trial horizontal segments collected during a scanline and the joins they
/// are promoted to.
pub struct Join {
    segments: Vec<HorzSegment>,
    joins: Vec<HorzJoin>,
}

impl Join {
    pub fn new() -> Self {
        Self {
            segments: Vec::new(),
            joins: Vec::new(),
        }
    }

    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    pub fn join_count(&self) -> usize {
        self.joins.len()
    }

    pub fn joins(&self) -> &[HorzJoin] {
        &self.joins
    }

    pub fn dispose(&mut self) {
        self.segments.clear();
        self.joins.clear();
    }

    pub fn add_trial_horz_join(&mut self, op: usize, out_rec: &OutRec) {
        let outrec = out_rec.points[op].outrec;

        if out_rec.records[outrec].is_open {
            return;
        }

        self.segments.push(HorzSegment::new(op));
    }

    /// Extends the segment at `index` over its whole horizontal run and orients
    /// it. Each output point may anchor one segment only.
    fn update_horz_segment(&mut self, index: usize, out_rec: &mut OutRec) -> bool {
        let op = self.segments[index].left_op;
        let outrec = out_rec.real_out_rec(out_rec.points[op].outrec);
        let has_edges = outrec != UNASSIGNED && out_rec.records[outrec].front_edge != UNASSIGNED;
        let curr_y = out_rec.pt(op).y;
        let mut op_p = op;
        let mut op_n = op;

        if has_edges {
            let op_a = out_rec.records[outrec].pts;
            let op_z = out_rec.next(op_a);

            while op_p != op_z && out_rec.pt(out_rec.prev(op_p)).y == curr_y {
                op_p = out_rec.prev(op_p);
            }

            while op_n != op_a && out_rec.pt(out_rec.next(op_n)).y == curr_y {
                op_n = out_rec.next(op_n);
            }
        } else {
            while out_rec.prev(op_p) != op_n && out_rec.pt(out_rec.prev(op_p)).y == curr_y {
                op_p = out_rec.prev(op_p);
            }

            while out_rec.next(op_n) != op_p && out_rec.pt(out_rec.next(op_n)).y == curr_y {
                op_n = out_rec.next(op_n);
            }
        }

        let x_p = out_rec.pt(op_p).x;
        let x_n = out_rec.pt(op_n).x;
        let segment = &mut self.segments[index];

        if x_p == x_n {
            segment.right_op = UNASSIGNED;
            return false;
        }

        if x_p < x_n {
            segment.left_op = op_p;
            segment.right_op = op_n;
            segment.left_to_right = true;
        } else {
            segment.left_op = op_n;
            segment.right_op = op_p;
            segment.left_to_right = false;
        }

        if out_rec.points[segment.left_op].horz.is_some() {
            segment.right_op = UNASSIGNED;
            return false;
        }

        out_rec.points[segment.left_op].horz = Some(index);

        true
    }

    /// Pairs overlapping segments running in opposite directions and records a
    /// join for each pair. The segment list is emptied afterwards.
    pub fn convert_horz_segs_to_joins(&mut self, out_rec: &mut OutRec) {
        let mut valid = 0;

        for i in 0..self.segments.len() {
            if self.update_horz_segment(i, out_rec) {
                valid += 1;
            }
        }

        if valid < 2 {
            self.segments.clear();
            return;
        }

        self.segments.sort_by(|a, b| {
            (a.right_op == UNASSIGNED)
                .cmp(&(b.right_op == UNASSIGNED))
                .then_with(|| out_rec.pt(a.left_op).x.cmp(&out_rec.pt(b.left_op).x))
        });

        for i in 0..valid - 1 {
            for j in i + 1..valid {
                let mut hs1 = self.segments[i];
                let mut hs2 = self.segments[j];

                if out_rec.pt(hs2.left_op).x >= out_rec.pt(hs1.right_op).x
                    || hs2.left_to_right == hs1.left_to_right
                    || out_rec.pt(hs2.right_op).x <= out_rec.pt(hs1.left_op).x
                {
                    continue;
                }

                let curr_y = out_rec.pt(hs1.left_op).y;

                let join = if hs1.left_to_right {
                    while out_rec.pt(out_rec.next(hs1.left_op)).y == curr_y
                        && out_rec.pt(out_rec.next(hs1.left_op)).x <= out_rec.pt(hs2.left_op).x
                    {
                        hs1.left_op = out_rec.next(hs1.left_op);
                    }

                    while out_rec.pt(out_rec.prev(hs2.left_op)).y == curr_y
                        && out_rec.pt(out_rec.prev(hs2.left_op)).x <= out_rec.pt(hs1.left_op).x
                    {
                        hs2.left_op = out_rec.prev(hs2.left_op);
                    }

                    HorzJoin {
                        op1: out_rec.duplicate_op(hs1.left_op, true),
                        op2: out_rec.duplicate_op(hs2.left_op, false),
                    }
                } else {
                    while out_rec.pt(out_rec.prev(hs1.left_op)).y == curr_y
                        && out_rec.pt(out_rec.prev(hs1.left_op)).x <= out_rec.pt(hs2.left_op).x
                    {
                        hs1.left_op = out_rec.prev(hs1.left_op);
                    }

                    while out_rec.pt(out_rec.next(hs2.left_op)).y == curr_y
                        && out_rec.pt(out_rec.next(hs2.left_op)).x <= out_rec.pt(hs1.left_op).x
                    {
                        hs2.left_op = out_rec.next(hs2.left_op);
                    }

                    HorzJoin {
                        op1: out_rec.duplicate_op(hs2.left_op, true),
                        op2: out_rec.duplicate_op(hs1.left_op, false),
                    }
                };

                self.segments[i] = hs1;
                self.segments[j] = hs2;
                self.joins.push(join);
            }
        }

        self.segments.clear();
    }

    /// Splices every recorded join. Joining two points of the same ring splits
    /// it in two; joining two rings merges the second into the first.
    pub fn process_horz_joins(&mut self, out_rec: &mut OutRec, using_polytree: bool) {
        let joins = std::mem::take(&mut self.joins);

        for join in joins {
            let or1 = out_rec.real_out_rec(out_rec.points[join.op1].outrec);
            let mut or2 = out_rec.real_out_rec(out_rec.points[join.op2].outrec);

            if or1 == UNASSIGNED || or2 == UNASSIGNED {
                continue;
            }

            let op1b = out_rec.next(join.op1);
            let op2b = out_rec.prev(join.op2);
            out_rec.points[join.op1].next = join.op2;
            out_rec.points[join.op2].prev = join.op1;
            out_rec.points[op1b].prev = op2b;
            out_rec.points[op2b].next = op1b;

            if or1 == or2 {
                or2 = out_rec.create();
                out_rec.records[or2].pts = op1b;
                out_rec.fix_out_rec_pts(or2);

                // or1's head may have moved into the split-off ring
                let or1_pts = out_rec.records[or1].pts;
                if out_rec.points[or1_pts].outrec == or2 {
                    out_rec.records[or1].pts = join.op1;
                    out_rec.points[join.op1].outrec = or1;
                }

                if using_polytree {
                    let pts1 = out_rec.records[or1].pts;
                    let pts2 = out_rec.records[or2].pts;

                    if out_rec.path1_inside_path2(pts1, pts2) {
                        out_rec.records[or1].pts = pts2;
                        out_rec.records[or2].pts = pts1;
                        out_rec.fix_out_rec_pts(or1);
                        out_rec.fix_out_rec_pts(or2);
                        out_rec.records[or2].owner = or1;
                    } else if out_rec.path1_inside_path2(pts2, pts1) {
                        out_rec.records[or2].owner = or1;
                    } else {
                        out_rec.records[or2].owner = out_rec.records[or1].owner;
                    }

                    out_rec.records[or1].splits.push(or2);
                } else {
                    out_rec.records[or2].owner = or1;
                }
            } else {
                out_rec.records[or2].pts = UNASSIGNED;

                if using_polytree {
                    out_rec.set_owner(or2, or1);
                    out_rec.move_splits(or2, or1);
                } else {
                    out_rec.records[or2].owner = or1;
                }
            }
        }
    }
}

impl Default for Join {
    fn default() -> Self {
        Self::new()
    }
}
