use log::{debug, trace, warn};

use crate::clipper::{
    clipper_base::{ClipperBase, SweepContext, Vertex},
    constants::{JOIN_LEFT_DIST_SQRD, JOIN_RIGHT_DIST_SQRD, STEEP_DX, UNASSIGNED},
    enums::{ClipType, JoinWith, PolyFillType, PolyType},
    intersect_node::IntersectNode,
    join::Join,
    out_pt::OutPt,
    out_rec::OutRec,
    poly_tree::PolyTree,
    scanbeam::Scanbeam,
    t_edge::{ActiveEdge, TEdge},
};
use crate::geometry::point::{IntPoint, Path, Paths};

/// Sweep-line boolean engine.
///
/// Paths are accumulated with the `add_*` methods and survive any number of
/// `execute` calls until `clear`. Every transient structure of a sweep lives
/// in an index arena owned by one of the managers below and is dropped when
/// `execute` returns.
pub struct Clipper {
    pub(crate) base: ClipperBase,
    pub(crate) scanbeam: Scanbeam,
    pub(crate) t_edge: TEdge,
    pub(crate) out_rec: OutRec,
    pub(crate) intersect_list: Vec<IntersectNode>,
    pub(crate) join: Join,
    pub(crate) ctx: SweepContext,
    preserve_collinear: bool,
    reverse_solution: bool,
    succeeded: bool,
}

impl Clipper {
    pub fn new() -> Self {
        Self {
            base: ClipperBase::new(),
            scanbeam: Scanbeam::new(),
            t_edge: TEdge::new(),
            out_rec: OutRec::new(),
            intersect_list: Vec::new(),
            join: Join::new(),
            ctx: SweepContext::new(ClipType::Union, PolyFillType::NonZero),
            preserve_collinear: true,
            reverse_solution: false,
            succeeded: true,
        }
    }

    pub fn preserve_collinear(&self) -> bool {
        self.preserve_collinear
    }

    /// When `false`, collinear vertices are dropped from the output. 180 degree
    /// spikes are always removed.
    pub fn set_preserve_collinear(&mut self, value: bool) {
        self.preserve_collinear = value;
    }

    pub fn reverse_solution(&self) -> bool {
        self.reverse_solution
    }

    /// Emits outer contours with negative instead of positive area.
    pub fn set_reverse_solution(&mut self, value: bool) {
        self.reverse_solution = value;
    }

    pub fn add_path(&mut self, path: &[IntPoint], poly_type: PolyType, is_open: bool) -> bool {
        if is_open && poly_type == PolyType::Clip {
            warn!("open paths can only be added as subjects");
            return false;
        }

        let added = self.base.add_path(path, poly_type, is_open);

        if !added {
            trace!("dropped degenerate {:?} path of {} points", poly_type, path.len());
        }

        added
    }

    pub fn add_paths(&mut self, paths: &[Path], poly_type: PolyType, is_open: bool) -> bool {
        let mut result = false;

        for path in paths {
            if self.add_path(path, poly_type, is_open) {
                result = true;
            }
        }

        result
    }

    pub fn add_subject(&mut self, paths: &[Path]) -> bool {
        self.add_paths(paths, PolyType::Subject, false)
    }

    pub fn add_open_subject(&mut self, paths: &[Path]) -> bool {
        self.add_paths(paths, PolyType::Subject, true)
    }

    pub fn add_clip(&mut self, paths: &[Path]) -> bool {
        self.add_paths(paths, PolyType::Clip, false)
    }

    /// Discards every added path.
    pub fn clear(&mut self) {
        self.clean_up();
        self.base.clear();
    }

    /// Runs the sweep and writes closed results to `closed` and open results to
    /// `open`. On failure both are left empty and `false` is returned.
    pub fn execute(
        &mut self,
        clip_type: ClipType,
        fill_rule: PolyFillType,
        closed: &mut Paths,
        open: &mut Paths,
    ) -> bool {
        closed.clear();
        open.clear();

        let succeeded = self.execute_internal(clip_type, fill_rule, false);

        if succeeded {
            self.build_paths(closed, open);
            debug!(
                "{:?}/{:?}: {} closed, {} open paths from {} output records",
                clip_type,
                fill_rule,
                closed.len(),
                open.len(),
                self.out_rec.len()
            );
        } else {
            warn!("{:?}/{:?}: sweep failed, solution discarded", clip_type, fill_rule);
        }

        self.clean_up();
        succeeded
    }

    /// Like [`Clipper::execute`] but nests closed results into `tree`.
    pub fn execute_tree(
        &mut self,
        clip_type: ClipType,
        fill_rule: PolyFillType,
        tree: &mut PolyTree,
        open: &mut Paths,
    ) -> bool {
        tree.clear();
        open.clear();

        let succeeded = self.execute_internal(clip_type, fill_rule, true);

        if succeeded {
            self.build_tree(tree, open);
            debug!(
                "{:?}/{:?}: tree of {} contours, {} open paths",
                clip_type,
                fill_rule,
                tree.count(),
                open.len()
            );
        } else {
            warn!("{:?}/{:?}: sweep failed, tree discarded", clip_type, fill_rule);
        }

        self.clean_up();
        succeeded
    }

    fn clean_up(&mut self) {
        self.t_edge.dispose();
        self.out_rec.dispose();
        self.join.dispose();
        self.intersect_list.clear();
        self.scanbeam.clean();
    }

    fn reset(&mut self) {
        self.base.local_minima.reset();
        self.scanbeam.clean();

        for local_minimum in self.base.local_minima.iter() {
            self.scanbeam.insert(local_minimum.pt.y);
        }

        self.t_edge.dispose();
        self.succeeded = true;
    }

    fn execute_internal(&mut self, clip_type: ClipType, fill_rule: PolyFillType, using_polytree: bool) -> bool {
        self.ctx = SweepContext {
            clip_type,
            fill_rule,
            preserve_collinear: self.preserve_collinear,
            reverse_solution: self.reverse_solution,
            using_polytree,
            bot_y: 0,
        };
        self.reset();

        trace!(
            "sweep over {} vertices, {} local minima",
            self.base.vertices.len(),
            self.base.local_minima.len()
        );

        let mut y = match self.scanbeam.pop() {
            Some(y) => y,
            None => return true,
        };

        while self.succeeded {
            self.insert_local_minima_into_ael(y);

            while let Some(e) = self.t_edge.pop_horz() {
                self.do_horizontal(e);
            }

            if self.join.segment_count() > 0 {
                self.join.convert_horz_segs_to_joins(&mut self.out_rec);
            }

            self.ctx.bot_y = y;

            y = match self.scanbeam.pop() {
                Some(y) => y,
                None => break,
            };

            self.do_intersections(y);
            self.do_top_of_scanbeam(y);

            while let Some(e) = self.t_edge.pop_horz() {
                self.do_horizontal(e);
            }
        }

        if self.succeeded {
            trace!("reconciling {} horizontal joins", self.join.join_count());
            self.join.process_horz_joins(&mut self.out_rec, using_polytree);
        }

        self.succeeded
    }

    #[inline(always)]
    fn is_front(&self, e: usize) -> bool {
        let outrec = self.t_edge[e].outrec;

        outrec != UNASSIGNED && self.out_rec.records[outrec].front_edge == e
    }

    #[inline(always)]
    fn set_sides(&mut self, outrec: usize, start_edge: usize, end_edge: usize) {
        let record = &mut self.out_rec.records[outrec];
        record.front_edge = start_edge;
        record.back_edge = end_edge;
    }

    /// Detaches an open-path edge from its output record.
    fn release_open_edge(&mut self, e: usize) {
        let outrec = self.t_edge[e].outrec;

        if self.is_front(e) {
            self.out_rec.records[outrec].front_edge = UNASSIGNED;
        } else {
            self.out_rec.records[outrec].back_edge = UNASSIGNED;
        }

        self.t_edge[e].outrec = UNASSIGNED;
    }

    fn insert_local_minima_into_ael(&mut self, bot_y: i64) {
        while let Some(index) = self.base.local_minima.pop(bot_y) {
            let local_minimum = *self.base.local_minima.get(index);
            let vertex = self.base.vertices[local_minimum.vertex];

            // the descending bound runs backwards through the ring
            let mut left_bound = if vertex.flags & Vertex::OPEN_START != 0 {
                UNASSIGNED
            } else {
                self.create_bound(index, vertex.prev, -1)
            };

            let mut right_bound = if vertex.flags & Vertex::OPEN_END != 0 {
                UNASSIGNED
            } else {
                self.create_bound(index, vertex.next, 1)
            };

            if left_bound != UNASSIGNED && right_bound != UNASSIGNED {
                let left = &self.t_edge[left_bound];
                let right = &self.t_edge[right_bound];

                let should_swap = if left.is_horizontal() {
                    left.is_heading_right_horz()
                } else if right.is_horizontal() {
                    right.is_heading_left_horz()
                } else {
                    left.dx < right.dx
                };

                if should_swap {
                    std::mem::swap(&mut left_bound, &mut right_bound);
                }
            } else if left_bound == UNASSIGNED {
                left_bound = right_bound;
                right_bound = UNASSIGNED;
            }

            self.t_edge[left_bound].is_left_bound = true;
            self.t_edge.insert_left_edge(left_bound, &self.base.vertices);

            let contributing = if self.t_edge[left_bound].is_open {
                self.t_edge.set_wind_count_for_open_path_edge(left_bound, &self.ctx);
                self.t_edge.is_contributing_open(left_bound, &self.ctx)
            } else {
                self.t_edge.set_wind_count_for_closed_path_edge(left_bound, &self.ctx);
                self.t_edge.is_contributing_closed(left_bound, &self.ctx)
            };

            let left_bot = self.t_edge[left_bound].bot;

            if right_bound != UNASSIGNED {
                let wind_cnt = self.t_edge[left_bound].wind_cnt;
                let wind_cnt2 = self.t_edge[left_bound].wind_cnt2;
                let right = &mut self.t_edge[right_bound];
                right.is_left_bound = false;
                right.wind_cnt = wind_cnt;
                right.wind_cnt2 = wind_cnt2;
                self.t_edge.insert_right_edge(left_bound, right_bound);

                if contributing {
                    self.add_local_min_poly(left_bound, right_bound, left_bot, true);

                    if !self.t_edge[left_bound].is_horizontal() {
                        self.check_join_left(left_bound, left_bot, false);
                    }
                }

                loop {
                    let next = self.t_edge[right_bound].next_in_ael;

                    if next == UNASSIGNED || !self.t_edge.is_valid_ael_order(next, right_bound, &self.base.vertices) {
                        break;
                    }

                    let bot = self.t_edge[right_bound].bot;
                    self.intersect_edges(right_bound, next, bot);
                    self.t_edge.swap_positions_in_ael(right_bound, next);
                }

                if self.t_edge[right_bound].is_horizontal() {
                    self.t_edge.push_horz(right_bound);
                } else {
                    let bot = self.t_edge[right_bound].bot;
                    self.check_join_right(right_bound, bot, false);
                    self.scanbeam.insert(self.t_edge[right_bound].top.y);
                }
            } else if contributing {
                self.start_open_path(left_bound, left_bot);
            }

            if self.t_edge[left_bound].is_horizontal() {
                self.t_edge.push_horz(left_bound);
            } else {
                self.scanbeam.insert(self.t_edge[left_bound].top.y);
            }
        }
    }

    fn create_bound(&mut self, local_min: usize, vertex_top: usize, wind_dx: i32) -> usize {
        let local_minimum = *self.base.local_minima.get(local_min);

        self.t_edge.create(ActiveEdge::new(
            local_minimum.pt,
            vertex_top,
            self.base.vertices[vertex_top].pt,
            wind_dx,
            local_min,
            local_minimum.vertex,
            local_minimum.poly_type,
            local_minimum.is_open,
        ))
    }

    /// Opens a new output record bounded by `e1` and `e2`. Which edge becomes
    /// the front depends on the nearest hot edge to the left so that outer
    /// contours and holes come out with opposite orientations.
    pub(crate) fn add_local_min_poly(&mut self, e1: usize, e2: usize, pt: IntPoint, is_new: bool) -> usize {
        let outrec = self.out_rec.create();
        self.t_edge[e1].outrec = outrec;
        self.t_edge[e2].outrec = outrec;

        if self.t_edge[e1].is_open {
            self.out_rec.records[outrec].owner = UNASSIGNED;
            self.out_rec.records[outrec].is_open = true;

            if self.t_edge[e1].wind_dx > 0 {
                self.set_sides(outrec, e1, e2);
            } else {
                self.set_sides(outrec, e2, e1);
            }
        } else {
            let prev_hot_edge = self.t_edge.prev_hot_edge(e1);

            if prev_hot_edge != UNASSIGNED {
                if self.ctx.using_polytree {
                    let owner = self.t_edge[prev_hot_edge].outrec;
                    self.out_rec.set_owner(outrec, owner);
                }

                if self.is_front(prev_hot_edge) == is_new {
                    self.set_sides(outrec, e2, e1);
                } else {
                    self.set_sides(outrec, e1, e2);
                }
            } else {
                self.out_rec.records[outrec].owner = UNASSIGNED;

                if is_new {
                    self.set_sides(outrec, e1, e2);
                } else {
                    self.set_sides(outrec, e2, e1);
                }
            }
        }

        let op = self.out_rec.create_point(pt, outrec);
        self.out_rec.records[outrec].pts = op;

        op
    }

    /// Closes the record(s) of `e1` and `e2` at `pt`. `None` when the two edges
    /// are on the same side of their records, which leaves the sweep failed.
    pub(crate) fn add_local_max_poly(&mut self, e1: usize, e2: usize, pt: IntPoint) -> Option<usize> {
        if self.t_edge[e1].is_joined() {
            self.split(e1, pt);
        }

        if self.t_edge[e2].is_joined() {
            self.split(e2, pt);
        }

        if self.is_front(e1) == self.is_front(e2) {
            if self.t_edge[e1].is_open_end(&self.base.vertices) {
                self.out_rec.swap_front_back_sides(self.t_edge[e1].outrec);
            } else if self.t_edge[e2].is_open_end(&self.base.vertices) {
                self.out_rec.swap_front_back_sides(self.t_edge[e2].outrec);
            } else {
                warn!("edges {} and {} close a contour from the same side at {:?}", e1, e2, pt);
                self.succeeded = false;
                return None;
            }
        }

        let result = self.add_out_pt(e1, pt);
        let or1 = self.t_edge[e1].outrec;
        let or2 = self.t_edge[e2].outrec;

        if or1 == or2 {
            self.out_rec.records[or1].pts = result;

            if self.ctx.using_polytree {
                let e = self.t_edge.prev_hot_edge(e1);

                if e == UNASSIGNED {
                    self.out_rec.records[or1].owner = UNASSIGNED;
                } else {
                    let owner = self.t_edge[e].outrec;
                    self.out_rec.set_owner(or1, owner);
                }
            }

            self.uncouple_out_rec(e1);

            let owner = self.out_rec.records[or1].owner;

            if owner != UNASSIGNED && self.out_rec.records[owner].front_edge == UNASSIGNED {
                self.out_rec.records[or1].owner = self.out_rec.real_out_rec(owner);
            }

            return Some(self.out_rec.records[or1].pts);
        }

        // keep the orientation of the lower record
        if self.t_edge[e1].is_open {
            if self.t_edge[e1].wind_dx < 0 {
                self.join_outrec_paths(e1, e2);
            } else {
                self.join_outrec_paths(e2, e1);
            }
        } else if self.out_rec.records[or1].idx < self.out_rec.records[or2].idx {
            self.join_outrec_paths(e1, e2);
        } else {
            self.join_outrec_paths(e2, e1);
        }

        Some(result)
    }

    /// Appends `e2`'s ring onto `e1`'s and retires `e2`'s record.
    fn join_outrec_paths(&mut self, e1: usize, e2: usize) {
        let or1 = self.t_edge[e1].outrec;
        let or2 = self.t_edge[e2].outrec;
        let p1_st = self.out_rec.records[or1].pts;
        let p2_st = self.out_rec.records[or2].pts;
        let p1_end = self.out_rec.next(p1_st);
        let p2_end = self.out_rec.next(p2_st);

        if self.is_front(e1) {
            self.out_rec.points[p2_end].prev = p1_st;
            self.out_rec.points[p1_st].next = p2_end;
            self.out_rec.points[p2_st].next = p1_end;
            self.out_rec.points[p1_end].prev = p2_st;
            self.out_rec.records[or1].pts = p2_st;

            let front = self.out_rec.records[or2].front_edge;
            self.out_rec.records[or1].front_edge = front;

            if front != UNASSIGNED {
                self.t_edge[front].outrec = or1;
            }
        } else {
            self.out_rec.points[p1_end].prev = p2_st;
            self.out_rec.points[p2_st].next = p1_end;
            self.out_rec.points[p1_st].next = p2_end;
            self.out_rec.points[p2_end].prev = p1_st;

            let back = self.out_rec.records[or2].back_edge;
            self.out_rec.records[or1].back_edge = back;

            if back != UNASSIGNED {
                self.t_edge[back].outrec = or1;
            }
        }

        let record = &mut self.out_rec.records[or2];
        record.front_edge = UNASSIGNED;
        record.back_edge = UNASSIGNED;
        record.pts = UNASSIGNED;

        if self.t_edge[e1].is_open_end(&self.base.vertices) {
            self.out_rec.records[or2].pts = self.out_rec.records[or1].pts;
            self.out_rec.records[or1].pts = UNASSIGNED;
        } else {
            self.out_rec.set_owner(or2, or1);
        }

        self.t_edge[e1].outrec = UNASSIGNED;
        self.t_edge[e2].outrec = UNASSIGNED;
    }

    /// Adds `pt` at the end of the ring that `e` extends. Returns the existing
    /// point when `pt` repeats it.
    pub(crate) fn add_out_pt(&mut self, e: usize, pt: IntPoint) -> usize {
        let outrec = self.t_edge[e].outrec;
        let to_front = self.is_front(e);
        let op_front = self.out_rec.records[outrec].pts;
        let op_back = self.out_rec.next(op_front);

        if to_front {
            if pt == self.out_rec.pt(op_front) {
                return op_front;
            }
        } else if pt == self.out_rec.pt(op_back) {
            return op_back;
        }

        let new_op = self.out_rec.points.get(OutPt::new(pt, outrec));
        self.out_rec.points[op_back].prev = new_op;
        self.out_rec.points[new_op].prev = op_front;
        self.out_rec.points[new_op].next = op_back;
        self.out_rec.points[op_front].next = new_op;

        if to_front {
            self.out_rec.records[outrec].pts = new_op;
        }

        new_op
    }

    fn start_open_path(&mut self, e: usize, pt: IntPoint) -> usize {
        let outrec = self.out_rec.create();
        self.out_rec.records[outrec].is_open = true;

        if self.t_edge[e].wind_dx > 0 {
            self.set_sides(outrec, e, UNASSIGNED);
        } else {
            self.set_sides(outrec, UNASSIGNED, e);
        }

        self.t_edge[e].outrec = outrec;

        let op = self.out_rec.create_point(pt, outrec);
        self.out_rec.records[outrec].pts = op;

        op
    }

    fn uncouple_out_rec(&mut self, e: usize) {
        let outrec = self.t_edge[e].outrec;

        if outrec == UNASSIGNED {
            return;
        }

        let front = self.out_rec.records[outrec].front_edge;
        let back = self.out_rec.records[outrec].back_edge;

        if front != UNASSIGNED {
            self.t_edge[front].outrec = UNASSIGNED;
        }

        if back != UNASSIGNED {
            self.t_edge[back].outrec = UNASSIGNED;
        }

        self.set_sides(outrec, UNASSIGNED, UNASSIGNED);
    }

    fn swap_outrecs(&mut self, e1: usize, e2: usize) {
        let or1 = self.t_edge[e1].outrec;
        let or2 = self.t_edge[e2].outrec;

        if or1 == or2 {
            if or1 != UNASSIGNED {
                let record = &mut self.out_rec.records[or1];
                std::mem::swap(&mut record.front_edge, &mut record.back_edge);
            }

            return;
        }

        if or1 != UNASSIGNED {
            let record = &mut self.out_rec.records[or1];

            if record.front_edge == e1 {
                record.front_edge = e2;
            } else {
                record.back_edge = e2;
            }
        }

        if or2 != UNASSIGNED {
            let record = &mut self.out_rec.records[or2];

            if record.front_edge == e2 {
                record.front_edge = e1;
            } else {
                record.back_edge = e1;
            }
        }

        self.t_edge[e1].outrec = or2;
        self.t_edge[e2].outrec = or1;
    }

    /// Separates a joined pair at `pt`, starting a fresh contour between them.
    fn split(&mut self, e: usize, pt: IntPoint) {
        if self.t_edge[e].join_with == JoinWith::Right {
            let next = self.t_edge[e].next_in_ael;
            self.t_edge[e].join_with = JoinWith::NoJoin;
            self.t_edge[next].join_with = JoinWith::NoJoin;
            self.add_local_min_poly(e, next, pt, true);
        } else {
            let prev = self.t_edge[e].prev_in_ael;
            self.t_edge[e].join_with = JoinWith::NoJoin;
            self.t_edge[prev].join_with = JoinWith::NoJoin;
            self.add_local_min_poly(prev, e, pt, true);
        }
    }

    fn can_join(&self, e: usize, other: usize, pt: &IntPoint, check_curr_x: bool, max_dist_sqrd: f64) -> bool {
        let edge = &self.t_edge[e];
        let neighbour = &self.t_edge[other];

        if !edge.is_hot()
            || !neighbour.is_hot()
            || edge.is_horizontal()
            || neighbour.is_horizontal()
            || edge.is_open
            || neighbour.is_open
        {
            return false;
        }

        // trivial touches right at an edge end
        if (pt.y < edge.top.y + 2 || pt.y < neighbour.top.y + 2) && (edge.bot.y > pt.y || neighbour.bot.y > pt.y) {
            return false;
        }

        if check_curr_x {
            if pt.perpendic_dist_from_line_sqrd(&neighbour.bot, &neighbour.top) > max_dist_sqrd {
                return false;
            }
        } else if edge.curr_x != neighbour.curr_x {
            return false;
        }

        IntPoint::cross_product(&edge.top, pt, &neighbour.top) == 0
    }

    /// Merges `e` with the collinear hot edge on its left.
    pub(crate) fn check_join_left(&mut self, e: usize, pt: IntPoint, check_curr_x: bool) {
        let prev = self.t_edge[e].prev_in_ael;

        if prev == UNASSIGNED || !self.can_join(e, prev, &pt, check_curr_x, JOIN_LEFT_DIST_SQRD) {
            return;
        }

        let or_e = self.out_rec.records[self.t_edge[e].outrec].idx;
        let or_prev = self.out_rec.records[self.t_edge[prev].outrec].idx;

        if or_e == or_prev {
            self.add_local_max_poly(prev, e, pt);
        } else if or_e < or_prev {
            self.join_outrec_paths(e, prev);
        } else {
            self.join_outrec_paths(prev, e);
        }

        self.t_edge[prev].join_with = JoinWith::Right;
        self.t_edge[e].join_with = JoinWith::Left;
    }

    /// Merges `e` with the collinear hot edge on its right.
    pub(crate) fn check_join_right(&mut self, e: usize, pt: IntPoint, check_curr_x: bool) {
        let next = self.t_edge[e].next_in_ael;

        if next == UNASSIGNED || !self.can_join(e, next, &pt, check_curr_x, JOIN_RIGHT_DIST_SQRD) {
            return;
        }

        let or_e = self.out_rec.records[self.t_edge[e].outrec].idx;
        let or_next = self.out_rec.records[self.t_edge[next].outrec].idx;

        if or_e == or_next {
            self.add_local_max_poly(e, next, pt);
        } else if or_e < or_next {
            self.join_outrec_paths(e, next);
        } else {
            self.join_outrec_paths(next, e);
        }

        self.t_edge[e].join_with = JoinWith::Right;
        self.t_edge[next].join_with = JoinWith::Left;
    }

    /// Crossing of an open path edge with a closed one: the open edge toggles
    /// in or out of the solution when it passes a contributing boundary.
    fn intersect_open_edges(&mut self, e1: usize, e2: usize, pt: IntPoint) {
        if self.t_edge[e1].is_open && self.t_edge[e2].is_open {
            return;
        }

        let (edge_o, edge_c) = if self.t_edge[e1].is_open { (e1, e2) } else { (e2, e1) };

        if self.t_edge[edge_c].is_joined() {
            self.split(edge_c, pt);
        }

        let closed = &self.t_edge[edge_c];

        if closed.wind_cnt.abs() != 1 {
            return;
        }

        match self.ctx.clip_type {
            ClipType::Union => {
                if !closed.is_hot() {
                    return;
                }
            }
            _ => {
                if closed.poly_type == PolyType::Subject {
                    return;
                }
            }
        }

        match self.ctx.fill_rule {
            PolyFillType::Positive if closed.wind_cnt != 1 => return,
            PolyFillType::Negative if closed.wind_cnt != -1 => return,
            _ => {}
        }

        if self.t_edge[edge_o].is_hot() {
            self.add_out_pt(edge_o, pt);
            self.release_open_edge(edge_o);
            return;
        }

        // horizontals can pass under open paths at a local minimum
        let local_min_vertex = self.base.vertices[self.t_edge[edge_o].local_min_vertex];

        if pt == local_min_vertex.pt && !local_min_vertex.is_open_end() {
            let e3 = self.t_edge.find_edge_with_matching_loc_min(edge_o);

            if e3 != UNASSIGNED && self.t_edge[e3].is_hot() {
                let outrec = self.t_edge[e3].outrec;
                self.t_edge[edge_o].outrec = outrec;

                if self.t_edge[edge_o].wind_dx > 0 {
                    self.set_sides(outrec, edge_o, e3);
                } else {
                    self.set_sides(outrec, e3, edge_o);
                }

                return;
            }
        }

        self.start_open_path(edge_o, pt);
    }

    /// Updates winding counts of two crossing edges and emits whatever output
    /// the crossing implies.
    pub(crate) fn intersect_edges(&mut self, e1: usize, e2: usize, pt: IntPoint) {
        if self.base.has_open_paths && (self.t_edge[e1].is_open || self.t_edge[e2].is_open) {
            self.intersect_open_edges(e1, e2, pt);
            return;
        }

        if self.t_edge[e1].is_joined() {
            self.split(e1, pt);
        }

        if self.t_edge[e2].is_joined() {
            self.split(e2, pt);
        }

        let fill_rule = self.ctx.fill_rule;
        let clip_type = self.ctx.clip_type;
        let same_type = self.t_edge[e1].poly_type == self.t_edge[e2].poly_type;
        let e1_wind_dx = self.t_edge[e1].wind_dx;
        let e2_wind_dx = self.t_edge[e2].wind_dx;

        if same_type {
            if fill_rule == PolyFillType::EvenOdd {
                let wind_cnt = self.t_edge[e1].wind_cnt;
                self.t_edge[e1].wind_cnt = self.t_edge[e2].wind_cnt;
                self.t_edge[e2].wind_cnt = wind_cnt;
            } else {
                let edge1 = &mut self.t_edge[e1];
                edge1.wind_cnt = if edge1.wind_cnt + e2_wind_dx == 0 {
                    -edge1.wind_cnt
                } else {
                    edge1.wind_cnt + e2_wind_dx
                };

                let edge2 = &mut self.t_edge[e2];
                edge2.wind_cnt = if edge2.wind_cnt - e1_wind_dx == 0 {
                    -edge2.wind_cnt
                } else {
                    edge2.wind_cnt - e1_wind_dx
                };
            }
        } else if fill_rule == PolyFillType::EvenOdd {
            let edge1 = &mut self.t_edge[e1];
            edge1.wind_cnt2 = if edge1.wind_cnt2 == 0 { 1 } else { 0 };
            let edge2 = &mut self.t_edge[e2];
            edge2.wind_cnt2 = if edge2.wind_cnt2 == 0 { 1 } else { 0 };
        } else {
            self.t_edge[e1].wind_cnt2 += e2_wind_dx;
            self.t_edge[e2].wind_cnt2 -= e1_wind_dx;
        }

        let signed = |count: i32| match fill_rule {
            PolyFillType::Positive => count,
            PolyFillType::Negative => -count,
            _ => count.abs(),
        };

        let old_e1_wind_cnt = signed(self.t_edge[e1].wind_cnt);
        let old_e2_wind_cnt = signed(self.t_edge[e2].wind_cnt);
        let e1_in_01 = old_e1_wind_cnt == 0 || old_e1_wind_cnt == 1;
        let e2_in_01 = old_e2_wind_cnt == 0 || old_e2_wind_cnt == 1;
        let e1_hot = self.t_edge[e1].is_hot();
        let e2_hot = self.t_edge[e2].is_hot();

        if (!e1_hot && !e1_in_01) || (!e2_hot && !e2_in_01) {
            return;
        }

        if e1_hot && e2_hot {
            if !e1_in_01 || !e2_in_01 || (!same_type && clip_type != ClipType::Xor) {
                self.add_local_max_poly(e1, e2, pt);
            } else if self.is_front(e1) || self.t_edge[e1].outrec == self.t_edge[e2].outrec {
                // contours touching at a single vertex are split there
                self.add_local_max_poly(e1, e2, pt);
                self.add_local_min_poly(e1, e2, pt, false);
            } else {
                self.add_out_pt(e1, pt);
                self.add_out_pt(e2, pt);
                self.swap_outrecs(e1, e2);
            }
        } else if e1_hot {
            self.add_out_pt(e1, pt);
            self.swap_outrecs(e1, e2);
        } else if e2_hot {
            self.add_out_pt(e2, pt);
            self.swap_outrecs(e1, e2);
        } else {
            let e1_wc2 = signed(self.t_edge[e1].wind_cnt2);
            let e2_wc2 = signed(self.t_edge[e2].wind_cnt2);

            if !same_type {
                self.add_local_min_poly(e1, e2, pt, false);
            } else if old_e1_wind_cnt == 1 && old_e2_wind_cnt == 1 {
                let starts_contour = match clip_type {
                    ClipType::Union => e1_wc2 <= 0 && e2_wc2 <= 0,
                    ClipType::Difference => {
                        (self.t_edge[e1].poly_type == PolyType::Clip && e1_wc2 > 0 && e2_wc2 > 0)
                            || (self.t_edge[e1].poly_type == PolyType::Subject && e1_wc2 <= 0 && e2_wc2 <= 0)
                    }
                    ClipType::Xor => true,
                    ClipType::Intersection => e1_wc2 > 0 && e2_wc2 > 0,
                };

                if starts_contour {
                    self.add_local_min_poly(e1, e2, pt, false);
                }
            }
        }
    }

    fn do_intersections(&mut self, top_y: i64) {
        if self.build_intersect_list(top_y) {
            trace!("{} intersections below y = {}", self.intersect_list.len(), top_y);
            self.process_intersect_list();
            self.intersect_list.clear();
        }
    }

    fn add_new_intersect_node(&mut self, e1: usize, e2: usize, top_y: i64) {
        let edge1 = &self.t_edge[e1];
        let edge2 = &self.t_edge[e2];
        let bot_y = self.ctx.bot_y;

        let mut ip = IntPoint::segment_intersect_pt(&edge1.bot, &edge1.top, &edge2.bot, &edge2.top)
            .unwrap_or_else(|| IntPoint::new(edge1.curr_x, top_y));

        // rounding can put the point just outside the scanbeam
        if ip.y > bot_y || ip.y < top_y {
            let abs_dx1 = edge1.dx.abs();
            let abs_dx2 = edge2.dx.abs();

            if abs_dx1 > STEEP_DX && abs_dx2 > STEEP_DX {
                ip = if abs_dx1 > abs_dx2 {
                    ip.closest_point_on_segment(&edge1.bot, &edge1.top)
                } else {
                    ip.closest_point_on_segment(&edge2.bot, &edge2.top)
                };
            } else if abs_dx1 > STEEP_DX {
                ip = ip.closest_point_on_segment(&edge1.bot, &edge1.top);
            } else if abs_dx2 > STEEP_DX {
                ip = ip.closest_point_on_segment(&edge2.bot, &edge2.top);
            } else {
                ip.y = if ip.y < top_y { top_y } else { bot_y };
                ip.x = if abs_dx1 < abs_dx2 {
                    edge1.top_x(ip.y)
                } else {
                    edge2.top_x(ip.y)
                };
            }
        }

        self.intersect_list.push(IntersectNode::new(e1, e2, ip));
    }

    /// Stable merge sort of the SEL by x at `top_y`. Every inversion the sort
    /// repairs is a crossing inside the scanbeam and is queued.
    fn build_intersect_list(&mut self, top_y: i64) -> bool {
        let actives = self.t_edge.actives;

        if actives == UNASSIGNED || self.t_edge[actives].next_in_ael == UNASSIGNED {
            return false;
        }

        self.t_edge.adjust_curr_x_and_copy_to_sel(top_y);

        let mut left = self.t_edge.sel;

        while left != UNASSIGNED && self.t_edge[left].jump != UNASSIGNED {
            let mut prev_base = UNASSIGNED;

            while left != UNASSIGNED && self.t_edge[left].jump != UNASSIGNED {
                let mut curr_base = left;
                let mut right = self.t_edge[left].jump;
                let mut l_end = right;
                let r_end = self.t_edge[right].jump;
                self.t_edge[left].jump = r_end;

                while left != l_end && right != r_end {
                    if self.t_edge[right].curr_x < self.t_edge[left].curr_x {
                        let mut tmp = self.t_edge[right].prev_in_sel;

                        loop {
                            self.add_new_intersect_node(tmp, right, top_y);

                            if tmp == left {
                                break;
                            }

                            tmp = self.t_edge[tmp].prev_in_sel;
                        }

                        tmp = right;
                        right = self.t_edge.extract_from_sel(tmp);
                        l_end = right;
                        self.t_edge.insert1_before2_in_sel(tmp, left);

                        if left == curr_base {
                            curr_base = tmp;
                            self.t_edge[curr_base].jump = r_end;

                            if prev_base == UNASSIGNED {
                                self.t_edge.sel = curr_base;
                            } else {
                                self.t_edge[prev_base].jump = curr_base;
                            }
                        }
                    } else {
                        left = self.t_edge[left].next_in_sel;
                    }
                }

                prev_base = curr_base;
                left = r_end;
            }

            left = self.t_edge.sel;
        }

        !self.intersect_list.is_empty()
    }

    /// Applies the queued crossings bottom-up, reordering where needed so
    /// that each one is between edges adjacent in the AEL.
    fn process_intersect_list(&mut self) {
        self.intersect_list.sort_by(IntersectNode::sort);

        let count = self.intersect_list.len();

        for i in 0..count {
            if !self.intersect_list[i].edges_adjacent(&self.t_edge) {
                let mut j = i + 1;

                while j < count && !self.intersect_list[j].edges_adjacent(&self.t_edge) {
                    j += 1;
                }

                if j == count {
                    warn!("no adjacent pair left among {} pending intersections", count - i);
                    self.succeeded = false;
                    return;
                }

                self.intersect_list.swap(i, j);
            }

            let node = self.intersect_list[i];
            self.intersect_edges(node.edge1, node.edge2, node.pt);
            self.t_edge.swap_positions_in_ael(node.edge1, node.edge2);
            self.t_edge[node.edge1].curr_x = node.pt.x;
            self.t_edge[node.edge2].curr_x = node.pt.x;
            self.check_join_left(node.edge2, node.pt, true);
            self.check_join_right(node.edge1, node.pt, true);
        }
    }

    fn do_top_of_scanbeam(&mut self, y: i64) {
        // the SEL is reused as the horizontal stack from here
        self.t_edge.sel = UNASSIGNED;

        let mut e = self.t_edge.actives;

        while e != UNASSIGNED {
            let top = self.t_edge[e].top;

            if top.y == y {
                self.t_edge[e].curr_x = top.x;

                if self.t_edge[e].is_maxima(&self.base.vertices) {
                    e = self.do_maxima(e);
                    continue;
                }

                if self.t_edge[e].is_hot() {
                    self.add_out_pt(e, top);
                }

                self.update_edge_into_ael(e);

                if self.t_edge[e].is_horizontal() {
                    self.t_edge.push_horz(e);
                }
            } else {
                let curr_x = self.t_edge[e].top_x(y);
                self.t_edge[e].curr_x = curr_x;
            }

            e = self.t_edge[e].next_in_ael;
        }
    }

    /// Ends the bound `e` at its top vertex. Returns the edge to continue the
    /// top-of-scanbeam walk from.
    fn do_maxima(&mut self, e: usize) -> usize {
        let prev_e = self.t_edge[e].prev_in_ael;
        let mut next_e = self.t_edge[e].next_in_ael;
        let top = self.t_edge[e].top;

        if self.t_edge[e].is_open_end(&self.base.vertices) {
            if self.t_edge[e].is_hot() {
                self.add_out_pt(e, top);
            }

            if !self.t_edge[e].is_horizontal() {
                if self.t_edge[e].is_hot() {
                    self.release_open_edge(e);
                }

                self.t_edge.delete_from_ael(e);
            }

            return next_e;
        }

        let max_pair = self.t_edge.maxima_pair(e);

        // the pair is a horizontal still waiting to be processed
        if max_pair == UNASSIGNED {
            return next_e;
        }

        if self.t_edge[e].is_joined() {
            self.split(e, top);
        }

        if self.t_edge[max_pair].is_joined() {
            let pair_top = self.t_edge[max_pair].top;
            self.split(max_pair, pair_top);
        }

        while next_e != max_pair && next_e != UNASSIGNED {
            self.intersect_edges(e, next_e, top);
            self.t_edge.swap_positions_in_ael(e, next_e);
            next_e = self.t_edge[e].next_in_ael;
        }

        if self.t_edge[e].is_hot() {
            self.add_local_max_poly(e, max_pair, top);
        }

        self.t_edge.delete_from_ael(e);
        self.t_edge.delete_from_ael(max_pair);

        if prev_e != UNASSIGNED {
            self.t_edge[prev_e].next_in_ael
        } else {
            self.t_edge.actives
        }
    }

    /// Advances `e` to the next segment of its bound.
    fn update_edge_into_ael(&mut self, e: usize) {
        let vertex_top = self.t_edge[e].next_vertex(&self.base.vertices);
        let top = self.base.vertices[vertex_top].pt;
        let edge = &mut self.t_edge[e];
        edge.bot = edge.top;
        edge.vertex_top = vertex_top;
        edge.top = top;
        edge.curr_x = edge.bot.x;
        edge.set_dx();

        let bot = edge.bot;

        if self.t_edge[e].is_joined() {
            self.split(e, bot);
        }

        if self.t_edge[e].is_horizontal() {
            if !self.t_edge[e].is_open {
                self.trim_horz(e, self.ctx.preserve_collinear);
            }

            return;
        }

        self.scanbeam.insert(top.y);
        self.check_join_left(e, bot, false);
        self.check_join_right(e, bot, true);
    }

    /// Folds consecutive horizontal segments of a bound into one. Only 180
    /// degree reversals are folded when collinear vertices are preserved.
    fn trim_horz(&mut self, e: usize, preserve_collinear: bool) {
        let vertices = &self.base.vertices;
        let mut was_trimmed = false;
        let mut pt = vertices[self.t_edge[e].next_vertex(vertices)].pt;

        while pt.y == self.t_edge[e].top.y {
            let edge = &mut self.t_edge[e];

            if preserve_collinear && (pt.x < edge.top.x) != (edge.bot.x < edge.top.x) {
                break;
            }

            edge.vertex_top = edge.next_vertex(vertices);
            edge.top = pt;
            was_trimmed = true;

            if edge.is_maxima(vertices) {
                break;
            }

            pt = vertices[edge.next_vertex(vertices)].pt;
        }

        if was_trimmed {
            self.t_edge[e].set_dx();
        }
    }

    /// The maximum vertex reached by following the horizontal run that starts
    /// at `e`'s top, or `UNASSIGNED` if the run does not end in one.
    fn curr_y_maxima_vertex(&self, e: usize) -> usize {
        let vertices = &self.base.vertices;
        let edge = &self.t_edge[e];
        let stop_flags = if edge.is_open {
            Vertex::OPEN_END | Vertex::LOCAL_MAX
        } else {
            0
        };
        let mut result = edge.vertex_top;

        loop {
            let next = if edge.wind_dx > 0 {
                vertices[result].next
            } else {
                vertices[result].prev
            };

            if vertices[next].pt.y != vertices[result].pt.y || vertices[result].flags & stop_flags != 0 {
                break;
            }

            result = next;
        }

        if vertices[result].is_maxima() {
            result
        } else {
            UNASSIGNED
        }
    }

    /// Direction of travel and x-extent of a horizontal.
    fn reset_horz_direction(&self, horz: usize, vertex_max: usize) -> (bool, i64, i64) {
        let edge = &self.t_edge[horz];

        if edge.bot.x == edge.top.x {
            // going nowhere: heads right only if its maxima pair is there
            let mut e = edge.next_in_ael;

            while e != UNASSIGNED && self.t_edge[e].vertex_top != vertex_max {
                e = self.t_edge[e].next_in_ael;
            }

            (e != UNASSIGNED, edge.curr_x, edge.curr_x)
        } else if edge.curr_x < edge.top.x {
            (true, edge.curr_x, edge.top.x)
        } else {
            (false, edge.top.x, edge.curr_x)
        }
    }

    fn get_last_op(&self, hot_edge: usize) -> usize {
        let outrec = self.t_edge[hot_edge].outrec;
        let result = self.out_rec.records[outrec].pts;

        if self.out_rec.records[outrec].front_edge != hot_edge {
            self.out_rec.next(result)
        } else {
            result
        }
    }

    /// Sweeps a horizontal edge (and any horizontals that follow it in its
    /// bound) across the edges it passes at this scanline.
    fn do_horizontal(&mut self, horz: usize) {
        let horz_is_open = self.t_edge[horz].is_open;
        let y = self.t_edge[horz].bot.y;
        let vertex_max = self.curr_y_maxima_vertex(horz);

        let (mut is_left_to_right, mut horz_left, mut horz_right) = self.reset_horz_direction(horz, vertex_max);

        if self.t_edge[horz].is_hot() {
            let curr_x = self.t_edge[horz].curr_x;
            let op = self.add_out_pt(horz, IntPoint::new(curr_x, y));
            self.join.add_trial_horz_join(op, &self.out_rec);
        }

        loop {
            let mut e = if is_left_to_right {
                self.t_edge[horz].next_in_ael
            } else {
                self.t_edge[horz].prev_in_ael
            };

            while e != UNASSIGNED {
                if self.t_edge[e].vertex_top == vertex_max {
                    if self.t_edge[horz].is_hot() && self.t_edge[e].is_joined() {
                        let top = self.t_edge[e].top;
                        self.split(e, top);
                    }

                    if self.t_edge[horz].is_hot() {
                        while self.t_edge[horz].vertex_top != vertex_max {
                            let top = self.t_edge[horz].top;
                            self.add_out_pt(horz, top);
                            self.update_edge_into_ael(horz);
                        }

                        let top = self.t_edge[horz].top;

                        if is_left_to_right {
                            self.add_local_max_poly(horz, e, top);
                        } else {
                            self.add_local_max_poly(e, horz, top);
                        }
                    }

                    self.t_edge.delete_from_ael(e);
                    self.t_edge.delete_from_ael(horz);
                    return;
                }

                // unless heading for its maxima pair, stop once past the end
                if vertex_max != self.t_edge[horz].vertex_top || self.t_edge[horz].is_open_end(&self.base.vertices) {
                    let curr_x = self.t_edge[e].curr_x;

                    if (is_left_to_right && curr_x > horz_right) || (!is_left_to_right && curr_x < horz_left) {
                        break;
                    }

                    if curr_x == self.t_edge[horz].top.x && !self.t_edge[e].is_horizontal() {
                        let pt = self.base.vertices[self.t_edge[horz].next_vertex(&self.base.vertices)].pt;
                        let other = &self.t_edge[e];
                        let top_x = other.top_x(pt.y);

                        if other.is_open && other.poly_type != self.t_edge[horz].poly_type && !other.is_hot() {
                            if (is_left_to_right && top_x > pt.x) || (!is_left_to_right && top_x < pt.x) {
                                break;
                            }
                        } else if (is_left_to_right && top_x >= pt.x) || (!is_left_to_right && top_x <= pt.x) {
                            break;
                        }
                    }
                }

                let pt = IntPoint::new(self.t_edge[e].curr_x, self.t_edge[horz].bot.y);

                if is_left_to_right {
                    self.intersect_edges(horz, e, pt);
                    self.t_edge.swap_positions_in_ael(horz, e);
                    self.check_join_left(e, pt, false);
                    self.t_edge[horz].curr_x = self.t_edge[e].curr_x;
                    e = self.t_edge[horz].next_in_ael;
                } else {
                    self.intersect_edges(e, horz, pt);
                    self.t_edge.swap_positions_in_ael(e, horz);
                    self.check_join_right(e, pt, false);
                    self.t_edge[horz].curr_x = self.t_edge[e].curr_x;
                    e = self.t_edge[horz].prev_in_ael;
                }

                if self.t_edge[horz].is_hot() {
                    let op = self.get_last_op(horz);
                    self.join.add_trial_horz_join(op, &self.out_rec);
                }
            }

            if horz_is_open && self.t_edge[horz].is_open_end(&self.base.vertices) {
                if self.t_edge[horz].is_hot() {
                    let top = self.t_edge[horz].top;
                    self.add_out_pt(horz, top);
                    self.release_open_edge(horz);
                }

                self.t_edge.delete_from_ael(horz);
                return;
            }

            let next_vertex = self.t_edge[horz].next_vertex(&self.base.vertices);

            if self.base.vertices[next_vertex].pt.y != self.t_edge[horz].top.y {
                break;
            }

            // more horizontals follow in this bound
            if self.t_edge[horz].is_hot() {
                let top = self.t_edge[horz].top;
                self.add_out_pt(horz, top);
            }

            self.update_edge_into_ael(horz);

            (is_left_to_right, horz_left, horz_right) = self.reset_horz_direction(horz, vertex_max);
        }

        if self.t_edge[horz].is_hot() {
            let top = self.t_edge[horz].top;
            let op = self.add_out_pt(horz, top);
            self.join.add_trial_horz_join(op, &self.out_rec);
        }

        self.update_edge_into_ael(horz);
    }

    fn build_paths(&mut self, closed: &mut Paths, open: &mut Paths) {
        let reverse = self.ctx.reverse_solution;
        let preserve_collinear = self.ctx.preserve_collinear;
        let mut i = 0;

        // cleaning can append split-off records, so the length is re-read
        while i < self.out_rec.len() {
            let pts = self.out_rec.records[i].pts;

            if pts != UNASSIGNED {
                if self.out_rec.records[i].is_open {
                    if let Some(path) = self.out_rec.build_path(pts, reverse, true) {
                        open.push(path);
                    }
                } else {
                    self.out_rec.clean_collinear(i, preserve_collinear, false);

                    let pts = self.out_rec.records[i].pts;

                    if let Some(path) = self.out_rec.build_path(pts, reverse, false) {
                        closed.push(path);
                    }
                }
            }

            i += 1;
        }
    }
}

impl Default for Clipper {
    fn default() -> Self {
        Self::new()
    }
}
