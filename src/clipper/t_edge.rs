use crate::clipper::clipper_base::{SweepContext, Vertex};
use crate::clipper::clipper_pool::ClipperPool;
use crate::clipper::constants::UNASSIGNED;
use crate::clipper::enums::{ClipType, JoinWith, PolyFillType, PolyType};
use crate::geometry::point::IntPoint;
use std::ops::{Index, IndexMut};

/// An edge crossing the current scanline.
#[derive(Debug, Clone)]
pub struct ActiveEdge {
    pub bot: IntPoint,
    pub top: IntPoint,
    pub curr_x: i64,
    pub dx: f64,
    pub wind_dx: i32,
    pub wind_cnt: i32,
    pub wind_cnt2: i32,
    pub outrec: usize,
    pub prev_in_ael: usize,
    pub next_in_ael: usize,
    pub prev_in_sel: usize,
    pub next_in_sel: usize,
    pub jump: usize,
    pub vertex_top: usize,
    pub local_min: usize,
    pub local_min_vertex: usize,
    pub poly_type: PolyType,
    pub is_open: bool,
    pub is_left_bound: bool,
    pub join_with: JoinWith,
}

impl ActiveEdge {
    pub fn new(
        bot: IntPoint,
        vertex_top: usize,
        top: IntPoint,
        wind_dx: i32,
        local_min: usize,
        local_min_vertex: usize,
        poly_type: PolyType,
        is_open: bool,
    ) -> Self {
        let mut result = Self {
            bot,
            top,
            curr_x: bot.x,
            dx: 0.0,
            wind_dx,
            wind_cnt: 0,
            wind_cnt2: 0,
            outrec: UNASSIGNED,
            prev_in_ael: UNASSIGNED,
            next_in_ael: UNASSIGNED,
            prev_in_sel: UNASSIGNED,
            next_in_sel: UNASSIGNED,
            jump: UNASSIGNED,
            vertex_top,
            local_min,
            local_min_vertex,
            poly_type,
            is_open,
            is_left_bound: false,
            join_with: JoinWith::NoJoin,
        };

        result.set_dx();
        result
    }

    #[inline(always)]
    pub fn set_dx(&mut self) {
        self.dx = IntPoint::get_dx(&self.bot, &self.top);
    }

    #[inline(always)]
    pub fn is_horizontal(&self) -> bool {
        self.top.y == self.bot.y
    }

    #[inline(always)]
    pub fn is_heading_right_horz(&self) -> bool {
        self.dx == f64::NEG_INFINITY
    }

    #[inline(always)]
    pub fn is_heading_left_horz(&self) -> bool {
        self.dx == f64::INFINITY
    }

    #[inline(always)]
    pub fn is_hot(&self) -> bool {
        self.outrec != UNASSIGNED
    }

    #[inline(always)]
    pub fn is_joined(&self) -> bool {
        self.join_with != JoinWith::NoJoin
    }

    pub fn top_x(&self, y: i64) -> i64 {
        if y == self.top.y || self.top.x == self.bot.x {
            self.top.x
        } else if y == self.bot.y {
            self.bot.x
        } else {
            self.bot.x + (self.dx * (y - self.bot.y) as f64).round_ties_even() as i64
        }
    }

    #[inline(always)]
    pub fn next_vertex(&self, vertices: &[Vertex]) -> usize {
        if self.wind_dx > 0 {
            vertices[self.vertex_top].next
        } else {
            vertices[self.vertex_top].prev
        }
    }

    /// The vertex two steps behind `vertex_top` along the bound.
    #[inline(always)]
    pub fn prev_prev_vertex(&self, vertices: &[Vertex]) -> usize {
        if self.wind_dx > 0 {
            vertices[vertices[self.vertex_top].prev].prev
        } else {
            vertices[vertices[self.vertex_top].next].next
        }
    }

    #[inline(always)]
    pub fn is_maxima(&self, vertices: &[Vertex]) -> bool {
        vertices[self.vertex_top].is_maxima()
    }

    #[inline(always)]
    pub fn is_open_end(&self, vertices: &[Vertex]) -> bool {
        self.is_open && vertices[self.vertex_top].is_open_end()
    }
}

/// Active edge list (AEL) and sorted edge list (SEL) over an edge arena.
/// The SEL doubles as the pending-horizontal stack between intersection passes.
pub struct TEdge {
    edges: ClipperPool<ActiveEdge>,
    pub actives: usize,
    pub sel: usize,
}

impl Index<usize> for TEdge {
    type Output = ActiveEdge;

    #[inline(always)]
    fn index(&self, index: usize) -> &ActiveEdge {
        &self.edges[index]
    }
}

impl IndexMut<usize> for TEdge {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut ActiveEdge {
        &mut self.edges[index]
    }
}

impl TEdge {
    pub fn new() -> Self {
        Self {
            edges: ClipperPool::new(),
            actives: UNASSIGNED,
            sel: UNASSIGNED,
        }
    }

    pub fn create(&mut self, edge: ActiveEdge) -> usize {
        self.edges.get(edge)
    }

    pub fn dispose(&mut self) {
        self.edges.drain();
        self.actives = UNASSIGNED;
        self.sel = UNASSIGNED;
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Edge indices in AEL order.
    pub fn ael_order(&self) -> Vec<usize> {
        let mut result = Vec::new();
        let mut e = self.actives;

        while e != UNASSIGNED {
            result.push(e);
            e = self.edges[e].next_in_ael;
        }

        result
    }

    pub fn is_valid_ael_order(&self, resident: usize, newcomer: usize, vertices: &[Vertex]) -> bool {
        let res = &self.edges[resident];
        let new = &self.edges[newcomer];

        if new.curr_x != res.curr_x {
            return new.curr_x > res.curr_x;
        }

        // turning direction of resident.top, newcomer.bot, newcomer.top
        let d = IntPoint::cross_product(&res.top, &new.bot, &new.top);
        if d != 0 {
            return d < 0;
        }

        // collinear from here on: open paths starting here are placed by the
        // direction they are about to turn
        if !res.is_maxima(vertices) && res.top.y > new.top.y {
            return IntPoint::cross_product(&new.bot, &res.top, &vertices[res.next_vertex(vertices)].pt) <= 0;
        }

        if !new.is_maxima(vertices) && new.top.y > res.top.y {
            return IntPoint::cross_product(&new.bot, &new.top, &vertices[new.next_vertex(vertices)].pt) >= 0;
        }

        let y = new.bot.y;
        let newcomer_is_left = new.is_left_bound;

        if res.bot.y != y || vertices[res.local_min_vertex].pt.y != y {
            return newcomer_is_left;
        }

        // resident was inserted in this same pass
        if res.is_left_bound != newcomer_is_left {
            return newcomer_is_left;
        }

        let res_pp = vertices[res.prev_prev_vertex(vertices)].pt;

        if IntPoint::cross_product(&res_pp, &res.bot, &res.top) == 0 {
            return true;
        }

        // compare the turning direction of the alternate bound
        let new_pp = vertices[new.prev_prev_vertex(vertices)].pt;

        (IntPoint::cross_product(&res_pp, &new.bot, &new_pp) > 0) == newcomer_is_left
    }

    pub fn insert_left_edge(&mut self, e: usize, vertices: &[Vertex]) {
        if self.actives == UNASSIGNED {
            self.edges[e].prev_in_ael = UNASSIGNED;
            self.edges[e].next_in_ael = UNASSIGNED;
            self.actives = e;
            return;
        }

        if !self.is_valid_ael_order(self.actives, e, vertices) {
            self.edges[e].prev_in_ael = UNASSIGNED;
            self.edges[e].next_in_ael = self.actives;
            let head = self.actives;
            self.edges[head].prev_in_ael = e;
            self.actives = e;
            return;
        }

        let mut e2 = self.actives;

        while self.edges[e2].next_in_ael != UNASSIGNED
            && self.is_valid_ael_order(self.edges[e2].next_in_ael, e, vertices)
        {
            e2 = self.edges[e2].next_in_ael;
        }

        // never split a pair that is about to be joined
        if self.edges[e2].join_with == JoinWith::Right {
            e2 = self.edges[e2].next_in_ael;
        }

        if e2 == UNASSIGNED {
            return;
        }

        let next = self.edges[e2].next_in_ael;
        self.edges[e].next_in_ael = next;
        if next != UNASSIGNED {
            self.edges[next].prev_in_ael = e;
        }
        self.edges[e].prev_in_ael = e2;
        self.edges[e2].next_in_ael = e;
    }

    /// Places `e2` immediately to the right of `e`.
    pub fn insert_right_edge(&mut self, e: usize, e2: usize) {
        let next = self.edges[e].next_in_ael;

        self.edges[e2].next_in_ael = next;
        if next != UNASSIGNED {
            self.edges[next].prev_in_ael = e2;
        }
        self.edges[e2].prev_in_ael = e;
        self.edges[e].next_in_ael = e2;
    }

    pub fn delete_from_ael(&mut self, e: usize) {
        let prev = self.edges[e].prev_in_ael;
        let next = self.edges[e].next_in_ael;

        if prev == UNASSIGNED && next == UNASSIGNED && e != self.actives {
            return;
        }

        if prev != UNASSIGNED {
            self.edges[prev].next_in_ael = next;
        } else {
            self.actives = next;
        }

        if next != UNASSIGNED {
            self.edges[next].prev_in_ael = prev;
        }

        self.edges[e].prev_in_ael = UNASSIGNED;
        self.edges[e].next_in_ael = UNASSIGNED;
    }

    /// `e1` must sit immediately left of `e2`.
    pub fn swap_positions_in_ael(&mut self, e1: usize, e2: usize) {
        let next = self.edges[e2].next_in_ael;
        if next != UNASSIGNED {
            self.edges[next].prev_in_ael = e1;
        }

        let prev = self.edges[e1].prev_in_ael;
        if prev != UNASSIGNED {
            self.edges[prev].next_in_ael = e2;
        }

        self.edges[e2].prev_in_ael = prev;
        self.edges[e2].next_in_ael = e1;
        self.edges[e1].prev_in_ael = e2;
        self.edges[e1].next_in_ael = next;

        if prev == UNASSIGNED {
            self.actives = e2;
        }
    }

    /// Winding counts describe regions, so an edge's `wind_cnt` is the higher
    /// count of the two regions it separates.
    pub fn set_wind_count_for_closed_path_edge(&mut self, e: usize, ctx: &SweepContext) {
        let poly_type = self.edges[e].poly_type;
        let wind_dx = self.edges[e].wind_dx;
        let mut e2 = self.edges[e].prev_in_ael;

        // nearest closed edge of the same poly type on the left
        while e2 != UNASSIGNED && (self.edges[e2].poly_type != poly_type || self.edges[e2].is_open) {
            e2 = self.edges[e2].prev_in_ael;
        }

        if e2 == UNASSIGNED {
            self.edges[e].wind_cnt = wind_dx;
            e2 = self.actives;
        } else if ctx.fill_rule == PolyFillType::EvenOdd {
            self.edges[e].wind_cnt = wind_dx;
            self.edges[e].wind_cnt2 = self.edges[e2].wind_cnt2;
            e2 = self.edges[e2].next_in_ael;
        } else {
            let left = &self.edges[e2];
            let wind_cnt = if left.wind_cnt * left.wind_dx < 0 {
                // outside `left`
                if left.wind_cnt.abs() > 1 {
                    // but still inside another polygon
                    if left.wind_dx * wind_dx < 0 {
                        left.wind_cnt
                    } else {
                        left.wind_cnt + wind_dx
                    }
                } else if self.edges[e].is_open {
                    1
                } else {
                    wind_dx
                }
            } else if left.wind_dx * wind_dx < 0 {
                // inside `left`, reversing direction
                left.wind_cnt
            } else {
                left.wind_cnt + wind_dx
            };

            let wind_cnt2 = left.wind_cnt2;
            self.edges[e].wind_cnt = wind_cnt;
            self.edges[e].wind_cnt2 = wind_cnt2;
            e2 = self.edges[e2].next_in_ael;
        }

        // opposite poly type edges between the anchor and `e`
        while e2 != e && e2 != UNASSIGNED {
            let other = &self.edges[e2];

            if other.poly_type != poly_type && !other.is_open {
                let other_dx = other.wind_dx;
                let edge = &mut self.edges[e];

                if ctx.fill_rule == PolyFillType::EvenOdd {
                    edge.wind_cnt2 = if edge.wind_cnt2 == 0 { 1 } else { 0 };
                } else {
                    edge.wind_cnt2 += other_dx;
                }
            }

            e2 = self.edges[e2].next_in_ael;
        }
    }

    pub fn set_wind_count_for_open_path_edge(&mut self, e: usize, ctx: &SweepContext) {
        let mut e2 = self.actives;
        let mut cnt1 = 0;
        let mut cnt2 = 0;

        while e2 != e && e2 != UNASSIGNED {
            let other = &self.edges[e2];

            if other.poly_type == PolyType::Clip {
                cnt2 += if ctx.fill_rule == PolyFillType::EvenOdd { 1 } else { other.wind_dx };
            } else if !other.is_open {
                cnt1 += if ctx.fill_rule == PolyFillType::EvenOdd { 1 } else { other.wind_dx };
            }

            e2 = other.next_in_ael;
        }

        let edge = &mut self.edges[e];

        if ctx.fill_rule == PolyFillType::EvenOdd {
            edge.wind_cnt = cnt1 & 1;
            edge.wind_cnt2 = cnt2 & 1;
        } else {
            edge.wind_cnt = cnt1;
            edge.wind_cnt2 = cnt2;
        }
    }

    pub fn is_contributing_closed(&self, e: usize, ctx: &SweepContext) -> bool {
        let edge = &self.edges[e];

        match ctx.fill_rule {
            PolyFillType::EvenOdd => {}
            PolyFillType::NonZero => {
                if edge.wind_cnt.abs() != 1 {
                    return false;
                }
            }
            PolyFillType::Positive => {
                if edge.wind_cnt != 1 {
                    return false;
                }
            }
            PolyFillType::Negative => {
                if edge.wind_cnt != -1 {
                    return false;
                }
            }
        }

        let outside_other = match ctx.fill_rule {
            PolyFillType::Positive => edge.wind_cnt2 <= 0,
            PolyFillType::Negative => edge.wind_cnt2 >= 0,
            _ => edge.wind_cnt2 == 0,
        };

        match ctx.clip_type {
            ClipType::Intersection => !outside_other,
            ClipType::Union => outside_other,
            ClipType::Difference => (edge.poly_type == PolyType::Subject) == outside_other,
            ClipType::Xor => true,
        }
    }

    pub fn is_contributing_open(&self, e: usize, ctx: &SweepContext) -> bool {
        let edge = &self.edges[e];

        let (is_in_subj, is_in_clip) = match ctx.fill_rule {
            PolyFillType::Positive => (edge.wind_cnt > 0, edge.wind_cnt2 > 0),
            PolyFillType::Negative => (edge.wind_cnt < 0, edge.wind_cnt2 < 0),
            _ => (edge.wind_cnt != 0, edge.wind_cnt2 != 0),
        };

        match ctx.clip_type {
            ClipType::Intersection => is_in_clip,
            ClipType::Union => !is_in_subj && !is_in_clip,
            _ => !is_in_clip,
        }
    }

    /// Nearest closed hot edge to the left of `e`.
    pub fn prev_hot_edge(&self, e: usize) -> usize {
        let mut prev = self.edges[e].prev_in_ael;

        while prev != UNASSIGNED && (self.edges[prev].is_open || !self.edges[prev].is_hot()) {
            prev = self.edges[prev].prev_in_ael;
        }

        prev
    }

    /// Edge to the right of `e` that ends at the same maximum vertex.
    pub fn maxima_pair(&self, e: usize) -> usize {
        let vertex_top = self.edges[e].vertex_top;
        let mut e2 = self.edges[e].next_in_ael;

        while e2 != UNASSIGNED {
            if self.edges[e2].vertex_top == vertex_top {
                return e2;
            }

            e2 = self.edges[e2].next_in_ael;
        }

        UNASSIGNED
    }

    pub fn find_edge_with_matching_loc_min(&self, e: usize) -> usize {
        let local_min = self.edges[e].local_min;
        let bot = self.edges[e].bot;
        let mut result = self.edges[e].next_in_ael;

        while result != UNASSIGNED {
            let other = &self.edges[result];

            if other.local_min == local_min {
                return result;
            }

            if !other.is_horizontal() && bot != other.bot {
                break;
            }

            result = other.next_in_ael;
        }

        result = self.edges[e].prev_in_ael;

        while result != UNASSIGNED {
            let other = &self.edges[result];

            if other.local_min == local_min {
                return result;
            }

            if !other.is_horizontal() && bot != other.bot {
                return UNASSIGNED;
            }

            result = other.prev_in_ael;
        }

        UNASSIGNED
    }

    pub fn push_horz(&mut self, e: usize) {
        self.edges[e].next_in_sel = self.sel;
        self.sel = e;
    }

    pub fn pop_horz(&mut self) -> Option<usize> {
        if self.sel == UNASSIGNED {
            return None;
        }

        let result = self.sel;
        self.sel = self.edges[result].next_in_sel;

        Some(result)
    }

    /// Moves every edge to its x at `top_y` and copies the AEL into the SEL.
    /// Joined edges move on their own; a crossing splits them later.
    pub fn adjust_curr_x_and_copy_to_sel(&mut self, top_y: i64) {
        let mut e = self.actives;
        self.sel = e;

        while e != UNASSIGNED {
            let next = self.edges[e].next_in_ael;
            let edge = &mut self.edges[e];
            edge.prev_in_sel = edge.prev_in_ael;
            edge.next_in_sel = next;
            edge.jump = next;
            edge.curr_x = edge.top_x(top_y);

            e = next;
        }
    }

    /// Unlinks `e` from the SEL and returns its former successor.
    pub fn extract_from_sel(&mut self, e: usize) -> usize {
        let result = self.edges[e].next_in_sel;
        let prev = self.edges[e].prev_in_sel;

        if result != UNASSIGNED {
            self.edges[result].prev_in_sel = prev;
        }

        if prev != UNASSIGNED {
            self.edges[prev].next_in_sel = result;
        }

        result
    }

    pub fn insert1_before2_in_sel(&mut self, e1: usize, e2: usize) {
        let prev = self.edges[e2].prev_in_sel;

        self.edges[e1].prev_in_sel = prev;
        if prev != UNASSIGNED {
            self.edges[prev].next_in_sel = e1;
        }
        self.edges[e1].next_in_sel = e2;
        self.edges[e2].prev_in_sel = e1;
    }
}

impl Default for TEdge {
    fn default() -> Self {
        Self::new()
    }
}
