use crate::clipper::constants::UNASSIGNED;
use crate::clipper::enums::{ClipType, PolyFillType, PolyType};
use crate::clipper::local_minima::LocalMinima;
use crate::geometry::point::IntPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub pt: IntPoint,
    pub next: usize,
    pub prev: usize,
    pub flags: u8,
}

impl Vertex {
    pub const OPEN_START: u8 = 1;
    pub const OPEN_END: u8 = 2;
    pub const LOCAL_MAX: u8 = 4;
    pub const LOCAL_MIN: u8 = 8;

    pub fn new(pt: IntPoint) -> Self {
        Self {
            pt,
            next: UNASSIGNED,
            prev: UNASSIGNED,
            flags: 0,
        }
    }

    #[inline(always)]
    pub fn is_maxima(&self) -> bool {
        self.flags & Self::LOCAL_MAX != 0
    }

    #[inline(always)]
    pub fn is_open_end(&self) -> bool {
        self.flags & (Self::OPEN_START | Self::OPEN_END) != 0
    }
}

/// Per-execute settings threaded through the winding, contribution and
/// horizontal routines.
#[derive(Debug, Clone, Copy)]
pub struct SweepContext {
    pub clip_type: ClipType,
    pub fill_rule: PolyFillType,
    pub preserve_collinear: bool,
    pub reverse_solution: bool,
    pub using_polytree: bool,
    pub bot_y: i64,
}

impl SweepContext {
    pub fn new(clip_type: ClipType, fill_rule: PolyFillType) -> Self {
        Self {
            clip_type,
            fill_rule,
            preserve_collinear: true,
            reverse_solution: false,
            using_polytree: false,
            bot_y: 0,
        }
    }
}

/// Vertex rings and their local minima. Filled by `add_path`, kept across
/// `execute` calls until `clear`.
pub struct ClipperBase {
    pub vertices: Vec<Vertex>,
    pub local_minima: LocalMinima,
    pub has_open_paths: bool,
}

impl ClipperBase {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            local_minima: LocalMinima::new(),
            has_open_paths: false,
        }
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.local_minima.clear();
        self.has_open_paths = false;
    }

    fn add_loc_min(&mut self, vertex: usize, poly_type: PolyType, is_open: bool) {
        // a vertex may be reached twice on degenerate rings
        if self.vertices[vertex].flags & Vertex::LOCAL_MIN != 0 {
            return;
        }

        self.vertices[vertex].flags |= Vertex::LOCAL_MIN;
        self.local_minima
            .insert(vertex, self.vertices[vertex].pt, poly_type, is_open);
    }

    #[inline(always)]
    fn y(&self, vertex: usize) -> i64 {
        self.vertices[vertex].pt.y
    }

    /// Builds the vertex ring for `path` and registers its local minima.
    /// Returns `false` when the path is degenerate and was dropped.
    pub fn add_path(&mut self, path: &[IntPoint], poly_type: PolyType, is_open: bool) -> bool {
        let v0 = self.vertices.len();

        for pt in path {
            if self.vertices.len() > v0 && self.vertices[self.vertices.len() - 1].pt == *pt {
                continue;
            }

            self.vertices.push(Vertex::new(*pt));
        }

        if !is_open {
            while self.vertices.len() > v0 + 1 && self.vertices[self.vertices.len() - 1].pt == self.vertices[v0].pt {
                self.vertices.pop();
            }
        }

        let count = self.vertices.len() - v0;

        if count < 2 || (!is_open && count < 3) {
            self.vertices.truncate(v0);
            return false;
        }

        for i in 0..count {
            let vertex = &mut self.vertices[v0 + i];
            vertex.next = v0 + (i + 1) % count;
            vertex.prev = v0 + (i + count - 1) % count;
        }

        let y0 = self.y(v0);
        let mut going_up;

        if is_open {
            let mut curr = self.vertices[v0].next;

            while curr != v0 && self.y(curr) == y0 {
                curr = self.vertices[curr].next;
            }

            going_up = self.y(curr) <= y0;

            if going_up {
                self.vertices[v0].flags = Vertex::OPEN_START;
                self.add_loc_min(v0, poly_type, true);
            } else {
                self.vertices[v0].flags = Vertex::OPEN_START | Vertex::LOCAL_MAX;
            }
        } else {
            let mut prev = self.vertices[v0].prev;

            while prev != v0 && self.y(prev) == y0 {
                prev = self.vertices[prev].prev;
            }

            // only open paths may be completely flat
            if prev == v0 {
                self.vertices.truncate(v0);
                return false;
            }

            going_up = self.y(prev) > y0;
        }

        let going_up0 = going_up;
        let mut prev = v0;
        let mut curr = self.vertices[v0].next;

        while curr != v0 {
            if self.y(curr) > self.y(prev) && going_up {
                self.vertices[prev].flags |= Vertex::LOCAL_MAX;
                going_up = false;
            } else if self.y(curr) < self.y(prev) && !going_up {
                going_up = true;
                self.add_loc_min(prev, poly_type, is_open);
            }

            prev = curr;
            curr = self.vertices[curr].next;
        }

        if is_open {
            self.vertices[prev].flags |= Vertex::OPEN_END;

            if going_up {
                self.vertices[prev].flags |= Vertex::LOCAL_MAX;
            } else {
                self.add_loc_min(prev, poly_type, is_open);
            }

            self.has_open_paths = true;
        } else if going_up != going_up0 {
            if going_up0 {
                self.add_loc_min(prev, poly_type, false);
            } else {
                self.vertices[prev].flags |= Vertex::LOCAL_MAX;
            }
        }

        true
    }
}

impl Default for ClipperBase {
    fn default() -> Self {
        Self::new()
    }
}
