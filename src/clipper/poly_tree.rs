use crate::clipper::clipper::Clipper;
use crate::clipper::clipper_pool::ClipperPool;
use crate::clipper::constants::UNASSIGNED;
use crate::geometry::point::{IntPoint, Path, Paths};
use crate::geometry::polygon::area;

#[derive(Debug, Clone)]
struct PolyPath {
    polygon: Path,
    parent: usize,
    children: Vec<usize>,
}

impl PolyPath {
    fn new(polygon: Path, parent: usize) -> Self {
        Self {
            polygon,
            parent,
            children: Vec::new(),
        }
    }
}

/// Nesting of closed result contours. Node `root()` carries no polygon; its
/// children are the outermost contours, their children the holes in them,
/// and so on alternating.
pub struct PolyTree {
    nodes: ClipperPool<PolyPath>,
}

impl PolyTree {
    const ROOT: usize = 0;

    pub fn new() -> Self {
        let mut nodes = ClipperPool::new();
        nodes.get(PolyPath::new(Vec::new(), UNASSIGNED));

        Self { nodes }
    }

    pub fn root(&self) -> usize {
        Self::ROOT
    }

    pub fn clear(&mut self) {
        self.nodes.drain();
        self.nodes.get(PolyPath::new(Vec::new(), UNASSIGNED));
    }

    pub fn add_child(&mut self, parent: usize, polygon: Path) -> usize {
        let child = self.nodes.get(PolyPath::new(polygon, parent));
        self.nodes[parent].children.push(child);

        child
    }

    pub fn children(&self, node: usize) -> &[usize] {
        &self.nodes[node].children
    }

    pub fn child_count(&self, node: usize) -> usize {
        self.nodes[node].children.len()
    }

    pub fn polygon(&self, node: usize) -> &[IntPoint] {
        &self.nodes[node].polygon
    }

    pub fn parent(&self, node: usize) -> Option<usize> {
        match self.nodes[node].parent {
            UNASSIGNED => None,
            parent => Some(parent),
        }
    }

    /// Depth below the root; outer contours sit at level 1.
    pub fn level(&self, node: usize) -> usize {
        let mut result = 0;
        let mut parent = self.nodes[node].parent;

        while parent != UNASSIGNED {
            result += 1;
            parent = self.nodes[parent].parent;
        }

        result
    }

    pub fn is_hole(&self, node: usize) -> bool {
        let level = self.level(node);

        level != 0 && level % 2 == 0
    }

    /// Number of contours in the tree.
    pub fn count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Signed area of `node` plus every node below it. Holes have the
    /// opposite sign to outer contours, so this is the net filled area.
    pub fn area(&self, node: usize) -> f64 {
        self.nodes[node]
            .children
            .iter()
            .fold(area(&self.nodes[node].polygon), |acc, &child| acc + self.area(child))
    }

    /// All contours, parents before their children.
    pub fn to_paths(&self) -> Paths {
        let mut result = Vec::with_capacity(self.count());
        self.collect_paths(Self::ROOT, &mut result);

        result
    }

    fn collect_paths(&self, node: usize, result: &mut Paths) {
        for &child in &self.nodes[node].children {
            result.push(self.nodes[child].polygon.clone());
            self.collect_paths(child, result);
        }
    }
}

impl Default for PolyTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipper {
    fn check_bounds(&mut self, outrec: usize) -> bool {
        self.out_rec.check_bounds(
            outrec,
            self.ctx.reverse_solution,
            self.ctx.preserve_collinear,
            self.ctx.using_polytree,
        )
    }

    fn contains_out_rec(&mut self, outer: usize, inner: usize) -> bool {
        self.out_rec.records[outer].bounds.contains_rect(&self.out_rec.records[inner].bounds)
            && self
                .out_rec
                .path1_inside_path2(self.out_rec.records[inner].pts, self.out_rec.records[outer].pts)
    }

    /// Looks for a record among `splits` (and their own splits) that encloses
    /// `outrec` and makes it the owner.
    fn check_split_owner(&mut self, outrec: usize, splits: &[usize]) -> bool {
        for &split in splits {
            // an emptied split can still hand its pieces on
            if self.out_rec.records[split].pts == UNASSIGNED && !self.out_rec.records[split].splits.is_empty() {
                let nested = self.out_rec.records[split].splits.clone();

                if self.check_split_owner(outrec, &nested) {
                    return true;
                }
            }

            let split = self.out_rec.real_out_rec(split);

            if split == UNASSIGNED || split == outrec || self.out_rec.records[split].recursive_split == outrec {
                continue;
            }

            self.out_rec.records[split].recursive_split = outrec;

            if !self.out_rec.records[split].splits.is_empty() {
                let nested = self.out_rec.records[split].splits.clone();

                if self.check_split_owner(outrec, &nested) {
                    return true;
                }
            }

            if !self.check_bounds(split) || !self.contains_out_rec(split, outrec) {
                continue;
            }

            // `split` sits below `outrec` in the owner chain: lift it out first
            if !self.out_rec.is_valid_owner(outrec, split) {
                self.out_rec.records[split].owner = self.out_rec.records[outrec].owner;
            }

            self.out_rec.records[outrec].owner = split;

            return true;
        }

        false
    }

    /// Walks up `outrec`'s owner chain to the first record that really encloses
    /// it and hangs it under that record's node.
    fn recursive_check_owners(&mut self, outrec: usize, tree: &mut PolyTree) {
        if self.out_rec.records[outrec].poly_path != UNASSIGNED || self.out_rec.records[outrec].bounds.is_empty() {
            return;
        }

        loop {
            let owner = self.out_rec.records[outrec].owner;

            if owner == UNASSIGNED {
                break;
            }

            if !self.out_rec.records[owner].splits.is_empty() {
                let splits = self.out_rec.records[owner].splits.clone();

                if self.check_split_owner(outrec, &splits) {
                    break;
                }
            }

            if self.out_rec.records[owner].pts != UNASSIGNED
                && self.check_bounds(owner)
                && self.contains_out_rec(owner, outrec)
            {
                break;
            }

            self.out_rec.records[outrec].owner = self.out_rec.records[owner].owner;
        }

        let owner = self.out_rec.records[outrec].owner;
        let mut parent = tree.root();

        if owner != UNASSIGNED {
            if self.out_rec.records[owner].poly_path == UNASSIGNED {
                self.recursive_check_owners(owner, tree);
            }

            // an owner that produced no node leaves this contour at the top
            if self.out_rec.records[owner].poly_path != UNASSIGNED {
                parent = self.out_rec.records[owner].poly_path;
            }
        }

        let path = self.out_rec.records[outrec].path.clone();
        self.out_rec.records[outrec].poly_path = tree.add_child(parent, path);
    }

    pub(crate) fn build_tree(&mut self, tree: &mut PolyTree, open: &mut Paths) {
        let reverse = self.ctx.reverse_solution;
        let mut i = 0;

        // bounds checks can split records, so the length is re-read
        while i < self.out_rec.len() {
            let pts = self.out_rec.records[i].pts;

            if pts != UNASSIGNED {
                if self.out_rec.records[i].is_open {
                    if let Some(path) = self.out_rec.build_path(pts, reverse, true) {
                        open.push(path);
                    }
                } else if self.check_bounds(i) {
                    self.recursive_check_owners(i, tree);
                }
            }

            i += 1;
        }
    }
}
