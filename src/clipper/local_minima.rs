use crate::clipper::enums::PolyType;
use crate::geometry::point::IntPoint;

/// A vertex where a left/right bound pair starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalMinimum {
    pub vertex: usize,
    pub pt: IntPoint,
    pub poly_type: PolyType,
    pub is_open: bool,
}

/// Local minima of every added path, consumed in sweep order through a cursor.
/// The list itself survives `execute` so the same input can be re-run.
pub struct LocalMinima {
    items: Vec<LocalMinimum>,
    cursor: usize,
    is_sorted: bool,
}

impl LocalMinima {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            cursor: 0,
            is_sorted: false,
        }
    }

    pub fn insert(&mut self, vertex: usize, pt: IntPoint, poly_type: PolyType, is_open: bool) -> usize {
        self.items.push(LocalMinimum {
            vertex,
            pt,
            poly_type,
            is_open,
        });
        self.is_sorted = false;

        self.items.len() - 1
    }

    /// Sorts by descending y then ascending x and rewinds the cursor.
    pub fn reset(&mut self) {
        if !self.is_sorted {
            self.items.sort_by(|a, b| b.pt.y.cmp(&a.pt.y).then(a.pt.x.cmp(&b.pt.x)));
            self.is_sorted = true;
        }

        self.cursor = 0;
    }

    /// Next unconsumed minimum sitting exactly on `y`.
    pub fn pop(&mut self, y: i64) -> Option<usize> {
        match self.items.get(self.cursor) {
            Some(item) if item.pt.y == y => {
                self.cursor += 1;
                Some(self.cursor - 1)
            }
            _ => None,
        }
    }

    pub fn get(&self, index: usize) -> &LocalMinimum {
        &self.items[index]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LocalMinimum> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.cursor = 0;
        self.is_sorted = false;
    }
}

impl Default for LocalMinima {
    fn default() -> Self {
        Self::new()
    }
}
