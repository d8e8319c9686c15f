use std::collections::BinaryHeap;

/// Pending scanline y-coordinates, popped from the largest value down.
pub struct Scanbeam {
    heap: BinaryHeap<i64>,
}

impl Scanbeam {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }

    pub fn insert(&mut self, y: i64) {
        self.heap.push(y);
    }

    /// Removes and returns the largest y. Duplicates of it are dropped too.
    pub fn pop(&mut self) -> Option<i64> {
        let y = self.heap.pop()?;

        while self.heap.peek() == Some(&y) {
            self.heap.pop();
        }

        Some(y)
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clean(&mut self) {
        self.heap.clear();
    }
}

impl Default for Scanbeam {
    fn default() -> Self {
        Self::new()
    }
}
