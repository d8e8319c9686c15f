use std::ops::{Index, IndexMut};

/// Grow-only arena. Records are addressed by index and released together by
/// [`ClipperPool::drain`] once an `execute` call is finished with them.
pub struct ClipperPool<T> {
    instances: Vec<T>,
}

impl<T> ClipperPool<T> {
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
        }
    }

    pub fn get(&mut self, instance: T) -> usize {
        self.instances.push(instance);
        self.instances.len() - 1
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.instances.iter()
    }

    pub fn drain(&mut self) {
        self.instances.clear();
    }
}

impl<T> Default for ClipperPool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<usize> for ClipperPool<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, index: usize) -> &T {
        &self.instances[index]
    }
}

impl<T> IndexMut<usize> for ClipperPool<T> {
    #[inline(always)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.instances[index]
    }
}
