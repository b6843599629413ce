/// Fixed-capacity bump allocator over a contiguous buffer.
///
/// Storage is reserved once in `new`; `alloc` never grows the buffer and
/// `reset` rewinds the cursor while keeping the allocation.
pub(crate) struct BumpPool<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BumpPool<T> {
    pub(crate) fn new(capacity: usize) -> Self {
        BumpPool {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline(always)]
    pub(crate) fn alloc(&mut self, item: T) -> Option<u32> {
        if self.items.len() >= self.capacity {
            return None;
        }
        let index = self.items.len() as u32;
        self.items.push(item);
        Some(index)
    }

    #[inline(always)]
    pub(crate) fn get(&self, index: u32) -> &T {
        &self.items[index as usize]
    }

    #[inline(always)]
    pub(crate) fn try_get(&self, index: u32) -> Option<&T> {
        self.items.get(index as usize)
    }

    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn remaining(&self) -> usize {
        self.capacity - self.items.len()
    }

    pub(crate) fn reset(&mut self) {
        self.items.clear();
    }
}
