use super::*;
use common::collision_detection;
use smallvec::SmallVec;
use tracing::error;

const INLINE_RESULTS: usize = 64;

#[derive(Clone, Debug, PartialEq)]
pub struct QueryMatch<T> {
    pub node: NodeId,
    pub rect: Rect,
    pub payload: T,
}

/// Fixed-capacity, deduplicating accumulator filled by
/// [`Grid2d::query_intersects`].
///
/// Up to 64 matches are stored inline. Larger capacities are reserved once at
/// construction; the buffer never grows past `capacity`.
#[derive(Clone, Debug)]
pub struct QueryResult<T> {
    entries: SmallVec<[QueryMatch<T>; INLINE_RESULTS]>,
    capacity: usize,
    visited: usize,
    overflowed: bool,
}

impl<T> QueryResult<T> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: SmallVec::with_capacity(capacity),
            capacity,
            visited: 0,
            overflowed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Slot entries walked by the last query, duplicates and misses included.
    pub fn visited(&self) -> usize {
        self.visited
    }

    /// True when the last query found more unique matches than fit.
    pub fn overflowed(&self) -> bool {
        self.overflowed
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QueryMatch<T>> {
        self.entries.iter()
    }

    pub fn payloads(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|entry| &entry.payload)
    }

    pub fn as_slice(&self) -> &[QueryMatch<T>] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.visited = 0;
        self.overflowed = false;
    }

    // Ok(false) when the node is already in the result.
    fn push_unique(&mut self, node: NodeId, rect: Rect, payload: &T) -> GridResult<bool>
    where
        T: Clone,
    {
        if self.entries.iter().any(|entry| entry.node == node) {
            return Ok(false);
        }
        if self.entries.len() >= self.capacity {
            self.overflowed = true;
            error!(capacity = self.capacity, "query result is full");
            return Err(GridError::QueryResultFull {
                capacity: self.capacity,
            });
        }
        self.entries.push(QueryMatch {
            node,
            rect,
            payload: payload.clone(),
        });
        Ok(true)
    }
}

impl<'a, T> IntoIterator for &'a QueryResult<T> {
    type Item = &'a QueryMatch<T>;
    type IntoIter = std::slice::Iter<'a, QueryMatch<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<T: Clone> Grid2d<T> {
    /// Empty accumulator sized by `Config::result_capacity`.
    pub fn new_result(&self) -> QueryResult<T> {
        QueryResult::with_capacity(self.config.result_capacity)
    }

    /// Collects every stored rectangle that overlaps `query` and shares at
    /// least one corner cell with it. `results` is reset first.
    ///
    /// Stops at the first unique match that does not fit and returns
    /// [`GridError::QueryResultFull`]; matches gathered until then stay in
    /// `results`.
    pub fn query_intersects(
        &self,
        query: &Rect,
        results: &mut QueryResult<T>,
    ) -> GridResult<()> {
        results.clear();
        let cells = self.rect_to_cells(query)?;

        for (i, &cell) in cells.iter().enumerate() {
            // A repeated corner cell holds nothing new.
            if cells[..i].contains(&cell) {
                continue;
            }
            self.collect_slot(cell, query, results)?;
        }
        Ok(())
    }

    #[inline(always)]
    fn collect_slot(
        &self,
        cell: usize,
        query: &Rect,
        results: &mut QueryResult<T>,
    ) -> GridResult<()> {
        let mut entry_index = self.slots[cell].first_entry;
        while entry_index != NO_ENTRY {
            let entry = self.slot_entries.get(entry_index);
            results.visited += 1;
            let node = self.nodes.get(entry.node);
            if collision_detection::rect_rect(&node.rect, query) {
                let id = NodeId {
                    index: entry.node,
                    generation: self.generation,
                };
                results.push_unique(id, node.rect, &node.payload)?;
            }
            entry_index = entry.next;
        }
        Ok(())
    }
}
