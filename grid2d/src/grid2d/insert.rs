use super::*;
use tracing::{error, trace};

impl<T> Grid2d<T> {
    /// Stores `rect` and links it into the slots of its four corner cells.
    ///
    /// Corners that share a cell each get their own slot entry; duplicates are
    /// filtered when querying. Both pools are checked before anything is
    /// written, so a failed insert leaves the grid untouched.
    pub fn add(&mut self, rect: Rect, payload: T) -> GridResult<NodeId> {
        let cells = self.rect_to_cells(&rect)?;

        if self.slot_entries.remaining() < cells.len() {
            error!(
                used = self.slot_entries.len(),
                capacity = self.slot_entries.capacity(),
                "out of slot entry space"
            );
            return Err(GridError::SlotEntryPoolExhausted {
                used: self.slot_entries.len(),
                capacity: self.slot_entries.capacity(),
            });
        }

        let node = match self.nodes.alloc(Node { rect, payload }) {
            Some(node) => node,
            None => {
                error!(capacity = self.nodes.capacity(), "out of node space");
                return Err(GridError::NodePoolExhausted {
                    capacity: self.nodes.capacity(),
                });
            }
        };

        for cell in cells {
            self.link(cell, node)?;
        }

        Ok(NodeId {
            index: node,
            generation: self.generation,
        })
    }

    #[inline(always)]
    fn link(&mut self, cell: usize, node: u32) -> GridResult<()> {
        let next = self.slots[cell].first_entry;
        let entry = self
            .slot_entries
            .alloc(SlotEntry { node, next })
            .ok_or(GridError::SlotEntryPoolExhausted {
                used: self.slot_entries.len(),
                capacity: self.slot_entries.capacity(),
            })?;

        let slot = &mut self.slots[cell];
        slot.first_entry = entry;
        slot.depth += 1;
        let depth = slot.depth as usize;
        if depth > self.max_depth {
            self.max_depth = depth;
            trace!(cell, depth, "new max slot depth");
        }
        Ok(())
    }
}
