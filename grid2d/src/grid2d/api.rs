use super::*;
use tracing::{debug, error, info};

impl<T> Grid2d<T> {
    /// Validates `config` and reserves the slot array and both pools.
    pub fn new(config: Config) -> GridResult<Self> {
        if let Err(err) = config.validate() {
            error!(%err, "rejected grid configuration");
            return Err(err);
        }
        let slot_count = config.slot_count();
        let grid = Self {
            slots: vec![Slot::EMPTY; slot_count],
            nodes: BumpPool::new(config.node_capacity),
            slot_entries: BumpPool::new(config.slot_entry_capacity),
            max_depth: 0,
            generation: 0,
            config,
        };
        debug!(
            slot_count,
            node_capacity = grid.config.node_capacity,
            slot_entry_capacity = grid.config.slot_entry_capacity,
            cell_factor = grid.config.cell_factor,
            "grid initialized"
        );
        Ok(grid)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Drops every node and slot entry. Storage is kept for the next fill, and
    /// `NodeId`s handed out before the call stop resolving.
    pub fn clear(&mut self) {
        debug!(
            nodes = self.nodes.len(),
            slot_entries = self.slot_entries.len(),
            max_depth = self.max_depth,
            "clearing grid"
        );
        self.nodes.reset();
        self.slot_entries.reset();
        self.slots.fill(Slot::EMPTY);
        self.max_depth = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Releases the slot array and both pools. Ownership guarantees this runs
    /// once; dropping the grid has the same effect.
    pub fn destroy(self) {
        debug!(
            slot_count = self.slots.len(),
            node_capacity = self.nodes.capacity(),
            slot_entry_capacity = self.slot_entries.capacity(),
            "destroying grid"
        );
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 0
    }

    /// Rectangle and payload of a node added since the last `clear`.
    pub fn node(&self, id: NodeId) -> Option<(&Rect, &T)> {
        if id.generation != self.generation {
            return None;
        }
        self.nodes
            .try_get(id.index)
            .map(|node| (&node.rect, &node.payload))
    }

    /// Length of the chain stored for slot `index`.
    pub fn slot_depth(&self, index: usize) -> GridResult<usize> {
        let index = self.slot_index(index as i64)?;
        Ok(self.slots[index].depth as usize)
    }

    /// Deepest chain seen since the last `clear`.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn stats(&self) -> GridStats {
        GridStats {
            slot_count: self.slots.len(),
            slot_entries_used: self.slot_entries.len(),
            slot_entry_capacity: self.slot_entries.capacity(),
            nodes_used: self.nodes.len(),
            node_capacity: self.nodes.capacity(),
            max_depth: self.max_depth,
        }
    }

    pub fn debug_output(&self) -> GridStats {
        let stats = self.stats();
        info!(
            slot_count = stats.slot_count,
            slot_entries = stats.slot_entries_used,
            nodes = stats.nodes_used,
            max_depth = stats.max_depth,
            "grid2d"
        );
        stats
    }
}
