use common::shapes::Rect;

pub(crate) const NO_ENTRY: u32 = u32::MAX;

/// Persisted record of one inserted rectangle.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node<T> {
    pub(crate) rect: Rect,
    pub(crate) payload: T,
}

/// One link of a slot chain, pointing at a node in the node pool.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SlotEntry {
    pub(crate) node: u32,
    pub(crate) next: u32,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct Slot {
    pub(crate) first_entry: u32,
    pub(crate) depth: u32,
}

impl Slot {
    pub(crate) const EMPTY: Slot = Slot {
        first_entry: NO_ENTRY,
        depth: 0,
    };
}

/// Handle to an inserted node. Only valid until the next `clear`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeId {
    /// Position of the node in the node pool, in insertion order.
    pub fn index(self) -> u32 {
        self.index
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridStats {
    pub slot_count: usize,
    pub slot_entries_used: usize,
    pub slot_entry_capacity: usize,
    pub nodes_used: usize,
    pub node_capacity: usize,
    pub max_depth: usize,
}
