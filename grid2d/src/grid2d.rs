//! Uniform grid over axis-aligned integer rectangles.
//!
//! Rectangles are bucketed by the cells that contain their four corners, not
//! by every cell their area covers. Lookups are O(1) per corner, but a
//! rectangle is only found through one of its corner cells: with cells much
//! smaller than the stored rectangles, a query can miss a rectangle that
//! truly overlaps it. Pick `cell_factor` at least as large as the typical
//! object.
//!
//! All storage is reserved in [`Grid2d::new`]. `add` and `query_intersects`
//! never allocate.
mod api;
mod config;
mod insert;
mod mapper;
mod pool;
mod query;
mod types;

use crate::error::{GridError, GridResult};
use common::shapes::{Rect, Vector2};
use pool::BumpPool;
use types::{Node, Slot, SlotEntry, NO_ENTRY};

pub use config::Config;
pub use query::{QueryMatch, QueryResult};
pub use types::{GridStats, NodeId};

pub struct Grid2d<T> {
    config: Config,
    slots: Vec<Slot>,
    nodes: BumpPool<Node<T>>,
    slot_entries: BumpPool<SlotEntry>,
    max_depth: usize,
    generation: u32,
}
