use crate::error::{GridError, GridResult};
use common::shapes::{Rect, Size2, Vector2};

/// Layout and pool sizes of a grid. Fixed for the lifetime of the grid.
#[derive(Debug, Clone)]
pub struct Config {
    pub origin: Vector2,
    pub grid_size: Size2,
    pub cell_factor: u32,
    pub node_capacity: usize,
    pub slot_entry_capacity: usize,
    pub result_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            origin: Vector2::ZERO,
            grid_size: Size2::new(64, 64),
            cell_factor: 64,
            node_capacity: 16 * 1024,
            // Every node takes four slot entries.
            slot_entry_capacity: 64 * 1024,
            result_capacity: 64,
        }
    }
}

impl Config {
    pub fn new(origin: Vector2, grid_size: Size2, cell_factor: u32) -> Self {
        Config {
            origin,
            grid_size,
            cell_factor,
            ..Default::default()
        }
    }

    pub fn with_node_capacity(mut self, node_capacity: usize) -> Self {
        self.node_capacity = node_capacity;
        self
    }

    pub fn with_slot_entry_capacity(mut self, slot_entry_capacity: usize) -> Self {
        self.slot_entry_capacity = slot_entry_capacity;
        self
    }

    pub fn with_result_capacity(mut self, result_capacity: usize) -> Self {
        self.result_capacity = result_capacity;
        self
    }

    pub fn slot_count(&self) -> usize {
        self.grid_size.width.max(0) as usize * self.grid_size.height.max(0) as usize
    }

    /// World-space rectangle covered by the grid.
    pub fn world_extent(&self) -> Rect {
        let factor = self.cell_factor as i32;
        Rect::from_parts(
            self.origin,
            Size2::new(
                self.grid_size.width.saturating_mul(factor),
                self.grid_size.height.saturating_mul(factor),
            ),
        )
    }

    pub fn validate(&self) -> GridResult<()> {
        let Size2 { width, height } = self.grid_size;
        if width <= 0 || height <= 0 {
            return Err(GridError::invalid_config(format!(
                "grid size must be positive, got {} x {}",
                width, height
            )));
        }
        if (width as usize).checked_mul(height as usize).is_none() {
            return Err(GridError::invalid_config(format!(
                "grid size {} x {} overflows the slot count",
                width, height
            )));
        }
        if self.cell_factor == 0 || self.cell_factor > i32::MAX as u32 {
            return Err(GridError::invalid_config(format!(
                "cell factor must be in 1..={}, got {}",
                i32::MAX,
                self.cell_factor
            )));
        }
        if self.node_capacity == 0 || self.node_capacity > u32::MAX as usize {
            return Err(GridError::invalid_config(format!(
                "node capacity must be in 1..={}, got {}",
                u32::MAX,
                self.node_capacity
            )));
        }
        if self.slot_entry_capacity < 4 || self.slot_entry_capacity > u32::MAX as usize {
            return Err(GridError::invalid_config(format!(
                "slot entry capacity must be in 4..={}, got {}",
                u32::MAX,
                self.slot_entry_capacity
            )));
        }
        if self.result_capacity == 0 {
            return Err(GridError::invalid_config("result capacity must be positive"));
        }
        Ok(())
    }
}
