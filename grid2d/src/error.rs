//! Error type shared by every grid operation.
//!
//! All variants describe programmer or capacity-planning mistakes. Each one is
//! also reported through `tracing` at the site that raises it.
use thiserror::Error;

pub type GridResult<T> = Result<T, GridError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("invalid grid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("negative cell {cell_x},{cell_y} for world position {x},{y}")]
    NegativeCell {
        x: i64,
        y: i64,
        cell_x: i64,
        cell_y: i64,
    },

    #[error("position is out of bounds (world {x},{y}, grid {width} x {height})")]
    PositionOutOfBounds {
        x: i64,
        y: i64,
        width: i32,
        height: i32,
    },

    #[error("illegal slot index {index} (slot count {slot_count})")]
    CellOutOfRange { index: i64, slot_count: usize },

    #[error("out of node space, capacity {capacity}")]
    NodePoolExhausted { capacity: usize },

    #[error("out of slot entry space, allocated {used} of {capacity}")]
    SlotEntryPoolExhausted { used: usize, capacity: usize },

    #[error("query result is full, capacity {capacity}")]
    QueryResultFull { capacity: usize },
}

impl GridError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        GridError::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// True for the pool and result capacity variants.
    pub fn is_capacity(&self) -> bool {
        matches!(
            self,
            GridError::NodePoolExhausted { .. }
                | GridError::SlotEntryPoolExhausted { .. }
                | GridError::QueryResultFull { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_variants_are_flagged() {
        assert!(GridError::NodePoolExhausted { capacity: 1 }.is_capacity());
        assert!(GridError::SlotEntryPoolExhausted {
            used: 4,
            capacity: 4
        }
        .is_capacity());
        assert!(GridError::QueryResultFull { capacity: 64 }.is_capacity());
        assert!(!GridError::invalid_config("zero cell factor").is_capacity());
    }

    #[test]
    fn display_includes_context() {
        let err = GridError::SlotEntryPoolExhausted {
            used: 8,
            capacity: 8,
        };
        assert_eq!(err.to_string(), "out of slot entry space, allocated 8 of 8");
        let err = GridError::CellOutOfRange {
            index: 17,
            slot_count: 16,
        };
        assert_eq!(err.to_string(), "illegal slot index 17 (slot count 16)");
    }
}
