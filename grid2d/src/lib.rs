pub mod error;
pub mod grid2d;

pub use error::{GridError, GridResult};
pub use grid2d::{Config, Grid2d, GridStats, NodeId, QueryMatch, QueryResult};
