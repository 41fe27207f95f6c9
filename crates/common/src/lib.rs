//! Shared value types for the flagwave workspace.

mod error;
mod types;

pub use error::WaveError;
pub use types::{CellCoord, Color};
