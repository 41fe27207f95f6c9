//! Developer tooling: read-only grid inspection.
//!
//! # Invariants
//! - Tools never mutate the simulator.

mod inspector;

pub use inspector::{CellInfo, GridInspector, GridSummary};

pub fn crate_info() -> &'static str {
    concat!("flagwave-tools v", env!("CARGO_PKG_VERSION"))
}
