//! Rendering adapter: renderer-agnostic interface over the grid simulator.
//!
//! # Invariants
//! - Renderers borrow the simulator immutably and never change it.
//! - Output derives only from the grid and simulator counters.
//!
//! Ships text renderers for headless hosts; a GPU backend would implement the
//! same trait by reading each cell's position and RGBA color.

mod renderer;

pub use renderer::{DebugTextRenderer, FlagMapRenderer, Renderer};

pub fn crate_info() -> &'static str {
    concat!("flagwave-render v", env!("CARGO_PKG_VERSION"))
}
