//! Flagwave kernel: owns the cell grid and advances the wave and flag cycle.
//!
//! # Invariants
//! - Grid dimensions are fixed once the simulator is created.
//! - A cell's vertical offset is a pure function of its coordinates and the
//!   simulation time; nothing accumulates between ticks except the pattern clock.
//! - The pattern index always stays inside the configured cycle.
//! - Rejected ticks leave every piece of state untouched.

pub mod config;
pub mod grid;
pub mod pattern;
pub mod simulator;

pub use config::{WaveConfig, WaveParams};
pub use grid::{Cell, Grid};
pub use pattern::{Flag, PatternCycle, color_for, color_for_index};
pub use simulator::{GridSimulator, SimEvent, wave_offset};
