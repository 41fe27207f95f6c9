use std::collections::BTreeMap;

use flagwave_common::{CellCoord, Color};
use flagwave_kernel::{Flag, GridSimulator};
use serde::Serialize;

/// Grid inspector for developer tooling.
///
/// Provides read-only queries against the simulator for debugging and CLI
/// output.
pub struct GridInspector;

impl GridInspector {
    /// Produce a summary of the simulator state.
    pub fn summary(sim: &GridSimulator) -> GridSummary {
        let (min_offset, max_offset) = sim
            .grid()
            .cells()
            .iter()
            .map(|c| c.offset)
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), y| {
                (lo.min(y), hi.max(y))
            });
        GridSummary {
            tick: sim.tick_count(),
            elapsed: sim.elapsed(),
            flag: sim.current_flag(),
            pattern_index: sim.pattern_index(),
            cycle_len: sim.cycle().flag_count(),
            time_since_pattern_change: sim.time_since_pattern_change(),
            grid_size: sim.grid().size(),
            cell_count: sim.grid().len(),
            min_offset,
            max_offset,
            state_hash: sim.state_hash(),
        }
    }

    /// Details of one cell, or `None` when the coordinate is off the grid.
    pub fn inspect_cell(sim: &GridSimulator, x: usize, z: usize) -> Option<CellInfo> {
        sim.grid().cell(x, z).map(|cell| {
            let p = cell.position();
            CellInfo {
                coord: cell.coord(),
                position: [p.x, p.y, p.z],
                color: cell.color,
                rgba: cell.color.rgba(),
            }
        })
    }

    /// Number of cells painted with each color. Colors with no cells are absent.
    pub fn color_histogram(sim: &GridSimulator) -> BTreeMap<Color, usize> {
        let mut histogram = BTreeMap::new();
        for cell in sim.grid().cells() {
            *histogram.entry(cell.color).or_insert(0) += 1;
        }
        histogram
    }
}

/// Summary of simulator state for the inspector.
#[derive(Debug, Clone, Serialize)]
pub struct GridSummary {
    pub tick: u64,
    pub elapsed: f32,
    pub flag: Flag,
    pub pattern_index: usize,
    pub cycle_len: usize,
    pub time_since_pattern_change: f32,
    pub grid_size: usize,
    pub cell_count: usize,
    pub min_offset: f32,
    pub max_offset: f32,
    pub state_hash: u64,
}

impl std::fmt::Display for GridSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Grid: tick={} t={:.3}s flag={} ({}/{}) clock={:.3}s cells={} offset=[{:.2}, {:.2}] hash={:#018x}",
            self.tick,
            self.elapsed,
            self.flag,
            self.pattern_index,
            self.cycle_len,
            self.time_since_pattern_change,
            self.cell_count,
            self.min_offset,
            self.max_offset,
            self.state_hash,
        )
    }
}

/// Detailed info about a single cell.
#[derive(Debug, Clone, Serialize)]
pub struct CellInfo {
    pub coord: CellCoord,
    pub position: [f32; 3],
    pub color: Color,
    pub rgba: [f32; 4],
}

impl std::fmt::Display for CellInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cell [{}, {}] pos=({:.2}, {:.2}, {:.2}) color={}",
            self.coord.x,
            self.coord.z,
            self.position[0],
            self.position[1],
            self.position[2],
            self.color,
        )
    }
}
