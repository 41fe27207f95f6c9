use flagwave_common::{Color, WaveError};
use serde::{Deserialize, Serialize};

use crate::config::{WaveConfig, WaveParams};
use crate::grid::Grid;
use crate::pattern::{Flag, PatternCycle, color_for};

/// Phase advance per unit of `x + z`.
pub const SPATIAL_FREQUENCY: f32 = 0.5;

/// Vertical offset of cell `(x, z)` at `elapsed` seconds.
///
/// Bounded by `±wave_height`. Depends only on its arguments, so replaying the
/// same time always lands every cell in the same place.
pub fn wave_offset(x: usize, z: usize, elapsed: f32, params: &WaveParams) -> f32 {
    ((x + z) as f32 * SPATIAL_FREQUENCY + elapsed * params.wave_speed).cos() * params.wave_height
}

/// Record of a notable simulator transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// Grid was allocated.
    Initialized { grid_size: usize, spacing: f32 },
    /// The active flag advanced at the end of `tick`.
    PatternChanged { tick: u64, from: Flag, to: Flag },
}

/// Owns the grid and drives the wave animation and flag cycle.
///
/// The host calls [`GridSimulator::tick`] (or [`GridSimulator::advance`]) once
/// per frame and reads cells between calls. Each tick rewrites every cell from
/// scratch; only the pattern clock carries over.
#[derive(Debug, Clone)]
pub struct GridSimulator {
    grid: Grid,
    config: WaveConfig,
    pattern_index: usize,
    since_pattern_change: f32,
    tick: u64,
    clock: f32,
    events: Vec<SimEvent>,
}

impl GridSimulator {
    /// Create a simulator with default tunables and the given layout.
    pub fn initialize(grid_size: usize, spacing: f32) -> Result<Self, WaveError> {
        Self::from_config(WaveConfig {
            grid_size,
            spacing,
            ..WaveConfig::default()
        })
    }

    /// Create a simulator from a full configuration.
    pub fn from_config(config: WaveConfig) -> Result<Self, WaveError> {
        config.validate()?;
        let mut grid = Grid::new(config.grid_size, config.spacing, Color::White)?;
        paint(&mut grid, Flag::Italy);

        tracing::info!(
            grid_size = config.grid_size,
            spacing = config.spacing,
            cycle = ?config.cycle,
            "grid initialized"
        );
        let events = vec![SimEvent::Initialized {
            grid_size: config.grid_size,
            spacing: config.spacing,
        }];

        Ok(Self {
            grid,
            config,
            pattern_index: 0,
            since_pattern_change: 0.0,
            tick: 0,
            clock: 0.0,
            events,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn cycle(&self) -> PatternCycle {
        self.config.cycle
    }

    /// Index of the active flag, always below the cycle length.
    pub fn pattern_index(&self) -> usize {
        self.pattern_index
    }

    pub fn current_flag(&self) -> Flag {
        // The index never leaves the cycle, and every cycle is a prefix of Flag::ALL.
        self.config.cycle.flags()[self.pattern_index]
    }

    /// Seconds of delta time accumulated since the last pattern change.
    pub fn time_since_pattern_change(&self) -> f32 {
        self.since_pattern_change
    }

    /// Number of ticks processed.
    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    /// Elapsed simulation time seen by the most recent tick.
    pub fn elapsed(&self) -> f32 {
        self.clock
    }

    pub fn events(&self) -> &[SimEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    /// Advance one frame.
    ///
    /// Every cell gets its offset from the wave and its color from the active
    /// flag. Then `delta_time` feeds the pattern clock; once it reaches the
    /// interval the clock resets to zero and the next flag becomes active for
    /// the following tick. Invalid input is rejected before anything changes.
    pub fn tick(
        &mut self,
        delta_time: f32,
        elapsed: f32,
        params: &WaveParams,
    ) -> Result<(), WaveError> {
        if !(delta_time.is_finite() && delta_time >= 0.0) {
            return Err(WaveError::InvalidDeltaTime(delta_time));
        }
        if !elapsed.is_finite() {
            return Err(WaveError::InvalidElapsedTime(elapsed));
        }
        params.validate()?;

        let _span = tracing::trace_span!("grid_tick", tick = self.tick).entered();

        let flag = self.current_flag();
        let size = self.grid.size();
        for cell in self.grid.cells_mut() {
            let coord = cell.coord();
            cell.offset = wave_offset(coord.x, coord.z, elapsed, params);
            cell.color = color_for(flag, coord.x, coord.z, size);
        }

        self.tick += 1;
        self.clock = elapsed;
        self.since_pattern_change += delta_time;
        if self.since_pattern_change >= params.pattern_change_interval {
            self.since_pattern_change = 0.0;
            self.pattern_index = self.config.cycle.next(self.pattern_index);
            let to = self.current_flag();
            tracing::debug!(tick = self.tick, from = %flag, to = %to, "pattern changed");
            self.events.push(SimEvent::PatternChanged {
                tick: self.tick,
                from: flag,
                to,
            });
        }

        tracing::trace!(
            tick = self.tick,
            elapsed,
            accumulator = self.since_pattern_change,
            "tick complete"
        );
        Ok(())
    }

    /// Advance the internal clock by `delta_time` and tick with the configured tunables.
    pub fn advance(&mut self, delta_time: f32) -> Result<(), WaveError> {
        if !(delta_time.is_finite() && delta_time >= 0.0) {
            return Err(WaveError::InvalidDeltaTime(delta_time));
        }
        let params = self.config.params();
        self.tick(delta_time, self.clock + delta_time, &params)
    }

    /// Force the active flag and repaint the grid with it.
    ///
    /// The pattern clock is left running.
    pub fn set_pattern(&mut self, index: usize) -> Result<(), WaveError> {
        let len = self.config.cycle.flag_count();
        if index >= len {
            return Err(WaveError::PatternOutOfRange { index, len });
        }
        self.pattern_index = index;
        let flag = self.current_flag();
        paint(&mut self.grid, flag);
        Ok(())
    }

    /// Return to the initial state: first flag, zeroed clocks, cells at rest.
    pub fn reset(&mut self) {
        self.pattern_index = 0;
        self.since_pattern_change = 0.0;
        self.tick = 0;
        self.clock = 0.0;
        for cell in self.grid.cells_mut() {
            cell.offset = 0.0;
        }
        paint(&mut self.grid, Flag::Italy);
        tracing::debug!("simulator reset");
    }

    /// Deterministic FNV-1a hash over the simulation state.
    ///
    /// Covers the counters, the clock, and every cell's offset and color in
    /// buffer order.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        mix(&mut h, &self.tick.to_le_bytes());
        mix(&mut h, &(self.pattern_index as u64).to_le_bytes());
        mix(&mut h, &self.since_pattern_change.to_bits().to_le_bytes());
        mix(&mut h, &self.clock.to_bits().to_le_bytes());
        for cell in self.grid.cells() {
            mix(&mut h, &cell.offset.to_bits().to_le_bytes());
            mix(&mut h, &[color_tag(cell.color)]);
        }
        h
    }
}

fn paint(grid: &mut Grid, flag: Flag) {
    let size = grid.size();
    for cell in grid.cells_mut() {
        let coord = cell.coord();
        cell.color = color_for(flag, coord.x, coord.z, size);
    }
}

fn color_tag(color: Color) -> u8 {
    color as u8
}
