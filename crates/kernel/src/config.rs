use flagwave_common::WaveError;
use serde::{Deserialize, Serialize};

use crate::grid::Cell;
use crate::pattern::PatternCycle;

/// Tunables read by every tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParams {
    /// Phase advance per second of simulation time.
    pub wave_speed: f32,
    /// Peak vertical displacement in world units.
    pub wave_height: f32,
    /// Seconds of accumulated delta time between pattern changes.
    pub pattern_change_interval: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            wave_speed: 2.0,
            wave_height: 2.0,
            pattern_change_interval: 5.0,
        }
    }
}

impl WaveParams {
    pub fn validate(&self) -> Result<(), WaveError> {
        if !self.wave_speed.is_finite() {
            return Err(WaveError::InvalidWaveParam {
                name: "wave_speed",
                value: self.wave_speed,
            });
        }
        if !self.wave_height.is_finite() {
            return Err(WaveError::InvalidWaveParam {
                name: "wave_height",
                value: self.wave_height,
            });
        }
        if !(self.pattern_change_interval.is_finite() && self.pattern_change_interval > 0.0) {
            return Err(WaveError::InvalidInterval(self.pattern_change_interval));
        }
        Ok(())
    }
}

/// Full configuration surface of the effect.
///
/// Every field has a default, so a partial YAML document such as
/// `grid_size: 12` deserializes into a usable config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveConfig {
    pub grid_size: usize,
    pub spacing: f32,
    pub wave_speed: f32,
    pub wave_height: f32,
    pub pattern_change_interval: f32,
    pub cycle: PatternCycle,
}

impl Default for WaveConfig {
    fn default() -> Self {
        let params = WaveParams::default();
        Self {
            grid_size: 30,
            spacing: 1.5,
            wave_speed: params.wave_speed,
            wave_height: params.wave_height,
            pattern_change_interval: params.pattern_change_interval,
            cycle: PatternCycle::Classic,
        }
    }
}

impl WaveConfig {
    /// Per-tick tunables carried by this config.
    pub fn params(&self) -> WaveParams {
        WaveParams {
            wave_speed: self.wave_speed,
            wave_height: self.wave_height,
            pattern_change_interval: self.pattern_change_interval,
        }
    }

    /// Check every precondition the simulator would otherwise reject later.
    pub fn validate(&self) -> Result<(), WaveError> {
        validate_layout(self.grid_size, self.spacing)?;
        self.params().validate()
    }
}

pub(crate) fn validate_layout(grid_size: usize, spacing: f32) -> Result<(), WaveError> {
    // The cell buffer must fit in one allocation.
    let addressable = grid_size
        .checked_mul(grid_size)
        .and_then(|cells| cells.checked_mul(std::mem::size_of::<Cell>()))
        .is_some_and(|bytes| bytes <= isize::MAX as usize);
    if grid_size == 0 || !addressable {
        return Err(WaveError::InvalidGridSize(grid_size));
    }
    if !(spacing.is_finite() && spacing > 0.0) {
        return Err(WaveError::InvalidSpacing(spacing));
    }
    Ok(())
}
