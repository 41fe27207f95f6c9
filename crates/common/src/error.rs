/// Precondition violations rejected at initialization or tick entry.
///
/// The simulation itself is total over well-formed input, so every variant
/// describes a caller mistake rather than a runtime failure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WaveError {
    #[error("grid size must be positive and addressable, got {0}")]
    InvalidGridSize(usize),
    #[error("spacing must be positive and finite, got {0}")]
    InvalidSpacing(f32),
    #[error("delta time must be non-negative and finite, got {0}")]
    InvalidDeltaTime(f32),
    #[error("elapsed simulation time must be finite, got {0}")]
    InvalidElapsedTime(f32),
    #[error("pattern change interval must be positive and finite, got {0}")]
    InvalidInterval(f32),
    #[error("{name} must be finite, got {value}")]
    InvalidWaveParam { name: &'static str, value: f32 },
    #[error("pattern index {index} is outside a cycle of {len}")]
    PatternOutOfRange { index: usize, len: usize },
}
