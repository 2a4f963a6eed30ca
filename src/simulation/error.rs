use thiserror::Error;

/// Rejected inputs for the simulation core.
///
/// Physics itself never fails: a frame with coincident bodies just produces
/// non-finite state, which [`crate::System::is_finite`] reports.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("{kind} mass must be positive and finite, got {mass}")]
    NonPositiveMass { kind: &'static str, mass: f64 },
    #[error("{kind} radius must be non-negative, got {radius}")]
    NegativeRadius { kind: &'static str, radius: f64 },
    #[error("arena corners must satisfy min < max, got {min:?} .. {max:?}")]
    InvalidArena { min: [f64; 2], max: [f64; 2] },
    #[error("elapsed time must be finite and non-negative, got {0}")]
    InvalidStep(f64),
    #[error("step ratio must be positive and finite, got {0}")]
    InvalidRatio(f64),
    #[error("probe grid needs at least one column and one row, got {cols}x{rows}")]
    EmptyProbeGrid { cols: usize, rows: usize },
}
