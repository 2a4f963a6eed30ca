//! High-level runtime engine settings
//!
//! Selects how peers are excluded from a body's own force / contact sums,
//! which position the wall test probes, and the fixed step used by
//! headless runs

use crate::configuration::config::{PeerExclusion, WallProbe};

#[derive(Debug, Clone)]
pub struct Engine {
    pub exclusion: PeerExclusion, // coordinate (legacy) or identity
    pub wall_probe: WallProbe,    // staged or committed position for edge tests
    pub dt: f64,                  // fixed step for headless runs
    pub frames: u64,              // default number of frames for headless runs
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            exclusion: PeerExclusion::Coordinate,
            wall_probe: WallProbe::Staged,
            dt: 1.0 / 60.0,
            frames: 600,
        }
    }
}
