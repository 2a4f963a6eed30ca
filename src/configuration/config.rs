//! Configuration types for loading playground scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – peer exclusion, wall probe, headless step/frames
//! - [`ParametersConfig`] – default body properties and UI step ratio
//! - [`ArenaConfig`]      – the rectangular boundary
//! - [`ProbeGridConfig`]  – optional grid of force-field probes
//! - [`BodyConfig`]       – initial balls and satellites
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! Every section is optional; missing values fall back to the classroom
//! defaults.
//!
//! ```yaml
//! engine:
//!   exclusion: coordinate   # or identity
//!   wall_probe: staged      # or committed
//!   dt: 0.016               # fixed step for headless runs
//!   frames: 600
//!
//! parameters:
//!   step_ratio: 1.25
//!   ball: { radius: 5.0, mass: 0.1, charge: 0.5 }
//!   satellite: { radius: 10.0, mass: 5.0, charge: 5.0, omega: 0.2 }
//!
//! arena: { min: [0.0, 0.0], max: [720.0, 720.0] }
//! probes: { cols: 12, rows: 12 }
//!
//! bodies:
//!   - kind: ball
//!     x: [260.0, 260.0]
//!     charge: 0.0
//!   - kind: satellite
//!     orbit_radius: 300.0
//!     angle: 0.0
//! ```
//!
//! Body fields left out take the matching `parameters` default. Satellites
//! orbit the arena center unless `center` is given.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::simulation::error::SimError;

/// Which peers are left out of a body's force and contact sums
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PeerExclusion {
    #[serde(rename = "coordinate")] // Peer must differ in both x and y; bodies sharing one coordinate ignore each other
    #[default]
    Coordinate,

    #[serde(rename = "identity")] // Only the body itself is left out
    Identity,
}

/// Which position the wall test looks at
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallProbe {
    #[serde(rename = "staged")] // Tentative next position after integration and contacts
    #[default]
    Staged,

    #[serde(rename = "committed")] // Position at the start of the frame
    Committed,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct EngineConfig {
    pub exclusion: PeerExclusion,
    pub wall_probe: WallProbe,
    pub dt: f64,     // fixed step size for headless runs
    pub frames: u64, // frames to run headless
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            exclusion: PeerExclusion::default(),
            wall_probe: WallProbe::default(),
            dt: 1.0 / 60.0,
            frames: 600,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct BallDefaultsConfig {
    pub radius: f64,
    pub mass: f64,
    pub charge: f64,
}

impl Default for BallDefaultsConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            mass: 0.1,
            charge: 0.5,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct SatelliteDefaultsConfig {
    pub radius: f64,
    pub mass: f64,
    pub charge: f64,
    pub omega: f64,
}

impl Default for SatelliteDefaultsConfig {
    fn default() -> Self {
        Self {
            radius: 10.0,
            mass: 5.0,
            charge: 5.0,
            omega: 0.2,
        }
    }
}

/// Default body properties and the ratio used by every increase/decrease control
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ParametersConfig {
    pub step_ratio: f64,
    pub ball: BallDefaultsConfig,
    pub satellite: SatelliteDefaultsConfig,
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            step_ratio: 1.25,
            ball: BallDefaultsConfig::default(),
            satellite: SatelliteDefaultsConfig::default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ArenaConfig {
    pub min: [f64; 2], // lower corner
    pub max: [f64; 2], // upper corner
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            min: [0.0, 0.0],
            max: [720.0, 720.0],
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct ProbeGridConfig {
    pub cols: usize,
    pub rows: usize,
}

/// Initial state of one ball or satellite
#[derive(Deserialize, Debug, Clone)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BodyConfig {
    Ball {
        x: [f64; 2],           // initial position
        #[serde(default)]
        v: [f64; 2],           // initial velocity
        radius: Option<f64>,
        mass: Option<f64>,
        charge: Option<f64>,   // signed charge
    },
    Satellite {
        orbit_radius: f64,
        #[serde(default)]
        angle: f64,            // initial angle in rad
        omega: Option<f64>,    // signed angular velocity
        center: Option<[f64; 2]>,
        radius: Option<f64>,
        mass: Option<f64>,
        charge: Option<f64>,   // signed charge
    },
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // Engine-level configuration
    pub parameters: ParametersConfig, // Defaults and step ratio
    pub arena: ArenaConfig,           // Boundary rectangle
    pub probes: Option<ProbeGridConfig>, // Force-field probe grid, none if absent
    pub bodies: Vec<BodyConfig>,      // Initial balls and satellites
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read scenario file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse scenario: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Invalid scenario: {0}")]
    Invalid(#[from] SimError),
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}
