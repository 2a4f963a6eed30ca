//! Physical defaults and UI step ratios for the simulation
//!
//! `Parameters` holds the session settings the UI layer reads when it
//! creates or tweaks bodies:
//! - default radius / mass / charge for new balls,
//! - default radius / mass / charge / angular velocity for new satellites,
//! - multiplicative step ratios for the "increase / decrease" controls

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallDefaults {
    pub radius: f64,
    pub mass: f64,
    pub charge: f64, // magnitude, sign comes from the placement selection
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteDefaults {
    pub radius: f64,
    pub mass: f64,
    pub charge: f64, // magnitude, sign comes from the placement selection
    pub omega: f64,  // rad / sec, sign comes from the rotation selection
}

/// Ratio applied by one "increase" click; "decrease" uses the reciprocal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRatios {
    pub satellite_speed: f64,
    pub satellite_mass: f64,
    pub satellite_charge: f64,
    pub ball_mass: f64,
    pub ball_charge: f64,
}

impl StepRatios {
    pub fn uniform(ratio: f64) -> Self {
        Self {
            satellite_speed: ratio,
            satellite_mass: ratio,
            satellite_charge: ratio,
            ball_mass: ratio,
            ball_charge: ratio,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub ball: BallDefaults,
    pub satellite: SatelliteDefaults,
    pub ratios: StepRatios,
}

pub const DEFAULT_STEP_RATIO: f64 = 1.25;

impl Default for Parameters {
    fn default() -> Self {
        Self {
            ball: BallDefaults {
                radius: 5.0,
                mass: 0.1,
                charge: 0.5,
            },
            satellite: SatelliteDefaults {
                radius: 10.0,
                mass: 5.0,
                charge: 5.0,
                omega: 0.2,
            },
            ratios: StepRatios::uniform(DEFAULT_STEP_RATIO),
        }
    }
}
