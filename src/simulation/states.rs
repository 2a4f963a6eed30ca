//! Core state types for the playground simulation.
//!
//! Every simulated entity is a single [`Body`] record; what it can do is
//! decided by its [`BodyKind`] tag:
//! - `Ball`      – pushed around by forces, collides with peers and walls
//! - `Satellite` – moves on a prescribed circular orbit, still pulls on others
//! - `Probe`     – fixed grid point sampling the force field for display
//! - `Boundary`  – rectangular arena walls, collision target only
//!
//! The [`System`] holds the ordered body registry plus the elapsed simulation
//! time and frame counter.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

pub type NVec2 = Vector2<f64>;

/// Axis-aligned rectangle `[min, max]` that contains every ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub min: NVec2, // lower corner
    pub max: NVec2, // upper corner
}

impl Arena {
    pub fn new(min: NVec2, max: NVec2) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> NVec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> NVec2 {
        self.max - self.min
    }
}

/// Circular path followed by a satellite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub center: NVec2, // fixed orbit center
    pub radius: f64,   // orbit radius
    pub angle: f64,    // current angle in rad, never wrapped
    pub omega: f64,    // angular velocity in rad / sec
}

/// Force components sampled at a probe for the last frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    pub gravity: NVec2,
    pub electric: NVec2,
}

impl FieldSample {
    pub fn zero() -> Self {
        Self {
            gravity: NVec2::zeros(),
            electric: NVec2::zeros(),
        }
    }

    pub fn total(&self) -> NVec2 {
        self.gravity + self.electric
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyKind {
    Ball,
    Satellite(Orbit),
    Probe(FieldSample),
    Boundary(Arena),
}

impl BodyKind {
    /// Balls and satellites: they exert force and can be hit
    pub fn is_physical(&self) -> bool {
        matches!(self, BodyKind::Ball | BodyKind::Satellite(_))
    }

    /// Only balls are moved by force integration and resolve collisions
    pub fn is_movable(&self) -> bool {
        matches!(self, BodyKind::Ball)
    }

    pub fn label(&self) -> &'static str {
        match self {
            BodyKind::Ball => "ball",
            BodyKind::Satellite(_) => "satellite",
            BodyKind::Probe(_) => "probe",
            BodyKind::Boundary(_) => "boundary",
        }
    }
}

/// Display tint picked from the sign of the charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChargeTint {
    Positive,
    Negative,
    Neutral,
}

impl ChargeTint {
    pub fn from_charge(q: f64) -> Self {
        if q > 0.0 {
            ChargeTint::Positive
        } else if q < 0.0 {
            ChargeTint::Negative
        } else {
            ChargeTint::Neutral
        }
    }
}

#[derive(Debug, Clone)]
pub struct Body {
    pub kind: BodyKind,
    pub x: NVec2,      // committed position
    pub x_next: NVec2, // staged position for the current frame
    pub v: NVec2,      // committed velocity
    pub v_next: NVec2, // staged velocity for the current frame
    pub m: f64,        // mass
    pub q: f64,        // charge
    pub radius: f64,   // collision radius, 0 for point-like bodies
    pub dt_last: f64,  // elapsed time used by the last movement
}

impl Body {
    pub fn tint(&self) -> ChargeTint {
        ChargeTint::from_charge(self.q)
    }

    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // ordered body registry
    pub t: f64,            // elapsed simulation time
    pub frame: u64,        // number of completed frames
}

impl System {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            t: 0.0,
            frame: 0,
        }
    }
}

impl Default for System {
    fn default() -> Self {
        Self::new()
    }
}
