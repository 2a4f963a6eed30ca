//! Renderer-facing output and simple diagnostics
//!
//! A [`FrameSnapshot`] is everything a renderer needs for one frame:
//! circles for balls and satellites, three line segments per probe
//! (gravity, electric, total) and the arena rectangle.

use serde::Serialize;

use crate::simulation::states::{BodyKind, ChargeTint, NVec2, System};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSnapshot {
    pub gravity: [f64; 2],
    pub electric: [f64; 2],
    pub total: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub kind: &'static str,
    pub position: [f64; 2],
    pub radius: f64,
    pub tint: ChargeTint,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<FieldSnapshot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extent: Option<[f64; 2]>, // boundary max corner, position is min
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameSnapshot {
    pub frame: u64,
    pub t: f64,
    pub bodies: Vec<BodySnapshot>,
}

fn arr(v: &NVec2) -> [f64; 2] {
    [v.x, v.y]
}

impl System {
    /// Committed state of every body, in registry order
    pub fn snapshot(&self) -> FrameSnapshot {
        let bodies = self
            .bodies
            .iter()
            .map(|b| {
                let field = match &b.kind {
                    BodyKind::Probe(sample) => Some(FieldSnapshot {
                        gravity: arr(&sample.gravity),
                        electric: arr(&sample.electric),
                        total: arr(&sample.total()),
                    }),
                    _ => None,
                };
                let extent = match &b.kind {
                    BodyKind::Boundary(arena) => Some(arr(&arena.max)),
                    _ => None,
                };
                BodySnapshot {
                    kind: b.kind.label(),
                    position: arr(&b.x),
                    radius: b.radius,
                    tint: b.tint(),
                    field,
                    extent,
                }
            })
            .collect();

        FrameSnapshot {
            frame: self.frame,
            t: self.t,
            bodies,
        }
    }

    /// Sum of 1/2 m |v|^2 over balls
    pub fn kinetic_energy(&self) -> f64 {
        self.bodies
            .iter()
            .filter(|b| b.kind.is_movable())
            .map(|b| 0.5 * b.m * b.v.norm_squared())
            .sum()
    }

    /// Sum of m v over balls
    pub fn momentum(&self) -> NVec2 {
        self.bodies
            .iter()
            .filter(|b| b.kind.is_movable())
            .fold(NVec2::zeros(), |acc, b| acc + b.v * b.m)
    }

    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(|b| b.is_finite())
    }
}
