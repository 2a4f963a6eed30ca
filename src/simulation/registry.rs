//! Body registry operations
//!
//! Bodies are only ever appended; indices returned here stay valid for the
//! rest of the session. Creation validates the physical inputs, the rest of
//! the simulation assumes them.

use log::{debug, info};

use crate::simulation::error::SimError;
use crate::simulation::geometry::{distance, in_open_box, orbit_point};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Arena, Body, BodyKind, FieldSample, NVec2, Orbit, System};

/// What a click in the arena creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Ball,
    Satellite,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChargeSign {
    Positive,
    Negative,
    Neutral,
}

impl ChargeSign {
    pub fn factor(self) -> f64 {
        match self {
            ChargeSign::Positive => 1.0,
            ChargeSign::Negative => -1.0,
            ChargeSign::Neutral => 0.0,
        }
    }
}

/// Orbit direction of a newly placed satellite (`Cw` keeps omega positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Cw,
    Ccw,
}

impl Rotation {
    pub fn factor(self) -> f64 {
        match self {
            Rotation::Cw => 1.0,
            Rotation::Ccw => -1.0,
        }
    }
}

/// Current selection of the placement controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub object: ObjectType,
    pub charge: ChargeSign,
    pub rotation: Rotation,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            object: ObjectType::Satellite,
            charge: ChargeSign::Positive,
            rotation: Rotation::Cw,
        }
    }
}

/// Live parameter controls, each applied to every body of its kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adjustment {
    SatelliteSpeed,
    SatelliteMass,
    SatelliteCharge,
    BallMass,
    BallCharge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Increase,
    Decrease,
}

fn check_mass(kind: &'static str, m: f64) -> Result<(), SimError> {
    if m > 0.0 && m.is_finite() {
        Ok(())
    } else {
        Err(SimError::NonPositiveMass { kind, mass: m })
    }
}

fn check_radius(kind: &'static str, radius: f64) -> Result<(), SimError> {
    if radius >= 0.0 {
        Ok(())
    } else {
        Err(SimError::NegativeRadius { kind, radius })
    }
}

impl System {
    fn push(&mut self, kind: BodyKind, x: NVec2, v: NVec2, m: f64, q: f64, radius: f64) -> usize {
        self.bodies.push(Body {
            kind,
            x,
            x_next: x,
            v,
            v_next: v,
            m,
            q,
            radius,
            dt_last: 0.0,
        });
        self.bodies.len() - 1
    }

    /// Register the arena walls
    pub fn add_boundary(&mut self, arena: Arena) -> Result<usize, SimError> {
        if !(arena.min.x < arena.max.x && arena.min.y < arena.max.y) {
            return Err(SimError::InvalidArena {
                min: [arena.min.x, arena.min.y],
                max: [arena.max.x, arena.max.y],
            });
        }
        Ok(self.push(BodyKind::Boundary(arena), arena.min, NVec2::zeros(), 0.0, 0.0, 0.0))
    }

    pub fn add_ball(&mut self, x: NVec2, v: NVec2, radius: f64, m: f64, q: f64) -> Result<usize, SimError> {
        check_mass("ball", m)?;
        check_radius("ball", radius)?;
        Ok(self.push(BodyKind::Ball, x, v, m, q, radius))
    }

    /// Satellite starting on `orbit` at its current angle
    pub fn add_satellite(&mut self, orbit: Orbit, radius: f64, m: f64, q: f64) -> Result<usize, SimError> {
        check_mass("satellite", m)?;
        check_radius("satellite", radius)?;
        let x = orbit_point(&orbit.center, orbit.radius, orbit.angle);
        Ok(self.push(BodyKind::Satellite(orbit), x, NVec2::zeros(), m, q, radius))
    }

    /// Field probe with unit mass and unit charge
    pub fn add_probe(&mut self, x: NVec2) -> usize {
        self.push(BodyKind::Probe(FieldSample::zero()), x, NVec2::zeros(), 1.0, 1.0, 0.0)
    }

    /// `cols x rows` probes evenly spread over the interior of `arena`
    pub fn add_probe_grid(&mut self, arena: &Arena, cols: usize, rows: usize) -> Result<(), SimError> {
        if cols == 0 || rows == 0 {
            return Err(SimError::EmptyProbeGrid { cols, rows });
        }
        let size = arena.size();
        for i in 0..cols {
            for j in 0..rows {
                let fx = (i + 1) as f64 / (cols + 1) as f64;
                let fy = (j + 1) as f64 / (rows + 1) as f64;
                self.add_probe(arena.min + NVec2::new(fx * size.x, fy * size.y));
            }
        }
        Ok(())
    }

    /// First registered boundary, if any
    pub fn arena(&self) -> Option<Arena> {
        self.bodies.iter().find_map(|b| match b.kind {
            BodyKind::Boundary(arena) => Some(arena),
            _ => None,
        })
    }

    /// Click-to-place: create the selected object at `point`
    ///
    /// Balls appear at the point. Satellites orbit the arena center through
    /// the point. Points outside the open arena (or with no arena) are
    /// ignored and return `Ok(None)`.
    pub fn place(&mut self, point: NVec2, placement: &Placement, params: &Parameters) -> Result<Option<usize>, SimError> {
        let Some(arena) = self.arena() else {
            return Ok(None);
        };
        if !in_open_box(&point, &arena.min, &arena.max) {
            return Ok(None);
        }

        let sign = placement.charge.factor();
        let index = match placement.object {
            ObjectType::Ball => {
                let d = params.ball;
                self.add_ball(point, NVec2::zeros(), d.radius, d.mass, d.charge * sign)?
            }
            ObjectType::Satellite => {
                let d = params.satellite;
                let center = arena.center();
                let offset = point - center;
                let orbit = Orbit {
                    center,
                    radius: distance(&point, &center),
                    angle: offset.y.atan2(offset.x),
                    omega: d.omega * placement.rotation.factor(),
                };
                self.add_satellite(orbit, d.radius, d.mass, d.charge * sign)?
            }
        };
        debug!("placed {:?} #{index} at ({:.1}, {:.1})", placement.object, point.x, point.y);
        Ok(Some(index))
    }

    /// Multiply the targeted property of every body of the kind by the
    /// configured ratio (or its reciprocal). Returns how many bodies changed.
    pub fn adjust(&mut self, adjustment: Adjustment, direction: Direction, params: &Parameters) -> Result<usize, SimError> {
        let r = &params.ratios;
        let ratio = match adjustment {
            Adjustment::SatelliteSpeed => r.satellite_speed,
            Adjustment::SatelliteMass => r.satellite_mass,
            Adjustment::SatelliteCharge => r.satellite_charge,
            Adjustment::BallMass => r.ball_mass,
            Adjustment::BallCharge => r.ball_charge,
        };
        if !(ratio > 0.0 && ratio.is_finite()) {
            return Err(SimError::InvalidRatio(ratio));
        }
        let factor = match direction {
            Direction::Increase => ratio,
            Direction::Decrease => ratio.recip(),
        };

        let mut changed = 0;
        for body in self.bodies.iter_mut() {
            let hit = match (adjustment, &mut body.kind) {
                (Adjustment::SatelliteSpeed, BodyKind::Satellite(orbit)) => {
                    orbit.omega *= factor;
                    true
                }
                (Adjustment::SatelliteMass, BodyKind::Satellite(_)) | (Adjustment::BallMass, BodyKind::Ball) => {
                    body.m *= factor;
                    true
                }
                (Adjustment::SatelliteCharge, BodyKind::Satellite(_)) | (Adjustment::BallCharge, BodyKind::Ball) => {
                    body.q *= factor;
                    true
                }
                _ => false,
            };
            if hit {
                changed += 1;
            }
        }
        info!("{adjustment:?} {direction:?} x{factor:.4} applied to {changed} bodies");
        Ok(changed)
    }
}
