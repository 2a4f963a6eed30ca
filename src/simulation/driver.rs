//! Frame driver
//!
//! One frame is three passes over the registry:
//! 1. movement  – every body stages its next state from committed peers
//! 2. resolve   – every ball resolves contacts and walls, still against
//!                committed peers
//! 3. commit    – staged state becomes committed for every body
//!
//! Nothing a body computes in a frame is visible to its peers before the
//! next frame.

use log::warn;

use crate::simulation::clock::FrameClock;
use crate::simulation::collision::resolve;
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::forces::ForceSet;
use crate::simulation::integrator::{commit, movement};
use crate::simulation::states::System;

/// Per-frame counters, mostly for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub contacts: usize,
    pub wall_hits: usize,
}

/// Advance `sys` by one frame of `dt` seconds
pub fn step_frame(sys: &mut System, forces: &ForceSet, engine: &Engine, dt: f64) -> Result<FrameReport, SimError> {
    if !(dt.is_finite() && dt >= 0.0) {
        return Err(SimError::InvalidStep(dt));
    }

    let n = sys.bodies.len();
    for i in 0..n {
        movement(i, &mut sys.bodies, forces, engine.exclusion, dt);
    }

    // Resolve against committed peers, store once every ball is done
    let mut report = FrameReport::default();
    let mut resolved = Vec::new();
    for i in 0..n {
        if sys.bodies[i].kind.is_movable() {
            let r = resolve(i, &sys.bodies, engine.exclusion, engine.wall_probe);
            report.contacts += r.contacts;
            report.wall_hits += r.wall_hits;
            resolved.push((i, r));
        }
    }
    for (i, r) in resolved {
        let body = &mut sys.bodies[i];
        body.x_next = r.x_next;
        body.v_next = r.v_next;
    }

    for body in sys.bodies.iter_mut() {
        commit(body);
    }

    sys.t += dt;
    sys.frame += 1;

    if !sys.is_finite() {
        warn!("frame {}: non-finite body state (coincident bodies?)", sys.frame);
    }
    Ok(report)
}

/// Advance `sys` by the wall-clock time since the previous tick
pub fn tick(sys: &mut System, forces: &ForceSet, engine: &Engine, clock: &mut FrameClock) -> Result<FrameReport, SimError> {
    let dt = clock.lap();
    step_frame(sys, forces, engine, dt)
}
