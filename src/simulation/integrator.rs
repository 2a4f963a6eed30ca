//! Per-body movement for one frame
//!
//! Balls use explicit (semi-implicit) Euler on the summed force, satellites
//! advance along their orbit, probes resample the field. All of them only
//! write their own staged fields; committed state is touched by [`commit`].

use crate::configuration::config::PeerExclusion;
use crate::simulation::forces::{sample_field, ForceSet};
use crate::simulation::geometry::orbit_point;
use crate::simulation::states::{Body, BodyKind, NVec2};

/// Copy committed state into the staged fields and record `dt`
pub fn stage(body: &mut Body, dt: f64) {
    body.x_next = body.x;
    body.v_next = body.v;
    body.dt_last = dt;
}

/// Euler step from the committed state under `force`
/// v_next = v + (F / m) dt, x_next = x + v_next dt
pub fn euler_step(body: &mut Body, force: NVec2, dt: f64) {
    stage(body, dt);
    let a = force / body.m;
    body.v_next = body.v + a * dt;
    body.x_next = body.x + body.v_next * dt;
}

/// Advance a satellite's angle by `omega * dt` and place it on its orbit
pub fn orbit_step(body: &mut Body, dt: f64) {
    stage(body, dt);
    if let BodyKind::Satellite(orbit) = &mut body.kind {
        orbit.angle += orbit.omega * dt;
        body.x_next = orbit_point(&orbit.center, orbit.radius, orbit.angle);
    }
}

/// Movement phase for `bodies[i]`, reads only committed peer state
pub fn movement(i: usize, bodies: &mut [Body], forces: &ForceSet, exclusion: PeerExclusion, dt: f64) {
    match bodies[i].kind {
        BodyKind::Ball => {
            let force = forces.accumulate_force(i, bodies, exclusion);
            euler_step(&mut bodies[i], force, dt);
        }
        BodyKind::Satellite(_) => orbit_step(&mut bodies[i], dt),
        BodyKind::Probe(_) => {
            let sample = sample_field(i, bodies, exclusion);
            let probe = &mut bodies[i];
            stage(probe, dt);
            probe.kind = BodyKind::Probe(sample);
        }
        BodyKind::Boundary(_) => stage(&mut bodies[i], dt),
    }
}

/// Staged state becomes committed state
pub fn commit(body: &mut Body) {
    body.x = body.x_next;
    body.v = body.v_next;
}
