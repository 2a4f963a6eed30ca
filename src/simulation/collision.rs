//! Contact handling for balls
//!
//! Two passes run on a ball's staged state, in this order:
//! 1. body-body: 1D elastic exchange applied to each axis independently
//! 2. body-boundary: velocity reflection at the arena edges plus a final
//!    clamp that keeps the ball `radius` away from every wall
//!
//! Peers are always read through their committed state. Results are
//! returned, not written, so the caller decides when to store them.

use log::debug;

use crate::configuration::config::{PeerExclusion, WallProbe};
use crate::simulation::forces::is_peer;
use crate::simulation::geometry::distance;
use crate::simulation::states::{Arena, Body, BodyKind, NVec2};

/// Staged position and velocity after a resolution pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    pub x_next: NVec2,
    pub v_next: NVec2,
    pub contacts: usize, // body-body contacts applied
    pub wall_hits: usize, // edges that reflected the ball
}

/// Post-collision velocity of a body of mass `m` moving at `v` hitting a
/// body of mass `m_other` moving at `v_other`
pub fn elastic_velocity(m: f64, v: NVec2, m_other: f64, v_other: NVec2) -> NVec2 {
    let sum = m + m_other;
    v * ((m - m_other) / sum) + v_other * (2.0 * m_other / sum)
}

/// Body-body pass for `bodies[i]`
///
/// Every peer overlapping the staged position replaces the staged velocity
/// with the elastic exchange against that peer and re-advances from the
/// committed position. Later peers overwrite earlier ones.
pub fn resolve_contacts(i: usize, bodies: &[Body], exclusion: PeerExclusion) -> Resolved {
    let body = &bodies[i];
    let mut out = Resolved {
        x_next: body.x_next,
        v_next: body.v_next,
        contacts: 0,
        wall_hits: 0,
    };

    for (j, other) in bodies.iter().enumerate() {
        if !is_peer(exclusion, i, j, bodies) {
            continue;
        }
        if distance(&out.x_next, &other.x) < body.radius + other.radius {
            out.v_next = elastic_velocity(body.m, body.v, other.m, other.v);
            out.x_next = body.x + out.v_next * body.dt_last;
            out.contacts += 1;
            debug!("contact: body {i} with {} {j}", other.kind.label());
        }
    }
    out
}

/// Reflect a staged state off the edges of `arena`
///
/// `probe` is the position tested against each edge. Every edge within
/// `radius` of it flips the matching velocity component, pins that
/// coordinate to `edge ± radius` and advances both coordinates by the
/// reflected velocity over `dt`. The result is then clamped inside the
/// arena shrunk by `radius`.
pub fn reflect_off_walls(
    arena: &Arena,
    probe: NVec2,
    x_next: NVec2,
    v_next: NVec2,
    radius: f64,
    dt: f64,
) -> (NVec2, NVec2, usize) {
    let mut x = x_next;
    let mut v = v_next;
    let mut hits = 0;

    if probe.x - arena.min.x < radius {
        v.x = -v.x;
        x.x = arena.min.x + radius;
        x += v * dt;
        hits += 1;
    }
    if arena.max.x - probe.x < radius {
        v.x = -v.x;
        x.x = arena.max.x - radius;
        x += v * dt;
        hits += 1;
    }
    if probe.y - arena.min.y < radius {
        v.y = -v.y;
        x.y = arena.min.y + radius;
        x += v * dt;
        hits += 1;
    }
    if arena.max.y - probe.y < radius {
        v.y = -v.y;
        x.y = arena.max.y - radius;
        x += v * dt;
        hits += 1;
    }

    // Containment clamp, whatever edge fired
    if x.x - arena.min.x < radius {
        x.x = arena.min.x + radius;
    }
    if arena.max.x - x.x < radius {
        x.x = arena.max.x - radius;
    }
    if x.y - arena.min.y < radius {
        x.y = arena.min.y + radius;
    }
    if arena.max.y - x.y < radius {
        x.y = arena.max.y - radius;
    }

    (x, v, hits)
}

/// Full update pass for ball `bodies[i]`: contacts first, then every
/// boundary in registry order
pub fn resolve(i: usize, bodies: &[Body], exclusion: PeerExclusion, wall_probe: WallProbe) -> Resolved {
    let mut out = resolve_contacts(i, bodies, exclusion);
    let body = &bodies[i];

    for other in bodies {
        if let BodyKind::Boundary(arena) = &other.kind {
            let probe = match wall_probe {
                WallProbe::Staged => out.x_next,
                WallProbe::Committed => body.x,
            };
            let (x, v, hits) = reflect_off_walls(arena, probe, out.x_next, out.v_next, body.radius, body.dt_last);
            if hits > 0 {
                debug!("wall: body {i} reflected off {hits} edge(s)");
            }
            out.x_next = x;
            out.v_next = v;
            out.wall_hits += hits;
        }
    }
    out
}
