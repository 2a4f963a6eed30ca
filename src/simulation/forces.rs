//! Force contributors for the playground
//!
//! Both laws deliberately fall off with distance, not distance squared:
//! `|F| * |d| = k / |d|` per pair means the force vector `d * k / |d|` keeps
//! growing as bodies separate. It exaggerates long range effects on screen.

use crate::configuration::config::PeerExclusion;
use crate::simulation::geometry::distance;
use crate::simulation::states::{Body, FieldSample, NVec2};

/// Whether `bodies[j]` contributes force / contacts to `bodies[i]`
///
/// Only balls and satellites take part. With [`PeerExclusion::Coordinate`]
/// the peer must differ from the body in *both* committed coordinates, so
/// distinct bodies sharing an x or a y ignore each other.
pub fn is_peer(exclusion: PeerExclusion, i: usize, j: usize, bodies: &[Body]) -> bool {
    let body = &bodies[i];
    let other = &bodies[j];
    if !other.kind.is_physical() {
        return false;
    }
    match exclusion {
        PeerExclusion::Coordinate => other.x.x != body.x.x && other.x.y != body.x.y,
        PeerExclusion::Identity => i != j,
    }
}

/// Trait for pairwise force sources
/// Implementations return the force `other` exerts on `body`
pub trait ForceLaw {
    fn pair_force(&self, body: &Body, other: &Body) -> NVec2;
}

/// Mass attraction, pulls `body` toward `other`
pub struct PseudoGravity;

impl ForceLaw for PseudoGravity {
    fn pair_force(&self, body: &Body, other: &Body) -> NVec2 {
        let d = other.x - body.x;
        let magnitude = body.m * other.m / distance(&body.x, &other.x);
        d * magnitude
    }
}

/// Charge interaction, direction flipped relative to gravity so like charges
/// repel and opposite charges attract
pub struct PseudoElectric;

impl ForceLaw for PseudoElectric {
    fn pair_force(&self, body: &Body, other: &Body) -> NVec2 {
        let d = body.x - other.x;
        let magnitude = body.q * other.q / distance(&body.x, &other.x);
        d * magnitude
    }
}

/// Sum of `law` over every peer of `bodies[i]`, zero when there is none
pub fn force_on<L>(law: &L, i: usize, bodies: &[Body], exclusion: PeerExclusion) -> NVec2
where
    L: ForceLaw + ?Sized,
{
    let body = &bodies[i];
    let mut force = NVec2::zeros();
    for j in 0..bodies.len() {
        if is_peer(exclusion, i, j, bodies) {
            force += law.pair_force(body, &bodies[j]);
        }
    }
    force
}

/// Gravity and electric components at `bodies[i]`, kept apart for display
pub fn sample_field(i: usize, bodies: &[Body], exclusion: PeerExclusion) -> FieldSample {
    FieldSample {
        gravity: force_on(&PseudoGravity, i, bodies, exclusion),
        electric: force_on(&PseudoElectric, i, bodies, exclusion),
    }
}

/// Collection of force laws acting on balls
/// Each term implements [`ForceLaw`] and their contributions are summed
/// into a single force vector per body
pub struct ForceSet {
    terms: Vec<Box<dyn ForceLaw + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Gravity plus electric, the set the classroom program uses
    pub fn standard() -> Self {
        Self::new().with(PseudoGravity).with(PseudoElectric)
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceLaw + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Total force on `bodies[i]` from all terms
    pub fn accumulate_force(&self, i: usize, bodies: &[Body], exclusion: PeerExclusion) -> NVec2 {
        let mut total = NVec2::zeros();
        for term in &self.terms {
            total += force_on(term.as_ref(), i, bodies, exclusion);
        }
        total
    }
}

impl Default for ForceSet {
    fn default() -> Self {
        Self::standard()
    }
}
