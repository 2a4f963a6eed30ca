//! Build fully-initialized playground scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - session defaults and ratios (`Parameters`)
//! - the body registry (`System`): boundary, probes, then bodies in
//!   file order
//! - active force set (`ForceSet`)
//!
//! The UI layer (or the headless runner) owns one `Scenario` for the whole
//! session and drives it one frame at a time.

use std::f64::consts::PI;

use log::info;

use crate::configuration::config::{ArenaConfig, BodyConfig, ProbeGridConfig, ScenarioConfig};
use crate::simulation::clock::FrameClock;
use crate::simulation::driver::{step_frame, tick, FrameReport};
use crate::simulation::engine::Engine;
use crate::simulation::error::SimError;
use crate::simulation::forces::ForceSet;
use crate::simulation::params::{BallDefaults, Parameters, SatelliteDefaults, StepRatios};
use crate::simulation::registry::{Adjustment, Direction, Placement};
use crate::simulation::states::{Arena, NVec2, Orbit, System};

pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: ForceSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Engine (runtime) from EngineConfig
        let e_cfg = cfg.engine;
        let engine = Engine {
            exclusion: e_cfg.exclusion,
            wall_probe: e_cfg.wall_probe,
            dt: e_cfg.dt,
            frames: e_cfg.frames,
        };

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            ball: BallDefaults {
                radius: p_cfg.ball.radius,
                mass: p_cfg.ball.mass,
                charge: p_cfg.ball.charge,
            },
            satellite: SatelliteDefaults {
                radius: p_cfg.satellite.radius,
                mass: p_cfg.satellite.mass,
                charge: p_cfg.satellite.charge,
                omega: p_cfg.satellite.omega,
            },
            ratios: StepRatios::uniform(p_cfg.step_ratio),
        };
        if !(p_cfg.step_ratio > 0.0 && p_cfg.step_ratio.is_finite()) {
            return Err(SimError::InvalidRatio(p_cfg.step_ratio));
        }

        // Registry: boundary first, then probes, then bodies in file order
        let mut system = System::new();
        let arena = Arena::new(NVec2::from(cfg.arena.min), NVec2::from(cfg.arena.max));
        system.add_boundary(arena)?;
        if let Some(grid) = &cfg.probes {
            system.add_probe_grid(&arena, grid.cols, grid.rows)?;
        }

        for bc in &cfg.bodies {
            add_body(&mut system, bc, &arena, &parameters)?;
        }

        info!(
            "scenario built: {} bodies, exclusion {:?}, wall probe {:?}",
            system.bodies.len(),
            engine.exclusion,
            engine.wall_probe
        );

        Ok(Self {
            engine,
            parameters,
            system,
            forces: ForceSet::standard(),
        })
    }

    /// The classroom start-up layout: 720x720 arena, 12x12 probes,
    /// three satellites and four balls around the center
    pub fn classroom() -> Result<Self, SimError> {
        Self::build_scenario(classroom_config())
    }

    /// Advance one frame of `dt` seconds
    pub fn step(&mut self, dt: f64) -> Result<FrameReport, SimError> {
        step_frame(&mut self.system, &self.forces, &self.engine, dt)
    }

    /// Advance one frame using the wall-clock time since the last tick
    pub fn tick(&mut self, clock: &mut FrameClock) -> Result<FrameReport, SimError> {
        tick(&mut self.system, &self.forces, &self.engine, clock)
    }

    /// Click-to-place with the session defaults
    pub fn place(&mut self, point: NVec2, placement: &Placement) -> Result<Option<usize>, SimError> {
        self.system.place(point, placement, &self.parameters)
    }

    /// Increase/decrease control with the session ratios
    pub fn adjust(&mut self, adjustment: Adjustment, direction: Direction) -> Result<usize, SimError> {
        self.system.adjust(adjustment, direction, &self.parameters)
    }
}

fn add_body(system: &mut System, bc: &BodyConfig, arena: &Arena, params: &Parameters) -> Result<usize, SimError> {
    match *bc {
        BodyConfig::Ball { x, v, radius, mass, charge } => {
            let d = params.ball;
            system.add_ball(
                NVec2::from(x),
                NVec2::from(v),
                radius.unwrap_or(d.radius),
                mass.unwrap_or(d.mass),
                charge.unwrap_or(d.charge),
            )
        }
        BodyConfig::Satellite { orbit_radius, angle, omega, center, radius, mass, charge } => {
            let d = params.satellite;
            let orbit = Orbit {
                center: center.map(NVec2::from).unwrap_or_else(|| arena.center()),
                radius: orbit_radius,
                angle,
                omega: omega.unwrap_or(d.omega),
            };
            system.add_satellite(orbit, radius.unwrap_or(d.radius), mass.unwrap_or(d.mass), charge.unwrap_or(d.charge))
        }
    }
}

fn classroom_config() -> ScenarioConfig {
    let mut cfg = ScenarioConfig {
        arena: ArenaConfig::default(),
        probes: Some(ProbeGridConfig { cols: 12, rows: 12 }),
        ..Default::default()
    };
    let p = &cfg.parameters;
    let (q_sat, w) = (p.satellite.charge, p.satellite.omega);
    let q_ball = p.ball.charge;
    let c = 360.0;

    let satellite = |orbit_radius: f64, angle: f64, omega: f64, charge: f64| BodyConfig::Satellite {
        orbit_radius,
        angle,
        omega: Some(omega),
        center: None,
        radius: None,
        mass: None,
        charge: Some(charge),
    };
    let ball = |x: f64, y: f64, charge: f64| BodyConfig::Ball {
        x: [x, y],
        v: [0.0, 0.0],
        radius: None,
        mass: None,
        charge: Some(charge),
    };

    cfg.bodies = vec![
        satellite(300.0, 0.0, w, 0.0),
        satellite(280.0, PI / 3.0, -w, q_sat),
        satellite(320.0, PI / 2.0, w, -q_sat),
        ball(c - 100.0, c - 100.0, 0.0),
        ball(c + 100.0, c + 100.0, 0.0),
        ball(c, c + 150.0, q_ball),
        ball(c, c - 150.0, -q_ball),
    ];
    cfg
}
