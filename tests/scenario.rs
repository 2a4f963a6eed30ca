use approx::assert_relative_eq;

use fieldsim::configuration::config::BodyConfig;
use fieldsim::{
    Adjustment, BodyKind, ChargeSign, ChargeTint, ConfigError, Direction, NVec2, ObjectType, PeerExclusion, Placement,
    Rotation, Scenario, ScenarioConfig, SimError, WallProbe,
};

use std::path::PathBuf;

/// Bare scenario: default 720x720 arena, no probes, no bodies
pub fn empty_scenario() -> Scenario {
    Scenario::build_scenario(ScenarioConfig::default()).unwrap()
}

fn count(scenario: &Scenario, label: &str) -> usize {
    scenario.system.bodies.iter().filter(|b| b.kind.label() == label).count()
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn yaml_fills_missing_fields_with_defaults() {
    let yaml = r#"
engine:
  exclusion: identity
arena: { min: [0.0, 0.0], max: [500.0, 400.0] }
bodies:
  - kind: ball
    x: [100.0, 100.0]
  - kind: satellite
    orbit_radius: 50.0
    omega: -0.5
    charge: -2.0
"#;
    let cfg = ScenarioConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(cfg.engine.exclusion, PeerExclusion::Identity);
    assert_eq!(cfg.engine.wall_probe, WallProbe::Staged);
    assert!(cfg.probes.is_none());

    let scenario = Scenario::build_scenario(cfg).unwrap();
    let bodies = &scenario.system.bodies;
    assert_eq!(bodies.len(), 3);

    let ball = &bodies[1];
    assert_eq!(ball.kind, BodyKind::Ball);
    assert_eq!((ball.radius, ball.m, ball.q), (5.0, 0.1, 0.5));
    assert_eq!(ball.v, NVec2::zeros());

    let sat = &bodies[2];
    match sat.kind {
        BodyKind::Satellite(orbit) => {
            assert_eq!(orbit.center, NVec2::new(250.0, 200.0));
            assert_eq!(orbit.omega, -0.5);
            assert_eq!(orbit.angle, 0.0);
        }
        _ => panic!("second body is not a satellite"),
    }
    assert_relative_eq!(sat.x, NVec2::new(300.0, 200.0), epsilon = 1e-12);
    assert_eq!((sat.radius, sat.m, sat.q), (10.0, 5.0, -2.0));
}

#[test]
fn unknown_body_kind_is_a_parse_error() {
    let yaml = "bodies:\n  - kind: comet\n    x: [1.0, 2.0]\n";
    assert!(matches!(ScenarioConfig::from_yaml_str(yaml), Err(ConfigError::Parse(_))));
}

#[test]
fn invalid_body_is_rejected_at_build() {
    let mut cfg = ScenarioConfig::default();
    cfg.bodies.push(BodyConfig::Ball {
        x: [10.0, 10.0],
        v: [0.0, 0.0],
        radius: None,
        mass: Some(0.0),
        charge: None,
    });
    assert!(matches!(
        Scenario::build_scenario(cfg),
        Err(SimError::NonPositiveMass { kind: "ball", .. })
    ));

    let mut cfg = ScenarioConfig::default();
    cfg.parameters.step_ratio = -1.25;
    assert!(matches!(Scenario::build_scenario(cfg), Err(SimError::InvalidRatio(_))));
}

#[test]
fn shipped_classroom_file_matches_builtin() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join("classroom.yaml");
    let from_file = Scenario::build_scenario(ScenarioConfig::from_path(&path).unwrap()).unwrap();
    let builtin = Scenario::classroom().unwrap();

    assert_eq!(from_file.system.bodies.len(), builtin.system.bodies.len());
    for (a, b) in from_file.system.bodies.iter().zip(&builtin.system.bodies) {
        assert_eq!(a.kind.label(), b.kind.label());
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_eq!((a.m, a.q, a.radius), (b.m, b.q, b.radius));
    }
}

#[test]
fn missing_file_is_an_io_error() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join("does_not_exist.yaml");
    assert!(matches!(ScenarioConfig::from_path(&path), Err(ConfigError::Io(_))));
}

// ==================================================================================
// Classroom scenario tests
// ==================================================================================

#[test]
fn classroom_layout() {
    let scenario = Scenario::classroom().unwrap();

    assert_eq!(count(&scenario, "boundary"), 1);
    assert_eq!(count(&scenario, "probe"), 144);
    assert_eq!(count(&scenario, "satellite"), 3);
    assert_eq!(count(&scenario, "ball"), 4);

    let tints: Vec<ChargeTint> = scenario
        .system
        .bodies
        .iter()
        .filter(|b| b.kind.is_movable())
        .map(|b| b.tint())
        .collect();
    assert_eq!(
        tints,
        vec![ChargeTint::Neutral, ChargeTint::Neutral, ChargeTint::Positive, ChargeTint::Negative]
    );
}

#[test]
fn classroom_balls_stay_contained() {
    let mut scenario = Scenario::classroom().unwrap();
    let arena = scenario.system.arena().unwrap();

    for _ in 0..1500 {
        scenario.step(1.0 / 60.0).unwrap();
        for b in scenario.system.bodies.iter().filter(|b| b.kind.is_movable()) {
            assert!(b.is_finite(), "non-finite ball state: {:?}", b);
            assert!(b.x.x - arena.min.x >= b.radius && arena.max.x - b.x.x >= b.radius, "x escaped: {:?}", b.x);
            assert!(b.x.y - arena.min.y >= b.radius && arena.max.y - b.x.y >= b.radius, "y escaped: {:?}", b.x);
        }
    }
    assert_eq!(scenario.system.frame, 1500);
}

#[test]
fn classroom_snapshot_serializes() {
    let mut scenario = Scenario::classroom().unwrap();
    scenario.step(0.1).unwrap();
    let snapshot = scenario.system.snapshot();

    assert_eq!(snapshot.frame, 1);
    assert_eq!(snapshot.bodies.len(), scenario.system.bodies.len());
    assert!(snapshot.bodies[0].extent.is_some());
    let probe = snapshot.bodies.iter().find(|b| b.kind == "probe").unwrap();
    let field = probe.field.as_ref().unwrap();
    assert_relative_eq!(field.total[0], field.gravity[0] + field.electric[0], epsilon = 1e-12);

    let yaml = serde_yaml::to_string(&snapshot).unwrap();
    assert!(yaml.contains("kind: probe"));
    assert!(yaml.contains("kind: satellite"));
}

// ==================================================================================
// Placement / adjustment tests
// ==================================================================================

#[test]
fn place_ball_with_selected_charge() {
    let mut scenario = empty_scenario();
    let placement = Placement {
        object: ObjectType::Ball,
        charge: ChargeSign::Negative,
        rotation: Rotation::Cw,
    };

    let i = scenario.place(NVec2::new(100.0, 200.0), &placement).unwrap().unwrap();
    let ball = &scenario.system.bodies[i];

    assert_eq!(ball.kind, BodyKind::Ball);
    assert_eq!(ball.x, NVec2::new(100.0, 200.0));
    assert_eq!((ball.radius, ball.m, ball.q), (5.0, 0.1, -0.5));
    assert_eq!(ball.tint(), ChargeTint::Negative);
}

#[test]
fn place_satellite_orbits_arena_center() {
    let mut scenario = empty_scenario();
    let placement = Placement {
        object: ObjectType::Satellite,
        charge: ChargeSign::Positive,
        rotation: Rotation::Ccw,
    };

    let i = scenario.place(NVec2::new(360.0, 460.0), &placement).unwrap().unwrap();
    let sat = &scenario.system.bodies[i];

    match sat.kind {
        BodyKind::Satellite(orbit) => {
            assert_eq!(orbit.center, NVec2::new(360.0, 360.0));
            assert_relative_eq!(orbit.radius, 100.0, epsilon = 1e-12);
            assert_relative_eq!(orbit.angle, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
            assert_eq!(orbit.omega, -0.2);
        }
        _ => panic!("placed body is not a satellite"),
    }
    assert_relative_eq!(sat.x, NVec2::new(360.0, 460.0), epsilon = 1e-9);
    assert_eq!(sat.q, 5.0);
}

#[test]
fn clicks_outside_the_arena_are_ignored() {
    let mut scenario = empty_scenario();
    let placement = Placement::default();

    assert_eq!(scenario.place(NVec2::new(800.0, 100.0), &placement), Ok(None));
    assert_eq!(scenario.place(NVec2::new(0.0, 100.0), &placement), Ok(None));
    assert_eq!(scenario.system.bodies.len(), 1);
}

#[test]
fn adjustments_scale_only_the_targeted_kind() {
    let mut scenario = Scenario::classroom().unwrap();

    let changed = scenario.adjust(Adjustment::SatelliteSpeed, Direction::Increase).unwrap();
    assert_eq!(changed, 3);
    let omegas: Vec<f64> = scenario
        .system
        .bodies
        .iter()
        .filter_map(|b| match b.kind {
            BodyKind::Satellite(orbit) => Some(orbit.omega),
            _ => None,
        })
        .collect();
    assert_relative_eq!(omegas[0], 0.25, epsilon = 1e-12);
    assert_relative_eq!(omegas[1], -0.25, epsilon = 1e-12);

    let changed = scenario.adjust(Adjustment::BallMass, Direction::Decrease).unwrap();
    assert_eq!(changed, 4);
    for b in &scenario.system.bodies {
        match b.kind {
            BodyKind::Ball => assert_relative_eq!(b.m, 0.08, epsilon = 1e-12),
            BodyKind::Satellite(_) => assert_eq!(b.m, 5.0),
            _ => {}
        }
    }

    scenario.adjust(Adjustment::SatelliteCharge, Direction::Increase).unwrap();
    let charges: Vec<f64> = scenario
        .system
        .bodies
        .iter()
        .filter(|b| matches!(b.kind, BodyKind::Satellite(_)))
        .map(|b| b.q)
        .collect();
    assert_eq!(charges[0], 0.0);
    assert_relative_eq!(charges[1], 6.25, epsilon = 1e-12);
    assert_relative_eq!(charges[2], -6.25, epsilon = 1e-12);
}

#[test]
fn adjustment_with_bad_ratio_is_rejected() {
    let mut scenario = Scenario::classroom().unwrap();
    scenario.parameters.ratios.ball_charge = 0.0;

    assert_eq!(
        scenario.adjust(Adjustment::BallCharge, Direction::Increase),
        Err(SimError::InvalidRatio(0.0))
    );
}
