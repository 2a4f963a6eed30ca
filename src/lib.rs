pub mod simulation;
pub mod configuration;

pub use simulation::states::{Arena, Body, BodyKind, ChargeTint, FieldSample, NVec2, Orbit, System};
pub use simulation::forces::{ForceLaw, ForceSet, PseudoElectric, PseudoGravity};
pub use simulation::driver::{step_frame, tick, FrameReport};
pub use simulation::clock::FrameClock;
pub use simulation::engine::Engine;
pub use simulation::params::Parameters;
pub use simulation::error::SimError;
pub use simulation::registry::{Adjustment, ChargeSign, Direction, ObjectType, Placement, Rotation};
pub use simulation::scenario::Scenario;
pub use simulation::snapshot::FrameSnapshot;

pub use configuration::config::{ConfigError, PeerExclusion, ScenarioConfig, WallProbe};
