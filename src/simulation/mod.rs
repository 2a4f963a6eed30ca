pub mod states;
pub mod geometry;
pub mod clock;
pub mod error;
pub mod params;
pub mod engine;
pub mod forces;
pub mod integrator;
pub mod collision;
pub mod registry;
pub mod driver;
pub mod scenario;
pub mod snapshot;
