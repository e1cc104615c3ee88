pub mod states;
pub mod consts;
pub mod params;
pub mod error;
pub mod forces;
pub mod integrator;
pub mod clock;
pub mod view;
pub mod session;
pub mod engine;
pub mod scenario;
