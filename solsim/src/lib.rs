pub mod simulation;
pub mod configuration;
pub mod ephemeris;
pub mod visualization;

pub use simulation::states::{Body, BodyId, System, NVec2};
pub use simulation::forces::{ForceField, ForceSet, NewtonianGravity};
pub use simulation::integrator::symplectic_euler;
pub use simulation::clock::SimulationClock;
pub use simulation::view::{ViewState, Zoom};
pub use simulation::session::{Frame, InputEvent, SimulationSession};
pub use simulation::engine::{run_loop, FramePacer, InputSource, Renderer};
pub use simulation::scenario::{build_from_config, build_session};
pub use simulation::error::{SetupError, SimError};

pub use ephemeris::horizons::{EphemerisSource, StateVector, TableEphemeris};

pub use configuration::config::{ParametersConfig, ViewConfig, BodyConfig, ScenarioConfig};

pub use visualization::{solsim_vis2d::run_2d, headless::run_headless};
