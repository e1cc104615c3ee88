//! Build fully-initialized simulation sessions from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) plus an ephemeris source and
//! produces the runtime [`SimulationSession`] containing:
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at the start date)
//! - active force set (`ForceSet` with Newtonian gravity)
//! - calendar clock, view state and background stars
//!
//! Setup either yields a complete session or an error; a body whose initial
//! conditions cannot be resolved fails the whole build.

use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::ephemeris::horizons::{EphemerisSource, TableEphemeris};
use super::clock::SimulationClock;
use super::consts::{AU, STAR_EXTENT, STAR_RADIUS_MAX, STAR_RADIUS_MIN};
use super::error::SetupError;
use super::forces::{ForceSet, NewtonianGravity};
use super::params::Parameters;
use super::session::{BackgroundStar, SimulationSession};
use super::states::{NVec2, System};
use super::view::ViewState;

/// Collect the scenario's ephemeris records, inline ones first, then those of
/// `ephemeris_file` resolved against `base_dir`
pub fn load_ephemeris(cfg: &ScenarioConfig, base_dir: &Path) -> Result<TableEphemeris, SetupError> {
    let mut table = TableEphemeris::from_records(cfg.ephemeris.iter().cloned())?;
    if let Some(file) = &cfg.ephemeris_file {
        let path = base_dir.join(file);
        log::info!("loading ephemeris table {}", path.display());
        table.extend(TableEphemeris::read_yaml(&path)?)?;
    }
    Ok(table)
}

/// Build a session from a scenario whose ephemeris lives next to it
pub fn build_from_config(cfg: ScenarioConfig, base_dir: &Path) -> Result<SimulationSession, SetupError> {
    let ephemeris = load_ephemeris(&cfg, base_dir)?;
    build_session(cfg, &ephemeris)
}

pub fn build_session(cfg: ScenarioConfig, ephemeris: &dyn EphemerisSource) -> Result<SimulationSession, SetupError> {
    let p_cfg = &cfg.simulation;
    let start = p_cfg.start_date;

    // Bodies: map `BodyConfig` -> runtime `Body`, resolving ephemeris ids
    let mut system = System::new();
    for bc in &cfg.bodies {
        let (x, v) = initial_state(bc, start, ephemeris)?;
        system.add_body(bc.name.clone(), x, v, bc.mass, bc.radius, bc.color);
    }

    // Parameters (runtime) from ParametersConfig
    let parameters = Parameters {
        dt: p_cfg.time_delta,
        G: p_cfg.G,
        seed: p_cfg.seed,
    };

    // Forces: construct a ForceSet and register Newtonian gravity
    let forces = ForceSet::new().with(NewtonianGravity {
        G: parameters.G,
    });

    let v_cfg = &cfg.view;
    let mut view = ViewState::new(v_cfg.pixels_per_au / AU, (v_cfg.offset[0], v_cfg.offset[1]));
    view.draw_orbits = v_cfg.draw_orbits;

    let stars = background_stars(v_cfg.stars, parameters.seed);

    log::info!(
        "built session: {} bodies, {} stars, starting {}, dt = {} s",
        system.len(),
        stars.len(),
        start,
        parameters.dt
    );

    Ok(SimulationSession::new(system, forces, parameters, SimulationClock::new(start), view).with_stars(stars))
}

/// Position (m) and velocity (m/s) of a body at `date`
fn initial_state(bc: &BodyConfig, date: chrono::NaiveDate, ephemeris: &dyn EphemerisSource) -> Result<(NVec2, NVec2), SetupError> {
    if !(bc.mass.is_finite() && bc.mass > 0.0) {
        return Err(SetupError::InvalidMass {
            name: bc.name.clone(),
            mass: bc.mass,
        });
    }

    match bc.horizons_id {
        Some(id) => {
            let sv = ephemeris.state_vector(id, date).map_err(|source| SetupError::Ephemeris {
                name: bc.name.clone(),
                source,
            })?;
            Ok(sv.to_si())
        }
        None => Ok((NVec2::new(bc.x[0], bc.x[1]), NVec2::new(bc.v[0], bc.v[1]))),
    }
}

/// Uniformly scattered stars in a square of +-2 AU, same field for the same seed
pub fn background_stars(count: usize, seed: u64) -> Vec<BackgroundStar> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let x = NVec2::new(
                rng.random_range(-STAR_EXTENT..=STAR_EXTENT),
                rng.random_range(-STAR_EXTENT..=STAR_EXTENT),
            );
            BackgroundStar::new(x, rng.random_range(STAR_RADIUS_MIN..STAR_RADIUS_MAX))
        })
        .collect()
}
