//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – start date, time step and physical constants
//! - [`ViewConfig`]       – window, initial scale, frame rate and star field
//! - [`BodyConfig`]       – initial state and display attributes of each body
//! - [`EphemerisRecord`]  – Horizons-style state vectors for bodies with a `horizons_id`
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! ```yaml
//! simulation:
//!   start_date: "2022-01-01"
//!   time_delta: 86400.0     # seconds per step, optional
//!   G: 6.67428e-11          # optional
//!   seed: 42                # background stars, optional
//!
//! view:                     # optional, defaults to an 800x800 window
//!   pixels_per_au: 245.0
//!   frame_rate: 45
//!   draw_orbits: false
//!
//! bodies:
//!   - name: Sun
//!     mass: 1.98892e30
//!     radius: 28.0
//!     color: [255, 255, 0]
//!   - name: Earth
//!     horizons_id: 3        # initial state from the ephemeris
//!     mass: 5.9742e24
//!     radius: 16.0
//!     color: [100, 140, 240]
//!
//! ephemeris:
//!   - { id: 3, date: "2022-01-01", x: -0.1747, y: 0.9677, vx: -0.01721, vy: -0.00312 }
//! ```
//!
//! The scenario builder maps this configuration onto the runtime
//! [`crate::simulation::session::SimulationSession`].

use chrono::NaiveDate;
use serde::Deserialize;

use crate::ephemeris::horizons::EphemerisRecord;
use crate::simulation::consts;
use crate::simulation::states::Rgb;

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub start_date: NaiveDate, // first simulated day, also the ephemeris epoch
    #[serde(default = "default_time_delta")]
    pub time_delta: f64, // seconds per step
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default = "default_seed")]
    pub seed: u64, // deterministic seed for the star field
}

/// Window and camera settings
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct ViewConfig {
    pub width: f32,
    pub height: f32,
    pub offset: [f64; 2], // pixel position of the Sun, from the top-left corner
    pub pixels_per_au: f64,
    pub frame_rate: u32, // simulated days per wall-clock second
    pub stars: usize,
    pub draw_orbits: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: consts::WINDOW_WIDTH,
            height: consts::WINDOW_HEIGHT,
            offset: [consts::W_OFFSET, consts::H_OFFSET],
            pixels_per_au: consts::PIXELS_PER_AU,
            frame_rate: consts::FRAME_RATE,
            stars: consts::STAR_COUNT,
            draw_orbits: false,
        }
    }
}

/// Configuration for a single body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    #[serde(default)]
    pub horizons_id: Option<i32>, // take x/v from the ephemeris when set
    #[serde(default)]
    pub x: [f64; 2], // meters, ignored with `horizons_id`
    #[serde(default)]
    pub v: [f64; 2], // meters/second, ignored with `horizons_id`
    pub mass: f64, // kilograms
    pub radius: f64, // display radius in pixels
    #[serde(default = "default_color")]
    pub color: Rgb,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub simulation: ParametersConfig,
    #[serde(default)]
    pub view: ViewConfig,
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub ephemeris: Vec<EphemerisRecord>, // inline state vectors
    #[serde(default)]
    pub ephemeris_file: Option<String>, // YAML list of records, relative to the scenario file
}

fn default_time_delta() -> f64 {
    consts::TIME_DELTA
}

fn default_g() -> f64 {
    consts::G
}

fn default_seed() -> u64 {
    42
}

fn default_color() -> Rgb {
    consts::WHITE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_scenario_takes_defaults() {
        let yaml = r#"
simulation:
  start_date: "2022-01-01"
bodies:
  - name: Sun
    mass: 1.98892e30
    radius: 28
"#;
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.simulation.time_delta, 86400.0);
        assert_eq!(cfg.simulation.G, 6.67428e-11);
        assert_eq!(cfg.view.pixels_per_au, 245.0);
        assert_eq!(cfg.view.offset, [435.0, 385.0]);
        assert_eq!(cfg.view.frame_rate, 45);
        assert_eq!(cfg.bodies[0].x, [0.0, 0.0]);
        assert_eq!(cfg.bodies[0].color, [255, 255, 255]);
        assert!(cfg.bodies[0].horizons_id.is_none());
        assert!(cfg.ephemeris.is_empty());
    }

    #[test]
    fn partial_view_section_keeps_other_defaults() {
        let yaml = r#"
simulation:
  start_date: "2022-01-01"
view:
  draw_orbits: true
bodies: []
"#;
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(cfg.view.draw_orbits);
        assert_eq!(cfg.view.stars, 200);
        assert_eq!(cfg.view.width, 800.0);
    }
}
