//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size `dt` (seconds),
//! - gravitational constant `G`,
//! - random seed for the decorative star field

use super::consts;

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub dt: f64, // step size
    pub G: f64, // gravitational constant
    pub seed: u64, // deterministic seed
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: consts::TIME_DELTA,
            G: consts::G,
            seed: 42,
        }
    }
}
