//! Fixed-step time integrator for the solar system
//!
//! Provides a semi-implicit (symplectic) Euler step driven by a `ForceSet`
//! and `Parameters`.

use super::error::SimError;
use super::forces::ForceSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one step using semi-implicit Euler
/// Forces for every body are taken from the same snapshot of positions, then
/// each body updates velocity first and position from the new velocity.
/// Every trajectory grows by exactly one entry and `sys.t` advances by
/// `params.dt`. On error the system is left untouched.
pub fn symplectic_euler(sys: &mut System, forces: &ForceSet, params: &Parameters) -> Result<(), SimError> {
    let n = sys.len();
    let dt = params.dt; // time step dt

    // f[i] holds the net force on body i at the current positions
    let mut f = vec![NVec2::zeros(); n];
    forces.accumulate_forces(&*sys, &mut f)?;

    for (b, f) in sys.bodies_mut().iter_mut().zip(f.iter()) {
        // Kick: v_n+1 = v_n + dt * F / m
        let a = *f / b.mass();
        b.v += a * dt;

        // Drift with the updated velocity: x_n+1 = x_n + dt * v_n+1
        b.x += b.v * dt;

        b.trajectory.push(b.x);
    }

    sys.t += dt;
    Ok(())
}
