//! Force contributors for the solar system engine
//!
//! Defines the force-field trait, a composable set of fields, and direct
//! pairwise Newtonian gravity. There is no softening term: two bodies at the
//! same position are reported as [`SimError::CoincidentBodies`].

use super::error::SimError;
use super::states::{Body, NVec2, System};

/// Collection of force terms
/// Each term implements [`ForceField`] and their contributions are summed
/// into a single force vector per body
#[derive(Default)]
pub struct ForceSet {
    terms: Vec<Box<dyn ForceField + Send + Sync>>,
}

impl ForceSet {
    /// Create an empty force set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add a force term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: ForceField + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Net force on `target` from every term, against the bodies in `bodies`
    pub fn net_force(&self, target: &Body, bodies: &[Body]) -> Result<NVec2, SimError> {
        let mut total = NVec2::zeros();
        for term in &self.terms {
            total += term.force_on(target, bodies)?;
        }
        Ok(total)
    }

    /// Compute net forces for all bodies in `sys` from one snapshot of positions
    /// - `out[i]` will be set to the force on `sys.bodies()[i]`
    pub fn accumulate_forces(&self, sys: &System, out: &mut [NVec2]) -> Result<(), SimError> {
        let bodies = sys.bodies();
        for (f, target) in out.iter_mut().zip(bodies) {
            *f = self.net_force(target, bodies)?;
        }
        Ok(())
    }
}

/// Trait for force sources acting on one body of a body set
pub trait ForceField {
    fn force_on(&self, target: &Body, bodies: &[Body]) -> Result<NVec2, SimError>;
}

/// 2D Newtonian gravity, direct n^2 sum
#[allow(non_snake_case)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl NewtonianGravity {
    /// Force exerted on `target` by `other`
    pub fn pair_force(&self, target: &Body, other: &Body) -> Result<NVec2, SimError> {
        // Displacement from target towards other; target is pulled along +d
        let d = other.x - target.x;
        let separation = (d.x * d.x + d.y * d.y).sqrt();
        if separation == 0.0 {
            return Err(SimError::CoincidentBodies {
                a: target.id(),
                b: other.id(),
            });
        }

        // |F| = G * m_target * m_other / r^2
        let force = self.G * target.mass() * other.mass() / separation.powi(2);

        // Split the magnitude along the direction angle of d
        let theta = d.y.atan2(d.x);
        Ok(NVec2::new(force * theta.cos(), force * theta.sin()))
    }
}

impl ForceField for NewtonianGravity {
    fn force_on(&self, target: &Body, bodies: &[Body]) -> Result<NVec2, SimError> {
        let mut total = NVec2::zeros();
        for other in bodies {
            // Self-exclusion by identity, never by value
            if other.is(target) {
                continue;
            }
            total += self.pair_force(target, other)?;
        }
        Ok(total)
    }
}
