//! Error types for stepping and building a simulation session.

use chrono::NaiveDate;
use thiserror::Error;

use crate::ephemeris::horizons::EphemerisError;
use super::states::BodyId;

/// Failures while advancing a running session
#[derive(Debug, Error)]
pub enum SimError {
    #[error("bodies {a} and {b} occupy the same position; gravitational force is undefined")]
    CoincidentBodies { a: BodyId, b: BodyId },

    #[error("simulation date cannot advance past {date}")]
    CalendarOverflow { date: NaiveDate },
}

/// Failures while building a session; no partial body set is ever returned
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("initial conditions for {name} unavailable")]
    Ephemeris {
        name: String,
        #[source]
        source: EphemerisError,
    },

    #[error("body {name} has invalid mass {mass}; must be finite and positive")]
    InvalidMass { name: String, mass: f64 },

    #[error("failed to load ephemeris table")]
    EphemerisTable(#[from] EphemerisError),
}
