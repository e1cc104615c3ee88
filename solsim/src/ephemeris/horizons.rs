//! Initial conditions from Horizons-style state vectors
//!
//! An [`EphemerisSource`] answers "where is body `id` on `date`" with a
//! heliocentric [`StateVector`] in AU and AU/day, the units JPL Horizons
//! reports. [`TableEphemeris`] serves such vectors from records bundled with
//! a scenario.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::simulation::consts::{AU, INV_TD};
use crate::simulation::states::NVec2;

#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("no ephemeris record for body {id} on {date}")]
    Missing { id: i32, date: NaiveDate },
    #[error("malformed ephemeris record for body {id}: {reason}")]
    Malformed { id: i32, reason: String },
    #[error("failed to read ephemeris file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse ephemeris file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Position (AU) and velocity (AU/day) in the ecliptic plane
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct StateVector {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl StateVector {
    /// Position in meters and velocity in meters/second
    ///
    /// The velocity is negated on the way in. This sign convention is kept
    /// as-is; bodies therefore start moving against the ephemeris direction.
    pub fn to_si(&self) -> (NVec2, NVec2) {
        let x = NVec2::new(self.x * AU, self.y * AU);
        let v = NVec2::new(-self.vx * AU * INV_TD, -self.vy * AU * INV_TD);
        (x, v)
    }

    fn is_finite(&self) -> bool {
        [self.x, self.y, self.vx, self.vy].iter().all(|c| c.is_finite())
    }
}

/// Source of initial conditions, keyed by Horizons body id and date
pub trait EphemerisSource {
    fn state_vector(&self, id: i32, date: NaiveDate) -> Result<StateVector, EphemerisError>;
}

/// One row of an ephemeris table
#[derive(Debug, Clone, Deserialize)]
pub struct EphemerisRecord {
    pub id: i32, // Horizons body id
    pub date: NaiveDate,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

impl EphemerisRecord {
    pub fn state(&self) -> StateVector {
        StateVector {
            x: self.x,
            y: self.y,
            vx: self.vx,
            vy: self.vy,
        }
    }
}

/// In-memory lookup table of state vectors
#[derive(Debug, Clone, Default)]
pub struct TableEphemeris {
    records: HashMap<(i32, NaiveDate), StateVector>,
}

impl TableEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add records, rejecting non-finite vectors and duplicate (id, date) keys
    pub fn extend<I>(&mut self, records: I) -> Result<(), EphemerisError>
    where
        I: IntoIterator<Item = EphemerisRecord>,
    {
        for rec in records {
            let state = rec.state();
            if !state.is_finite() {
                return Err(EphemerisError::Malformed {
                    id: rec.id,
                    reason: format!("non-finite state vector on {}", rec.date),
                });
            }
            if self.records.insert((rec.id, rec.date), state).is_some() {
                return Err(EphemerisError::Malformed {
                    id: rec.id,
                    reason: format!("duplicate record for {}", rec.date),
                });
            }
        }
        Ok(())
    }

    pub fn from_records<I>(records: I) -> Result<Self, EphemerisError>
    where
        I: IntoIterator<Item = EphemerisRecord>,
    {
        let mut table = Self::new();
        table.extend(records)?;
        Ok(table)
    }

    /// Read a YAML list of records
    pub fn read_yaml(path: &Path) -> Result<Vec<EphemerisRecord>, EphemerisError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_yaml::from_reader(reader)?)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl EphemerisSource for TableEphemeris {
    fn state_vector(&self, id: i32, date: NaiveDate) -> Result<StateVector, EphemerisError> {
        self.records
            .get(&(id, date))
            .copied()
            .ok_or(EphemerisError::Missing { id, date })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jan_1() -> NaiveDate {
        NaiveDate::from_ymd_opt(2022, 1, 1).unwrap()
    }

    fn record(id: i32, x: f64) -> EphemerisRecord {
        EphemerisRecord {
            id,
            date: jan_1(),
            x,
            y: 0.0,
            vx: 0.0,
            vy: 0.01,
        }
    }

    #[test]
    fn to_si_converts_units_and_flips_velocity() {
        let sv = StateVector { x: 1.0, y: -0.5, vx: 0.01, vy: -0.02 };
        let (x, v) = sv.to_si();
        assert_eq!(x, NVec2::new(AU, -0.5 * AU));
        assert_eq!(v.x, -0.01 * AU * INV_TD);
        assert_eq!(v.y, 0.02 * AU * INV_TD);
    }

    #[test]
    fn lookup_is_by_id_and_date() {
        let table = TableEphemeris::from_records([record(3, 1.0), record(4, 1.5)]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.state_vector(4, jan_1()).unwrap().x, 1.5);

        let next_day = jan_1().succ_opt().unwrap();
        assert!(matches!(
            table.state_vector(3, next_day),
            Err(EphemerisError::Missing { id: 3, .. })
        ));
    }

    #[test]
    fn rejects_duplicates_and_non_finite() {
        assert!(matches!(
            TableEphemeris::from_records([record(3, 1.0), record(3, 2.0)]),
            Err(EphemerisError::Malformed { id: 3, .. })
        ));
        assert!(matches!(
            TableEphemeris::from_records([record(1, f64::NAN)]),
            Err(EphemerisError::Malformed { id: 1, .. })
        ));
    }

    #[test]
    fn parses_yaml_records() {
        let yaml = r#"
- { id: 3, date: "2022-01-01", x: -0.17, y: 0.96, vx: -0.017, vy: -0.003 }
- id: 4
  date: "2022-01-01"
  x: -0.86
  y: -1.26
  vx: 0.012
  vy: -0.0066
"#;
        let records: Vec<EphemerisRecord> = serde_yaml::from_str(yaml).unwrap();
        let table = TableEphemeris::from_records(records).unwrap();
        assert_eq!(table.state_vector(3, jan_1()).unwrap().vy, -0.003);
        assert_eq!(table.state_vector(4, jan_1()).unwrap().x, -0.86);
    }
}
