//! Loads the YAML people document into a validated roster.
//!
//! Document shape:
//!
//! ```yaml
//! people:
//!   - name: A
//!     speed: 1
//!   - name: B
//!     speed: 2
//! ```
//!
//! All input validation happens here, before any solver runs: the solvers are
//! never invoked with a non-positive or out-of-range speed. An empty `people`
//! list is a valid zero-person run.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{Person, Roster};

/// Errors from reading or validating the people document.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse people document: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Person {name:?} has non-positive speed {speed}")]
    NonPositiveSpeed { name: String, speed: i64 },
    #[error("Person {name:?} has speed {speed} beyond the supported maximum")]
    SpeedTooLarge { name: String, speed: i64 },
}

/// One record of the `people` list.
#[derive(Debug, Deserialize)]
struct PersonRecord {
    name: String,
    speed: i64,
}

/// The top-level document.
#[derive(Debug, Deserialize)]
struct PeopleDocument {
    #[serde(default)]
    people: Vec<PersonRecord>,
}

/// Read and validate a people document from a file.
pub fn load_roster(path: &Path) -> Result<Roster, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    roster_from_str(&text)
}

/// Parse and validate a people document from YAML text.
pub fn roster_from_str(text: &str) -> Result<Roster, LoadError> {
    let document: PeopleDocument = serde_yaml::from_str(text)?;

    let mut roster = Roster::new();
    for record in document.people {
        if record.speed <= 0 {
            return Err(LoadError::NonPositiveSpeed {
                name: record.name,
                speed: record.speed,
            });
        }
        let speed = match u32::try_from(record.speed) {
            Ok(speed) => speed,
            Err(_) => {
                return Err(LoadError::SpeedTooLarge {
                    name: record.name,
                    speed: record.speed,
                })
            }
        };
        roster.push(Person::new(record.name, speed));
    }

    Ok(roster)
}
