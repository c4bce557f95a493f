use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{job::JobRecord, misc::parsing::null_as_default, reservation::ReservationRecord};

/// Static shape of the machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "lowercase")]
pub struct ClusterDimensions {
    #[serde(alias = "Midplanes", deserialize_with = "null_as_default")]
    pub midplanes: i64,
    #[serde(alias = "Nodecards", deserialize_with = "null_as_default")]
    pub nodecards: i64,
    #[serde(alias = "Racks", deserialize_with = "null_as_default")]
    pub racks: i64,
    #[serde(alias = "Rows", deserialize_with = "null_as_default")]
    pub rows: i64,
    #[serde(alias = "Subdivisions", deserialize_with = "null_as_default")]
    pub subdivisions: i64,
}

/// One decoded `activity.json`.
///
/// Missing keys and `null` values read as zero values and unknown keys are ignored, so a document
/// from a newer or older upstream still decodes. Anything that is not JSON, or has a value of the
/// wrong type, is an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "lowercase")]
pub struct Snapshot {
    /// Unix seconds.
    #[serde(alias = "Updated", deserialize_with = "null_as_default")]
    pub updated: i64,
    #[serde(alias = "Dimensions", deserialize_with = "null_as_default")]
    pub dimensions: ClusterDimensions,
    #[serde(alias = "Running", deserialize_with = "null_as_default")]
    pub running: Vec<JobRecord>,
    #[serde(alias = "Queued", deserialize_with = "null_as_default")]
    pub queued: Vec<JobRecord>,
    #[serde(
        alias = "Reservation",
        alias = "reservations",
        deserialize_with = "null_as_default"
    )]
    pub reservation: Vec<ReservationRecord>,
}

impl Snapshot {
    pub fn from_json(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    /// Longest requested walltime first. Ties keep the order the upstream sent them in.
    pub fn sort_running_by_walltime(&mut self) {
        self.running.sort_by(|a, b| b.walltime.cmp(&a.walltime));
    }

    /// `None` if `updated` is outside of what chrono can represent.
    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.updated, 0)
    }
}
