use serde::{Deserialize, Serialize};

use crate::misc::parsing::null_as_default;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "lowercase")]
pub struct ReservationRecord {
    #[serde(alias = "Name", deserialize_with = "null_as_default")]
    pub name: String,
    /// Space separated, as sent.
    #[serde(alias = "Partitions", deserialize_with = "null_as_default")]
    pub partitions: String,
    #[serde(alias = "Queue", deserialize_with = "null_as_default")]
    pub queue: String,

    #[serde(alias = "Start", deserialize_with = "null_as_default")]
    pub start: f64,
    #[serde(alias = "Startf", deserialize_with = "null_as_default")]
    pub startf: String,
    #[serde(alias = "Duration", deserialize_with = "null_as_default")]
    pub duration: i64,
    #[serde(alias = "Durationf", deserialize_with = "null_as_default")]
    pub durationf: String,
    /// Countdown to `start`, e.g. `"-01:20:00"`.
    #[serde(alias = "Tminus", deserialize_with = "null_as_default")]
    pub tminus: String,
}
