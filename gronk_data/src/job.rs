use serde::{Deserialize, Serialize};

use crate::misc::parsing::null_as_default;

/// One job as listed under `running` or `queued`.
///
/// The `*f` fields are the upstream's own renderings of the raw value next to them (`walltime`
/// is seconds, `walltimef` is `"02:00:00"`) and are what gets displayed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "lowercase")]
pub struct JobRecord {
    #[serde(alias = "Jobid", deserialize_with = "null_as_default")]
    pub jobid: i64,
    #[serde(alias = "Project", deserialize_with = "null_as_default")]
    pub project: String,
    #[serde(alias = "Queue", deserialize_with = "null_as_default")]
    pub queue: String,
    #[serde(alias = "Nodes", deserialize_with = "null_as_default")]
    pub nodes: i64,
    #[serde(alias = "Mode", deserialize_with = "null_as_default")]
    pub mode: String,

    #[serde(alias = "Location", deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(alias = "Locationf", deserialize_with = "null_as_default")]
    pub locationf: String,

    #[serde(alias = "Runtime", deserialize_with = "null_as_default")]
    pub runtime: i64,
    #[serde(alias = "Runtimef", deserialize_with = "null_as_default")]
    pub runtimef: String,
    #[serde(alias = "Walltime", deserialize_with = "null_as_default")]
    pub walltime: i64,
    #[serde(alias = "Walltimef", deserialize_with = "null_as_default")]
    pub walltimef: String,
    #[serde(alias = "Starttime", deserialize_with = "null_as_default")]
    pub starttime: String,
    /// Unix seconds, fractional.
    #[serde(alias = "Submittime", deserialize_with = "null_as_default")]
    pub submittime: f64,

    #[serde(alias = "State", deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(alias = "Color", deserialize_with = "null_as_default")]
    pub color: String,
}
