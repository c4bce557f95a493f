// Shape of the `activity.json` document published per machine by the ALCF status service.
//
// Everything is taken as the upstream sends it: raw numbers next to their pre-formatted
// renderings, no validation. Only `running` is ever shown, the rest is decoded for completeness.
pub mod job;
pub mod reservation;
pub mod snapshot;

mod misc;

use std::time::Duration;

pub use job::JobRecord;
pub use reservation::ReservationRecord;
pub use snapshot::{ClusterDimensions, Snapshot};

pub const DEFAULT_HOST: &str = "status.alcf.anl.gov";
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);
