//! Domain services
//!
//! Services that implement behavior which does not belong to a single
//! entity. Currently this is the advisory connectivity check used by the
//! server entry sheet.

mod connectivity;

pub use connectivity::{
    ConnectionProbe, ConnectivityChecker, ProbeRequest, ProbeState, RandomDelayProbe,
};
