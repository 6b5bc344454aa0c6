//! Network layer - fetch execution
//!
//! The Network actor receives fetch commands and sends back decoded payloads
//! or failures, tagged with the request's epoch.

pub mod actor;
pub mod client;

pub use actor::NetworkActor;
