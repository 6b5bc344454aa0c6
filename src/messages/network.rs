//! Network messages - communication between App and Network layers

use serde_json::Value;

use crate::models::FetchError;

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkCommand {
    /// Fetch and decode the resource behind `target`
    Fetch {
        id: u64,
        target: String,
    },
    /// Shutdown the network actor
    Shutdown,
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone, PartialEq)]
pub enum NetworkResponse {
    /// Body received and decoded
    Success {
        id: u64,
        value: Value,
        time_ms: u64,
    },
    /// Transfer or decode failed
    Failed {
        id: u64,
        error: FetchError,
        time_ms: u64,
    },
}

impl NetworkResponse {
    /// Get the request ID (epoch) from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Success { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
        }
    }

    pub fn time_ms(&self) -> u64 {
        match self {
            NetworkResponse::Success { time_ms, .. } => *time_ms,
            NetworkResponse::Failed { time_ms, .. } => *time_ms,
        }
    }
}
