//! Fetch unit - loads a JSON payload whenever the target changes
//!
//! Every issued request carries an epoch. Only the response whose epoch
//! matches `in_flight` may touch the payload; changing the target or
//! deactivating the unit clears `in_flight`, which supersedes whatever is
//! still on the wire. The transfer itself is not aborted.

use chrono::{DateTime, Local};
use serde_json::Value;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::FetchStatus;

/// Callback invoked with each applied payload
pub type SuccessCallback = Box<dyn FnMut(&Value) + Send>;

/// Holds the most recently supplied success callback.
///
/// Replacing the callback is free of side effects; the cell is only read when
/// a response is applied, so the newest callback is always the one invoked.
#[derive(Default)]
pub struct CallbackCell {
    current: Option<SuccessCallback>,
}

impl CallbackCell {
    pub fn replace(&mut self, callback: Option<SuccessCallback>) {
        self.current = callback;
    }

    /// Invoke the current callback, if any
    pub fn call(&mut self, value: &Value) -> bool {
        match self.current.as_mut() {
            Some(callback) => {
                callback(value);
                true
            }
            None => false,
        }
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }
}

impl std::fmt::Debug for CallbackCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackCell")
            .field("set", &self.is_set())
            .finish()
    }
}

/// What happened to a response handed to the unit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Payload replaced and callback invoked
    Applied,
    /// Current request failed; status shows the error
    Failed,
    /// Response belonged to an abandoned request and was dropped
    Superseded,
}

#[derive(Debug)]
pub struct FetchUnit {
    target: Option<String>,
    next_epoch: u64,
    in_flight: Option<u64>,
    payload: Option<Value>,
    status: FetchStatus,
    on_success: CallbackCell,
    successes: u64,
    updated_at: Option<DateTime<Local>>,
    last_time_ms: u64,
}

impl Default for FetchUnit {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchUnit {
    pub fn new() -> Self {
        FetchUnit {
            target: None,
            next_epoch: 1,
            in_flight: None,
            payload: None,
            status: FetchStatus::Idle,
            on_success: CallbackCell::default(),
            successes: 0,
            updated_at: None,
            last_time_ms: 0,
        }
    }

    /// Supply the success callback. Never triggers a request.
    pub fn on_success(&mut self, callback: impl FnMut(&Value) + Send + 'static) {
        self.on_success.replace(Some(Box::new(callback)));
    }

    /// Point the unit at a new target.
    ///
    /// Returns the command to issue, or `None` when the target is unchanged
    /// or absent.
    pub fn set_target(&mut self, target: Option<String>) -> Option<NetworkCommand> {
        if self.target == target {
            return None;
        }

        self.supersede();
        self.target = target.clone();

        let target = target?;
        let id = self.next_id();
        self.in_flight = Some(id);
        self.status = FetchStatus::Loading {
            target: target.clone(),
        };
        tracing::info!(id, target = %target, "Issuing fetch");

        Some(NetworkCommand::Fetch { id, target })
    }

    /// Apply a response if it belongs to the current request
    pub fn handle_response(&mut self, response: NetworkResponse) -> FetchOutcome {
        let id = response.id();
        if self.in_flight != Some(id) {
            tracing::debug!(id, current = ?self.in_flight, "Discarding superseded response");
            return FetchOutcome::Superseded;
        }
        self.in_flight = None;

        match response {
            NetworkResponse::Success { value, time_ms, .. } => {
                self.on_success.call(&value);
                self.payload = Some(value);
                self.status = FetchStatus::Loaded;
                self.successes += 1;
                self.updated_at = Some(Local::now());
                self.last_time_ms = time_ms;
                tracing::info!(id, time_ms, "Payload updated");
                FetchOutcome::Applied
            }
            NetworkResponse::Failed { error, time_ms, .. } => {
                tracing::warn!(id, error = %error, "Fetch failed");
                self.status = FetchStatus::Failed(error);
                self.last_time_ms = time_ms;
                FetchOutcome::Failed
            }
        }
    }

    /// Unit is going away; nothing in flight may land afterwards
    pub fn deactivate(&mut self) {
        self.supersede();
    }

    fn supersede(&mut self) {
        if let Some(id) = self.in_flight.take() {
            tracing::debug!(id, "Superseding request");
        }
        if self.status.is_loading() {
            self.status = if self.payload.is_some() {
                FetchStatus::Loaded
            } else {
                FetchStatus::Idle
            };
        }
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_epoch;
        self.next_epoch += 1;
        id
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn payload(&self) -> Option<&Value> {
        self.payload.as_ref()
    }

    pub fn status(&self) -> &FetchStatus {
        &self.status
    }

    pub fn in_flight(&self) -> Option<u64> {
        self.in_flight
    }

    pub fn successes(&self) -> u64 {
        self.successes
    }

    pub fn updated_at(&self) -> Option<DateTime<Local>> {
        self.updated_at
    }

    pub fn last_time_ms(&self) -> u64 {
        self.last_time_ms
    }
}
