//! # tickfetch
//!
//! A terminal view combining two small state units:
//!
//! - **Ticker**: a counter advanced once per timer firing. The timer never
//!   captures the counter; each tick applies a pure increment to the current
//!   value.
//! - **Fetch**: loads a JSON payload whenever its target changes. Each request
//!   carries an epoch and only the latest one may update the payload, so a
//!   slow response for an old target can never overwrite a newer one.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (owns both units)
//! - Timer task and Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod timer;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState, FetchOutcome, FetchUnit, Ticker};
pub use config::Config;
pub use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{Control, FetchError, FetchStatus, Source};
pub use network::NetworkActor;
