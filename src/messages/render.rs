//! Render state - data structure sent from App layer to UI for rendering

use crate::constants::GREETING;
use crate::models::{Control, FetchStatus};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub label: String,

    // Ticker
    pub count: u64,

    // Fetch
    pub target: Option<String>,
    pub payload: String,
    pub status: FetchStatus,
    pub successes: u64,
    /// Local time of the last applied payload, `HH:MM:SS`
    pub updated_at: Option<String>,
    pub time_ms: u64,

    // Controls
    pub focused: Control,

    pub source: String,
    pub show_help: bool,
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            label: String::from(GREETING),
            count: 0,
            target: None,
            payload: String::from("null"),
            status: FetchStatus::Idle,
            successes: 0,
            updated_at: None,
            time_ms: 0,
            focused: Control::default(),
            source: String::new(),
            show_help: false,
        }
    }
}
