//! Application state - owns both units and the view's own state

use crate::app::fetch::FetchUnit;
use crate::app::ticker::Ticker;
use crate::constants::GREETING;
use crate::messages::RenderState;
use crate::models::{dump_payload, Control, Source};

/// Main application state
#[derive(Debug)]
pub struct AppState {
    pub ticker: Ticker,
    pub fetch: FetchUnit,

    // View
    pub focused: Control,
    pub show_help: bool,
    pub source: Source,
}

impl AppState {
    pub fn new(source: Source) -> Self {
        AppState {
            ticker: Ticker::new(),
            fetch: FetchUnit::new(),
            focused: Control::default(),
            show_help: false,
            source,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            label: String::from(GREETING),
            count: self.ticker.count(),
            target: self.fetch.target().map(str::to_string),
            payload: dump_payload(self.fetch.payload()),
            status: self.fetch.status().clone(),
            successes: self.fetch.successes(),
            updated_at: self
                .fetch
                .updated_at()
                .map(|t| t.format("%H:%M:%S").to_string()),
            time_ms: self.fetch.last_time_ms(),
            focused: self.focused,
            source: self.source.describe(),
            show_help: self.show_help,
        }
    }
}
