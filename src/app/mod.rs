//! App layer - the ticker and fetch units plus the view state around them
//!
//! The App actor receives UI events, timer ticks and network responses,
//! updates state, and emits network commands and render state.

pub mod state;
pub mod actor;
pub mod commands;
pub mod fetch;
pub mod ticker;

pub use state::AppState;
pub use actor::AppActor;
pub use fetch::{FetchOutcome, FetchUnit};
pub use ticker::Ticker;
