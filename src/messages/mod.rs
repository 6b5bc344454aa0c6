//! Messages exchanged between the UI loop, the App actor and the Network actor.
//!
//! Timer ticks are not listed here; they travel on their own channel (see `timer`).

pub mod ui_events;
pub mod network;
pub mod render;

pub use ui_events::UiEvent;
pub use network::{NetworkCommand, NetworkResponse};
pub use render::RenderState;
