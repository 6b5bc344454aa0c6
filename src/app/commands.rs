//! Command handlers - state transitions for UI events, ticks and responses

use crate::app::fetch::FetchOutcome;
use crate::app::AppState;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::Control;

impl AppState {
    // ========================
    // Controls
    // ========================

    /// Set the target to the control's fixed value
    pub fn activate(&mut self, control: Control) -> Option<NetworkCommand> {
        self.focused = control;
        self.fetch.set_target(Some(control.target().to_string()))
    }

    pub fn activate_focused(&mut self) -> Option<NetworkCommand> {
        self.activate(self.focused)
    }

    pub fn clear_target(&mut self) -> Option<NetworkCommand> {
        self.fetch.set_target(None)
    }

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next();
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.prev();
    }

    // ========================
    // Popups
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Scheduled work
    // ========================

    pub fn handle_tick(&mut self) -> bool {
        self.ticker.on_tick()
    }

    pub fn handle_response(&mut self, response: NetworkResponse) -> FetchOutcome {
        self.fetch.handle_response(response)
    }

    /// Tear down both units
    pub fn deactivate(&mut self) {
        self.ticker.deactivate();
        self.fetch.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FetchStatus, Source};
    use serde_json::json;
    use std::path::PathBuf;

    fn state() -> AppState {
        AppState::new(Source::Dir {
            root: PathBuf::from("assets"),
        })
    }

    fn issued(cmd: Option<NetworkCommand>) -> (u64, String) {
        match cmd {
            Some(NetworkCommand::Fetch { id, target }) => (id, target),
            other => panic!("expected fetch command, got {:?}", other),
        }
    }

    #[test]
    fn test_jack_then_sally_before_jack_lands() {
        let mut state = state();
        state.ticker.activate();
        for _ in 0..3 {
            state.handle_tick();
        }
        assert_eq!(state.to_render_state().count, 3);

        let (jack, jack_target) = issued(state.activate(Control::Jack));
        assert_eq!(jack_target, "/jack.json");
        let (sally, sally_target) = issued(state.activate(Control::Sally));
        assert_eq!(sally_target, "/sally.json");

        let sally_body = json!({"name": "Sally"});
        state.handle_response(NetworkResponse::Success {
            id: sally,
            value: sally_body.clone(),
            time_ms: 5,
        });
        let outcome = state.handle_response(NetworkResponse::Success {
            id: jack,
            value: json!({"name": "Jack"}),
            time_ms: 50,
        });

        assert_eq!(outcome, FetchOutcome::Superseded);
        let render = state.to_render_state();
        assert_eq!(render.payload, sally_body.to_string());
        assert_eq!(render.target.as_deref(), Some("/sally.json"));
        assert_eq!(render.status, FetchStatus::Loaded);
        assert_eq!(render.successes, 1);
    }

    #[test]
    fn test_reactivating_same_control_is_noop() {
        let mut state = state();
        assert!(state.activate(Control::Jack).is_some());
        assert!(state.activate(Control::Jack).is_none());
        assert!(state.activate_focused().is_none());
    }

    #[test]
    fn test_focus_and_activate_focused() {
        let mut state = state();
        state.focus_next();
        assert_eq!(state.focused, Control::Sally);
        let (_, target) = issued(state.activate_focused());
        assert_eq!(target, "/sally.json");
    }

    #[test]
    fn test_clear_target_renders_null() {
        let mut state = state();
        assert!(state.clear_target().is_none());
        let render = state.to_render_state();
        assert_eq!(render.payload, "null");
        assert_eq!(render.target, None);
    }

    #[test]
    fn test_deactivate_stops_both_units() {
        let mut state = state();
        state.ticker.activate();
        state.handle_tick();
        let (id, _) = issued(state.activate(Control::Jack));

        state.deactivate();
        assert!(!state.handle_tick());
        let outcome = state.handle_response(NetworkResponse::Success {
            id,
            value: json!(1),
            time_ms: 1,
        });

        assert_eq!(outcome, FetchOutcome::Superseded);
        assert_eq!(state.ticker.count(), 1);
    }
}
