//! App actor - message loop processing UI events, ticks and network responses

use std::time::Duration;
use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use crate::timer::spawn_interval;

/// App actor that owns the ticker and fetch units
pub struct AppActor {
    state: AppState,
    tick_period: Duration,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        config: &Config,
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(config.source.clone()),
            tick_period: config.tick_period,
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // The timer is started exactly once for the actor's lifetime
        let (tick_tx, mut tick_rx) = mpsc::unbounded_channel();
        self.state.ticker.activate();
        let timer = spawn_interval(self.tick_period, tick_tx);

        self.render();

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        break;
                    }
                    self.render();
                }
                Some(response) = net_rx.recv() => {
                    let outcome = self.state.handle_response(response);
                    tracing::debug!(?outcome, "Response handled");
                    self.render();
                }
                Some(_tick) = tick_rx.recv() => {
                    if self.state.handle_tick() {
                        self.render();
                    }
                }
                else => break,
            }
        }

        timer.cancel();
        self.state.deactivate();
        let _ = self.network_tx.send(NetworkCommand::Shutdown);
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        let command = match event {
            UiEvent::Activate(control) => self.state.activate(control),
            UiEvent::ActivateFocused => self.state.activate_focused(),
            UiEvent::ClearTarget => self.state.clear_target(),
            UiEvent::FocusNext => {
                self.state.focus_next();
                None
            }
            UiEvent::FocusPrev => {
                self.state.focus_prev();
                None
            }
            UiEvent::ToggleHelp => {
                self.state.toggle_help();
                None
            }
            UiEvent::CloseHelp => {
                self.state.close_help();
                None
            }
            UiEvent::Quit => return true,
        };

        if let Some(cmd) = command {
            let _ = self.network_tx.send(cmd);
        }
        false
    }

    fn render(&mut self) {
        // A new closure on every render; the fetch unit must not care
        self.state.fetch.on_success(|value| {
            tracing::info!(payload = %value, "success");
        });
        let _ = self.render_tx.send(self.state.to_render_state());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Control;
    use serde_json::json;
    use tokio::time::sleep;

    fn latest(rx: &mut mpsc::UnboundedReceiver<RenderState>) -> Option<RenderState> {
        let mut last = None;
        while let Ok(state) = rx.try_recv() {
            last = Some(state);
        }
        last
    }

    async fn next_fetch(rx: &mut mpsc::UnboundedReceiver<NetworkCommand>) -> (u64, String) {
        match rx.recv().await {
            Some(NetworkCommand::Fetch { id, target }) => (id, target),
            other => panic!("expected fetch command, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_then_superseded_fetch() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, mut net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let config = Config::default();
        let actor = AppActor::new(&config, net_cmd_tx, render_tx);
        let handle = tokio::spawn(actor.run(ui_rx, net_resp_rx));

        sleep(Duration::from_millis(3500)).await;
        assert_eq!(latest(&mut render_rx).map(|s| s.count), Some(3));

        ui_tx.send(UiEvent::Activate(Control::Jack)).unwrap();
        let (jack, target) = next_fetch(&mut net_cmd_rx).await;
        assert_eq!(target, "/jack.json");

        ui_tx.send(UiEvent::Activate(Control::Sally)).unwrap();
        let (sally, target) = next_fetch(&mut net_cmd_rx).await;
        assert_eq!(target, "/sally.json");

        // Sally lands first, Jack straggles in afterwards
        net_resp_tx
            .send(NetworkResponse::Success {
                id: sally,
                value: json!({"name": "Sally"}),
                time_ms: 1,
            })
            .unwrap();
        net_resp_tx
            .send(NetworkResponse::Success {
                id: jack,
                value: json!({"name": "Jack"}),
                time_ms: 1,
            })
            .unwrap();

        // Paused clock only advances once the actor is idle
        sleep(Duration::from_millis(1)).await;
        ui_tx.send(UiEvent::Quit).unwrap();
        handle.await.unwrap();

        let last = latest(&mut render_rx).unwrap();
        assert_eq!(last.payload, r#"{"name":"Sally"}"#);
        assert_eq!(last.successes, 1);

        // Renders replaced the callback many times without issuing requests
        assert_eq!(net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown));
        assert!(net_cmd_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_keeps_count_and_shuts_down_network() {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, mut net_cmd_rx) = mpsc::unbounded_channel();
        let (_net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let actor = AppActor::new(&Config::default(), net_cmd_tx, render_tx);
        let handle = tokio::spawn(actor.run(ui_rx, net_resp_rx));

        sleep(Duration::from_millis(2500)).await;
        ui_tx.send(UiEvent::Quit).unwrap();
        handle.await.unwrap();
        assert_eq!(latest(&mut render_rx).map(|s| s.count), Some(2));

        // Quitting tears down the network side as well
        assert_eq!(net_cmd_rx.recv().await, Some(NetworkCommand::Shutdown));
    }
}
