//! Network actor - runs fetches in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::Source;
use crate::network::client::{create_client, execute_fetch};

/// Network actor that processes fetch commands.
///
/// Each fetch runs in its own task and responses are sent back as they
/// complete, so they may arrive in any order. Ordering is the fetch unit's
/// concern, not this actor's.
pub struct NetworkActor {
    client: reqwest::Client,
    source: Source,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(config: &Config, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(config.request_timeout),
            source: config.source.clone(),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::Fetch { id, target }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let source = self.source.clone();

                            self.active_requests.spawn(async move {
                                tracing::info!(id, target = %target, source = %source.describe(), "Executing fetch");
                                let result = execute_fetch(&client, &source, &target, id).await;
                                tracing::info!(id, time_ms = result.time_ms(), "Fetch completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            self.active_requests.abort_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
