//! Async worker - runs in Tokio runtime and handles lookups

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::time::interval;
use tracing::{debug, info};

use crate::domain::TokenSpec;
use crate::infrastructure::ethereum::{create_client, ProviderConfig, WalletClient};
use crate::infrastructure::runtime::bridge::{RuntimeCommand, RuntimeEvent};
use crate::services::lookup;

/// Connect to `endpoint` and run the worker loop
pub async fn run_async_worker(
    endpoint: ProviderConfig,
    tokens: Vec<TokenSpec>,
    cmd_rx: Receiver<RuntimeCommand>,
    evt_tx: Sender<RuntimeEvent>,
) -> Result<()> {
    let client = create_client(endpoint).await?;
    serve(client, tokens, cmd_rx, evt_tx).await
}

/// Drain commands until shutdown or until the command channel closes.
///
/// Each lookup runs in its own task, so a new submission never waits for a
/// slow one. Results carry the request's generation; ordering is left to the
/// receiver.
pub async fn serve(
    client: Arc<dyn WalletClient>,
    tokens: Vec<TokenSpec>,
    cmd_rx: Receiver<RuntimeCommand>,
    evt_tx: Sender<RuntimeEvent>,
) -> Result<()> {
    info!(endpoint = %client.endpoint_name(), tokens = tokens.len(), "worker ready");

    let tokens = Arc::new(tokens);
    let mut poll_interval = interval(Duration::from_millis(25));

    loop {
        poll_interval.tick().await;

        loop {
            let cmd = match cmd_rx.try_recv() {
                Ok(cmd) => cmd,
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            };

            match cmd {
                RuntimeCommand::Shutdown => {
                    debug!("worker shutting down");
                    return Ok(());
                }

                RuntimeCommand::Lookup { generation, query } => {
                    let client = Arc::clone(&client);
                    let tokens = Arc::clone(&tokens);
                    let evt_tx = evt_tx.clone();
                    tokio::spawn(async move {
                        debug!(generation, %query, "lookup started");
                        let result = lookup(client.as_ref(), &tokens, &query).await;
                        let _ = evt_tx.send(RuntimeEvent::LookupFinished { generation, result });
                    });
                }
            }
        }
    }
}
