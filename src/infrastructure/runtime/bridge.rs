//! Runtime bridge - connects the sync TUI thread with the async Tokio runtime
//!
//! The TUI sends [`RuntimeCommand`]s and polls [`RuntimeEvent`]s once per
//! frame; all RPC work happens on the worker thread.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tokio::runtime::Runtime;

use crate::domain::{LookupError, TokenSpec, WalletInfo};
use crate::infrastructure::ethereum::ProviderConfig;
use crate::infrastructure::runtime::worker::run_async_worker;

/// Commands sent from the TUI to the async worker
#[derive(Debug, Clone)]
pub enum RuntimeCommand {
    /// Look up a wallet; `generation` is echoed back in the result
    Lookup { generation: u64, query: String },
    /// Shutdown the worker
    Shutdown,
}

/// Events sent from the async worker to the TUI
#[derive(Debug)]
pub enum RuntimeEvent {
    /// A lookup settled
    LookupFinished {
        generation: u64,
        result: Result<WalletInfo, LookupError>,
    },
    /// The worker could not start or stopped unexpectedly
    Error { message: String },
}

/// Bridge between sync TUI thread and async Tokio runtime
pub struct RuntimeBridge {
    cmd_tx: Sender<RuntimeCommand>,
    evt_rx: Receiver<RuntimeEvent>,
}

impl RuntimeBridge {
    /// Spawn the worker thread for the given endpoint and token list
    pub fn new(endpoint: ProviderConfig, tokens: Vec<TokenSpec>) -> anyhow::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<RuntimeCommand>();
        let (evt_tx, evt_rx) = mpsc::channel::<RuntimeEvent>();

        thread::Builder::new()
            .name("walletlens-rpc".into())
            .spawn(move || {
                let rt = match Runtime::new() {
                    Ok(rt) => rt,
                    Err(err) => {
                        let _ = evt_tx.send(RuntimeEvent::Error {
                            message: format!("Failed to start Tokio runtime: {err}"),
                        });
                        return;
                    }
                };
                rt.block_on(async {
                    if let Err(err) = run_async_worker(endpoint, tokens, cmd_rx, evt_tx.clone()).await
                    {
                        let _ = evt_tx.send(RuntimeEvent::Error {
                            message: format!("Worker exited: {:#}", err),
                        });
                    }
                });
            })?;

        Ok(Self { cmd_tx, evt_rx })
    }

    /// Send a command to the async worker
    pub fn send(&self, cmd: RuntimeCommand) -> anyhow::Result<()> {
        self.cmd_tx
            .send(cmd)
            .map_err(|_| anyhow::anyhow!("Worker channel closed"))
    }

    /// Poll for events (non-blocking)
    pub fn poll_events(&self) -> Vec<RuntimeEvent> {
        let mut events = Vec::new();
        while let Ok(evt) = self.evt_rx.try_recv() {
            events.push(evt);
        }
        events
    }
}

impl Drop for RuntimeBridge {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(RuntimeCommand::Shutdown);
    }
}
