use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, watch};

/// How long an alert stays visible after it is set.
pub const ALERT_TTL: Duration = Duration::from_secs(3);

/// Status attached to an alert message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Success,
    Error,
}

/// Snapshot of everything the UI reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreState {
    /// Username to filter shown lore by (None = show all)
    pub filter: Option<String>,
    /// The lore list exactly as the server returned it
    pub lore: Vec<serde_json::Value>,
    /// Username of the logged in user
    pub username: Option<String>,
    /// Global success/error messages, keyed by message text
    pub alerts: HashMap<String, AlertStatus>,
}

/// Mutations applied through the store's single update channel.
#[derive(Debug, Clone)]
pub enum Mutation {
    /// Add a message to the global alerts; it expires after [`ALERT_TTL`].
    Alert {
        message: String,
        status: AlertStatus,
    },
    /// Remove an alert (sent by the expiry timer).
    ExpireAlert { message: String },
    /// Update the stored username to the specified one.
    SetUsername(Option<String>),
    /// Update the stored lore filter to the specified one.
    UpdateFilter(Option<String>),
    /// Replace the stored lore with the provided list.
    UpdateLore(Vec<serde_json::Value>),
    /// Request the server for the currently available lore.
    RefreshLore,
}

pub struct StoreOptions {
    /// Server base URL, e.g. "http://127.0.0.1:3000".
    pub base_url: String,
    /// Path for serialize-on-write / hydrate-on-start persistence.
    /// In-memory only when absent.
    pub persist_path: Option<PathBuf>,
}

/// Handle to the store. Cheap to clone the snapshot out; all writes go
/// through [`Store::commit`].
pub struct Store {
    tx: mpsc::UnboundedSender<Mutation>,
    state_rx: watch::Receiver<StoreState>,
}

impl Store {
    /// Open the store: hydrate state from disk when a persist path is
    /// configured, then spawn the worker that owns the state.
    pub fn open(options: StoreOptions) -> Store {
        let state = options
            .persist_path
            .as_deref()
            .and_then(hydrate)
            .unwrap_or_default();

        let (tx, rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(state.clone());

        let worker = Worker {
            state,
            rx,
            tx: tx.clone(),
            state_tx,
            client: reqwest::Client::new(),
            base_url: options.base_url,
            persist_path: options.persist_path,
        };
        tokio::spawn(worker.run());

        Store { tx, state_rx }
    }

    /// Queue a mutation; mutations apply in commit order.
    pub fn commit(&self, mutation: Mutation) {
        let _ = self.tx.send(mutation);
    }

    /// The latest applied snapshot.
    pub fn state(&self) -> StoreState {
        self.state_rx.borrow().clone()
    }

    /// Wait until the next snapshot is published. Returns false once the
    /// worker is gone.
    pub async fn changed(&mut self) -> bool {
        self.state_rx.changed().await.is_ok()
    }
}

struct Worker {
    state: StoreState,
    rx: mpsc::UnboundedReceiver<Mutation>,
    tx: mpsc::UnboundedSender<Mutation>,
    state_tx: watch::Sender<StoreState>,
    client: reqwest::Client,
    base_url: String,
    persist_path: Option<PathBuf>,
}

impl Worker {
    async fn run(mut self) {
        while let Some(mutation) = self.rx.recv().await {
            self.apply(mutation).await;
            self.persist();
            let _ = self.state_tx.send(self.state.clone());
        }
    }

    async fn apply(&mut self, mutation: Mutation) {
        match mutation {
            Mutation::Alert { message, status } => {
                self.state.alerts.insert(message.clone(), status);
                // Fixed-delay expiry; a timer is never cancelled when the
                // same message is alerted again, so the newer alert can be
                // cleared early by the older timer.
                let tx = self.tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(ALERT_TTL).await;
                    let _ = tx.send(Mutation::ExpireAlert { message });
                });
            }
            Mutation::ExpireAlert { message } => {
                self.state.alerts.remove(&message);
            }
            Mutation::SetUsername(username) => self.state.username = username,
            Mutation::UpdateFilter(filter) => self.state.filter = filter,
            Mutation::UpdateLore(lore) => self.state.lore = lore,
            Mutation::RefreshLore => self.refresh_lore().await,
        }
    }

    /// Full re-fetch for the current filter; the stored list is
    /// overwritten with the raw JSON result, no client-side reshaping.
    async fn refresh_lore(&mut self) {
        let url = match &self.state.filter {
            Some(filter) => format!("{}/api/users/{}/lore", self.base_url, filter),
            None => format!("{}/api/lore", self.base_url),
        };
        match self.fetch_list(&url).await {
            Ok(lore) => self.state.lore = lore,
            Err(e) => tracing::warn!("Failed to refresh lore from {url}: {e}"),
        }
    }

    async fn fetch_list(&self, url: &str) -> reqwest::Result<Vec<serde_json::Value>> {
        self.client.get(url).send().await?.json().await
    }

    fn persist(&self) {
        let Some(path) = &self.persist_path else {
            return;
        };
        match serde_json::to_vec_pretty(&self.state) {
            Ok(bytes) => {
                if let Err(e) = std::fs::write(path, bytes) {
                    tracing::warn!("Failed to persist store to {}: {e}", path.display());
                }
            }
            Err(e) => tracing::warn!("Failed to serialize store state: {e}"),
        }
    }
}

fn hydrate(path: &Path) -> Option<StoreState> {
    let bytes = std::fs::read(path).ok()?;
    match serde_json::from_slice(&bytes) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::warn!("Ignoring corrupt store snapshot at {}: {e}", path.display());
            None
        }
    }
}
