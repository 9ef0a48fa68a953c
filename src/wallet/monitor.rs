//! Periodic connection health checks.
//!
//! Probes the RPC node on a fixed interval, recording reachability and
//! round-trip latency for the dashboard's status widget. Stopping the
//! monitor discards any probe still in flight.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{interval, Instant, MissedTickBehavior};

use crate::wallet::provider::RpcConnection;

/// Default probe period.
pub const DEFAULT_PROBE_PERIOD: Duration = Duration::from_secs(30);

/// Health of the monitored connection.
#[derive(Debug, Clone, PartialEq)]
pub enum ConnectionHealth {
    /// No probe has completed yet.
    Connecting,
    /// The last probe succeeded.
    Connected { latency_ms: u64, version: String },
    /// The last probe failed.
    Unreachable { message: String },
}

fn lock_health(health: &Mutex<ConnectionHealth>) -> MutexGuard<'_, ConnectionHealth> {
    health.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Spawned watcher over one RPC connection.
///
/// The first probe fires immediately, then every period. After a network
/// switch, drop the monitor and start a fresh one over the re-derived
/// connection.
pub struct ConnectionMonitor {
    health: Arc<Mutex<ConnectionHealth>>,
    shutdown: Option<mpsc::Sender<()>>,
}

impl ConnectionMonitor {
    /// Start probing `connection` every `period`.
    pub fn start<C>(connection: Arc<C>, period: Duration) -> Self
    where
        C: RpcConnection + 'static,
    {
        let health = Arc::new(Mutex::new(ConnectionHealth::Connecting));
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel(1);

        let shared = Arc::clone(&health);
        tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => return,
                    _ = ticker.tick() => {}
                }

                let started = Instant::now();
                tokio::select! {
                    // Shutdown while the probe is in flight discards its
                    // result rather than applying it late.
                    _ = shutdown_rx.recv() => return,
                    result = connection.get_version() => {
                        let latency_ms = started.elapsed().as_millis() as u64;
                        let next = match result {
                            Ok(version) => ConnectionHealth::Connected { latency_ms, version },
                            Err(err) => {
                                tracing::warn!(error = %err, "health probe failed");
                                ConnectionHealth::Unreachable {
                                    message: err.to_string(),
                                }
                            }
                        };
                        *lock_health(&shared) = next;
                    }
                }
            }
        });

        Self {
            health,
            shutdown: Some(shutdown_tx),
        }
    }

    /// Start probing with the default period.
    pub fn start_default<C>(connection: Arc<C>) -> Self
    where
        C: RpcConnection + 'static,
    {
        Self::start(connection, DEFAULT_PROBE_PERIOD)
    }

    /// Snapshot of the last observed health.
    pub fn health(&self) -> ConnectionHealth {
        lock_health(&self.health).clone()
    }

    /// Stop probing. Idempotent.
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.try_send(());
        }
    }
}

impl Drop for ConnectionMonitor {
    fn drop(&mut self) {
        self.stop();
    }
}
