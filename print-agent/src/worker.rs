//! Print Worker
//!
//! The agent's main loop: poll the store's pending queue, render each
//! request, send it to the printer, ack on success. Delivery is
//! at-least-once: a request is acked only after the printer accepted the
//! whole job, so every failure path leaves the row pending for the next
//! cycle. A duplicate label at the counter beats a silently lost refill.

use std::time::Duration;

use rx_printer::{ConsolePrinter, NetworkPrinter, PrintResult, Printer};
use tokio_util::sync::CancellationToken;

use crate::client::{ApiClient, ClientResult};
use crate::config::AgentConfig;
use crate::error::AgentError;
use crate::label::LabelRenderer;

/// First delay after a failed poll.
pub const POLL_BACKOFF_BASE_SECS: u64 = 5;
/// Delay ceiling while the server stays unreachable.
pub const POLL_BACKOFF_MAX_SECS: u64 = 60;

/// Either printer transport, picked once at startup.
pub enum LabelPrinter {
    Network(NetworkPrinter),
    Console(ConsolePrinter),
}

impl LabelPrinter {
    pub fn network(host: &str, port: u16) -> PrintResult<Self> {
        Ok(LabelPrinter::Network(NetworkPrinter::new(host, port)?))
    }

    pub fn console() -> Self {
        LabelPrinter::Console(ConsolePrinter::new())
    }

    pub fn describe(&self) -> String {
        match self {
            LabelPrinter::Network(p) => p.addr(),
            LabelPrinter::Console(_) => "console".to_string(),
        }
    }
}

impl Printer for LabelPrinter {
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        match self {
            LabelPrinter::Network(p) => p.print(data).await,
            LabelPrinter::Console(p) => p.print(data).await,
        }
    }

    async fn is_online(&self) -> bool {
        match self {
            LabelPrinter::Network(p) => p.is_online().await,
            LabelPrinter::Console(p) => p.is_online().await,
        }
    }
}

/// Pick the printer transport: explicit `PRINTER_HOST` wins, then the
/// server's store directory, then console mode.
pub async fn resolve_printer(
    config: &AgentConfig,
    client: &ApiClient,
) -> Result<LabelPrinter, AgentError> {
    if let Some(host) = &config.printer_host {
        return Ok(LabelPrinter::network(host, config.printer_port)?);
    }

    match client.store(config.store_id).await {
        Ok(store) => {
            if let Some(addr) = store.printer_addr() {
                return Ok(LabelPrinter::Network(NetworkPrinter::from_addr(&addr)?));
            }
            tracing::warn!(
                "Store {} has no printer on file, running in console mode",
                config.store_id
            );
        }
        Err(e) => {
            tracing::warn!("Printer lookup against the directory failed ({e}), running in console mode");
        }
    }

    Ok(LabelPrinter::console())
}

pub struct PrintWorker<P: Printer> {
    client: ApiClient,
    printer: P,
    store_id: i64,
    poll_interval: Duration,
    renderer: LabelRenderer,
}

impl<P: Printer> PrintWorker<P> {
    pub fn new(client: ApiClient, printer: P, config: &AgentConfig) -> Self {
        Self {
            client,
            printer,
            store_id: config.store_id,
            poll_interval: config.poll_interval,
            renderer: LabelRenderer::new(config.timezone),
        }
    }

    /// One poll cycle: fetch the pending queue, then print and ack each
    /// request in order. Returns how many labels were printed and acked.
    ///
    /// `Err` only when the poll itself failed. Per-request print and ack
    /// failures are logged and the row stays pending for the next cycle;
    /// one dead request never blocks the rest of the batch.
    #[tracing::instrument(skip(self), fields(store_id = self.store_id))]
    pub async fn poll_once(&self) -> ClientResult<usize> {
        let pending = self.client.pending(self.store_id).await?;

        if pending.is_empty() {
            return Ok(0);
        }

        tracing::info!("{} pending refill request(s)", pending.len());

        let mut printed = 0;
        for request in &pending {
            tracing::info!("Printing refill {} (Rx# {})", request.id, request.rx_number);

            let label = self.renderer.render(request);
            if let Err(e) = self.printer.print(&label).await {
                tracing::warn!("Print failed for refill {}, leaving pending: {e}", request.id);
                continue;
            }

            match self.client.ack_printed(request.id).await {
                Ok(ack) => {
                    if !ack.changed {
                        tracing::warn!(
                            "Refill {} was already marked printed (duplicate label)",
                            request.id
                        );
                    }
                    printed += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        "Could not ack refill {}, it will print again next cycle: {e}",
                        request.id
                    );
                }
            }
        }

        Ok(printed)
    }

    /// Poll until cancelled. A cycle in flight finishes its prints and
    /// acks before the worker stops.
    pub async fn run(self, shutdown: CancellationToken) {
        tracing::info!(
            "Print worker started (store {}, polling every {}s)",
            self.store_id,
            self.poll_interval.as_secs()
        );

        let mut failed_polls: u32 = 0;
        loop {
            match self.poll_once().await {
                Ok(_) => failed_polls = 0,
                Err(e) => {
                    failed_polls += 1;
                    tracing::warn!("Poll failed ({failed_polls} in a row): {e}");
                }
            }

            let delay = if failed_polls == 0 {
                self.poll_interval
            } else {
                Duration::from_secs(poll_backoff_secs(failed_polls))
            };

            tokio::select! {
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(delay) => {}
            }
        }

        tracing::info!("Print worker stopped");
    }
}

/// Delay after `failed_polls` consecutive failures, doubling from the
/// base up to the ceiling.
fn poll_backoff_secs(failed_polls: u32) -> u64 {
    let exp = failed_polls.saturating_sub(1).min(6);
    (POLL_BACKOFF_BASE_SECS * 2u64.pow(exp)).min(POLL_BACKOFF_MAX_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_calculation() {
        assert_eq!(poll_backoff_secs(1), 5);
        assert_eq!(poll_backoff_secs(2), 10);
        assert_eq!(poll_backoff_secs(3), 20);
        assert_eq!(poll_backoff_secs(4), 40);
        assert_eq!(poll_backoff_secs(5), 60);
        assert_eq!(poll_backoff_secs(100), 60);
    }

    #[test]
    fn test_printer_transport_descriptions() {
        let network = LabelPrinter::network("192.168.10.57", 9100).unwrap();
        assert_eq!(network.describe(), "192.168.10.57:9100");
        assert_eq!(LabelPrinter::console().describe(), "console");
    }
}
