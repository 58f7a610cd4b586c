//! Printer adapters for sending label data
//!
//! Supports:
//! - Network printers (raw TCP, conventionally port 9100)
//! - Console output (no printer attached)

use crate::error::{PrintError, PrintResult};
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tracing::{info, instrument, warn};

/// Trait for printer adapters
#[allow(async_fn_in_trait)]
pub trait Printer {
    /// Send raw label data to the printer
    async fn print(&self, data: &[u8]) -> PrintResult<()>;

    /// Check if the printer is online/reachable
    async fn is_online(&self) -> bool;
}

/// Network printer (raw TCP)
///
/// Zebra desktop printers accept raw ZPL on TCP port 9100. The host may be
/// an IP address or a DNS name; resolution happens at connect time.
#[derive(Debug, Clone)]
pub struct NetworkPrinter {
    host: String,
    port: u16,
    timeout: Duration,
}

impl NetworkPrinter {
    /// Create a new network printer.
    pub fn new(host: &str, port: u16) -> PrintResult<Self> {
        let host = host.trim();
        if host.is_empty() {
            return Err(PrintError::InvalidConfig("empty printer host".to_string()));
        }

        Ok(Self {
            host: host.to_string(),
            port,
            timeout: Duration::from_secs(5),
        })
    }

    /// Create from an address string (e.g., "192.168.1.50:9100").
    pub fn from_addr(addr: &str) -> PrintResult<Self> {
        let (host, port) = addr
            .rsplit_once(':')
            .ok_or_else(|| PrintError::InvalidConfig(format!("unparseable address {addr:?}")))?;
        let port: u16 = port
            .parse()
            .map_err(|_| PrintError::InvalidConfig(format!("unparseable address {addr:?}")))?;

        Self::new(host, port)
    }

    /// Set connection timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Get the printer address as `host:port`
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Printer for NetworkPrinter {
    #[instrument(skip(self, data), fields(addr = %self.addr(), data_len = data.len()))]
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        let addr = self.addr();

        let mut stream = tokio::time::timeout(self.timeout, TcpStream::connect(&addr))
            .await
            .map_err(|_| PrintError::Timeout(addr.clone()))?
            .map_err(|e| PrintError::Connection(format!("{addr}: {e}")))?;

        stream.write_all(data).await?;
        stream.flush().await?;

        info!("Label sent");
        Ok(())
    }

    #[instrument(skip(self), fields(addr = %self.addr()))]
    async fn is_online(&self) -> bool {
        let check_timeout = Duration::from_millis(500);

        match tokio::time::timeout(check_timeout, TcpStream::connect(self.addr())).await {
            Ok(Ok(_)) => {
                info!("Printer online");
                true
            }
            Ok(Err(e)) => {
                warn!(error = %e, "Printer offline");
                false
            }
            Err(_) => {
                warn!("Printer check timeout");
                false
            }
        }
    }
}

/// Console "printer"
///
/// Fallback used when no network printer is configured: dumps the label
/// markup to stdout so the content can be checked without hardware. A
/// console print always succeeds, so the normal ack path still runs.
#[derive(Debug, Clone, Default)]
pub struct ConsolePrinter;

impl ConsolePrinter {
    pub fn new() -> Self {
        Self
    }
}

impl Printer for ConsolePrinter {
    async fn print(&self, data: &[u8]) -> PrintResult<()> {
        let mut out = tokio::io::stdout();
        out.write_all(b"--- ZPL OUTPUT (no printer configured) ---\n")
            .await?;
        out.write_all(data).await?;
        out.write_all(b"\n--- END ZPL ---\n").await?;
        out.flush().await?;
        Ok(())
    }

    async fn is_online(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_printer_new() {
        let printer = NetworkPrinter::new("192.168.1.50", 9100).unwrap();
        assert_eq!(printer.addr(), "192.168.1.50:9100");
    }

    #[test]
    fn test_network_printer_from_addr() {
        let printer = NetworkPrinter::from_addr("print-157.pharmacy.lan:9100").unwrap();
        assert_eq!(printer.addr(), "print-157.pharmacy.lan:9100");
    }

    #[test]
    fn test_invalid_addr() {
        assert!(NetworkPrinter::from_addr("no-port-here").is_err());
        assert!(NetworkPrinter::from_addr("host:not-a-port").is_err());
        assert!(NetworkPrinter::new("  ", 9100).is_err());
    }

    #[tokio::test]
    async fn test_offline_printer_reports_offline() {
        // TEST-NET-3 address, nothing listens there
        let printer = NetworkPrinter::new("203.0.113.1", 9100).unwrap();
        assert!(!printer.is_online().await);
    }

    #[tokio::test]
    async fn test_console_printer_always_succeeds() {
        let printer = ConsolePrinter::new();
        assert!(printer.is_online().await);
        printer.print(b"^XA\n^XZ").await.unwrap();
    }
}
