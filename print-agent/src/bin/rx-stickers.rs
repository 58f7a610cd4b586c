//! QR sticker print utility.
//!
//! Prints bottle-lid stickers that advertise the refill form. Point it at
//! a printer for real output, or run it bare for a ZPL preview on stdout.
//!
//! Environment:
//! - `PRINTER_HOST`  - printer host/IP (unset = preview to stdout)
//! - `PRINTER_PORT`  - default 9100
//! - `STICKER_URL`   - default `https://refills.example.com`
//! - `STICKER_COUNT` - default 1

use print_agent::init_logger;
use print_agent::sticker::{DEFAULT_STICKER_URL, render_sticker};
use rx_printer::{ConsolePrinter, NetworkPrinter, Printer};
use shared::models::DEFAULT_PRINTER_PORT;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger(&std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

    let url = std::env::var("STICKER_URL").unwrap_or_else(|_| DEFAULT_STICKER_URL.to_string());
    let count: u32 = std::env::var("STICKER_COUNT")
        .ok()
        .and_then(|c| c.parse().ok())
        .unwrap_or(1);
    let host = std::env::var("PRINTER_HOST")
        .ok()
        .map(|h| h.trim().to_string())
        .filter(|h| !h.is_empty());
    let port: u16 = std::env::var("PRINTER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PRINTER_PORT);

    let zpl = render_sticker(&url);

    let Some(host) = host else {
        tracing::info!("No PRINTER_HOST set, ZPL preview:");
        ConsolePrinter::new().print(&zpl).await?;
        return Ok(());
    };

    let printer = NetworkPrinter::new(&host, port)?;
    tracing::info!("Printing {count} sticker(s) to {}", printer.addr());

    // Separate job per copy so a jam fails fast with an accurate count.
    for i in 1..=count {
        match printer.print(&zpl).await {
            Ok(()) => tracing::info!("  [{i}/{count}] OK"),
            Err(e) => {
                tracing::error!("  [{i}/{count}] failed: {e}");
                return Err(e.into());
            }
        }
    }

    tracing::info!("Done");
    Ok(())
}
