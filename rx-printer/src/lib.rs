//! # rx-printer
//!
//! ZPL label printer library - low-level printing capabilities only.
//!
//! ## Scope
//!
//! This crate handles HOW to print:
//! - ZPL command building
//! - Network printing (raw TCP, conventionally port 9100)
//! - Console output for running without a printer
//!
//! Business logic (WHAT to print) should stay in application code:
//! - Refill label rendering → print-agent
//! - QR sticker rendering → print-agent
//!
//! ## Example
//!
//! ```ignore
//! use rx_printer::{NetworkPrinter, Printer, ZplBuilder};
//!
//! // Build ZPL content
//! let mut zpl = ZplBuilder::new();
//! zpl.print_width(464)
//!     .label_length(609)
//!     .darkness(25)
//!     .text_field(20, 20, 40, 40, "*** REFILL REQUEST ***")
//!     .barcode_128(20, 420, 60, "687638601157");
//!
//! // Send to network printer
//! let printer = NetworkPrinter::new("192.168.1.50", 9100)?;
//! printer.print(zpl.finalize().as_bytes()).await?;
//! ```

mod error;
mod printer;
mod zpl;

// Re-exports
pub use error::{PrintError, PrintResult};
pub use printer::{ConsolePrinter, NetworkPrinter, Printer};
pub use zpl::ZplBuilder;
