//! QR Sticker Rendering
//!
//! Round stickers for prescription bottle lids: a QR code pointing at the
//! public refill form, inside a 30 mm circular cut guide sized for a 35 mm
//! lid. Printed on the same 2" x 3.25" stock as refill labels.

use rx_printer::ZplBuilder;

/// Default form URL encoded in the QR code.
pub const DEFAULT_STICKER_URL: &str = "https://refills.example.com";

// Label stock: 2" x 3.25" at 203 dpi
const LABEL_WIDTH: u32 = 406;
const LABEL_LENGTH: u32 = 659;

// 30 mm circle fits comfortably on a 35 mm bottle cap
const CIRCLE_DOTS: u32 = 243;

/// Render one sticker. No rotation: the cut-out is a circle, so
/// orientation on the stock does not matter.
pub fn render_sticker(url: &str) -> Vec<u8> {
    // Positions hand-tuned for centering inside the circle.
    let mut zpl = ZplBuilder::new();
    zpl.print_width(LABEL_WIDTH)
        .label_length(LABEL_LENGTH)
        .darkness(25)
        .ellipse(81, 208, CIRCLE_DOTS, CIRCLE_DOTS, 2)
        .text_block(84, 228, CIRCLE_DOTS, 24, 18, "SCAN")
        .qr_code(142, 250, 5, url)
        .text_block(84, 402, CIRCLE_DOTS, 24, 18, "TO REFILL");

    zpl.finalize().into_bytes()
}
