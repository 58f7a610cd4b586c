//! ZPL command builder
//!
//! Provides a fluent API for building ZPL label data.

/// ZPL command builder
///
/// Builds a ZPL format block (`^XA` ... `^XZ`) for Zebra label printers.
/// Commands are emitted one per line; ZPL ignores the whitespace and the
/// output stays readable when dumped to a console.
///
/// Coordinates are in dots. Zebra desktop printers run at 203 dpi, so
/// 1 inch = 203 dots.
pub struct ZplBuilder {
    buf: String,
}

impl ZplBuilder {
    /// Start a new label format (`^XA`).
    pub fn new() -> Self {
        let mut buf = String::with_capacity(1024);
        buf.push_str("^XA\n");
        Self { buf }
    }

    // === Label Setup ===

    /// Set print width in dots (`^PW`).
    pub fn print_width(&mut self, dots: u32) -> &mut Self {
        self.command(&format!("^PW{}", dots))
    }

    /// Set label length in dots (`^LL`).
    pub fn label_length(&mut self, dots: u32) -> &mut Self {
        self.command(&format!("^LL{}", dots))
    }

    /// Set print darkness (`~SD`), clamped to the printer range 0-30.
    pub fn darkness(&mut self, level: u8) -> &mut Self {
        self.command(&format!("~SD{}", level.min(30)))
    }

    /// Set the default font and height (`^CF0`).
    pub fn default_font(&mut self, height: u32) -> &mut Self {
        self.command(&format!("^CF0,{}", height))
    }

    // === Fields ===

    /// Text field at (x, y) using scalable font 0 at the given cell size.
    pub fn text_field(&mut self, x: u32, y: u32, height: u32, width: u32, text: &str) -> &mut Self {
        self.command(&format!(
            "^FO{},{}^A0N,{},{}^FD{}^FS",
            x,
            y,
            height,
            width,
            sanitize(text)
        ))
    }

    /// Centered text inside a field block of `block_width` dots.
    pub fn text_block(
        &mut self,
        x: u32,
        y: u32,
        block_width: u32,
        height: u32,
        width: u32,
        text: &str,
    ) -> &mut Self {
        self.command(&format!(
            "^FO{},{}^FB{},1,0,C^A0N,{},{}^FD{}^FS",
            x,
            y,
            block_width,
            height,
            width,
            sanitize(text)
        ))
    }

    /// Filled box or line (`^GB`). A height of 0 draws a horizontal rule.
    pub fn graphic_box(&mut self, x: u32, y: u32, w: u32, h: u32, thickness: u32) -> &mut Self {
        self.command(&format!("^FO{},{}^GB{},{},{}^FS", x, y, w, h, thickness))
    }

    /// Ellipse outline (`^GE`); equal width and height draws a circle.
    pub fn ellipse(&mut self, x: u32, y: u32, w: u32, h: u32, thickness: u32) -> &mut Self {
        self.command(&format!("^FO{},{}^GE{},{},{}^FS", x, y, w, h, thickness))
    }

    // === Barcodes ===

    /// Code 128 barcode (`^BC`) with a human-readable interpretation line.
    ///
    /// Module width is fixed at 2 dots, which scans reliably at 203 dpi.
    pub fn barcode_128(&mut self, x: u32, y: u32, height: u32, data: &str) -> &mut Self {
        self.command(&format!(
            "^FO{},{}^BY2,2,{}^BCN,{},Y,N,N^FD{}^FS",
            x,
            y,
            height,
            height,
            sanitize(data)
        ))
    }

    /// QR code (`^BQ`), model 2, error correction M.
    ///
    /// Magnification: 1-10 (module size in dots).
    pub fn qr_code(&mut self, x: u32, y: u32, magnification: u8, data: &str) -> &mut Self {
        let mag = magnification.clamp(1, 10);
        self.command(&format!(
            "^FO{},{}^BQN,2,{}^FDMA,{}^FS",
            x,
            y,
            mag,
            sanitize(data)
        ))
    }

    // === Raw Commands ===

    /// Write a raw command line directly (no sanitizing).
    pub fn raw(&mut self, cmd: &str) -> &mut Self {
        self.command(cmd)
    }

    // === Build ===

    /// Close the format (`^XZ`) and return the accumulated ZPL.
    pub fn finalize(mut self) -> String {
        self.buf.push_str("^XZ");
        self.buf
    }

    fn command(&mut self, cmd: &str) -> &mut Self {
        self.buf.push_str(cmd);
        self.buf.push('\n');
        self
    }
}

impl Default for ZplBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Strip ZPL control characters from field data.
///
/// `^` and `~` start commands anywhere in the stream, so they must never
/// reach a `^FD` from untrusted input (patient names come from a web form).
fn sanitize(text: &str) -> String {
    text.replace(['^', '~'], " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_wraps_format() {
        let zpl = ZplBuilder::new().finalize();
        assert!(zpl.starts_with("^XA"));
        assert!(zpl.ends_with("^XZ"));
    }

    #[test]
    fn test_text_field() {
        let mut b = ZplBuilder::new();
        b.text_field(20, 80, 55, 55, "Rx# 6876386");
        let zpl = b.finalize();
        assert!(zpl.contains("^FO20,80^A0N,55,55^FDRx# 6876386^FS"));
    }

    #[test]
    fn test_barcode_128() {
        let mut b = ZplBuilder::new();
        b.barcode_128(20, 420, 60, "687638601157");
        let zpl = b.finalize();
        assert!(zpl.contains("^BY2,2,60^BCN,60,Y,N,N^FD687638601157^FS"));
    }

    #[test]
    fn test_qr_code_clamps_magnification() {
        let mut b = ZplBuilder::new();
        b.qr_code(142, 250, 99, "https://refills.example.com");
        let zpl = b.finalize();
        assert!(zpl.contains("^BQN,2,10^FDMA,https://refills.example.com^FS"));
    }

    #[test]
    fn test_field_data_is_sanitized() {
        let mut b = ZplBuilder::new();
        b.text_field(20, 200, 28, 28, "Name: Eva^XZ~JA");
        let zpl = b.finalize();
        assert!(zpl.contains("^FDName: Eva XZ JA^FS"));
    }

    #[test]
    fn test_darkness_clamped() {
        let mut b = ZplBuilder::new();
        b.darkness(200);
        assert!(b.finalize().contains("~SD30"));
    }
}
