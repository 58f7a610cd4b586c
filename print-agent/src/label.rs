//! Refill Label Rendering
//!
//! Pure ZPL encoding of a refill request: same request, same bytes, no
//! clock and no network. Targets a 2" x 3" printable area on 203 dpi
//! Zebra desktop stock (GK420d).

use chrono_tz::Tz;
use rx_printer::ZplBuilder;
use shared::models::RefillRequest;

/// Two-digit fill sequence in the barcode payload. The public form only
/// submits first fills, so the segment is fixed.
pub const FILL_SEQUENCE: &str = "01";

pub struct LabelRenderer {
    timezone: Tz,
}

impl LabelRenderer {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// Render one request to a complete ZPL format block.
    pub fn render(&self, request: &RefillRequest) -> Vec<u8> {
        let mut zpl = ZplBuilder::new();
        zpl.print_width(464)
            .label_length(609)
            .default_font(20)
            .darkness(25)
            .text_field(20, 20, 40, 40, "*** REFILL REQUEST ***")
            .text_field(20, 80, 55, 55, &format!("Rx# {}", request.rx_number))
            .text_field(20, 160, 28, 28, &format!("Store: {}", request.store_id));

        // Positions are absolute, so the layout does not shift when the
        // name line is omitted.
        if let Some(name) = request.patient_first_name.as_deref()
            && !name.is_empty()
        {
            zpl.text_field(20, 200, 28, 28, &format!("Name: {name}"));
        }

        zpl.text_field(
            20,
            260,
            22,
            22,
            &format!(
                "Submitted: {}",
                format_timestamp(request.created_at, self.timezone)
            ),
        )
        .text_field(20, 295, 22, 22, &format!("Ref: {}", request.id))
        .graphic_box(20, 345, 420, 0, 2)
        .text_field(20, 365, 24, 24, "Please pull and process.")
        .barcode_128(
            20,
            420,
            60,
            &barcode_payload(&request.rx_number, request.store_id),
        );

        zpl.finalize().into_bytes()
    }
}

impl Default for LabelRenderer {
    fn default() -> Self {
        Self::new(chrono_tz::America::Chicago)
    }
}

/// Scannable payload: rx number, two-digit fill sequence, store id padded
/// to three digits. The dispensing system keys on this exact layout.
pub fn barcode_payload(rx_number: &str, store_id: i64) -> String {
    format!("{rx_number}{FILL_SEQUENCE}{store_id:03}")
}

fn format_timestamp(ts: i64, tz: Tz) -> String {
    if let Some(dt) = chrono::DateTime::from_timestamp_millis(ts) {
        dt.with_timezone(&tz).format("%m/%d/%Y %I:%M %p").to_string()
    } else {
        "unknown".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::RequestStatus;

    fn request(rx: &str, name: Option<&str>) -> RefillRequest {
        RefillRequest {
            id: 42,
            rx_number: rx.to_string(),
            patient_first_name: name.map(String::from),
            store_id: 157,
            status: RequestStatus::Pending,
            created_at: 1_735_689_600_000, // 2025-01-01 00:00:00 UTC
            printed_at: None,
        }
    }

    #[test]
    fn test_barcode_payload_layout() {
        assert_eq!(barcode_payload("6876386", 157), "687638601157");
        assert_eq!(barcode_payload("2413579", 7), "241357901007");
    }

    #[test]
    fn test_render_full_label() {
        let renderer = LabelRenderer::default();
        let zpl = String::from_utf8(renderer.render(&request("6876386", Some("Maria")))).unwrap();

        assert!(zpl.starts_with("^XA"));
        assert!(zpl.ends_with("^XZ"));
        assert!(zpl.contains("^PW464"));
        assert!(zpl.contains("^LL609"));
        assert!(zpl.contains("~SD25"));
        assert!(zpl.contains("^FO20,20^A0N,40,40^FD*** REFILL REQUEST ***^FS"));
        assert!(zpl.contains("^FO20,80^A0N,55,55^FDRx# 6876386^FS"));
        assert!(zpl.contains("^FO20,160^A0N,28,28^FDStore: 157^FS"));
        assert!(zpl.contains("^FO20,200^A0N,28,28^FDName: Maria^FS"));
        assert!(zpl.contains("^FO20,295^A0N,22,22^FDRef: 42^FS"));
        assert!(zpl.contains("^FO20,345^GB420,0,2^FS"));
        assert!(zpl.contains("^FO20,365^A0N,24,24^FDPlease pull and process.^FS"));
        assert!(zpl.contains("^FO20,420^BY2,2,60^BCN,60,Y,N,N^FD687638601157^FS"));
    }

    #[test]
    fn test_render_omits_missing_name() {
        let renderer = LabelRenderer::default();
        let zpl = String::from_utf8(renderer.render(&request("6876386", None))).unwrap();

        assert!(!zpl.contains("Name:"));
        // The rest of the layout is unaffected
        assert!(zpl.contains("^FO20,260"));
        assert!(zpl.contains("^FO20,420"));
    }

    #[test]
    fn test_timestamp_in_store_timezone() {
        // 2025-01-01 00:00 UTC is 2024-12-31 18:00 in Chicago (CST)
        let formatted = format_timestamp(1_735_689_600_000, chrono_tz::America::Chicago);
        assert_eq!(formatted, "12/31/2024 06:00 PM");
    }

    #[test]
    fn test_out_of_range_timestamp_falls_back() {
        assert_eq!(format_timestamp(i64::MAX, chrono_tz::UTC), "unknown");
    }
}
