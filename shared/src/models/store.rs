//! Store Directory Record

use serde::{Deserialize, Serialize};

/// Conventional raw-socket port for label printers.
pub const DEFAULT_PRINTER_PORT: u16 = 9100;

/// One pharmacy location as known to the store directory.
///
/// `printer_host` is absent for locations without a networked label
/// printer; agents for those stores fall back to console output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub phone: String,
    pub printer_host: Option<String>,
    #[serde(default = "default_printer_port")]
    pub printer_port: u16,
    pub hours: Option<String>,
}

fn default_printer_port() -> u16 {
    DEFAULT_PRINTER_PORT
}

impl Store {
    /// `host:port` for the raw printer socket, when a host is known.
    pub fn printer_addr(&self) -> Option<String> {
        self.printer_host
            .as_ref()
            .map(|host| format!("{}:{}", host, self.printer_port))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printer_port_defaults_to_9100() {
        let json = r#"{
            "id": 157,
            "name": "Main Street Pharmacy",
            "city": "Overland Park",
            "phone": "913-555-0142",
            "printer_host": "192.168.1.50"
        }"#;
        let store: Store = serde_json::from_str(json).unwrap();
        assert_eq!(store.printer_port, 9100);
        assert_eq!(store.printer_addr().unwrap(), "192.168.1.50:9100");
        assert!(store.hours.is_none());
    }

    #[test]
    fn test_no_printer_host_means_no_addr() {
        let json = r#"{
            "id": 201,
            "name": "Depot Drug",
            "city": "Olathe",
            "phone": "913-555-0199"
        }"#;
        let store: Store = serde_json::from_str(json).unwrap();
        assert!(store.printer_addr().is_none());
    }
}
