//! Wire shapes shared by the server API and the print agent.

use serde::{Deserialize, Serialize};

/// Response to a successful refill submission.
///
/// Carries display info resolved from the store directory so the form can
/// confirm the pickup location without a second request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub request_id: i64,
    pub message: String,
    pub store_phone: String,
}

/// Response to an ack call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResult {
    /// True when this call performed the pending -> printed transition;
    /// false for unknown or already-printed ids. Never an error either way.
    pub changed: bool,
}

/// Health probe payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub database: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ack_result_round_trip() {
        let ack: AckResult = serde_json::from_str(r#"{"changed":false}"#).unwrap();
        assert!(!ack.changed);
    }
}
