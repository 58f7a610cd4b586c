//! Refill Request Model

use serde::{Deserialize, Serialize};

/// Queue status of a refill request.
///
/// The transition is monotonic: `Pending` -> `Printed`, never reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(feature = "db", sqlx(rename_all = "lowercase"))]
pub enum RequestStatus {
    Pending,
    Printed,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Pending => "pending",
            RequestStatus::Printed => "printed",
        }
    }
}

/// A queued prescription refill request.
///
/// One row per submission. `rx_number`, `store_id` and `id` never change
/// after insert; `printed_at` is set exactly when `status` becomes
/// `Printed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RefillRequest {
    pub id: i64,
    pub rx_number: String,
    pub patient_first_name: Option<String>,
    pub store_id: i64,
    pub status: RequestStatus,
    /// Unix epoch milliseconds, set once at insert
    pub created_at: i64,
    /// Unix epoch milliseconds, null while pending
    pub printed_at: Option<i64>,
}

impl RefillRequest {
    pub fn is_pending(&self) -> bool {
        self.status == RequestStatus::Pending
    }
}

/// Submission payload from the refill form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefillSubmission {
    pub rx_number: String,
    #[serde(default)]
    pub patient_first_name: Option<String>,
    pub store_id: i64,
}
