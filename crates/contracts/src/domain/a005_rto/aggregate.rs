use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{CustomerInfo, Paise};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RtoStatus {
    Pending,
    Applied,
}

impl RtoStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RtoStatus::Pending => "Pending",
            RtoStatus::Applied => "Applied",
        }
    }
}

/// Registration paperwork for a delivered vehicle, tracked until the RTO
/// application is filed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RtoApplication {
    pub id: Uuid,
    #[serde(rename = "bookingNo")]
    pub booking_no: String,
    pub customer: CustomerInfo,
    #[serde(rename = "chassisNo")]
    pub chassis_no: String,
    pub model: String,
    /// Registration fees collected, in paise.
    pub fees: Paise,
    pub status: RtoStatus,
    #[serde(rename = "appliedAt", default)]
    pub applied_at: Option<DateTime<Utc>>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}
