use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{BranchRef, CustomerInfo, Paise};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Approved,
    Allocated,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Approved => "Approved",
            BookingStatus::Allocated => "Allocated",
        }
    }
}

/// A customer booking for a vehicle. Moves Pending -> Approved -> Allocated;
/// allocation binds a chassis number from verified stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    #[serde(rename = "bookingNo")]
    pub booking_no: String,
    pub customer: CustomerInfo,
    pub model: String,
    pub variant: String,
    pub branch: BranchRef,
    #[serde(rename = "brokerName", default)]
    pub broker_name: Option<String>,
    /// Booking advance received, in paise.
    pub amount: Paise,
    pub status: BookingStatus,
    #[serde(rename = "chassisNo", default)]
    pub chassis_no: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocateRequest {
    #[serde(rename = "chassisNo")]
    pub chassis_no: String,
}
