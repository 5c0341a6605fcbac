use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::BranchRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StockStatus {
    /// Received from the OEM but not yet physically verified at the branch.
    PendingVerification,
    InStock,
    Allocated,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::PendingVerification => "Pending verification",
            StockStatus::InStock => "In stock",
            StockStatus::Allocated => "Allocated",
        }
    }
}

/// One physical vehicle in dealership stock.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehicleStock {
    pub id: Uuid,
    #[serde(rename = "chassisNo")]
    pub chassis_no: String,
    #[serde(rename = "engineNo")]
    pub engine_no: String,
    pub model: String,
    pub variant: String,
    pub color: String,
    pub branch: BranchRef,
    pub status: StockStatus,
    #[serde(rename = "receivedAt")]
    pub received_at: DateTime<Utc>,
}
