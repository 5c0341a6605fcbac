use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{BranchRef, Paise};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoucherKind {
    Receipt,
    Payment,
    Journal,
}

impl VoucherKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoucherKind::Receipt => "Receipt",
            VoucherKind::Payment => "Payment",
            VoucherKind::Journal => "Journal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoucherStatus {
    Pending,
    Approved,
    Rejected,
}

impl VoucherStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoucherStatus::Pending => "Pending",
            VoucherStatus::Approved => "Approved",
            VoucherStatus::Rejected => "Rejected",
        }
    }
}

/// Accounting voucher awaiting approval before it posts to the ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voucher {
    pub id: Uuid,
    #[serde(rename = "voucherNo")]
    pub voucher_no: String,
    pub kind: VoucherKind,
    pub account: String,
    pub narration: String,
    pub amount: Paise,
    pub branch: BranchRef,
    pub status: VoucherStatus,
    #[serde(rename = "createdBy")]
    pub created_by: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        let v: VoucherStatus = serde_json::from_str("\"PENDING\"").unwrap();
        assert_eq!(v, VoucherStatus::Pending);
        assert_eq!(
            serde_json::to_string(&VoucherStatus::Rejected).unwrap(),
            "\"REJECTED\""
        );
    }
}
