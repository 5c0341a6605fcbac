use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{BranchRef, Paise};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BrokerKind {
    Broker,
    Subdealer,
}

impl BrokerKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BrokerKind::Broker => "Broker",
            BrokerKind::Subdealer => "Subdealer",
        }
    }
}

/// Commission agent: an individual broker or a subdealer outlet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Broker {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub kind: BrokerKind,
    pub branch: BranchRef,
    /// Commission per vehicle in paise.
    #[serde(rename = "commissionPerVehicle")]
    pub commission_per_vehicle: Paise,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// One line of a broker's commission ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: Uuid,
    #[serde(rename = "entryDate")]
    pub entry_date: DateTime<Utc>,
    pub narration: String,
    pub debit: Paise,
    pub credit: Paise,
    pub balance: Paise,
}
