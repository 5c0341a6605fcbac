use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Dealership branch (showroom / sales outlet).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Branch {
    pub id: Uuid,
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    pub phone: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Payload for create and update; the server assigns id/timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BranchUpsertRequest {
    pub name: String,
    pub city: String,
    #[serde(default)]
    pub address: Option<String>,
    pub phone: String,
}
