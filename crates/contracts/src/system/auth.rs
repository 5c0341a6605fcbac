use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
    pub role: String,
    pub permissions: Vec<Permission>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub branch_id: String,
    pub branch_name: String,
}

/// One granted capability: an action within a module.
///
/// Matching is exact and case-sensitive on both fields; there is no
/// wildcard or hierarchy semantics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub module: String,
    pub action: String,
}

impl Permission {
    pub fn new(module: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            action: action.into(),
        }
    }
}

/// Module names as granted by the API.
pub mod modules {
    pub const BRANCH: &str = "BRANCH";
    pub const BROKER: &str = "BROKER";
    pub const BROKER_LEDGER: &str = "BROKER_LEDGER";
    pub const STOCK: &str = "STOCK";
    pub const BOOKING: &str = "BOOKING";
    pub const RTO: &str = "RTO";
    pub const VOUCHER: &str = "VOUCHER";
}

/// Action names as granted by the API.
pub mod actions {
    pub const CREATE: &str = "CREATE";
    pub const READ: &str = "READ";
    pub const UPDATE: &str = "UPDATE";
    pub const DELETE: &str = "DELETE";
    pub const VERIFY: &str = "VERIFY";
    pub const APPROVE: &str = "APPROVE";
    pub const ALLOCATE: &str = "ALLOCATE";
    pub const APPLY: &str = "APPLY";
}
