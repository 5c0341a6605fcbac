use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lightweight reference to a branch, embedded in records that belong to one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchRef {
    pub id: Uuid,
    pub name: String,
}

/// Customer contact details carried on bookings and RTO applications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Amounts travel as integer paise to avoid float drift in ledgers.
pub type Paise = i64;

/// Format an amount in paise as rupees with two decimals, e.g. `12345` -> `"123.45"`.
pub fn format_rupees(amount: Paise) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(0), "0.00");
        assert_eq!(format_rupees(5), "0.05");
        assert_eq!(format_rupees(12345), "123.45");
        assert_eq!(format_rupees(-12345), "-123.45");
        assert_eq!(format_rupees(100_000_00), "100000.00");
    }
}
