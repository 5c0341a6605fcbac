use chrono::{DateTime, NaiveDate};

/// ISO timestamp -> "dd-mm-YYYY HH:MM". Unparseable input comes back as-is.
pub fn format_datetime(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.format("%d-%m-%Y %H:%M").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// ISO date or timestamp -> "dd-mm-YYYY".
pub fn format_date(iso: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.format("%d-%m-%Y").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        return d.format("%d-%m-%Y").to_string();
    }
    iso.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15-03-2024 14:02"
        );
        assert_eq!(format_datetime("2024-12-31T23:59:59Z"), "31-12-2024 23:59");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15-03-2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15-03-2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
