//! Amount-in-words for printed receipts and vouchers, Indian grouping
//! (thousand, lakh, crore).

use contracts::domain::common::Paise;

const ONES: [&str; 20] = [
    "Zero", "One", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten",
    "Eleven", "Twelve", "Thirteen", "Fourteen", "Fifteen", "Sixteen", "Seventeen", "Eighteen",
    "Nineteen",
];

const TENS: [&str; 10] = [
    "", "", "Twenty", "Thirty", "Forty", "Fifty", "Sixty", "Seventy", "Eighty", "Ninety",
];

fn two_digits(n: u64) -> String {
    debug_assert!(n < 100);
    if n < 20 {
        ONES[n as usize].to_string()
    } else if n % 10 == 0 {
        TENS[(n / 10) as usize].to_string()
    } else {
        format!("{} {}", TENS[(n / 10) as usize], ONES[(n % 10) as usize])
    }
}

fn three_digits(n: u64) -> String {
    debug_assert!(n < 1000);
    if n < 100 {
        two_digits(n)
    } else if n % 100 == 0 {
        format!("{} Hundred", ONES[(n / 100) as usize])
    } else {
        format!("{} Hundred {}", ONES[(n / 100) as usize], two_digits(n % 100))
    }
}

/// Whole number in words with Indian grouping: crore (10^7), lakh (10^5),
/// thousand, then the last three digits.
pub fn number_in_words(n: u64) -> String {
    if n == 0 {
        return "Zero".to_string();
    }

    let mut parts: Vec<String> = Vec::new();
    let crore = n / 1_00_00_000;
    let lakh = (n / 1_00_000) % 100;
    let thousand = (n / 1000) % 100;
    let rest = n % 1000;

    if crore > 0 {
        // Amounts past 99 crore recurse into full words for the crore count.
        let words = if crore < 100 {
            two_digits(crore)
        } else {
            number_in_words(crore)
        };
        parts.push(format!("{} Crore", words));
    }
    if lakh > 0 {
        parts.push(format!("{} Lakh", two_digits(lakh)));
    }
    if thousand > 0 {
        parts.push(format!("{} Thousand", two_digits(thousand)));
    }
    if rest > 0 {
        parts.push(three_digits(rest));
    }

    parts.join(" ")
}

/// Paise amount as a spoken rupee figure, e.g.
/// `1_23_456_78` -> "Rupees One Lakh Twenty Three Thousand Four Hundred
/// Fifty Six and Seventy Eight Paise Only".
pub fn rupees_in_words(amount: Paise) -> String {
    let abs = amount.unsigned_abs();
    let rupees = abs / 100;
    let paise = abs % 100;

    let mut out = format!("Rupees {}", number_in_words(rupees));
    if paise > 0 {
        out.push_str(&format!(" and {} Paise", two_digits(paise)));
    }
    out.push_str(" Only");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_numbers() {
        assert_eq!(number_in_words(0), "Zero");
        assert_eq!(number_in_words(7), "Seven");
        assert_eq!(number_in_words(13), "Thirteen");
        assert_eq!(number_in_words(40), "Forty");
        assert_eq!(number_in_words(99), "Ninety Nine");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(number_in_words(100), "One Hundred");
        assert_eq!(number_in_words(305), "Three Hundred Five");
        assert_eq!(number_in_words(999), "Nine Hundred Ninety Nine");
    }

    #[test]
    fn test_indian_grouping() {
        assert_eq!(number_in_words(1000), "One Thousand");
        assert_eq!(number_in_words(12_345), "Twelve Thousand Three Hundred Forty Five");
        assert_eq!(number_in_words(1_00_000), "One Lakh");
        assert_eq!(
            number_in_words(1_23_456),
            "One Lakh Twenty Three Thousand Four Hundred Fifty Six"
        );
        assert_eq!(number_in_words(1_00_00_000), "One Crore");
        assert_eq!(
            number_in_words(98_76_54_321),
            "Ninety Eight Crore Seventy Six Lakh Fifty Four Thousand Three Hundred Twenty One"
        );
    }

    #[test]
    fn test_rupees_in_words() {
        assert_eq!(rupees_in_words(0), "Rupees Zero Only");
        assert_eq!(
            rupees_in_words(1_23_456_78),
            "Rupees One Lakh Twenty Three Thousand Four Hundred Fifty Six and Seventy Eight Paise Only"
        );
        assert_eq!(rupees_in_words(50_000_00), "Rupees Fifty Thousand Only");
    }
}
