//! Print-ready booking receipt. Plain inline-styled HTML; the browser's
//! print dialog does the rest.

use contracts::domain::common::format_rupees;

use super::BookingRow;
use crate::shared::amount_words::rupees_in_words;
use crate::shared::date_utils::format_date;

pub fn receipt_html(row: &BookingRow) -> String {
    let vehicle = format!("{} {}", row.model, row.variant);
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Booking Receipt {booking_no}</title>
<style>
  body {{ font-family: Georgia, serif; margin: 40px; color: #222; }}
  .receipt {{ max-width: 700px; margin: 0 auto; border: 1px solid #888; padding: 32px; }}
  h1 {{ font-size: 20px; text-align: center; margin-bottom: 4px; }}
  h2 {{ font-size: 14px; text-align: center; font-weight: normal; margin-top: 0; }}
  table {{ width: 100%; border-collapse: collapse; margin-top: 24px; }}
  td {{ padding: 6px 4px; vertical-align: top; }}
  td.label {{ width: 35%; color: #555; }}
  .amount {{ font-size: 16px; font-weight: bold; }}
  .words {{ font-style: italic; }}
  .footer {{ margin-top: 48px; display: flex; justify-content: space-between; }}
</style>
</head>
<body>
<div class="receipt">
  <h1>{branch}</h1>
  <h2>Booking Advance Receipt</h2>
  <table>
    <tr><td class="label">Receipt for booking</td><td>{booking_no}</td></tr>
    <tr><td class="label">Date</td><td>{date}</td></tr>
    <tr><td class="label">Received from</td><td>{customer} ({phone})</td></tr>
    <tr><td class="label">Vehicle</td><td>{vehicle}</td></tr>
    <tr><td class="label">Chassis No</td><td>{chassis}</td></tr>
    <tr><td class="label">Amount</td><td class="amount">Rs. {amount}</td></tr>
    <tr><td class="label">In words</td><td class="words">{words}</td></tr>
  </table>
  <div class="footer">
    <span>Customer signature</span>
    <span>Authorised signatory</span>
  </div>
</div>
</body>
</html>"#,
        booking_no = row.booking_no,
        branch = row.branch_name,
        date = format_date(&row.created_at),
        customer = row.customer_name,
        phone = row.customer_phone,
        vehicle = vehicle,
        chassis = row.chassis_no,
        amount = format_rupees(row.amount),
        words = rupees_in_words(row.amount),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_booking::BookingStatus;

    #[test]
    fn receipt_carries_amount_in_words() {
        let row = BookingRow {
            id: uuid::Uuid::nil(),
            booking_no: "BK-0042".to_string(),
            customer_name: "A. Kumar".to_string(),
            customer_phone: "9000000000".to_string(),
            model: "Astra".to_string(),
            variant: "ZX".to_string(),
            branch_name: "East Branch".to_string(),
            broker_name: "-".to_string(),
            amount: 50_000_00,
            status: BookingStatus::Allocated,
            chassis_no: "CH123".to_string(),
            created_at: "2024-03-15T10:00:00Z".to_string(),
        };
        let html = receipt_html(&row);
        assert!(html.contains("BK-0042"));
        assert!(html.contains("Rupees Fifty Thousand Only"));
        assert!(html.contains("Rs. 50000.00"));
        assert!(html.contains("15-03-2024"));
    }
}
