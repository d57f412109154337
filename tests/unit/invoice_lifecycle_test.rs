// Tests for invoice due dates, overdue detection, and status round-trips

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use uuid::Uuid;

use billkhata::invoices::models::DEFAULT_PAYMENT_TERMS_DAYS;
use billkhata::invoices::{due_date_after, Invoice, InvoiceStatus, InvoiceTotals, LineItem};

fn sample_invoice(invoice_date: NaiveDate) -> Invoice {
    let items = vec![LineItem::new("Design work".into(), dec!(1), dec!(20000)).unwrap()];
    Invoice::new(
        "INV-2024-001".into(),
        Uuid::new_v4(),
        invoice_date,
        DEFAULT_PAYMENT_TERMS_DAYS,
        items,
        InvoiceTotals::zero(),
    )
}

#[test]
fn test_default_terms_land_thirty_days_out() {
    let invoice_date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    assert_eq!(
        due_date_after(invoice_date, DEFAULT_PAYMENT_TERMS_DAYS),
        NaiveDate::from_ymd_opt(2024, 4, 14).unwrap()
    );

    // Month-end and custom terms
    let eom = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    assert_eq!(
        due_date_after(eom, 15),
        NaiveDate::from_ymd_opt(2024, 2, 15).unwrap()
    );
}

#[test]
fn test_overdue_requires_unpaid_and_past_due() {
    let invoice_date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    let mut invoice = sample_invoice(invoice_date);
    let due = invoice.due_date;

    // Not overdue on or before the due date
    assert!(!invoice.is_overdue(due));
    assert!(invoice.is_overdue(due + chrono::Duration::days(1)));

    // A paid invoice is never overdue
    invoice.status = InvoiceStatus::Paid;
    assert!(!invoice.is_overdue(due + chrono::Duration::days(90)));
}

#[test]
fn test_new_invoices_start_as_drafts() {
    let invoice = sample_invoice(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    assert_eq!(invoice.status, InvoiceStatus::Draft);
}

#[test]
fn test_status_round_trip() {
    for status in [InvoiceStatus::Draft, InvoiceStatus::Sent, InvoiceStatus::Paid] {
        let text = status.to_string();
        assert_eq!(text.parse::<InvoiceStatus>(), Ok(status));
    }
    assert!("cancelled".parse::<InvoiceStatus>().is_err());
}
