use rust_decimal::Decimal;

/// Builds a `upi://pay` deep link for an invoice payment.
///
/// Query parameters follow the UPI linking convention: `pa` (payee
/// address), `pn` (payee name), `am` (amount as a plain decimal string,
/// not minor units), `cu` (fixed to INR) and `tn` (transaction note
/// referencing the invoice number).
///
/// The payee address passes through unvalidated and unencoded; the UPI
/// app opening the link performs its own validation. Name and note are
/// percent-encoded.
pub fn upi_pay_link(
    upi_id: &str,
    amount: Decimal,
    invoice_number: &str,
    payee_name: &str,
) -> String {
    let note = format!("Payment for Invoice {}", invoice_number);
    format!(
        "upi://pay?pa={}&pn={}&am={}&cu=INR&tn={}",
        upi_id,
        urlencoding::encode(payee_name),
        amount.normalize(),
        urlencoding::encode(&note),
    )
}
