// Tests for UPI deep-link construction
//
// The upi://pay?pa=&pn=&am=&cu=&tn= format is consumed by external UPI
// apps and must be reproduced exactly, including percent-encoding of the
// transaction note.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use billkhata::payments::upi_pay_link;

#[test]
fn test_link_contains_all_parameters() {
    let link = upi_pay_link("freelancer@upi", dec!(1000), "INV-001", "Freelancer");

    assert!(link.starts_with("upi://pay?"));
    assert!(link.contains("pa=freelancer@upi"));
    assert!(link.contains("pn=Freelancer"));
    assert!(link.contains("am=1000"));
    assert!(link.contains("cu=INR"));
    assert!(link.contains("tn=Payment%20for%20Invoice%20INV-001"));
}

#[test]
fn test_amount_renders_as_plain_decimal() {
    // Rupee-denominated decimal string, not minor units, trailing zeros
    // trimmed
    let link = upi_pay_link("a@upi", dec!(1234.50), "INV-002", "A");
    assert!(link.contains("am=1234.5"));

    let link = upi_pay_link("a@upi", dec!(1000.00), "INV-003", "A");
    assert!(link.contains("am=1000&"));
}

#[test]
fn test_payee_name_is_encoded() {
    let link = upi_pay_link("a@upi", Decimal::ONE, "INV-004", "Asha & Co");
    assert!(link.contains("pn=Asha%20%26%20Co"));
}

#[test]
fn test_malformed_upi_id_passes_through() {
    // The engine does not validate payee addresses; the UPI app does
    let link = upi_pay_link("not a vpa", dec!(10), "INV-005", "A");
    assert!(link.contains("pa=not a vpa"));
}
