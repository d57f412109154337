use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Computed monetary fields of an invoice, every amount rounded to two
/// decimal places.
///
/// Callers persist and display this record verbatim, so the serialized
/// field names (camelCase) and the rounding behavior are part of the
/// contract. Rates are percentages; `cgst_rate`/`sgst_rate` are always
/// half the GST rate even on inter-state invoices, where the
/// corresponding amounts are zero and the full tax sits in `igst_amount`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub tax_rate: Decimal,
    pub tax_amount: Decimal,
    pub cgst_rate: Decimal,
    pub cgst_amount: Decimal,
    pub sgst_rate: Decimal,
    pub sgst_amount: Decimal,
    pub igst_rate: Decimal,
    pub igst_amount: Decimal,
    pub tds_rate: Decimal,
    pub tds_amount: Decimal,
    pub total_amount: Decimal,
}

impl InvoiceTotals {
    /// All-zero record, the result for an invoice with no line items
    pub fn zero() -> Self {
        Self {
            subtotal: Decimal::ZERO,
            tax_rate: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
            cgst_rate: Decimal::ZERO,
            cgst_amount: Decimal::ZERO,
            sgst_rate: Decimal::ZERO,
            sgst_amount: Decimal::ZERO,
            igst_rate: Decimal::ZERO,
            igst_amount: Decimal::ZERO,
            tds_rate: Decimal::ZERO,
            tds_amount: Decimal::ZERO,
            total_amount: Decimal::ZERO,
        }
    }
}

impl Default for InvoiceTotals {
    fn default() -> Self {
        Self::zero()
    }
}
