use rust_decimal::Decimal;

use crate::core::currency::round_money;
use crate::modules::invoices::models::{InvoiceTotals, LineItem};
use crate::modules::taxes::models::TaxParameters;
use crate::modules::taxes::services::{GstCalculator, TdsCalculator};

/// TotalsCalculator assembles the full monetary record of an invoice:
/// subtotal, GST split, TDS withholding, and grand total.
///
/// Pure arithmetic with no input validation; callers sanitize inputs
/// (the calculator will happily pass a negative total through if fed a
/// TDS rate above 100).
pub struct TotalsCalculator {
    gst: GstCalculator,
    tds: TdsCalculator,
}

impl TotalsCalculator {
    pub fn new() -> Self {
        Self {
            gst: GstCalculator::new(),
            tds: TdsCalculator::new(),
        }
    }

    /// Compute invoice totals from stored line-item amounts.
    ///
    /// The subtotal, tax split, and TDS are carried unrounded through the
    /// pipeline; every output field is rounded to two decimals
    /// independently from its own unrounded value, so components never
    /// accumulate rounding drift.
    ///
    /// The TDS rate is always forwarded to the withholding calculation as
    /// an explicit rate: `tds_rate = 0` means "no TDS", never "apply the
    /// threshold-based default slab".
    pub fn calculate(&self, items: &[LineItem], params: &TaxParameters) -> InvoiceTotals {
        if items.is_empty() {
            return InvoiceTotals::zero();
        }

        let subtotal: Decimal = items.iter().map(|item| item.amount).sum();

        let gst = self.gst.split(subtotal, params.tax_rate, params.is_inter_state);
        let tds_amount = self
            .tds
            .calculate(subtotal, params.client_type, Some(params.tds_rate));
        let total_amount = subtotal + gst.total - tds_amount;

        let half_rate = params.tax_rate / Decimal::TWO;

        tracing::debug!(
            %subtotal,
            tax_total = %gst.total,
            %tds_amount,
            inter_state = params.is_inter_state,
            "Computed invoice totals"
        );

        InvoiceTotals {
            subtotal: round_money(subtotal),
            tax_rate: params.tax_rate,
            tax_amount: round_money(gst.total),
            cgst_rate: half_rate,
            cgst_amount: round_money(gst.cgst),
            sgst_rate: half_rate,
            sgst_amount: round_money(gst.sgst),
            igst_rate: if params.is_inter_state {
                params.tax_rate
            } else {
                Decimal::ZERO
            },
            igst_amount: round_money(gst.igst),
            tds_rate: params.tds_rate,
            tds_amount: round_money(tds_amount),
            total_amount: round_money(total_amount),
        }
    }
}

impl Default for TotalsCalculator {
    fn default() -> Self {
        Self::new()
    }
}
