use rust_decimal::Decimal;

use crate::modules::taxes::models::GstBreakdown;

/// GstCalculator decomposes a taxable amount into its GST components.
///
/// Intra-state supplies split the tax equally into CGST and SGST;
/// inter-state supplies carry the full tax as IGST.
pub struct GstCalculator;

impl GstCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Split `amount × gst_rate%` into CGST/SGST or IGST.
    ///
    /// No rounding is performed here; rounding happens once at the
    /// aggregator boundary so the split components always reconcile with
    /// the total.
    pub fn split(&self, amount: Decimal, gst_rate: Decimal, is_inter_state: bool) -> GstBreakdown {
        let total = amount * gst_rate / Decimal::ONE_HUNDRED;

        if is_inter_state {
            GstBreakdown {
                cgst: Decimal::ZERO,
                sgst: Decimal::ZERO,
                igst: total,
                total,
            }
        } else {
            let half = total / Decimal::TWO;
            GstBreakdown {
                cgst: half,
                sgst: half,
                igst: Decimal::ZERO,
                total,
            }
        }
    }
}

impl Default for GstCalculator {
    fn default() -> Self {
        Self::new()
    }
}
