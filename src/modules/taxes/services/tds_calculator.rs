use rust_decimal::Decimal;

use crate::modules::clients::ClientType;
use crate::modules::taxes::models::TdsSlab;

/// TdsCalculator computes the TDS withholding on an invoice amount.
pub struct TdsCalculator;

impl TdsCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Compute TDS for `amount`.
    ///
    /// A custom rate, when given, applies unconditionally — including a
    /// rate of zero, which yields zero TDS regardless of the amount.
    /// Without a custom rate the statutory slab for the client category
    /// applies: nothing below the threshold, the slab rate at or above it.
    pub fn calculate(
        &self,
        amount: Decimal,
        client_type: ClientType,
        custom_rate: Option<Decimal>,
    ) -> Decimal {
        if let Some(rate) = custom_rate {
            return amount * rate / Decimal::ONE_HUNDRED;
        }

        let slab = TdsSlab::for_client(client_type);
        if amount >= slab.threshold {
            amount * slab.rate / Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        }
    }
}

impl Default for TdsCalculator {
    fn default() -> Self {
        Self::new()
    }
}
