// LineItem model with amount calculation
//
// A line item is one billable entry on an invoice. Quantity is a decimal
// so fractional units (hours, days) are billable. The stored `amount` is
// quantity × rate, computed at construction; the totals aggregator sums
// stored amounts directly and does not recompute them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// Represents a single billable entry in an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Description of the product or service
    pub description: String,

    /// Billed quantity (fractional allowed, e.g. hours)
    pub quantity: Decimal,

    /// Rate per unit in rupees
    pub rate: Decimal,

    /// quantity × rate, kept unrounded
    pub amount: Decimal,
}

impl LineItem {
    /// Create a line item with validation, computing its amount
    pub fn new(description: String, quantity: Decimal, rate: Decimal) -> Result<Self> {
        if description.trim().is_empty() {
            return Err(AppError::validation("Line item description cannot be empty"));
        }
        if quantity <= Decimal::ZERO {
            return Err(AppError::validation("Line item quantity must be positive"));
        }
        if rate < Decimal::ZERO {
            return Err(AppError::validation("Line item rate cannot be negative"));
        }

        Ok(Self {
            description,
            quantity,
            rate,
            amount: quantity * rate,
        })
    }

    /// Recompute the stored amount after editing quantity or rate
    pub fn recalculate_amount(&mut self) {
        self.amount = self.quantity * self.rate;
    }
}
