// Tax rate policy tables and calculation records
//
// GST slabs and TDS withholding thresholds for Indian freelance service
// invoices. All rates are percentages (18 means 18%).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::modules::clients::ClientType;

/// Named GST slabs applicable to services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GstRate {
    /// Standard services rate (18%)
    Standard,
    /// Reduced rate (12%)
    Reduced,
    /// Zero-rated / exempt (0%)
    Zero,
}

impl GstRate {
    pub fn percent(&self) -> Decimal {
        match self {
            GstRate::Standard => Decimal::from(18),
            GstRate::Reduced => Decimal::from(12),
            GstRate::Zero => Decimal::ZERO,
        }
    }
}

/// Default TDS withholding slab: the rate applies once the invoice amount
/// reaches the threshold, below it no TDS is withheld.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TdsSlab {
    pub threshold: Decimal,
    pub rate: Decimal,
}

impl TdsSlab {
    /// Statutory default slab by client category:
    /// individuals 1% from ₹50,000, companies 2% from ₹30,000.
    pub fn for_client(client_type: ClientType) -> Self {
        match client_type {
            ClientType::Individual => Self {
                threshold: Decimal::from(50_000),
                rate: Decimal::ONE,
            },
            ClientType::Company => Self {
                threshold: Decimal::from(30_000),
                rate: Decimal::TWO,
            },
        }
    }
}

/// GST decomposition of a taxable amount. Unrounded; the totals
/// aggregator rounds once at its output boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GstBreakdown {
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
    pub total: Decimal,
}

/// Tax inputs for one invoice calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxParameters {
    /// GST percentage applied to the subtotal (0–100)
    pub tax_rate: Decimal,
    /// TDS percentage; zero means no TDS is withheld
    pub tds_rate: Decimal,
    pub client_type: ClientType,
    /// Inter-state supply uses IGST in place of the CGST+SGST split
    pub is_inter_state: bool,
}

impl Default for TaxParameters {
    fn default() -> Self {
        Self {
            tax_rate: GstRate::Standard.percent(),
            tds_rate: Decimal::ZERO,
            client_type: ClientType::Individual,
            is_inter_state: false,
        }
    }
}
