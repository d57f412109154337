// Invoice model with lifecycle helpers
//
// An invoice ties a client to a set of line items and their computed
// totals. Status moves draft → sent → paid; an unpaid invoice past its
// due date is overdue.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::line_item::LineItem;
use super::totals::InvoiceTotals;

/// Default payment terms when the caller does not specify any
pub const DEFAULT_PAYMENT_TERMS_DAYS: i64 = 30;

/// Invoice status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Created but not yet sent to the client
    Draft,
    /// Sent, awaiting payment
    Sent,
    /// Payment received
    Paid,
}

impl Default for InvoiceStatus {
    fn default() -> Self {
        InvoiceStatus::Draft
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvoiceStatus::Draft => write!(f, "draft"),
            InvoiceStatus::Sent => write!(f, "sent"),
            InvoiceStatus::Paid => write!(f, "paid"),
        }
    }
}

impl std::str::FromStr for InvoiceStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "draft" => Ok(InvoiceStatus::Draft),
            "sent" => Ok(InvoiceStatus::Sent),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(format!("Invalid invoice status: {}", other)),
        }
    }
}

/// Due date derived from the invoice date plus payment terms in days
pub fn due_date_after(invoice_date: NaiveDate, payment_terms_days: i64) -> NaiveDate {
    invoice_date + Duration::days(payment_terms_days)
}

/// An invoice with its line items and computed totals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub invoice_number: String,
    pub client_id: Uuid,
    pub invoice_date: NaiveDate,
    pub due_date: NaiveDate,
    pub status: InvoiceStatus,
    pub items: Vec<LineItem>,
    pub totals: InvoiceTotals,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    /// Create a draft invoice; the due date follows from the payment terms
    pub fn new(
        invoice_number: String,
        client_id: Uuid,
        invoice_date: NaiveDate,
        payment_terms_days: i64,
        items: Vec<LineItem>,
        totals: InvoiceTotals,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            invoice_number,
            client_id,
            invoice_date,
            due_date: due_date_after(invoice_date, payment_terms_days),
            status: InvoiceStatus::Draft,
            items,
            totals,
            notes: None,
            created_at: Utc::now(),
        }
    }

    /// An invoice is overdue when unpaid past its due date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status != InvoiceStatus::Paid && self.due_date < today
    }
}
