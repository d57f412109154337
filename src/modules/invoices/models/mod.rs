pub mod invoice;
pub mod line_item;
pub mod totals;

pub use invoice::{due_date_after, Invoice, InvoiceStatus, DEFAULT_PAYMENT_TERMS_DAYS};
pub use line_item::LineItem;
pub use totals::InvoiceTotals;
