pub mod models;
pub mod repositories;
pub mod services;

pub use models::{due_date_after, Invoice, InvoiceStatus, InvoiceTotals, LineItem};
pub use repositories::InvoiceRepository;
pub use services::TotalsCalculator;
