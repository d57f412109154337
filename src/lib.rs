//! BillKhata Invoicing Core Library
//!
//! This library provides the computation core for an Indian freelancer
//! invoicing system: GST/TDS tax calculation, invoice totals aggregation,
//! INR currency formatting, and UPI payment-link construction.

pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::clients;
pub use modules::invoices;
pub use modules::payments;
pub use modules::taxes;
