pub mod clients;
pub mod invoices;
pub mod payments;
pub mod taxes;
