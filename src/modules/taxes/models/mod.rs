pub mod tax;

pub use tax::{GstBreakdown, GstRate, TaxParameters, TdsSlab};
