pub mod models;
pub mod services;

pub use models::{GstBreakdown, GstRate, TaxParameters, TdsSlab};
pub use services::{GstCalculator, TdsCalculator};
