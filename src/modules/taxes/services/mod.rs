pub mod gst_calculator;
pub mod tds_calculator;

pub use gst_calculator::GstCalculator;
pub use tds_calculator::TdsCalculator;
