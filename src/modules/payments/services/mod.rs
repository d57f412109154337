pub mod upi_link;

pub use upi_link::upi_pay_link;
