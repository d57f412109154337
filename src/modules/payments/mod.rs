pub mod services;

pub use services::upi_pay_link;
