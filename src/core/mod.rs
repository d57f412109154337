pub mod currency;
pub mod error;

pub use currency::{amount_in_words, format_inr, round_money};
pub use error::{AppError, Result};
