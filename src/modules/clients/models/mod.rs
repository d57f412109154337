pub mod client;

pub use client::{validate_gstin, validate_pan, Client, ClientType};
