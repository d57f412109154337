pub mod models;
pub mod repositories;

pub use models::{validate_gstin, validate_pan, Client, ClientType};
pub use repositories::ClientRepository;
