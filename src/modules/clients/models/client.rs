// Client model with tax-identity validation
//
// A client is the billed party on an invoice. The client type (individual
// vs company) selects the default TDS withholding slab; GSTIN and PAN are
// the statutory tax identifiers and are format-checked when supplied.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{AppError, Result};

static GSTIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}[A-Z]{5}[0-9]{4}[A-Z][1-9A-Z]Z[0-9A-Z]$").expect("valid GSTIN pattern")
});

static PAN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").expect("valid PAN pattern"));

/// Client category for TDS purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClientType {
    /// Individual / sole proprietor
    Individual,
    /// Registered company
    Company,
}

impl Default for ClientType {
    fn default() -> Self {
        ClientType::Individual
    }
}

impl std::fmt::Display for ClientType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientType::Individual => write!(f, "individual"),
            ClientType::Company => write!(f, "company"),
        }
    }
}

impl std::str::FromStr for ClientType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "individual" => Ok(ClientType::Individual),
            "company" => Ok(ClientType::Company),
            other => Err(format!("Invalid client type: {}", other)),
        }
    }
}

/// Checks a GSTIN against the statutory 15-character format.
///
/// Format only; the embedded check digit is not verified.
pub fn validate_gstin(gstin: &str) -> bool {
    GSTIN_PATTERN.is_match(gstin)
}

/// Checks a PAN against the statutory 10-character format.
pub fn validate_pan(pan: &str) -> bool {
    PAN_PATTERN.is_match(pan)
}

/// A billed party
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    /// Indian state, used to decide intra- vs inter-state GST
    pub state: Option<String>,
    pub gstin: Option<String>,
    pub pan: Option<String>,
    pub client_type: ClientType,
}

impl Client {
    /// Create a client with the mandatory fields validated
    pub fn new(name: String, email: String, client_type: ClientType) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(AppError::validation("Client name cannot be empty"));
        }
        if !email.contains('@') {
            return Err(AppError::validation(format!(
                "Invalid client email: {}",
                email
            )));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone: None,
            address: None,
            state: None,
            gstin: None,
            pan: None,
            client_type,
        })
    }

    /// Attach a GSTIN after format validation
    pub fn with_gstin(mut self, gstin: String) -> Result<Self> {
        if !validate_gstin(&gstin) {
            return Err(AppError::validation(format!("Invalid GSTIN: {}", gstin)));
        }
        self.gstin = Some(gstin);
        Ok(self)
    }

    /// Attach a PAN after format validation
    pub fn with_pan(mut self, pan: String) -> Result<Self> {
        if !validate_pan(&pan) {
            return Err(AppError::validation(format!("Invalid PAN: {}", pan)));
        }
        self.pan = Some(pan);
        Ok(self)
    }
}
