// In-memory invoice store
//
// Backs the application's demo/fallback mode. An explicitly-owned object
// with CRUD methods, mutated through `&mut self`; no process-wide state.

use std::collections::HashMap;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::invoices::models::{Invoice, InvoiceStatus};

/// Owned in-memory CRUD store for invoices
#[derive(Debug, Default)]
pub struct InvoiceRepository {
    invoices: HashMap<Uuid, Invoice>,
}

impl InvoiceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new invoice, rejecting duplicate ids and invoice numbers
    pub fn create(&mut self, invoice: Invoice) -> Result<Invoice> {
        if self.invoices.contains_key(&invoice.id) {
            return Err(AppError::validation(format!(
                "Invoice {} already exists",
                invoice.id
            )));
        }
        if self.find_by_number(&invoice.invoice_number).is_some() {
            return Err(AppError::validation(format!(
                "Invoice number {} already in use",
                invoice.invoice_number
            )));
        }
        tracing::debug!(
            invoice_id = %invoice.id,
            number = %invoice.invoice_number,
            "Creating invoice"
        );
        self.invoices.insert(invoice.id, invoice.clone());
        Ok(invoice)
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&Invoice> {
        self.invoices.get(&id)
    }

    pub fn find_by_number(&self, invoice_number: &str) -> Option<&Invoice> {
        self.invoices
            .values()
            .find(|inv| inv.invoice_number == invoice_number)
    }

    /// All invoices, newest invoice date first
    pub fn list(&self) -> Vec<&Invoice> {
        let mut all: Vec<&Invoice> = self.invoices.values().collect();
        all.sort_by(|a, b| b.invoice_date.cmp(&a.invoice_date));
        all
    }

    /// Unpaid invoices past their due date as of `today`
    pub fn list_overdue(&self, today: NaiveDate) -> Vec<&Invoice> {
        self.list()
            .into_iter()
            .filter(|inv| inv.is_overdue(today))
            .collect()
    }

    /// Replace an existing invoice record
    pub fn update(&mut self, invoice: Invoice) -> Result<Invoice> {
        if !self.invoices.contains_key(&invoice.id) {
            return Err(AppError::not_found(format!("Invoice {}", invoice.id)));
        }
        tracing::debug!(invoice_id = %invoice.id, "Updating invoice");
        self.invoices.insert(invoice.id, invoice.clone());
        Ok(invoice)
    }

    /// Move an invoice to a new lifecycle status
    pub fn update_status(&mut self, id: Uuid, status: InvoiceStatus) -> Result<Invoice> {
        let invoice = self
            .invoices
            .get_mut(&id)
            .ok_or_else(|| AppError::not_found(format!("Invoice {}", id)))?;
        tracing::debug!(invoice_id = %id, %status, "Updating invoice status");
        invoice.status = status;
        Ok(invoice.clone())
    }

    pub fn delete(&mut self, id: Uuid) -> Result<Invoice> {
        tracing::debug!(invoice_id = %id, "Deleting invoice");
        self.invoices
            .remove(&id)
            .ok_or_else(|| AppError::not_found(format!("Invoice {}", id)))
    }
}
