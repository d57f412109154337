// In-memory client store
//
// The application's demo mode keeps all records in process memory. The
// store is an explicitly-owned object mutated through `&mut self`; there
// is no process-wide state.

use std::collections::HashMap;

use uuid::Uuid;

use crate::core::{AppError, Result};
use crate::modules::clients::models::Client;

/// Owned in-memory CRUD store for clients
#[derive(Debug, Default)]
pub struct ClientRepository {
    clients: HashMap<Uuid, Client>,
}

impl ClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new client, rejecting duplicate ids
    pub fn create(&mut self, client: Client) -> Result<Client> {
        if self.clients.contains_key(&client.id) {
            return Err(AppError::validation(format!(
                "Client {} already exists",
                client.id
            )));
        }
        tracing::debug!(client_id = %client.id, name = %client.name, "Creating client");
        self.clients.insert(client.id, client.clone());
        Ok(client)
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&Client> {
        self.clients.get(&id)
    }

    /// All clients, sorted by name for stable listings
    pub fn list(&self) -> Vec<&Client> {
        let mut all: Vec<&Client> = self.clients.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    /// Replace an existing client record
    pub fn update(&mut self, client: Client) -> Result<Client> {
        if !self.clients.contains_key(&client.id) {
            return Err(AppError::not_found(format!("Client {}", client.id)));
        }
        tracing::debug!(client_id = %client.id, "Updating client");
        self.clients.insert(client.id, client.clone());
        Ok(client)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<Client> {
        tracing::debug!(client_id = %id, "Deleting client");
        self.clients
            .remove(&id)
            .ok_or_else(|| AppError::not_found(format!("Client {}", id)))
    }
}
