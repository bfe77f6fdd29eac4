//! Client repository.
//!
//! # Responsibility
//! - Own the client collection and its `clients.json` snapshot.
//! - Enforce case-insensitive email uniqueness, a guarantee the generic
//!   store deliberately does not provide.

use crate::model::client::Client;
use crate::model::{EntityId, ValidationError};
use crate::repo::store::{JsonStore, PersistenceError, RepoResult};
use std::path::Path;

const CLIENTS_FILE: &str = "clients.json";

/// Client collection backed by `clients.json` in the data directory.
#[derive(Debug)]
pub struct ClientRepository {
    store: JsonStore<Client>,
}

impl ClientRepository {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            store: JsonStore::new(data_dir.join(CLIENTS_FILE)),
        }
    }

    /// Appends one client, rejecting an email already held by any stored
    /// client (compared case-insensitively).
    pub fn add(&mut self, client: Client) -> RepoResult<()> {
        if self.email_exists(client.email(), None) {
            return Err(ValidationError::new(
                "email",
                "a client with this email already exists",
            )
            .into());
        }
        self.store.add(client)
    }

    pub fn all(&self) -> Vec<Client> {
        self.store.all()
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }

    pub fn get(&self, id: EntityId) -> RepoResult<&Client> {
        self.store.get(id)
    }

    pub fn update(&mut self, client: Client) -> RepoResult<()> {
        self.store.update(client)
    }

    pub fn remove(&mut self, id: EntityId) -> RepoResult<()> {
        self.store.remove(id)
    }

    pub fn save(&self) -> Result<(), PersistenceError> {
        self.store.save()
    }

    pub fn load(&mut self) -> Result<bool, PersistenceError> {
        self.store.load()
    }

    pub fn path(&self) -> &Path {
        self.store.path()
    }

    /// Next free client id (`max + 1`, 1 when empty).
    pub fn next_id(&self) -> EntityId {
        self.store.next_id()
    }

    /// Whether any stored client already uses `email`, compared
    /// case-insensitively. `exclude_id` skips one client, for "update self"
    /// checks.
    pub fn email_exists(&self, email: &str, exclude_id: Option<EntityId>) -> bool {
        if email.trim().is_empty() {
            return false;
        }
        self.store.iter().any(|client| {
            client.email().eq_ignore_ascii_case(email)
                && exclude_id.map_or(true, |id| client.id() != id)
        })
    }

    /// Finds a client by email, compared case-insensitively.
    pub fn get_by_email(&self, email: &str) -> Option<Client> {
        if email.trim().is_empty() {
            return None;
        }
        self.store
            .iter()
            .find(|client| client.email().eq_ignore_ascii_case(email))
            .cloned()
    }

    /// Case-insensitive substring match over names, ascending by name. A
    /// blank query matches nothing.
    pub fn search_by_name(&self, text: &str) -> Vec<Client> {
        let needle = text.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        let mut matches: Vec<Client> = self
            .store
            .iter()
            .filter(|client| client.name().to_lowercase().contains(&needle))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name().cmp(b.name()));
        matches
    }
}
