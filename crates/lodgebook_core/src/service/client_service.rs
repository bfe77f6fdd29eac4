//! Client management service.
//!
//! # Responsibility
//! - Wrap the client repository 1:1 with use-case level operations.
//! - Centralize error translation: duplicate-email and not-found failures
//!   pass through un-wrapped, unexpected persistence failures during a
//!   mutation are wrapped with their original cause.
//!
//! # Invariants
//! - Every mutating call saves the repository before returning.
//! - The constructor's load is best-effort: a persistence failure is logged
//!   and discarded, starting from an empty collection.

use crate::model::client::Client;
use crate::model::{EntityId, ValidationError};
use crate::repo::client_repo::ClientRepository;
use crate::service::{log_discarded_load, ServiceError, ServiceResult};
use log::info;
use std::path::Path;

/// Use-case facade over the client repository.
pub struct ClientService {
    repo: ClientRepository,
}

impl ClientService {
    /// Opens the service over `data_dir`, loading whatever snapshot exists.
    ///
    /// A corrupt snapshot is deliberately discarded here (and only here):
    /// the failure is logged and the collection starts empty.
    pub fn open(data_dir: &Path) -> Self {
        let mut repo = ClientRepository::new(data_dir);
        log_discarded_load("client", repo.load());
        Self { repo }
    }

    /// Creates, stores and persists a new client, returning it.
    ///
    /// # Errors
    /// - Field and duplicate-email validation failures pass through
    ///   un-wrapped; a failed save is wrapped as an operation failure.
    pub fn add(&mut self, name: &str, email: &str, phone: &str) -> ServiceResult<Client> {
        let id = self.repo.next_id();
        let client = Client::new(id, name, email, phone)?;
        self.repo.add(client.clone())?;
        self.repo
            .save()
            .map_err(|err| ServiceError::Operation {
                context: "add client",
                source: err.into(),
            })?;
        info!("event=client_added module=service id={id}");
        Ok(client)
    }

    /// Updates every field of an existing client and persists the change.
    ///
    /// The email uniqueness check excludes the client itself, so an
    /// unchanged email is not a duplicate.
    ///
    /// # Errors
    /// - Duplicate-email and not-found failures pass through un-wrapped; a
    ///   failed save is wrapped as an operation failure.
    pub fn update(
        &mut self,
        id: EntityId,
        name: &str,
        email: &str,
        phone: &str,
    ) -> ServiceResult<Client> {
        if self.repo.email_exists(email, Some(id)) {
            return Err(ValidationError::new(
                "email",
                "this email is already used by another client",
            )
            .into());
        }
        // Mutate a copy so a failing setter leaves the stored client intact.
        let mut updated = self.repo.get(id)?.clone();
        updated.set_name(name)?;
        updated.set_email(email)?;
        updated.set_phone(phone)?;
        self.repo.update(updated.clone())?;
        self.repo
            .save()
            .map_err(|err| ServiceError::Operation {
                context: "update client",
                source: err.into(),
            })?;
        info!("event=client_updated module=service id={id}");
        Ok(updated)
    }

    /// Removes a client and persists the change.
    ///
    /// # Errors
    /// - Not-found passes through un-wrapped; a failed save is wrapped as an
    ///   operation failure.
    pub fn remove(&mut self, id: EntityId) -> ServiceResult<()> {
        self.repo.remove(id)?;
        self.repo
            .save()
            .map_err(|err| ServiceError::Operation {
                context: "remove client",
                source: err.into(),
            })?;
        info!("event=client_removed module=service id={id}");
        Ok(())
    }

    pub fn list_all(&self) -> Vec<Client> {
        self.repo.all()
    }

    pub fn get_by_id(&self, id: EntityId) -> ServiceResult<Client> {
        Ok(self.repo.get(id)?.clone())
    }

    /// Finds a client by email, compared case-insensitively.
    pub fn get_by_email(&self, email: &str) -> Option<Client> {
        self.repo.get_by_email(email)
    }

    /// Case-insensitive name search, ascending by name.
    pub fn search_by_name(&self, text: &str) -> Vec<Client> {
        self.repo.search_by_name(text)
    }

    pub fn count(&self) -> usize {
        self.repo.count()
    }

    /// Whether `email` is free for a new client.
    pub fn email_available(&self, email: &str) -> bool {
        !self.repo.email_exists(email, None)
    }

    /// All clients ordered ascending by name.
    pub fn sorted_by_name(&self) -> Vec<Client> {
        let mut clients = self.repo.all();
        clients.sort_by(|a, b| a.name().cmp(b.name()));
        clients
    }
}
