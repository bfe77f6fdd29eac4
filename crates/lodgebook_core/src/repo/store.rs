//! Generic entity store with whole-snapshot JSON persistence.
//!
//! # Responsibility
//! - Hold the authoritative in-memory collection for one entity type.
//! - Persist and reload the full collection as one indented JSON array.
//!
//! # Invariants
//! - `save` overwrites the whole backing file; durability is synchronous
//!   best-effort with no write-ahead log and no atomic rename.
//! - `load` replaces the collection wholesale and never partially applies a
//!   corrupt file.

use crate::model::{Entity, EntityId, ValidationError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};

pub type RepoResult<T> = Result<T, RepoError>;

/// I/O or (de)serialization failure on a repository's backing file.
#[derive(Debug)]
pub struct PersistenceError {
    /// Backing file the operation was reading or writing.
    pub path: PathBuf,
    /// Underlying I/O, encoding or persisted-state cause.
    pub source: Box<dyn Error + Send + Sync>,
}

impl PersistenceError {
    pub fn new(path: &Path, source: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

impl Display for PersistenceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "persistence failure at `{}`: {}",
            self.path.display(),
            self.source
        )
    }
}

impl Error for PersistenceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Repository operation error.
#[derive(Debug)]
pub enum RepoError {
    /// An entity field violated its invariant.
    Validation(ValidationError),
    /// No entity of `kind` with `id` exists in the collection.
    NotFound { kind: &'static str, id: EntityId },
    /// Reading or writing the backing file failed.
    Persistence(PersistenceError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} with id {id} not found"),
            Self::Persistence(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound { .. } => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<ValidationError> for RepoError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<PersistenceError> for RepoError {
    fn from(value: PersistenceError) -> Self {
        Self::Persistence(value)
    }
}

/// In-memory collection of one entity type backed by a JSON array file.
#[derive(Debug)]
pub struct JsonStore<T> {
    items: Vec<T>,
    path: PathBuf,
}

impl<T> JsonStore<T>
where
    T: Entity + Serialize + DeserializeOwned + Clone,
{
    /// Creates an empty store backed by `path`. Nothing is read or written
    /// until `load`/`save`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            items: Vec::new(),
            path,
        }
    }

    /// Backing file location.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one entity after re-checking its invariants.
    ///
    /// Cross-entity rules (uniqueness) are a specialization concern and are
    /// not enforced here.
    pub fn add(&mut self, entity: T) -> RepoResult<()> {
        entity.validate()?;
        self.items.push(entity);
        Ok(())
    }

    /// Defensive copy of the collection; mutating it never affects the
    /// store.
    pub fn all(&self) -> Vec<T> {
        self.items.clone()
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Borrowing iterator for specialized queries; never exposed outside
    /// the repository layer.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Borrows the entity with `id`.
    pub fn get(&self, id: EntityId) -> RepoResult<&T> {
        self.items
            .iter()
            .find(|item| item.id() == id)
            .ok_or(RepoError::NotFound {
                kind: T::kind(),
                id,
            })
    }

    /// Replaces the stored entity carrying the same id.
    pub fn update(&mut self, entity: T) -> RepoResult<()> {
        entity.validate()?;
        let id = entity.id();
        let slot = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(RepoError::NotFound {
                kind: T::kind(),
                id,
            })?;
        *slot = entity;
        Ok(())
    }

    /// Removes the entity with `id` by identity match.
    pub fn remove(&mut self, id: EntityId) -> RepoResult<()> {
        let index = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(RepoError::NotFound {
                kind: T::kind(),
                id,
            })?;
        self.items.remove(index);
        Ok(())
    }

    /// Next free identifier: `max(existing) + 1`, or 1 when empty.
    ///
    /// Not a durable counter: removing the current maximum re-issues its id.
    pub fn next_id(&self) -> EntityId {
        self.items
            .iter()
            .map(Entity::id)
            .max()
            .map_or(1, |max| max + 1)
    }

    /// Serializes the whole collection to the backing file, overwriting any
    /// prior contents.
    ///
    /// # Errors
    /// - Encoding or I/O failures, carrying the file path and cause.
    pub fn save(&self) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| PersistenceError::new(&self.path, err))?;
        }
        let json = serde_json::to_string_pretty(&self.items)
            .map_err(|err| PersistenceError::new(&self.path, err))?;
        fs::write(&self.path, json).map_err(|err| PersistenceError::new(&self.path, err))
    }

    /// Reads the backing file, replacing the in-memory collection wholesale.
    ///
    /// An absent file or blank content is the normal "nothing persisted yet"
    /// outcome and returns `Ok(false)` without touching the collection.
    ///
    /// # Errors
    /// - A present-but-unreadable or unparseable file, or one holding an
    ///   entity that fails validation.
    pub fn load(&mut self) -> Result<bool, PersistenceError> {
        if !self.path.exists() {
            return Ok(false);
        }
        let json =
            fs::read_to_string(&self.path).map_err(|err| PersistenceError::new(&self.path, err))?;
        if json.trim().is_empty() {
            return Ok(false);
        }
        let items: Vec<T> = serde_json::from_str(&json)
            .map_err(|err| PersistenceError::new(&self.path, err))?;
        for item in &items {
            item.validate()
                .map_err(|err| PersistenceError::new(&self.path, err))?;
        }
        self.items = items;
        Ok(true)
    }
}
