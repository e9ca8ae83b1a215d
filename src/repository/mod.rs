//! Repository layer: persistence behind the service layer.
//!
//! `RepositoryManager` is the aggregate the services hold: one accessor per
//! entity repository. The bundled implementation keeps everything in an
//! [`InMemoryStore`], a typed, versioned key/value store.
//!
//! ## Track changes
//!
//! Reads take a `track_changes` flag and return a [`Tracked`] entity. An
//! untracked read carries no version and cannot be written back: the update
//! fails with [`RepositoryError::NotTracked`]. A tracked read carries the
//! version it saw; the update fails with
//! [`RepositoryError::ConcurrencyConflict`] if someone else wrote in between.
//! The version belongs to the value a caller holds, not to the store, so
//! other readers never affect it.
//!
//! Writes that touch a company and its employees (create with employees,
//! update with new employees, cascade delete, adding an employee to a
//! company) each happen under one store lock.
//!
//! ```ignore
//! let repo = InMemoryRepositoryManager::new();
//! let mut company = repo.company().get_company(id, true)?.unwrap();
//! company.name = "Renamed".into();
//! repo.company().update_company(&mut company, &[])?;
//! ```

mod company;
mod employee;
mod error;
mod manager;
mod store;

pub use company::{CompanyRepository, InMemoryCompanyRepository};
pub use employee::{EmployeeRepository, InMemoryEmployeeRepository};
pub use error::RepositoryError;
pub use manager::{InMemoryRepositoryManager, RepositoryManager};
pub use store::{InMemoryStore, Model, Tracked};
