//! Service layer: business orchestration between handlers and repositories.
//!
//! `CompanyService` and `EmployeeService` each hold the repository-access
//! aggregate and translate entity lookups into DTOs, turning missing rows
//! into typed [`ServiceError`]s instead of empty results. Logging goes
//! through `tracing`.
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use company_employees::repository::InMemoryRepositoryManager;
//! use company_employees::service::ServiceManager;
//!
//! let services = ServiceManager::new(Arc::new(InMemoryRepositoryManager::new()));
//! let companies = services.company().get_all_companies(false)?;
//! ```

mod company;
mod employee;
mod error;
mod manager;

pub use company::CompanyService;
pub use employee::EmployeeService;
pub use error::ServiceError;
pub use manager::ServiceManager;
