use super::{
    CompanyRepository, EmployeeRepository, InMemoryCompanyRepository, InMemoryEmployeeRepository,
    InMemoryStore,
};

/// Aggregate giving the service layer access to every repository.
pub trait RepositoryManager: Send + Sync {
    fn company(&self) -> &dyn CompanyRepository;
    fn employee(&self) -> &dyn EmployeeRepository;
}

/// Repository manager whose repositories share one [`InMemoryStore`].
#[derive(Clone)]
pub struct InMemoryRepositoryManager {
    company: InMemoryCompanyRepository,
    employee: InMemoryEmployeeRepository,
}

impl Default for InMemoryRepositoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepositoryManager {
    pub fn new() -> Self {
        Self::with_store(InMemoryStore::new())
    }

    pub fn with_store(store: InMemoryStore) -> Self {
        Self {
            company: InMemoryCompanyRepository::new(store.clone()),
            employee: InMemoryEmployeeRepository::new(store),
        }
    }
}

impl RepositoryManager for InMemoryRepositoryManager {
    fn company(&self) -> &dyn CompanyRepository {
        &self.company
    }

    fn employee(&self) -> &dyn EmployeeRepository {
        &self.employee
    }
}
