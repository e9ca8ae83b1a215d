use uuid::Uuid;

use super::{InMemoryStore, Model, RepositoryError, Tracked};
use crate::domain::{Company, Employee};

impl Model for Company {
    const COLLECTION: &'static str = "companies";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Persistence operations for companies.
pub trait CompanyRepository: Send + Sync {
    /// All companies, ordered by name.
    fn get_all_companies(
        &self,
        track_changes: bool,
    ) -> Result<Vec<Tracked<Company>>, RepositoryError>;

    fn get_company(
        &self,
        id: Uuid,
        track_changes: bool,
    ) -> Result<Option<Tracked<Company>>, RepositoryError>;

    /// Store a new company together with its first employees.
    fn create_company(
        &self,
        company: &Company,
        employees: &[Employee],
    ) -> Result<(), RepositoryError>;

    /// Persist changes to a company obtained through a tracked read and add
    /// `new_employees` to it.
    fn update_company(
        &self,
        company: &mut Tracked<Company>,
        new_employees: &[Employee],
    ) -> Result<(), RepositoryError>;

    /// Remove a company together with its employees. Returns false if it
    /// did not exist.
    fn delete_company(&self, id: Uuid) -> Result<bool, RepositoryError>;
}

#[derive(Clone)]
pub struct InMemoryCompanyRepository {
    store: InMemoryStore,
}

impl InMemoryCompanyRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

impl CompanyRepository for InMemoryCompanyRepository {
    fn get_all_companies(
        &self,
        track_changes: bool,
    ) -> Result<Vec<Tracked<Company>>, RepositoryError> {
        let mut companies = self.store.find::<Company>(&|_| true, track_changes)?;
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(companies)
    }

    fn get_company(
        &self,
        id: Uuid,
        track_changes: bool,
    ) -> Result<Option<Tracked<Company>>, RepositoryError> {
        self.store.get(id, track_changes)
    }

    fn create_company(
        &self,
        company: &Company,
        employees: &[Employee],
    ) -> Result<(), RepositoryError> {
        self.store.insert_all(company, employees)
    }

    fn update_company(
        &self,
        company: &mut Tracked<Company>,
        new_employees: &[Employee],
    ) -> Result<(), RepositoryError> {
        self.store
            .update_with_children(company, new_employees)
            .map(|_| ())
    }

    fn delete_company(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let removed = self
            .store
            .delete_with_children::<Company, Employee>(id, &|employee: &Employee| {
                employee.company_id == id
            })?;
        Ok(removed.is_some())
    }
}
