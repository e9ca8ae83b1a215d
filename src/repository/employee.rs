use uuid::Uuid;

use super::{InMemoryStore, Model, RepositoryError, Tracked};
use crate::domain::{Company, Employee};

impl Model for Employee {
    const COLLECTION: &'static str = "employees";

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Persistence operations for employees, always scoped to a company.
pub trait EmployeeRepository: Send + Sync {
    /// Employees of `company_id`, ordered by name.
    fn get_employees(
        &self,
        company_id: Uuid,
        track_changes: bool,
    ) -> Result<Vec<Tracked<Employee>>, RepositoryError>;

    fn get_employee(
        &self,
        company_id: Uuid,
        id: Uuid,
        track_changes: bool,
    ) -> Result<Option<Tracked<Employee>>, RepositoryError>;

    /// Attach `employee` to `company_id` and store it. Fails with
    /// [`RepositoryError::Missing`] if the company is gone at write time.
    fn create_employee_for_company(
        &self,
        company_id: Uuid,
        employee: &mut Employee,
    ) -> Result<(), RepositoryError>;

    /// Persist changes to an employee obtained through a tracked read.
    fn update_employee(&self, employee: &mut Tracked<Employee>) -> Result<(), RepositoryError>;

    fn delete_employee(&self, employee: &Employee) -> Result<(), RepositoryError>;
}

#[derive(Clone)]
pub struct InMemoryEmployeeRepository {
    store: InMemoryStore,
}

impl InMemoryEmployeeRepository {
    pub fn new(store: InMemoryStore) -> Self {
        Self { store }
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn get_employees(
        &self,
        company_id: Uuid,
        track_changes: bool,
    ) -> Result<Vec<Tracked<Employee>>, RepositoryError> {
        let mut employees = self
            .store
            .find(&|e: &Employee| e.company_id == company_id, track_changes)?;
        employees.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(employees)
    }

    fn get_employee(
        &self,
        company_id: Uuid,
        id: Uuid,
        track_changes: bool,
    ) -> Result<Option<Tracked<Employee>>, RepositoryError> {
        self.store.find_one(
            &|e: &Employee| e.id == id && e.company_id == company_id,
            track_changes,
        )
    }

    fn create_employee_for_company(
        &self,
        company_id: Uuid,
        employee: &mut Employee,
    ) -> Result<(), RepositoryError> {
        employee.company_id = company_id;
        self.store.insert_child::<Company, Employee>(company_id, &*employee)
    }

    fn update_employee(&self, employee: &mut Tracked<Employee>) -> Result<(), RepositoryError> {
        self.store.update(employee).map(|_| ())
    }

    fn delete_employee(&self, employee: &Employee) -> Result<(), RepositoryError> {
        self.store.delete::<Employee>(employee.id)?;
        Ok(())
    }
}
