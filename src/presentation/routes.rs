//! Route templates and the URLs built from them.

use uuid::Uuid;

use crate::mediator::HandlerError;

pub const COMPANIES: &str = "/api/companies";

/// Route named `CompanyById`; target of the `Location` header on create.
pub const COMPANY_BY_ID: &str = "/api/companies/:company_id";

pub const EMPLOYEES: &str = "/api/companies/:company_id/employees";

/// Route named `GetEmployeeForCompany`.
pub const EMPLOYEE_FOR_COMPANY: &str = "/api/companies/:company_id/employees/:id";

pub fn company_by_id(id: Uuid) -> String {
    format!("{}/{}", COMPANIES, id)
}

pub fn employee_for_company(company_id: Uuid, id: Uuid) -> String {
    format!("{}/{}/employees/{}", COMPANIES, company_id, id)
}

/// Parse a `{id:guid}` path segment. A segment that is not a GUID does not
/// match the route, so it is reported as not found.
pub fn guid(segment: &str) -> Result<Uuid, HandlerError> {
    Uuid::parse_str(segment)
        .map_err(|_| HandlerError::NotFound(format!("no route matches id '{}'", segment)))
}
