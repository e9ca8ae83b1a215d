//! HTTP presentation: controllers that turn requests into intents.
//!
//! Requires the `http` feature. Uses axum for routing. Controllers only
//! parse paths and check that bodies are present; everything else is the
//! mediator's business.
//!
//! ## Routes
//!
//! - `GET /health`: `{ "ok": true, "requests": [...] }`
//! - `GET|POST /api/companies`
//! - `GET|PUT|DELETE /api/companies/{id}`
//! - `GET|POST /api/companies/{companyId}/employees`
//! - `GET|PUT|DELETE /api/companies/{companyId}/employees/{id}`
//!
//! ```ignore
//! let mediator = Arc::new(application::mediator(repository)?);
//! let app = presentation::router(mediator)?;
//! ```

mod body;
mod companies;
mod employees;
mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::application::commands::{
    CreateCompanyCommand, CreateEmployeeCommand, DeleteEmployeeCommand, UpdateCompanyCommand,
    UpdateEmployeeCommand,
};
use crate::application::queries::{
    GetCompaniesQuery, GetCompanyQuery, GetEmployeeQuery, GetEmployeesQuery,
};
use crate::mediator::{HandlerError, Mediator};

pub use error::ErrorDetails;

/// Build the API router on top of `mediator`.
///
/// Fails with `NoHandlerRegistered` if any request type the controllers
/// send has no handler, so a half-wired mediator is caught at startup.
pub fn router(mediator: Arc<Mediator>) -> Result<Router, HandlerError> {
    mediator.ensure_handler::<GetCompaniesQuery>()?;
    mediator.ensure_handler::<GetCompanyQuery>()?;
    mediator.ensure_handler::<CreateCompanyCommand>()?;
    mediator.ensure_handler::<UpdateCompanyCommand>()?;
    mediator.ensure_handler::<GetEmployeesQuery>()?;
    mediator.ensure_handler::<GetEmployeeQuery>()?;
    mediator.ensure_handler::<CreateEmployeeCommand>()?;
    mediator.ensure_handler::<UpdateEmployeeCommand>()?;
    mediator.ensure_handler::<DeleteEmployeeCommand>()?;

    let router = Router::new()
        .route("/health", get(health_handler))
        .route(
            routes::COMPANIES,
            get(companies::get_companies).post(companies::create_company),
        )
        .route(
            routes::COMPANY_BY_ID,
            get(companies::get_company)
                .put(companies::update_company)
                .delete(companies::delete_company),
        )
        .route(
            routes::EMPLOYEES,
            get(employees::get_employees).post(employees::create_employee),
        )
        .route(
            routes::EMPLOYEE_FOR_COMPANY,
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        .with_state(mediator);

    Ok(router)
}

/// `GET /health`: returns `{ "ok": true, "requests": [...] }`.
async fn health_handler(State(mediator): State<Arc<Mediator>>) -> impl IntoResponse {
    Json(json!({ "ok": true, "requests": mediator.request_types() }))
}
