//! Employees controller, nested under a company.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

use super::body::required_json;
use super::routes;
use crate::application::commands::{
    CreateEmployeeCommand, DeleteEmployeeCommand, UpdateEmployeeCommand,
};
use crate::application::queries::{GetEmployeeQuery, GetEmployeesQuery};
use crate::dto::{EmployeeDto, EmployeeForCreationDto, EmployeeForUpdateDto};
use crate::mediator::{HandlerError, Mediator};

pub async fn get_employees(
    State(mediator): State<Arc<Mediator>>,
    Path(company_id): Path<String>,
) -> Result<Json<Vec<EmployeeDto>>, HandlerError> {
    let company_id = routes::guid(&company_id)?;
    let employees = mediator
        .send(GetEmployeesQuery {
            company_id,
            track_changes: false,
        })
        .await?;
    Ok(Json(employees))
}

/// Route `GetEmployeeForCompany`.
pub async fn get_employee(
    State(mediator): State<Arc<Mediator>>,
    Path((company_id, id)): Path<(String, String)>,
) -> Result<Json<EmployeeDto>, HandlerError> {
    let company_id = routes::guid(&company_id)?;
    let id = routes::guid(&id)?;
    let employee = mediator
        .send(GetEmployeeQuery {
            company_id,
            id,
            track_changes: false,
        })
        .await?;
    Ok(Json(employee))
}

pub async fn create_employee(
    State(mediator): State<Arc<Mediator>>,
    Path(company_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, HandlerError> {
    let company_id = routes::guid(&company_id)?;
    let employee: EmployeeForCreationDto =
        required_json(&headers, &body, "EmployeeForCreationDto")?;

    let employee = mediator
        .send(CreateEmployeeCommand {
            company_id,
            employee,
        })
        .await?;

    let location = routes::employee_for_company(company_id, employee.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(employee)))
}

pub async fn update_employee(
    State(mediator): State<Arc<Mediator>>,
    Path((company_id, id)): Path<(String, String)>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, HandlerError> {
    let company_id = routes::guid(&company_id)?;
    let id = routes::guid(&id)?;
    let employee: EmployeeForUpdateDto =
        required_json(&headers, &body, "EmployeeForUpdateDto")?;

    mediator
        .send(UpdateEmployeeCommand {
            company_id,
            id,
            employee,
            company_track_changes: false,
            employee_track_changes: true,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_employee(
    State(mediator): State<Arc<Mediator>>,
    Path((company_id, id)): Path<(String, String)>,
) -> Result<StatusCode, HandlerError> {
    let company_id = routes::guid(&company_id)?;
    let id = routes::guid(&id)?;

    mediator
        .send(DeleteEmployeeCommand {
            company_id,
            id,
            track_changes: false,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
