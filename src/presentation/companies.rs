//! Companies controller.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use tracing::warn;

use super::body::required_json;
use super::routes;
use crate::application::commands::{CreateCompanyCommand, UpdateCompanyCommand};
use crate::application::notifications::CompanyDeletedNotification;
use crate::application::queries::{GetCompaniesQuery, GetCompanyQuery};
use crate::dto::{CompanyDto, CompanyForCreationDto, CompanyForUpdateDto};
use crate::mediator::{HandlerError, Mediator};

/// `GET /api/companies`
pub async fn get_companies(
    State(mediator): State<Arc<Mediator>>,
) -> Result<Json<Vec<CompanyDto>>, HandlerError> {
    let companies = mediator
        .send(GetCompaniesQuery {
            track_changes: false,
        })
        .await?;
    Ok(Json(companies))
}

/// `GET /api/companies/{id}` (route `CompanyById`)
pub async fn get_company(
    State(mediator): State<Arc<Mediator>>,
    Path(id): Path<String>,
) -> Result<Json<CompanyDto>, HandlerError> {
    let id = routes::guid(&id)?;
    let company = mediator
        .send(GetCompanyQuery {
            id,
            track_changes: false,
        })
        .await?;
    Ok(Json(company))
}

/// `POST /api/companies`: 201 with `Location` pointing at `CompanyById`.
pub async fn create_company(
    State(mediator): State<Arc<Mediator>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<impl IntoResponse, HandlerError> {
    let company: CompanyForCreationDto =
        required_json(&headers, &body, "CompanyForCreationDto")?;

    let company = mediator.send(CreateCompanyCommand { company }).await?;

    let location = routes::company_by_id(company.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(company)))
}

/// `PUT /api/companies/{id}`: 204.
pub async fn update_company(
    State(mediator): State<Arc<Mediator>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<StatusCode, HandlerError> {
    let id = routes::guid(&id)?;
    let company: CompanyForUpdateDto =
        required_json(&headers, &body, "CompanyForUpdateDto")?;

    mediator
        .send(UpdateCompanyCommand {
            id,
            company,
            track_changes: true,
        })
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `DELETE /api/companies/{id}`: always 204.
///
/// Deletion is published as a notification, so the response does not wait
/// on any confirmation that a listener removed something. Listener failures
/// (including an unknown id) are logged and otherwise dropped.
pub async fn delete_company(
    State(mediator): State<Arc<Mediator>>,
    Path(id): Path<String>,
) -> Result<StatusCode, HandlerError> {
    let id = routes::guid(&id)?;

    let notification = CompanyDeletedNotification {
        id,
        track_changes: false,
    };
    if let Err(error) = mediator.publish(notification).await {
        warn!(%id, %error, "company deletion listeners reported failures");
    }
    Ok(StatusCode::NO_CONTENT)
}
