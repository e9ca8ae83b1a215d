//! Shared fixtures: server startup and a dispatch-counting handler wrapper.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use serde_json::{json, Value};

use company_employees::app;
use company_employees::application::handlers::company::{
    CompanyDeletedLogger, CreateCompanyHandler, DeleteCompanyListener, GetCompaniesHandler,
    GetCompanyHandler, UpdateCompanyHandler,
};
use company_employees::application::handlers::employee::{
    CreateEmployeeHandler, DeleteEmployeeHandler, GetEmployeeHandler, GetEmployeesHandler,
    UpdateEmployeeHandler,
};
use company_employees::config::{Environment, Settings};
use company_employees::mediator::{HandlerError, Mediator, Request, RequestHandler};
use company_employees::presentation;
use company_employees::repository::{InMemoryRepositoryManager, RepositoryManager};
use company_employees::service::ServiceManager;

pub fn settings(environment: Environment, https_port: Option<u16>) -> Settings {
    Settings {
        host: "127.0.0.1".to_string(),
        port: 0,
        environment,
        https_port,
        static_dir: PathBuf::from("tests/http/wwwroot-missing"),
        log_level: "warn".to_string(),
    }
}

/// Bind to port 0 and return the base URL.
pub async fn start_router(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Start the full application with the given settings.
pub async fn start_with(settings: Settings) -> String {
    let repository: Arc<dyn RepositoryManager> = Arc::new(InMemoryRepositoryManager::new());
    let app = app::build(&settings, repository).unwrap();
    start_router(app).await
}

/// Start the full application in development mode.
pub async fn start_server() -> String {
    start_with(settings(Environment::Development, None)).await
}

/// Wraps a handler and counts how often the mediator dispatches to it.
pub struct Counting<H> {
    inner: H,
    calls: Arc<AtomicUsize>,
}

impl<H> Counting<H> {
    pub fn new(inner: H) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                inner,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

#[async_trait]
impl<H> RequestHandler for Counting<H>
where
    H: RequestHandler,
{
    type Request = H::Request;

    async fn handle(
        &self,
        request: H::Request,
    ) -> Result<<H::Request as Request>::Response, HandlerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.handle(request).await
    }
}

/// Dispatch counters for the company write commands.
pub struct CommandCalls {
    pub create_company: Arc<AtomicUsize>,
    pub update_company: Arc<AtomicUsize>,
    pub create_employee: Arc<AtomicUsize>,
    pub update_employee: Arc<AtomicUsize>,
}

/// Start the API router (no middleware) with counting write handlers.
pub async fn start_counting_server() -> (String, CommandCalls) {
    let repository: Arc<dyn RepositoryManager> = Arc::new(InMemoryRepositoryManager::new());
    let services = ServiceManager::new(repository);
    let company = services.company();
    let employee = services.employee();

    let (create_company, create_company_calls) =
        Counting::new(CreateCompanyHandler::new(company.clone()));
    let (update_company, update_company_calls) =
        Counting::new(UpdateCompanyHandler::new(company.clone()));
    let (create_employee, create_employee_calls) =
        Counting::new(CreateEmployeeHandler::new(employee.clone()));
    let (update_employee, update_employee_calls) =
        Counting::new(UpdateEmployeeHandler::new(employee.clone()));

    let mediator = Mediator::builder()
        .handler(GetCompaniesHandler::new(company.clone()))
        .unwrap()
        .handler(GetCompanyHandler::new(company.clone()))
        .unwrap()
        .handler(create_company)
        .unwrap()
        .handler(update_company)
        .unwrap()
        .listener(DeleteCompanyListener::new(company.clone()))
        .listener(CompanyDeletedLogger)
        .handler(GetEmployeesHandler::new(employee.clone()))
        .unwrap()
        .handler(GetEmployeeHandler::new(employee.clone()))
        .unwrap()
        .handler(create_employee)
        .unwrap()
        .handler(update_employee)
        .unwrap()
        .handler(DeleteEmployeeHandler::new(employee.clone()))
        .unwrap()
        .build();

    let router = presentation::router(Arc::new(mediator)).unwrap();
    let base = start_router(router).await;

    let calls = CommandCalls {
        create_company: create_company_calls,
        update_company: update_company_calls,
        create_employee: create_employee_calls,
        update_employee: update_employee_calls,
    };
    (base, calls)
}

pub fn acme() -> Value {
    json!({ "name": "Acme", "address": "1 Road", "country": "US" })
}

/// POST a company and return its JSON representation.
pub async fn create_company(client: &reqwest::Client, base: &str, body: Value) -> Value {
    let resp = client
        .post(format!("{base}/api/companies"))
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 201);
    resp.json().await.unwrap()
}
