use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use company_employees::application;
use company_employees::application::commands::CreateCompanyCommand;
use company_employees::application::notifications::CompanyDeletedNotification;
use company_employees::application::queries::GetCompanyQuery;
use company_employees::dto::CompanyForCreationDto;
use company_employees::mediator::{HandlerError, NotificationHandler};
use company_employees::repository::InMemoryRepositoryManager;

#[tokio::test]
async fn company_deleted_removes_company() {
    let mediator = application::mediator(Arc::new(InMemoryRepositoryManager::new())).unwrap();
    assert_eq!(mediator.listener_count::<CompanyDeletedNotification>(), 2);

    let created = mediator
        .send(CreateCompanyCommand {
            company: CompanyForCreationDto {
                name: "Acme".into(),
                address: "1 Road".into(),
                country: "US".into(),
                employees: None,
            },
        })
        .await
        .unwrap();

    mediator
        .publish(CompanyDeletedNotification {
            id: created.id,
            track_changes: false,
        })
        .await
        .unwrap();

    let err = mediator
        .send(GetCompanyQuery {
            id: created.id,
            track_changes: false,
        })
        .await
        .unwrap_err();
    assert_eq!(err.status_code(), 404);
}

#[tokio::test]
async fn unknown_company_fails_one_listener_only() {
    let mediator = application::mediator(Arc::new(InMemoryRepositoryManager::new())).unwrap();

    let err = mediator
        .publish(CompanyDeletedNotification {
            id: uuid::Uuid::new_v4(),
            track_changes: false,
        })
        .await
        .unwrap_err();

    match err {
        HandlerError::ListenerFailures(failures) => {
            assert_eq!(failures.len(), 1);
            assert_eq!(failures[0].listener, "delete_company");
            assert_eq!(failures[0].error.status_code(), 404);
        }
        other => panic!("expected listener failures, got {other:?}"),
    }
}

struct Audit {
    seen: Arc<AtomicUsize>,
}

#[async_trait]
impl NotificationHandler for Audit {
    type Notification = CompanyDeletedNotification;

    async fn handle(&self, _notification: &CompanyDeletedNotification) -> Result<(), HandlerError> {
        self.seen.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[tokio::test]
async fn standalone_listener_receives_notification() {
    let seen = Arc::new(AtomicUsize::new(0));
    let mediator = company_employees::mediator::Mediator::builder()
        .listener(Audit { seen: seen.clone() })
        .build();

    mediator
        .publish(CompanyDeletedNotification {
            id: uuid::Uuid::new_v4(),
            track_changes: false,
        })
        .await
        .unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 1);
}
