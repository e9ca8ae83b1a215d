//! CQRS integration tests: the fully wired mediator, without HTTP.

mod notifications;
