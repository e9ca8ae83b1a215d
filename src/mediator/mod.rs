//! Mediator: in-process dispatch of queries, commands and notifications.
//!
//! Callers never talk to handlers directly. They build an intent value and
//! hand it to the [`Mediator`]:
//!
//! - [`Mediator::send`] routes a [`Request`] (query or command) to the one
//!   [`RequestHandler`] registered for its type and returns the handler's
//!   response.
//! - [`Mediator::publish`] fans a [`Notification`] out to every
//!   [`NotificationHandler`] registered for its type, in registration order.
//!   A failing listener never stops the ones after it; failures are logged
//!   and returned together.
//!
//! The registry is built once, explicitly, through [`MediatorBuilder`].
//! Registering two handlers for the same request type is an error.
//!
//! ## Quick Start
//!
//! ```ignore
//! use company_employees::mediator::{HandlerError, Mediator, Request, RequestHandler};
//!
//! #[derive(Debug, PartialEq, Eq)]
//! struct Ping;
//!
//! impl Request for Ping {
//!     type Response = &'static str;
//! }
//!
//! struct PingHandler;
//!
//! #[async_trait::async_trait]
//! impl RequestHandler for PingHandler {
//!     type Request = Ping;
//!
//!     async fn handle(&self, _request: Ping) -> Result<&'static str, HandlerError> {
//!         Ok("pong")
//!     }
//! }
//!
//! let mediator = Mediator::builder().handler(PingHandler)?.build();
//! assert_eq!(mediator.send(Ping).await?, "pong");
//! ```

mod error;
mod handler;
mod mediator;

pub use error::{HandlerError, ListenerFailure, MediatorError};
pub use handler::{Notification, NotificationHandler, Request, RequestHandler};
pub use mediator::{Mediator, MediatorBuilder};
