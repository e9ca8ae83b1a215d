//! Intent and handler traits.

use async_trait::async_trait;

use super::error::HandlerError;

/// A query or command: routed to exactly one handler, which produces a
/// `Response`.
pub trait Request: Send + 'static {
    type Response: Send + 'static;
}

/// A fact worth announcing: delivered to zero or more listeners, which
/// produce nothing.
pub trait Notification: Send + Sync + 'static {}

/// Handles one request type.
#[async_trait]
pub trait RequestHandler: Send + Sync {
    type Request: Request;

    async fn handle(
        &self,
        request: Self::Request,
    ) -> Result<<Self::Request as Request>::Response, HandlerError>;
}

/// Listens for one notification type.
#[async_trait]
pub trait NotificationHandler: Send + Sync {
    type Notification: Notification;

    /// Name used when reporting a failure of this listener.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    async fn handle(&self, notification: &Self::Notification) -> Result<(), HandlerError>;
}
