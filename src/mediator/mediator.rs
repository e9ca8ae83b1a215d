//! Mediator registry and dispatch.

use std::any::{type_name, Any, TypeId};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use super::error::{HandlerError, ListenerFailure, MediatorError};
use super::handler::{Notification, NotificationHandler, Request, RequestHandler};

type DynRequestHandler<R> = Arc<dyn RequestHandler<Request = R>>;
type Listeners<N> = Vec<Arc<dyn NotificationHandler<Notification = N>>>;

/// A registered request handler, type-erased.
///
/// `handler` is always a `DynRequestHandler<R>` for the `R` whose `TypeId`
/// keys the entry.
struct RegisteredHandler {
    request: &'static str,
    handler: Box<dyn Any + Send + Sync>,
}

/// Collects handlers and listeners, then freezes them into a [`Mediator`].
///
/// Uses builder pattern. `handler` returns a `Result` because a second
/// handler for the same request type is rejected.
#[derive(Default)]
pub struct MediatorBuilder {
    handlers: HashMap<TypeId, RegisteredHandler>,
    /// Each value is a `Listeners<N>` for the `N` whose `TypeId` keys it.
    listeners: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl MediatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the single handler for `H::Request`.
    pub fn handler<H>(mut self, handler: H) -> Result<Self, MediatorError>
    where
        H: RequestHandler + 'static,
    {
        let request = type_name::<H::Request>();
        match self.handlers.entry(TypeId::of::<H::Request>()) {
            Entry::Occupied(_) => return Err(MediatorError::DuplicateHandler { request }),
            Entry::Vacant(slot) => {
                let handler: DynRequestHandler<H::Request> = Arc::new(handler);
                slot.insert(RegisteredHandler {
                    request,
                    handler: Box::new(handler),
                });
            }
        }
        debug!(request, handler = type_name::<H>(), "registered request handler");
        Ok(self)
    }

    /// Append a listener for `L::Notification`. Listeners run in the order
    /// they were registered.
    pub fn listener<L>(mut self, listener: L) -> Self
    where
        L: NotificationHandler + 'static,
    {
        let listeners = self
            .listeners
            .entry(TypeId::of::<L::Notification>())
            .or_insert_with(|| Box::new(Listeners::<L::Notification>::new()));
        if let Some(listeners) = listeners.downcast_mut::<Listeners<L::Notification>>() {
            listeners.push(Arc::new(listener));
        }
        debug!(
            notification = type_name::<L::Notification>(),
            listener = type_name::<L>(),
            "registered notification listener"
        );
        self
    }

    pub fn build(self) -> Mediator {
        Mediator {
            handlers: self.handlers,
            listeners: self.listeners,
        }
    }
}

/// Routes intents to their handlers. Immutable once built; share it
/// behind an `Arc`.
pub struct Mediator {
    handlers: HashMap<TypeId, RegisteredHandler>,
    listeners: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl Mediator {
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::new()
    }

    /// Dispatch a query or command to its handler and await the response.
    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response, HandlerError> {
        let handler = self.handler::<R>()?;
        trace!(request = type_name::<R>(), "dispatching request");
        handler.handle(request).await
    }

    /// Deliver a notification to every listener, one after another.
    ///
    /// No listeners is not an error. If any listener fails, the rest still
    /// run and all failures come back in [`HandlerError::ListenerFailures`].
    pub async fn publish<N: Notification>(&self, notification: N) -> Result<(), HandlerError> {
        let notification_type = type_name::<N>();
        let Some(listeners) = self
            .listeners
            .get(&TypeId::of::<N>())
            .and_then(|l| l.downcast_ref::<Listeners<N>>())
        else {
            trace!(notification = notification_type, "no listeners registered");
            return Ok(());
        };

        let mut failures = Vec::new();
        for listener in listeners {
            trace!(
                notification = notification_type,
                listener = listener.name(),
                "delivering notification"
            );
            if let Err(error) = listener.handle(&notification).await {
                warn!(
                    notification = notification_type,
                    listener = listener.name(),
                    %error,
                    "notification listener failed"
                );
                failures.push(ListenerFailure {
                    listener: listener.name(),
                    error,
                });
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(HandlerError::ListenerFailures(failures))
        }
    }

    /// Fail with `NoHandlerRegistered` unless `R` has a handler. Meant for
    /// startup checks.
    pub fn ensure_handler<R: Request>(&self) -> Result<(), HandlerError> {
        self.handler::<R>().map(|_| ())
    }

    /// Number of listeners registered for `N`.
    pub fn listener_count<N: Notification>(&self) -> usize {
        self.listeners
            .get(&TypeId::of::<N>())
            .and_then(|l| l.downcast_ref::<Listeners<N>>())
            .map_or(0, Vec::len)
    }

    /// Names of every request type with a handler, sorted.
    pub fn request_types(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.handlers.values().map(|h| h.request).collect();
        names.sort_unstable();
        names
    }

    fn handler<R: Request>(&self) -> Result<DynRequestHandler<R>, HandlerError> {
        self.handlers
            .get(&TypeId::of::<R>())
            .and_then(|entry| entry.handler.downcast_ref::<DynRequestHandler<R>>())
            .cloned()
            .ok_or(HandlerError::NoHandlerRegistered(type_name::<R>()))
    }
}
