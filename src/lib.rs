//! Company/employee CRUD service in layered (Onion) architecture.
//!
//! Rings, inside out:
//!
//! - [`domain`]: entities
//! - [`repository`]: persistence behind a `RepositoryManager` aggregate
//! - [`service`]: use cases over the repositories
//! - [`mediator`] + [`application`]: CQRS intents dispatched to handlers
//! - `presentation`: axum controllers (requires the `http` feature)
//!
//! `app` wires it all together with configuration, logging and middleware.

pub mod application;
pub mod domain;
pub mod dto;
pub mod mediator;
pub mod repository;
pub mod service;

#[cfg(feature = "http")]
pub mod app;
#[cfg(feature = "http")]
pub mod config;
#[cfg(feature = "http")]
pub mod presentation;
