//! HTTP integration tests.
//!
//! Each test starts the full application on an ephemeral port and talks to
//! it with reqwest.

mod support;
mod companies;
mod employees;
