//! Request handlers and notification listeners, one type per intent.

pub mod company;
pub mod employee;
