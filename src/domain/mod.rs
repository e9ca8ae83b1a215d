//! Domain entities.
//!
//! The innermost ring: plain records with no dependency on persistence,
//! services or transport. Every other layer depends on these, never the
//! other way around.

mod company;
mod employee;

pub use company::Company;
pub use employee::Employee;
