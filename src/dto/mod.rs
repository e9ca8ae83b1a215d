//! Data transfer objects: the JSON shapes exchanged over HTTP.
//!
//! Entities never cross the presentation boundary directly; services map
//! them to and from these types.

mod company;
mod employee;

pub use company::{CompanyDto, CompanyForCreationDto, CompanyForUpdateDto};
pub use employee::{EmployeeDto, EmployeeForCreationDto, EmployeeForUpdateDto};
