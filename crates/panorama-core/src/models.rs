//! Domain models for Panorama.
//!
//! These are the core types shared across all crates. Master entities
//! (customers, employees, projects) carry a tri-state [`Identity`];
//! the storage layer is the sole owner of identity assignment.

pub mod activity;
pub mod customer;
pub mod employee;
pub mod identity;
pub mod project;
pub mod session;

pub use activity::{ActivityAction, NewActivity};
pub use customer::Customer;
pub use employee::{Employee, EmployeeRole, EmployeeStatus};
pub use identity::Identity;
pub use project::{Project, ProjectStatus, TeamMember};
pub use session::Session;
