//! Core data models for the employee directory.
//!
//! This module contains the value types stored in and returned by the directory.

mod audit;
mod data_input;
mod employee;
mod review;

pub use audit::{AuditEvent, AuditPayload};
pub use data_input::DataInput;
pub use employee::{Address, Employee, EmploymentType, PaymentInfo, PaymentMethod};
pub use review::{PerformanceReview, ReviewType};
