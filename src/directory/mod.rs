//! The employee directory and its built-in sample data.
//!
//! The [`Directory`] is the single owner of employee records, performance
//! reviews and the audit log. Services only ever borrow it.

mod repository;
mod sample;

pub use repository::{DEFAULT_SYSTEM_USER, Directory};
pub use sample::{marketing_director, sample_employees, sample_reviews};
