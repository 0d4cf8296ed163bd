//! In-memory employee directory with payroll and reporting services.
//!
//! The [`directory::Directory`] owns employee records, performance reviews
//! and an append-only audit log. Services in [`services`] borrow it to answer
//! queries, compute monthly pay and bonuses, and render fixed-width text
//! reports. [`system::EmployeeSystem`] wires everything together from a
//! [`config::DirectoryConfig`].

#![warn(missing_docs)]

pub mod config;
pub mod directory;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod system;
pub mod util;
