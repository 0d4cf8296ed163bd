//! Configuration loading and management for the employee directory.
//!
//! Payroll deductions, department budgets, the audit user and notification
//! settings can be loaded from YAML files or taken from built-in defaults.
//!
//! # Example
//!
//! ```no_run
//! use employee_directory::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Audit user: {}", config.config().system_user());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DirectoryConfig, NotificationSettings, OrganizationConfig, PayrollPolicy};
