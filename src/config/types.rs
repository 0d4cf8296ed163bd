//! Configuration types for the directory services.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every type has a
//! `Default` matching the shipped `config/default` directory.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// Deductions applied when turning a salary into a monthly paystub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PayrollPolicy {
    /// Fraction of gross pay withheld as tax.
    pub tax_rate: Decimal,
    /// Fraction of gross pay contributed to retirement.
    pub retirement_rate: Decimal,
    /// Fixed monthly health insurance deduction.
    pub health_insurance: Decimal,
}

impl Default for PayrollPolicy {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(25, 2),
            retirement_rate: Decimal::new(5, 2),
            health_insurance: Decimal::new(500, 0),
        }
    }
}

/// Content and pacing of payroll notification e-mails.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NotificationSettings {
    /// Subject line of the payroll e-mail.
    pub subject: String,
    /// Body of the payroll e-mail.
    pub body: String,
    /// Simulated delivery latency per message, in milliseconds.
    #[serde(default)]
    pub latency_ms: u64,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            subject: "Payroll Processed".to_string(),
            body: "Your payroll for this month has been processed.".to_string(),
            latency_ms: 100,
        }
    }
}

/// Organization-wide settings from organization.yaml.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrganizationConfig {
    /// The user audit events are attributed to.
    pub system_user: String,
    /// Display budget per department name.
    #[serde(default)]
    pub department_budgets: HashMap<String, String>,
    /// Notification settings.
    #[serde(default)]
    pub notifications: NotificationSettings,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        let department_budgets = [
            ("Engineering", "$500,000"),
            ("Sales", "$300,000"),
            ("HR", "$150,000"),
        ]
        .into_iter()
        .map(|(dept, budget)| (dept.to_string(), budget.to_string()))
        .collect();

        Self {
            system_user: "system".to_string(),
            department_budgets,
            notifications: NotificationSettings::default(),
        }
    }
}

/// The complete directory configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryConfig {
    payroll: PayrollPolicy,
    organization: OrganizationConfig,
}

impl DirectoryConfig {
    /// Creates a new DirectoryConfig from its component parts.
    pub fn new(payroll: PayrollPolicy, organization: OrganizationConfig) -> Self {
        Self {
            payroll,
            organization,
        }
    }

    /// Returns the payroll policy.
    pub fn payroll(&self) -> &PayrollPolicy {
        &self.payroll
    }

    /// Returns the organization settings.
    pub fn organization(&self) -> &OrganizationConfig {
        &self.organization
    }

    /// Returns the user audit events are attributed to.
    pub fn system_user(&self) -> &str {
        &self.organization.system_user
    }

    /// Returns the display budget for a department, or `Unknown`.
    ///
    /// # Example
    ///
    /// ```
    /// use employee_directory::config::DirectoryConfig;
    ///
    /// let config = DirectoryConfig::default();
    /// assert_eq!(config.department_budget("Engineering"), "$500,000");
    /// assert_eq!(config.department_budget("Marketing"), "Unknown");
    /// ```
    pub fn department_budget(&self, department: &str) -> &str {
        self.organization
            .department_budgets
            .get(department)
            .map(String::as_str)
            .unwrap_or("Unknown")
    }
}
