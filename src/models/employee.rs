//! Employee model and related types.
//!
//! This module defines the Employee struct together with the address,
//! payment and employment-type values it carries.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the type of employment arrangement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Full-time employment.
    FullTime,
    /// Part-time employment.
    PartTime,
    /// Fixed-term contractor.
    Contract,
    /// Internship placement.
    Intern,
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EmploymentType::FullTime => "FULL_TIME",
            EmploymentType::PartTime => "PART_TIME",
            EmploymentType::Contract => "CONTRACT",
            EmploymentType::Intern => "INTERN",
        };
        f.write_str(label)
    }
}

/// How an employee receives their pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Pay is deposited straight into a bank account.
    DirectDeposit,
    /// Pay is issued as a paper check.
    Check,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::DirectDeposit => f.write_str("DIRECT_DEPOSIT"),
            PaymentMethod::Check => f.write_str("CHECK"),
        }
    }
}

/// A postal address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    /// Street and number.
    pub street: String,
    /// City name. May be empty when unknown.
    #[serde(default)]
    pub city: String,
    /// State or region code (e.g., "CA").
    pub region: String,
    /// Postal or ZIP code.
    pub postal_code: String,
    /// Country name or code.
    pub country: String,
}

impl Address {
    /// Creates a new address.
    pub fn new(
        street: impl Into<String>,
        city: impl Into<String>,
        region: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            street: street.into(),
            city: city.into(),
            region: region.into(),
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }
}

/// Banking details used when paying an employee.
///
/// `Debug` is implemented by hand so account numbers never end up in logs.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentInfo {
    /// The bank account number.
    pub account_number: String,
    /// The bank routing number.
    pub routing_number: String,
    /// The name of the bank.
    pub bank_name: String,
    /// How pay is delivered.
    pub payment_method: PaymentMethod,
}

impl PaymentInfo {
    /// Creates new payment details.
    pub fn new(
        account_number: impl Into<String>,
        routing_number: impl Into<String>,
        bank_name: impl Into<String>,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            account_number: account_number.into(),
            routing_number: routing_number.into(),
            bank_name: bank_name.into(),
            payment_method,
        }
    }
}

impl fmt::Debug for PaymentInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentInfo")
            .field(
                "account_number",
                &crate::util::mask_sensitive_data(Some(&self.account_number)),
            )
            .field("bank_name", &self.bank_name)
            .field("payment_method", &self.payment_method)
            .finish()
    }
}

/// Represents one employee held in the directory.
///
/// Employees are immutable values: changing a record means saving a new
/// value under the same `id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee (e.g., "E001").
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Work e-mail address.
    pub email: String,
    /// Department name (e.g., "Engineering").
    pub department: String,
    /// Job title (e.g., "Senior Engineer").
    pub position: String,
    /// Annual salary. Always above zero and below 1,000,000 inside a directory.
    pub salary: Decimal,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// Home address, if one is on file.
    #[serde(default)]
    pub address: Option<Address>,
    /// Banking details for payroll.
    pub payment_info: PaymentInfo,
    /// The type of employment arrangement.
    pub employment_type: EmploymentType,
    /// Skill names in the order they were recorded. Duplicates are allowed.
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Employee {
    /// Returns the employee's first and last name separated by a space.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_directory::directory::sample_employees;
    ///
    /// let alice = &sample_employees()[0];
    /// assert_eq!(alice.full_name(), "Alice Johnson");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns the city from the address, if any.
    pub fn city(&self) -> Option<&str> {
        self.address.as_ref().map(|a| a.city.as_str())
    }
}
