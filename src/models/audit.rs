//! Audit log entries recorded by the directory.
//!
//! Every entry shares a common envelope (id, timestamp, actor) and carries a
//! payload specific to the kind of change that happened.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event-specific data of an [`AuditEvent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AuditPayload {
    /// An employee record was stored.
    EmployeeCreated {
        /// The stored employee's identifier.
        employee_id: String,
    },
    /// A stored employee was replaced with a different salary.
    SalaryChanged {
        /// The affected employee's identifier.
        employee_id: String,
        /// Salary before the change.
        old_salary: Decimal,
        /// Salary after the change.
        new_salary: Decimal,
    },
}

/// An immutable, append-only audit log entry.
///
/// # Example
///
/// ```
/// use employee_directory::models::{AuditEvent, AuditPayload};
///
/// let event = AuditEvent::new(
///     "system",
///     AuditPayload::EmployeeCreated { employee_id: "E005".to_string() },
/// );
/// assert_eq!(event.event_type(), "EMPLOYEE_CREATED");
/// assert_eq!(event.employee_id(), "E005");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// Unique identifier of this event.
    pub event_id: Uuid,
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// The user the change is attributed to.
    pub actor: String,
    /// What happened.
    pub payload: AuditPayload,
}

impl AuditEvent {
    /// Creates an event with a fresh id and the current time.
    pub fn new(actor: impl Into<String>, payload: AuditPayload) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            actor: actor.into(),
            payload,
        }
    }

    /// Returns the event type tag (e.g., "EMPLOYEE_CREATED").
    pub fn event_type(&self) -> &'static str {
        match self.payload {
            AuditPayload::EmployeeCreated { .. } => "EMPLOYEE_CREATED",
            AuditPayload::SalaryChanged { .. } => "SALARY_CHANGED",
        }
    }

    /// Returns the identifier of the employee the event is about.
    pub fn employee_id(&self) -> &str {
        match &self.payload {
            AuditPayload::EmployeeCreated { employee_id }
            | AuditPayload::SalaryChanged { employee_id, .. } => employee_id,
        }
    }
}
