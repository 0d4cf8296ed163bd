//! The in-memory employee directory.
//!
//! This module provides the [`Directory`] type, which owns every employee,
//! performance review and audit event.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::error::{DirectoryError, DirectoryResult};
use crate::models::{AuditEvent, AuditPayload, Employee, PerformanceReview};
use crate::util::is_valid_salary;

use super::sample::{sample_employees, sample_reviews};

/// Actor used for audit events when none is configured.
pub const DEFAULT_SYSTEM_USER: &str = "system";

/// In-memory store of employees, their reviews and the audit log.
///
/// Employees are returned in insertion order. Replacing an employee keeps
/// its original position. All reads hand out shared borrows, so nothing
/// outside the directory can change its contents; writes go through
/// [`Directory::save`] and [`Directory::delete`].
///
/// # Example
///
/// ```
/// use employee_directory::directory::Directory;
///
/// let directory = Directory::with_sample_data();
/// assert_eq!(directory.len(), 4);
/// assert_eq!(directory.find_by_id("E001")?.full_name(), "Alice Johnson");
/// assert!(directory.find_by_id("E999").is_err());
/// # Ok::<(), employee_directory::error::DirectoryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Directory {
    employees: HashMap<String, Employee>,
    order: Vec<String>,
    reviews: HashMap<String, Vec<PerformanceReview>>,
    audit_log: Vec<AuditEvent>,
    system_user: String,
}

impl Default for Directory {
    fn default() -> Self {
        Self::new(DEFAULT_SYSTEM_USER)
    }
}

impl Directory {
    /// Creates an empty directory that attributes changes to `system_user`.
    pub fn new(system_user: impl Into<String>) -> Self {
        Self {
            employees: HashMap::new(),
            order: Vec::new(),
            reviews: HashMap::new(),
            audit_log: Vec::new(),
            system_user: system_user.into(),
        }
    }

    /// Creates a directory seeded with the sample employees and reviews.
    ///
    /// Seeding does not write audit events.
    pub fn with_sample_data() -> Self {
        Self::with_sample_data_for(DEFAULT_SYSTEM_USER)
    }

    /// Like [`Directory::with_sample_data`] with a custom audit user.
    pub fn with_sample_data_for(system_user: impl Into<String>) -> Self {
        let mut directory = Self::new(system_user);
        for employee in sample_employees() {
            directory.insert(employee);
        }
        for review in sample_reviews() {
            directory.add_review(review);
        }
        directory
    }

    /// Returns the number of stored employees.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if no employees are stored.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Looks up an employee by id.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` when no employee has this id.
    pub fn find_by_id(&self, id: &str) -> DirectoryResult<&Employee> {
        self.employees
            .get(id)
            .ok_or_else(|| DirectoryError::EmployeeNotFound { id: id.to_string() })
    }

    /// Returns every employee in insertion order.
    ///
    /// The returned vector is freshly built; changing it does not affect the
    /// directory.
    pub fn find_all(&self) -> Vec<&Employee> {
        self.order
            .iter()
            .filter_map(|id| self.employees.get(id))
            .collect()
    }

    /// Returns employees whose department equals `department` exactly.
    pub fn find_by_department(&self, department: &str) -> Vec<&Employee> {
        self.find_all()
            .into_iter()
            .filter(|e| e.department == department)
            .collect()
    }

    /// Returns employees with `min <= salary <= max`.
    pub fn find_by_salary_range(&self, min: Decimal, max: Decimal) -> Vec<&Employee> {
        self.find_all()
            .into_iter()
            .filter(|e| e.salary >= min && e.salary <= max)
            .collect()
    }

    /// Returns the reviews recorded for an employee, oldest first.
    ///
    /// Unknown ids yield an empty slice.
    pub fn get_reviews(&self, id: &str) -> &[PerformanceReview] {
        self.reviews.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Inserts or replaces an employee and records the change.
    ///
    /// An `EmployeeCreated` event is appended for every save. When an
    /// existing employee is replaced with a different salary, a
    /// `SalaryChanged` event follows it.
    ///
    /// # Errors
    ///
    /// Returns `InvalidEmployee` unless `0 < salary < 1,000,000`.
    pub fn save(&mut self, employee: Employee) -> DirectoryResult<()> {
        if !is_valid_salary(employee.salary) {
            return Err(DirectoryError::InvalidEmployee {
                field: "salary".to_string(),
                message: format!(
                    "must be greater than zero and below 1000000, got {}",
                    employee.salary
                ),
            });
        }

        let employee_id = employee.id.clone();
        let new_salary = employee.salary;
        let previous = self.insert(employee);

        self.audit_log.push(AuditEvent::new(
            self.system_user.clone(),
            AuditPayload::EmployeeCreated {
                employee_id: employee_id.clone(),
            },
        ));

        match previous {
            Some(old) if old.salary != new_salary => {
                info!(
                    employee_id = %employee_id,
                    old_salary = %old.salary,
                    new_salary = %new_salary,
                    "Employee replaced with new salary"
                );
                self.audit_log.push(AuditEvent::new(
                    self.system_user.clone(),
                    AuditPayload::SalaryChanged {
                        employee_id,
                        old_salary: old.salary,
                        new_salary,
                    },
                ));
            }
            Some(_) => info!(employee_id = %employee_id, "Employee replaced"),
            None => info!(employee_id = %employee_id, "Employee created"),
        }

        Ok(())
    }

    /// Removes an employee and their reviews. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) {
        let removed = self.employees.remove(id).is_some();
        if removed {
            self.order.retain(|existing| existing != id);
        }
        self.reviews.remove(id);
        debug!(employee_id = %id, removed, "Delete requested");
    }

    /// Returns the most recently hired employee.
    ///
    /// When several share the latest hire date, the first one inserted wins.
    pub fn get_newest_employee(&self) -> Option<&Employee> {
        self.find_all()
            .into_iter()
            .reduce(|newest, e| if e.hire_date > newest.hire_date { e } else { newest })
    }

    /// Returns the longest-serving employee.
    ///
    /// When several share the earliest hire date, the first one inserted wins.
    pub fn get_oldest_employee(&self) -> Option<&Employee> {
        self.find_all().into_iter().min_by_key(|e| e.hire_date)
    }

    /// Returns the audit log, oldest event first.
    pub fn get_audit_log(&self) -> &[AuditEvent] {
        &self.audit_log
    }

    /// Stores an employee without auditing, returning the replaced record.
    fn insert(&mut self, employee: Employee) -> Option<Employee> {
        let id = employee.id.clone();
        let previous = self.employees.insert(id.clone(), employee);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    /// Appends a review to the employee's review history.
    pub(crate) fn add_review(&mut self, review: PerformanceReview) {
        self.reviews
            .entry(review.employee_id.clone())
            .or_default()
            .push(review);
    }
}
