//! Derived queries over the directory.
//!
//! This module provides tenure classification, salary rankings, grouping and
//! the fallback-based lookups used by the console reports.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;

use chrono::{Local, NaiveDate};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::directory::Directory;
use crate::error::DirectoryError;
use crate::models::{DataInput, Employee};
use crate::util::years_of_service;

/// Coarse classification of an employee's years of service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TenureStatus {
    /// Less than one year.
    NewHire,
    /// One year.
    Junior,
    /// Two or three years.
    Intermediate,
    /// Four or five years.
    Senior,
    /// Six to ten years.
    Experienced,
    /// More than ten years.
    Veteran,
}

impl TenureStatus {
    /// Classifies a number of whole years of service.
    ///
    /// Bands are checked in order; any count not covered by a band
    /// (including negative counts) is `Experienced`.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_directory::services::TenureStatus;
    ///
    /// assert_eq!(TenureStatus::from_years(0), TenureStatus::NewHire);
    /// assert_eq!(TenureStatus::from_years(3), TenureStatus::Intermediate);
    /// assert_eq!(TenureStatus::from_years(10), TenureStatus::Experienced);
    /// assert_eq!(TenureStatus::from_years(11), TenureStatus::Veteran);
    /// ```
    pub fn from_years(years: i32) -> Self {
        match years {
            0 => TenureStatus::NewHire,
            1 => TenureStatus::Junior,
            2 | 3 => TenureStatus::Intermediate,
            4 | 5 => TenureStatus::Senior,
            y if y > 10 => TenureStatus::Veteran,
            _ => TenureStatus::Experienced,
        }
    }

    /// Returns the display label (e.g., "New Hire").
    pub fn label(&self) -> &'static str {
        match self {
            TenureStatus::NewHire => "New Hire",
            TenureStatus::Junior => "Junior",
            TenureStatus::Intermediate => "Intermediate",
            TenureStatus::Senior => "Senior",
            TenureStatus::Experienced => "Experienced",
            TenureStatus::Veteran => "Veteran",
        }
    }
}

impl fmt::Display for TenureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Read-only queries over a borrowed [`Directory`].
#[derive(Debug, Clone, Copy)]
pub struct QueryService<'a> {
    directory: &'a Directory,
}

impl<'a> QueryService<'a> {
    /// Creates a query service over `directory`.
    pub fn new(directory: &'a Directory) -> Self {
        Self { directory }
    }

    /// Describes a dynamically-shaped value.
    ///
    /// Shapes are checked in this order: employee, review, text, list, map,
    /// anything else. Text starting with `E` is looked up as an employee id.
    ///
    /// # Examples
    ///
    /// ```
    /// use employee_directory::directory::Directory;
    /// use employee_directory::models::DataInput;
    /// use employee_directory::services::QueryService;
    ///
    /// let directory = Directory::with_sample_data();
    /// let query = QueryService::new(&directory);
    ///
    /// assert_eq!(query.process_employee_data(&"E001".into()), "Found: Alice Johnson");
    /// assert_eq!(query.process_employee_data(&"E999".into()), "Not found: E999");
    /// assert_eq!(query.process_employee_data(&"hello".into()), "String data: hello");
    /// ```
    pub fn process_employee_data(&self, data: &DataInput) -> String {
        match data {
            DataInput::Employee(employee) => {
                format!("Employee: {} ({})", employee.full_name(), employee.department)
            }
            DataInput::Review(review) => {
                format!("Review for {}: Rating {}", review.employee_id, review.rating)
            }
            DataInput::Text(text) if text.starts_with('E') => {
                match self.directory.find_by_id(text) {
                    Ok(employee) => format!("Found: {}", employee.full_name()),
                    Err(_) => format!("Not found: {}", text),
                }
            }
            DataInput::Text(text) => format!("String data: {}", text),
            DataInput::List(items) => format!("List with {} items", items.len()),
            DataInput::Map(entries) => format!("Map with {} entries", entries.len()),
            DataInput::Other(type_name) => format!("Unknown data type: {}", type_name),
        }
    }

    /// Classifies an employee's tenure as of today.
    ///
    /// The current date is read on every call.
    pub fn get_employee_status(&self, employee: &Employee) -> TenureStatus {
        self.employee_status_as_of(employee, Local::now().date_naive())
    }

    /// Classifies an employee's tenure as of `as_of`.
    pub fn employee_status_as_of(&self, employee: &Employee, as_of: NaiveDate) -> TenureStatus {
        TenureStatus::from_years(years_of_service(employee.hire_date, as_of))
    }

    /// Returns the employee's city in upper case, or a fallback label.
    ///
    /// | Situation            | Result             |
    /// |----------------------|--------------------|
    /// | city on file         | city, upper-cased  |
    /// | empty city           | `UNKNOWN`          |
    /// | no address           | `NO ADDRESS`       |
    /// | unknown employee id  | `NOT FOUND`        |
    /// | other lookup failure | `ERROR: <message>` |
    pub fn get_employee_city(&self, employee_id: &str) -> String {
        match self.directory.find_by_id(employee_id) {
            Ok(employee) => match &employee.address {
                Some(address) if address.city.is_empty() => "UNKNOWN".to_string(),
                Some(address) => address.city.to_uppercase(),
                None => "NO ADDRESS".to_string(),
            },
            Err(DirectoryError::EmployeeNotFound { .. }) => "NOT FOUND".to_string(),
            Err(other) => format!("ERROR: {}", other),
        }
    }

    /// Returns up to `limit` employees ordered by salary, highest first.
    ///
    /// Employees with equal salaries keep their directory order.
    pub fn get_top_performers(&self, limit: usize) -> Vec<&'a Employee> {
        let mut ranked = self.directory.find_all();
        sort_by_salary_desc(&mut ranked);
        ranked.truncate(limit);
        ranked
    }

    /// Returns up to `limit` employees earning at least `threshold`, highest first.
    ///
    /// Employees are filtered first, then ranked, then truncated.
    pub fn get_high_earners_up_to_limit(
        &self,
        threshold: Decimal,
        limit: usize,
    ) -> Vec<&'a Employee> {
        let mut earners: Vec<&Employee> = self
            .directory
            .find_all()
            .into_iter()
            .filter(|e| e.salary >= threshold)
            .collect();
        sort_by_salary_desc(&mut earners);
        earners.truncate(limit);
        earners
    }

    /// Counts employees per department.
    pub fn get_department_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for employee in self.directory.find_all() {
            *counts.entry(employee.department.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Returns the mean salary of a department, or zero if it has no employees.
    pub fn get_average_salary_by_department(&self, department: &str) -> Decimal {
        average_salary(&self.directory.find_by_department(department))
    }

    /// Groups employees by each skill they list.
    ///
    /// An employee listing a skill twice appears once under it.
    pub fn group_employees_by_skills(&self) -> HashMap<String, HashSet<&'a Employee>> {
        let mut groups: HashMap<String, HashSet<&Employee>> = HashMap::new();
        for employee in self.directory.find_all() {
            for skill in &employee.skills {
                groups.entry(skill.clone()).or_default().insert(employee);
            }
        }
        groups
    }

    /// Returns the department of an employee, or `Employee not found`.
    pub fn get_employee_department(&self, employee_id: &str) -> String {
        self.directory
            .find_by_id(employee_id)
            .map(|e| e.department.clone())
            .unwrap_or_else(|_| "Employee not found".to_string())
    }

    /// Returns every employee's full name in directory order.
    pub fn get_employee_names(&self) -> Vec<String> {
        self.directory
            .find_all()
            .iter()
            .map(|e| e.full_name())
            .collect()
    }

    /// Picks an employee uniformly at random, or `None` if the directory is empty.
    pub fn get_random_employee<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&'a Employee> {
        let employees = self.directory.find_all();
        if employees.is_empty() {
            return None;
        }
        let index = rng.random_range(0..employees.len());
        employees.get(index).copied()
    }
}

/// Stable sort by salary, highest first.
fn sort_by_salary_desc(employees: &mut [&Employee]) {
    employees.sort_by(|a, b| b.salary.cmp(&a.salary));
}

/// Arithmetic mean of the salaries, zero for an empty slice.
pub(crate) fn average_salary(employees: &[&Employee]) -> Decimal {
    if employees.is_empty() {
        return Decimal::ZERO;
    }
    let total: Decimal = employees.iter().map(|e| e.salary).sum();
    total / Decimal::from(employees.len())
}
