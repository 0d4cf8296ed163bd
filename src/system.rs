//! One-stop facade that owns a seeded directory and its configuration.

use rand::Rng;
use rust_decimal::Decimal;
use tracing::info;

use crate::config::DirectoryConfig;
use crate::directory::{Directory, marketing_director};
use crate::error::DirectoryResult;
use crate::models::Employee;
use crate::services::{
    NotificationService, PayrollService, QueryService, ReportingService, SimulatedMailer,
};

/// Owns the directory and configuration and hands out services over them.
///
/// The directory starts with the four sample employees plus the marketing
/// director, whose save is the first audit event.
///
/// # Example
///
/// ```
/// use employee_directory::system::EmployeeSystem;
///
/// let system = EmployeeSystem::new()?;
/// assert_eq!(system.get_all_employees().len(), 5);
/// assert_eq!(system.get_department_budget("Sales"), "$300,000");
/// # Ok::<(), employee_directory::error::DirectoryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeSystem {
    directory: Directory,
    config: DirectoryConfig,
}

impl EmployeeSystem {
    /// Creates a system with the built-in configuration.
    ///
    /// # Errors
    ///
    /// Propagates a rejected save of the marketing director.
    pub fn new() -> DirectoryResult<Self> {
        Self::from_config(DirectoryConfig::default())
    }

    /// Creates a system with a loaded configuration.
    ///
    /// # Errors
    ///
    /// Propagates a rejected save of the marketing director.
    pub fn from_config(config: DirectoryConfig) -> DirectoryResult<Self> {
        let mut directory = Directory::with_sample_data_for(config.system_user());
        directory.save(marketing_director())?;
        info!(employees = directory.len(), "Employee system initialized");
        Ok(Self { directory, config })
    }

    /// Returns the directory.
    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Returns the directory for writes.
    pub fn directory_mut(&mut self) -> &mut Directory {
        &mut self.directory
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Query service over the directory.
    pub fn query(&self) -> QueryService<'_> {
        QueryService::new(&self.directory)
    }

    /// Payroll service using the configured policy.
    pub fn payroll(&self) -> PayrollService<'_> {
        PayrollService::with_policy(&self.directory, *self.config.payroll())
    }

    /// Reporting service using the configured policy and budgets.
    pub fn reporting(&self) -> ReportingService<'_> {
        ReportingService::new(&self.directory, self.payroll(), &self.config)
    }

    /// Notification service backed by a simulated mailer.
    pub fn notifications(&self) -> NotificationService<SimulatedMailer> {
        let settings = self.config.organization().notifications.clone();
        NotificationService::new(SimulatedMailer::from_settings(&settings), settings)
    }

    /// All employees in insertion order.
    pub fn get_all_employees(&self) -> Vec<&Employee> {
        self.directory.find_all()
    }

    /// Budget label for a department, or `Unknown`.
    pub fn get_department_budget(&self, department: &str) -> &str {
        self.config.department_budget(department)
    }

    /// Department of an employee, or `Employee not found`.
    pub fn get_employee_department(&self, employee_id: &str) -> String {
        self.query().get_employee_department(employee_id)
    }

    /// Company overview report.
    pub fn generate_report(&self) -> String {
        self.reporting().generate_company_report()
    }

    /// Bonus approval letter.
    pub fn generate_email_template(&self, name: &str, amount: Decimal) -> String {
        PayrollService::generate_bonus_letter(name, amount)
    }

    /// Full names in insertion order.
    pub fn get_employee_names(&self) -> Vec<String> {
        self.query().get_employee_names()
    }

    /// Employees earning at least `threshold`, highest first, at most `limit`.
    pub fn get_high_earners_up_to_limit(
        &self,
        threshold: Decimal,
        limit: usize,
    ) -> Vec<&Employee> {
        self.query().get_high_earners_up_to_limit(threshold, limit)
    }

    /// A uniformly chosen employee.
    pub fn get_random_employee<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Employee> {
        self.query().get_random_employee(rng)
    }
}
