//! Text reports over the directory.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::config::DirectoryConfig;
use crate::directory::Directory;
use crate::services::payroll::PayrollService;
use crate::services::query::average_salary;
use crate::util::{format_currency, format_whole_dollars, generate_report};

const REPORT_RULE: &str = "===========================================\n";

/// Builds department, company and bonus reports.
#[derive(Debug, Clone, Copy)]
pub struct ReportingService<'a> {
    directory: &'a Directory,
    payroll: PayrollService<'a>,
    config: &'a DirectoryConfig,
}

impl<'a> ReportingService<'a> {
    /// Creates a reporting service.
    pub fn new(
        directory: &'a Directory,
        payroll: PayrollService<'a>,
        config: &'a DirectoryConfig,
    ) -> Self {
        Self {
            directory,
            payroll,
            config,
        }
    }

    /// Renders salary statistics for one department.
    ///
    /// An empty department yields `No employees in department: <name>`.
    ///
    /// # Example
    ///
    /// ```
    /// use employee_directory::config::DirectoryConfig;
    /// use employee_directory::directory::Directory;
    /// use employee_directory::services::{PayrollService, ReportingService};
    ///
    /// let directory = Directory::with_sample_data();
    /// let config = DirectoryConfig::default();
    /// let payroll = PayrollService::new(&directory);
    /// let reporting = ReportingService::new(&directory, payroll, &config);
    ///
    /// let report = reporting.generate_department_report("Engineering");
    /// assert!(report.contains("Total Employees:   2\n"));
    /// assert_eq!(
    ///     reporting.generate_department_report("Legal"),
    ///     "No employees in department: Legal"
    /// );
    /// ```
    pub fn generate_department_report(&self, department: &str) -> String {
        let employees = self.directory.find_by_department(department);

        let (Some(min), Some(max)) = (
            employees.iter().map(|e| e.salary).min(),
            employees.iter().map(|e| e.salary).max(),
        ) else {
            return format!("No employees in department: {}", department);
        };

        let total: Decimal = employees.iter().map(|e| e.salary).sum();
        let average = total / Decimal::from(employees.len());

        let mut report = String::new();
        report.push_str(REPORT_RULE);
        report.push_str(&format!("      DEPARTMENT REPORT: {}\n", department));
        report.push_str(REPORT_RULE);
        report.push_str(&format!("Total Employees:   {}\n", employees.len()));
        report.push_str(&format!("Total Salary Cost: {}\n", format_currency(total)));
        report.push_str(&format!("Average Salary:    {}\n", format_currency(average)));
        report.push_str(&format!("Minimum Salary:    {}\n", format_currency(min)));
        report.push_str(&format!("Maximum Salary:    {}\n", format_currency(max)));
        report.push_str(REPORT_RULE);
        report
    }

    /// One `<id>: <name> - <department> - $<salary>` line per employee.
    pub fn get_employee_summaries(&self) -> Vec<String> {
        self.directory
            .find_all()
            .into_iter()
            .map(|e| {
                format!(
                    "{}: {} - {} - {}",
                    e.id,
                    e.full_name(),
                    e.department,
                    format_whole_dollars(e.salary)
                )
            })
            .collect()
    }

    /// Renders the company overview: headcount, departments and mean salary.
    pub fn generate_company_report(&self) -> String {
        let employees = self.directory.find_all();
        let departments: BTreeSet<&str> =
            employees.iter().map(|e| e.department.as_str()).collect();

        let mut report = String::new();
        report.push_str("=== Employee Report ===\n");
        report.push_str(&format!("Total Employees: {}\n", employees.len()));
        report.push_str(&format!(
            "Departments: {}\n",
            departments.into_iter().collect::<Vec<_>>().join(", ")
        ));
        report.push_str(&format!(
            "Average Salary: {}\n",
            format_currency(average_salary(&employees))
        ));
        report.push_str("======================");
        report
    }

    /// Lists every employee with a non-zero review bonus, with a total.
    pub fn generate_bonus_summary(&self) -> String {
        let bonuses: Vec<(String, Decimal)> = self
            .directory
            .find_all()
            .into_iter()
            .filter_map(|e| {
                let bonus = self.payroll.calculate_bonus(&e.id).ok()?;
                (!bonus.is_zero()).then(|| (format!("{}: {}", e.id, e.full_name()), bonus))
            })
            .collect();

        let content = bonuses
            .iter()
            .map(|(who, bonus)| format!("{} - {}\n", who, format_currency(*bonus)))
            .collect::<String>();
        let total: Decimal = bonuses.iter().map(|(_, bonus)| *bonus).sum();

        generate_report(
            "BONUS SUMMARY",
            &content,
            &format!("Total Bonuses: {}", format_currency(total)),
        )
    }

    /// Returns the configured budget label for a department.
    pub fn department_budget(&self, department: &str) -> &'a str {
        self.config.department_budget(department)
    }
}
