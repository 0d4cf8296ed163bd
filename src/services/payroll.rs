//! Payroll calculations and paystub formatting.
//!
//! Monthly pay is derived from the annual salary: gross is one twelfth of the
//! salary, and tax, retirement and a fixed health insurance amount are
//! deducted from it.

use std::str::FromStr;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PayrollPolicy;
use crate::directory::Directory;
use crate::error::DirectoryResult;
use crate::models::Employee;
use crate::util::{format_currency, mask_sensitive_data, years_of_service};

/// Number of pay periods per year.
const PAY_PERIODS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

const RULE: &str = "----------------------------------------\n";
const DOUBLE_RULE: &str = "========================================\n";

/// A kind of salary adjustment.
///
/// Unrecognized names parse to [`SalaryAdjustment::Unrecognized`], which
/// leaves the salary unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SalaryAdjustment {
    /// Flat 3% increase.
    CostOfLiving,
    /// Increase tiered by years of service.
    Merit,
    /// Increase tiered by current position.
    Promotion,
    /// Any other adjustment name.
    Unrecognized,
}

impl FromStr for SalaryAdjustment {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "COST_OF_LIVING" => SalaryAdjustment::CostOfLiving,
            "MERIT" => SalaryAdjustment::Merit,
            "PROMOTION" => SalaryAdjustment::Promotion,
            _ => SalaryAdjustment::Unrecognized,
        })
    }
}

impl From<&str> for SalaryAdjustment {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(adjustment) => adjustment,
            Err(never) => match never {},
        }
    }
}

/// One month of pay for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaystubBreakdown {
    /// Annual salary divided by twelve.
    pub gross_pay: Decimal,
    /// Tax withheld.
    pub taxes: Decimal,
    /// Fixed health insurance deduction.
    pub health_insurance: Decimal,
    /// Retirement contribution.
    pub retirement: Decimal,
    /// Gross pay minus all deductions.
    pub net_pay: Decimal,
}

/// Payroll operations over a borrowed [`Directory`].
#[derive(Debug, Clone, Copy)]
pub struct PayrollService<'a> {
    directory: &'a Directory,
    policy: PayrollPolicy,
}

impl<'a> PayrollService<'a> {
    /// Creates a payroll service using the default deduction policy.
    pub fn new(directory: &'a Directory) -> Self {
        Self::with_policy(directory, PayrollPolicy::default())
    }

    /// Creates a payroll service with a specific deduction policy.
    pub fn with_policy(directory: &'a Directory, policy: PayrollPolicy) -> Self {
        Self { directory, policy }
    }

    /// Returns the deduction policy in use.
    pub fn policy(&self) -> &PayrollPolicy {
        &self.policy
    }

    /// Calculates one month of pay for an employee.
    ///
    /// # Example
    ///
    /// ```
    /// use employee_directory::directory::Directory;
    /// use employee_directory::services::PayrollService;
    /// use rust_decimal::Decimal;
    ///
    /// let directory = Directory::with_sample_data();
    /// let payroll = PayrollService::new(&directory);
    /// let alice = directory.find_by_id("E001")?;
    ///
    /// let pay = payroll.calculate_pay(alice);
    /// assert_eq!(pay.gross_pay, Decimal::new(10000, 0));
    /// assert_eq!(pay.net_pay, Decimal::new(6500, 0));
    /// # Ok::<(), employee_directory::error::DirectoryError>(())
    /// ```
    pub fn calculate_pay(&self, employee: &Employee) -> PaystubBreakdown {
        let gross_pay = employee.salary / PAY_PERIODS_PER_YEAR;
        let taxes = gross_pay * self.policy.tax_rate;
        let retirement = gross_pay * self.policy.retirement_rate;
        let health_insurance = self.policy.health_insurance;
        let net_pay = gross_pay - taxes - health_insurance - retirement;

        PaystubBreakdown {
            gross_pay,
            taxes,
            health_insurance,
            retirement,
            net_pay,
        }
    }

    /// Renders the monthly payroll statement for an employee.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` for unknown ids.
    pub fn generate_paystub(&self, employee_id: &str) -> DirectoryResult<String> {
        let employee = self.directory.find_by_id(employee_id)?;
        let pay = self.calculate_pay(employee);
        let payment = &employee.payment_info;

        debug!(employee_id = %employee_id, net_pay = %pay.net_pay, "Generating paystub");

        let mut stub = String::new();
        stub.push_str(DOUBLE_RULE);
        stub.push_str("           PAYROLL STATEMENT            \n");
        stub.push_str(DOUBLE_RULE);
        stub.push_str(&format!("Employee: {}\n", employee.full_name()));
        stub.push_str(&format!("Employee ID: {}\n", employee.id));
        stub.push_str(&format!("Department: {}\n", employee.department));
        stub.push_str(&format!("Position: {}\n", employee.position));
        stub.push_str(&format!("Employment Type: {}\n", employee.employment_type));
        stub.push_str(RULE);
        stub.push_str(&format!(
            "Gross Pay:        {}\n",
            format_currency(pay.gross_pay)
        ));
        stub.push_str(&format!(
            "Taxes ({}):      {}\n",
            percent_label(self.policy.tax_rate),
            format_currency(pay.taxes)
        ));
        stub.push_str(&format!(
            "Health Insurance: {}\n",
            format_currency(pay.health_insurance)
        ));
        stub.push_str(&format!(
            "Retirement ({}):  {}\n",
            percent_label(self.policy.retirement_rate),
            format_currency(pay.retirement)
        ));
        stub.push_str(RULE);
        stub.push_str(&format!(
            "Net Pay:          {}\n",
            format_currency(pay.net_pay)
        ));
        stub.push_str(DOUBLE_RULE);
        stub.push_str(&format!("Payment Method: {}\n", payment.payment_method));
        stub.push_str(&format!("Bank: {}\n", payment.bank_name));
        stub.push_str(&format!(
            "Account: {}\n",
            mask_sensitive_data(Some(&payment.account_number))
        ));
        stub.push_str(DOUBLE_RULE);

        Ok(stub)
    }

    /// Returns the salary multiplied by the mean review bonus percentage.
    ///
    /// Employees without reviews get zero.
    ///
    /// # Errors
    ///
    /// Returns `EmployeeNotFound` for unknown ids.
    pub fn calculate_bonus(&self, employee_id: &str) -> DirectoryResult<Decimal> {
        let employee = self.directory.find_by_id(employee_id)?;
        let reviews = self.directory.get_reviews(employee_id);

        if reviews.is_empty() {
            return Ok(Decimal::ZERO);
        }

        let total: Decimal = reviews.iter().map(|r| r.bonus_percentage).sum();
        let average = total / Decimal::from(reviews.len());
        Ok(employee.salary * average)
    }

    /// Applies a salary adjustment using today's date for tenure.
    pub fn calculate_adjusted_salary(
        &self,
        employee: &Employee,
        adjustment: impl Into<SalaryAdjustment>,
    ) -> Decimal {
        self.adjusted_salary_as_of(employee, adjustment, Local::now().date_naive())
    }

    /// Applies a salary adjustment with tenure measured at `as_of`.
    ///
    /// | Adjustment       | Multiplier                                              |
    /// |------------------|---------------------------------------------------------|
    /// | `COST_OF_LIVING` | 1.03                                                    |
    /// | `MERIT`          | 1.10 from 5 years, 1.07 from 3 years, otherwise 1.05    |
    /// | `PROMOTION`      | 1.15 if position contains `Senior`, 1.20 if `Lead`, otherwise 1.12 |
    /// | anything else    | 1 (unchanged)                                           |
    pub fn adjusted_salary_as_of(
        &self,
        employee: &Employee,
        adjustment: impl Into<SalaryAdjustment>,
        as_of: NaiveDate,
    ) -> Decimal {
        let multiplier = match adjustment.into() {
            SalaryAdjustment::CostOfLiving => Decimal::new(103, 2),
            SalaryAdjustment::Merit => match years_of_service(employee.hire_date, as_of) {
                years if years >= 5 => Decimal::new(110, 2),
                years if years >= 3 => Decimal::new(107, 2),
                _ => Decimal::new(105, 2),
            },
            // "Senior" is checked before "Lead", so "Senior Lead" gets 1.15.
            SalaryAdjustment::Promotion if employee.position.contains("Senior") => {
                Decimal::new(115, 2)
            }
            SalaryAdjustment::Promotion if employee.position.contains("Lead") => {
                Decimal::new(120, 2)
            }
            SalaryAdjustment::Promotion => Decimal::new(112, 2),
            SalaryAdjustment::Unrecognized => Decimal::ONE,
        };
        employee.salary * multiplier
    }

    /// Renders the bonus approval letter sent to an employee.
    ///
    /// # Example
    ///
    /// ```
    /// use employee_directory::services::PayrollService;
    /// use rust_decimal::Decimal;
    ///
    /// let letter = PayrollService::generate_bonus_letter("Alice Johnson", Decimal::new(5000, 0));
    /// assert!(letter.starts_with("Dear Alice Johnson,"));
    /// assert!(letter.contains("$5000.00"));
    /// ```
    pub fn generate_bonus_letter(name: &str, amount: Decimal) -> String {
        format!(
            concat!(
                "Dear {},\n\n",
                "We are pleased to inform you that your bonus of {} has been approved.\n\n",
                "Regards,\n",
                "HR Department",
            ),
            name,
            format_currency(amount)
        )
    }
}

/// Renders a fraction as a whole percentage label (0.25 becomes "25%").
fn percent_label(rate: Decimal) -> String {
    format!("{}%", (rate * Decimal::ONE_HUNDRED).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::marketing_director;
    use crate::error::DirectoryError;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee_with(position: &str, hire_date: NaiveDate) -> Employee {
        let mut employee = marketing_director();
        employee.salary = dec("100000");
        employee.position = position.to_string();
        employee.hire_date = hire_date;
        employee
    }

    #[test]
    fn test_calculate_pay_for_120000_salary() {
        let directory = Directory::with_sample_data();
        let payroll = PayrollService::new(&directory);
        let alice = directory.find_by_id("E001").unwrap();

        let pay = payroll.calculate_pay(alice);

        assert_eq!(pay.gross_pay, dec("10000"));
        assert_eq!(pay.taxes, dec("2500"));
        assert_eq!(pay.retirement, dec("500"));
        assert_eq!(pay.health_insurance, dec("500"));
        assert_eq!(pay.net_pay, dec("6500"));
    }

    #[test]
    fn test_paystub_contains_amounts_and_masked_account() {
        let directory = Directory::with_sample_data();
        let payroll = PayrollService::new(&directory);

        let stub = payroll.generate_paystub("E001").unwrap();

        assert!(stub.contains("           PAYROLL STATEMENT            \n"));
        assert!(stub.contains("Employee: Alice Johnson\n"));
        assert!(stub.contains("Employee ID: E001\n"));
        assert!(stub.contains("Employment Type: FULL_TIME\n"));
        assert!(stub.contains("Gross Pay:        $10000.00\n"));
        assert!(stub.contains("Taxes (25%):      $2500.00\n"));
        assert!(stub.contains("Health Insurance: $500.00\n"));
        assert!(stub.contains("Retirement (5%):  $500.00\n"));
        assert!(stub.contains("Net Pay:          $6500.00\n"));
        assert!(stub.contains("Payment Method: DIRECT_DEPOSIT\n"));
        assert!(stub.contains("Bank: Chase Bank\n"));
        assert!(stub.contains("Account: ****7890\n"));
        assert!(!stub.contains("1234567890"));
    }

    #[test]
    fn test_paystub_rounds_repeating_gross_pay() {
        let directory = Directory::with_sample_data();
        let payroll = PayrollService::new(&directory);

        // 95000 / 12 = 7916.666...
        let stub = payroll.generate_paystub("E002").unwrap();
        assert!(stub.contains("Gross Pay:        $7916.67\n"));
        assert!(stub.contains("Taxes (25%):      $1979.17\n"));
        assert!(stub.contains("Retirement (5%):  $395.83\n"));
        assert!(stub.contains("Net Pay:          $5041.67\n"));
        assert!(stub.contains("Payment Method: DIRECT_DEPOSIT\n"));
    }

    #[test]
    fn test_paystub_unknown_employee() {
        let directory = Directory::with_sample_data();
        let payroll = PayrollService::new(&directory);
        assert!(matches!(
            payroll.generate_paystub("E999"),
            Err(DirectoryError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn test_paystub_uses_configured_policy() {
        let directory = Directory::with_sample_data();
        let policy = PayrollPolicy {
            tax_rate: dec("0.30"),
            retirement_rate: dec("0.10"),
            health_insurance: dec("250"),
        };
        let payroll = PayrollService::with_policy(&directory, policy);

        let stub = payroll.generate_paystub("E001").unwrap();
        assert!(stub.contains("Taxes (30%):      $3000.00\n"));
        assert!(stub.contains("Retirement (10%):  $1000.00\n"));
        assert!(stub.contains("Net Pay:          $5750.00\n"));
    }

    #[test]
    fn test_calculate_bonus_averages_reviews() {
        let directory = Directory::with_sample_data();
        let payroll = PayrollService::new(&directory);

        // (0.10 + 0.08) / 2 * 120000
        assert_eq!(payroll.calculate_bonus("E001").unwrap(), dec("10800"));
        // 0.12 * 140000
        assert_eq!(payroll.calculate_bonus("E003").unwrap(), dec("16800"));
        assert_eq!(payroll.calculate_bonus("E002").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_calculate_bonus_unknown_employee() {
        let directory = Directory::with_sample_data();
        let payroll = PayrollService::new(&directory);
        assert!(payroll.calculate_bonus("E999").is_err());
    }

    #[test]
    fn test_cost_of_living_adjustment() {
        let directory = Directory::default();
        let payroll = PayrollService::new(&directory);
        let employee = employee_with("Analyst", date(2024, 1, 1));
        assert_eq!(
            payroll.calculate_adjusted_salary(&employee, "COST_OF_LIVING"),
            dec("103000")
        );
    }

    #[test]
    fn test_merit_adjustment_tiers() {
        let directory = Directory::default();
        let payroll = PayrollService::new(&directory);
        let as_of = date(2026, 6, 1);

        let five_years = employee_with("Analyst", date(2021, 6, 1));
        let three_years = employee_with("Analyst", date(2023, 6, 1));
        let two_years = employee_with("Analyst", date(2024, 6, 1));

        assert_eq!(
            payroll.adjusted_salary_as_of(&five_years, "MERIT", as_of),
            dec("110000")
        );
        assert_eq!(
            payroll.adjusted_salary_as_of(&three_years, "MERIT", as_of),
            dec("107000")
        );
        assert_eq!(
            payroll.adjusted_salary_as_of(&two_years, "MERIT", as_of),
            dec("105000")
        );
    }

    #[test]
    fn test_promotion_adjustment_tiers() {
        let directory = Directory::default();
        let payroll = PayrollService::new(&directory);
        let hired = date(2020, 1, 1);

        let senior = employee_with("Senior Engineer", hired);
        let lead = employee_with("Lead Engineer", hired);
        let senior_lead = employee_with("Senior Lead", hired);
        let other = employee_with("Engineer", hired);
        let lowercase = employee_with("senior engineer", hired);

        assert_eq!(
            payroll.calculate_adjusted_salary(&senior, SalaryAdjustment::Promotion),
            dec("115000")
        );
        assert_eq!(
            payroll.calculate_adjusted_salary(&lead, SalaryAdjustment::Promotion),
            dec("120000")
        );
        assert_eq!(
            payroll.calculate_adjusted_salary(&senior_lead, SalaryAdjustment::Promotion),
            dec("115000")
        );
        assert_eq!(
            payroll.calculate_adjusted_salary(&other, SalaryAdjustment::Promotion),
            dec("112000")
        );
        assert_eq!(
            payroll.calculate_adjusted_salary(&lowercase, SalaryAdjustment::Promotion),
            dec("112000")
        );
    }

    #[test]
    fn test_unrecognized_adjustment_leaves_salary() {
        let directory = Directory::default();
        let payroll = PayrollService::new(&directory);
        let employee = employee_with("Analyst", date(2024, 1, 1));
        assert_eq!(
            payroll.calculate_adjusted_salary(&employee, "BONUS_ROUND"),
            dec("100000")
        );
        assert_eq!(
            payroll.calculate_adjusted_salary(&employee, "merit"),
            dec("100000")
        );
    }

    #[test]
    fn test_adjustment_parsing() {
        assert_eq!(
            "COST_OF_LIVING".parse::<SalaryAdjustment>().unwrap(),
            SalaryAdjustment::CostOfLiving
        );
        assert_eq!(SalaryAdjustment::from("MERIT"), SalaryAdjustment::Merit);
        assert_eq!(
            SalaryAdjustment::from("anything"),
            SalaryAdjustment::Unrecognized
        );
    }

    #[test]
    fn test_bonus_letter_layout() {
        let letter = PayrollService::generate_bonus_letter("Alice Johnson", dec("5000"));
        assert_eq!(
            letter,
            "Dear Alice Johnson,\n\n\
             We are pleased to inform you that your bonus of $5000.00 has been approved.\n\n\
             Regards,\n\
             HR Department"
        );
    }

    #[test]
    fn test_percent_label() {
        assert_eq!(percent_label(dec("0.25")), "25%");
        assert_eq!(percent_label(dec("0.05")), "5%");
        assert_eq!(percent_label(dec("0.075")), "7.5%");
    }
}
