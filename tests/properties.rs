//! Property-based tests for directory and service invariants.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use employee_directory::directory::{Directory, marketing_director};
use employee_directory::error::DirectoryError;
use employee_directory::models::Employee;
use employee_directory::services::{PayrollService, QueryService, TenureStatus};
use employee_directory::util::format_currency;

const DEPARTMENTS: &[&str] = &["Engineering", "Sales", "HR", "Marketing"];

fn create_test_employee(id: u8, department: usize, salary_cents: i64) -> Employee {
    let mut employee = marketing_director();
    employee.id = format!("E{:03}", id);
    employee.department = DEPARTMENTS[department].to_string();
    employee.salary = Decimal::new(salary_cents, 2);
    employee
}

fn employee_strategy() -> impl Strategy<Value = Employee> {
    (0u8..20, 0..DEPARTMENTS.len(), 1i64..100_000_000)
        .prop_map(|(id, department, cents)| create_test_employee(id, department, cents))
}

fn populated(employees: &[Employee]) -> Directory {
    let mut directory = Directory::new("system");
    for employee in employees {
        directory.save(employee.clone()).unwrap();
    }
    directory
}

proptest! {
    #[test]
    fn test_saved_values_are_found(
        employees in prop::collection::vec(employee_strategy(), 0..30),
    ) {
        let directory = populated(&employees);

        let mut distinct: Vec<&str> = employees.iter().map(|e| e.id.as_str()).collect();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(directory.find_all().len(), distinct.len());

        for id in distinct {
            let last = employees.iter().rev().find(|e| e.id == id).unwrap();
            prop_assert_eq!(directory.find_by_id(id).unwrap(), last);
        }
    }

    #[test]
    fn test_save_grows_only_for_new_ids(
        employees in prop::collection::vec(employee_strategy(), 1..20),
        extra in employee_strategy(),
    ) {
        let mut directory = populated(&employees);
        let before = directory.len();
        let is_new = directory.find_by_id(&extra.id).is_err();

        directory.save(extra).unwrap();

        prop_assert_eq!(directory.len(), before + usize::from(is_new));
    }

    #[test]
    fn test_department_filter_and_average(
        employees in prop::collection::vec(employee_strategy(), 0..30),
        department in 0..DEPARTMENTS.len(),
    ) {
        let directory = populated(&employees);
        let query = QueryService::new(&directory);
        let name = DEPARTMENTS[department];

        let members = directory.find_by_department(name);
        prop_assert!(members.iter().all(|e| e.department == name));

        let expected = if members.is_empty() {
            Decimal::ZERO
        } else {
            members.iter().map(|e| e.salary).sum::<Decimal>() / Decimal::from(members.len())
        };
        prop_assert_eq!(query.get_average_salary_by_department(name), expected);
    }

    #[test]
    fn test_top_performers_are_sorted_and_bounded(
        employees in prop::collection::vec(employee_strategy(), 0..30),
        limit in 0usize..40,
    ) {
        let directory = populated(&employees);
        let top = QueryService::new(&directory).get_top_performers(limit);

        prop_assert_eq!(top.len(), limit.min(directory.len()));
        prop_assert!(top.windows(2).all(|pair| pair[0].salary >= pair[1].salary));
    }

    #[test]
    fn test_high_earners_respect_threshold_and_limit(
        employees in prop::collection::vec(employee_strategy(), 0..30),
        threshold_cents in 0i64..100_000_000,
        limit in 0usize..10,
    ) {
        let directory = populated(&employees);
        let threshold = Decimal::new(threshold_cents, 2);
        let earners = QueryService::new(&directory).get_high_earners_up_to_limit(threshold, limit);

        prop_assert!(earners.len() <= limit);
        prop_assert!(earners.iter().all(|e| e.salary >= threshold));
        prop_assert!(earners.windows(2).all(|pair| pair[0].salary >= pair[1].salary));
    }

    #[test]
    fn test_department_counts_sum_to_total(
        employees in prop::collection::vec(employee_strategy(), 0..30),
    ) {
        let directory = populated(&employees);
        let counts = QueryService::new(&directory).get_department_counts();
        prop_assert_eq!(counts.values().sum::<usize>(), directory.len());
    }

    #[test]
    fn test_paystub_net_pay_formula(salary_cents in 1i64..100_000_000) {
        let directory = populated(&[create_test_employee(1, 0, salary_cents)]);
        let payroll = PayrollService::new(&directory);
        let employee = directory.find_by_id("E001").unwrap();

        let gross = employee.salary / Decimal::from(12);
        let expected = gross
            - gross * Decimal::new(25, 2)
            - Decimal::new(500, 0)
            - gross * Decimal::new(5, 2);

        let pay = payroll.calculate_pay(employee);
        prop_assert_eq!(pay.net_pay.round_dp(2), expected.round_dp(2));

        let stub = payroll.generate_paystub("E001").unwrap();
        let net_line = format!("Net Pay:          {}", format_currency(expected));
        prop_assert!(stub.contains(&net_line));
        prop_assert!(stub.contains("Account: ****1234"));
        prop_assert!(!stub.contains("5678901234"));
    }

    #[test]
    fn test_delete_removes_employee_and_reviews(
        employees in prop::collection::vec(employee_strategy(), 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut directory = populated(&employees);
        let id = pick.get(&employees).id.clone();

        directory.delete(&id);

        let is_not_found = matches!(
            directory.find_by_id(&id),
            Err(DirectoryError::EmployeeNotFound { .. })
        );
        prop_assert!(is_not_found);
        prop_assert!(directory.get_reviews(&id).is_empty());

        // Deleting twice is harmless.
        let len = directory.len();
        directory.delete(&id);
        prop_assert_eq!(directory.len(), len);
    }

    #[test]
    fn test_status_bands_by_whole_years(years in 0i32..40, month in 1u32..=6, day in 1u32..=28) {
        let directory = Directory::default();
        let query = QueryService::new(&directory);
        let as_of = NaiveDate::from_ymd_opt(2026, 6, 28).unwrap();

        let mut employee = marketing_director();
        employee.hire_date = NaiveDate::from_ymd_opt(2026 - years, month, day).unwrap();

        let expected = match years {
            0 => TenureStatus::NewHire,
            1 => TenureStatus::Junior,
            2 | 3 => TenureStatus::Intermediate,
            4 | 5 => TenureStatus::Senior,
            y if y > 10 => TenureStatus::Veteran,
            _ => TenureStatus::Experienced,
        };
        prop_assert_eq!(query.employee_status_as_of(&employee, as_of), expected);
    }
}
