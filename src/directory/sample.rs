//! Built-in sample data used to seed a directory.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    Address, Employee, EmploymentType, PaymentInfo, PaymentMethod, PerformanceReview, ReviewType,
};

/// Evaluated in const context only, so a bad date fails the build.
const fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid sample date"),
    }
}

const ALICE_HIRED: NaiveDate = date(2020, 1, 15);
const BOB_HIRED: NaiveDate = date(2019, 6, 1);
const CHARLIE_HIRED: NaiveDate = date(2018, 3, 20);
const DIANA_HIRED: NaiveDate = date(2021, 9, 10);
const EVA_HIRED: NaiveDate = date(2019, 8, 15);
const REVIEW_2023: NaiveDate = date(2023, 12, 15);
const REVIEW_2024: NaiveDate = date(2024, 12, 15);

fn skills(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn employee(
    id: &str,
    (first_name, last_name): (&str, &str),
    email: &str,
    department: &str,
    position: &str,
    salary: i64,
    hire_date: NaiveDate,
    address: Address,
    payment_info: PaymentInfo,
    skill_names: &[&str],
) -> Employee {
    Employee {
        id: id.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        salary: Decimal::new(salary, 0),
        hire_date,
        address: Some(address),
        payment_info,
        employment_type: EmploymentType::FullTime,
        skills: skills(skill_names),
    }
}

const ENGINEERING_SKILLS: &[&str] = &["Java", "Python", "AWS", "Docker"];

/// Returns the four sample employees, E001 to E004, in insertion order.
pub fn sample_employees() -> Vec<Employee> {
    vec![
        employee(
            "E001",
            ("Alice", "Johnson"),
            "alice@company.com",
            "Engineering",
            "Senior Engineer",
            120_000,
            ALICE_HIRED,
            Address::new("123 Main St", "San Francisco", "CA", "94102", "USA"),
            PaymentInfo::new(
                "1234567890",
                "987654321",
                "Chase Bank",
                PaymentMethod::DirectDeposit,
            ),
            ENGINEERING_SKILLS,
        ),
        employee(
            "E002",
            ("Bob", "Smith"),
            "bob@company.com",
            "Sales",
            "Sales Manager",
            95_000,
            BOB_HIRED,
            Address::new("456 Oak Ave", "New York", "NY", "10001", "USA"),
            PaymentInfo::new(
                "2345678901",
                "876543219",
                "Bank of America",
                PaymentMethod::DirectDeposit,
            ),
            &["Salesforce", "Negotiation", "CRM"],
        ),
        employee(
            "E003",
            ("Charlie", "Brown"),
            "charlie@company.com",
            "Engineering",
            "Lead Engineer",
            140_000,
            CHARLIE_HIRED,
            Address::new("789 Pine Rd", "Austin", "TX", "73301", "USA"),
            PaymentInfo::new("3456789012", "765432198", "Wells Fargo", PaymentMethod::Check),
            ENGINEERING_SKILLS,
        ),
        employee(
            "E004",
            ("Diana", "Prince"),
            "diana@company.com",
            "HR",
            "HR Director",
            110_000,
            DIANA_HIRED,
            Address::new("321 Elm St", "Seattle", "WA", "98101", "USA"),
            PaymentInfo::new(
                "4567890123",
                "654321987",
                "US Bank",
                PaymentMethod::DirectDeposit,
            ),
            &["Recruiting", "Employee Relations", "Training"],
        ),
    ]
}

/// Returns the marketing director the facade adds on top of the sample set.
pub fn marketing_director() -> Employee {
    employee(
        "E005",
        ("Eva", "Green"),
        "eva@company.com",
        "Marketing",
        "Marketing Director",
        105_000,
        EVA_HIRED,
        Address::new("555 Market St", "Chicago", "IL", "60601", "USA"),
        PaymentInfo::new(
            "5678901234",
            "543219876",
            "Citibank",
            PaymentMethod::DirectDeposit,
        ),
        &["Digital Marketing", "SEO", "Content Strategy"],
    )
}

/// Returns the sample performance reviews.
pub fn sample_reviews() -> Vec<PerformanceReview> {
    let review = |employee_id: &str, reviewed: NaiveDate, rating, comments: &str, bonus| {
        PerformanceReview {
            employee_id: employee_id.to_string(),
            review_date: reviewed,
            rating,
            comments: comments.to_string(),
            bonus_percentage: Decimal::new(bonus, 2),
            review_type: ReviewType::Annual,
        }
    };

    vec![
        review("E001", REVIEW_2023, 5, "Excellent work on new features", 10),
        review("E001", REVIEW_2024, 4, "Good performance overall", 8),
        review("E003", REVIEW_2023, 5, "Outstanding leadership", 12),
    ]
}
