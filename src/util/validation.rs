//! Field validation helpers.

use rust_decimal::Decimal;

use crate::error::{DirectoryError, DirectoryResult};

/// Upper bound (exclusive) for a plausible annual salary.
const MAX_SALARY: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Returns true if the address contains both `@` and `.`.
pub fn is_valid_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Returns true for salaries strictly between zero and one million.
pub fn is_valid_salary(salary: Decimal) -> bool {
    salary > Decimal::ZERO && salary < MAX_SALARY
}

/// Returns true for `12345` or `12345-6789` style ZIP codes.
pub fn is_valid_zip_code(zip_code: &str) -> bool {
    fn all_digits(part: &str, len: usize) -> bool {
        part.len() == len && part.bytes().all(|b| b.is_ascii_digit())
    }

    match zip_code.split_once('-') {
        Some((base, extension)) => all_digits(base, 5) && all_digits(extension, 4),
        None => all_digits(zip_code, 5),
    }
}

/// Validates the basic fields of a new employee record.
///
/// Checks run in order (first name, last name, email, salary) and the first
/// failure is returned.
///
/// # Examples
///
/// ```
/// use employee_directory::error::DirectoryError;
/// use employee_directory::util::validate_employee_data;
/// use rust_decimal::Decimal;
///
/// let salary = Decimal::new(105000, 0);
/// assert!(validate_employee_data("Eva", "Green", "eva@company.com", salary).is_ok());
///
/// let err = validate_employee_data("Eva", "", "eva@company.com", salary).unwrap_err();
/// assert_eq!(
///     err,
///     DirectoryError::Validation {
///         field: "last_name".to_string(),
///         reason: "Last name is required".to_string(),
///     }
/// );
/// ```
pub fn validate_employee_data(
    first_name: &str,
    last_name: &str,
    email: &str,
    salary: Decimal,
) -> DirectoryResult<()> {
    if first_name.is_empty() {
        return Err(validation_failure("first_name", "First name is required"));
    }
    if last_name.is_empty() {
        return Err(validation_failure("last_name", "Last name is required"));
    }
    if !is_valid_email(email) {
        return Err(validation_failure("email", "Invalid email format"));
    }
    if !is_valid_salary(salary) {
        return Err(validation_failure("salary", "Invalid salary amount"));
    }
    Ok(())
}

fn validation_failure(field: &str, reason: &str) -> DirectoryError {
    DirectoryError::Validation {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("alice@company.com"));
        assert!(!is_valid_email("alice.company.com"));
        assert!(!is_valid_email("alice@company"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_is_valid_salary_bounds() {
        assert!(!is_valid_salary(Decimal::ZERO));
        assert!(is_valid_salary(Decimal::new(1, 2)));
        assert!(is_valid_salary(Decimal::new(99999999, 2)));
        assert!(!is_valid_salary(Decimal::new(1_000_000, 0)));
        assert!(!is_valid_salary(Decimal::new(-5, 0)));
    }

    #[test]
    fn test_is_valid_zip_code() {
        assert!(is_valid_zip_code("94102"));
        assert!(is_valid_zip_code("94102-1234"));
        assert!(!is_valid_zip_code("9410"));
        assert!(!is_valid_zip_code("94102-12"));
        assert!(!is_valid_zip_code("9410a"));
        assert!(!is_valid_zip_code("94102-"));
    }

    #[test]
    fn test_validate_returns_first_failure() {
        let err = validate_employee_data("", "", "bad", Decimal::ZERO).unwrap_err();
        match err {
            DirectoryError::Validation { field, reason } => {
                assert_eq!(field, "first_name");
                assert_eq!(reason, "First name is required");
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_email_then_salary() {
        let salary = Decimal::new(50000, 0);
        let err = validate_employee_data("A", "B", "nope", salary).unwrap_err();
        assert!(err.to_string().contains("Invalid email format"));

        let err = validate_employee_data("A", "B", "a@b.co", Decimal::ZERO).unwrap_err();
        assert!(err.to_string().contains("Invalid salary amount"));
    }
}
