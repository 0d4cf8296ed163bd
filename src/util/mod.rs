//! Stateless helpers shared by the directory and its services.
//!
//! Helpers are grouped by concern. None of them hold state; the only source
//! of randomness (employee id generation) takes its generator as an argument.

mod dates;
mod format;
mod ids;
mod validation;

pub use dates::{format_date, is_eligible_for_bonus, next_review_date, years_of_service};
pub use format::{format_currency, format_whole_dollars, generate_report, mask_sensitive_data};
pub use ids::generate_employee_id;
pub use validation::{is_valid_email, is_valid_salary, is_valid_zip_code, validate_employee_data};
