//! Performance review model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of review cycle a review belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewType {
    /// Yearly review.
    Annual,
    /// Mid-year check-in.
    MidYear,
    /// End of probation review.
    Probation,
}

/// A single performance review for an employee.
///
/// `employee_id` is not checked against the directory, so a review may
/// outlive or predate the employee it refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PerformanceReview {
    /// The reviewed employee's identifier.
    pub employee_id: String,
    /// When the review took place.
    pub review_date: NaiveDate,
    /// Rating, normally between 1 and 5.
    pub rating: i32,
    /// Free-text reviewer comments.
    pub comments: String,
    /// Bonus awarded as a fraction of salary (0.10 = 10%).
    pub bonus_percentage: Decimal,
    /// The review cycle.
    pub review_type: ReviewType,
}
