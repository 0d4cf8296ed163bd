//! Read-only services layered over a borrowed [`Directory`](crate::directory::Directory).
//!
//! Every service holds a shared reference to the directory, so none of them
//! can outlive it or observe a write in progress.

mod notification;
mod payroll;
mod query;
mod reporting;

pub use notification::{Mailer, NotificationService, NotificationSummary, SimulatedMailer};
pub use payroll::{PaystubBreakdown, PayrollService, SalaryAdjustment};
pub use query::{QueryService, TenureStatus};
pub use reporting::ReportingService;
