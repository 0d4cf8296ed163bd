//! Payroll notifications over a pluggable mailer.
//!
//! No real transport exists. [`SimulatedMailer`] waits a fixed latency per
//! message and records the delivery in the log.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::NotificationSettings;
use crate::error::{DirectoryError, DirectoryResult};
use crate::models::Employee;
use crate::util::is_valid_email;

/// Delivers a single message.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends one message to `to`.
    async fn send(&self, to: &str, subject: &str, body: &str) -> DirectoryResult<()>;
}

/// A mailer that only sleeps and logs.
#[derive(Debug, Default)]
pub struct SimulatedMailer {
    latency: Duration,
    rejected: HashSet<String>,
    delivered: AtomicUsize,
}

impl SimulatedMailer {
    /// Creates a mailer that takes `latency` per message.
    pub fn new(latency: Duration) -> Self {
        Self {
            latency,
            ..Self::default()
        }
    }

    /// Creates a mailer using the configured per-message latency.
    pub fn from_settings(settings: &NotificationSettings) -> Self {
        Self::new(Duration::from_millis(settings.latency_ms))
    }

    /// Makes every send to `address` fail.
    pub fn reject(mut self, address: impl Into<String>) -> Self {
        self.rejected.insert(address.into());
        self
    }

    /// Number of messages delivered so far.
    pub fn delivered(&self) -> usize {
        self.delivered.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl Mailer for SimulatedMailer {
    async fn send(&self, to: &str, subject: &str, _body: &str) -> DirectoryResult<()> {
        tokio::time::sleep(self.latency).await;

        if self.rejected.contains(to) {
            return Err(DirectoryError::NotificationFailed {
                recipient: to.to_string(),
                message: "mailbox rejected the message".to_string(),
            });
        }

        self.delivered.fetch_add(1, Ordering::Relaxed);
        info!(recipient = %to, subject = %subject, "Sending email");
        Ok(())
    }
}

/// Per-batch delivery counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct NotificationSummary {
    /// One per employee passed in.
    pub attempted: usize,
    /// Messages the mailer accepted.
    pub sent: usize,
    /// Invalid addresses plus mailer failures.
    pub failed: usize,
}

/// Sends payroll notifications to employees.
#[derive(Debug)]
pub struct NotificationService<M> {
    mailer: M,
    settings: NotificationSettings,
}

impl<M: Mailer> NotificationService<M> {
    /// Creates a service sending the configured subject and body.
    pub fn new(mailer: M, settings: NotificationSettings) -> Self {
        Self { mailer, settings }
    }

    /// Returns the underlying mailer.
    pub fn mailer(&self) -> &M {
        &self.mailer
    }

    /// Sends one payroll notification per employee, concurrently.
    ///
    /// Employees whose e-mail address is invalid are counted as failed
    /// without reaching the mailer.
    ///
    /// # Example
    ///
    /// ```
    /// use employee_directory::config::NotificationSettings;
    /// use employee_directory::directory::Directory;
    /// use employee_directory::services::{NotificationService, SimulatedMailer};
    /// use std::time::Duration;
    ///
    /// # tokio::runtime::Runtime::new().unwrap().block_on(async {
    /// let directory = Directory::with_sample_data();
    /// let service = NotificationService::new(
    ///     SimulatedMailer::new(Duration::ZERO),
    ///     NotificationSettings::default(),
    /// );
    ///
    /// let summary = service.send_payroll_notifications(&directory.find_all()).await;
    /// assert_eq!(summary.sent, 4);
    /// # });
    /// ```
    pub async fn send_payroll_notifications(
        &self,
        employees: &[&Employee],
    ) -> NotificationSummary {
        info!(count = employees.len(), "Sending payroll notifications");

        let deliveries = employees.iter().map(|employee| async move {
            if !is_valid_email(&employee.email) {
                warn!(
                    employee_id = %employee.id,
                    email = %employee.email,
                    "Skipping notification to invalid address"
                );
                return false;
            }

            match self
                .mailer
                .send(&employee.email, &self.settings.subject, &self.settings.body)
                .await
            {
                Ok(()) => true,
                Err(e) => {
                    warn!(employee_id = %employee.id, error = %e, "Notification failed");
                    false
                }
            }
        });

        let results = join_all(deliveries).await;
        let sent = results.iter().filter(|delivered| **delivered).count();
        let summary = NotificationSummary {
            attempted: results.len(),
            sent,
            failed: results.len() - sent,
        };

        info!(
            attempted = summary.attempted,
            sent = summary.sent,
            failed = summary.failed,
            "All notifications sent"
        );
        summary
    }
}
