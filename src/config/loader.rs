//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading directory
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{DirectoryError, DirectoryResult};

use super::types::{DirectoryConfig, OrganizationConfig, PayrollPolicy};

/// Loads and provides access to directory configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── payroll.yaml       # Tax, retirement and insurance deductions
/// └── organization.yaml  # Audit user, department budgets, notifications
/// ```
///
/// # Example
///
/// ```no_run
/// use employee_directory::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Tax rate: {}", loader.config().payroll().tax_rate);
/// # Ok::<(), employee_directory::error::DirectoryError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: DirectoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - Either file is missing (`ConfigNotFound`)
    /// - Either file contains invalid YAML or misses a required field (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> DirectoryResult<Self> {
        let path = path.as_ref();

        let payroll = Self::load_yaml::<PayrollPolicy>(&path.join("payroll.yaml"))?;
        let organization = Self::load_yaml::<OrganizationConfig>(&path.join("organization.yaml"))?;

        debug!(path = %path.display(), "Loaded directory configuration");

        Ok(Self {
            config: DirectoryConfig::new(payroll, organization),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> DirectoryResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| DirectoryError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| DirectoryError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &DirectoryConfig {
        &self.config
    }

    /// Consumes the loader and returns the configuration.
    pub fn into_config(self) -> DirectoryConfig {
        self.config
    }
}
