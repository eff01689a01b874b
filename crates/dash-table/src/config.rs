//! Table behaviour configuration.

use std::time::Duration;

use dash_model::PageSize;
use serde::{Deserialize, Serialize};

use crate::jobs::JobSchedule;

/// User settings for table screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Quiet period after the last keystroke before the search applies.
    pub debounce_ms: u64,

    /// Rows per page when a table is first shown.
    pub default_page_size: PageSize,

    /// Interval between progress steps of a row job.
    pub job_interval_ms: u64,

    /// Progress added per interval, in percent.
    pub job_step: u8,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 200,
            default_page_size: PageSize::Ten,
            job_interval_ms: 200,
            job_step: 10,
        }
    }
}

impl TableConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Job schedule with the step clamped to `1..=100`.
    pub fn job_schedule(&self) -> JobSchedule {
        JobSchedule {
            interval: Duration::from_millis(self.job_interval_ms.max(1)),
            step: self.job_step.clamp(1, 100),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TableConfig::default();
        assert_eq!(config.debounce(), Duration::from_millis(200));
        assert_eq!(config.default_page_size, PageSize::Ten);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: TableConfig = toml::from_str("default_page_size = 50").unwrap();
        assert_eq!(config.default_page_size, PageSize::Fifty);
        assert_eq!(config.debounce_ms, 200);
    }

    #[test]
    fn test_zero_step_is_clamped() {
        let config = TableConfig {
            job_step: 0,
            ..Default::default()
        };
        assert_eq!(config.job_schedule().step, 1);
    }
}
