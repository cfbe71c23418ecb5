use serde::{Deserialize, Serialize};

use crate::config::traits::ConfigSection;
use crate::error::TimegenError;

/// Shape of the weekly grid: ordered day labels and a uniform slot count.
///
/// Fixed for the lifetime of a deployment; every chromosome produced by the
/// engine matches this shape exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Ordered day labels (e.g. "Mon".."Fri").
    pub days: Vec<String>,
    /// Number of lesson slots per day.
    pub slots_per_day: usize,
}

impl GridSpec {
    pub fn new(days: Vec<String>, slots_per_day: usize) -> Self {
        Self {
            days,
            slots_per_day,
        }
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    /// Total number of grid cells (days × slots per day).
    pub fn capacity(&self) -> usize {
        self.days.len() * self.slots_per_day
    }
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            days: ["Mon", "Tue", "Wed", "Thu", "Fri"]
                .iter()
                .map(|d| d.to_string())
                .collect(),
            slots_per_day: 6,
        }
    }
}

impl ConfigSection for GridSpec {
    fn section_name() -> &'static str {
        "grid"
    }

    fn validate(&self) -> Result<(), TimegenError> {
        if self.days.is_empty() {
            return Err(TimegenError::Configuration(
                "Grid must have at least one day".to_string(),
            ));
        }
        if self.days.iter().any(|d| d.trim().is_empty()) {
            return Err(TimegenError::Configuration(
                "Day labels must not be empty".to_string(),
            ));
        }
        if self.slots_per_day == 0 {
            return Err(TimegenError::Configuration(
                "Slots per day must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
