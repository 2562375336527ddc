//! Hourly comfort timeline
//!
//! Classifies a series of hourly observations (typically a 24 hour
//! forecast) and places each hour on a normalized [0, 1] timeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use super::comfort_service::{ComfortReport, ComfortService, Observation};
use crate::error::ApplicationError;

/// An observation for the hour starting at `hour`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyObservation {
    /// Start of the hour
    pub hour: DateTime<Utc>,
    /// Conditions during that hour
    pub observation: Observation,
}

/// Comfort classification for one hour of a timeline
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyComfort {
    /// Position in the sorted timeline, starting at 0
    pub id: usize,
    /// Start of the hour
    pub hour: DateTime<Utc>,
    /// Position within the timeline, in [0, 1]
    pub timeline_location: f64,
    /// Comfort classification for the hour
    pub report: ComfortReport,
}

impl ComfortService {
    /// Classify an hourly series
    ///
    /// Hours may arrive in any order; the result is sorted by hour. The first
    /// hour sits at timeline location 0 and the last at 1. A single hour sits
    /// at 0.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidObservation` if two observations
    /// share the same hour.
    #[instrument(skip(self, hours), fields(hours = hours.len()))]
    pub fn assess_hourly(
        &self,
        mut hours: Vec<HourlyObservation>,
    ) -> Result<Vec<HourlyComfort>, ApplicationError> {
        hours.sort_by_key(|h| h.hour);

        if let Some(pair) = hours.windows(2).find(|pair| pair[0].hour == pair[1].hour) {
            return Err(ApplicationError::InvalidObservation(format!(
                "duplicate observation for hour {}",
                pair[0].hour.to_rfc3339()
            )));
        }

        let last = hours.len().saturating_sub(1);
        let timeline = hours
            .iter()
            .enumerate()
            .map(|(id, hourly)| HourlyComfort {
                id,
                hour: hourly.hour,
                timeline_location: timeline_location(id, last),
                report: self.assess(&hourly.observation),
            })
            .collect::<Vec<_>>();

        debug!(hours = timeline.len(), "Hourly timeline classified");
        Ok(timeline)
    }
}

#[allow(clippy::cast_precision_loss)]
fn timeline_location(index: usize, last: usize) -> f64 {
    if last == 0 {
        0.0
    } else {
        index as f64 / last as f64
    }
}
