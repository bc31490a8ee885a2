use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::RecordError;

pub const MIN_QUALITY_RATING: u8 = 1;
pub const MAX_QUALITY_RATING: u8 = 10;

/// One logged night of sleep, keyed by the day the sleep period ended.
///
/// Records are owned by storage; everything derived from them is recomputed
/// on demand and never written back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    pub date: NaiveDate,
    pub hours: f64,
    /// Subjective 1-10 rating. Absent when the user logged a night without
    /// rating it.
    pub quality: Option<u8>,
    pub notes: Option<String>,
}

impl SleepRecord {
    pub fn new(
        date: NaiveDate,
        hours: f64,
        quality: Option<u8>,
        notes: Option<String>,
    ) -> Result<Self, RecordError> {
        if !(hours.is_finite() && hours >= 0.0) {
            return Err(RecordError::InvalidHours(hours));
        }

        if let Some(q) = quality {
            if !(MIN_QUALITY_RATING..=MAX_QUALITY_RATING).contains(&q) {
                return Err(RecordError::QualityOutOfRange(q));
            }
        }

        Ok(Self {
            date,
            hours,
            quality,
            notes,
        })
    }

    /// Rating as a weight, with unrated nights counting as zero.
    pub fn rating(&self) -> f64 {
        f64::from(self.quality.unwrap_or(0))
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SearchSleepRecords {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl SearchSleepRecords {
    pub fn with_from(mut self, from: NaiveDate) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_to(mut self, to: NaiveDate) -> Self {
        self.to = Some(to);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()
    }

    #[test]
    fn rejects_negative_hours() {
        assert_eq!(
            SleepRecord::new(date(), -1.0, Some(5), None),
            Err(RecordError::InvalidHours(-1.0))
        );
    }

    #[test]
    fn rejects_non_finite_hours() {
        assert!(SleepRecord::new(date(), f64::NAN, None, None).is_err());
        assert!(SleepRecord::new(date(), f64::INFINITY, None, None).is_err());
    }

    #[test]
    fn rejects_out_of_range_quality() {
        assert_eq!(
            SleepRecord::new(date(), 8.0, Some(11), None),
            Err(RecordError::QualityOutOfRange(11))
        );
        assert_eq!(
            SleepRecord::new(date(), 8.0, Some(0), None),
            Err(RecordError::QualityOutOfRange(0))
        );
    }

    #[test]
    fn unrated_night_is_valid_and_weighs_zero() {
        let record = SleepRecord::new(date(), 7.5, None, None).unwrap();
        assert_eq!(record.rating(), 0.0);
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let record = SleepRecord::new(date(), 7.5, Some(8), None).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2025-03-01");
        assert_eq!(json["hours"], 7.5);
        assert_eq!(json["quality"], 8);
    }
}
