use std::fmt::Display;

use serde::{Deserialize, Serialize};
use vitalog_types::SleepRecord;

use crate::helpers::math::{mean, population_variance, round_tenths};

/// Derives summary statistics from a user's sleep log.
///
/// The analyzer is a pure function of the records handed to [`SleepAnalyzer::new`]:
/// no storage, no clock, no shared state. Summaries are recomputed from scratch
/// whenever the underlying records change.
pub struct SleepAnalyzer {
    /// Sorted most-recent-first.
    records: Vec<SleepRecord>,
}

/// Coarse bucket for an average subjective quality rating.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum QualityLevel {
    #[default]
    Poor,
    Fair,
    Good,
    Excellent,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ConsistencyTrend {
    Improving,
    Declining,
    #[default]
    Stable,
}

/// Headline statistics over a user's recent sleep. A derived view: always
/// reconstructible from the record list, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SleepSummary {
    /// Mean hours slept per night over the recent window, 1 decimal.
    pub total_sleep_hours: f64,
    /// Mean quality rating over the recent window (unrated nights count as 0),
    /// 1 decimal.
    pub average_quality: f64,
    pub quality_level: QualityLevel,
    /// 0-100, inversely proportional to duration variance.
    pub consistency: u8,
    pub consistency_trend: ConsistencyTrend,
    /// Quality-weighted personal sleep target, 1 decimal.
    pub optimal_hours: f64,
}

impl QualityLevel {
    /// Total over all real inputs; the 1-10 rating scale is conventional,
    /// not enforced here.
    pub fn from_score(score: f64) -> Self {
        if score <= 3.0 {
            QualityLevel::Poor
        } else if score <= 5.0 {
            QualityLevel::Fair
        } else if score <= 8.0 {
            QualityLevel::Good
        } else {
            QualityLevel::Excellent
        }
    }
}

impl Default for SleepSummary {
    fn default() -> Self {
        Self {
            total_sleep_hours: 0.0,
            average_quality: 0.0,
            quality_level: QualityLevel::Poor,
            consistency: 0,
            consistency_trend: ConsistencyTrend::Stable,
            optimal_hours: SleepAnalyzer::DEFAULT_OPTIMAL_HOURS,
        }
    }
}

impl SleepAnalyzer {
    /// Headline statistics cover at most this many of the latest records.
    pub const RECENT_WINDOW: usize = 7;

    /// Ratings strictly above this count as high-quality sleep.
    pub const HIGH_QUALITY_CUTOFF: u8 = 7;

    /// Sleep target reported until enough high-quality nights exist.
    pub const DEFAULT_OPTIMAL_HOURS: f64 = 8.0;

    /// Linear penalty applied per unit of duration variance. Tunable, not
    /// derived from any model.
    const VARIANCE_PENALTY: f64 = 20.0;

    /// Score gap a half-over-half comparison must clear before the trend
    /// leaves `Stable`. Tunable.
    const TREND_DEAD_BAND: f64 = 5.0;

    const MIN_CONSISTENCY_RECORDS: usize = 3;
    const MIN_TREND_RECORDS: usize = 5;
    const MIN_OPTIMAL_RECORDS: usize = 5;

    /// Accepts the complete record list in any order.
    pub fn new(mut records: Vec<SleepRecord>) -> Self {
        records.sort_by(|a, b| b.date.cmp(&a.date));
        Self { records }
    }

    pub fn summary(&self) -> SleepSummary {
        if self.records.is_empty() {
            return SleepSummary::default();
        }

        let window = &self.records[..self.records.len().min(Self::RECENT_WINDOW)];
        let hours = window.iter().map(|r| r.hours).collect::<Vec<_>>();
        let ratings = window.iter().map(SleepRecord::rating).collect::<Vec<_>>();

        let average_quality = round_tenths(mean(&ratings));

        let restful = self
            .records
            .iter()
            .filter(|r| r.quality.is_some_and(|q| q > Self::HIGH_QUALITY_CUTOFF))
            .cloned()
            .collect::<Vec<_>>();

        SleepSummary {
            total_sleep_hours: round_tenths(mean(&hours)),
            average_quality,
            quality_level: QualityLevel::from_score(average_quality),
            consistency: Self::consistency_score(window).round() as u8,
            consistency_trend: Self::consistency_trend(&self.records),
            optimal_hours: Self::optimal_sleep_hours(&restful),
        }
    }

    /// 0-100 routine-regularity score over the supplied records.
    ///
    /// Fewer than 3 records is insufficient data and scores 0; identical
    /// durations score 100; large variance saturates at 0, never below.
    pub fn consistency_score(records: &[SleepRecord]) -> f64 {
        if records.len() < Self::MIN_CONSISTENCY_RECORDS {
            return 0.0;
        }

        let hours = records.iter().map(|r| r.hours).collect::<Vec<_>>();
        let variance = population_variance(&hours);

        (100.0 - Self::VARIANCE_PENALTY * variance).clamp(0.0, 100.0)
    }

    /// Classifies how consistency moved by scoring the newer and older halves
    /// of a most-recent-first list independently.
    pub fn consistency_trend(records: &[SleepRecord]) -> ConsistencyTrend {
        if records.len() < Self::MIN_TREND_RECORDS {
            return ConsistencyTrend::Stable;
        }

        let (recent, older) = records.split_at(records.len() / 2);
        let recent_score = Self::consistency_score(recent);
        let older_score = Self::consistency_score(older);

        if recent_score > older_score + Self::TREND_DEAD_BAND {
            ConsistencyTrend::Improving
        } else if recent_score < older_score - Self::TREND_DEAD_BAND {
            ConsistencyTrend::Declining
        } else {
            ConsistencyTrend::Stable
        }
    }

    /// Quality-weighted average duration over records the caller has already
    /// restricted to high-quality nights.
    ///
    /// Too few records, or a zero total weight (possible when the caller skips
    /// the quality filter), falls back to [`Self::DEFAULT_OPTIMAL_HOURS`]
    /// instead of dividing by zero.
    pub fn optimal_sleep_hours(records: &[SleepRecord]) -> f64 {
        if records.len() < Self::MIN_OPTIMAL_RECORDS {
            return Self::DEFAULT_OPTIMAL_HOURS;
        }

        let total_weight = records.iter().map(SleepRecord::rating).sum::<f64>();
        if total_weight == 0.0 {
            return Self::DEFAULT_OPTIMAL_HOURS;
        }

        let weighted = records.iter().map(|r| r.hours * r.rating()).sum::<f64>();
        round_tenths(weighted / total_weight)
    }
}

impl Display for SleepSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Avg sleep: {:.1}h\nAvg quality: {:.1} ({})\nConsistency: {}/100 ({})\nOptimal sleep: {:.1}h",
            self.total_sleep_hours,
            self.average_quality,
            self.quality_level,
            self.consistency,
            self.consistency_trend,
            self.optimal_hours,
        ))
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap() + chrono::Days::new(u64::from(n))
    }

    /// Builds records so that index 0 is the most recent night.
    fn records(specs: &[(f64, Option<u8>)]) -> Vec<SleepRecord> {
        specs
            .iter()
            .enumerate()
            .map(|(i, &(hours, quality))| SleepRecord {
                date: day((specs.len() - i) as u32),
                hours,
                quality,
                notes: None,
            })
            .collect()
    }

    #[test]
    fn quality_level_boundaries() {
        assert_eq!(QualityLevel::from_score(3.0), QualityLevel::Poor);
        assert_eq!(QualityLevel::from_score(3.01), QualityLevel::Fair);
        assert_eq!(QualityLevel::from_score(5.0), QualityLevel::Fair);
        assert_eq!(QualityLevel::from_score(5.01), QualityLevel::Good);
        assert_eq!(QualityLevel::from_score(8.0), QualityLevel::Good);
        assert_eq!(QualityLevel::from_score(8.01), QualityLevel::Excellent);
    }

    #[test]
    fn consistency_requires_three_records() {
        let recs = records(&[(8.0, Some(8)), (8.0, Some(8))]);
        assert_eq!(SleepAnalyzer::consistency_score(&recs), 0.0);
    }

    #[test]
    fn identical_hours_score_full_consistency() {
        let recs = records(&[(7.0, Some(6)); 10]);
        assert_eq!(SleepAnalyzer::consistency_score(&recs), 100.0);
    }

    #[test]
    fn extreme_variance_saturates_at_zero() {
        let recs = records(&[(1.0, None), (12.0, None), (2.0, None), (11.0, None)]);
        assert_eq!(SleepAnalyzer::consistency_score(&recs), 0.0);
    }

    #[test]
    fn trend_requires_five_records() {
        let recs = records(&[(8.0, None), (4.0, None), (8.0, None), (4.0, None)]);
        assert_eq!(
            SleepAnalyzer::consistency_trend(&recs),
            ConsistencyTrend::Stable
        );
    }

    #[test]
    fn steadier_recent_half_reads_as_improving() {
        // Newer half perfectly regular, older half all over the place.
        let recs = records(&[
            (8.0, None),
            (8.0, None),
            (8.0, None),
            (9.5, None),
            (6.0, None),
            (8.5, None),
            (5.5, None),
        ]);
        assert_eq!(
            SleepAnalyzer::consistency_trend(&recs),
            ConsistencyTrend::Improving
        );
    }

    #[test]
    fn jittery_recent_half_reads_as_declining() {
        let recs = records(&[
            (9.5, None),
            (6.0, None),
            (8.5, None),
            (8.0, None),
            (8.0, None),
            (8.0, None),
            (8.0, None),
        ]);
        assert_eq!(
            SleepAnalyzer::consistency_trend(&recs),
            ConsistencyTrend::Declining
        );
    }

    #[test]
    fn consistency_score_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let specs: Vec<(f64, Option<u8>)> = (0..rng.random_range(3..20))
                .map(|_| (rng.random_range(0.0..16.0), None))
                .collect();
            let score = SleepAnalyzer::consistency_score(&records(&specs));
            assert!((0.0..=100.0).contains(&score), "score out of range: {score}");
        }
    }

    #[test]
    fn small_gap_stays_inside_dead_band() {
        // Both halves identical -> equal scores -> stable.
        let recs = records(&[(7.0, None); 8]);
        assert_eq!(
            SleepAnalyzer::consistency_trend(&recs),
            ConsistencyTrend::Stable
        );
    }

    #[test]
    fn optimal_hours_needs_five_records() {
        let recs = records(&[(8.0, Some(9)); 4]);
        assert_eq!(
            SleepAnalyzer::optimal_sleep_hours(&recs),
            SleepAnalyzer::DEFAULT_OPTIMAL_HOURS
        );
    }

    #[test]
    fn optimal_hours_weights_by_rating() {
        // 9.0h at weight 10 pulls the estimate above the plain mean.
        let recs = records(&[
            (9.0, Some(10)),
            (7.0, Some(8)),
            (7.0, Some(8)),
            (7.0, Some(8)),
            (7.0, Some(8)),
        ]);
        // (90 + 56*4) / 42 = 7.476... -> 7.5
        assert_eq!(SleepAnalyzer::optimal_sleep_hours(&recs), 7.5);
    }

    #[test]
    fn optimal_hours_guards_zero_weight() {
        // An unfiltered caller can pass unrated records; the weight sum is 0
        // and the default must come back instead of NaN.
        let recs = records(&[(7.0, None); 6]);
        assert_eq!(
            SleepAnalyzer::optimal_sleep_hours(&recs),
            SleepAnalyzer::DEFAULT_OPTIMAL_HOURS
        );
    }

    #[test]
    fn empty_log_yields_default_summary() {
        let summary = SleepAnalyzer::new(Vec::new()).summary();
        assert_eq!(summary, SleepSummary::default());
        assert_eq!(summary.optimal_hours, 8.0);
        assert_eq!(summary.quality_level, QualityLevel::Poor);
    }

    #[test]
    fn two_record_log() {
        let summary = SleepAnalyzer::new(records(&[(8.0, Some(8)), (6.0, Some(6))])).summary();
        assert_eq!(summary.consistency, 0);
        assert_eq!(summary.consistency_trend, ConsistencyTrend::Stable);
        assert_eq!(summary.optimal_hours, 8.0);
        assert_eq!(summary.total_sleep_hours, 7.0);
    }

    #[test]
    fn week_of_typical_nights() {
        let recs = records(&[
            (8.0, Some(9)),
            (7.0, Some(8)),
            (6.0, Some(5)),
            (8.0, Some(9)),
            (7.0, Some(7)),
            (5.0, Some(4)),
            (8.0, Some(8)),
        ]);
        let summary = SleepAnalyzer::new(recs).summary();

        assert_eq!(summary.total_sleep_hours, 7.0);
        assert_eq!(summary.average_quality, 7.1);
        assert_eq!(summary.quality_level, QualityLevel::Good);
        assert_eq!(summary.consistency, 77);
        assert_eq!(summary.consistency_trend, ConsistencyTrend::Improving);
        // Only 4 nights rated above the cutoff -> default target.
        assert_eq!(summary.optimal_hours, 8.0);
    }

    #[test]
    fn ten_identical_nights() {
        let summary = SleepAnalyzer::new(records(&[(7.0, Some(8)); 10])).summary();
        assert_eq!(summary.consistency, 100);
        assert_eq!(summary.consistency_trend, ConsistencyTrend::Stable);
        assert_eq!(summary.total_sleep_hours, 7.0);
        assert_eq!(summary.average_quality, 8.0);
        assert_eq!(summary.quality_level, QualityLevel::Good);
        assert_eq!(summary.optimal_hours, 7.0);
    }

    #[test]
    fn window_ignores_older_records() {
        // Seven identical recent nights, then ancient outliers that only the
        // trend and target may see.
        let mut specs = vec![(7.0, Some(8)); 7];
        specs.extend([(2.0, Some(1)), (13.0, Some(1))]);
        let summary = SleepAnalyzer::new(records(&specs)).summary();

        assert_eq!(summary.total_sleep_hours, 7.0);
        assert_eq!(summary.average_quality, 8.0);
        assert_eq!(summary.consistency, 100);
    }

    #[test]
    fn unrated_nights_drag_average_quality_down() {
        let recs = records(&[(8.0, Some(8)), (8.0, None), (8.0, Some(8)), (8.0, None)]);
        let summary = SleepAnalyzer::new(recs).summary();
        assert_eq!(summary.average_quality, 4.0);
        assert_eq!(summary.quality_level, QualityLevel::Fair);
    }

    #[test]
    fn input_order_does_not_matter() {
        let sorted = records(&[
            (8.0, Some(9)),
            (7.0, Some(8)),
            (6.0, Some(5)),
            (8.0, Some(9)),
            (7.0, Some(7)),
        ]);
        let mut shuffled = sorted.clone();
        shuffled.reverse();
        shuffled.swap(0, 2);

        assert_eq!(
            SleepAnalyzer::new(sorted).summary(),
            SleepAnalyzer::new(shuffled).summary()
        );
    }

    #[test]
    fn summary_is_idempotent() {
        let analyzer = SleepAnalyzer::new(records(&[
            (8.0, Some(9)),
            (7.5, Some(8)),
            (6.0, Some(5)),
            (8.0, Some(9)),
            (7.0, Some(7)),
            (5.0, Some(4)),
        ]));
        assert_eq!(analyzer.summary(), analyzer.summary());
    }

    #[test]
    fn summary_serializes_camel_case() {
        let summary = SleepAnalyzer::new(records(&[(7.0, Some(8)); 10])).summary();
        let json = serde_json::to_value(summary).unwrap();

        assert_eq!(json["totalSleepHours"], 7.0);
        assert_eq!(json["averageQuality"], 8.0);
        assert_eq!(json["qualityLevel"], "good");
        assert_eq!(json["consistency"], 100);
        assert_eq!(json["consistencyTrend"], "stable");
        assert_eq!(json["optimalHours"], 7.0);
    }
}
