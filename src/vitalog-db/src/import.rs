use std::fmt;
use std::path::Path;

use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Deserialize;
use vitalog_types::SleepRecord;

use crate::DatabaseHandler;

/// Row shape for sleep exports: `date,hours,quality,notes`.
#[derive(Debug, Deserialize)]
struct SleepCsvRow {
    date: NaiveDate,
    hours: f64,
    quality: Option<u8>,
    notes: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub imported: usize,
    pub skipped: usize,
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Imported {} records ({} skipped)",
            self.imported, self.skipped
        )
    }
}

fn bar_style() -> ProgressStyle {
    ProgressStyle::with_template("{prefix:>12} [{wide_bar:.cyan/dim}] {pos}/{len}")
        .unwrap()
        .progress_chars("=>-")
}

impl DatabaseHandler {
    /// Imports a sleep CSV for one user. Rows that fail to parse or validate
    /// are counted and skipped rather than aborting the rest of the file.
    pub async fn import_sleep_csv(
        &self,
        user_id: &str,
        path: &Path,
    ) -> anyhow::Result<ImportReport> {
        let mut reader = csv::Reader::from_path(path)?;
        let rows = reader
            .deserialize::<SleepCsvRow>()
            .collect::<Vec<_>>();

        let pb = ProgressBar::new(rows.len() as u64);
        pb.set_style(bar_style());
        pb.set_prefix("sleep import");

        let mut report = ImportReport::default();
        for row in rows {
            let record = row
                .ok()
                .and_then(|r| SleepRecord::new(r.date, r.hours, r.quality, r.notes).ok());

            match record {
                Some(record) => {
                    self.upsert_sleep_record(user_id, record).await?;
                    report.imported += 1;
                }
                None => report.skipped += 1,
            }
            pb.inc(1);
        }
        pb.finish();

        Ok(report)
    }
}
