use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("{self:?}")]
pub enum RecordError {
    InvalidHours(f64),
    QualityOutOfRange(u8),
    SessionEndsBeforeStart,
}
