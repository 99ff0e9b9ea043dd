//! Model-level errors

use chrono::NaiveDate;

/// Errors raised by sequence operations and document validation
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    /// No entry with the given position exists in the date's sequence
    #[error("no entry at position {position} on {date}")]
    PositionNotFound { date: NaiveDate, position: u32 },

    /// Positions within a date are not exactly {{1..N}}
    #[error("positions on {date} are not gap-free: expected {expected}, found {found}")]
    PositionGap {
        date: NaiveDate,
        expected: u32,
        found: u32,
    },

    /// An entry's denormalized date disagrees with its containing key
    #[error("entry at position {position} carries date {entry_date}, expected {key_date}")]
    DateMismatch {
        key_date: NaiveDate,
        entry_date: NaiveDate,
        position: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_error_display() {
        let err = ModelError::PositionNotFound {
            date: "2025-06-01".parse().unwrap(),
            position: 3,
        };
        assert!(err.to_string().contains("position 3"));
    }
}
