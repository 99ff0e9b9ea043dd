//! Pure operations on one date's entry sequence
//!
//! Every editor mutates the itinerary by producing a full replacement
//! sequence for a single date and handing it to the store. These functions
//! are the only sanctioned ways to produce one; each preserves the gap-free
//! {1..N} position invariant.

use crate::entry::{ActivityEntry, EntryDetails};
use crate::error::ModelError;
use chrono::NaiveDate;

/// Append a new entry at the end of the sequence
///
/// The new entry receives `position = current.len() + 1`, keeping positions
/// gap-free.
#[must_use]
pub fn append(
    current: &[ActivityEntry],
    date: NaiveDate,
    details: EntryDetails,
) -> Vec<ActivityEntry> {
    let position = u32::try_from(current.len()).unwrap_or(u32::MAX).saturating_add(1);
    let mut next = current.to_vec();
    next.push(ActivityEntry::new(position, date, details));
    next
}

/// Replace the entry at `position` with new details
///
/// Position and date are preserved; this is the only place identity is
/// carried across an edit. Sequence length is unchanged.
///
/// # Errors
/// Returns [`ModelError::PositionNotFound`] if no entry matches.
pub fn update(
    current: &[ActivityEntry],
    date: NaiveDate,
    position: u32,
    details: EntryDetails,
) -> Result<Vec<ActivityEntry>, ModelError> {
    if !current.iter().any(|e| e.position == position) {
        return Err(ModelError::PositionNotFound { date, position });
    }

    Ok(current
        .iter()
        .map(|e| {
            if e.position == position {
                ActivityEntry::new(e.position, e.date, details.clone())
            } else {
                e.clone()
            }
        })
        .collect())
}

/// Remove the entry at `position` and renumber survivors to 1..N
///
/// Renumbering closes the gap so the position invariant holds for the
/// shorter sequence. Positions are therefore not stable identifiers across
/// a delete.
///
/// # Errors
/// Returns [`ModelError::PositionNotFound`] if no entry matches.
pub fn remove(
    current: &[ActivityEntry],
    date: NaiveDate,
    position: u32,
) -> Result<Vec<ActivityEntry>, ModelError> {
    if !current.iter().any(|e| e.position == position) {
        return Err(ModelError::PositionNotFound { date, position });
    }

    Ok(current
        .iter()
        .filter(|e| e.position != position)
        .enumerate()
        .map(|(i, e)| {
            let mut kept = e.clone();
            kept.position = u32::try_from(i).unwrap_or(u32::MAX).saturating_add(1);
            kept
        })
        .collect())
}

/// Check the gap-free position invariant and date consistency for one date
///
/// # Errors
/// Returns the first violation found: [`ModelError::PositionGap`] or
/// [`ModelError::DateMismatch`].
pub fn validate(date: NaiveDate, entries: &[ActivityEntry]) -> Result<(), ModelError> {
    for (i, entry) in entries.iter().enumerate() {
        let expected = u32::try_from(i).unwrap_or(u32::MAX).saturating_add(1);
        if entry.position != expected {
            return Err(ModelError::PositionGap {
                date,
                expected,
                found: entry.position,
            });
        }
        if entry.date != date {
            return Err(ModelError::DateMismatch {
                key_date: date,
                entry_date: entry.date,
                position: entry.position,
            });
        }
    }
    Ok(())
}
