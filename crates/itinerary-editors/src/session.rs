//! The shared submit state machine
//!
//! Every surface drives the same transitions:
//! `Idle → Editing → Submitting → {Succeeded | Failed}`.
//! Validation failures fall back to `Editing` with field errors retained;
//! save failures land in `Failed` with the draft intact so the user can
//! resubmit. Retries are always user-initiated.

use crate::draft::EditorDraft;
use crate::validation::ValidationErrors;
use chrono::NaiveDate;
use itinerary_gateway::ItineraryGateway;
use itinerary_model::{sequence, ModelError};
use itinerary_store::{ItineraryStore, StoreError};

/// Whether a submission appends a new entry or replaces an existing one
///
/// Explicit, rather than inferred from the presence of initial data: a
/// present-but-empty prefill can no longer flip a create into an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    /// Append at the end of the date's sequence
    Create,
    /// Replace the entry holding this position
    Update { position: u32 },
}

/// Observable state of one editor surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Sheet open, nothing touched yet
    Idle,
    /// Field changes in progress (or validation sent the user back)
    Editing,
    /// Submission in flight
    Submitting,
    /// Sheet may close; draft cleared by the surface
    Succeeded,
    /// Save failed; draft retained for resubmission
    Failed,
}

/// Submission failures, per the error taxonomy
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    /// Field validation failed; nothing was sent
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// The entry being updated no longer exists at its position
    #[error("stale entry: {0}")]
    StaleEntry(#[from] ModelError),

    /// The store could not persist the replacement sequence
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One open editor surface: a date, a mode, and the submit state machine
#[derive(Debug)]
pub struct EditorSession {
    date: NaiveDate,
    mode: SubmitMode,
    state: EditorState,
    errors: ValidationErrors,
}

impl EditorSession {
    /// Open a surface in create mode for a date
    #[inline]
    #[must_use]
    pub fn create(date: NaiveDate) -> Self {
        Self {
            date,
            mode: SubmitMode::Create,
            state: EditorState::Idle,
            errors: ValidationErrors::new(),
        }
    }

    /// Open a surface in update mode for the entry at `position`
    #[inline]
    #[must_use]
    pub fn update(date: NaiveDate, position: u32) -> Self {
        Self {
            date,
            mode: SubmitMode::Update { position },
            state: EditorState::Idle,
            errors: ValidationErrors::new(),
        }
    }

    /// Record a field change
    pub fn mark_editing(&mut self) {
        self.state = EditorState::Editing;
    }

    /// Validate the draft and, if clean, submit the replacement sequence
    ///
    /// Builds the new per-date sequence from the store's current document
    /// (append for create, positional replace for update) and pushes it
    /// through [`ItineraryStore::replace_date_entries`].
    ///
    /// # Errors
    /// [`SubmitError::Validation`] leaves the session in `Editing` with the
    /// field errors retained; [`SubmitError::StaleEntry`] and
    /// [`SubmitError::Store`] leave it in `Failed` with the draft intact.
    pub async fn submit<G: ItineraryGateway, D: EditorDraft>(
        &mut self,
        store: &mut ItineraryStore<G>,
        draft: &D,
    ) -> Result<(), SubmitError> {
        let details = match draft.validate() {
            Ok(details) => details,
            Err(errors) => {
                tracing::debug!(date = %self.date, count = errors.len(), "validation failed");
                self.errors = errors.clone();
                self.state = EditorState::Editing;
                return Err(SubmitError::Validation(errors));
            }
        };
        self.errors = ValidationErrors::new();
        self.state = EditorState::Submitting;

        let Some(doc) = store.document() else {
            self.state = EditorState::Failed;
            return Err(SubmitError::Store(StoreError::NoDocument));
        };
        let current = doc.entries_for(self.date).to_vec();

        let new_sequence = match self.mode {
            SubmitMode::Create => sequence::append(&current, self.date, details),
            SubmitMode::Update { position } => {
                match sequence::update(&current, self.date, position, details) {
                    Ok(seq) => seq,
                    Err(e) => {
                        self.state = EditorState::Failed;
                        return Err(SubmitError::StaleEntry(e));
                    }
                }
            }
        };

        match store.replace_date_entries(self.date, new_sequence).await {
            Ok(_) => {
                self.state = EditorState::Succeeded;
                Ok(())
            }
            Err(e) => {
                self.state = EditorState::Failed;
                Err(SubmitError::Store(e))
            }
        }
    }

    /// The date this surface edits
    #[inline]
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Create or update
    #[inline]
    #[must_use]
    pub fn mode(&self) -> SubmitMode {
        self.mode
    }

    /// Current state-machine position
    #[inline]
    #[must_use]
    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Field errors from the last validation pass
    #[inline]
    #[must_use]
    pub fn field_errors(&self) -> &ValidationErrors {
        &self.errors
    }
}
