//! Field-level validation feedback
//!
//! Validation failures are form feedback, not system errors: they stay on
//! the client, are shown inline next to the offending field, and never
//! reach the gateway.

/// The form field an error is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Title,
    StartTime,
    EndTime,
    TransportMode,
    DepartureLocation,
    ArrivalLocation,
    DepartureTime,
    Content,
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FieldId::Title => "title",
            FieldId::StartTime => "startTime",
            FieldId::EndTime => "endTime",
            FieldId::TransportMode => "transportMode",
            FieldId::DepartureLocation => "departureLocation",
            FieldId::ArrivalLocation => "arrivalLocation",
            FieldId::DepartureTime => "departureTime",
            FieldId::Content => "content",
        };
        write!(f, "{name}")
    }
}

/// One inline error message for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field the message belongs to
    pub field: FieldId,
    /// User-facing message
    pub message: String,
}

impl FieldError {
    /// Create a field error
    #[inline]
    #[must_use]
    pub fn new(field: FieldId, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }

    /// The standard "required" message for a field
    #[inline]
    #[must_use]
    pub fn required(field: FieldId) -> Self {
        Self::new(field, format!("{field} is required"))
    }
}

/// Collection of field errors from one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Empty collection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Record a missing-required-field error
    pub fn push_required(&mut self, field: FieldId) {
        self.errors.push(FieldError::required(field));
    }

    /// Whether the pass found no errors
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of errors
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// First message attached to a field, if any
    #[must_use]
    pub fn for_field(&self, field: FieldId) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// All recorded errors
    #[inline]
    #[must_use]
    pub fn all(&self) -> &[FieldError] {
        &self.errors
    }

    /// Turn the pass into a result: `Ok(value)` when clean
    ///
    /// # Errors
    /// Returns `self` when any field error was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, e) in self.errors.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", e.field, e.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_lookup_returns_first_message() {
        let mut errors = ValidationErrors::new();
        errors.push_required(FieldId::Title);
        errors.push(FieldError::new(FieldId::Title, "second"));

        assert_eq!(errors.for_field(FieldId::Title), Some("title is required"));
        assert_eq!(errors.for_field(FieldId::Content), None);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn into_result_ok_when_clean() {
        let errors = ValidationErrors::new();
        assert_eq!(errors.into_result(7).unwrap(), 7);
    }

    #[test]
    fn into_result_err_when_dirty() {
        let mut errors = ValidationErrors::new();
        errors.push_required(FieldId::DepartureLocation);
        let err = errors.into_result(()).unwrap_err();
        assert_eq!(err.len(), 1);
        assert!(err.to_string().contains("departureLocation"));
    }
}
