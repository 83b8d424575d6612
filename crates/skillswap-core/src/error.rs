/// Rejected user input. Always recoverable; the caller shows it as a notice.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("no time slot selected")]
    NoSelection,

    #[error("time slot {0} is not available")]
    SlotUnavailable(String),

    #[error("unknown time slot: {0}")]
    UnknownSlot(String),

    #[error("passwords do not match")]
    PasswordMismatch,

    #[error("{0} is required")]
    MissingField(&'static str),
}

/// A call made outside the operation's valid domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PreconditionViolation {
    #[error("index {index} out of range for carousel of {len} items")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("carousel requires at least one item")]
    EmptyCarousel,
}

/// Errors specific to skillswap-core.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Precondition(#[from] PreconditionViolation),

    #[error("invalid configuration: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages() {
        assert_eq!(
            ValidationError::SlotUnavailable("Today-4:00 PM".into()).to_string(),
            "time slot Today-4:00 PM is not available"
        );
        assert_eq!(
            ValidationError::MissingField("email").to_string(),
            "email is required"
        );
    }

    #[test]
    fn core_error_wraps_precondition() {
        let err: CoreError = PreconditionViolation::IndexOutOfRange { index: 9, len: 6 }.into();
        assert!(matches!(err, CoreError::Precondition(_)));
        assert_eq!(
            err.to_string(),
            "index 9 out of range for carousel of 6 items"
        );
    }
}
