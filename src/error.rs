use thiserror::Error;

/// Error type for planning operations.
///
/// The taxonomy is deliberately small: planning failures ("no plan exists")
/// are ordinary values in this crate, not errors, so only genuine misuse and
/// IO surface here.
#[derive(Error, Debug)]
pub enum PlanError {
    /// No valid action sequence reaches the goal.
    #[error("No valid plan found to reach the goal")]
    NoPlanFound,
    /// Action cost must be a positive number.
    #[error("Action cost must be positive")]
    InvalidActionCost,
    /// Wrapper around IO errors from visualization output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for planning operations.
pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_no_plan_found_display() {
        let err = PlanError::NoPlanFound;
        assert_eq!(format!("{}", err), "No valid plan found to reach the goal");
    }

    #[test]
    fn test_invalid_action_cost_display() {
        let err = PlanError::InvalidActionCost;
        assert_eq!(format!("{}", err), "Action cost must be positive");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: PlanError = io.into();
        assert!(matches!(err, PlanError::Io(_)));
    }

    #[test]
    fn test_error_trait() {
        let err = PlanError::NoPlanFound;
        let _ = err.source(); // Should be None
    }
}
