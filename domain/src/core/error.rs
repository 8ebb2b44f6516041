//! Domain error types

use thiserror::Error;

/// Session-level errors
///
/// Every variant is recoverable: the action that triggered it is rejected
/// and the session state is left exactly as it was.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Invalid setup: {0}")]
    InvalidSetup(String),

    #[error("Invalid vote: {0}")]
    InvalidVote(String),

    #[error("Backlog contains no items")]
    EmptyBacklog,

    #[error("Ballot contains no numeric votes")]
    NoNumericVotes,

    #[error("No more backlog items")]
    NoMoreItems,

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

impl SessionError {
    /// Check if this error rejects a single vote (the caller can re-prompt)
    pub fn is_invalid_vote(&self) -> bool {
        matches!(self, SessionError::InvalidVote(_))
    }

    /// Check if this error signals the end of the backlog
    pub fn is_no_more_items(&self) -> bool {
        matches!(self, SessionError::NoMoreItems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_backlog_display() {
        let error = SessionError::EmptyBacklog;
        assert_eq!(error.to_string(), "Backlog contains no items");
    }

    #[test]
    fn test_invalid_vote_display_carries_context() {
        let error = SessionError::InvalidVote("it is alice's turn".to_string());
        assert_eq!(error.to_string(), "Invalid vote: it is alice's turn");
    }

    #[test]
    fn test_is_invalid_vote_check() {
        assert!(SessionError::InvalidVote("x".to_string()).is_invalid_vote());
        assert!(!SessionError::EmptyBacklog.is_invalid_vote());
        assert!(!SessionError::NoMoreItems.is_invalid_vote());
    }

    #[test]
    fn test_is_no_more_items_check() {
        assert!(SessionError::NoMoreItems.is_no_more_items());
        assert!(!SessionError::NoNumericVotes.is_no_more_items());
    }
}
