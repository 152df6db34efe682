//! Per-request retry state
//!
//! Every originating request starts at [`Attempt::Initial`]. A 401 on the
//! first try moves it to [`Attempt::Retried`], which allows exactly one
//! refresh and one re-issue. Any other failure, or any failure after the
//! retry, ends in [`Attempt::Failed`].

use super::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    Initial,
    Retried,
    Failed,
}

impl Attempt {
    /// State after the current try failed with `error`
    pub fn advance(self, error: &ClientError) -> Self {
        match self {
            Self::Initial if error.is_unauthorized() => Self::Retried,
            _ => Self::Failed,
        }
    }

    pub fn should_retry(self) -> bool {
        self == Self::Retried
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unauthorized() -> ClientError {
        ClientError::AuthenticationFailed("token expired".into())
    }

    #[test]
    fn test_first_unauthorized_allows_retry() {
        let next = Attempt::Initial.advance(&unauthorized());
        assert_eq!(next, Attempt::Retried);
        assert!(next.should_retry());
    }

    #[test]
    fn test_second_unauthorized_fails() {
        let next = Attempt::Retried.advance(&unauthorized());
        assert_eq!(next, Attempt::Failed);
        assert!(!next.should_retry());
    }

    #[test]
    fn test_other_errors_fail_immediately() {
        let errors = [
            ClientError::Forbidden("nope".into()),
            ClientError::NotFound("missing".into()),
            ClientError::ServerError {
                status: 500,
                message: "boom".into(),
            },
        ];
        for error in &errors {
            assert_eq!(Attempt::Initial.advance(error), Attempt::Failed);
        }
    }

    #[test]
    fn test_failed_is_terminal() {
        assert_eq!(Attempt::Failed.advance(&unauthorized()), Attempt::Failed);
    }
}
