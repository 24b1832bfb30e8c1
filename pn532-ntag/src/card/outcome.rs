// pn532-ntag/src/card/outcome.rs

use crate::Error;

/// Result of a card operation in the shape handed to outer layers: either
/// the payload, or a human-readable message plus a numeric error code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Success(T),
    Failure { message: String, code: i32 },
}

impl<T> Outcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn success(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure { .. } => None,
        }
    }

    /// Failure message, `None` on success.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure { message, .. } => Some(message),
        }
    }

    /// Error code, 0 on success.
    pub fn code(&self) -> i32 {
        match self {
            Outcome::Success(_) => 0,
            Outcome::Failure { code, .. } => *code,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure { message, code } => Outcome::Failure { message, code },
        }
    }
}

impl<T> From<Error> for Outcome<T> {
    fn from(err: Error) -> Self {
        // Read/write failures report the code of the step that broke.
        let code = match &err {
            Error::ReadTagsFailed { source } | Error::WriteTagsFailed { source } => source.code(),
            other => other.code(),
        };
        Outcome::Failure {
            message: err.to_string(),
            code,
        }
    }
}

impl<T> From<crate::Result<T>> for Outcome<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(err) => err.into(),
        }
    }
}
