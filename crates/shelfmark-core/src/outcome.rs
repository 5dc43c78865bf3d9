//! Classified results of a form submission.

/// Coarse classification of an HTTP status code returned by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Any 2xx.
    Success,
    /// 401: missing or invalid credentials.
    Unauthorized,
    /// 409: the resource already exists (duplicate email).
    Conflict,
    /// Every other status.
    Failure,
}

impl StatusClass {
    #[must_use]
    pub fn from_status(status: u16) -> Self {
        match status {
            200..=299 => Self::Success,
            401 => Self::Unauthorized,
            409 => Self::Conflict,
            _ => Self::Failure,
        }
    }
}

/// The result of one submission attempt, with the message shown to the
/// user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success { message: Option<String> },
    /// Local validation rejected the form; no request was sent.
    ValidationFailed { message: Option<String> },
    Unauthorized { message: Option<String> },
    Conflict { message: Option<String> },
    ServerError { status: u16, message: Option<String> },
    /// The request never produced a response.
    NetworkError { message: Option<String> },
}

impl SubmissionOutcome {
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message }
            | Self::ValidationFailed { message }
            | Self::Unauthorized { message }
            | Self::Conflict { message }
            | Self::ServerError { message, .. }
            | Self::NetworkError { message } => message.as_deref(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}
