#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Network,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            ViewError::Network => "Could not reach the question service. Please try again.",
            ViewError::Unknown => "Something went wrong. Please try again.",
        }
    }
}

/// Progress of a one-shot background request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestState {
    Idle,
    Pending,
    Ready,
    Error(ViewError),
}

impl RequestState {
    #[must_use]
    pub fn is_pending(self) -> bool {
        matches!(self, RequestState::Pending)
    }

    #[must_use]
    pub fn error(self) -> Option<ViewError> {
        match self {
            RequestState::Error(err) => Some(err),
            _ => None,
        }
    }
}
