//! Submission lifecycle of the sign-up form

/// Where the form is in its submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Waiting for input
    #[default]
    Idle,
    /// Values handed to the backend, waiting for completion
    Submitting,
    /// Values accepted and cleared; success toast is showing
    Succeeded,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Submitting => "Submitting",
            Self::Succeeded => "Succeeded",
        }
    }
}
