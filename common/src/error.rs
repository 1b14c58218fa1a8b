use thiserror::Error;

/// Failure taxonomy for the client.
///
/// Every variant carries the human-readable message that is shown inline or
/// as a toast, verbatim, at the call site that observed the failure. Profile
/// read failures are the one deliberate exception to surfacing: they route
/// to onboarding instead of an error line.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// Bad credentials, sign-up conflicts, or an unreachable auth endpoint.
    #[error("{0}")]
    Auth(String),
    /// Profile row read/write failure.
    #[error("{0}")]
    Profile(String),
    /// Blob write or daily-record upsert/patch failure.
    #[error("{0}")]
    Upload(String),
    /// Local input validation; never involves a collaborator round-trip.
    #[error("{0}")]
    Validation(String),
}
