use axum::http::StatusCode;
use standard_error::{Interpolate, StandardError, Status};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobError {
    #[error("job {0} not found")]
    NotFound(i32),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

pub type JobResult<T> = core::result::Result<T, JobError>;

impl JobError {
    /// Maps the repository outcome onto the service error returned to callers.
    /// Store failures keep their original conversion.
    pub fn into_standard(self) -> StandardError {
        match self {
            JobError::NotFound(id) => StandardError::new("ERR-JOB-001")
                .interpolate_err(id.to_string())
                .code(StatusCode::NOT_FOUND),
            JobError::BadRequest(reason) => StandardError::new("ERR-JOB-002")
                .interpolate_err(reason)
                .code(StatusCode::BAD_REQUEST),
            JobError::Store(e) => e.into(),
        }
    }
}
