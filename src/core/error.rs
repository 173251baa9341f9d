use thiserror::Error;

pub type CycleResult<T> = Result<T, CycleError>;

/// Failure modes of a cycle analysis run.
///
/// `InvalidParameter` is raised by the entry validation, before any
/// computation begins. `NumericalDomain` is raised mid-computation when a
/// denominator or logarithm argument degenerates; no partial table is
/// returned in either case.
#[derive(Error, Debug)]
pub enum CycleError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("numerical domain error: {0}")]
    NumericalDomain(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
