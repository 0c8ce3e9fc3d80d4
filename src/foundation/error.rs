/// Convenience result type used across the crate.
pub type CubeResult<T> = Result<T, CubeError>;

/// Top-level error taxonomy for view construction and controller plumbing.
///
/// Transform math never produces errors; everything here comes from wiring
/// mistakes made by the embedding host.
#[derive(thiserror::Error, Debug)]
pub enum CubeError {
    /// Invalid construction parameters (for example both or neither item sources).
    #[error("validation error: {0}")]
    Validation(String),

    /// A page controller was used in a state that cannot honor the request.
    #[error("controller error: {0}")]
    Controller(String),

    /// Errors when serializing or deserializing options or snapshots.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from a compositor backend or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CubeError {
    /// Build a [`CubeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CubeError::Controller`] value.
    pub fn controller(msg: impl Into<String>) -> Self {
        Self::Controller(msg.into())
    }

    /// Build a [`CubeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
