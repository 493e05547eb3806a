/// Convenience result type used across Chronos.
pub type ChronosResult<T> = Result<T, ChronosError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum ChronosError {
    /// Rejected request parameter (year out of range, unknown device/theme/shape, bad date).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The rasterizer rejected the scene or could not allocate the target.
    #[error("render failure: {0}")]
    Render(String),

    /// A required resource (font, quote file) could not be located.
    #[error("resource missing: {0}")]
    ResourceMissing(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ChronosError {
    /// Build a [`ChronosError::InvalidParameter`] value.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`ChronosError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ChronosError::ResourceMissing`] value.
    pub fn resource_missing(msg: impl Into<String>) -> Self {
        Self::ResourceMissing(msg.into())
    }

    /// Build a [`ChronosError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for errors caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
