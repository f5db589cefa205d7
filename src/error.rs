use thiserror::Error;

/// Errors that can occur when validating ROI calculator inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoiError {
    #[error("Input '{field}' must be non-negative, but was {value}")]
    NegativeInput { field: &'static str, value: f64 },

    #[error("Input '{field}' must be a finite number")]
    NonFiniteInput { field: &'static str },
}

/// Errors that can occur when converting a custom user format into a Kumitate `AnalysisDefinition`.
#[derive(Error, Debug, Clone)]
pub enum AnalysisConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),
}

/// Errors that can occur when saving or loading a synthesis bundle artifact.
#[derive(Error, Debug, Clone)]
pub enum ArtifactError {
    #[error("{0}")]
    Generic(String),
}
