use super::definition::AnalysisDefinition;
use crate::error::AnalysisConversionError;

/// A trait for custom data models that can be converted into a Kumitate `AnalysisDefinition`.
///
/// This is the primary extension point for making Kumitate format-agnostic. The analysis
/// usually originates from a language-model response whose exact JSON shape is owned by
/// the caller; by implementing this trait on your own response structs, you provide a
/// translation layer that allows the synthesizer to consume your format.
///
/// # Example
///
/// ```rust
/// use kumitate::prelude::*;
/// use kumitate::error::AnalysisConversionError;
///
/// // 1. Define your custom struct for parsing your format.
/// struct MyLlmResponse {
///     steps: Vec<String>,
/// }
///
/// // 2. Implement `IntoAnalysis` for it.
/// impl IntoAnalysis for MyLlmResponse {
///     fn into_analysis(self) -> Result<AnalysisDefinition, AnalysisConversionError> {
///         if self.steps.is_empty() {
///             return Err(AnalysisConversionError::ValidationError(
///                 "response contained no automatable steps".to_string(),
///             ));
///         }
///         Ok(AnalysisDefinition {
///             actions: self.steps,
///             ..Default::default()
///         })
///     }
/// }
/// ```
pub trait IntoAnalysis {
    /// Consumes the object and converts it into a Kumitate-compatible analysis.
    fn into_analysis(self) -> Result<AnalysisDefinition, AnalysisConversionError>;
}
