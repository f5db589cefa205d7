//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the kumitate crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use kumitate::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Pick a built-in scenario and synthesize a workflow for it.
//! let template = kumitate::catalog::builtin_templates()
//!     .first()
//!     .expect("catalog is never empty");
//!
//! let analysis = AnalysisDefinition {
//!     actions: vec!["Save order to database".to_string()],
//!     ..Default::default()
//! };
//! let graph = synthesize(&analysis, &template.profile());
//! let report = template.roi_inputs()?.calculate();
//!
//! println!("{}: {:?}", graph.name, report);
//! # Ok(())
//! # }
//! ```

// Core synthesis and projection
pub use crate::roi::{RoiInputs, RoiReport};
pub use crate::synth::{Synthesizer, SynthesizerBuilder, synthesize};

// Analysis model and conversion
pub use crate::analysis::{AnalysisDefinition, BusinessProfile, IntoAnalysis, RiskLevel};

// Workflow graph types
pub use crate::workflow::{
    Connection, NodeKind, Position, SynthesisBundle, WorkflowGraph, WorkflowNode,
    WorkflowSettings,
};

// Node templates (for custom rules)
pub use crate::synth::templates::NodeTemplate;

// Scenario catalog
pub use crate::catalog::ScenarioTemplate;

// Error types
pub use crate::error::{AnalysisConversionError, ArtifactError, RoiError};

// Standard library re-exports commonly used with this crate
pub use std::collections::HashMap;

// Result type alias for convenience. The error type defaults to a boxed
// error but stays overridable so `Result<T, RoiError>` and friends remain
// legal under a glob import of this module.
pub type Result<T, E = Box<dyn std::error::Error>> = std::result::Result<T, E>;
