//! # Kumitate - Workflow Synthesis and ROI Projection Engine
//!
//! **Kumitate** turns a natural-language analysis of a manual business workflow into a
//! skeletal automation-platform workflow graph, and projects the return on investment of
//! automating it. Both components are pure, stateless functions of their inputs: the
//! synthesizer is an ordered rule table over substring matches, the calculator is a
//! handful of deterministic formulas.
//!
//! ## Core Workflow
//!
//! The engine is designed to be format-agnostic. It operates on a canonical internal
//! model of an "analysis definition." The primary workflow is:
//!
//! 1.  **Obtain an Analysis**: Have a language model (or any other source) describe the
//!     triggers and automatable steps of a manual workflow, and parse that response into
//!     your own Rust structs.
//! 2.  **Convert to Kumitate's Model**: Implement the `IntoAnalysis` trait for your structs
//!     to provide a translation layer into Kumitate's `AnalysisDefinition`.
//! 3.  **Synthesize**: Use `Synthesizer::builder` (or the free `synthesize` function) to
//!     turn the analysis plus a `BusinessProfile` into a `WorkflowGraph` ready for import
//!     into an n8n-compatible automation platform.
//! 4.  **Project ROI**: Validate the three business scalars with `RoiInputs::new` and
//!     derive an `RoiReport`.
//!
//! ## Quick Start
//!
//! ```rust
//! use kumitate::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // An analysis normally comes from an LLM via `IntoAnalysis`; built
//!     // directly here for brevity.
//!     let analysis = AnalysisDefinition {
//!         triggers: vec!["New order received".to_string()],
//!         actions: vec![
//!             "Save order to database".to_string(),
//!             "Send confirmation email".to_string(),
//!         ],
//!         recommended_tools: vec!["n8n".to_string()],
//!         ..Default::default()
//!     };
//!     let profile = BusinessProfile {
//!         business_name: "Acme Fulfilment".to_string(),
//!         tools_used: "WhatsApp, Google Sheets".to_string(),
//!     };
//!
//!     // Synthesize the automation graph: trigger first, then one node per action.
//!     let graph = synthesize(&analysis, &profile);
//!     assert_eq!(graph.name, "Acme Fulfilment Automated Workflow");
//!     assert_eq!(graph.nodes.len(), 3);
//!     assert!(graph.is_linear_chain());
//!
//!     // The graph serializes as an n8n import document.
//!     let json = graph.to_import_json()?;
//!     assert!(json.contains("n8n-nodes-base.webhook"));
//!
//!     // Project the ROI of automating the workflow.
//!     let inputs = RoiInputs::new(40.0, 50.0, 10)?;
//!     let report = inputs.calculate();
//!     assert_eq!(report.monthly_savings, 2000.0);
//!     assert_eq!(report.break_even_months, Some(3));
//!
//!     Ok(())
//! }
//! ```

pub mod analysis;
pub mod catalog;
pub mod error;
pub mod prelude;
pub mod roi;
pub mod synth;
pub mod workflow;
