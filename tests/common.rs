//! Common test utilities for building analyses and profiles.
use kumitate::prelude::*;

/// Creates a simple analysis with one action of each classifiable category,
/// in pipeline order.
#[allow(dead_code)]
pub fn order_processing_analysis() -> AnalysisDefinition {
    AnalysisDefinition {
        triggers: vec!["Customer places an order".to_string()],
        actions: vec![
            "Save order to database".to_string(),
            "Update inventory spreadsheet".to_string(),
            "Email confirmation to customer".to_string(),
            "Generate invoice".to_string(),
            "Charge the customer".to_string(),
            "Assign ticket to agent".to_string(),
        ],
        recommended_tools: vec!["n8n".to_string(), "Zapier".to_string()],
        ..Default::default()
    }
}

/// Creates an analysis with a caller-chosen action list.
#[allow(dead_code)]
pub fn analysis_with_actions(actions: &[&str]) -> AnalysisDefinition {
    AnalysisDefinition {
        actions: actions.iter().map(|a| a.to_string()).collect(),
        ..Default::default()
    }
}

/// Creates a profile with the given tool list.
#[allow(dead_code)]
pub fn profile_with_tools(tools_used: &str) -> BusinessProfile {
    BusinessProfile {
        business_name: "Acme Fulfilment".to_string(),
        tools_used: tools_used.to_string(),
    }
}
