use std::fmt;

/// The complete, canonical description of an analyzed manual workflow, ready for synthesis.
/// This is the target structure for any custom data model conversion (e.g. an LLM response).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisDefinition {
    /// Events that start the manual process. Informational only for synthesis.
    pub triggers: Vec<String>,
    /// Automatable steps, in pipeline order. Order is semantically meaningful.
    pub actions: Vec<String>,
    /// Suggested tools or integrations. Informational only for synthesis.
    pub recommended_tools: Vec<String>,
    /// Overall automation potential (0-100), if the analyst provided one.
    pub automation_score: Option<u32>,
    /// Analyst estimate of monthly hours reclaimed by automation.
    pub estimated_hours_saved_per_month: Option<f64>,
    /// Implementation risk as judged by the analyst.
    pub risk_level: Option<RiskLevel>,
    /// Free-form implementation notes.
    pub implementation_notes: Option<String>,
}

/// Implementation risk level attached to an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

/// The business submitting a workflow for analysis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessProfile {
    /// Display name, used to title the synthesized workflow.
    pub business_name: String,
    /// Comma-or-prose list of tools currently in use. Only consulted for
    /// trigger-type inference via case-insensitive substring search.
    pub tools_used: String,
}
