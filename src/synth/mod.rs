//! Rule-based workflow graph synthesis.
//!
//! The synthesizer maps an [`AnalysisDefinition`] plus a [`BusinessProfile`]
//! onto a linear automation graph: one trigger node (classified from the
//! profile's tool list) followed by one action node per analyzed step. All
//! classification happens through ordered rule tables in [`rules`]; the
//! synthesizer itself only assembles nodes and wires consecutive pairs.

use crate::analysis::{AnalysisDefinition, BusinessProfile};
use crate::workflow::{Connection, Position, WorkflowGraph, WorkflowNode, WorkflowSettings};
use itertools::Itertools;

pub mod rules;
pub mod templates;

use templates::NodeTemplate;

/// Horizontal spacing between consecutive nodes in the layout hint.
const NODE_SPACING_X: i64 = 250;
/// Fixed vertical placement for the single-row chain layout.
const NODE_ROW_Y: i64 = 300;

/// Tags attached to every synthesized graph, marking it machine-generated.
const DEFAULT_TAGS: [&str; 2] = ["automated", "ai-generated"];

/// A caller-supplied action rule with owned keywords, evaluated before the
/// built-in [`rules::ACTION_RULES`] table.
#[derive(Debug, Clone)]
struct CustomRule {
    keywords: Vec<String>,
    template: NodeTemplate,
}

pub struct Synthesizer {
    analysis: AnalysisDefinition,
    profile: BusinessProfile,
    custom_rules: Vec<CustomRule>,
    tags: Vec<String>,
}

pub struct SynthesizerBuilder {
    analysis: AnalysisDefinition,
    profile: BusinessProfile,
    custom_rules: Vec<CustomRule>,
    tags: Vec<String>,
}

impl SynthesizerBuilder {
    pub fn new(analysis: AnalysisDefinition, profile: BusinessProfile) -> Self {
        Self {
            analysis,
            profile,
            custom_rules: Vec::new(),
            tags: DEFAULT_TAGS.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Registers an action rule checked ahead of the built-in table. Rules
    /// added first are checked first.
    pub fn with_action_rule<I, S>(mut self, keywords: I, template: NodeTemplate) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_rules.push(CustomRule {
            keywords: keywords.into_iter().map(|k| k.into().to_lowercase()).collect(),
            template,
        });
        self
    }

    /// Replaces the default tag set on the synthesized graph.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(|t| t.into()).collect();
        self
    }

    pub fn build(self) -> Synthesizer {
        Synthesizer {
            analysis: self.analysis,
            profile: self.profile,
            custom_rules: self.custom_rules,
            tags: self.tags,
        }
    }
}

impl Synthesizer {
    pub fn builder(analysis: AnalysisDefinition, profile: BusinessProfile) -> SynthesizerBuilder {
        SynthesizerBuilder::new(analysis, profile)
    }

    /// Synthesizes the workflow graph. Pure: equal inputs always produce an
    /// equal graph, and the returned graph owns all of its data.
    pub fn synthesize(&self) -> WorkflowGraph {
        let mut nodes = Vec::with_capacity(self.analysis.actions.len() + 1);

        let trigger = rules::classify_trigger(&self.profile.tools_used);
        nodes.push(self.instantiate(trigger, 0, trigger.label().to_string()));

        for (index, action) in self.analysis.actions.iter().enumerate() {
            let template = self.classify_with_custom_rules(action);
            nodes.push(self.instantiate(template, index + 1, action.clone()));
        }

        let connections: Vec<Connection> = nodes
            .iter()
            .map(|node| node.id.clone())
            .tuple_windows()
            .map(|(source, target)| Connection { source, target })
            .collect();

        WorkflowGraph {
            name: format!("{} Automated Workflow", self.profile.business_name),
            nodes,
            connections,
            active: false,
            settings: WorkflowSettings::default(),
            tags: self.tags.clone(),
        }
    }

    /// Custom rules first, then the built-in ordered table.
    fn classify_with_custom_rules(&self, action: &str) -> NodeTemplate {
        let lowered = action.to_lowercase();
        self.custom_rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|kw| lowered.contains(kw.as_str())))
            .map(|rule| rule.template)
            .unwrap_or_else(|| rules::classify_action(action))
    }

    /// Instantiates a template at a chain position. Ids are one-based and
    /// assigned in synthesis order, trigger first.
    fn instantiate(&self, template: NodeTemplate, index: usize, name: String) -> WorkflowNode {
        WorkflowNode {
            id: format!("node-{}", index + 1),
            name,
            kind: template.kind(),
            type_version: 1,
            position: Position(NODE_SPACING_X * index as i64, NODE_ROW_Y),
            parameters: template.parameters(),
        }
    }
}

/// Convenience entry point: synthesizes a graph with the default rule tables
/// and tags.
pub fn synthesize(analysis: &AnalysisDefinition, profile: &BusinessProfile) -> WorkflowGraph {
    Synthesizer::builder(analysis.clone(), profile.clone())
        .build()
        .synthesize()
}
