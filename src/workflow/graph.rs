use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The automation-platform node kind a synthesized node maps to.
///
/// Serializes to the n8n node type string so that exported graphs can be
/// imported by downstream tooling unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    #[serde(rename = "n8n-nodes-base.webhook")]
    Webhook,
    #[serde(rename = "n8n-nodes-base.emailReadImap")]
    EmailReadImap,
    #[serde(rename = "n8n-nodes-base.postgres")]
    Postgres,
    #[serde(rename = "n8n-nodes-base.googleSheets")]
    GoogleSheets,
    #[serde(rename = "n8n-nodes-base.emailSend")]
    EmailSend,
    #[serde(rename = "n8n-nodes-base.httpRequest")]
    HttpRequest,
    #[serde(rename = "n8n-nodes-base.stripe")]
    Stripe,
    #[serde(rename = "n8n-nodes-base.slack")]
    Slack,
}

impl NodeKind {
    /// The platform type identifier this kind serializes to.
    pub fn type_name(&self) -> &'static str {
        match self {
            NodeKind::Webhook => "n8n-nodes-base.webhook",
            NodeKind::EmailReadImap => "n8n-nodes-base.emailReadImap",
            NodeKind::Postgres => "n8n-nodes-base.postgres",
            NodeKind::GoogleSheets => "n8n-nodes-base.googleSheets",
            NodeKind::EmailSend => "n8n-nodes-base.emailSend",
            NodeKind::HttpRequest => "n8n-nodes-base.httpRequest",
            NodeKind::Stripe => "n8n-nodes-base.stripe",
            NodeKind::Slack => "n8n-nodes-base.slack",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

/// Cosmetic 2D layout hint, serialized as `[x, y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position(pub i64, pub i64);

/// A single node in a synthesized workflow graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    /// Unique within one graph: `node-1`, `node-2`, ... in synthesis order.
    pub id: String,
    /// Display label. Trigger nodes carry a fixed template label; action
    /// nodes carry the originating action text verbatim.
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    #[serde(rename = "typeVersion")]
    pub type_version: u32,
    pub position: Position,
    /// Opaque configuration bag, copied fresh from the kind's static template.
    pub parameters: AHashMap<String, String>,
}

/// A directed edge between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    pub target: String,
}

/// Platform execution settings carried by every exported graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSettings {
    #[serde(rename = "executionOrder")]
    pub execution_order: String,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            execution_order: "v1".to_string(),
        }
    }
}

/// An immutable, importable automation workflow: one trigger node followed by
/// a linear chain of action nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowGraph {
    pub name: String,
    pub nodes: Vec<WorkflowNode>,
    pub connections: Vec<Connection>,
    pub active: bool,
    pub settings: WorkflowSettings,
    pub tags: Vec<String>,
}

impl WorkflowGraph {
    /// Verifies the single-linear-chain invariant: exactly one connection per
    /// consecutive node pair, no branching, no merging, no cycles.
    pub fn is_linear_chain(&self) -> bool {
        if self.nodes.is_empty() {
            return false;
        }
        if self.connections.len() != self.nodes.len() - 1 {
            return false;
        }
        self.connections
            .iter()
            .zip(self.nodes.windows(2))
            .all(|(conn, pair)| conn.source == pair[0].id && conn.target == pair[1].id)
    }

    /// Serializes the graph as a pretty-printed platform import document.
    pub fn to_import_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a graph back from its import document.
    pub fn from_import_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
