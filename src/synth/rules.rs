use super::templates::NodeTemplate;

/// One ordered classification rule: if the lowercased input contains any of
/// the keywords, the rule's template wins.
///
/// Action text can match several categories at once (e.g. "send payment
/// notification" matches both the send and payment rules), so the position of
/// a rule in its table is the contract: rules are evaluated top to bottom and
/// the first match wins.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRule {
    pub keywords: &'static [&'static str],
    pub template: NodeTemplate,
}

impl ClassificationRule {
    /// Case-insensitive substring match against any keyword. Callers must
    /// pass already-lowercased text.
    fn matches_lowered(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|kw| lowered.contains(kw))
    }
}

/// Trigger selection rules, checked against the profile's `tools_used`.
pub const TRIGGER_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        keywords: &["whatsapp"],
        template: NodeTemplate::WhatsAppTrigger,
    },
    ClassificationRule {
        keywords: &["email"],
        template: NodeTemplate::EmailTrigger,
    },
];

/// Trigger used when no rule matches: a generic form-submission webhook.
pub const TRIGGER_FALLBACK: NodeTemplate = NodeTemplate::FormTrigger;

/// Action classification rules, checked against each action description.
pub const ACTION_RULES: &[ClassificationRule] = &[
    ClassificationRule {
        keywords: &["database", "save", "store"],
        template: NodeTemplate::Database,
    },
    ClassificationRule {
        keywords: &["sheet", "spreadsheet"],
        template: NodeTemplate::Sheets,
    },
    ClassificationRule {
        keywords: &["email", "notification", "send"],
        template: NodeTemplate::SendEmail,
    },
    ClassificationRule {
        keywords: &["invoice"],
        template: NodeTemplate::Invoice,
    },
    ClassificationRule {
        keywords: &["payment", "charge"],
        template: NodeTemplate::Payment,
    },
];

/// Action used when no rule matches: a generic chat notification.
pub const ACTION_FALLBACK: NodeTemplate = NodeTemplate::Notification;

/// Evaluates an ordered rule table against `text`, first match wins.
pub fn classify(text: &str, rules: &[ClassificationRule], fallback: NodeTemplate) -> NodeTemplate {
    let lowered = text.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.matches_lowered(&lowered))
        .map(|rule| rule.template)
        .unwrap_or(fallback)
}

/// Selects the trigger template for a profile's tool list.
pub fn classify_trigger(tools_used: &str) -> NodeTemplate {
    classify(tools_used, TRIGGER_RULES, TRIGGER_FALLBACK)
}

/// Selects the action template for a single action description.
pub fn classify_action(action: &str) -> NodeTemplate {
    classify(action, ACTION_RULES, ACTION_FALLBACK)
}
