use crate::workflow::NodeKind;
use ahash::AHashMap;

/// A static node template: the platform node kind, its default display label,
/// and its default parameter bag.
///
/// Parameters are intentionally constructed fresh on every call so that no two
/// instantiated nodes ever alias the same bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeTemplate {
    WhatsAppTrigger,
    EmailTrigger,
    FormTrigger,
    Database,
    Sheets,
    SendEmail,
    Invoice,
    Payment,
    Notification,
}

impl NodeTemplate {
    /// The platform node kind this template instantiates.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeTemplate::WhatsAppTrigger | NodeTemplate::FormTrigger => NodeKind::Webhook,
            NodeTemplate::EmailTrigger => NodeKind::EmailReadImap,
            NodeTemplate::Database => NodeKind::Postgres,
            NodeTemplate::Sheets => NodeKind::GoogleSheets,
            NodeTemplate::SendEmail => NodeKind::EmailSend,
            NodeTemplate::Invoice => NodeKind::HttpRequest,
            NodeTemplate::Payment => NodeKind::Stripe,
            NodeTemplate::Notification => NodeKind::Slack,
        }
    }

    /// Default display label. Trigger nodes keep this label; action nodes
    /// override it with the originating action text.
    pub fn label(&self) -> &'static str {
        match self {
            NodeTemplate::WhatsAppTrigger => "WhatsApp Webhook",
            NodeTemplate::EmailTrigger => "Email Trigger",
            NodeTemplate::FormTrigger => "Form Submission",
            NodeTemplate::Database => "Save to Database",
            NodeTemplate::Sheets => "Update Google Sheets",
            NodeTemplate::SendEmail => "Send Email",
            NodeTemplate::Invoice => "Generate Invoice",
            NodeTemplate::Payment => "Process Payment",
            NodeTemplate::Notification => "Send Notification",
        }
    }

    /// Builds a fresh copy of the template's default parameter bag.
    pub fn parameters(&self) -> AHashMap<String, String> {
        let pairs: &[(&str, &str)] = match self {
            NodeTemplate::WhatsAppTrigger => {
                &[("path", "whatsapp-incoming"), ("responseMode", "onReceived")]
            }
            NodeTemplate::EmailTrigger => &[("mailbox", "INBOX"), ("format", "simple")],
            NodeTemplate::FormTrigger => &[("path", "form-submit"), ("responseMode", "onReceived")],
            NodeTemplate::Database => &[("operation", "insert"), ("schema", "public")],
            NodeTemplate::Sheets => &[("operation", "append"), ("sheetName", "Sheet1")],
            NodeTemplate::SendEmail => &[
                ("fromEmail", "automation@company.com"),
                ("subject", "Automated Notification"),
            ],
            NodeTemplate::Invoice => &[
                ("method", "POST"),
                ("url", "https://api.invoice-service.com/generate"),
            ],
            NodeTemplate::Payment => &[("operation", "charge")],
            NodeTemplate::Notification => &[("operation", "sendMessage")],
        };
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}
