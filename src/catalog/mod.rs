//! Built-in industry scenario templates.
//!
//! Each template describes a typical manual workflow for one industry,
//! pre-filled with a business profile and the numbers needed for an ROI
//! projection. Callers use them to seed an analysis without collecting input
//! first.

use crate::analysis::BusinessProfile;
use crate::error::RoiError;
use crate::roi::RoiInputs;
use itertools::Itertools;

/// A pre-built automation scenario for one industry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioTemplate {
    pub id: &'static str,
    pub title: &'static str,
    pub industry: &'static str,
    pub description: &'static str,
    /// Display list of tools involved.
    pub tools: &'static str,
    /// Tool list as a profile would declare it (drives trigger inference).
    pub tools_used: &'static str,
    pub business_name: &'static str,
    pub workflow_description: &'static str,
    pub hours_saved_per_month: f64,
    pub employees: u32,
    pub hourly_rate: f64,
}

impl ScenarioTemplate {
    /// Builds the business profile this scenario describes.
    pub fn profile(&self) -> BusinessProfile {
        BusinessProfile {
            business_name: self.business_name.to_string(),
            tools_used: self.tools_used.to_string(),
        }
    }

    /// Builds validated ROI inputs from the scenario's estimates.
    pub fn roi_inputs(&self) -> Result<RoiInputs, RoiError> {
        RoiInputs::new(self.hours_saved_per_month, self.hourly_rate, self.employees)
    }
}

/// The built-in scenario library, one entry per covered industry.
pub const BUILTIN_TEMPLATES: &[ScenarioTemplate] = &[
    ScenarioTemplate {
        id: "ecommerce-order",
        title: "E-commerce Order Processing",
        industry: "E-commerce",
        description: "Automate order intake from website/WhatsApp, update inventory, generate invoice, send confirmation.",
        tools: "Shopify, Google Sheets, Email, WhatsApp",
        tools_used: "Shopify, Google Sheets, Email, WhatsApp",
        business_name: "My E-commerce Store",
        workflow_description: "Customer places order on website or sends order via WhatsApp. We manually enter the order into Google Sheets, update inventory in Shopify, generate an invoice in Excel, send confirmation email to customer, and update shipping status.",
        hours_saved_per_month: 35.0,
        employees: 5,
        hourly_rate: 40.0,
    },
    ScenarioTemplate {
        id: "healthcare-appointment",
        title: "Patient Appointment Management",
        industry: "Healthcare",
        description: "Automate appointment scheduling, reminders, patient intake forms, and follow-up communications.",
        tools: "Google Calendar, Email, SMS, Forms",
        tools_used: "Google Calendar, Email, SMS, Google Forms",
        business_name: "My Healthcare Clinic",
        workflow_description: "Patient calls or fills out web form to book appointment. Staff manually checks calendar availability, enters appointment, sends confirmation email, sends reminder SMS 24hrs before, prepares intake forms, and schedules follow-up after visit.",
        hours_saved_per_month: 28.0,
        employees: 8,
        hourly_rate: 55.0,
    },
    ScenarioTemplate {
        id: "finance-invoicing",
        title: "Invoice & Payment Tracking",
        industry: "Finance",
        description: "Automate invoice generation, payment tracking, overdue reminders, and financial reporting.",
        tools: "QuickBooks, Stripe, Email, Google Sheets",
        tools_used: "QuickBooks, Stripe, Email, Google Sheets",
        business_name: "My Finance Company",
        workflow_description: "When project is completed, we manually create invoice in QuickBooks, send via email to client, track payment status in Google Sheets, send overdue reminders manually, reconcile payments with bank statements, and generate monthly financial reports.",
        hours_saved_per_month: 42.0,
        employees: 10,
        hourly_rate: 75.0,
    },
    ScenarioTemplate {
        id: "education-enrollment",
        title: "Student Enrollment Pipeline",
        industry: "Education",
        description: "Automate student inquiry handling, enrollment processing, document collection, and onboarding.",
        tools: "Google Forms, Email, Google Sheets, Drive",
        tools_used: "Google Forms, Email, Google Sheets, Google Drive",
        business_name: "My Educational Institute",
        workflow_description: "Student fills inquiry form on website. Staff manually reviews and replies via email, sends enrollment documents, collects completed forms, enters data into spreadsheet, assigns to class, sends welcome email with schedule and materials.",
        hours_saved_per_month: 30.0,
        employees: 6,
        hourly_rate: 35.0,
    },
    ScenarioTemplate {
        id: "realestate-leads",
        title: "Real Estate Lead Management",
        industry: "Real Estate",
        description: "Automate lead capture, property matching, follow-ups, and showing schedule management.",
        tools: "CRM, WhatsApp, Email, Google Calendar",
        tools_used: "CRM, WhatsApp, Email, Google Calendar",
        business_name: "My Real Estate Agency",
        workflow_description: "Leads come from website, WhatsApp, and phone calls. Agent manually enters lead info into CRM, matches with available properties, sends property details via email/WhatsApp, schedules showings on calendar, follows up after showing, tracks deal progress.",
        hours_saved_per_month: 38.0,
        employees: 7,
        hourly_rate: 50.0,
    },
    ScenarioTemplate {
        id: "restaurant-orders",
        title: "Restaurant Order Management",
        industry: "Hospitality",
        description: "Automate online order processing, kitchen notifications, delivery tracking, and customer feedback.",
        tools: "POS, WhatsApp, Google Sheets, Email",
        tools_used: "POS System, WhatsApp, Google Sheets, Email",
        business_name: "My Restaurant",
        workflow_description: "Customer orders via WhatsApp or website. Staff manually enters order into POS, notifies kitchen, tracks preparation status, coordinates delivery, sends order confirmation to customer, collects feedback after delivery, updates daily sales spreadsheet.",
        hours_saved_per_month: 32.0,
        employees: 12,
        hourly_rate: 30.0,
    },
    ScenarioTemplate {
        id: "marketing-campaign",
        title: "Marketing Campaign Automation",
        industry: "Marketing",
        description: "Automate lead nurturing, email sequences, social posting, and campaign performance tracking.",
        tools: "Mailchimp, Hootsuite, Google Analytics, CRM",
        tools_used: "Mailchimp, Hootsuite, Google Analytics, CRM",
        business_name: "My Marketing Agency",
        workflow_description: "New lead signs up on landing page. We manually add to Mailchimp, tag based on interest, send welcome email sequence, schedule social media posts promoting content, track campaign metrics in spreadsheet, generate weekly performance reports for clients.",
        hours_saved_per_month: 45.0,
        employees: 8,
        hourly_rate: 60.0,
    },
];

/// All built-in templates.
pub fn builtin_templates() -> &'static [ScenarioTemplate] {
    BUILTIN_TEMPLATES
}

/// Filters templates by free-text query (title, description, industry) and an
/// optional exact industry. Both filters are case-insensitive; an empty query
/// matches everything.
pub fn search(query: &str, industry: Option<&str>) -> Vec<&'static ScenarioTemplate> {
    let query = query.to_lowercase();
    BUILTIN_TEMPLATES
        .iter()
        .filter(|t| {
            industry.is_none_or(|wanted| t.industry.eq_ignore_ascii_case(wanted))
        })
        .filter(|t| {
            query.is_empty()
                || t.title.to_lowercase().contains(&query)
                || t.description.to_lowercase().contains(&query)
                || t.industry.to_lowercase().contains(&query)
        })
        .collect()
}

/// Unique industries covered by the library, in catalog order.
pub fn industries() -> Vec<&'static str> {
    BUILTIN_TEMPLATES
        .iter()
        .map(|t| t.industry)
        .unique()
        .collect()
}
