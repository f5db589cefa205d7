use clap::Parser;
use kumitate::prelude::*;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde_json::json;
use std::fs;

/// Action phrases covering every classification rule plus the fallback.
const ACTION_POOL: &[&str] = &[
    "Save the order to the database",
    "Store customer details for later",
    "Update the inventory spreadsheet",
    "Append the lead to the tracking sheet",
    "Send a confirmation email to the customer",
    "Send payment notification to the finance team",
    "Generate an invoice for the completed project",
    "Charge the customer's card",
    "Process payment through the gateway",
    "Ping the on-call channel",
    "Assign the ticket to an agent",
];

const TRIGGER_POOL: &[&str] = &[
    "Customer places an order on the website",
    "New message arrives on WhatsApp",
    "Inquiry email lands in the shared inbox",
    "Web form is submitted",
];

const TOOL_POOL: &[&str] = &[
    "WhatsApp, Google Sheets, Email",
    "Shopify, Email, Slack",
    "QuickBooks, Stripe, Google Sheets",
    "Google Forms, Google Drive, Email",
    "CRM, Phone, Spreadsheets",
];

const BUSINESS_POOL: &[&str] = &[
    "Acme Fulfilment",
    "Northwind Traders",
    "Blue Harbor Clinic",
    "Summit Realty",
];

/// A CLI tool to generate sample analysis and profile data for the Kumitate synthesizer
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated analysis JSON file to
    #[arg(short, long, default_value = "generated_analysis.json")]
    analysis_output: String,

    /// The path to write the generated profile JSON file to
    #[arg(short, long, default_value = "generated_profile.json")]
    profile_output: String,

    /// The minimum number of actions to generate
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of actions to generate
    #[arg(long, default_value_t = 6)]
    max: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    // Add validation to ensure min is not greater than max
    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    println!(
        "Generating new test data (actions per analysis: {} to {})...",
        cli.min, cli.max
    );

    let action_count = rng.random_range(cli.min..=cli.max);
    let actions: Vec<&str> = (0..action_count)
        .map(|_| *ACTION_POOL.choose(&mut rng).expect("pool is non-empty"))
        .collect();
    let business_name = *BUSINESS_POOL.choose(&mut rng).expect("pool is non-empty");
    let tools_used = *TOOL_POOL.choose(&mut rng).expect("pool is non-empty");

    // Sanity-check the fixture against the synthesizer before writing it out.
    let graph = synthesize(
        &AnalysisDefinition {
            actions: actions.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        },
        &BusinessProfile {
            business_name: business_name.to_string(),
            tools_used: tools_used.to_string(),
        },
    );
    println!(
        "Fixture synthesizes into {} nodes ({} connections)",
        graph.nodes.len(),
        graph.connections.len()
    );

    // Chosen outside the macro: json! would read the slice literal as a JSON
    // array, not a Rust expression.
    let risk_level = *["Low", "Medium", "High"]
        .choose(&mut rng)
        .expect("pool is non-empty");

    let analysis = json!({
        "automation_score": rng.random_range(20..=95),
        "triggers": [TRIGGER_POOL.choose(&mut rng)],
        "actions": actions,
        "recommended_tools": ["n8n", "Zapier"],
        "estimated_hours_saved_per_month": rng.random_range(5..=60),
        "risk_level": risk_level,
        "implementation_notes": "Generated fixture data.",
    });

    let profile = json!({
        "businessName": business_name,
        "toolsUsed": tools_used,
        "hourlyRate": rng.random_range(25..=80),
        "numberOfEmployees": rng.random_range(1..=25),
    });

    fs::write(&cli.analysis_output, serde_json::to_string_pretty(&analysis)?)?;
    fs::write(&cli.profile_output, serde_json::to_string_pretty(&profile)?)?;

    println!(
        "Successfully generated and saved test data to '{}' and '{}'",
        cli.analysis_output, cli.profile_output
    );

    Ok(())
}
