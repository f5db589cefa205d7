use clap::Parser;
use kumitate::prelude::*;
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;

// --- JSON Deserialization Structs (Input Format Specific) ---
// These structs match the analyst-response JSON format and are only used here
// for conversion.

#[derive(Deserialize)]
struct RawAnalysis {
    #[serde(default)]
    automation_score: Option<u32>,
    #[serde(default)]
    triggers: Vec<String>,
    actions: Vec<String>,
    #[serde(default)]
    recommended_tools: Vec<String>,
    #[serde(default)]
    estimated_hours_saved_per_month: Option<f64>,
    #[serde(default)]
    risk_level: Option<String>,
    #[serde(default)]
    implementation_notes: Option<String>,
}

#[derive(Deserialize)]
struct RawProfile {
    #[serde(alias = "businessName")]
    business_name: String,
    #[serde(alias = "toolsUsed")]
    tools_used: String,
    #[serde(default, alias = "hourlyRate")]
    hourly_rate: Option<f64>,
    #[serde(default, alias = "numberOfEmployees")]
    number_of_employees: Option<u32>,
}

// --- Converter Implementation ---
// This implements the conversion from the raw JSON model to Kumitate's
// canonical AnalysisDefinition.

impl IntoAnalysis for RawAnalysis {
    fn into_analysis(self) -> Result<AnalysisDefinition, AnalysisConversionError> {
        let risk_level = match self.risk_level.as_deref() {
            None => None,
            Some("Low") | Some("low") => Some(RiskLevel::Low),
            Some("Medium") | Some("medium") => Some(RiskLevel::Medium),
            Some("High") | Some("high") => Some(RiskLevel::High),
            Some(other) => {
                return Err(AnalysisConversionError::ValidationError(format!(
                    "Unknown risk level: '{}'",
                    other
                )));
            }
        };

        Ok(AnalysisDefinition {
            triggers: self.triggers,
            actions: self.actions,
            recommended_tools: self.recommended_tools,
            automation_score: self.automation_score,
            estimated_hours_saved_per_month: self.estimated_hours_saved_per_month,
            risk_level,
            implementation_notes: self.implementation_notes,
        })
    }
}

/// A workflow synthesis and ROI projection CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the analysis JSON file (analyst/LLM response format)
    analysis_path: Option<String>,
    /// Path to the business profile JSON file
    profile_path: Option<String>,

    /// Path to write the n8n import JSON to (stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Hours saved per month for the ROI projection (falls back to the
    /// analysis estimate)
    #[arg(long)]
    hours: Option<f64>,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive(cli.output);
    } else {
        run_non_interactive(cli);
    }
}

fn run_synthesis(analysis_path: String, profile_path: String, output: Option<String>, hours_override: Option<f64>) {
    let total_start = Instant::now();

    // --- 1. File Loading ---
    let load_start = Instant::now();
    let analysis_json = fs::read_to_string(&analysis_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read analysis file '{}': {}",
            &analysis_path, e
        ))
    });
    let profile_json = fs::read_to_string(&profile_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read profile file '{}': {}",
            &profile_path, e
        ))
    });
    let load_duration = load_start.elapsed();

    // --- 2. Parsing and Conversion ---
    let raw_analysis: RawAnalysis = serde_json::from_str(&analysis_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse analysis JSON: {}", e)));
    let raw_profile: RawProfile = serde_json::from_str(&profile_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse profile JSON: {}", e)));

    let hourly_rate = raw_profile.hourly_rate;
    let employees = raw_profile.number_of_employees;
    let profile = BusinessProfile {
        business_name: raw_profile.business_name,
        tools_used: raw_profile.tools_used,
    };

    let analysis = raw_analysis
        .into_analysis()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert analysis: {}", e)));

    // --- 3. Synthesis ---
    println!("\nSynthesizing automation workflow...");
    let synth_start = Instant::now();
    let synthesizer = Synthesizer::builder(analysis.clone(), profile).build();
    let graph = synthesizer.synthesize();
    let synth_duration = synth_start.elapsed();

    println!(
        "Synthesis Successful! {} nodes, {} connections in {:?}",
        graph.nodes.len(),
        graph.connections.len(),
        synth_duration
    );
    for node in &graph.nodes {
        println!("  -> [{}] {} ({})", node.id, node.name, node.kind);
    }

    // --- 4. Export ---
    let json = graph
        .to_import_json()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize workflow: {}", e)));
    match &output {
        Some(path) => {
            fs::write(path, &json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write workflow to '{}': {}", path, e))
            });
            println!("\nWrote n8n import document to '{}'", path);
        }
        None => {
            println!("\n--- n8n Import Document ---");
            println!("{}", json);
        }
    }

    // --- 5. ROI Projection ---
    let hours = hours_override.or(analysis.estimated_hours_saved_per_month);
    if let (Some(hours), Some(rate), Some(employees)) = (hours, hourly_rate, employees) {
        let inputs = RoiInputs::new(hours, rate, employees)
            .unwrap_or_else(|e| exit_with_error(&format!("Invalid ROI inputs: {}", e)));
        let report = inputs.calculate();

        println!("\n--- ROI Projection ---");
        println!("Monthly savings:      {:.2}", report.monthly_savings);
        println!("Annual savings:       {:.2}", report.annual_savings);
        println!(
            "Productivity boost:   {}%",
            report.productivity_boost_percentage
        );
        println!(
            "Maturity score:       {}/100",
            report.automation_maturity_score
        );
        match report.break_even_months {
            Some(months) => println!("Break-even:           {} months", months),
            None => println!("Break-even:           n/a (no monthly savings)"),
        }
    } else {
        println!("\nNo ROI projection: provide --hours plus hourlyRate and numberOfEmployees in the profile.");
    }

    let total_duration = total_start.elapsed();
    println!("\n--- Performance Summary ---");
    println!("File Loading:   {:?}", load_duration);
    println!("Synthesis:      {:?}", synth_duration);
    println!("-----------------------------");
    println!("Total Execution: {:?}", total_duration);
    println!();
}

/// Runs the CLI in non-interactive mode, taking all arguments from the command line.
fn run_non_interactive(cli: Cli) {
    let analysis_path = cli.analysis_path.unwrap_or_else(|| {
        exit_with_error("Analysis path is required in non-interactive mode.");
    });
    let profile_path = cli.profile_path.unwrap_or_else(|| {
        exit_with_error("Profile path is required in non-interactive mode.");
    });

    run_synthesis(analysis_path, profile_path, cli.output, cli.hours);
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive(output: Option<String>) {
    println!("--- Kumitate Interactive Mode ---");

    let analysis_path = prompt_for_input("Enter analysis path", Some("data/analysis.json"));
    let profile_path = prompt_for_input("Enter profile path", Some("data/profile.json"));
    let hours_str = prompt_for_input("Hours saved per month (optional)", None);

    let hours = if hours_str.is_empty() {
        None
    } else {
        match hours_str.parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => exit_with_error(&format!("'{}' is not a number", hours_str)),
        }
    };

    run_synthesis(analysis_path, profile_path, output, hours);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
