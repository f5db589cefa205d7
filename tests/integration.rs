//! Integration tests for Kumitate
//!
//! End-to-end tests that verify synthesis, serialization, and bundling work
//! together.
mod common;
use common::*;
use kumitate::catalog;
use kumitate::prelude::*;

#[test]
fn test_end_to_end_synthesis_and_import_round_trip() {
    let analysis = order_processing_analysis();
    let profile = profile_with_tools("Shopify, Google Sheets, Email, WhatsApp");

    let graph = synthesize(&analysis, &profile);
    assert!(graph.is_linear_chain());

    let json = graph.to_import_json().expect("Failed to serialize graph");
    let parsed = WorkflowGraph::from_import_json(&json).expect("Failed to parse graph");
    assert_eq!(parsed, graph);
}

#[test]
fn test_import_document_matches_platform_schema() {
    let analysis = analysis_with_actions(&["Save order to database"]);
    let graph = synthesize(&analysis, &profile_with_tools("WhatsApp"));

    let value: serde_json::Value =
        serde_json::from_str(&graph.to_import_json().unwrap()).unwrap();

    assert_eq!(value["name"], "Acme Fulfilment Automated Workflow");
    assert_eq!(value["active"], false);
    assert_eq!(value["settings"]["executionOrder"], "v1");
    assert_eq!(value["tags"], serde_json::json!(["automated", "ai-generated"]));

    let trigger = &value["nodes"][0];
    assert_eq!(trigger["id"], "node-1");
    assert_eq!(trigger["type"], "n8n-nodes-base.webhook");
    assert_eq!(trigger["typeVersion"], 1);
    assert_eq!(trigger["position"], serde_json::json!([0, 300]));
    assert_eq!(trigger["parameters"]["path"], "whatsapp-incoming");

    let action = &value["nodes"][1];
    assert_eq!(action["id"], "node-2");
    assert_eq!(action["type"], "n8n-nodes-base.postgres");
    assert_eq!(action["position"], serde_json::json!([250, 300]));
    assert_eq!(action["parameters"]["operation"], "insert");

    assert_eq!(value["connections"][0]["source"], "node-1");
    assert_eq!(value["connections"][0]["target"], "node-2");
}

#[test]
fn test_bundle_byte_round_trip() {
    let graph = synthesize(
        &order_processing_analysis(),
        &profile_with_tools("WhatsApp, Email"),
    );
    let roi = RoiInputs::new(35.0, 40.0, 5).unwrap().calculate();

    let bundle = SynthesisBundle::new(graph, Some(roi));
    let bytes = bundle.to_bytes().expect("Failed to encode bundle");
    let restored = SynthesisBundle::from_bytes(&bytes).expect("Failed to decode bundle");
    assert_eq!(restored, bundle);
}

#[test]
fn test_bundle_exports_the_graph_import_document() {
    let graph = synthesize(
        &analysis_with_actions(&["Save order to database"]),
        &profile_with_tools("WhatsApp"),
    );
    let bundle = SynthesisBundle::new(graph.clone(), None);

    assert_eq!(
        bundle.to_import_json().unwrap(),
        graph.to_import_json().unwrap()
    );
}

#[test]
fn test_bundle_file_round_trip() {
    let graph = synthesize(&analysis_with_actions(&["Send email"]), &profile_with_tools("Email"));
    let bundle = SynthesisBundle::new(graph, None);

    let path = std::env::temp_dir().join("kumitate_bundle_test.bin");
    let path_str = path.to_str().expect("temp path is valid UTF-8");

    bundle.save(path_str).expect("Failed to save bundle");
    let restored = SynthesisBundle::from_file(path_str).expect("Failed to load bundle");
    assert_eq!(restored, bundle);

    let _ = std::fs::remove_file(&path);
}

#[test]
fn test_scenario_template_end_to_end() {
    let template = catalog::builtin_templates()
        .iter()
        .find(|t| t.id == "finance-invoicing")
        .unwrap();

    // An analyst would derive actions from the scenario description; a
    // representative subset is enough here.
    let analysis = analysis_with_actions(&[
        "Create invoice in QuickBooks",
        "Send invoice via email to client",
        "Track payment status in Google Sheets",
    ]);

    let graph = synthesize(&analysis, &template.profile());
    assert_eq!(graph.name, "My Finance Company Automated Workflow");
    assert_eq!(graph.nodes.len(), 4);
    // No WhatsApp in the tool list, but email is there.
    assert_eq!(graph.nodes[0].kind, NodeKind::EmailReadImap);

    let report = template.roi_inputs().unwrap().calculate();
    assert_eq!(report.monthly_savings, 42.0 * 75.0);
    assert_eq!(report.cumulative_savings(12).len(), 12);
}
