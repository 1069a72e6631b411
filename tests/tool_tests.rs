//! Tests for the tutor agent's tools.

use std::sync::Arc;

use serde_json::json;
use tutor_bridge::prelude::*;
use tutor_bridge::tools::tool::ToolExecutionContext;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn agent_for(server: &MockServer) -> AgentDefinition {
    let bridge = EditorBridge::new(BridgeConfig::new().with_base_url(server.uri())).unwrap();
    tutor_agent(Arc::new(bridge))
}

#[test]
fn parameter_builder_constructs_schema() {
    let params = AgentToolParameters::object()
        .string("code", "Source", true)
        .string("language", "Language hint", false)
        .build();

    let schema = &params.schema;
    assert_eq!(schema["type"], "object");
    assert_eq!(schema["properties"]["code"]["type"], "string");
    assert_eq!(params.required(), vec!["code"]);
}

#[test]
fn tutor_declares_three_tools() {
    let bridge = Arc::new(EditorBridge::new(BridgeConfig::new()).unwrap());
    let agent = tutor_agent(bridge);

    assert_eq!(agent.name(), "Interactive_Learning_Agent");
    assert_eq!(agent.model(), "gemini-2.0-flash");
    assert_eq!(
        agent.tool_names(),
        vec!["get_code_from_editor", "write_code_to_editor", "update_progress"]
    );

    let specs = serde_json::to_value(agent.tool_specs()).unwrap();
    assert_eq!(specs[1]["parameters"]["required"], json!(["code"]));
}

#[tokio::test]
async fn get_code_tool_returns_plain_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/editor/code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "#include <iostream>"})))
        .mount(&server)
        .await;

    let out = agent_for(&server)
        .invoke_tool("get_code_from_editor", json!({}))
        .await
        .unwrap();
    assert_eq!(out, json!("#include <iostream>"));
}

#[tokio::test]
async fn get_code_tool_returns_sentinel_on_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/editor/code"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let out = agent_for(&server)
        .invoke_tool("get_code_from_editor", json!(null))
        .await
        .unwrap();
    assert_eq!(out, json!(FETCH_CODE_SENTINEL));
}

#[tokio::test]
async fn write_tool_accepts_string_encoded_arguments() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/editor/code"))
        .and(body_json(json!({"code": "fn main() {}"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let out = agent_for(&server)
        .invoke_tool("write_code_to_editor", json!("{\"code\": \"fn main() {}\"}"))
        .await
        .unwrap();
    assert_eq!(
        out,
        json!({"status": "success", "message": "Code saved successfully."})
    );
}

#[tokio::test]
async fn write_tool_without_code_never_calls_front_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = agent_for(&server)
        .invoke_tool("write_code_to_editor", json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, BridgeError::InvalidArgument(_)));
}

#[tokio::test]
async fn update_progress_tool_reports_failure_in_output() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/validate-step"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let agent = agent_for(&server);
    let tool = agent.tool("update_progress").expect("tool");
    let out = tool
        .execute(&ToolArguments::empty(), &ToolExecutionContext::default())
        .await
        .unwrap();
    assert_eq!(
        out,
        json!({"status": "error", "message": "Failed with status code 404"})
    );
}

#[tokio::test]
async fn custom_tool_can_wrap_the_bridge() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/editor/code"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": "a\nb\nc"})))
        .expect(1)
        .mount(&server)
        .await;

    let bridge = Arc::new(EditorBridge::new(BridgeConfig::new().with_base_url(server.uri())).unwrap());
    let count_lines = AgentTool::new(
        "count_editor_lines",
        "Count the lines in the learner's editor",
        AgentToolParameters::empty(),
        move |_args, _ctx| {
            let bridge = Arc::clone(&bridge);
            async move {
                let code = bridge.try_fetch_code().await?;
                Ok(json!({"lines": code.lines().count()}))
            }
        },
    );

    assert_eq!(count_lines.name(), "count_editor_lines");
    let result = count_lines
        .execute(&ToolArguments::empty(), &ToolExecutionContext::default())
        .await
        .unwrap();
    assert_eq!(result, json!({"lines": 3}));
}
