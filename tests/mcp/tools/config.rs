use rmcp::handler::server::wrapper::Parameters;
use serde_json::json;
use zhcheck::mcp::{ZhcheckMcpServer, types::GetConfigParams};

use crate::{McpTestFixture, extract_tool_result_json};

#[tokio::test]
async fn test_get_config_defaults() {
    let fixture = McpTestFixture::new().unwrap();
    let server = ZhcheckMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], false);
    assert_eq!(json_result["config"]["sourceRoot"], "src");
    assert_eq!(json_result["config"]["includes"], json!(["**/*.vue"]));
    assert_eq!(json_result["config"]["literalWhitelist"], ".©×-_!, ");
    assert_eq!(json_result["config"]["contextWindows"]["line"], 300);
}

#[tokio::test]
async fn test_get_config_from_file() {
    let fixture = McpTestFixture::new().unwrap();
    fixture
        .write_config(&json!({
            "sourceRoot": "client",
            "ignorePrefixPatterns": ["console\\.log\\($"],
            "contextWindows": { "tag": 80 }
        }))
        .unwrap();
    let server = ZhcheckMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    let result = server.get_config(params).await.unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["fromFile"], true);
    assert_eq!(json_result["config"]["sourceRoot"], "client");
    assert_eq!(
        json_result["config"]["ignorePrefixPatterns"],
        json!(["console\\.log\\($"])
    );
    assert_eq!(json_result["config"]["contextWindows"]["tag"], 80);
    assert_eq!(json_result["config"]["contextWindows"]["comment"], 500);
}

#[tokio::test]
async fn test_get_config_invalid_file_is_error() {
    let fixture = McpTestFixture::new().unwrap();
    fixture.write_file(".zhcheckrc.json", "{ not json").unwrap();
    let server = ZhcheckMcpServer::new();

    let params = Parameters(GetConfigParams {
        project_root_path: fixture.root(),
    });

    assert!(server.get_config(params).await.is_err());
}
