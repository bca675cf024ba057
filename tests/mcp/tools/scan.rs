use rmcp::handler::server::wrapper::Parameters;
use zhcheck::mcp::{ZhcheckMcpServer, types::ScanLiteralsParams};

use crate::{
    McpTestFixture, assert_pagination, component_with_paragraphs, extract_tool_result_json,
};

fn params(
    fixture: &McpTestFixture,
    limit: Option<u32>,
    offset: Option<u32>,
) -> Parameters<ScanLiteralsParams> {
    Parameters(ScanLiteralsParams {
        project_root_path: fixture.root(),
        limit,
        offset,
    })
}

#[tokio::test]
async fn test_scan_literals_items() {
    let fixture = McpTestFixture::with_sources(&[
        (
            "src/views/Login.vue",
            "<template>\n  <el-input placeholder=\"请输入用户名\" />\n</template>\n<script>\nconst TIP = '登录失败'\nexport default {}\n</script>\n",
        ),
        ("src/App.vue", "<template><router-view /></template>"),
    ])
    .unwrap();
    let server = ZhcheckMcpServer::new();

    let result = server
        .scan_literals(params(&fixture, None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);

    assert_eq!(json_result["totalCount"], 2);
    assert_eq!(json_result["totalFileCount"], 1);
    assert_pagination(&json_result, 0, 20, false);

    let items = json_result["items"].as_array().unwrap();
    assert_eq!(items[0]["filePath"], "src/views/Login.vue");
    assert_eq!(items[0]["region"], "template");
    assert_eq!(items[0]["text"], "请输入用户名");
    assert_eq!(items[0]["line"], 2);

    assert_eq!(items[1]["region"], "script-pre");
    assert_eq!(items[1]["text"], "登录失败");
    assert_eq!(items[1]["line"], 5);
    assert_eq!(items[1]["col"], 13);
    assert_eq!(items[1]["sourceLine"], "const TIP = '登录失败'");
}

#[tokio::test]
async fn test_scan_literals_pagination() {
    let fixture =
        McpTestFixture::with_sources(&[("src/List.vue", &component_with_paragraphs(5))]).unwrap();
    let server = ZhcheckMcpServer::new();

    let result = server
        .scan_literals(params(&fixture, Some(2), Some(0)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["totalCount"], 5);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 2);
    assert_eq!(json_result["items"][0]["text"], "第0段");
    assert_pagination(&json_result, 0, 2, true);

    let result = server
        .scan_literals(params(&fixture, Some(2), Some(4)))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["items"].as_array().unwrap().len(), 1);
    assert_eq!(json_result["items"][0]["text"], "第4段");
    assert_pagination(&json_result, 4, 2, false);
}

#[tokio::test]
async fn test_scan_literals_limit_is_capped() {
    let fixture = McpTestFixture::new().unwrap();
    let server = ZhcheckMcpServer::new();

    let result = server
        .scan_literals(params(&fixture, Some(1000), None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["totalCount"], 0);
    assert_pagination(&json_result, 0, 100, false);
}

#[tokio::test]
async fn test_scan_literals_respects_config() {
    let fixture = McpTestFixture::with_sources(&[
        ("src/legacy/Old.vue", "<template><p>旧页面</p></template>"),
        ("src/New.vue", "<template><p>新页面</p></template>"),
    ])
    .unwrap();
    fixture
        .write_file(".zhcheckrc.json", r#"{ "ignores": ["legacy/**"] }"#)
        .unwrap();
    let server = ZhcheckMcpServer::new();

    let result = server
        .scan_literals(params(&fixture, None, None))
        .await
        .unwrap();
    let json_result = extract_tool_result_json(&result);
    assert_eq!(json_result["totalCount"], 1);
    assert_eq!(json_result["items"][0]["filePath"], "src/New.vue");
}
