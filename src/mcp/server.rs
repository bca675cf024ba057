use std::{collections::HashSet, path::Path};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;

use crate::{config::load_config, runner::CheckRunner};

use super::types::{
    ConfigDto, ConfigValues, GetConfigParams, LiteralItem, LiteralScanResult, Pagination,
    ScanLiteralsParams,
};

const DEFAULT_LIMIT: usize = 20;
const MAX_LIMIT: usize = 100;

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;
    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}

#[derive(Clone)]
pub struct ZhcheckMcpServer {
    tool_router: ToolRouter<Self>,
}

impl Default for ZhcheckMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ZhcheckMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    /// Scan for untranslated literals
    #[tool(
        description = "Scan Vue components (and configured scripts) for untranslated CJK literals. Returns paginated list of findings."
    )]
    pub async fn scan_literals(
        &self,
        params: Parameters<ScanLiteralsParams>,
    ) -> Result<CallToolResult, McpError> {
        let root = Path::new(&params.0.project_root_path);
        let limit = params
            .0
            .limit
            .map(|v| v as usize)
            .unwrap_or(DEFAULT_LIMIT)
            .min(MAX_LIMIT);
        let offset = params.0.offset.map(|v| v as usize).unwrap_or(0);

        let config = load_config(root)
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {:#}", e), None))?
            .config;
        let runner = CheckRunner::new(&config, root, false)
            .map_err(|e| McpError::internal_error(format!("Failed to initialize: {:#}", e), None))?;
        let result = runner.run();

        let mut literal_files: HashSet<&str> = HashSet::new();
        let all_items: Vec<LiteralItem> = result
            .files_with_literals()
            .flat_map(|file| {
                literal_files.insert(&file.path);
                file.literals.iter().map(move |l| LiteralItem {
                    file_path: file.path.clone(),
                    line: l.context.line(),
                    col: l.context.col(),
                    region: l.region,
                    text: l.text.clone(),
                    source_line: l.context.source_line.clone(),
                })
            })
            .collect();

        let total_count = all_items.len();
        let total_file_count = literal_files.len();

        let items: Vec<LiteralItem> = all_items.into_iter().skip(offset).take(limit).collect();
        let has_more = offset + items.len() < total_count;

        to_tool_result(&LiteralScanResult {
            total_count,
            total_file_count,
            failed_files: result
                .failures
                .iter()
                .map(|f| f.file_path.clone())
                .collect(),
            items,
            pagination: Pagination {
                offset,
                limit,
                has_more,
            },
        })
    }

    /// Get the current zhcheck configuration
    #[tool(description = "Get the resolved zhcheck configuration for a project.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let path = Path::new(&params.0.project_root_path);

        let result = load_config(path).map_err(|e| {
            McpError::internal_error(format!("Failed to load config: {:#}", e), None)
        })?;

        to_tool_result(&ConfigDto {
            from_file: result.from_file,
            config: ConfigValues::from(result.config),
        })
    }
}

#[tool_handler]
impl ServerHandler for ZhcheckMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "zhcheck MCP helps AI agents find user-visible CJK text that still needs to be \
                 routed through i18n calls in Vue projects.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. scan_literals - Get untranslated literals (paginated)\n\n\
                 Replace each reported literal with a $t('key') call and add the key to the \
                 locale files, then scan again."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = ZhcheckMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}
