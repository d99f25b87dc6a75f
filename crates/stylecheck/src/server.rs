//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the style checker to AI assistants over stdio. The server keeps a
//! [`DiagnosticCollection`] so a client can check a document under a URI,
//! fetch the stored result later and close the document when done.
//!
//! # Architecture
//!
//! The MCP server is a presentation layer. Each `#[tool]` method delegates to
//! `stylecheck-core`; the only state it owns is the diagnostic collection.

use std::sync::{Arc, Mutex, MutexGuard};

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use stylecheck_core::config::Config;
use stylecheck_core::readability;
use stylecheck_core::{
    AnalysisResult, Analyzer, DiagnosticCollection, DiagnosticSink, Document, LineFragment, Range,
    Sentence, TextDocument,
};

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Parameters for the `check_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckTextParams {
    /// The text to check.
    pub text: String,
    /// Document identifier. When given, the result replaces the stored set for it.
    pub uri: Option<String>,
}

/// Parameters for tools addressing a stored document.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct DocumentParams {
    /// Document identifier used with `check_text`.
    pub uri: String,
}

/// Parameters for tools that only take text.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The text to process.
    pub text: String,
}

#[derive(Debug, Serialize)]
struct SentenceSummary {
    range: Range,
    score: u32,
    text: String,
}

#[derive(Debug, Serialize)]
struct ScoreSummary {
    score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    severity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

/// MCP server exposing the style checker.
#[derive(Clone)]
pub struct StyleServer {
    analyzer: Arc<Analyzer>,
    documents: Arc<Mutex<DiagnosticCollection>>,
    max_input_bytes: Option<usize>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

#[tool_router]
impl StyleServer {
    /// Create a server around `analyzer`, rejecting text over `max_input_bytes`.
    pub fn new(analyzer: Analyzer, max_input_bytes: Option<usize>) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            documents: Arc::new(Mutex::new(DiagnosticCollection::new())),
            max_input_bytes,
            tool_router: Self::tool_router(),
        }
    }

    /// Create a server using the analyzer described by `config`.
    pub fn from_config(config: &Config, max_input_bytes: Option<usize>) -> AnalysisResult<Self> {
        Ok(Self::new(Analyzer::from_config(config)?, max_input_bytes))
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
        });

        let text = if params.format == "json" {
            to_json(&info)?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Check text for style issues.
    #[tool(
        description = "Check text for complex words, adverbs, qualifiers, hard sentences and passive voice. Returns diagnostics with 0-based line/character ranges. Pass a uri to store the result for get_diagnostics."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", uri = ?params.uri))]
    fn check_text(
        &self,
        Parameters(params): Parameters<CheckTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "check_text", bytes = params.text.len(), "executing MCP tool");
        self.check_size(&params.text)?;

        let diagnostics = self.analyzer.analyze(&TextDocument::new(&params.text));
        let json = to_json(&diagnostics)?;
        if let Some(ref uri) = params.uri {
            self.documents()?.set(uri, diagnostics);
        }

        tracing::info!(tool = "check_text", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Fetch the stored diagnostics of a document.
    #[tool(description = "Get the diagnostics stored for a uri by a previous check_text call.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", uri = %params.uri))]
    fn get_diagnostics(
        &self,
        Parameters(params): Parameters<DocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_diagnostics", "executing MCP tool");
        let documents = self.documents()?;
        let diagnostics = documents.get(&params.uri).ok_or_else(|| {
            McpError::invalid_params(format!("no diagnostics stored for {}", params.uri), None)
        })?;
        let json = to_json(&diagnostics)?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Forget a document's diagnostics.
    #[tool(description = "Drop the diagnostics stored for a uri, e.g. when the document is closed.")]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server", uri = %params.uri))]
    fn close_document(
        &self,
        Parameters(params): Parameters<DocumentParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "close_document", "executing MCP tool");
        self.documents()?.delete(&params.uri);
        Ok(CallToolResult::success(vec![Content::text(format!(
            "closed {}",
            params.uri
        ))]))
    }

    /// Split text into sentences.
    #[tool(
        description = "Split text into sentences the way the checker sees them. Returns each sentence's range, difficulty score and text."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn split_sentences(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "split_sentences", "executing MCP tool");
        self.check_size(&params.text)?;

        let document = TextDocument::new(&params.text);
        let sentences: Vec<SentenceSummary> = self
            .analyzer
            .sentences(&document)
            .iter()
            .map(|sentence| SentenceSummary {
                range: sentence.range(),
                score: readability::score(sentence),
                text: sentence.text(),
            })
            .collect();

        tracing::info!(
            tool = "split_sentences",
            sentences = sentences.len(),
            "MCP tool completed"
        );
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &sentences,
        )?)]))
    }

    /// Score one sentence.
    #[tool(
        description = "Score the difficulty of a single sentence. Above 10 is hard, above 14 is very hard."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn score_sentence(
        &self,
        Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "score_sentence", "executing MCP tool");
        self.check_size(&params.text)?;

        let document = TextDocument::new(&params.text);
        let fragments = document.lines().map(LineFragment::from_line).collect();
        let summary = match Sentence::new(fragments) {
            Some(sentence) => {
                let difficulty = readability::difficulty(&sentence);
                ScoreSummary {
                    score: readability::score(&sentence),
                    severity: difficulty.as_ref().map(|d| d.severity.to_string()),
                    message: difficulty.map(|d| d.message),
                }
            }
            None => ScoreSummary {
                score: 0,
                severity: None,
                message: None,
            },
        };

        tracing::info!(tool = "score_sentence", score = summary.score, "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(to_json(
            &summary,
        )?)]))
    }
}

impl StyleServer {
    fn check_size(&self, text: &str) -> Result<(), McpError> {
        match self.max_input_bytes {
            Some(max) if text.len() > max => Err(McpError::invalid_params(
                format!("input too large: {} bytes (limit: {max} bytes)", text.len()),
                None,
            )),
            _ => Ok(()),
        }
    }

    fn documents(&self) -> Result<MutexGuard<'_, DiagnosticCollection>, McpError> {
        self.documents
            .lock()
            .map_err(|_| McpError::internal_error("diagnostic store poisoned", None))
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))
}

#[tool_handler]
impl ServerHandler for StyleServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use check_text to find style issues in prose.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
