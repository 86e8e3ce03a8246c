pub mod json;
pub mod jsonl;

use crate::cli::output::OutputFormat;
use anyhow::Result;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Json,
    JsonLines,
}

impl FileType {
    /// Detect file type from extension
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "jsonl" | "ndjson" => FileType::JsonLines,
            _ => FileType::Json,
        }
    }
}

/// Parse file content into the documents it holds
pub fn parse_documents(content: &str, file_type: FileType) -> Result<Vec<Value>> {
    match file_type {
        FileType::Json => Ok(vec![json::parse(content)?]),
        FileType::JsonLines => jsonl::parse(content),
    }
}

/// Serialize documents back into the layout of `file_type`
pub fn render_documents(
    documents: &[Value],
    file_type: FileType,
    format: OutputFormat,
    indent: usize,
) -> Result<String> {
    match file_type {
        FileType::Json => {
            let mut out = String::new();
            for document in documents {
                out.push_str(&json::render(document, format, indent)?);
            }
            Ok(out)
        }
        FileType::JsonLines => jsonl::render(documents),
    }
}
