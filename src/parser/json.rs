use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

/// Parse a single JSON document
pub fn parse(content: &str) -> Result<Value> {
    serde_json::from_str(content).context("Failed to parse JSON document")
}

/// Render a document, newline-terminated
pub fn render(value: &Value, format: OutputFormat, indent: usize) -> Result<String> {
    let mut out = match format {
        OutputFormat::Compact => serde_json::to_string(value)?,
        OutputFormat::Pretty => {
            let indent = " ".repeat(indent);
            let formatter = PrettyFormatter::with_indent(indent.as_bytes());
            let mut buf = Vec::new();
            let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
            value
                .serialize(&mut serializer)
                .context("Failed to serialize JSON document")?;
            String::from_utf8(buf).context("Serialized JSON was not valid UTF-8")?
        }
    };
    out.push('\n');
    Ok(out)
}
