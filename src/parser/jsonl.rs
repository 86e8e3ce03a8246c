use anyhow::{Context, Result};
use serde_json::Value;

/// Parse newline-delimited JSON, one document per non-blank line
pub fn parse(content: &str) -> Result<Vec<Value>> {
    let mut documents = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let document = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", line_num + 1))?;
        documents.push(document);
    }

    Ok(documents)
}

pub fn render(documents: &[Value]) -> Result<String> {
    let mut out = String::new();
    for document in documents {
        out.push_str(&serde_json::to_string(document)?);
        out.push('\n');
    }
    Ok(out)
}
