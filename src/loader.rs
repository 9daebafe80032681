// 📂 Loader - file on disk → Node tree → Ledger

use crate::builder::{build, Ledger};
use crate::config::InputFormat;
use crate::error::ParseError;
use crate::tree::Node;
use crate::xml;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Parse document text in the given format
pub fn parse_document(text: &str, format: InputFormat) -> Result<Node, ParseError> {
    match format {
        InputFormat::Json => {
            serde_json::from_str(text).map_err(|e| ParseError::Document(e.to_string()))
        }
        InputFormat::Xml | InputFormat::Auto => xml::parse_str(text),
    }
}

/// Read a document from disk and build its ledger
pub fn load_ledger(path: &Path, format: InputFormat) -> Result<Ledger> {
    let format = format.resolve(path);
    info!(path = %path.display(), ?format, "loading ledger");

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let root = parse_document(&text, format)
        .with_context(|| format!("Failed to parse document: {}", path.display()))?;

    let ledger =
        build(&root).with_context(|| format!("Failed to build ledger from: {}", path.display()))?;

    Ok(ledger)
}
