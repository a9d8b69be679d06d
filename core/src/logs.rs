//! Filtering of JSON log exports (`{ "result": [ ...entries ] }`) down to the
//! entries worth reading: error statuses and keyword hits.

use std::{fmt, fs, path::Path};

use itertools::Itertools;
use serde_json::Value;

use crate::{Error, Result};

const MAX_TEXT_LEN: usize = 500;

#[derive(Debug, Clone, PartialEq)]
pub struct ScanFilter {
    /// Matched case-insensitively against the whole entry.
    pub keywords: Vec<String>,
    /// Matched case-sensitively against the whole entry.
    pub codes: Vec<String>,
    /// Match any `4xx`/`5xx` status.
    pub error_status: bool,
    /// Extra case-insensitive terms that select metadata items of a matched entry.
    pub meta_hints: Vec<String>,
}
impl Default for ScanFilter {
    fn default() -> Self {
        Self {
            keywords: vec!["vibe".to_string()],
            codes: vec!["PGRST".to_string()],
            error_status: true,
            meta_hints: vec!["select".to_string(), "error".to_string()],
        }
    }
}
impl ScanFilter {
    pub fn matches(&self, entry: &Value) -> bool {
        if self.error_status && status_text(entry).map_or(false, |s| is_error_status(&s)) {
            return true;
        }
        self.mentions(&entry.to_string(), &self.keywords)
    }
    fn mentions(&self, text: &str, keywords: &[String]) -> bool {
        let lower = text.to_lowercase();
        keywords.iter().any(|k| lower.contains(&k.to_lowercase()))
            || self.codes.iter().any(|c| text.contains(c.as_str()))
    }
    fn keeps_meta(&self, text: &str) -> bool {
        let terms = self
            .keywords
            .iter()
            .chain(&self.meta_hints)
            .cloned()
            .collect_vec();
        self.mentions(text, &terms)
    }
}

fn is_error_status(status: &str) -> bool {
    status.starts_with('4') || status.starts_with('5')
}

/// Status code as text, or `None` when absent or empty/zero/false.
fn status_text(entry: &Value) -> Option<String> {
    match entry.get("status_code")? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Array(a) if a.is_empty() => None,
        Value::Object(o) if o.is_empty() => None,
        value => Some(text_of(value)),
    }
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn field(entry: &Value, key: &str) -> String {
    entry.get(key).map(text_of).unwrap_or_default()
}

fn truncate(s: &str) -> String {
    s.chars().take(MAX_TEXT_LEN).collect()
}

/// One entry that passed the filter, trimmed down for display.
#[derive(Debug, Clone, PartialEq)]
pub struct LogMatch {
    pub method: String,
    pub path: String,
    pub status: Option<String>,
    pub message: String,
    pub metadata: Vec<String>,
}
impl LogMatch {
    fn new(entry: &Value, filter: &ScanFilter) -> Self {
        let metadata = match entry.get("metadata") {
            None | Some(Value::Null) => vec![],
            Some(Value::Array(items)) => items.iter().collect_vec(),
            Some(Value::String(s)) if s.is_empty() => vec![],
            Some(item) => vec![item],
        };
        Self {
            method: field(entry, "method"),
            path: field(entry, "path"),
            status: status_text(entry),
            message: truncate(&field(entry, "event_message")),
            metadata: metadata
                .into_iter()
                .map(text_of)
                .filter(|text| filter.keeps_meta(text))
                .map(|text| truncate(&text))
                .collect(),
        }
    }
}
impl fmt::Display for LogMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "=".repeat(60))?;
        writeln!(f, "Method: {} Path: {}", self.method, self.path)?;
        writeln!(f, "Status: {}", self.status.as_deref().unwrap_or_default())?;
        write!(f, "Message: {}", self.message)?;
        if !self.metadata.is_empty() {
            let meta = self.metadata.iter().map(|m| format!("Meta: {m}")).join("\n");
            write!(f, "\n{meta}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanReport {
    pub total: usize,
    pub matches: Vec<LogMatch>,
}

pub fn read_log_export(path: &Path) -> Result<Value> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| Error::LogExport {
        path: path.to_path_buf(),
        source,
    })
}

pub fn scan_log_export(export: &Value, filter: &ScanFilter) -> ScanReport {
    let entries = export
        .get("result")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    log::debug!("scanning {} log entries", entries.len());
    ScanReport {
        total: entries.len(),
        matches: entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .map(|entry| LogMatch::new(entry, filter))
            .collect(),
    }
}
