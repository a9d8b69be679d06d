use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Tokens dir not found: {}", .0.display())]
    MissingTokensDir(PathBuf),
    #[error("Missing token source file: {}", .0.display())]
    MissingSource(PathBuf),
    #[error("No tokens parsed from: {}", .0.display())]
    NoTokens(PathBuf),
    #[error("Invalid color literal: {0}")]
    InvalidColor(String),
    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("Invalid log export {}: {source}", .path.display())]
    LogExport {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
