use std::path::{Path, PathBuf};

pub const DEFAULT_TOKENS_DIR: &str = "lib/design_system/tokens";
pub const DEFAULT_SOURCE_EXTENSION: &str = "dart";

/// Where the extractor looks for token sources and writes theme assets.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenConfig {
    /// Progress lines are reported relative to this directory.
    pub project_root: PathBuf,
    /// Relative to `project_root`.
    pub tokens_dir: PathBuf,
    pub source_extension: String,
}
impl TokenConfig {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            tokens_dir: PathBuf::from(DEFAULT_TOKENS_DIR),
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
        }
    }
    pub fn with_tokens_dir(mut self, tokens_dir: impl Into<PathBuf>) -> Self {
        self.tokens_dir = tokens_dir.into();
        self
    }
    pub fn with_source_extension(mut self, ext: impl Into<String>) -> Self {
        self.source_extension = ext.into();
        self
    }
    pub fn tokens_path(&self) -> PathBuf {
        self.project_root.join(&self.tokens_dir)
    }
    pub(crate) fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.project_root).unwrap_or(path)
    }
}

#[test]
fn test_defaults() {
    let config = TokenConfig::new("/app");
    assert_eq!(
        config.tokens_path(),
        PathBuf::from("/app/lib/design_system/tokens")
    );
    assert_eq!(config.source_extension, "dart");
    assert_eq!(
        config.relative(Path::new("/app/lib/design_system/tokens/main-light-theme.json")),
        Path::new("lib/design_system/tokens/main-light-theme.json")
    );
}
