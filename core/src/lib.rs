use std::{fmt, fs, path::PathBuf};

pub use color::TokenColor;
pub use config::TokenConfig;
pub use document::ThemeDocument;
pub use error::{Error, Result};
pub use mapping::{parse_token_line, TokenMapping};
pub use source::{Mode, TokenSource};

mod color;
pub mod config;
mod document;
mod error;
pub mod logs;
mod mapping;
mod source;

/// Report for one theme asset that made it to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct WrittenTheme {
    pub source: TokenSource,
    /// Relative to the project root when the output lives under it.
    pub path: PathBuf,
    pub token_count: usize,
}
impl fmt::Display for WrittenTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Wrote {} ({} tokens)",
            self.path.display(),
            self.token_count
        )
    }
}

/// Turns `<context>_<mode>.dart` token sources into `<context>-<mode>-theme.json` assets.
#[derive(Debug, Clone)]
pub struct TokenExtractor {
    config: TokenConfig,
}
impl TokenExtractor {
    pub fn new(config: TokenConfig) -> Self {
        Self { config }
    }
    pub fn config(&self) -> &TokenConfig {
        &self.config
    }
    pub fn input_path(&self, source: &TokenSource) -> PathBuf {
        self.config
            .tokens_path()
            .join(source.input_file_name(&self.config.source_extension))
    }
    pub fn output_path(&self, source: &TokenSource) -> PathBuf {
        self.config.tokens_path().join(source.output_file_name())
    }

    /// Reads and parses one source. Fails when the file is missing or holds no tokens.
    pub fn extract(&self, source: &TokenSource) -> Result<ThemeDocument> {
        let path = self.input_path(source);
        if !path.is_file() {
            return Err(Error::MissingSource(path));
        }
        log::debug!("reading {source} from {}", path.display());
        let text = fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let tokens = TokenMapping::parse(&text);
        if tokens.is_empty() {
            return Err(Error::NoTokens(path));
        }
        Ok(ThemeDocument::new(source, tokens))
    }

    /// Writes `document` over the source's theme asset.
    pub fn write(&self, source: &TokenSource, document: &ThemeDocument) -> Result<WrittenTheme> {
        let path = self.output_path(source);
        fs::write(&path, document.to_json()?).map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
        Ok(WrittenTheme {
            source: *source,
            path: self.config.relative(&path).to_path_buf(),
            token_count: document.tokens.len(),
        })
    }

    /// Processes every source in [`TokenSource::ALL`] order and stops at the first failure.
    /// Assets written before the failure stay on disk.
    pub fn run(&self, mut on_written: impl FnMut(&WrittenTheme)) -> Result<Vec<WrittenTheme>> {
        let tokens_path = self.config.tokens_path();
        if !tokens_path.is_dir() {
            return Err(Error::MissingTokensDir(tokens_path));
        }
        let mut written = Vec::with_capacity(TokenSource::ALL.len());
        for source in &TokenSource::ALL {
            let document = self.extract(source)?;
            let theme = self.write(source, &document)?;
            on_written(&theme);
            written.push(theme);
        }
        Ok(written)
    }
}
