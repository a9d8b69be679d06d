use std::{fs, path::Path};

use tempfile::TempDir;
use theme_tokens_core::{Error, Mode, TokenConfig, TokenExtractor, TokenSource};

const TOKENS_DIR: &str = "lib/design_system/tokens";

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(TOKENS_DIR)).unwrap();
    dir
}

fn write_source(root: &Path, source: &TokenSource, text: &str) {
    let path = root
        .join(TOKENS_DIR)
        .join(format!("{}_{}.dart", source.context, source.mode));
    fs::write(path, text).unwrap();
}

fn dart_source(source: &TokenSource) -> String {
    format!(
        "import 'package:flutter/material.dart';\n\n\
         // Generated tokens for {source}\n\
         class Tokens {{\n  \
           primary: Color(0xFF112233),\n  \
           secondary: Color(0xff445566),\n  \
           {}Accent: Color(0xFFa1b2c3),\n\
         }}\n",
        source.context
    )
}

fn output(root: &Path, name: &str) -> Option<String> {
    fs::read_to_string(root.join(TOKENS_DIR).join(name)).ok()
}

#[test]
fn writes_every_theme() {
    let dir = project();
    for source in &TokenSource::ALL {
        write_source(dir.path(), source, &dart_source(source));
    }

    let extractor = TokenExtractor::new(TokenConfig::new(dir.path()));
    let mut progress = vec![];
    let written = extractor.run(|theme| progress.push(theme.to_string())).unwrap();

    assert_eq!(written.len(), 10);
    assert_eq!(
        progress[0],
        "Wrote lib/design_system/tokens/main-light-theme.json (3 tokens)"
    );
    assert_eq!(
        progress[9],
        "Wrote lib/design_system/tokens/profile-dark-theme.json (3 tokens)"
    );
    assert_eq!(
        output(dir.path(), "social-dark-theme.json").unwrap(),
        r##"{
  "socialDark": {
    "primary": "#112233",
    "secondary": "#445566",
    "socialAccent": "#A1B2C3"
  }
}
"##
    );
}

#[test]
fn overwrites_existing_output() {
    let dir = project();
    for source in &TokenSource::ALL {
        write_source(dir.path(), source, "  only: Color(0xFF000000),\n");
    }
    fs::write(
        dir.path().join(TOKENS_DIR).join("main-light-theme.json"),
        "stale contents that are much longer than the fresh output",
    )
    .unwrap();

    TokenExtractor::new(TokenConfig::new(dir.path()))
        .run(|_| {})
        .unwrap();

    assert_eq!(
        output(dir.path(), "main-light-theme.json").unwrap(),
        "{\n  \"mainLight\": {\n    \"only\": \"#000000\"\n  }\n}\n"
    );
}

#[test]
fn missing_tokens_dir() {
    let dir = TempDir::new().unwrap();
    let err = TokenExtractor::new(TokenConfig::new(dir.path()))
        .run(|_| {})
        .unwrap_err();
    assert!(matches!(err, Error::MissingTokensDir(ref path) if path.ends_with(TOKENS_DIR)));
    assert!(err.to_string().starts_with("Tokens dir not found: "));
}

#[test]
fn missing_source_stops_the_run() {
    let dir = project();
    for source in TokenSource::ALL.iter().take(3) {
        write_source(dir.path(), source, &dart_source(source));
    }

    let mut progress = 0;
    let err = TokenExtractor::new(TokenConfig::new(dir.path()))
        .run(|_| progress += 1)
        .unwrap_err();

    assert_eq!(progress, 3);
    assert!(matches!(err, Error::MissingSource(ref path) if path.ends_with("social_dark.dart")));
    assert!(output(dir.path(), "social-light-theme.json").is_some());
    assert!(output(dir.path(), "social-dark-theme.json").is_none());
    assert!(output(dir.path(), "sports-light-theme.json").is_none());
}

#[test]
fn source_without_tokens_stops_the_run() {
    let dir = project();
    for source in &TokenSource::ALL {
        write_source(dir.path(), source, &dart_source(source));
    }
    let main_dark = TokenSource::new("main", Mode::Dark);
    write_source(dir.path(), &main_dark, "// nothing\nclass Empty {\n}\n");

    let err = TokenExtractor::new(TokenConfig::new(dir.path()))
        .run(|_| {})
        .unwrap_err();

    assert!(matches!(err, Error::NoTokens(ref path) if path.ends_with("main_dark.dart")));
    assert!(output(dir.path(), "main-light-theme.json").is_some());
    assert!(output(dir.path(), "main-dark-theme.json").is_none());
}

#[test]
fn custom_layout() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("assets")).unwrap();
    let source = TokenSource::new("activity", Mode::Light);
    fs::write(
        dir.path().join("assets/activity_light.tokens"),
        "  b: Color(0xFF0000ff),\n  a: Color(0xFFff0000),\n",
    )
    .unwrap();

    let config = TokenConfig::new(dir.path())
        .with_tokens_dir("assets")
        .with_source_extension("tokens");
    let extractor = TokenExtractor::new(config);
    let document = extractor.extract(&source).unwrap();
    assert_eq!(document.name, "activityLight");
    assert_eq!(
        document.tokens.iter().map(|(k, _)| k).collect::<Vec<_>>(),
        vec!["b", "a"]
    );

    let written = extractor.write(&source, &document).unwrap();
    assert_eq!(written.path, Path::new("assets/activity-light-theme.json"));
    assert_eq!(written.token_count, 2);
}
