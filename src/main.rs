use anyhow::Context;
use theme_tokens_core::{TokenConfig, TokenExtractor};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let root = std::env::current_dir().context("Cannot determine the project root")?;
    let extractor = TokenExtractor::new(TokenConfig::new(root));
    extractor.run(|theme| println!("{theme}"))?;
    Ok(())
}
