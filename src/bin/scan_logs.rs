use std::path::PathBuf;

use clap::Parser;
use theme_tokens_core::logs::{read_log_export, scan_log_export, ScanFilter};

/// Print the entries of a JSON log export that carry an error status or mention a keyword
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log export with a top-level `result` array
    file: PathBuf,
    /// Case-insensitive keyword, repeatable (default: vibe)
    #[arg(long = "keyword")]
    keywords: Vec<String>,
    /// Case-sensitive error code prefix, repeatable (default: PGRST)
    #[arg(long = "code")]
    codes: Vec<String>,
    /// Do not match on 4xx/5xx status codes
    #[arg(long)]
    no_status: bool,
}
impl Cli {
    fn filter(&self) -> ScanFilter {
        let mut filter = ScanFilter::default();
        if !self.keywords.is_empty() {
            filter.keywords = self.keywords.clone();
        }
        if !self.codes.is_empty() {
            filter.codes = self.codes.clone();
        }
        filter.error_status = !self.no_status;
        filter
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let export = read_log_export(&cli.file)?;
    let report = scan_log_export(&export, &cli.filter());

    println!("Total entries: {}", report.total);
    for entry in &report.matches {
        println!("\n{entry}");
    }
    Ok(())
}
