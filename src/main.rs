//! Lookalike Forge - typosquatting and phishing look-alike domain generation
//!
//! Reads a list of protected domains, generates look-alike candidates for each,
//! and writes the deduplicated result to a file.

use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use lookalike_forge::{
    domain::load_protected_domains, output::write_outcome, ForgeConfig, ForgeError,
    GenerationOutcome, OutputFormat, VariantEngine, VariantKind,
};
use tracing_subscriber::EnvFilter;

const INPUT_FILE_NAME: &str = "protected_domains.txt";
const OUTPUT_FILE_NAME: &str = "generated_phishing_domains.txt";

#[derive(Parser)]
#[command(name = "lookalike-forge", version)]
#[command(about = "Generate typosquatting and phishing look-alike domains from a list of protected domains")]
struct Cli {
    /// File with one protected domain per line [default: ~/Desktop/protected_domains.txt]
    #[arg(short, long, env = "LOOKALIKE_INPUT")]
    input: Option<PathBuf>,

    /// Where to write generated domains [default: ~/Desktop/generated_phishing_domains.txt]
    #[arg(short, long, env = "LOOKALIKE_OUTPUT")]
    output: Option<PathBuf>,

    /// JSON file overriding the TLD, prefix, homoglyph or insertion tables
    #[arg(short, long, env = "LOOKALIKE_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Also combine each unmodified main label with every TLD
    #[arg(long)]
    tld_swap: bool,

    /// Hide the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    dump_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    // .env must be loaded before clap reads env-backed arguments
    if let Err(e) = lookalike_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        match e.downcast_ref::<ForgeError>() {
            Some(forge_error) => eprintln!("{}", forge_error.user_message()),
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Resolve a file name against the desktop directory, falling back to the working directory
fn default_path(file_name: &str) -> PathBuf {
    dirs::desktop_dir()
        .filter(|d| d.is_dir())
        .map(|d| d.join(file_name))
        .unwrap_or_else(|| PathBuf::from(file_name))
}

fn load_config(cli: &Cli) -> Result<ForgeConfig, ForgeError> {
    let config = match &cli.config {
        Some(path) => ForgeConfig::load(path)?,
        None => ForgeConfig::default(),
    };

    if cli.tld_swap {
        Ok(config.with_tld_swap(true))
    } else {
        Ok(config)
    }
}

/// Main generation workflow
fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    if cli.dump_config {
        println!("{}", config.to_json_pretty()?);
        return Ok(());
    }

    let input = cli.input.clone().unwrap_or_else(|| default_path(INPUT_FILE_NAME));
    let output = cli.output.clone().unwrap_or_else(|| default_path(OUTPUT_FILE_NAME));

    println!("🛡️  Lookalike Forge - look-alike domain generation");
    println!("═══════════════════════════════════════════════════");
    println!("📥 Protected domains: {}", input.display());
    println!("📤 Output file:       {}", output.display());
    println!("───────────────────────────────────────────────────");

    let domains = load_protected_domains(&input)?;
    if domains.is_empty() {
        println!("⚠️  No protected domains found in {}", input.display());
        return Ok(());
    }
    println!("📋 Read {} protected domain(s)", domains.len());

    let engine = VariantEngine::new(config);
    let progress = progress_bar(domains.len() as u64, cli.no_progress);
    let outcome = engine.generate_with(&domains, |domain| {
        progress.set_message(domain.to_string());
        progress.inc(1);
    });
    progress.finish_and_clear();

    write_outcome(&output, &outcome, cli.format.into())?;

    display_summary(&outcome, &output);
    Ok(())
}

fn progress_bar(len: u64, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }

    let progress = ProgressBar::new(len);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:30.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    progress.set_style(style);
    progress
}

/// Print per-generator counts and skipped domains
fn display_summary(outcome: &GenerationOutcome, output: &Path) {
    println!();
    if !outcome.skipped.is_empty() {
        println!("⚠️  Skipped Domains ({}):", outcome.skipped.len());
        for skipped in &outcome.skipped {
            println!("   {} - {}", skipped.domain, skipped.reason);
        }
        println!();
    }

    println!("📈 Summary:");
    for kind in VariantKind::ALL {
        let count = outcome.count(kind);
        if count > 0 {
            println!("   {:<14} {}", kind.to_string(), count);
        }
    }
    println!("   📊 Protected domains: {}", outcome.processed);
    println!("   ⏱️  Total time: {:.2}s", outcome.duration.as_secs_f32());
    println!();
    println!(
        "✅ Generated {} unique domains, saved to {}",
        outcome.total(),
        output.display()
    );
}
