use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use country_json::models::{ApiCountry, Language};
use country_json::{Client, api, stats, storage, transform};
use std::io::BufRead;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "country-json",
    version,
    about = "Fetch REST Countries data and write a localized countries.json"
)]
struct Cli {
    /// Output file (format inferred by --format or extension).
    #[arg(short, long, default_value = storage::DEFAULT_OUTPUT)]
    out: PathBuf,
    /// Output format (json or csv). If omitted, inferred from --out extension.
    #[arg(long, value_enum)]
    format: Option<OutFormat>,
    /// Read a saved API response from this file instead of the network.
    #[arg(short, long, conflicts_with_all = ["url", "timeout"])]
    input: Option<PathBuf>,
    /// API base URL.
    #[arg(long, default_value = api::DEFAULT_BASE_URL)]
    url: String,
    /// Request timeout in seconds (default: HTTP client default).
    #[arg(long)]
    timeout: Option<u64>,
    /// Number of continents shown in the statistics.
    #[arg(long, default_value_t = 10)]
    top: usize,
    /// Language for statistics labels (de, en, fr, it, es).
    #[arg(short, long, default_value = "en")]
    language: String,
    /// Wait for Enter before exiting (for double-click launches).
    #[arg(long, default_value_t = false)]
    pause: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutFormat {
    Csv,
    Json,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let pause = cli.pause;

    eprintln!("🌍 Country JSON Generator");
    let code = match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ Error: {e:#}");
            ExitCode::FAILURE
        }
    };

    if pause {
        eprintln!("\nPress Enter to exit...");
        let mut line = String::new();
        let _ = std::io::stdin().lock().read_line(&mut line);
    }
    code
}

fn output_format(path: &Path, explicit: Option<OutFormat>) -> Result<OutFormat> {
    if let Some(f) = explicit {
        return Ok(f);
    }
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("json")
        .to_ascii_lowercase();
    match ext.as_str() {
        "json" => Ok(OutFormat::Json),
        "csv" => Ok(OutFormat::Csv),
        other => anyhow::bail!("unsupported format: {}", other),
    }
}

fn load_records(cli: &Cli) -> Result<Vec<ApiCountry>> {
    if let Some(input) = cli.input.as_ref() {
        eprintln!("📂 Reading {}...", input.display());
        return api::load_countries(input)
            .with_context(|| format!("load {}", input.display()));
    }

    let client = Client::new(&cli.url, cli.timeout.map(Duration::from_secs))
        .context("build HTTP client")?;
    eprintln!("📡 Fetching data from REST Countries API...");
    let records = client.fetch().context("fetch countries")?;
    eprintln!("✅ Data received successfully!");
    Ok(records)
}

fn run(cli: Cli) -> Result<()> {
    // fail on a bad --out before touching the network
    let format = output_format(&cli.out, cli.format)?;
    let language = Language::from_tag(&cli.language);

    let records = load_records(&cli)?;
    eprintln!("🔄 Processing {} countries...", records.len());
    let countries = transform::transform_all(&records);
    eprintln!("✨ Processed {} countries", countries.len());

    match format {
        OutFormat::Json => storage::save_json(&countries, &cli.out)?,
        OutFormat::Csv => storage::save_csv(&countries, &cli.out)?,
    }
    let shown = std::path::absolute(&cli.out).unwrap_or_else(|_| cli.out.clone());
    eprintln!("💾 Saved to {}", shown.display());
    eprintln!("📊 Total countries: {}", countries.len());
    log::info!(
        "wrote {} of {} records as {:?}",
        countries.len(),
        records.len(),
        format
    );

    println!("\n📈 Statistics:");
    for c in stats::top_continents(&countries, cli.top) {
        println!("   {}: {} countries", c.label(language), c.count);
    }

    Ok(())
}
