use clap::{Parser, Subcommand};
use serde_json::Value;
use url::Url;

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Query a running deen-gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Backend and database diagnostics
    Status,
    /// List all surahs
    Surahs,
    /// Show one surah, optionally in a translation edition
    Surah {
        id: i64,
        #[arg(short, long)]
        edition: Option<String>,
    },
    /// List hadith collections
    Collections,
    /// Show a range of hadith from a collection
    Hadith {
        collection: String,
        #[arg(long, default_value_t = 1)]
        start: i64,
        #[arg(long, default_value_t = 150)]
        end: i64,
    },
    /// Prayer timings for a city
    Timings {
        city: String,
        country: String,
        #[arg(short, long, default_value_t = 2)]
        method: i64,
    },
    /// Convert a Gregorian date (DD-MM-YYYY) to Hijri
    Hijri { date: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = Url::parse(&cli.url)?;

    let request = match cli.command {
        Commands::Status => client.get(endpoint(&base, &["test"])?),
        Commands::Surahs => client.get(endpoint(&base, &["api", "quran", "surahs"])?),
        Commands::Surah { id, edition: None } => {
            client.get(endpoint(&base, &["api", "quran", "surah", id.to_string().as_str()])?)
        }
        Commands::Surah { id, edition: Some(edition) } => client.get(endpoint(
            &base,
            &["api", "quran", "surah", id.to_string().as_str(), "translation", edition.as_str()],
        )?),
        Commands::Collections => client.get(endpoint(&base, &["api", "hadith", "collections"])?),
        Commands::Hadith { collection, start, end } => client
            .get(endpoint(&base, &["api", "hadith", collection.as_str()])?)
            .query(&[("start", start), ("end", end)]),
        Commands::Timings { city, country, method } => client
            .get(endpoint(&base, &["api", "prayer", "timingsByCity"])?)
            .query(&[("city", city), ("country", country), ("method", method.to_string())]),
        Commands::Hijri { date } => client
            .get(endpoint(&base, &["api", "hijri", "convert"])?)
            .query(&[("date", date)]),
    };

    print_response(request.send().await?).await
}

/// Append `segments` to the gateway URL, percent-encoding each one.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, String> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| format!("{} cannot be a base URL", base))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
