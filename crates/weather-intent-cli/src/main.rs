//! Command-line adapter for the weather-intent resolver.
//!
//! Maps the slot flags an upstream voice assistant would supply onto a
//! token set, resolves it against the chosen locale, and prints the
//! normalized query as JSON for downstream forecast and report tooling.
//! This binary is the single place the clock is read: the reference
//! "today" comes from `Utc::now()` in the configured timezone, once, at
//! startup.

use anyhow::{bail, Result};
use chrono::Utc;
use chrono_tz::Tz;
use clap::Parser;
use weather_intent::{build_query, locale, IntentError, RequestTokens};

#[derive(Parser, Debug)]
#[command(
    name = "weather-intent",
    version,
    about = "Resolve voice-assistant weather slots into a normalized query"
)]
struct Args {
    /// Forecast day ("tomorrow", "friday", "12 march")
    #[arg(short, long)]
    day: Option<String>,

    /// Forecast time ("morning", "17 30", "18"); needs a day
    #[arg(short, long)]
    time: Option<String>,

    /// Forecast location, passed through to the provider
    #[arg(short, long)]
    location: Option<String>,

    /// Ask whether a specific item (like an umbrella) is needed
    #[arg(short, long)]
    item: Option<String>,

    /// Ask whether a specific condition is active
    #[arg(short, long)]
    condition: Option<String>,

    /// Ask for a temperature forecast ("warm", "cold")
    #[arg(short = 'e', long)]
    temperature: Option<String>,

    /// Locale for the vocabulary tables
    #[arg(long, default_value = "en")]
    locale: String,

    /// IANA timezone the reference "today" is taken in
    #[arg(long, default_value = "UTC")]
    timezone: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let vocabulary = locale::for_language(&args.locale)?;
    let timezone: Tz = args
        .timezone
        .parse()
        .map_err(|_| IntentError::InvalidTimezone(args.timezone.clone()))?;
    let today = Utc::now().with_timezone(&timezone).date_naive();

    let tokens = RequestTokens {
        day: args.day,
        time: args.time,
        location: args.location,
        item: args.item,
        condition: args.condition,
        temperature: args.temperature,
    };

    let query = build_query(&tokens, today, &vocabulary);
    if query.status.is_error() {
        bail!("{}", query.status.message());
    }

    println!("{}", serde_json::to_string_pretty(&query)?);
    Ok(())
}
