use anyhow::{bail, Context, Result};
use clap::Parser;
use country_match::{cli, config, input, reference, BatchReport, BatchRunner};
use country_match_common::{CountryMatcher, MatchMethod, MatchResult, PlaceContext};
use cli::{Cli, Commands};
use config::Config;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let config = Config::load().context("failed to load config")?;

    match cli.command {
        Commands::Match { place, year, parent_birth, spouse_birth, reference, json } => {
            let matcher = build_matcher(reference.or(config.reference_path.clone()), &config)?;
            let context = PlaceContext {
                year,
                parent_birth,
                spouse_birth,
                ..Default::default()
            };
            let result = matcher.match_place(&place, Some(&context));

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&place, &result);
            }
        }

        Commands::Batch { input, output, reference, threads, sample, unresolved_threshold } => {
            let inputs = input::read_inputs(&input)
                .with_context(|| format!("failed to read {}", input.display()))?;

            let mut matching = config.matching.clone();
            if let Some(threshold) = unresolved_threshold {
                matching.unresolved_threshold = threshold;
            }
            let map = reference::load_reference(
                reference.or(config.reference_path.clone()).as_deref(),
            )?;
            let digest = reference::reference_digest(&map)?;
            let countries = map.len();
            let matcher = CountryMatcher::new(map, matching).context("invalid match settings")?;

            let runner = BatchRunner::new(matcher)
                .threads(threads.or(config.threads))
                .progress(true);
            let batch = runner.run(&inputs)?;
            let distinct = batch.distinct;
            let report = BatchReport::new(&inputs, batch, digest, countries);

            let output = output.unwrap_or_else(|| input.with_extension("countries.json"));
            report
                .save(&output)
                .with_context(|| format!("failed to write {}", output.display()))?;

            print_summary(&report, distinct, sample.unwrap_or(config.unresolved_sample));
            println!("\nReport: {}", output.display());
        }

        Commands::Reference { file, show } => {
            let map = reference::load_reference(file.as_deref())?;
            println!("Countries: {}", map.len());
            println!("Digest:    {}", reference::reference_digest(&map)?);

            if let Some(iso2) = show {
                match map.get(&iso2) {
                    Some(data) => println!("{}", serde_json::to_string_pretty(data)?),
                    None => bail!("no reference record for '{}'", iso2),
                }
            }
        }

        Commands::Config { set_reference, show } => {
            let mut config = config;

            if let Some(path) = set_reference {
                config.set_reference_path(path)?;
                config.save()?;
                println!("Reference data path saved");
            }

            if show {
                println!("Settings ({}):", Config::config_path()?.display());
                println!(
                    "  Reference:         {}",
                    config
                        .reference_path
                        .as_ref()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| "built-in".to_string())
                );
                println!(
                    "  Threads:           {}",
                    config.threads.map(|n| n.to_string()).unwrap_or_else(|| "auto".to_string())
                );
                println!("  Unresolved sample: {}", config.unresolved_sample);
                println!("  Matching:");
                println!("{}", serde_json::to_string_pretty(&config.matching)?);
            }
        }
    }

    Ok(())
}

fn build_matcher(reference: Option<PathBuf>, config: &Config) -> Result<CountryMatcher> {
    let map = reference::load_reference(reference.as_deref())?;
    CountryMatcher::new(map, config.matching.clone()).context("invalid match settings")
}

fn print_result(place: &str, result: &MatchResult) {
    match (&result.iso2, result.method) {
        (Some(iso2), Some(method)) => {
            println!("{} -> {} ({:.2}, {}, {})", place, iso2, result.confidence, method, result.band());
        }
        _ => println!("{} -> unresolved ({:.2})", place, result.confidence),
    }
    if let Some(year) = result.details.as_ref().and_then(|d| d.historical_year) {
        println!("  historical name valid in {}", year);
    }
    for alt in result.alternatives() {
        println!("  alt {} {:.2} {}", alt.iso2, alt.confidence, alt.reason);
    }
}

fn print_summary(report: &BatchReport, distinct: usize, sample: usize) {
    let meta = &report.metadata;
    println!("\nPlaces: {} ({} distinct)", meta.total_locations, distinct);
    println!(
        "  high {} / medium {} / low {} / unmatched {}",
        meta.by_confidence.high,
        meta.by_confidence.medium,
        meta.by_confidence.low,
        meta.by_confidence.unmatched
    );
    let methods: Vec<String> = MatchMethod::ALL
        .iter()
        .map(|m| format!("{} {}", m, meta.by_method.get(*m)))
        .collect();
    println!("  {} / unmatched {}", methods.join(" / "), meta.by_method.unmatched);

    if report.unresolved.is_empty() || sample == 0 {
        return;
    }
    println!("\nUnresolved ({}):", report.unresolved.len());
    for entry in report.unresolved.iter().take(sample) {
        let guess = entry
            .best_guess
            .as_ref()
            .map(|g| format!("{} {:.2}", g.iso2, g.confidence))
            .unwrap_or_else(|| "-".to_string());
        println!("  #{} {} (best guess: {})", entry.index, entry.original, guess);
    }
}
