//! # Fitcalc CLI
//!
//! Terminal front end for the fitcalc_core calculators.
//!
//! ```bash
//! fitcalc list
//! fitcalc compute bmi -f height=180 -f weight=80
//! fitcalc compute one-rep-max -f lifted=100 -f reps=5 -f formula=brzycki --json
//! fitcalc classify bmi 31.2
//! fitcalc bands blood-pressure.systolic
//! fitcalc last tdee
//! ```
//!
//! Results are recorded in a JSON history file (see [`Settings`]) unless
//! `--no-save` is given.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fitcalc_core::catalog;
use fitcalc_core::classification::{self, metric_keys};
use fitcalc_core::formulas::{generate_formulas_markdown, FormulaCategory};
use fitcalc_core::store::StoredResult;
use fitcalc_core::{
    compute_raw, CalcResult, CalculatorKind, CalculatorResult, JsonFileStore, RawInput,
    ResultStore, Settings,
};

#[derive(Parser)]
#[command(name = "fitcalc", version, about = "Health and fitness calculators")]
struct Cli {
    /// Settings file (JSON); defaults to $FITCALC_CONFIG
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every calculator
    List,

    /// Run a calculator
    Compute {
        /// Calculator slug (see `fitcalc list`)
        slug: String,

        /// Input field as name=value; repeat for each field
        #[arg(short = 'f', long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Do not record the result in history
        #[arg(long)]
        no_save: bool,
    },

    /// Classify a value against a band table
    Classify { metric: String, value: f64 },

    /// Print a band table
    Bands {
        /// Metric key; omit to list all keys
        metric: Option<String>,
    },

    /// Show the last stored result of a calculator
    Last {
        slug: String,

        #[arg(long)]
        json: bool,
    },

    /// List recently used calculators
    Recent,

    /// Clear the result history
    Clear,

    /// Print the formula reference (markdown)
    Formulas,
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected name=value, got '{}'", s))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing field name in '{}'", s));
    }
    Ok((name.to_string(), value.to_string()))
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CalcResult<()> {
    let settings = Settings::resolve(cli.config.as_deref())?;
    tracing::debug!(?settings, "settings loaded");

    match cli.command {
        Command::List => {
            print_catalog();
            Ok(())
        }
        Command::Compute {
            slug,
            fields,
            json,
            no_save,
        } => {
            let raw: RawInput = fields.into_iter().collect();
            let result = compute_raw(&slug, &raw)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&result, settings.decimals);
            }

            if !no_save {
                let saved = open_store(&settings).and_then(|mut store| store.record(result, Utc::now()));
                if let Err(e) = saved {
                    tracing::warn!("result not saved to history: {}", e);
                }
            }
            Ok(())
        }
        Command::Classify { metric, value } => {
            let band = classification::classify(&metric, value)?;
            println!(
                "{} {} -> {} ({}, [{}, {}))",
                metric,
                value,
                band.label,
                band.standard,
                band.lower,
                upper_bound(band.upper)
            );
            Ok(())
        }
        Command::Bands { metric: None } => {
            for key in metric_keys() {
                println!("{}", key);
            }
            Ok(())
        }
        Command::Bands { metric: Some(metric) } => {
            let table = classification::table(&metric)?;
            println!("{} ({})", table.metric, table.standard);
            for band in table.bands {
                let upper = upper_bound(band.upper.is_finite().then_some(band.upper));
                println!("  [{:>6}, {:>6})  {}", band.lower, upper, band.label);
            }
            Ok(())
        }
        Command::Last { slug, json } => {
            let kind: CalculatorKind = slug.parse()?;
            let mut store = open_store(&settings)?;
            match store.last_result(kind, Utc::now())? {
                Some(stored) if json => println!("{}", serde_json::to_string_pretty(&stored)?),
                Some(stored) => print_stored(&stored, settings.decimals),
                None => println!("No saved {} result.", kind),
            }
            Ok(())
        }
        Command::Recent => {
            let store = open_store(&settings)?;
            let recent = store.recent();
            if recent.is_empty() {
                println!("No calculators used yet.");
            }
            for kind in recent {
                let title = catalog::info(kind).map_or(kind.slug(), |info| info.title);
                println!("{:<16} {}", kind.slug(), title);
            }
            Ok(())
        }
        Command::Clear => {
            open_store(&settings)?.clear()?;
            println!("History cleared.");
            Ok(())
        }
        Command::Formulas => {
            print!("{}", generate_formulas_markdown());
            Ok(())
        }
    }
}

fn upper_bound(upper: Option<f64>) -> String {
    upper.map_or_else(|| "∞".to_string(), |u| u.to_string())
}

fn open_store(settings: &Settings) -> CalcResult<JsonFileStore> {
    JsonFileStore::open(settings.history_file(), settings.history_ttl(), settings.recent_limit)
}

fn print_catalog() {
    for category in FormulaCategory::all() {
        println!("{}", category.display_name());
        for info in catalog::in_category(category) {
            println!("  {:<16} {}", info.slug, info.summary);
            let variants = info.kind.variant_keys();
            if !variants.is_empty() {
                println!("  {:<16} formula: {}", "", variants.join(" | "));
            }
            println!("  {:<16} fields: {}", "", info.fields.join(", "));
        }
        println!();
    }
}

fn print_result(result: &CalculatorResult, decimals: usize) {
    let title = catalog::info(result.calculator).map_or(result.calculator.slug(), |info| info.title);
    println!("{}", title);
    println!("  {:<28} {}", result.primary.label, result.display_value(decimals));
    if let Some(band) = &result.classification {
        println!("  {:<28} {} ({})", "Category", band.label, band.standard);
    }
    for metric in &result.secondary {
        println!("  {:<28} {}", metric.label, metric.display(decimals));
    }
    println!("  {:<28} {}", "Formula", result.formula.metadata().name);
}

fn print_stored(stored: &StoredResult, decimals: usize) {
    print_result(&stored.result, decimals);
    println!("  {:<28} {}", "Saved", stored.saved_at.format("%Y-%m-%d %H:%M UTC"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("weight=80"), Ok(("weight".to_string(), "80".to_string())));
        assert_eq!(parse_field("sex= male"), Ok(("sex".to_string(), " male".to_string())));
        assert!(parse_field("weight").is_err());
        assert!(parse_field("=80").is_err());
    }

    #[test]
    fn test_upper_bound() {
        assert_eq!(upper_bound(Some(25.0)), "25");
        assert_eq!(upper_bound(None), "∞");
    }

    #[test]
    fn test_compute_args() {
        let cli = Cli::try_parse_from([
            "fitcalc", "compute", "bmi", "-f", "height=180", "--field", "weight=80", "--no-save",
        ])
        .unwrap();
        match cli.command {
            Command::Compute { slug, fields, json, no_save } => {
                assert_eq!(slug, "bmi");
                assert_eq!(
                    fields,
                    vec![
                        ("height".to_string(), "180".to_string()),
                        ("weight".to_string(), "80".to_string()),
                    ]
                );
                assert!(!json);
                assert!(no_save);
            }
            _ => panic!("expected compute"),
        }
    }
}
