mod table;

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pulpboard_core::{
    expand_key, parse_args, DashboardService, FileDashboardRepository, RawMaterialsInput,
    RecommendationUseCase, UpsertDashboardInput, WeekEntryInput,
};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pulpboard")]
#[command(about = "Monthly production dashboard for the mango pulp line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Record a month (usage: record "March 2025" target:500 "week:Week 1=120/30/15")
    Record {
        /// Month label followed by key:value metadata and week: entries
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Upsert records from a JSON file (single document or array)
    Import { file: PathBuf },
    /// List all recorded months
    List,
    /// Print recommendations for every recorded month
    Recommend,
}

/// LABEL=PRODUCTION[/SUGAR/PULP]; every numeric part is optional and kept
/// as text so the core's coercion decides what it means.
fn parse_week_spec(spec: &str) -> WeekEntryInput {
    let (label, numbers) = match spec.split_once('=') {
        Some((label, rest)) => (label.to_string(), rest),
        None => (spec.to_string(), ""),
    };

    let mut parts = numbers.split('/').map(str::trim);
    let mut next_value = || {
        parts
            .next()
            .filter(|s| !s.is_empty())
            .map(|s| Value::String(s.to_string()))
    };

    WeekEntryInput {
        week_label: label,
        production: next_value(),
        sugar_used: next_value(),
        mango_pulp_used: next_value(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let repo = FileDashboardRepository::new(None)?;
    let service = DashboardService::new(repo.clone());

    match cli.command {
        Commands::Record { args } => {
            if args.is_empty() {
                println!("Error: Month is required.");
                return Ok(());
            }

            let parsed = parse_args(&args);
            if parsed.month.is_empty() {
                println!("Error: Month is required.");
                return Ok(());
            }

            // Normalize metadata keys
            let known_keys = vec!["target", "actual", "sugar", "pulp"];
            let mut normalized = HashMap::new();
            for (key, value) in parsed.metadata {
                match expand_key(&key, &known_keys) {
                    Ok(full_key) => {
                        normalized.insert(full_key, value);
                    }
                    Err(e) => {
                        println!("Warning: {}", e);
                    }
                }
            }

            let as_value = |key: &str| normalized.get(key).map(|v| Value::String(v.clone()));

            let raw_materials_bought = if normalized.contains_key("sugar")
                || normalized.contains_key("pulp")
            {
                Some(RawMaterialsInput {
                    sugar: as_value("sugar"),
                    mango_pulp: as_value("pulp"),
                })
            } else {
                None
            };

            let weeks: Vec<WeekEntryInput> =
                parsed.weeks.iter().map(|s| parse_week_spec(s)).collect();

            let input = UpsertDashboardInput {
                month: parsed.month,
                target_production: as_value("target"),
                weeks: if weeks.is_empty() { None } else { Some(weeks) },
                raw_materials_bought,
                actual_production: as_value("actual"),
            };

            let record = service.upsert(input)?;
            println!(
                "Recorded {}: target {}, actual {}, carryover {:+}",
                record.month, record.target_production, record.actual_production, record.carryover
            );
            for week in &record.weeks {
                println!("  {}: {} units", week.week_label, week.production);
            }
        }
        Commands::Import { file } => {
            let text = std::fs::read_to_string(&file)?;
            let value: Value = serde_json::from_str(&text)?;
            let inputs: Vec<UpsertDashboardInput> = match value {
                Value::Array(items) => items
                    .into_iter()
                    .map(serde_json::from_value)
                    .collect::<Result<_, _>>()?,
                other => vec![serde_json::from_value(other)?],
            };

            for input in inputs {
                let record = service.upsert(input)?;
                println!("Saved dashboard entry for {}.", record.month);
            }
        }
        Commands::List => {
            let records = service.list_all()?;
            if records.is_empty() {
                println!("No months recorded yet.");
            } else {
                println!("{}", table::render_dashboard(&records));
            }
        }
        Commands::Recommend => {
            let usecase = RecommendationUseCase::new(&repo);
            let reports = usecase.reports()?;
            if reports.is_empty() {
                println!("No months recorded yet.");
            } else {
                table::print_reports(&reports);
            }
        }
    }

    Ok(())
}
