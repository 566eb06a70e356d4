//! Liasse command-line analyzer
//!
//! Loads a trial balance and prints the derived statements and diagnostics.

mod cli;
mod input;
mod output;

use std::process::ExitCode;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use liasse_core::analysis::{AnalysisService, CompanyProfile, HealthScore};
use liasse_core::balance::BalanceSummary;
use liasse_core::ratios::{FinancialAggregates, RatioClassifier};
use liasse_core::regime::{NotesRecap, RegimeCode, RegimeTable};
use liasse_core::sig::SigTable;
use liasse_shared::{AppConfig, AppError, LoggingConfig};

use cli::{Cli, Commands, OutputFormat};
use output::Renderer;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = AppConfig::load().map_err(AppError::from)?;
    init_tracing(&config.logging, cli.log_json);
    debug!(?config, "Configuration loaded");

    let renderer = Renderer::new(config.engine.currency_label.clone());

    match &cli.command {
        Commands::Summary(args) => {
            let input = input::load(args)?;
            let summary = BalanceSummary::from_entries(&input.current);
            emit(cli.format, &summary, || renderer.summary(&summary))?;
        }
        Commands::Sig(args) => {
            let input = input::load(args)?;
            let table = SigTable::build(&input.current, &input.prior);
            emit(cli.format, &table, || renderer.sig(&table))?;
        }
        Commands::Ratios(args) => {
            let input = input::load(args)?;
            let aggregates = FinancialAggregates::from_entries(&input.current);
            let ratios = RatioClassifier::evaluate_all(&aggregates);
            let health =
                HealthScore::compute_with_currency(&aggregates, &config.engine.currency_label);
            emit(
                cli.format,
                &RatiosReport {
                    aggregates: &aggregates,
                    ratios: &ratios,
                    health: &health,
                },
                || renderer.ratios(&ratios, &health),
            )?;
        }
        Commands::Page(args) => {
            let input = input::load(&args.input)?;
            let section = AnalysisService::analyze(
                &args.page,
                &input.current,
                &input.prior,
                &input.company,
                &config.tax,
                &config.engine.currency_label,
            );
            info!(page = %args.page, cards = section.cards.len(), "Page analyzed");
            emit(cli.format, &section, || renderer.section(&section))?;
        }
        Commands::Recap(args) => {
            let (label, company) = match &args.input {
                Some(path) => {
                    let input = input::read(path)?;
                    (input.regime, input.company)
                }
                None => (None, CompanyProfile::default()),
            };
            let code = resolve_regime(
                args.regime.as_deref().or(label.as_deref()),
                &company,
                &config.engine.default_regime,
            );
            let regime = RegimeTable::get(code);
            let lines = NotesRecap::build(code);
            emit(
                cli.format,
                &RecapReport {
                    regime,
                    notes: &lines,
                },
                || renderer.recap(regime, &lines),
            )?;
        }
    }

    Ok(())
}

/// Exact code first, then free-text detection, then the configured default.
fn resolve_regime(requested: Option<&str>, company: &CompanyProfile, default: &str) -> RegimeCode {
    let label = requested.or_else(|| (!company.regime.is_empty()).then_some(company.regime.as_str()));
    match label {
        Some(label) => label
            .parse()
            .unwrap_or_else(|_| RegimeCode::detect(label)),
        None => RegimeCode::parse_or_default(default),
    }
}

fn init_tracing(logging: &LoggingConfig, force_json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json || force_json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn emit<T: Serialize>(
    format: OutputFormat,
    value: &T,
    table: impl FnOnce() -> String,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value)
                .map_err(|err| AppError::Internal(err.to_string()))?;
            println!("{json}");
        }
        OutputFormat::Table => print!("{}", table()),
    }
    Ok(())
}

#[derive(Serialize)]
struct RatiosReport<'a> {
    aggregates: &'a FinancialAggregates,
    ratios: &'a [liasse_core::ratios::Ratio],
    health: &'a HealthScore,
}

#[derive(Serialize)]
struct RecapReport<'a> {
    regime: &'a liasse_core::regime::RegimeDef,
    notes: &'a [liasse_core::regime::RecapLine],
}
