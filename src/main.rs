mod cli;

use clap::Parser;
use cli::{ChatArgs, Cli, Commands, FertilizerArgs, MarketArgs, PestArgs, RecommendArgs};
use farmops::config::Config;
use farmops::datasources::{BotRelayClient, ChatRelay};
use farmops::error::{FarmOpsError, Result};
use farmops::logic::tables::{fertilizer::organic_alternatives, markets::reference_quotes};
use farmops::logic::validator::{RawRecommendationInput, RawSoilInput, RawWeatherInput};
use farmops::logic::{irrigation, market, pest, RecommendationEngine};
use farmops::models::{GrowthStage, MarketQuote, SampleDescriptor, SoilType};
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Initialize logging: RUST_LOG wins, otherwise -v / -vv
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config_override = cli.config;
    match cli.command {
        Commands::Init => {
            Config::setup_interactive()?;
            Ok(())
        }
        Commands::Check => check(config_override).await,
        Commands::Recommend(args) => recommend(&load_config(config_override)?, args).await,
        Commands::Fertilizer(args) => fertilizer(&load_config(config_override)?, args),
        Commands::Pest(args) => classify(&load_config(config_override)?, args),
        Commands::Market(args) => market_board(args),
        Commands::Chat(args) => chat(&load_config(config_override)?, args).await,
    }
}

fn load_config(config_override: Option<PathBuf>) -> Result<Config> {
    let config = Config::load_or_default(config_override)?;
    tracing::debug!("Loaded config: {:?}", config);
    Ok(config)
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn recommend(config: &Config, args: RecommendArgs) -> Result<()> {
    let mut engine = RecommendationEngine::new(config);
    if args.no_delay {
        engine = engine.with_analysis_delay(std::time::Duration::ZERO);
    }
    let engine = Arc::new(engine);

    let raw = RawRecommendationInput {
        category: args.category,
        crop_name: args.crop_name,
        soil: RawSoilInput {
            nitrogen: args.nitrogen,
            phosphorus: args.phosphorus,
            potassium: args.potassium,
            ph: args.ph,
            organic_carbon: args.organic_carbon,
            moisture: args.moisture,
        },
        weather: RawWeatherInput {
            temperature: args.temperature,
            humidity: args.humidity,
            rainfall: args.rainfall,
            season: args.season,
        },
        land_area: args.land_area,
    };
    let request = engine.build_request(&raw)?;

    tracing::info!(
        "Analyzing {:?} ({} ms)",
        request.selection,
        engine.analysis_delay().as_millis()
    );
    let mut pending = engine.submit(request);
    let outcome = tokio::select! {
        result = pending.wait() => Some(result),
        _ = tokio::signal::ctrl_c() => None,
    };

    let report = match outcome {
        Some(result) => result?,
        None => {
            pending.cancel();
            return Err(FarmOpsError::Cancelled);
        }
    };
    print_json(&report)
}

fn fertilizer(config: &Config, args: FertilizerArgs) -> Result<()> {
    let stage = GrowthStage::from_str(&args.stage).ok_or_else(|| {
        FarmOpsError::validation("stage", format!("unknown growth stage '{}'", args.stage))
    })?;
    let soil_type = SoilType::from_str(&args.soil).ok_or_else(|| {
        FarmOpsError::validation("soil", format!("unknown soil type '{}'", args.soil))
    })?;

    let engine = RecommendationEngine::new(config);
    let land_area = engine.validator().land_area(args.land_area)?;
    let plan = engine.fertilizer_plan(&args.crop, stage, soil_type, land_area)?;

    print_json(&json!({
        "plan": plan,
        "post_application_irrigation": irrigation::post_application(),
        "organic_alternatives": organic_alternatives(),
    }))
}

fn classify(config: &Config, args: PestArgs) -> Result<()> {
    let engine = RecommendationEngine::new(config);
    let sample = args
        .sample
        .map(|source| SampleDescriptor::new(source, args.crop.clone()));
    let finding = engine.classify_pest(sample.as_ref())?;

    print_json(&json!({
        "finding": finding,
        "common_pests": pest::pests_for_crop(&args.crop),
    }))
}

fn market_board(args: MarketArgs) -> Result<()> {
    if let (Some(current), Some(previous)) = (args.current, args.previous) {
        let mut quote = MarketQuote::new(args.name, current, previous);
        if let (Some(min), Some(max)) = (args.min, args.max) {
            quote = quote.with_range(min, max);
        }
        return print_json(&market::analyze(&quote)?);
    }

    let board = reference_quotes();
    let selected = market::filter_quotes(&board, &args.crop);
    let analyses = market::analyze_all(selected.iter().copied())?;
    let summary = market::summarize(&analyses);

    print_json(&json!({
        "quotes": selected,
        "analyses": analyses,
        "summary": summary,
    }))
}

async fn chat(config: &Config, args: ChatArgs) -> Result<()> {
    let relay = config.active_relay().ok_or_else(|| {
        FarmOpsError::Config("No chat relay configured. Run `farmops init` to set one up.".into())
    })?;
    let client = BotRelayClient::new(relay.clone());
    let reply = client.send_text(&args.session, &args.text).await?;
    print_json(&reply)
}

async fn check(config_override: Option<PathBuf>) -> Result<()> {
    if config_override.is_none() && !Config::exists(None) {
        println!("No config file found; built-in defaults will be used.");
        println!("Run `farmops init` to create one.");
        return Ok(());
    }

    let config = Config::load(config_override)?;
    println!("Config: OK");
    println!(
        "  analysis delay: {} ms",
        config.engine.analysis_delay_ms
    );
    println!(
        "  baseline: pH {}, humidity {}%, rainfall {} mm, {} °C, {} ha",
        config.baseline.ph,
        config.baseline.humidity,
        config.baseline.rainfall,
        config.baseline.temperature,
        config.baseline.land_area
    );

    match config.active_relay() {
        Some(relay) => {
            let client = BotRelayClient::new(relay.clone());
            match client.test_connection().await {
                Ok(true) => println!("Relay: OK ({})", relay.url),
                Ok(false) => println!("Relay: responded with an error ({})", relay.url),
                Err(e) => println!("Relay: OFFLINE ({})", e),
            }
        }
        None => println!("Relay: not configured"),
    }

    Ok(())
}
