use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "farmops", version, about = "Small-farm crop, fertilizer, pest and market advisor")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank crops for a category given soil and weather readings
    Recommend(RecommendArgs),
    /// Stage-specific fertilizer and irrigation plan for a crop
    Fertilizer(FertilizerArgs),
    /// Identify the pest in a submitted sample
    Pest(PestArgs),
    /// Price trend for a quote, or the reference mandi board
    Market(MarketArgs),
    /// Send a message to the support chat relay
    Chat(ChatArgs),
    /// Re-run interactive setup
    Init,
    /// Validate config and test connections
    Check,
}

#[derive(Args, Debug)]
pub struct RecommendArgs {
    /// Crop category (cereals, pulses, oilseeds, cash, vegetables, fruits, spices, general, other)
    #[arg(long, default_value = "general")]
    pub category: String,
    /// Custom crop name, required with --category other
    #[arg(long)]
    pub crop_name: Option<String>,
    #[arg(long)]
    pub nitrogen: Option<f64>,
    #[arg(long)]
    pub phosphorus: Option<f64>,
    #[arg(long)]
    pub potassium: Option<f64>,
    #[arg(long)]
    pub ph: Option<f64>,
    #[arg(long)]
    pub organic_carbon: Option<f64>,
    #[arg(long)]
    pub moisture: Option<f64>,
    /// Air temperature (°C)
    #[arg(long)]
    pub temperature: Option<f64>,
    #[arg(long)]
    pub humidity: Option<f64>,
    /// Rainfall (mm)
    #[arg(long)]
    pub rainfall: Option<f64>,
    #[arg(long)]
    pub season: Option<String>,
    /// Land area in hectares
    #[arg(long)]
    pub land_area: Option<f64>,
    /// Skip the analysis delay
    #[arg(long)]
    pub no_delay: bool,
}

#[derive(Args, Debug)]
pub struct FertilizerArgs {
    #[arg(long, default_value = "rice")]
    pub crop: String,
    /// Growth stage (planting, vegetative, flowering, fruiting, maturity)
    #[arg(long, default_value = "planting")]
    pub stage: String,
    /// Soil type (alluvial, black, red, laterite, sandy)
    #[arg(long, default_value = "alluvial")]
    pub soil: String,
    /// Land area in hectares
    #[arg(long)]
    pub land_area: Option<f64>,
}

#[derive(Args, Debug)]
pub struct PestArgs {
    /// Image or sample reference
    #[arg(long)]
    pub sample: Option<String>,
    #[arg(long, default_value = "")]
    pub crop: String,
}

#[derive(Args, Debug)]
pub struct MarketArgs {
    /// Filter the reference board by crop name
    #[arg(long, default_value = "All Crops", conflicts_with = "current")]
    pub crop: String,
    /// Current price for an ad-hoc quote
    #[arg(long, requires = "previous")]
    pub current: Option<i64>,
    #[arg(long, requires = "current")]
    pub previous: Option<i64>,
    #[arg(long, requires_all = ["current", "max"])]
    pub min: Option<i64>,
    #[arg(long, requires_all = ["current", "min"])]
    pub max: Option<i64>,
    /// Crop name for an ad-hoc quote
    #[arg(long, default_value = "Custom")]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct ChatArgs {
    #[arg(long)]
    pub session: String,
    pub text: String,
}
