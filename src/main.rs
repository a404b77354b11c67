use clap::Parser;
use propview::core::config::{CliOverrides, load_config, resolve};
use propview::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "propview", about = "Address lookup: property, schools, places, and local news")]
struct Args {
    /// Backend base URL (overrides config file and PROPVIEW_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Search radius in km for nearby places, 0.5 to 10
    #[arg(short, long)]
    radius: Option<f64>,

    /// Address to look up on startup
    address: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to propview.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("propview.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = load_config().unwrap_or_else(|e| {
        log::warn!("{e}; falling back to defaults");
        Default::default()
    });
    let cli = CliOverrides {
        api_url: args.api_url.as_deref(),
        radius_km: args.radius,
    };
    let config = resolve(&file_config, &cli);

    log::info!(
        "Propview starting up (api={}, radius={:?})",
        config.api_base_url,
        config.radius_km
    );

    let initial_address = args.address.filter(|a| !a.trim().is_empty());
    tui::run(config, initial_address)
}
