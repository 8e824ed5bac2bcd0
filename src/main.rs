use clap::Parser;
use parkpulse_client::utils::{logger, validation::Validate};
use parkpulse_client::{calculate_trend_stats, AnalyticsService, CliConfig, DataOrigin};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting parkpulse client");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let analytics = AnalyticsService::new(config.base_url.clone());

    let history = analytics.get_historical_data(config.period).await?;
    let stats = calculate_trend_stats(&history.data);

    match history.origin {
        DataOrigin::Live => tracing::info!("Fetched {} live samples", history.data.len()),
        DataOrigin::Synthetic => {
            tracing::warn!(
                "Backend unavailable, showing {} synthetic samples",
                history.data.len()
            )
        }
    }

    let origin_note = if history.is_synthetic() {
        " (synthetic fallback)"
    } else {
        ""
    };
    println!("Occupancy trend over {}{}", config.period, origin_note);
    println!("  average occupancy: {}%", stats.average_occupancy);
    println!(
        "  peak occupancy:    {}% at {}",
        stats.peak_occupancy, stats.peak_time
    );
    println!(
        "  trend:             {} ({}% change)",
        stats.trend_direction, stats.change_rate
    );

    Ok(())
}
