use std::time::Duration;

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;

use wearcast::catalog::Wardrobe;
use wearcast::models::{Category, WeatherSummary};
use wearcast::{OpenWeatherClient, OutlookService, SummaryCache, WearcastConfig, WearcastError};

fn usage() -> ! {
    eprintln!("Usage: wearcast <postal-code>");
    eprintln!();
    eprintln!("Looks up the 12-hour forecast for a postal code (3+ alphanumeric");
    eprintln!("characters) and prints a matching clothing recommendation.");
    eprintln!();
    eprintln!("Requires an OpenWeather API key in the config file or the");
    eprintln!("WEARCAST_WEATHER__API_KEY environment variable.");
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let postal_code = match args.next() {
        Some(arg) if arg != "--help" && arg != "-h" => arg,
        _ => usage(),
    };
    if args.next().is_some() {
        usage();
    }

    let config = WearcastConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone())),
        )
        .init();

    if config.weather.api_key.is_none() {
        bail!(
            "No weather API key configured. Set weather.api_key in {} or \
             WEARCAST_WEATHER__API_KEY in the environment.",
            WearcastConfig::get_config_path()
                .unwrap_or_default()
                .display()
        );
    }

    let wardrobe = Wardrobe::builtin().context("Failed to load wardrobe catalog")?;
    let cache = SummaryCache::open(
        config.cache_dir(),
        Duration::from_secs(config.cache.ttl_seconds),
    )
    .map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let gateway = OpenWeatherClient::new(&config).map_err(|e| anyhow::anyhow!(e.user_message()))?;
    let service = OutlookService::new(gateway, cache);

    match service.outlook(&postal_code, &wardrobe).await {
        Ok(summary) => {
            print_summary(&summary, &wardrobe);
            Ok(())
        }
        Err(e) => bail!(e.user_message()),
    }
}

fn print_summary(summary: &WeatherSummary, wardrobe: &Wardrobe) {
    println!("12-Hour Forecast ({})", summary.time_range);
    println!(
        "  Currently {:.0}°C (feels like {:.0}°C), {}",
        summary.current_temp, summary.feels_like, summary.current_condition
    );
    println!(
        "  Range: {:.0}°C to {:.0}°C",
        summary.min_temp, summary.max_temp
    );

    if summary.condition_changes.len() > 1 {
        let descriptions: Vec<&str> = summary
            .condition_changes
            .iter()
            .map(|change| change.description.as_str())
            .collect();
        println!("  Conditions: {}", descriptions.join(", "));
    }

    println!();
    println!("Recommended Clothing");
    println!("  {}", summary.recommendation.description);

    for (label, category, names) in [
        ("Tops", Category::Top, &summary.recommendation.tops),
        ("Bottoms", Category::Bottom, &summary.recommendation.bottoms),
        (
            "Accessories",
            Category::Accessory,
            &summary.recommendation.accessories,
        ),
    ] {
        if names.is_empty() {
            continue;
        }
        println!("  {label}:");
        for name in names {
            // A missing catalog entry falls back to the bare name rather
            // than failing the whole recommendation.
            match wardrobe.lookup(category, name) {
                Ok(item) => println!("    - {} ({})", item.name, item.description),
                Err(e) => {
                    tracing::warn!("{}", e);
                    println!("    - {name}");
                }
            }
        }
    }

    if let Some(advice) = &summary.recommendation.layering_advice {
        println!();
        println!("  {advice}");
    }

    if summary.recommendation.is_empty() {
        println!("  No equally good match in the wardrobe for these conditions.");
    }
}
