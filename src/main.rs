use anyhow::Result;
use skycast::{SkycastConfig, WeatherApp, WeatherState};
use tracing_subscriber::EnvFilter;

fn init_logging(config: &SkycastConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    if config.logging.format == "json" {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

fn render(state: &WeatherState) {
    if let Some(error) = &state.error {
        eprintln!("error: {error}");
    }

    let Some(current) = &state.current else {
        return;
    };

    println!("{}", current.place);
    println!(
        "  [{}] {} ({})",
        current.condition.icon().selector(),
        current.description,
        current.condition.theme()
    );
    println!("  Temperature: {}", current.format_temperature(state.units));
    println!("  Humidity: {}%", current.humidity);
    println!("  Wind Speed: {}", current.format_wind(state.units));

    if let Some(forecast) = &state.forecast {
        if !forecast.is_empty() {
            println!("Forecast:");
            for entry in &forecast.entries {
                println!(
                    "  {}  [{}] {}{}  {}",
                    entry.timestamp.format("%Y-%m-%d"),
                    entry.condition.icon().selector(),
                    entry.temperature,
                    state.units.temperature_suffix(),
                    entry.description
                );
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = SkycastConfig::load()?;
    init_logging(&config);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let place = if args.is_empty() {
        config.defaults.place.clone()
    } else {
        args.join(" ")
    };

    let mut app = WeatherApp::new(config)?;
    app.search(&place).await;
    app.settled().await;

    let state = app.snapshot().await;
    render(&state);

    if state.error.is_some() {
        std::process::exit(1);
    }

    Ok(())
}
