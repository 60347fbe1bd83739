use fairodds::SimulationConfig;

fn main() {
    // Structured logging to stderr; the report itself goes to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match SimulationConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("config error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        start_price = config.start_price,
        goal_price = config.goal_price,
        daily_volatility_percent = config.daily_volatility_percent,
        simulation_count = config.simulation_count,
        "fairodds starting"
    );

    let report = match fairodds::evaluate(&config) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("validation error: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        probability_in_favor = report.probability_in_favor,
        probability_against = report.probability_against,
        fair_odds_in_favor = %report.fair_odds_in_favor,
        fair_odds_against = %report.fair_odds_against,
        "evaluation complete"
    );

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!("serialize error: {e}");
            std::process::exit(1);
        }
    }
}
