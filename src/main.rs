use clap::Parser;
use hall_seating::utils::error::ErrorCategory;
use hall_seating::utils::{logger, validation::Validate};
use hall_seating::{
    CliConfig, InMemoryCinemaHallRepository, ScenarioConfig, ScenarioRunner,
    SeatReservationService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    if args.json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("Loading scenario from: {}", args.config);

    let config = match ScenarioConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load scenario '{}': {}", args.config, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("Scenario validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if args.dry_run {
        print_summary(&config);
        return Ok(());
    }

    let service = SeatReservationService::new(InMemoryCinemaHallRepository::new());
    let runner = ScenarioRunner::new(service);

    match runner.run(&config).await {
        Ok(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report);
            }
        }
        Err(e) => {
            tracing::error!("Scenario failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());

            let exit_code = match e.category() {
                ErrorCategory::Configuration | ErrorCategory::Domain => 1,
                ErrorCategory::System => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn print_summary(config: &ScenarioConfig) {
    println!("Scenario: {}", config.scenario.name);
    if let Some(description) = &config.scenario.description {
        println!("  {}", description);
    }
    for hall in &config.halls {
        let seats: u32 = hall.rows.iter().map(|&(_, seats)| seats).sum();
        println!("  Hall {}: {} rows, {} seats", hall.name, hall.rows.len(), seats);
    }
    println!("  {} reservation requests", config.reservations.len());
}
