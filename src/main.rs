use clap::Parser;
use metromellow_rules::config::{draft, OutputFormat};
use metromellow_rules::core::subscription::validate_draft;
use metromellow_rules::utils::{logger, validation::Validate};
use metromellow_rules::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting metromellow-rules CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let subscription = match draft::load_draft(&config.draft) {
        Ok(d) => d,
        Err(e) => {
            tracing::error!("❌ Failed to load draft {}: {}", config.draft, e);
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };
    tracing::info!(
        "Loaded draft: {} services, {} billing, {} months",
        subscription.services.len(),
        subscription.billing_cycle,
        subscription.duration_months
    );

    let result = validate_draft(&subscription);

    match config.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Text => {
            if result.is_valid {
                println!("✅ Subscription draft is valid");
            } else {
                println!(
                    "❌ Subscription draft has {} problem(s):",
                    result.errors.len()
                );
                for err in &result.errors {
                    println!("  [{}] {}: {}", err.code, err.field, err.message);
                }
            }
        }
    }

    if !result.is_valid {
        std::process::exit(1);
    }

    Ok(())
}
