use clap::Parser;
use warranty_intake::config::cli::Command;
use warranty_intake::core::catalog::default_troubleshooting;
use warranty_intake::domain::ports::Clock;
use warranty_intake::utils::{logger, validation::Validate};
use warranty_intake::{
    assess_purchase_date, AppConfig, ClaimForm, ClaimSubmitter, CliConfig, HttpTicketClient,
    SubmitOutcome, SystemClock,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("🚀 Starting warranty-intake");
    tracing::debug!("📁 Loading configuration from: {}", cli.config);

    let config = match AppConfig::from_file(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Failed to load config file '{}': {}", cli.config, e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let catalog = config.catalog()?;

    match cli.command {
        Command::Catalog => {
            for product in catalog.products() {
                println!("{:<12} {}", product.sku, product.name);
            }
        }
        Command::Troubleshoot => {
            for topic in default_troubleshooting() {
                println!("{}", topic.title);
                for (i, step) in topic.steps.iter().enumerate() {
                    println!("  {}. {}", i + 1, step);
                }
            }
        }
        Command::CheckDate { date } => {
            let verdict = assess_purchase_date(&date, config.window_days(), SystemClock.now());
            println!("{}", verdict);
            if !verdict.is_eligible() {
                std::process::exit(2);
            }
        }
        Command::Submit(args) => {
            let form = ClaimForm::from(args);
            if !catalog.contains(&form.sku) {
                eprintln!("❌ Unknown product SKU: {}", form.sku);
                std::process::exit(1);
            }

            let transport = HttpTicketClient::from_config(&config.ticketing);
            let submitter =
                ClaimSubmitter::new(transport, SystemClock).with_window_days(config.window_days());

            match submitter.submit_claim(&form).await {
                SubmitOutcome::Submitted => {
                    println!("✅ Your warranty claim has been submitted. We'll be in touch soon.");
                }
                SubmitOutcome::NotEligible(reason) => {
                    eprintln!("❌ {}", reason);
                    std::process::exit(2);
                }
            }
        }
    }

    Ok(())
}
