use crate::domain::model::ClaimForm;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "warranty-intake")]
#[command(about = "Product catalog, troubleshooting and warranty claim intake")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "warranty-intake.toml")]
    pub config: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the products that can be claimed
    Catalog,
    /// Show troubleshooting steps
    Troubleshoot,
    /// Check whether a purchase date is inside the warranty window
    CheckDate {
        /// Purchase date, YYYY-MM-DD
        date: String,
    },
    /// Submit a warranty claim
    Submit(ClaimArgs),
}

#[derive(Debug, Args)]
pub struct ClaimArgs {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub email: String,

    #[arg(long)]
    pub phone: String,

    #[arg(long)]
    pub sku: String,

    /// Purchase date, YYYY-MM-DD
    #[arg(long)]
    pub purchase_date: String,

    #[arg(long)]
    pub description: String,

    /// The defect caused a personal injury
    #[arg(long)]
    pub injury: bool,
}

impl From<ClaimArgs> for ClaimForm {
    fn from(args: ClaimArgs) -> Self {
        ClaimForm {
            name: args.name,
            email: args.email,
            phone: args.phone,
            sku: args.sku,
            purchase_date: args.purchase_date,
            description: args.description,
            injury: args.injury,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submit_command() {
        let cli = CliConfig::parse_from([
            "warranty-intake",
            "--config",
            "custom.toml",
            "submit",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--phone",
            "555-0100",
            "--sku",
            "HT-CREEPER",
            "--purchase-date",
            "2026-03-01",
            "--description",
            "Cracked housing",
            "--injury",
        ]);

        assert_eq!(cli.config, "custom.toml");
        match cli.command {
            Command::Submit(args) => {
                let form = ClaimForm::from(args);
                assert_eq!(form.sku, "HT-CREEPER");
                assert!(form.injury);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_check_date() {
        let cli = CliConfig::parse_from(["warranty-intake", "check-date", "2026-01-01"]);
        assert_eq!(cli.config, "warranty-intake.toml");
        assert!(matches!(cli.command, Command::CheckDate { date } if date == "2026-01-01"));
    }
}
