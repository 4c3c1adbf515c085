//! `ghec` - enhancement cost calculator
//!
//! Prices a single enhancement from flags or a JSON request file, lists the
//! enhancement catalog, and prints the price schema.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ghec_core_rs::catalog::{self, PriceCategory};
use ghec_core_rs::{quote_json, EnhancementRequest, EnhancementType};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "ghec")]
#[command(about = "Calculate the gold cost of enhancing an ability card")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price one enhancement
    Cost {
        /// Enhancement identifier or title (e.g. "attack", "Summons HP")
        enhancement: String,

        /// Printed level of the ability card (1-9)
        #[arg(short, long, default_value_t = 1)]
        level: i64,

        /// Number of targets; for Add Attack Hex, the hexes already in the attack
        #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
        targets: i64,

        /// Enhancements already on the card (0-3)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        previous: i64,

        /// Show base, level and previous-enhancement components
        #[arg(long)]
        breakdown: bool,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },

    /// Price a JSON request file
    Quote {
        file: PathBuf,
    },

    /// List every enhancement with its base price rule
    List,

    /// Print the price schema as JSON
    Schema,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Command::Cost {
                enhancement,
                level,
                targets,
                previous,
                breakdown,
                json,
            } => {
                let enhancement: EnhancementType = enhancement.parse()?;
                let request = EnhancementRequest {
                    enhancement,
                    level,
                    multiple_target: targets,
                    previous_enhancements: previous,
                };
                tracing::debug!(?request, "pricing");

                let quote = request.price()?;
                if json {
                    println!("{}", serde_json::to_string_pretty(&quote)?);
                } else if breakdown {
                    println!("{} (level {}):", enhancement, level);
                    println!("  base:     {:>4}", quote.breakdown.base_cost);
                    println!("  level:    {:>4}", quote.breakdown.level_cost);
                    println!("  previous: {:>4}", quote.breakdown.previous_enhancement_cost);
                    println!("  total:    {:>4}", quote.total);
                } else {
                    println!("{}", quote.total);
                }
            }
            Command::Quote { file } => {
                let contents = std::fs::read_to_string(&file)
                    .with_context(|| format!("reading {}", file.display()))?;
                tracing::debug!(path = %file.display(), "quote file loaded");

                let quote = quote_json(&contents)
                    .with_context(|| format!("pricing {}", file.display()))?;
                println!("{}", serde_json::to_string_pretty(&quote)?);
            }
            Command::List => {
                for element in catalog::price_schema().enhancements {
                    let rule = match element.category {
                        PriceCategory::Scalable => "x2 multi-target",
                        PriceCategory::Fixed => "fixed",
                        PriceCategory::PerHex => "/ current hexes",
                    };
                    println!(
                        "{:<16} {:>4}  {:<16} {}",
                        element.display_name, element.base_cost, rule, element.description
                    );
                }
            }
            Command::Schema => {
                println!("{}", catalog::get_price_schema()?);
            }
        }
        Ok(())
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(?error, "command failed");
            eprintln!("error: {error:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_defaults() {
        let cli = Cli::try_parse_from(["ghec", "cost", "attack"]).unwrap();
        match cli.command {
            Command::Cost {
                enhancement,
                level,
                targets,
                previous,
                breakdown,
                json,
            } => {
                assert_eq!(enhancement, "attack");
                assert_eq!(level, 1);
                assert_eq!(targets, 1);
                assert_eq!(previous, 0);
                assert!(!breakdown);
                assert!(!json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cost_flags() {
        let cli = Cli::try_parse_from([
            "ghec", "cost", "Summons HP", "--level", "5", "-p", "2", "-t", "9", "--breakdown",
        ])
        .unwrap();
        match cli.command {
            Command::Cost {
                enhancement,
                level,
                targets,
                previous,
                breakdown,
                ..
            } => {
                assert_eq!(enhancement, "Summons HP");
                assert_eq!((level, targets, previous), (5, 9, 2));
                assert!(breakdown);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_level_fails_at_run() {
        let cli = Cli::try_parse_from(["ghec", "cost", "move", "--level", "12"]).unwrap();
        let err = cli.command.run().unwrap_err();
        assert!(err.to_string().contains("level must be between 1 and 9"));
    }

    #[test]
    fn test_unknown_enhancement_fails_at_run() {
        let cli = Cli::try_parse_from(["ghec", "cost", "fly"]).unwrap();
        assert!(cli.command.run().is_err());
    }

    #[test]
    fn test_missing_quote_file() {
        let cli = Cli::try_parse_from(["ghec", "quote", "/nonexistent/request.json"]).unwrap();
        let err = cli.command.run().unwrap_err();
        assert!(format!("{err:#}").contains("reading /nonexistent/request.json"));
    }

    #[test]
    fn test_list_and_schema_run() {
        assert!(Command::List.run().is_ok());
        assert!(Command::Schema.run().is_ok());
    }
}
