use anyhow::Result;
use clap::{Parser, Subcommand};
use colonia_data::Strategy;
use colonia_lib::driver::{self, RunOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a headless simulation
    Run {
        /// Custom config file path
        #[arg(short, long, default_value = "colonia.toml")]
        config: PathBuf,

        /// Transition table CSV
        #[arg(short, long, default_value = "definitions/dfa1.csv")]
        table: PathBuf,

        /// Growth field matrix as JSON; a uniform field is used otherwise
        #[arg(short, long)]
        field: Option<PathBuf>,

        /// Strategy label, a (always cooperate) to e (always defect)
        #[arg(short, long, value_parser = parse_strategy)]
        strategy: Option<Strategy>,

        #[arg(long)]
        seed: Option<u64>,

        #[arg(short = 'n', long)]
        steps: Option<u64>,

        #[arg(long)]
        colonies: Option<usize>,

        /// Write the final population report as JSON
        #[arg(long)]
        report: Option<PathBuf>,

        /// Append a report per step as JSON Lines
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Validate a transition table and print it
    CheckTable { path: PathBuf },
}

fn parse_strategy(label: &str) -> std::result::Result<Strategy, String> {
    colonia_core::parse_strategy(label).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();
    colonia_core::init_logging(&args.log_level);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.command {
        Command::Run {
            config,
            table,
            field,
            strategy,
            seed,
            steps,
            colonies,
            report,
            log,
        } => {
            let opts = RunOptions {
                config,
                table,
                field,
                strategy,
                seed,
                steps,
                colonies,
                report,
                log,
            };
            driver::run(&opts, &mut out)?;
        }
        Command::CheckTable { path } => {
            driver::check_table(&path, &mut out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_args_parsing_defaults() {
        let args = Args::parse_from(["colonia", "run"]);
        match args.command {
            Command::Run {
                config,
                table,
                strategy,
                ..
            } => {
                assert_eq!(config, PathBuf::from("colonia.toml"));
                assert_eq!(table, PathBuf::from("definitions/dfa1.csv"));
                assert_eq!(strategy, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_args_parsing_custom() {
        let args = Args::parse_from(["colonia", "run", "-s", "e", "--seed", "7", "-n", "3"]);
        match args.command {
            Command::Run {
                strategy,
                seed,
                steps,
                ..
            } => {
                assert_eq!(strategy, Some(Strategy::E));
                assert_eq!(seed, Some(7));
                assert_eq!(steps, Some(3));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bad_strategy_rejected() {
        assert!(Args::try_parse_from(["colonia", "run", "-s", "x"]).is_err());
    }
}
