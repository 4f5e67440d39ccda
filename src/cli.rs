//! Command-line definitions using clap.
//!
//! Each subcommand reproduces one of the bundled computations:
//! - range: first values of an arithmetic progression
//! - collatz: start with the longest Collatz chain below a limit
//! - words: letters used spelling out 1 to n

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stepseq - lazy sequences from pure step functions
#[derive(Parser, Debug)]
#[command(name = "stepseq")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the first values of the progression start, start+step, ... below stop
    Range {
        /// First value
        #[arg(long, allow_negative_numbers = true)]
        start: Option<i64>,

        /// Increment between values
        #[arg(long, allow_negative_numbers = true)]
        step: Option<i64>,

        /// Exclusive upper bound
        #[arg(long, allow_negative_numbers = true)]
        stop: Option<i64>,

        /// Maximum number of values to print
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Print the start below LIMIT with the longest Collatz chain
    Collatz {
        #[arg(short, long)]
        limit: Option<u64>,
    },

    /// Print the number of letters used spelling out 1 to UPTO
    Words {
        #[arg(short, long)]
        upto: Option<u32>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_range_with_negative_step() {
        let args = ["stepseq", "range", "--start", "5", "--step", "-2", "-n", "3"];
        let cli = Cli::try_parse_from(args).expect("arguments should parse");
        assert_eq!(
            cli.command,
            Commands::Range {
                start: Some(5),
                step: Some(-2),
                stop: None,
                count: Some(3),
            }
        );
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args = ["stepseq", "collatz", "--limit", "10", "-v", "-c", "x.yml"];
        let cli = Cli::try_parse_from(args).expect("arguments should parse");
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("x.yml")));
        assert_eq!(cli.command, Commands::Collatz { limit: Some(10) });
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["stepseq"]).is_err());
    }
}
