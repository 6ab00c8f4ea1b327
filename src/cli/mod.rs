//! CLI module for Sigil
//!
//! Provides commands:
//! - `profile`: Generate the symbolic profile of a character file
//! - `symbols`: List the symbol table derived from a document
//! - `bench`: Measure cold vs. cached profiler construction

use crate::app::AppConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod bench;
pub mod profile;
pub mod symbols;

/// Sigil Symbolic Character Profiler CLI
#[derive(Parser, Debug)]
#[command(name = "sigil")]
#[command(about = "Symbolic character profiler")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a character's symbolic profile
    Profile {
        /// Character description (JSON)
        character: PathBuf,
        /// Symbology document (overrides configuration)
        #[arg(long)]
        document: Option<String>,
        /// Print the profile as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the symbols derived from a document
    Symbols {
        /// Symbology document (overrides configuration)
        #[arg(long)]
        document: Option<String>,
    },
    /// Benchmark document caching
    Bench {
        /// Symbology document (overrides configuration)
        #[arg(long)]
        document: Option<String>,
        /// Number of profiler constructions (at least 2)
        #[arg(long)]
        iterations: Option<usize>,
    },
}

/// Run the CLI command
pub fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let document = |flag: Option<String>| flag.unwrap_or_else(|| config.symbology.document.clone());

    match cli.command {
        Some(Commands::Profile {
            character,
            document: doc,
            json,
        }) => profile::run(&character, &document(doc), json),
        Some(Commands::Symbols { document: doc }) => symbols::run(&document(doc)),
        Some(Commands::Bench {
            document: doc,
            iterations,
        }) => bench::run(
            &document(doc),
            iterations.unwrap_or(config.bench.iterations),
        ),
        None => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            cmd.print_help()?;
            println!();
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_profile() {
        let cli = Cli::try_parse_from(["sigil", "profile", "astra.json", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Profile {
                character,
                document,
                json,
            }) => {
                assert_eq!(character, PathBuf::from("astra.json"));
                assert!(document.is_none());
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_bench() {
        let cli = Cli::try_parse_from([
            "sigil",
            "bench",
            "--document",
            "primer.jsonld",
            "--iterations",
            "5",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Bench { document: Some(ref d), iterations: Some(5) }) if d == "primer.jsonld"
        ));
    }

    #[test]
    fn test_parse_no_command() {
        let cli = Cli::try_parse_from(["sigil"]).unwrap();
        assert!(cli.command.is_none());
    }
}
