//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::SkillLevel;

/// rmg - learning roadmap generator
#[derive(Parser, Debug)]
#[command(
    name = "rmg",
    author,
    version,
    about = "Generate a personalized learning roadmap and export it as PDF",
    after_help = "Logs are written to: ~/.local/share/roadmap/logs/roadmap.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute (interactive when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate a roadmap and print it
    Generate {
        /// Learning domain, e.g. "Data Science"
        #[arg(short, long, default_value = "")]
        domain: String,

        /// Current skill level
        #[arg(short, long, value_enum)]
        level: Option<SkillLevel>,

        /// Time available, e.g. "3 months"
        #[arg(short = 't', long, default_value = "")]
        duration: String,

        /// Also render the roadmap to PDF
        #[arg(long)]
        pdf: bool,
    },

    /// Render a text file (or stdin) to PDF
    Render {
        /// Text file to render; reads stdin when omitted or "-"
        #[arg(value_name = "FILE")]
        input: Option<PathBuf>,
    },

    /// Prompt for the fields interactively
    Interactive,
}

/// Default log file location
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("roadmap")
        .join("logs")
        .join("roadmap.log")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "rmg",
            "generate",
            "--domain",
            "Data Science",
            "--level",
            "beginner",
            "--duration",
            "3 months",
            "--pdf",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Generate {
                domain,
                level,
                duration,
                pdf,
            }) => {
                assert_eq!(domain, "Data Science");
                assert_eq!(level, Some(SkillLevel::Beginner));
                assert_eq!(duration, "3 months");
                assert!(pdf);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_generate_fields_default_to_empty() {
        let cli = Cli::try_parse_from(["rmg", "generate"]).unwrap();
        match cli.command {
            Some(Command::Generate {
                domain, level, duration, ..
            }) => {
                assert!(domain.is_empty());
                assert!(level.is_none());
                assert!(duration.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_level_rejected() {
        assert!(Cli::try_parse_from(["rmg", "generate", "--level", "expert"]).is_err());
    }

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["rmg", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_log_path() {
        assert!(get_log_path().ends_with("roadmap/logs/roadmap.log"));
    }
}
