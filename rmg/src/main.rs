//! rmg - learning roadmap generator
//!
//! CLI entry point wiring the roadmap fields to the requester and its output
//! to the PDF renderer.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tracing::info;

use roadmap::cli::{Cli, Command, get_log_path};
use roadmap::config::Config;
use roadmap::domain::SkillLevel;
use roadmap::interactive::InteractiveSession;
use roadmap::render::DocumentRenderer;
use roadmap::requester::RoadmapRequester;

fn setup_logging(verbose: bool) -> Result<()> {
    let log_path = get_log_path();
    let log_dir = log_path.parent().map(Path::to_path_buf).unwrap_or_else(|| PathBuf::from("."));

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Write to log file, not stdout/stderr
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!(
        "rmg loaded config: provider={}, model={}",
        config.llm.provider, config.llm.model
    );

    match cli.command {
        Some(Command::Generate {
            domain,
            level,
            duration,
            pdf,
        }) => cmd_generate(&config, &domain, level, &duration, pdf).await,
        Some(Command::Render { input }) => cmd_render(&config, input.as_deref()),
        Some(Command::Interactive) | None => cmd_interactive(&config).await,
    }
}

/// Generate a roadmap and print it
async fn cmd_generate(
    config: &Config,
    domain: &str,
    level: Option<SkillLevel>,
    duration: &str,
    pdf: bool,
) -> Result<()> {
    let requester = RoadmapRequester::from_config(config)?;
    let request = roadmap::RoadmapRequest::new(domain, level, duration);

    match requester.try_generate(&request).await {
        Ok(text) => {
            println!("{}", text);
            if pdf {
                print_render_result(&DocumentRenderer::from_config(&config.render), &text);
            }
        }
        Err(e) => {
            info!(error = %e, "cmd_generate: no roadmap");
            println!("{}", e.user_message());
        }
    }

    Ok(())
}

/// Render text from a file or stdin
fn cmd_render(config: &Config, input: Option<&Path>) -> Result<()> {
    let text = match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).context(format!("Failed to read {}", path.display()))?
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("Failed to read stdin")?;
            buf
        }
    };

    print_render_result(&DocumentRenderer::from_config(&config.render), &text);
    Ok(())
}

/// Run the interactive session
async fn cmd_interactive(config: &Config) -> Result<()> {
    let requester = RoadmapRequester::from_config(config)?;
    let renderer = DocumentRenderer::from_config(&config.render);

    InteractiveSession::new(requester, renderer).run().await
}

fn print_render_result(renderer: &DocumentRenderer, text: &str) {
    match renderer.render(text) {
        Some(path) => {
            let pages = renderer.layout(text).page_count();
            println!(
                "{} Saved roadmap to {} ({} page{})",
                "✓".green(),
                path.display().to_string().cyan(),
                pages,
                if pages == 1 { "" } else { "s" }
            );
        }
        None => println!("{} No document produced.", "!".yellow()),
    }
}
