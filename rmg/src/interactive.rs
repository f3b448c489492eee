//! Interactive session
//!
//! Prompts for the roadmap fields with readline, prints the generated
//! roadmap and offers to export it as PDF.

use colored::Colorize;
use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::domain::{RoadmapRequest, SkillLevel};
use crate::render::DocumentRenderer;
use crate::requester::RoadmapRequester;

/// Interactive roadmap session
pub struct InteractiveSession {
    requester: RoadmapRequester,
    renderer: DocumentRenderer,
    /// Most recent generated roadmap text
    roadmap: Option<String>,
}

enum Input {
    Line(String),
    Quit,
}

enum SlashResult {
    Continue,
    Quit,
}

/// Parse a level answer: a menu number or a level name
pub fn parse_level_input(input: &str) -> Option<SkillLevel> {
    match input.trim() {
        "1" => Some(SkillLevel::Beginner),
        "2" => Some(SkillLevel::Intermediate),
        "3" => Some(SkillLevel::Advanced),
        other => other.parse().ok(),
    }
}

/// Whether a yes/no answer means yes
pub fn is_yes(input: &str) -> bool {
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

impl InteractiveSession {
    pub fn new(requester: RoadmapRequester, renderer: DocumentRenderer) -> Self {
        Self {
            requester,
            renderer,
            roadmap: None,
        }
    }

    /// Run the prompt loop until the user quits
    pub async fn run(&mut self) -> Result<()> {
        self.print_welcome();

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

        loop {
            let domain = match read(&mut rl, &format!("{} ", "Learning domain>".bright_green()))? {
                Input::Line(line) => line,
                Input::Quit => break,
            };

            if domain.starts_with('/') {
                match self.handle_slash_command(&domain) {
                    SlashResult::Continue => continue,
                    SlashResult::Quit => break,
                }
            }

            println!(
                "  {} Beginner  {} Intermediate  {} Advanced",
                "[1]".yellow(),
                "[2]".yellow(),
                "[3]".yellow()
            );
            let level = match read(&mut rl, &format!("{} ", "Skill level>".bright_green()))? {
                Input::Line(line) => parse_level_input(&line),
                Input::Quit => break,
            };

            let duration = match read(&mut rl, &format!("{} ", "Time to learn>".bright_green()))? {
                Input::Line(line) => line,
                Input::Quit => break,
            };

            let request = RoadmapRequest::new(domain, level, duration);
            let _ = rl.add_history_entry(request.domain.as_str());

            if !self.generate(&request).await {
                continue;
            }

            match read(&mut rl, &format!("{} ", "Download roadmap as PDF? [y/N]".bright_green()))? {
                Input::Line(answer) if is_yes(&answer) => self.export(),
                Input::Line(_) => {}
                Input::Quit => break,
            }
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Generate and print a roadmap; true when the model produced one
    async fn generate(&mut self, request: &RoadmapRequest) -> bool {
        println!("{}", "Generating roadmap...".dimmed());

        match self.requester.try_generate(request).await {
            Ok(text) => {
                println!();
                println!("{}", text);
                println!();
                self.roadmap = Some(text);
                true
            }
            Err(e) => {
                debug!(error = %e, "generate: no roadmap");
                println!("{} {}", "!".yellow(), e.user_message());
                false
            }
        }
    }

    /// Render the current roadmap to PDF
    fn export(&self) {
        let text = self.roadmap.as_deref().unwrap_or_default();
        match self.renderer.render(text) {
            Some(path) => println!("{} Saved roadmap to {}", "✓".green(), path.display().to_string().cyan()),
            None => println!("{} No document produced.", "!".yellow()),
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("{}", "AI Learning Roadmap Generator".bright_cyan().bold());
        println!("Generate a personalized learning roadmap and download it as a PDF.");
        if !self.requester.has_credential() {
            println!("{}", "No API key configured; generation is disabled.".yellow());
        }
        println!("Type {} for help, {} to quit", "/help".yellow(), "/quit".yellow());
        println!();
    }

    fn handle_slash_command(&mut self, input: &str) -> SlashResult {
        let cmd = input.split_whitespace().next().unwrap_or("");

        match cmd {
            "/help" | "/h" => {
                self.print_help();
                SlashResult::Continue
            }
            "/quit" | "/q" | "/exit" => SlashResult::Quit,
            "/pdf" => {
                self.export();
                SlashResult::Continue
            }
            "/show" => {
                match &self.roadmap {
                    Some(text) => println!("{}", text),
                    None => println!("{}", "No roadmap generated yet.".dimmed()),
                }
                SlashResult::Continue
            }
            _ => {
                println!("{} Unknown command: {}", "?".yellow(), cmd);
                println!("Type {} for available commands", "/help".yellow());
                SlashResult::Continue
            }
        }
    }

    fn print_help(&self) {
        println!();
        println!("{}", "Available Commands:".bright_cyan());
        println!("  {:10} Show this help", "/help".yellow());
        println!("  {:10} Exit", "/quit".yellow());
        println!("  {:10} Save the last roadmap as PDF", "/pdf".yellow());
        println!("  {:10} Print the last roadmap again", "/show".yellow());
        println!();
        println!("Any other input starts a new roadmap with that learning domain.");
        println!();
    }
}

/// Read one line; Ctrl-D quits, Ctrl-C yields an empty answer
fn read(rl: &mut DefaultEditor, prompt: &str) -> Result<Input> {
    match rl.readline(prompt) {
        Ok(line) => Ok(Input::Line(line.trim().to_string())),
        Err(ReadlineError::Interrupted) => {
            println!("^C");
            Ok(Input::Line(String::new()))
        }
        Err(ReadlineError::Eof) => {
            println!();
            Ok(Input::Quit)
        }
        Err(err) => Err(eyre::eyre!("Readline error: {}", err)),
    }
}
