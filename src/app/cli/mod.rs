//! CLI Adapter.

mod interactive;

use std::path::PathBuf;

use chrono::Local;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::api::current_context;
use crate::app::commands::{export, ideas, outline};
use crate::app::config::load_dotenv;
use crate::domain::{AppError, BrainstormRequest, SessionState, Tone};

#[derive(Parser)]
#[command(name = "brainstormer")]
#[command(version)]
#[command(
    about = "Brainstorm blog post ideas and expand one into an outline",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate 3-5 blog post ideas
    #[clap(visible_alias = "id")]
    Ideas {
        /// Blog topic or niche (e.g. travel, tech, fitness)
        #[arg(short, long)]
        topic: String,
        /// Target audience (e.g. beginners, professionals, parents)
        #[arg(short, long)]
        audience: String,
        /// Writing tone: Casual, Professional, Humorous, Informative, Inspirational
        #[arg(long, default_value_t = Tone::Casual)]
        tone: Tone,
        /// Optional keywords or goals (e.g. SEO, engagement)
        #[arg(short, long)]
        keywords: Option<String>,
    },
    /// Generate a structured outline for one idea
    #[clap(visible_alias = "o")]
    Outline {
        /// The blog post idea to outline
        #[arg(long)]
        idea: String,
        /// Blog topic or niche
        #[arg(short, long)]
        topic: String,
        /// Target audience
        #[arg(short, long)]
        audience: String,
        /// Writing tone
        #[arg(long, default_value_t = Tone::Casual)]
        tone: Tone,
        /// Write .txt and .pdf copies of the outline into this directory
        #[arg(short, long)]
        save_dir: Option<PathBuf>,
        /// Print inline download links for the outline
        #[arg(long)]
        links: bool,
    },
    /// Walk through topic, ideas, and outline interactively
    #[clap(visible_alias = "i")]
    Interactive,
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();
    load_dotenv();

    let result: Result<(), AppError> = match cli.command {
        Commands::Ideas { topic, audience, tone, keywords } => {
            run_ideas(topic, audience, tone, keywords)
        }
        Commands::Outline { idea, topic, audience, tone, save_dir, links } => {
            run_outline(idea, topic, audience, tone, save_dir, links)
        }
        Commands::Interactive => interactive::run_interactive(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn run_ideas(
    topic: String,
    audience: String,
    tone: Tone,
    keywords: Option<String>,
) -> Result<(), AppError> {
    let ctx = current_context()?;
    let request = BrainstormRequest::new(topic, audience, tone, keywords)?;

    let state = ideas::generate_ideas(&ctx, &SessionState::new(), request)?;
    if let Some(batch) = state.batch() {
        for line in batch.ideas.numbered() {
            println!("{}", line);
        }
    }
    Ok(())
}

fn run_outline(
    idea: String,
    topic: String,
    audience: String,
    tone: Tone,
    save_dir: Option<PathBuf>,
    links: bool,
) -> Result<(), AppError> {
    let ctx = current_context()?;
    if idea.trim().is_empty() {
        return Err(AppError::invalid_input("Please provide an idea to outline."));
    }
    let request = BrainstormRequest::new(topic, audience, tone, None)?;

    let generated = outline::generate_outline(&ctx, &idea, &request)?;
    println!("{}", generated.as_str());

    let timestamp = Local::now().naive_local();
    if let Some(dir) = save_dir {
        for path in export::write_outline(&generated, &dir, timestamp)? {
            println!("✅ Saved {}", path.display());
        }
    }
    if links {
        for link in export::outline_links(&generated, timestamp) {
            println!("{}", link);
        }
    }
    Ok(())
}
