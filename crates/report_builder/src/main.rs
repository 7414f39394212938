//! Report Builder CLI
//!
//! Pitch log JSON → analysis / fatigue / advisory report JSON.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
use report_builder::{build_report, load_events, scope_events, write_report, ReportKind};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "report_builder")]
#[command(about = "Build scouting reports from pitch logs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Tendency analysis for one pitcher scope
    Analyze {
        /// Input pitch log JSON file
        #[arg(long)]
        r#in: PathBuf,

        /// Restrict to one pitcher
        #[arg(long)]
        pitcher: Option<String>,

        /// Restrict to one game
        #[arg(long)]
        game: Option<String>,

        /// Output report path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Per-pitcher breakdown for a whole game
    Game {
        #[arg(long)]
        r#in: PathBuf,

        #[arg(long)]
        game: Option<String>,

        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Fatigue assessment
    Fatigue {
        #[arg(long)]
        r#in: PathBuf,

        #[arg(long)]
        pitcher: Option<String>,

        #[arg(long)]
        game: Option<String>,

        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Coaching advisory
    Advice {
        #[arg(long)]
        r#in: PathBuf,

        #[arg(long)]
        pitcher: Option<String>,

        #[arg(long)]
        game: Option<String>,

        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
fn run(
    kind: ReportKind,
    input: &PathBuf,
    pitcher: Option<String>,
    game: Option<String>,
    out: Option<PathBuf>,
) -> Result<()> {
    let events = load_events(input)?;
    let scoped = scope_events(events, pitcher.as_deref(), game.as_deref());
    eprintln!("{} events in scope", scoped.len());
    let report = build_report(kind, &scoped)?;
    write_report(out.as_deref(), &report)?;
    Ok(())
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze { r#in, pitcher, game, out } => {
            run(ReportKind::Analysis, &r#in, pitcher, game, out)
        }
        Commands::Game { r#in, game, out } => run(ReportKind::Game, &r#in, None, game, out),
        Commands::Fatigue { r#in, pitcher, game, out } => {
            run(ReportKind::Fatigue, &r#in, pitcher, game, out)
        }
        Commands::Advice { r#in, pitcher, game, out } => {
            run(ReportKind::Advice, &r#in, pitcher, game, out)
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("report_builder was built without the `cli` feature");
}
