//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, InputFormat};
use tasklens::config::Config;
use tasklens::output::OutputMode;

/// tasklens - Accountable tasks and explainable risk from meeting text
#[derive(Parser, Debug)]
#[command(
    name = "tasklens",
    version,
    about = "Extract tasks and decisions from meeting text and score their risk",
    long_about = "Turn transcripts, documents and notes into accountable work items.\n\n\
                  Extraction finds tasks and decisions with a confidence score.\n\
                  Assessment explains, point by point, how likely a task is to slip."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ~/.config/tasklens/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract tasks and decisions from a file ("-" reads stdin)
    Extract {
        /// Input file
        file: PathBuf,

        /// How to read the input
        #[arg(short, long, value_enum, default_value_t = InputFormat::Text)]
        format: InputFormat,

        /// Assess the risk of every extracted task
        #[arg(long)]
        assess: bool,

        /// JSON snapshot of past tasks (overrides the config)
        #[arg(long, value_name = "FILE")]
        history: Option<PathBuf>,
    },

    /// Assess the risk of a single task
    Assess {
        /// What has to be done
        #[arg(short, long)]
        description: String,

        /// Who owns it
        #[arg(short, long)]
        assignee: Option<String>,

        /// When it is due ("next Friday", "2026-11-02", ...)
        #[arg(long)]
        deadline: Option<String>,

        /// Task identifier
        #[arg(long, default_value = "TSK-1")]
        id: String,

        /// JSON snapshot of past tasks (overrides the config)
        #[arg(long, value_name = "FILE")]
        history: Option<PathBuf>,
    },

    /// Summarize a JSON file of assessed tasks
    Report {
        /// Assessed tasks (output of `extract --assess --json`)
        file: PathBuf,

        /// Days covered by the timeline
        #[arg(long, default_value_t = 30)]
        days: u32,
    },

    /// Show the effective configuration
    Config,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let Some(command) = cli.command else {
        if output_mode == OutputMode::Json {
            println!(
                "{}",
                serde_json::json!({
                    "version": tasklens::VERSION,
                    "hint": "Use --help for usage"
                })
            );
        } else {
            println!("tasklens v{}", tasklens::VERSION);
            println!("\nRun 'tasklens --help' for usage");
            println!("Run 'tasklens extract notes.txt' to get started");
        }
        return Ok(());
    };

    if let Command::Version = command {
        if output_mode == OutputMode::Json {
            println!("{}", serde_json::json!({ "version": tasklens::VERSION }));
        } else {
            println!("tasklens v{}", tasklens::VERSION);
        }
        return Ok(());
    }

    let config = Config::resolve(cli.config.as_deref())?;

    match command {
        Command::Extract {
            file,
            format,
            assess,
            history,
        } => commands::extract(&config, &file, format, assess, history.as_deref(), output_mode),
        Command::Assess {
            description,
            assignee,
            deadline,
            id,
            history,
        } => commands::assess(
            &config,
            commands::TaskInput {
                id,
                description,
                assignee,
                deadline,
            },
            history.as_deref(),
            output_mode,
        ),
        Command::Report { file, days } => commands::report(&file, days, output_mode),
        Command::Config => commands::show_config(&config, cli.config.as_deref(), output_mode),
        Command::Version => Ok(()),
    }
}
