use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use careerwise::ProviderKind;
use careerwise::cli::FormInput;
use careerwise::cli::commands::plan::PlanOptions;

#[derive(Parser)]
#[command(name = "careerwise")]
#[command(
    version,
    about = "AI-driven career plan generator for engineering students"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, global = true, help = "Config file (default: ./careerwise.toml)")]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a career plan (missing fields are asked for interactively)
    Plan {
        #[arg(long, help = "Engineering education, e.g. Computer Science")]
        education: Option<String>,
        #[arg(long, help = "Skills, e.g. Python, CAD")]
        skills: Option<String>,
        #[arg(long, help = "Internships or work experience")]
        experience: Option<String>,
        #[arg(long, help = "Interests, e.g. AI, robotics")]
        interests: Option<String>,
        #[arg(long, help = "Career goals")]
        goals: Option<String>,
        #[arg(long, short, help = "Provider: openai, deepseek, groq, gemini, rapidapi, space-feed")]
        provider: Option<ProviderKind>,
        #[arg(long, short, help = "Model to use")]
        model: Option<String>,
        #[arg(long = "require-all", help = "Refuse to submit while any field is blank")]
        require_all: bool,
    },

    /// List supported providers
    Providers {
        #[arg(short = 'f', long, default_value = "text", help = "Output format: text, json")]
        format: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json, yaml"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Write a default configuration file
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mcareerwise encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Plans go to stdout; keep routine logs out of the way by default
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Plan {
            education,
            skills,
            experience,
            interests,
            goals,
            provider,
            model,
            require_all,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(careerwise::cli::commands::plan::run(PlanOptions {
                config_path: cli.config,
                form: FormInput {
                    education,
                    skills,
                    experience,
                    interests,
                    goals,
                },
                provider,
                model,
                require_all,
            }))?;
        }
        Commands::Providers { format } => {
            careerwise::cli::commands::providers::run(&format)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                careerwise::cli::commands::config::show(cli.config.as_deref(), &format)?;
            }
            ConfigAction::Path => {
                careerwise::cli::commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                careerwise::cli::commands::config::init(global, force)?;
            }
        },
    }

    Ok(())
}
