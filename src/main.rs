//! CLI entry point for swipe-deck
//!
//! Provides command-line interface for replaying gesture scripts,
//! checking and creating tuning files, and launching the GUI.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use swipe_deck::api::{ApiError, DiscoveryApi, DryRunApi, ScriptedApi};
use swipe_deck::config::{expand_path, SwipeConfig, DEFAULT_CONFIG_PATH};
use swipe_deck::deck::{load_profiles, Profile};
use swipe_deck::sim::{self, script::load_script, TraceEntry, TraceKind};
use swipe_deck::ui::DeckEvent;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "swipe-deck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a gesture script and print what happened
    Simulate {
        /// Path to the gesture script
        script: PathBuf,

        /// Path to a tuning file (defaults apply when omitted)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// JSON file with the profiles to show
        #[arg(long)]
        deck: Option<PathBuf>,

        /// Number of placeholder profiles when no deck file is given
        #[arg(long, default_value_t = 5)]
        profiles: usize,

        /// Backend reports a match when this profile is liked (repeatable)
        #[arg(long = "match", value_name = "PROFILE_ID")]
        matches: Vec<String>,

        /// Backend rejects decisions about this profile (repeatable)
        #[arg(long = "fail", value_name = "PROFILE_ID")]
        failures: Vec<String>,

        /// Print the trace as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check or create the tuning file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Launch the GTK4 interface
    Gui {
        /// Path to tuning file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// JSON file with the profiles to show
        #[arg(long)]
        deck: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a tuning file and show the effective values
    Check {
        /// Path to tuning file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,
    },

    /// Write a tuning file with default values
    Init {
        /// Path to tuning file
        #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
        config: PathBuf,

        /// Overwrite an existing file (a timestamped backup is kept)
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so `simulate --json` stays machine readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            script,
            config,
            deck,
            profiles,
            matches,
            failures,
            json,
        } => {
            let api = scripted_api(&matches, &failures);
            let api: &dyn DiscoveryApi = match &api {
                Some(api) => api,
                None => &DryRunApi,
            };
            simulate(&script, config.as_deref(), deck.as_deref(), profiles, api, json)?
        }
        Commands::Config { action } => match action {
            ConfigAction::Check { config } => check_config(&config)?,
            ConfigAction::Init { config, force } => init_config(&config, force)?,
        },
        Commands::Gui { config, deck } => launch_gui(&config, deck.as_deref())?,
    }

    Ok(())
}

/// Builds a canned backend when any outcome was requested
fn scripted_api(matches: &[String], failures: &[String]) -> Option<ScriptedApi> {
    if matches.is_empty() && failures.is_empty() {
        return None;
    }

    let mut api = ScriptedApi::new();
    for profile_id in matches {
        api = api.with_match(profile_id);
    }
    for profile_id in failures {
        api = api.with_failure(
            profile_id,
            ApiError::Rejected {
                status: 500,
                message: "rejected by --fail".to_string(),
            },
        );
    }
    Some(api)
}

fn load_deck(deck: Option<&Path>, count: usize) -> anyhow::Result<Vec<Profile>> {
    match deck {
        Some(path) => load_profiles(&expand_path(path)?),
        None => Ok(sim::sample_deck(count)),
    }
}

/// Replay a gesture script
fn simulate(
    script: &Path,
    config: Option<&Path>,
    deck: Option<&Path>,
    profiles: usize,
    api: &dyn DiscoveryApi,
    json: bool,
) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => SwipeConfig::load(&expand_path(path)?)?,
        None => SwipeConfig::load_or_default(&SwipeConfig::default_path()?)?,
    };

    let steps = load_script(script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    let profiles = load_deck(deck, profiles)?;

    if !json {
        println!(
            "{} Replaying {} step{} over {} profile{}\n",
            "→".cyan(),
            steps.len(),
            if steps.len() == 1 { "" } else { "s" },
            profiles.len(),
            if profiles.len() == 1 { "" } else { "s" },
        );
    }

    let trace = sim::simulate(config, profiles, &steps, api);

    if json {
        println!("{}", serde_json::to_string_pretty(&trace)?);
        return Ok(());
    }

    for entry in &trace {
        print_entry(entry);
    }

    let decided = trace
        .iter()
        .filter(|entry| matches!(entry.kind, TraceKind::Deck { event: DeckEvent::Decided { .. } }))
        .count();
    println!("\n{} {} decision{}", "✓".green(), decided, if decided == 1 { "" } else { "s" });

    Ok(())
}

fn print_entry(entry: &TraceEntry) {
    let line = entry.to_string();
    match &entry.kind {
        TraceKind::Input { .. } => println!("{}", line.bold()),
        TraceKind::Drag { .. } => println!("{}", line.dimmed()),
        TraceKind::Phase { .. } => println!("{}", line.cyan()),
        TraceKind::Deck { event } => match event {
            DeckEvent::Decided { .. } => println!("{}", line.green()),
            DeckEvent::Matched { .. } => println!("{}", line.magenta().bold()),
            DeckEvent::Failed { .. } => println!("{}", line.red()),
            DeckEvent::Exhausted => println!("{}", line.yellow()),
        },
    }
}

/// Validate a tuning file
fn check_config(config_path: &Path) -> anyhow::Result<()> {
    let path = expand_path(config_path)?;

    println!("{} Checking config: {}", "→".cyan(), path.display());

    let config = SwipeConfig::load(&path)?;

    println!("{} {}\n", "✓".green().bold(), "Config is valid".bold());
    print!("{}", config.to_conf_string().dimmed());

    Ok(())
}

/// Write a default tuning file
fn init_config(config_path: &Path, force: bool) -> anyhow::Result<()> {
    let path = expand_path(config_path)?;

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let backup = SwipeConfig::default().save(&path)?;

    println!("{} Wrote {}", "✓".green(), path.display());
    if let Some(backup) = backup {
        println!("  {} previous file saved as {}", "↳".dimmed(), backup.display());
    }

    Ok(())
}

#[cfg(feature = "gui")]
fn launch_gui(config_path: &Path, deck: Option<&Path>) -> anyhow::Result<()> {
    let path = expand_path(config_path)?;
    let profiles = load_deck(deck, 10)?;

    let app = swipe_deck::ui::App::new(path, profiles).map_err(|e| anyhow::anyhow!(e))?;
    app.run();

    Ok(())
}

#[cfg(not(feature = "gui"))]
fn launch_gui(_config_path: &Path, _deck: Option<&Path>) -> anyhow::Result<()> {
    println!("{}", "GUI not available".yellow());
    println!("Rebuild with `--features gui` to enable the GTK4 interface.");
    std::process::exit(1);
}
