// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! SyncMatch: music keyword finder
//!
//! Turns a mood tag into search keywords and search links for
//! Musicbed, Artlist and PremiumBeat.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use syncmatch::analyzers::{MediaUpload, SimulatedClassifier};
use syncmatch::config::AppConfig;
use syncmatch::mood::MoodTag;
use syncmatch::platform::Platform;
use syncmatch::report::{analyze_upload, resolve_all, resolve_one, AnalysisReport, ResolvedResult};
use syncmatch::Result;

/// SyncMatch CLI - music keyword finder
#[derive(Parser, Debug)]
#[command(name = "syncmatch")]
#[command(author = "Jonathan D. A. Jewell <hyperpolymath>")]
#[command(version)]
#[command(about = "Search keywords for music-licensing platforms", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file (JSON format)
    #[arg(short, long, default_value = "config.json", global = true)]
    config: PathBuf,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Enable trace logging (most verbose)
    #[arg(long, global = true)]
    trace: bool,

    /// Output format for results
    #[arg(long, global = true, default_value = "text", value_parser = ["text", "json"])]
    format: String,

    /// Suppress non-essential output (quiet mode)
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show keywords and search links for a mood
    Keywords {
        /// Mood key, name or label (e.g. playful, Cinematic, 放松/生活)
        #[arg(short, long)]
        mood: String,

        /// Limit output to one platform
        #[arg(short, long)]
        platform: Option<String>,
    },

    /// Analyze a local media file
    Analyze {
        /// Media file (mp4, mov, mp3, wav)
        path: PathBuf,

        /// Confirmed mood (defaults to the configured default mood)
        #[arg(short, long)]
        mood: Option<String>,
    },

    /// List the supported moods
    Moods,

    /// List the supported platforms
    Platforms,

    /// Start the web UI
    Serve {
        /// Host to bind to
        #[arg(short = 'H', long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Open the web UI in the default browser
        #[arg(long)]
        open: bool,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Generate default configuration file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "config.json")]
        output: PathBuf,
    },

    /// Validate configuration file
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::load(&cli.config)?;
    let json = cli.format == "json";

    match cli.command {
        Some(Commands::Keywords { mood, platform }) => run_keywords(&mood, platform.as_deref(), json),
        Some(Commands::Analyze { path, mood }) => run_analyze(config, &path, mood.as_deref(), json).await,
        Some(Commands::Moods) => run_moods(&config, json),
        Some(Commands::Platforms) => run_platforms(json),
        Some(Commands::Serve { host, port, open }) => run_serve(config, host, port, open).await,
        Some(Commands::Config { action }) => run_config_command(config, action, &cli.config),
        None => run_serve(config, None, None, false).await,
    }
}

/// Print keywords for a mood
fn run_keywords(mood: &str, platform: Option<&str>, json: bool) -> Result<()> {
    let mood: MoodTag = mood.parse()?;

    let results = match platform {
        Some(p) => vec![resolve_one(p.parse()?, mood)?],
        None => resolve_all(mood)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("{} ({})\n", mood.label(), mood.name());
        print_results(&results);
    }

    Ok(())
}

/// Run the simulated analysis on a local file
async fn run_analyze(config: AppConfig, path: &Path, mood: Option<&str>, json: bool) -> Result<()> {
    let hint = mood.map(str::parse::<MoodTag>).transpose()?;
    let upload = MediaUpload::from_path(path)?;
    let classifier = SimulatedClassifier::new(&config.analysis);

    let report = analyze_upload(&classifier, &upload, hint).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &AnalysisReport) {
    println!("File: {} ({} bytes)", report.file.name, report.file.size_bytes);
    if let Some(ref content_type) = report.file.content_type {
        println!("Type: {}", content_type);
    }
    println!("Mood: {} ({})", report.mood_label, report.mood.name());
    if let Some(bpm) = report.bpm {
        println!("Estimated BPM: {}", bpm);
    }
    println!();
    print_results(&report.results);
}

fn print_results(results: &[ResolvedResult]) {
    for result in results {
        println!("== {} ==", result.platform_name);
        println!("{}", result.display_text);
        println!("-> {}\n", result.search_url);
    }
}

fn run_moods(config: &AppConfig, json: bool) -> Result<()> {
    if json {
        let moods: Vec<_> = MoodTag::ALL.iter().map(|m| {
            let range = config.analysis.bpm_ranges.get(*m);
            serde_json::json!({
                "key": m.key(),
                "name": m.name(),
                "label": m.label(),
                "bpm_range": range,
            })
        }).collect();
        println!("{}", serde_json::to_string_pretty(&moods)?);
    } else {
        println!("Moods:");
        for mood in MoodTag::ALL {
            let range = config.analysis.bpm_ranges.get(mood);
            println!("  {:<10} {:<10} {} ({}-{} BPM)", mood.key(), mood.name(), mood.label(), range.min, range.max);
        }
    }
    Ok(())
}

fn run_platforms(json: bool) -> Result<()> {
    if json {
        let profiles: Vec<_> = Platform::ALL.into_iter().map(Platform::profile).collect();
        println!("{}", serde_json::to_string_pretty(&profiles)?);
    } else {
        println!("Platforms:");
        for platform in Platform::ALL {
            let profile = platform.profile();
            println!("  {:<12} {}", profile.name, profile.url_template);
            println!("  {:<12} shows: {}", "", profile.dimension_order.join(", "));
        }
    }
    Ok(())
}

async fn run_serve(mut config: AppConfig, host: Option<String>, port: Option<u16>, open: bool) -> Result<()> {
    if let Some(host) = host {
        config.web.host = host;
    }
    if let Some(port) = port {
        config.web.port = port;
    }

    info!("SyncMatch v{}", env!("CARGO_PKG_VERSION"));

    if open {
        let url = format!("http://{}:{}", config.web.host, config.web.port);
        if let Err(e) = open_browser(&url) {
            warn!("Failed to open browser: {}", e);
        }
    }

    syncmatch::web::start_server(config).await
}

fn open_browser(url: &str) -> std::io::Result<()> {
    let (program, args): (&str, Vec<&str>) = if cfg!(target_os = "macos") {
        ("open", vec![url])
    } else if cfg!(target_os = "windows") {
        ("cmd", vec!["/c", "start", url])
    } else {
        ("xdg-open", vec![url])
    };
    std::process::Command::new(program).args(args).spawn().map(|_| ())
}

/// Run config commands
fn run_config_command(config: AppConfig, action: ConfigCommands, config_path: &Path) -> Result<()> {
    match action {
        ConfigCommands::Show => {
            let json = serde_json::to_string_pretty(&config)?;
            println!("{}", json);
        }
        ConfigCommands::Generate { output } => {
            let default_config = AppConfig::default();
            default_config.save(&output)?;
            println!("Generated config at {:?}", output);
        }
        ConfigCommands::Validate => {
            config.validate()?;
            println!("Configuration at {:?} is valid", config_path);
            println!("  Web UI: {}:{}", config.web.host, config.web.port);
            println!("  Default mood: {}", config.analysis.default_mood);
            println!("  Accepted formats: {}", config.analysis.accepted_extensions.join(", "));
        }
    }

    Ok(())
}
