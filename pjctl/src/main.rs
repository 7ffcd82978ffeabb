// pjctl -- command-line control for a JVC projector.
//
// Usage:
//   pjctl get Power
//   pjctl send Anamorphic.Anamorphic.A PAUSE0.5 Remote.RemoteCode.Menu
//   pjctl send AllOn
//   pjctl commands
//   pjctl --host 192.168.1.60 watch
//
// Configuration is read from ~/.cmdserver/cmdserver.yml (or
// $CMDSERVER_CONFIG_HOME/cmdserver.yml, or --config) and CMDSERVER_*
// environment variables.

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pjlib::jvc::{GetOutcome, ProjectorController, SendOutcome, describe_all};
use pjlib::mqtt::MqttNotifier;
use pjlib::{StateNotifier, TracingNotifier};

use crate::config::AppConfig;

// ---------------------------------------------------------------------------
// CLI argument definitions
// ---------------------------------------------------------------------------

/// pjctl -- read, write and watch a JVC projector.
#[derive(Parser)]
#[command(name = "pjctl", version, about)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Projector host, overriding `pjip` from the configuration.
    #[arg(long)]
    host: Option<String>,

    /// Projector port, overriding `pjport` from the configuration.
    #[arg(long)]
    port: Option<u16>,

    /// Log at debug level (RUST_LOG takes precedence).
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read the current value of one command.
    Get {
        /// Command name, e.g. PictureMode.
        command: String,
    },
    /// Run dotted commands, macro names and PAUSE<seconds> directives in order.
    Send {
        #[arg(required = true)]
        entries: Vec<String>,
    },
    /// Print the command catalog as JSON.
    Commands,
    /// Poll the projector and publish its state until Ctrl-C.
    Watch,
}

// ---------------------------------------------------------------------------
// Setup
// ---------------------------------------------------------------------------

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let path = cli.config.clone().unwrap_or_else(config::default_path);
    let mut cfg = AppConfig::load(&path)?;
    if let Some(host) = &cli.host {
        cfg.pjip = Some(host.clone());
    }
    if let Some(port) = cli.port {
        cfg.pjport = Some(port);
    }
    Ok(cfg)
}

fn require_enabled(pj: ProjectorController) -> Result<ProjectorController> {
    if !pj.enabled() {
        bail!("No projector configured: set pjip in the configuration or pass --host");
    }
    Ok(pj)
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_commands() -> Result<()> {
    let json = serde_json::to_string_pretty(&describe_all()).context("encoding catalog")?;
    println!("{}", json);
    Ok(())
}

async fn cmd_get(cfg: &AppConfig, name: &str) -> Result<()> {
    let pj = require_enabled(cfg.projector().builder().build())?;
    let outcome = pj.get(name).await;
    pj.shutdown().await;

    match outcome {
        GetOutcome::Value(value) => {
            println!("{}", value);
            Ok(())
        }
        GetOutcome::NotFound => bail!("Unknown command: {}", name),
        GetOutcome::Failed => bail!("Unable to read {} (see log for details)", name),
        GetOutcome::Disabled => bail!("Projector disabled"),
    }
}

async fn cmd_send(cfg: &AppConfig, entries: &[String]) -> Result<()> {
    let pj = require_enabled(cfg.projector().builder().build())?;
    let outcome = pj.send(entries).await;
    pj.shutdown().await;

    match outcome {
        SendOutcome::Completed {
            executed,
            skipped,
            failed,
        } => {
            println!("executed {}, skipped {}, failed {}", executed, skipped, failed);
            if skipped + failed > 0 {
                bail!("{} entries were not applied", skipped + failed);
            }
            Ok(())
        }
        SendOutcome::Failed => bail!("Unable to reach the projector (see log for details)"),
        SendOutcome::Disabled => bail!("Projector disabled"),
    }
}

async fn cmd_watch(cfg: &AppConfig) -> Result<()> {
    let notifier: Arc<dyn StateNotifier> = match &cfg.mqtt {
        Some(settings) => Arc::new(MqttNotifier::new(settings)),
        None => {
            info!("No MQTT broker configured, logging state only");
            Arc::new(TracingNotifier)
        }
    };
    let pj = require_enabled(cfg.projector().builder().notifier(notifier).build())?;
    let Some(mut updates) = pj.subscribe() else {
        bail!("Projector disabled");
    };

    info!("Watching projector, press Ctrl-C to stop");
    loop {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                result.context("waiting for Ctrl-C")?;
                break;
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                println!("{}", serde_json::to_string(&state).context("encoding state")?);
            }
        }
    }

    pj.shutdown().await;
    Ok(())
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(&cli)?;
    init_logging(cfg.debug_logging || cli.debug);

    match &cli.command {
        Command::Commands => cmd_commands(),
        Command::Get { command } => cmd_get(&cfg, command).await,
        Command::Send { entries } => cmd_send(&cfg, entries).await,
        Command::Watch => cmd_watch(&cfg).await,
    }
}
