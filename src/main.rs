mod commands;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use skillswap_core::{Config, FilterQuery, TracingNotifier};

/// Landing page for a 1-on-1 skill exchange marketplace.
#[derive(Parser, Debug)]
#[command(name = "skillswap")]
#[command(version, about)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive landing page (default)
    Tui,
    /// List skills matching a search and category
    Skills {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// List instructors matching a search and category
    Instructors {
        #[arg(long)]
        query: Option<String>,
        #[arg(long)]
        category: Option<String>,
    },
    /// Show the bookable time slots
    Slots,
    /// Book a time slot, e.g. `--slot "Tomorrow-10:00 AM"`
    Book {
        #[arg(long)]
        instructor: String,
        #[arg(long)]
        slot: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config_path = resolve_config_path(cli.config.as_deref());
    let config = Config::load(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;

    let command = cli.command.unwrap_or(Command::Tui);
    // When the TUI is active, tracing goes to a file to avoid corrupting the terminal
    init_subscriber(matches!(command, Command::Tui).then_some(config.tui.log_file.as_str()));

    config.validate().context("invalid configuration")?;
    tracing::debug!(path = %config_path.display(), "configuration loaded");

    match command {
        Command::Tui => run_tui(&config).await,
        Command::Skills { query, category } => {
            let query = FilterQuery::from_parts(query.as_deref(), category.as_deref());
            print!("{}", commands::list_skills(&query));
            Ok(())
        }
        Command::Instructors { query, category } => {
            let query = FilterQuery::from_parts(query.as_deref(), category.as_deref());
            print!("{}", commands::list_instructors(&query));
            Ok(())
        }
        Command::Slots => {
            print!("{}", commands::list_slots());
            Ok(())
        }
        Command::Book { instructor, slot } => {
            let confirmation = commands::book(&instructor, &slot, &TracingNotifier)?;
            println!("Booked {confirmation}");
            Ok(())
        }
    }
}

#[cfg(feature = "tui")]
async fn run_tui(config: &Config) -> anyhow::Result<()> {
    use skillswap_tui::{App, EventReader};

    let (event_tx, event_rx) = tokio::sync::mpsc::channel(256);
    let app = App::new(event_tx.clone(), config)?;

    let reader = EventReader::new(event_tx, config.tui.tick_rate());
    std::thread::spawn(move || reader.run());

    skillswap_tui::run_tui(app, event_rx).await?;
    Ok(())
}

#[cfg(not(feature = "tui"))]
async fn run_tui(_config: &Config) -> anyhow::Result<()> {
    anyhow::bail!("built without the `tui` feature; use a headless subcommand")
}

fn resolve_config_path(flag: Option<&Path>) -> PathBuf {
    if let Some(path) = flag {
        return path.to_path_buf();
    }
    if let Ok(path) = std::env::var("SKILLSWAP_CONFIG") {
        return PathBuf::from(path);
    }
    PathBuf::from("config/default.toml")
}

fn init_subscriber(log_file: Option<&str>) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if let Some(file) = log_file.and_then(|path| std::fs::File::create(path).ok()) {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false),
            )
            .init();
        return;
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    fn cli_defaults_to_tui() {
        let cli = Cli::try_parse_from(["skillswap"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn cli_parses_book() {
        let cli = Cli::try_parse_from([
            "skillswap",
            "book",
            "--instructor",
            "Emma Thompson",
            "--slot",
            "Today-2:00 PM",
            "--config",
            "custom.toml",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
        let Some(Command::Book { instructor, slot }) = cli.command else {
            panic!("expected book command");
        };
        assert_eq!(instructor, "Emma Thompson");
        assert_eq!(slot, "Today-2:00 PM");
    }

    #[test]
    fn cli_rejects_book_without_slot() {
        assert!(Cli::try_parse_from(["skillswap", "book", "--instructor", "x"]).is_err());
    }

    #[test]
    #[serial]
    fn config_path_precedence() {
        unsafe { std::env::remove_var("SKILLSWAP_CONFIG") };
        assert_eq!(
            resolve_config_path(None),
            PathBuf::from("config/default.toml")
        );

        unsafe { std::env::set_var("SKILLSWAP_CONFIG", "/etc/skillswap.toml") };
        assert_eq!(
            resolve_config_path(None),
            PathBuf::from("/etc/skillswap.toml")
        );
        assert_eq!(
            resolve_config_path(Some(Path::new("flag.toml"))),
            PathBuf::from("flag.toml")
        );
        unsafe { std::env::remove_var("SKILLSWAP_CONFIG") };
    }
}
