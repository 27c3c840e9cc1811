use anyhow::Context;
use clap::Parser;
use pnl_board::cli::{self, output::OutputMode, Cli, Commands};
use pnl_board::config::{AppConfig, LoggingConfig};
use pnl_board::data::DEMO_WALLET;
use pnl_board::domain::WalletAddress;
use pnl_board::leaderboard::Leaderboard;
use pnl_board::profile::{ProfilePage, SortDirection};
use pnl_board::provider::{DemoWalletProvider, WalletProvider};
use pnl_board::tui;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (config, problems) = load_config(&cli.config);

    if matches!(cli.command, Some(Commands::Dashboard { .. })) {
        // stdout belongs to the terminal UI, log to file only
        init_logging(&config.logging);
    } else {
        init_logging_simple();
    }
    for problem in &problems {
        warn!("config: {}", problem);
    }

    match &cli.command {
        Some(Commands::Dashboard { wallet, trusted, no_provider }) => {
            let provider = if *no_provider {
                None
            } else {
                let address = match wallet {
                    Some(addr) => addr.clone(),
                    None => WalletAddress::parse(DEMO_WALLET).context("demo wallet address")?,
                };
                Some(Arc::new(DemoWalletProvider::new(address, *trusted)) as Arc<dyn WalletProvider>)
            };
            tui::run_dashboard(&config, provider)
                .await
                .context("dashboard terminal failed")?;
        }
        Some(Commands::Ratio { green, red, width, json }) => {
            let width = width.unwrap_or(config.display.bar_width);
            cli::ratio::run(*green, *red, width, OutputMode::from_json_flag(*json))
                .context("ratio")?;
        }
        Some(Commands::Profile { tab, sort, asc, count, json }) => {
            let mut page = ProfilePage::demo()
                .with_show_count(count.unwrap_or(config.display.show_count));
            page.tab = *tab;
            page.sort.column = *sort;
            if *asc {
                page.sort.direction = SortDirection::Asc;
            }
            cli::profile::run(&page, &config.display, OutputMode::from_json_flag(*json))?;
        }
        Some(Commands::Config) => {
            let rendered = cli::render_config(&config).context("rendering config as TOML")?;
            print!("{}", rendered);
        }
        Some(Commands::Leaderboard { period, json }) => {
            let period = period.unwrap_or(config.leaderboard.default_period);
            let board = Leaderboard::demo();
            cli::leaderboard::run(&board, period, &config.display, OutputMode::from_json_flag(*json))?;
        }
        None => {
            let board = Leaderboard::demo();
            cli::leaderboard::run(
                &board,
                config.leaderboard.default_period,
                &config.display,
                OutputMode::Table,
            )?;
        }
    }

    Ok(())
}

/// Load config from `dir`, falling back to defaults when it cannot be read or is invalid.
///
/// Problems are returned rather than logged since logging is not set up yet.
fn load_config(dir: &str) -> (AppConfig, Vec<String>) {
    let config = match AppConfig::load_from(dir) {
        Ok(config) => config,
        Err(e) => {
            return (
                AppConfig::default(),
                vec![format!("failed to load {}: {}, using defaults", dir, e)],
            );
        }
    };

    match config.validate() {
        Ok(()) => (config, Vec::new()),
        Err(mut errors) => {
            errors.push(format!("invalid config in {}, using defaults", dir));
            (AppConfig::default(), errors)
        }
    }
}

/// File logging for the dashboard: daily rotating file, no console output
fn init_logging(logging: &LoggingConfig) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("{},pnl_board=debug", logging.level)))
        .unwrap_or_else(|_| EnvFilter::new("info,pnl_board=debug"));

    let log_dir = std::env::var("PNL_BOARD_LOG_DIR")
        .or_else(|_| std::env::var("LOG_DIR"))
        .unwrap_or_else(|_| "logs".to_string());

    // `rolling::daily` panics if it can't create the first file, so preflight writability.
    let writer = if std::fs::create_dir_all(&log_dir).is_ok() {
        let test_path = std::path::Path::new(&log_dir).join(".pnl_board_write_test");
        match std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&test_path)
        {
            Ok(_) => {
                let _ = std::fs::remove_file(&test_path);

                let file_appender = tracing_appender::rolling::daily(&log_dir, "pnl-board.log");
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                // Process lifetime
                Box::leak(Box::new(guard));
                Some(non_blocking)
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not write to log directory {} ({}), file logging disabled",
                    log_dir, e
                );
                None
            }
        }
    } else {
        eprintln!(
            "Warning: Could not create log directory {}, file logging disabled",
            log_dir
        );
        None
    };

    let file_logging_enabled = writer.is_some();
    let (json_layer, text_layer) = match writer {
        Some(w) if logging.json => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(w)
                    .with_target(true),
            ),
            None,
        ),
        Some(w) => (
            None,
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(w)
                    .with_ansi(false)
                    .with_target(true),
            ),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    if file_logging_enabled {
        info!("File logging enabled: {}/pnl-board.log", log_dir);
    }
}

fn init_logging_simple() {
    // Minimal logging for CLI commands
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .try_init();
}
