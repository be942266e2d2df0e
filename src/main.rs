use ethex::app::{Action, App};
use ethex::config::{Config, Theme};
use ethex::explorer::{Explorer, TxScan, LATEST_BLOCKS};
use ethex::format::unix_now;
use ethex::rpc::{Block, Transaction};
use ethex::search::SearchQuery;
use ethex::view::{self, Entity, NavLink};
use ethex::{ui, ExplorerError};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ratatui::{
    crossterm::{
        event::{self, Event, KeyEventKind},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    },
    prelude::*,
};
use std::io::stdout;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ethex", version, about = "Terminal block explorer for EVM chains")]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Block number, block or transaction hash, or address to look up once
    query: Option<String>,

    /// JSON-RPC endpoint for this run, overriding the saved one
    #[arg(long, global = true)]
    rpc: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Save the JSON-RPC endpoint
    SetRpc { url: String },
    /// Save the color theme
    Theme {
        #[arg(value_enum)]
        theme: Theme,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Some(Commands::SetRpc { url }) => {
            init_tracing(false)?;
            reqwest::Url::parse(&url).with_context(|| format!("Invalid RPC URL: {url}"))?;
            config.set_rpc(url.clone())?;
            println!("RPC endpoint set to {url}");
            return Ok(());
        }
        Some(Commands::Theme { theme }) => {
            init_tracing(false)?;
            config.set_theme(theme)?;
            println!("Theme set to {}", theme.as_str());
            return Ok(());
        }
        None => {}
    }

    let rpc_url = cli.rpc.unwrap_or_else(|| config.rpc_url.clone());

    match cli.query {
        Some(query) => {
            init_tracing(false)?;
            run_once(&rpc_url, &query).await
        }
        None => {
            init_tracing(true)?;
            run_tui(config, rpc_url).await
        }
    }
}

/// Log to stderr for one-shot lookups, to a file while the TUI owns the terminal
fn init_tracing(to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env("ETHEX_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if to_file {
        let path = Config::log_path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {dir:?}"))?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {path:?}"))?;

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Arc::new(file))
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}

/// Error text for the user, naming the endpoint that was queried
fn describe_error(e: &ExplorerError, rpc_url: &str) -> String {
    match e {
        ExplorerError::Validation(_) => e.to_string(),
        _ => format!("{e}\n\nRPC: {rpc_url}"),
    }
}

async fn run_once(rpc_url: &str, query: &str) -> Result<()> {
    let explorer = Explorer::connect(rpc_url)?;

    match explorer.dispatch(query).await {
        Ok(Some(entity)) => {
            print!("{}", view::detail(&entity, unix_now()).to_plain());
            Ok(())
        }
        Ok(None) => anyhow::bail!("Nothing to search for"),
        Err(e) => anyhow::bail!(describe_error(&e, rpc_url)),
    }
}

/// Messages from async tasks back to the main loop
enum AsyncMessage {
    Blocks(Result<Vec<Block>, String>),
    Transactions(Result<Vec<Transaction>, String>),
    Detail {
        ticket: u64,
        result: Result<Entity, String>,
    },
}

async fn run_tui(config: Config, rpc_url: String) -> Result<()> {
    let explorer = Arc::new(Explorer::connect(&rpc_url)?);
    info!(rpc_url = %rpc_url, theme = config.theme.as_str(), "starting explorer");

    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::with_rpc_url(config, rpc_url);

    let (tx, mut rx) = mpsc::channel::<AsyncMessage>(10);

    load_lists(&explorer, &app.rpc_url, tx.clone());

    let result = run_event_loop(&mut terminal, &mut app, &explorer, tx, &mut rx).await;

    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    explorer: &Arc<Explorer>,
    tx: mpsc::Sender<AsyncMessage>,
    rx: &mut mpsc::Receiver<AsyncMessage>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        // Check for async results
        while let Ok(msg) = rx.try_recv() {
            match msg {
                AsyncMessage::Blocks(result) => app.set_blocks(result),
                AsyncMessage::Transactions(result) => app.set_transactions(result),
                AsyncMessage::Detail { ticket, result } => {
                    app.finish_request(ticket, result, unix_now());
                }
            }
        }

        // Poll for input events
        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.handle_key(key) {
                    Action::None => {}
                    Action::Quit => {}
                    Action::Search(query) => search(app, explorer, query, tx.clone()),
                    Action::Open(link) => open_link(app, explorer, link, tx.clone()),
                    Action::Refresh => load_lists(explorer, &app.rpc_url, tx.clone()),
                    Action::SaveTheme(theme) => {
                        if let Err(e) = app.config.save() {
                            warn!(error = %format!("{e:#}"), "failed to save theme");
                        } else {
                            info!(theme = theme.as_str(), "theme saved");
                        }
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Latest blocks first, then the recent-transaction scan
fn load_lists(explorer: &Arc<Explorer>, rpc_url: &str, tx: mpsc::Sender<AsyncMessage>) {
    let explorer = Arc::clone(explorer);
    let rpc_url = rpc_url.to_string();

    tokio::spawn(async move {
        let blocks = explorer.latest_blocks(LATEST_BLOCKS).await.map_err(|e| {
            error!(error = %e, "failed to load latest blocks");
            describe_error(&e, &rpc_url)
        });
        let _ = tx.send(AsyncMessage::Blocks(blocks)).await;

        let txs = explorer
            .recent_transactions(TxScan::default())
            .await
            .map_err(|e| {
                error!(error = %e, "failed to load recent transactions");
                describe_error(&e, &rpc_url)
            });
        let _ = tx.send(AsyncMessage::Transactions(txs)).await;
    });
}

fn search(
    app: &mut App,
    explorer: &Arc<Explorer>,
    query: SearchQuery,
    tx: mpsc::Sender<AsyncMessage>,
) {
    let ticket = app.begin_request(format!("Loading {}...", query.description()));
    let explorer = Arc::clone(explorer);
    let rpc_url = app.rpc_url.clone();

    tokio::spawn(async move {
        let result = match explorer.open(query).await {
            Ok(Some(entity)) => Ok(entity),
            Ok(None) => Err("Nothing to search for".to_string()),
            Err(e) => Err(describe_error(&e, &rpc_url)),
        };
        let _ = tx.send(AsyncMessage::Detail { ticket, result }).await;
    });
}

fn open_link(
    app: &mut App,
    explorer: &Arc<Explorer>,
    link: NavLink,
    tx: mpsc::Sender<AsyncMessage>,
) {
    let label = match link {
        NavLink::Block(number) => format!("Fetching block {number}..."),
        NavLink::Transaction(_) => "Fetching transaction...".to_string(),
        NavLink::Address(_) => "Fetching address...".to_string(),
    };
    let ticket = app.begin_request(label);
    let explorer = Arc::clone(explorer);
    let rpc_url = app.rpc_url.clone();

    tokio::spawn(async move {
        let result = explorer
            .follow(link)
            .await
            .map_err(|e| describe_error(&e, &rpc_url));
        let _ = tx.send(AsyncMessage::Detail { ticket, result }).await;
    });
}
