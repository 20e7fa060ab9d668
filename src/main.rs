use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{info, warn};

use walletlens::app::App;
use walletlens::core::action_for_key;
use walletlens::infrastructure::{RuntimeBridge, RuntimeCommand};
use walletlens::{config, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "walletlens",
    version,
    about = "Look up ETH and ERC-20 balances for an address or ENS name"
)]
struct Args {
    /// HTTP JSON-RPC endpoint (e.g. https://eth.llamarpc.com)
    #[arg(long, env = "WALLETLENS_RPC_URL")]
    rpc: Option<String>,

    /// WebSocket endpoint (e.g. ws://localhost:8546)
    #[arg(long)]
    ws: Option<String>,

    /// Config file (defaults to $XDG_CONFIG_HOME/walletlens/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log file (defaults to the data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load(args.config.as_deref());
    let log_path = args.log_file.clone().or_else(config::log_path);
    logging::init(log_path.as_deref());

    let endpoint = config::resolve_endpoint(args.ws.as_deref(), args.rpc.as_deref(), &config)?;
    let tokens = config.token_specs();
    info!(endpoint = %endpoint.display(), tokens = tokens.len(), "starting");

    let runtime = RuntimeBridge::new(endpoint.clone(), tokens.clone())?;
    let app = App::new(endpoint.display(), tokens);

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, &runtime);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    runtime: &RuntimeBridge,
) -> Result<()> {
    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    loop {
        for event in runtime.poll_events() {
            app.apply_runtime_event(event);
        }

        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            let _ = runtime.send(RuntimeCommand::Shutdown);
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if let Some(request) = app.dispatch(action_for_key(key)) {
                    info!(generation = request.generation, query = %request.query, "submit");
                    let cmd = RuntimeCommand::Lookup {
                        generation: request.generation,
                        query: request.query,
                    };
                    if let Err(err) = runtime.send(cmd) {
                        warn!(error = %err, "lookup not dispatched");
                        app.fail_pending(format!("{err}"));
                    }
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
}
