use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::event::EventStream;
use futures::{FutureExt, StreamExt};
use tokio::net::UnixStream;
use tokio::time::MissedTickBehavior;

use cmote::cli::{self, Cli};
use cmote::config::Config;
use cmote::daemon::DaemonClient;
use cmote::logging::{self, LogConfig};
use cmote::ui::{self, App, Palette, TerminalGuard, WindowSize};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Handle --init flag
    if cli.init {
        let path: PathBuf = cli
            .config
            .clone()
            .or_else(Config::default_path)
            .context("Cannot determine a config directory; pass --config")?;
        return cli::init_config(&path);
    }

    let config = Config::load(cli.config.as_deref())?;
    config.validate()?;

    let log_config = match cli.command {
        Some(_) => LogConfig::cli(config.log_filter.as_deref()),
        None => LogConfig::tui(config.log_filter.as_deref()),
    };
    logging::init_logging(&log_config)?;

    let socket = cli::socket_path(&cli, &config)?;
    tracing::debug!(socket = %socket.display(), "resolved cmus socket");

    if let Some(command) = &cli.command {
        let acked = cli::run_remote_command(command, &socket, config.timeout()).await?;
        if !acked {
            std::process::exit(1);
        }
        return Ok(());
    }

    let mut client = DaemonClient::connect(&socket, config.timeout()).await?;
    let status = client.status().await.context("Initial status query failed")?;

    let palette = Palette::resolve(
        cli.fg.as_deref().unwrap_or(&config.colors.fg),
        cli.bg.as_deref().unwrap_or(&config.colors.bg),
    );

    // Setup terminal
    let mut terminal = TerminalGuard::new()?;
    let (width, height) = terminal.size()?;
    let mut app = App::new(status, config.layout, WindowSize::new(width, height), palette);

    let result = run_app(&mut terminal, &mut app, &mut client, &config).await;

    // Restore the terminal before any error is printed
    drop(terminal);
    result
}

async fn run_app(
    terminal: &mut TerminalGuard,
    app: &mut App,
    client: &mut DaemonClient<UnixStream>,
    config: &Config,
) -> anyhow::Result<()> {
    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(config.poll_interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;

        // Fail fast: the loop stops on the first unrecovered poll error
        app.refresh_status(client, config.poll_retries)
            .await
            .context("Lost contact with cmus")?;

        // Drain whatever input arrived since the last tick without blocking
        while let Some(Some(event)) = events.next().now_or_never() {
            let event = event?;
            if let Some(command) = app.handle_event(&event) {
                app.dispatch(client, command).await;
            }
        }

        if app.should_quit {
            break;
        }

        terminal.terminal_mut().draw(|f| {
            ui::draw(f, app);
        })?;
    }

    Ok(())
}
