use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::io::{AsyncRead, AsyncWrite};

use crate::daemon::{DaemonClient, PlayerCommand, Status};
use crate::error::Result;
use crate::event_handler::InteractionStateMachine;
use super::click_regions::{HitGeometry, WindowSize};
use super::palette::Palette;

/// Host state for the terminal remote
pub struct App {
    /// Latest status snapshot; replaced wholesale on every poll
    pub status: Status,
    /// Drag state and hit-testing
    pub interaction: InteractionStateMachine,
    pub palette: Palette,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Commands the daemon did not acknowledge since startup
    pub failed_commands: u64,
    /// Most recent command that was not acknowledged
    pub last_failed: Option<PlayerCommand>,
}

impl App {
    pub fn new(status: Status, geometry: HitGeometry, window: WindowSize, palette: Palette) -> Self {
        Self {
            status,
            interaction: InteractionStateMachine::new(geometry, window),
            palette,
            should_quit: false,
            failed_commands: 0,
            last_failed: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Poll the daemon, retrying up to `retries` extra times.
    ///
    /// On failure the previous snapshot is kept untouched and the last error
    /// is returned; a partially parsed status is never stored.
    pub async fn refresh_status<S>(&mut self, client: &mut DaemonClient<S>, retries: u32) -> Result<()>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let mut attempt = 0;
        loop {
            match client.status().await {
                Ok(status) => {
                    self.status = status;
                    return Ok(());
                }
                Err(e) if attempt < retries && !client.is_broken() => {
                    attempt += 1;
                    tracing::warn!(error = %e, attempt, "status poll failed, retrying");
                }
                Err(e) => {
                    tracing::error!(error = %e, "status poll failed");
                    return Err(e);
                }
            }
        }
    }

    /// Handle one terminal event; returns the command to send, if any
    pub fn handle_event(&mut self, event: &Event) -> Option<PlayerCommand> {
        if let Event::Key(key) = event {
            if is_quit_key(key) {
                self.quit();
                return None;
            }
        }
        self.interaction.handle_event(event, &self.status)
    }

    /// Send a command; an unacknowledged command is logged and counted but
    /// does not interrupt interaction
    pub async fn dispatch<S>(&mut self, client: &mut DaemonClient<S>, command: PlayerCommand) -> bool
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let acked = client.execute(command).await;
        if acked {
            tracing::debug!(%command, "command acknowledged");
        } else {
            self.failed_commands += 1;
            self.last_failed = Some(command);
            tracing::warn!(%command, failed = self.failed_commands, "command not acknowledged");
        }
        acked
    }
}

fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
