mod common;

use std::time::Duration;

use cmote::cli::{run_remote_command, Commands};
use cmote::daemon::{resolve_socket_path, DaemonClient};
use cmote::error::RemoteError;
use common::{create_test_app, scenario_status, FakeDaemon, SCENARIO_BLOCK};
use crossterm::event::{Event, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixListener;

const TIMEOUT: Duration = Duration::from_millis(500);

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

#[tokio::test]
async fn status_over_unix_socket() {
    let daemon = FakeDaemon::start(SCENARIO_BLOCK, b'\n');
    let mut client = DaemonClient::connect(&daemon.socket, TIMEOUT).await.unwrap();

    assert_eq!(client.status().await.unwrap(), scenario_status());
    assert_eq!(client.status().await.unwrap(), scenario_status());
    drop(client);

    assert_eq!(daemon.requests().await, vec!["status", "status"]);
}

#[tokio::test]
async fn every_command_reaches_the_daemon() {
    let daemon = FakeDaemon::start(SCENARIO_BLOCK, b'\n');
    let mut client = DaemonClient::connect(&daemon.socket, TIMEOUT).await.unwrap();

    assert!(client.volume_up().await);
    assert!(client.volume_down().await);
    assert!(client.seek(75).await);
    assert!(client.next().await);
    assert!(client.previous().await);
    assert!(client.toggle_pause_play().await);
    drop(client);

    assert_eq!(
        daemon.requests().await,
        vec![
            "vol +1%",
            "vol -1%",
            "seek 75",
            "player-next",
            "player-prev",
            "player-pause",
        ]
    );
}

#[tokio::test]
async fn unexpected_ack_byte_is_a_failure() {
    let daemon = FakeDaemon::start(SCENARIO_BLOCK, b'0');
    let mut client = DaemonClient::connect(&daemon.socket, TIMEOUT).await.unwrap();

    assert!(!client.next().await);
    assert!(!client.is_broken());
    assert_eq!(client.status().await.unwrap(), scenario_status());
    drop(client);

    assert_eq!(daemon.requests().await, vec!["player-next", "status"]);
}

#[tokio::test]
async fn missing_socket_is_a_connection_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cmus-socket");

    match DaemonClient::connect(&path, TIMEOUT).await {
        Err(RemoteError::Connection { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("expected connection error, got {:?}", other.map(|_| ())),
    }
}

#[tokio::test]
async fn socket_found_in_runtime_dir() {
    let daemon = FakeDaemon::start(SCENARIO_BLOCK, b'\n');
    let runtime_dir = daemon.runtime_dir();
    let path = resolve_socket_path(None, Some(runtime_dir.as_path())).unwrap();
    assert_eq!(path, daemon.socket);

    let mut client = DaemonClient::connect(&path, TIMEOUT).await.unwrap();
    assert!(client.status().await.is_ok());
}

#[tokio::test]
async fn daemon_hanging_up_mid_block_breaks_the_client() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cmus-socket");
    let listener = UnixListener::bind(&path).unwrap();

    let server = tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        reader.read_line(&mut line).await.unwrap();
        reader
            .get_mut()
            .write_all(b"status playing\nduration 18")
            .await
            .unwrap();
    });

    let mut client = DaemonClient::connect(&path, TIMEOUT).await.unwrap();

    assert!(matches!(client.status().await, Err(RemoteError::Transport(_))));
    server.await.unwrap();
    assert!(client.is_broken());
    assert!(!client.next().await);
}

#[tokio::test]
async fn drag_on_seek_bar_sends_rounded_seek() {
    let daemon = FakeDaemon::start(SCENARIO_BLOCK, b'\n');
    let mut client = DaemonClient::connect(&daemon.socket, TIMEOUT).await.unwrap();

    // 40x12 window: seek row 8, control row 10
    let mut app = create_test_app(scenario_status(), 40, 12);
    app.refresh_status(&mut client, 0).await.unwrap();

    let events = [
        mouse(MouseEventKind::Down(MouseButton::Left), 4, 8),
        mouse(MouseEventKind::Drag(MouseButton::Left), 10, 8),
        mouse(MouseEventKind::Up(MouseButton::Left), 20, 8),
        mouse(MouseEventKind::Up(MouseButton::Left), 24, 10),
    ];
    for event in &events {
        if let Some(command) = app.handle_event(event) {
            assert!(app.dispatch(&mut client, command).await);
        }
    }
    drop(client);

    assert_eq!(app.failed_commands, 0);
    assert_eq!(
        daemon.requests().await,
        vec!["status", "seek 45", "seek 90", "player-next"]
    );
}

#[tokio::test]
async fn one_shot_commands_against_daemon() {
    let daemon = FakeDaemon::start(SCENARIO_BLOCK, b'\n');
    let acked = run_remote_command(&Commands::Seek { seconds: 30 }, &daemon.socket, TIMEOUT)
        .await
        .unwrap();
    assert!(acked);
    assert_eq!(daemon.requests().await, vec!["seek 30"]);

    let daemon = FakeDaemon::start(SCENARIO_BLOCK, b'\n');
    assert!(run_remote_command(&Commands::Status, &daemon.socket, TIMEOUT)
        .await
        .unwrap());
    assert_eq!(daemon.requests().await, vec!["status"]);
}

#[tokio::test]
async fn one_shot_command_reports_missing_ack() {
    let daemon = FakeDaemon::start(SCENARIO_BLOCK, b'x');
    let acked = run_remote_command(&Commands::Toggle, &daemon.socket, TIMEOUT)
        .await
        .unwrap();
    assert!(!acked);
    assert_eq!(daemon.requests().await, vec!["player-pause"]);
}
