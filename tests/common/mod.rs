#![allow(dead_code)]

use std::path::PathBuf;

use cmote::daemon::Status;
use cmote::ui::{App, HitGeometry, Palette, WindowSize};
use ratatui::{backend::TestBackend, Terminal};
use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::UnixListener;
use tokio::task::JoinHandle;

pub const SCENARIO_BLOCK: &str = "status playing\nfile /m/a.mp3\nduration 180\nposition 42\ntag artist Bob\ntag album X\ntag title Y\n\n";

/// Status matching `SCENARIO_BLOCK`
pub fn scenario_status() -> Status {
    Status {
        playing: true,
        file: "/m/a.mp3".to_string(),
        duration: 180,
        position: 42,
        artist: "Bob".to_string(),
        album: "X".to_string(),
        title: "Y".to_string(),
        date: "Unknown Date".to_string(),
    }
}

/// A single-connection stand-in for cmus listening in a temp directory.
///
/// Answers `status` with a fixed block and every other line with a fixed
/// ack byte, recording each request line it received.
pub struct FakeDaemon {
    dir: TempDir,
    pub socket: PathBuf,
    handle: JoinHandle<Vec<String>>,
}

impl FakeDaemon {
    pub fn start(status_block: &str, ack: u8) -> Self {
        let dir = TempDir::new().unwrap();
        let socket = dir.path().join("cmus-socket");
        let listener = UnixListener::bind(&socket).unwrap();
        let status_block = status_block.to_string();

        let handle = tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let mut reader = BufReader::new(stream);
            let mut requests = Vec::new();

            loop {
                let mut line = String::new();
                match reader.read_line(&mut line).await {
                    Ok(0) | Err(_) => break,
                    Ok(_) => {}
                }

                let request = line.trim_end().to_string();
                let reply = if request == "status" {
                    status_block.as_bytes().to_vec()
                } else {
                    vec![ack]
                };
                requests.push(request);

                if reader.get_mut().write_all(&reply).await.is_err() {
                    break;
                }
            }
            requests
        });

        Self { dir, socket, handle }
    }

    pub fn runtime_dir(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Wait for the client to disconnect and return what it sent
    pub async fn requests(self) -> Vec<String> {
        let requests = self.handle.await.unwrap();
        drop(self.dir);
        requests
    }
}

pub fn create_test_app(status: Status, width: u16, height: u16) -> App {
    App::new(
        status,
        HitGeometry::default(),
        WindowSize::new(width, height),
        Palette::default(),
    )
}

/// Render the app to a test terminal and return one string per row
pub fn render_app_to_lines(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();

    terminal
        .draw(|f| {
            cmote::ui::draw(f, app);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| {
            (0..width)
                .map(|x| buffer.cell((x, y)).unwrap().symbol().to_string())
                .collect::<String>()
        })
        .collect()
}
