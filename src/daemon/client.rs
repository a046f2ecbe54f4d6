use std::io;
use std::path::Path;
use std::time::Duration;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::net::UnixStream;
use tokio::time::error::Elapsed;

use super::command::PlayerCommand;
use super::lines::ResponseBlock;
use super::status::Status;
use crate::error::{RemoteError, Result};

/// Deadline applied to each request/response exchange unless configured otherwise
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

const STATUS_REQUEST: &str = "status\n";

/// Client for the cmus remote protocol over a single connection.
///
/// Replies carry no request identifiers, so exchanges must not interleave:
/// each call writes one request and consumes its complete reply before
/// returning. Once an exchange fails at the transport level the stream can
/// no longer be trusted and every later call fails too.
#[derive(Debug)]
pub struct DaemonClient<S = UnixStream> {
    reader: BufReader<S>,
    timeout: Duration,
    broken: bool,
}

impl DaemonClient<UnixStream> {
    /// Connect to the daemon socket at the given path
    pub async fn connect(socket_path: impl AsRef<Path>, timeout: Duration) -> Result<Self> {
        let path = socket_path.as_ref();
        let stream = match tokio::time::timeout(timeout, UnixStream::connect(path)).await {
            Ok(Ok(stream)) => stream,
            Ok(Err(source)) => {
                return Err(RemoteError::Connection {
                    path: path.to_path_buf(),
                    source,
                });
            }
            Err(_) => {
                return Err(RemoteError::Connection {
                    path: path.to_path_buf(),
                    source: io::Error::new(io::ErrorKind::TimedOut, "connect timed out"),
                });
            }
        };

        tracing::info!(path = %path.display(), "connected to cmus");
        Ok(Self::from_stream(stream, timeout))
    }
}

impl<S: AsyncRead + AsyncWrite + Unpin> DaemonClient<S> {
    /// Wrap an already established byte stream
    pub fn from_stream(stream: S, timeout: Duration) -> Self {
        Self {
            reader: BufReader::new(stream),
            timeout,
            broken: false,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// True after a transport failure; the client is then unusable
    pub fn is_broken(&self) -> bool {
        self.broken
    }

    pub async fn volume_up(&mut self) -> bool {
        self.execute(PlayerCommand::VolumeUp).await
    }

    pub async fn volume_down(&mut self) -> bool {
        self.execute(PlayerCommand::VolumeDown).await
    }

    pub async fn seek(&mut self, second: i64) -> bool {
        self.execute(PlayerCommand::Seek(second)).await
    }

    pub async fn next(&mut self) -> bool {
        self.execute(PlayerCommand::Next).await
    }

    pub async fn previous(&mut self) -> bool {
        self.execute(PlayerCommand::Previous).await
    }

    pub async fn toggle_pause_play(&mut self) -> bool {
        self.execute(PlayerCommand::TogglePausePlay).await
    }

    /// Issue a command; true iff the daemon acknowledged it with a newline.
    /// Transport failures are folded into `false`.
    pub async fn execute(&mut self, command: PlayerCommand) -> bool {
        match self.send(command).await {
            Ok(acked) => acked,
            Err(e) => {
                tracing::debug!(command = command.name(), error = %e, "command exchange failed");
                false
            }
        }
    }

    /// Issue a command and return whether the ack byte was a newline
    pub async fn send(&mut self, command: PlayerCommand) -> Result<bool> {
        self.ensure_usable()?;

        let line = command.wire_line();
        let result =
            tokio::time::timeout(self.timeout, ack_exchange(&mut self.reader, &line)).await;
        let ack = self.settle(result)?;

        if ack != b'\n' {
            tracing::debug!(command = command.name(), ack, "daemon rejected command");
        }
        Ok(ack == b'\n')
    }

    /// Query and parse the current playback status
    pub async fn status(&mut self) -> Result<Status> {
        self.ensure_usable()?;

        let result =
            tokio::time::timeout(self.timeout, block_exchange(&mut self.reader, STATUS_REQUEST))
                .await;
        let block = self.settle(result)?;
        tracing::trace!(lines = block.len(), "received status block");

        // A parse failure leaves the stream aligned: the whole block was consumed
        Status::from_block(&block)
    }

    fn ensure_usable(&self) -> Result<()> {
        if self.broken {
            return Err(RemoteError::not_connected());
        }
        Ok(())
    }

    fn settle<T>(&mut self, result: std::result::Result<io::Result<T>, Elapsed>) -> Result<T> {
        match result {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                self.broken = true;
                Err(RemoteError::Transport(e))
            }
            Err(_) => {
                self.broken = true;
                Err(RemoteError::timed_out())
            }
        }
    }
}

async fn write_request<S: AsyncWrite + Unpin>(stream: &mut S, line: &str) -> io::Result<()> {
    stream.write_all(line.as_bytes()).await?;
    stream.flush().await
}

async fn ack_exchange<S: AsyncRead + AsyncWrite + Unpin>(
    reader: &mut BufReader<S>,
    line: &str,
) -> io::Result<u8> {
    write_request(reader.get_mut(), line).await?;
    reader.read_u8().await
}

async fn block_exchange<S: AsyncRead + AsyncWrite + Unpin>(
    reader: &mut BufReader<S>,
    line: &str,
) -> io::Result<ResponseBlock> {
    write_request(reader.get_mut(), line).await?;
    ResponseBlock::read_from(reader).await
}
