//! Integration test common infrastructure.
//!
//! Binds a scripted server socket, spawns the compiled bot binary pointed
//! at it via a temporary config file, and exposes line-level send/expect
//! helpers over the accepted connection. The harness plays the server; the
//! crate under test is the client.

use std::io::Write as _;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpListener;
use tokio::time::timeout;

const IO_TIMEOUT: Duration = Duration::from_secs(10);

/// A running bot process connected to a scripted server.
pub struct BotHarness {
    child: Child,
    // Keeps the temp config file alive for the child's lifetime.
    _config: tempfile::NamedTempFile,
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

impl BotHarness {
    /// Spawn a bot with the default single test channel.
    pub async fn spawn() -> Self {
        Self::spawn_with("channels = [\"#chan\"]").await
    }

    /// Spawn a bot with extra config lines (must include `channels`).
    pub async fn spawn_with(extra_config: &str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind scripted server");
        let port = listener.local_addr().expect("local addr").port();

        let mut config = tempfile::NamedTempFile::new().expect("create temp config");
        write!(
            config,
            r#"
nick = "AvicBot"
server = "127.0.0.1"
port = {}
master = "Avicennasis"
{}
"#,
            port, extra_config
        )
        .expect("write temp config");

        let child = Command::new(env!("CARGO_BIN_EXE_slircbot"))
            .arg(config.path())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn bot binary");

        let (stream, _) = timeout(IO_TIMEOUT, listener.accept())
            .await
            .expect("bot did not connect in time")
            .expect("accept bot connection");
        let (read_half, write_half) = stream.into_split();

        Self {
            child,
            _config: config,
            reader: BufReader::new(read_half),
            writer: write_half,
        }
    }

    /// Next line from the bot, terminator stripped.
    pub async fn expect_line(&mut self) -> String {
        let mut line = String::new();
        let n = timeout(IO_TIMEOUT, self.reader.read_line(&mut line))
            .await
            .expect("timed out waiting for a line from the bot")
            .expect("read line from bot");
        assert!(n > 0, "bot closed the connection while a line was expected");
        line.trim_end_matches(&['\r', '\n'][..]).to_string()
    }

    /// Consume the default registration sequence (USER, NICK, JOIN #chan).
    pub async fn drain_registration(&mut self) {
        assert_eq!(self.expect_line().await, "USER AvicBot 0 * :Avicennasis");
        assert_eq!(self.expect_line().await, "NICK AvicBot");
        assert_eq!(self.expect_line().await, "JOIN #chan");
    }

    /// Send one line to the bot, CRLF-terminated.
    pub async fn send_line(&mut self, line: &str) {
        self.writer
            .write_all(line.as_bytes())
            .await
            .expect("write line to bot");
        self.writer
            .write_all(b"\r\n")
            .await
            .expect("write line terminator");
    }

    /// Send raw bytes to the bot, exactly as given.
    pub async fn send_raw(&mut self, bytes: &[u8]) {
        self.writer
            .write_all(bytes)
            .await
            .expect("write raw bytes to bot");
    }

    /// Close the server-to-bot direction so the bot sees end-of-stream.
    pub async fn shutdown_write(&mut self) {
        self.writer.shutdown().await.expect("shutdown write half");
    }

    /// Wait for the bot process to exit; true if it exited successfully.
    pub async fn wait_for_exit(&mut self) -> bool {
        for _ in 0..200 {
            if let Some(status) = self.child.try_wait().expect("poll bot process") {
                return status.success();
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        panic!("bot did not exit in time");
    }
}

impl Drop for BotHarness {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
