//! Session controller.
//!
//! Owns the connection lifecycle: registration handshake, channel joins,
//! the receive loop, keepalive response, and graceful teardown. One session
//! is one connection; all processing is a single logical stream of control,
//! so there is no locking anywhere in this path.

use anyhow::Context as _;
use futures_util::{SinkExt, StreamExt};
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_util::codec::Framed;
use tracing::{debug, info, warn};

use slircbot_proto::{ChannelExt, Command, LineCodec, Message};

use crate::config::{AuthMode, Config};
use crate::dispatch::{Action, ChatEvent, Dispatcher};

/// Fallback keepalive payload for probes that carry none.
const PING_FALLBACK: &str = "pingis";

/// A live connection to one server.
pub struct Session {
    config: Config,
    dispatcher: Dispatcher,
    transport: Framed<TcpStream, LineCodec>,
    running: bool,
}

/// Extract the keepalive payload if `line` is a PING probe.
///
/// The probe is recognized before (and without) full parsing so the answer
/// can never be delayed by dispatch work: the server's liveness window is a
/// hard deadline. The line must begin with the `PING` token itself, so
/// verbs that merely share the spelling fall through to the normal parser.
fn ping_payload(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("PING")?;
    if !rest.is_empty() && !rest.starts_with(|c| c == ' ' || c == ':') {
        return None;
    }
    Some(match rest.split_once(':') {
        Some((_, payload)) => payload,
        None => PING_FALLBACK,
    })
}

/// Derive the dispatchable event from a parsed message, if it is one.
///
/// Only user-visible chat messages dispatch. A channel message is answered
/// in-channel; a private message is answered to the sender. A private
/// message whose origin carries no nick has nowhere to be answered and is
/// dropped.
fn chat_event(message: &Message) -> Option<ChatEvent> {
    let Command::PRIVMSG(ref target, ref text) = message.command else {
        return None;
    };

    let sender = message.source_nickname().unwrap_or("");
    let reply_target = if target.is_channel_name() {
        target.as_str()
    } else {
        sender
    };
    if reply_target.is_empty() {
        return None;
    }

    Some(ChatEvent {
        sender: sender.to_string(),
        reply_target: reply_target.to_string(),
        text: text.clone(),
    })
}

impl Session {
    /// Connect to the configured server and set up framing.
    pub async fn connect(config: Config) -> anyhow::Result<Self> {
        let dispatcher = Dispatcher::new(&config).context("failed to build dispatcher")?;

        let addr = config.addr();
        info!(%addr, nick = %config.nick, "Connecting");
        let stream = TcpStream::connect(&addr)
            .await
            .with_context(|| format!("failed to connect to {}", addr))?;

        let codec = LineCodec::with_max_len(config.recv_buffer);
        let transport = Framed::with_capacity(stream, codec, config.recv_buffer);
        Ok(Self {
            config,
            dispatcher,
            transport,
            running: true,
        })
    }

    /// Drive the session to completion: register, join, listen, quit.
    ///
    /// The quit notification is attempted on every exit path, including
    /// transport failure, where it is a no-op at worst.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.register().await?;
        self.join_channels().await?;
        let result = self.listen().await;
        self.quit().await;
        result
    }

    /// Registration handshake. Fire-and-forget: no acknowledgment is
    /// awaited; a rejecting server just closes the transport.
    async fn register(&mut self) -> anyhow::Result<()> {
        info!(auth = ?self.config.auth, "Registering");

        let secret = self.config.secret.clone();
        if let (AuthMode::Pass, Some(secret)) = (self.config.auth, &secret) {
            self.send(Message::pass(secret.as_str())).await?;
        }

        self.send(Message::user(
            self.config.username.clone(),
            self.config.realname.clone(),
        ))
        .await?;
        self.send(Message::nick(self.config.nick.clone())).await?;

        if let (AuthMode::Identify, Some(secret)) = (self.config.auth, &secret) {
            self.send(Message::privmsg("NickServ", format!("IDENTIFY {}", secret)))
                .await?;
        }

        Ok(())
    }

    /// Join every configured channel, in configuration order.
    async fn join_channels(&mut self) -> anyhow::Result<()> {
        let channels = self.config.channels.clone();
        for channel in channels {
            info!(%channel, "Joining");
            self.send(Message::join(channel.as_str())).await?;
        }
        Ok(())
    }

    /// The steady-state receive loop.
    async fn listen(&mut self) -> anyhow::Result<()> {
        while self.running {
            tokio::select! {
                line = self.transport.next() => match line {
                    Some(Ok(line)) => self.handle_line(&line).await?,
                    Some(Err(e)) => return Err(e).context("transport read failed"),
                    None => {
                        info!("Server closed the connection");
                        break;
                    }
                },
                _ = tokio::signal::ctrl_c() => {
                    info!("Interrupted, shutting down");
                    break;
                }
            }
        }
        Ok(())
    }

    /// Process one inbound line: keepalive first, then lenient parse, then
    /// dispatch for chat messages. Unparsable lines and unmodeled server
    /// chatter are dropped without error.
    async fn handle_line(&mut self, line: &str) -> anyhow::Result<()> {
        debug!(raw = %line, "Received");

        if let Some(payload) = ping_payload(line) {
            self.send(Message::pong(payload))
                .await
                .context("keepalive response failed")?;
            return Ok(());
        }

        let message: Message = match line.parse() {
            Ok(message) => message,
            Err(e) => {
                debug!(error = %e, "Dropping unparsable line");
                return Ok(());
            }
        };

        // A prefixed probe misses the fast path above but still gets its
        // answer here.
        if let Command::PING(ref payload) = message.command {
            let payload = payload.clone();
            self.send(Message::pong(payload))
                .await
                .context("keepalive response failed")?;
            return Ok(());
        }

        if let Some(event) = chat_event(&message) {
            let actions = self.dispatcher.dispatch(&event);
            self.perform(actions).await?;
        }
        Ok(())
    }

    /// Carry out dispatch actions in order. Lines after the first are
    /// spaced by the configured gap so gateway-style backends don't drop
    /// rapid repeats.
    async fn perform(&mut self, actions: Vec<Action>) -> anyhow::Result<()> {
        let gap = Duration::from_millis(self.config.send_gap_ms);
        let mut sent = 0usize;

        for action in actions {
            match action {
                Action::Say { target, text } => {
                    if sent > 0 && !gap.is_zero() {
                        tokio::time::sleep(gap).await;
                    }
                    self.send(Message::privmsg(target, text)).await?;
                    sent += 1;
                }
                Action::Quit => {
                    self.running = false;
                }
            }
        }
        Ok(())
    }

    /// Send the quit notification and stop. Best-effort and idempotent:
    /// the transport may already be gone.
    async fn quit(&mut self) {
        let farewell = Message::quit_with_message(self.config.quit_message.clone());
        if let Err(e) = self.transport.send(farewell).await {
            warn!(error = %e, "Failed to send QUIT");
        }
        self.running = false;
    }

    async fn send(&mut self, message: Message) -> anyhow::Result<()> {
        debug!(outbound = %message.to_string().trim_end(), "Sending");
        self.transport
            .send(message)
            .await
            .context("transport write failed")
    }
}
