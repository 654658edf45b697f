//! # slircbot-proto
//!
//! Client-side IRC protocol support for slircbot.
//!
//! This crate covers the subset of the protocol a single-connection chat
//! client needs:
//!
//! - Line framing over an arbitrarily-chunked byte stream ([`LineCodec`])
//! - Message parsing into a structured [`Message`] with a lenient grammar
//! - Wire serialization for the outbound commands of a client
//!   (registration, `JOIN`, `PRIVMSG`, `PONG`, `QUIT`)
//!
//! Robustness comes first: malformed bytes decode lossily and malformed
//! lines fail to parse without ever poisoning the stream. A long-running
//! bot must shrug off anything a server or a hostile channel throws at it.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod chan;
pub mod error;
pub mod line;
pub mod message;
pub mod prefix;

pub use self::chan::ChannelExt;
pub use self::error::{MessageParseError, ProtocolError};
pub use self::line::LineCodec;
pub use self::message::{Command, Message};
pub use self::prefix::Prefix;
