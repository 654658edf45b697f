//! IRC message types, parsing and serialization.
//!
//! Parsing is deliberately lenient. The wire is adversarial and full of
//! server chatter the client does not model; a verb outside the client's
//! vocabulary becomes [`Command::Raw`] so the caller can ignore it, and a
//! line outside the grammar is a parse error the caller drops.

use std::fmt;
use std::str::FromStr;

use nom::{
    bytes::complete::{take_until, take_while1},
    character::complete::{char, space0},
    combinator::opt,
    sequence::preceded,
    IResult,
};
use smallvec::SmallVec;

use crate::chan::ChannelExt;
use crate::error::{MessageParseError, ProtocolError};
use crate::prefix::Prefix;

/// An owned IRC message: optional origin prefix plus the command.
#[derive(Clone, Debug, PartialEq)]
pub struct Message {
    /// Message origin (e.g. `nick!user@host`), if the line carried one.
    pub prefix: Option<Prefix>,
    /// The command and its parameters.
    pub command: Command,
}

/// The command subset the client speaks, plus a catch-all.
///
/// Everything the server can send that the client has no behavior for
/// (numerics, NOTICE, MODE, ...) parses to [`Command::Raw`].
#[derive(Clone, Debug, PartialEq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Command {
    /// `PASS <secret>`
    PASS(String),
    /// `NICK <nick>`
    NICK(String),
    /// `USER <user> <mode> * :<realname>`
    USER(String, String, String),
    /// `JOIN <channel>`
    JOIN(String),
    /// `PRIVMSG <target> :<text>`
    PRIVMSG(String, String),
    /// `PING :<payload>`
    PING(String),
    /// `PONG :<payload>`
    PONG(String),
    /// `QUIT [:<text>]`
    QUIT(Option<String>),
    /// Any other verb or numeric, with its raw parameters.
    Raw(String, Vec<String>),
}

impl Command {
    /// Build a command from a verb token and its parameters.
    pub fn new(verb: &str, params: &[&str]) -> Result<Command, MessageParseError> {
        let need = |expected: usize, command: &'static str| MessageParseError::NotEnoughArguments {
            command,
            expected,
            got: params.len(),
        };

        Ok(match verb.to_ascii_uppercase().as_str() {
            "PASS" => Command::PASS(params.first().ok_or_else(|| need(1, "PASS"))?.to_string()),
            "NICK" => Command::NICK(params.first().ok_or_else(|| need(1, "NICK"))?.to_string()),
            "USER" => {
                if params.len() < 4 {
                    return Err(need(4, "USER"));
                }
                Command::USER(
                    params[0].to_string(),
                    params[1].to_string(),
                    params[3].to_string(),
                )
            }
            "JOIN" => Command::JOIN(params.first().ok_or_else(|| need(1, "JOIN"))?.to_string()),
            "PRIVMSG" => {
                if params.len() < 2 {
                    return Err(need(2, "PRIVMSG"));
                }
                Command::PRIVMSG(params[0].to_string(), params[1].to_string())
            }
            "PING" => Command::PING(params.first().unwrap_or(&"").to_string()),
            "PONG" => Command::PONG(params.first().unwrap_or(&"").to_string()),
            "QUIT" => Command::QUIT(params.first().map(|s| s.to_string())),
            _ => Command::Raw(
                verb.to_string(),
                params.iter().map(|s| s.to_string()).collect(),
            ),
        })
    }
}

impl Message {
    /// Create a `PRIVMSG` to a target with text.
    #[must_use]
    pub fn privmsg<T, M>(target: T, text: M) -> Self
    where
        T: Into<String>,
        M: Into<String>,
    {
        Command::PRIVMSG(target.into(), text.into()).into()
    }

    /// Create a `JOIN` for a channel.
    #[must_use]
    pub fn join<C: Into<String>>(channel: C) -> Self {
        Command::JOIN(channel.into()).into()
    }

    /// Create a `NICK` message.
    #[must_use]
    pub fn nick<N: Into<String>>(nickname: N) -> Self {
        Command::NICK(nickname.into()).into()
    }

    /// Create a `USER` registration message with the default mode.
    #[must_use]
    pub fn user<U, R>(username: U, realname: R) -> Self
    where
        U: Into<String>,
        R: Into<String>,
    {
        Command::USER(username.into(), "0".into(), realname.into()).into()
    }

    /// Create a `PASS` message.
    #[must_use]
    pub fn pass<S: Into<String>>(secret: S) -> Self {
        Command::PASS(secret.into()).into()
    }

    /// Create a `PONG` carrying a probe's payload.
    #[must_use]
    pub fn pong<P: Into<String>>(payload: P) -> Self {
        Command::PONG(payload.into()).into()
    }

    /// Create a `QUIT` with a parting message.
    #[must_use]
    pub fn quit_with_message<M: Into<String>>(message: M) -> Self {
        Command::QUIT(Some(message.into())).into()
    }

    /// The nickname from the message prefix, if present.
    pub fn source_nickname(&self) -> Option<&str> {
        self.prefix.as_ref().and_then(Prefix::nick)
    }

    /// The appropriate target for a response.
    ///
    /// A channel message is answered in-channel; a private message is
    /// answered to the sender.
    pub fn response_target(&self) -> Option<&str> {
        match self.command {
            Command::PRIVMSG(ref target, _) if target.is_channel_name() => Some(target),
            _ => self.source_nickname(),
        }
    }
}

impl From<Command> for Message {
    fn from(command: Command) -> Message {
        Message {
            prefix: None,
            command,
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse IRCv3 message tags (after `@`, before the first space).
///
/// Tags are accepted so tag-emitting servers don't lose real chat, but the
/// client has no use for them and the value is discarded.
fn parse_tags(input: &str) -> IResult<&str, &str> {
    preceded(char('@'), take_until(" "))(input)
}

/// Parse the message prefix (after `:`, before the first space).
fn parse_prefix(input: &str) -> IResult<&str, &str> {
    preceded(char(':'), take_while1(|c| c != ' '))(input)
}

/// Parse the command token: a run of letters, or a 3-digit numeric.
fn parse_verb(input: &str) -> IResult<&str, &str> {
    let (rest, verb) = take_while1(|c: char| c.is_alphanumeric())(input)?;

    let is_letters = verb.chars().all(|c| c.is_ascii_alphabetic());
    let is_numeric = verb.len() == 3 && verb.chars().all(|c| c.is_ascii_digit());

    if is_letters || is_numeric {
        Ok((rest, verb))
    } else {
        Err(nom::Err::Error(nom::error::Error::new(
            input,
            nom::error::ErrorKind::AlphaNumeric,
        )))
    }
}

/// Parse space-separated parameters, with the trailing parameter
/// (introduced by `:`) running to the end of the line.
fn parse_params(input: &str) -> SmallVec<[&str; 8]> {
    let mut params: SmallVec<[&str; 8]> = SmallVec::new();
    let mut rest = input;

    loop {
        // Separator: one or more spaces.
        let trimmed = rest.trim_start_matches(' ');
        if trimmed.len() == rest.len() || trimmed.is_empty() {
            break;
        }
        rest = trimmed;

        if let Some(trailing) = rest.strip_prefix(':') {
            params.push(trailing);
            break;
        }

        let end = rest.find(' ').unwrap_or(rest.len());
        params.push(&rest[..end]);
        rest = &rest[end..];
    }

    params
}

fn parse_line(input: &str) -> IResult<&str, (Option<&str>, &str, SmallVec<[&str; 8]>)> {
    let (input, _tags) = opt(parse_tags)(input)?;
    let (input, _) = space0(input)?;
    let (input, prefix) = opt(parse_prefix)(input)?;
    let (input, _) = space0(input)?;
    let (input, verb) = parse_verb(input)?;
    let params = parse_params(input);
    Ok(("", (prefix, verb, params)))
}

impl FromStr for Message {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Message, Self::Err> {
        let line = s.trim_end_matches(&['\r', '\n'][..]);
        if line.is_empty() {
            return Err(ProtocolError::InvalidMessage {
                string: s.to_owned(),
                cause: MessageParseError::EmptyMessage,
            });
        }

        let (prefix, verb, params) = match parse_line(line) {
            Ok((_, parts)) => parts,
            Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
                return Err(ProtocolError::InvalidMessage {
                    string: s.to_owned(),
                    cause: MessageParseError::ParseFailure {
                        position: line.len() - e.input.len(),
                    },
                });
            }
            Err(nom::Err::Incomplete(_)) => {
                return Err(ProtocolError::InvalidMessage {
                    string: s.to_owned(),
                    cause: MessageParseError::ParseFailure {
                        position: line.len(),
                    },
                });
            }
        };

        let command = Command::new(verb, &params).map_err(|cause| ProtocolError::InvalidMessage {
            string: s.to_owned(),
            cause,
        })?;

        Ok(Message {
            prefix: prefix.map(Prefix::parse),
            command,
        })
    }
}

// ============================================================================
// Serialization
// ============================================================================

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::PASS(secret) => write!(f, "PASS {}", secret),
            Command::NICK(nick) => write!(f, "NICK {}", nick),
            Command::USER(user, mode, realname) => {
                write!(f, "USER {} {} * :{}", user, mode, realname)
            }
            Command::JOIN(channel) => write!(f, "JOIN {}", channel),
            Command::PRIVMSG(target, text) => write!(f, "PRIVMSG {} :{}", target, text),
            Command::PING(payload) => write!(f, "PING :{}", payload),
            Command::PONG(payload) => write!(f, "PONG :{}", payload),
            Command::QUIT(Some(text)) => write!(f, "QUIT :{}", text),
            Command::QUIT(None) => write!(f, "QUIT"),
            Command::Raw(verb, params) => {
                write!(f, "{}", verb)?;
                for (i, param) in params.iter().enumerate() {
                    let last = i + 1 == params.len();
                    if last && (param.is_empty() || param.contains(' ') || param.starts_with(':')) {
                        write!(f, " :{}", param)?;
                    } else {
                        write!(f, " {}", param)?;
                    }
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(Prefix::Server(name)) = &self.prefix {
            write!(f, ":{} ", name)?;
        } else if let Some(prefix) = &self.prefix {
            if let Some(nick) = prefix.nick() {
                write!(f, ":{} ", nick)?;
            }
        }
        write!(f, "{}\r\n", self.command)
    }
}
