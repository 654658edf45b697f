//! Message prefix (origin) handling.
//!
//! The prefix identifies where a message came from: a server name or a
//! user's `nick!user@host` mask. The client only ever needs the nick, so
//! parsing is lenient and never fails.

/// The origin of an IRC message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Prefix {
    /// Server origin, e.g. `irc.example.net`.
    Server(String),
    /// User origin, from `nick!user@host`. User and host may be empty.
    User {
        /// Nickname.
        nick: String,
        /// Username (ident).
        user: String,
        /// Hostname.
        host: String,
    },
}

impl Prefix {
    /// Parse a prefix string (without the leading `:`).
    ///
    /// The nick is everything before the first `!` or `@`. A bare name
    /// containing a dot is taken to be a server origin.
    pub fn parse(s: &str) -> Self {
        let (name, rest) = match s.find(|c| c == '!' || c == '@') {
            Some(i) => (&s[..i], &s[i..]),
            None => (s, ""),
        };

        if rest.is_empty() {
            return if name.contains('.') {
                Prefix::Server(name.to_string())
            } else {
                Prefix::User {
                    nick: name.to_string(),
                    user: String::new(),
                    host: String::new(),
                }
            };
        }

        let (user, host) = match rest.strip_prefix('!') {
            Some(after_bang) => match after_bang.split_once('@') {
                Some((user, host)) => (user, host),
                None => (after_bang, ""),
            },
            // Starts with '@': no ident, just a host.
            None => ("", &rest[1..]),
        };

        Prefix::User {
            nick: name.to_string(),
            user: user.to_string(),
            host: host.to_string(),
        }
    }

    /// The nickname, if this is a user origin with a non-empty nick.
    pub fn nick(&self) -> Option<&str> {
        match self {
            Prefix::User { nick, .. } if !nick.is_empty() => Some(nick),
            _ => None,
        }
    }
}
