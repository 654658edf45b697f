//! Error types for the protocol library.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Top-level protocol errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Line exceeded the maximum allowed length.
    ///
    /// An unterminated line that keeps growing is either a broken peer or a
    /// flood; the connection is not worth keeping in either case.
    #[error("line too long: {actual} bytes (limit: {limit})")]
    LineTooLong {
        /// Actual buffered length.
        actual: usize,
        /// Maximum allowed length.
        limit: usize,
    },

    /// Failed to parse an IRC message.
    #[error("invalid message: {string}")]
    InvalidMessage {
        /// The invalid message string.
        string: String,
        /// The underlying parse error.
        #[source]
        cause: MessageParseError,
    },
}

/// Errors encountered when parsing IRC messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// Message was empty.
    #[error("empty message")]
    EmptyMessage,

    /// Not enough arguments for command.
    #[error("not enough arguments for {command}: expected {expected}, got {got}")]
    NotEnoughArguments {
        /// The command name.
        command: &'static str,
        /// Expected number of arguments.
        expected: usize,
        /// Actual number of arguments.
        got: usize,
    },

    /// The line does not match the message grammar.
    #[error("parsing failed at position {position}")]
    ParseFailure {
        /// Character position where parsing failed.
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProtocolError::LineTooLong {
            actual: 20480,
            limit: 10240,
        };
        assert_eq!(
            format!("{}", err),
            "line too long: 20480 bytes (limit: 10240)"
        );

        let err = MessageParseError::NotEnoughArguments {
            command: "PRIVMSG",
            expected: 2,
            got: 1,
        };
        assert_eq!(
            format!("{}", err),
            "not enough arguments for PRIVMSG: expected 2, got 1"
        );
    }

    #[test]
    fn test_error_source_chaining() {
        let cause = MessageParseError::EmptyMessage;
        let err = ProtocolError::InvalidMessage {
            string: String::new(),
            cause: cause.clone(),
        };

        let source = std::error::Error::source(&err);
        assert!(source.is_some());
        assert_eq!(source.unwrap().to_string(), cause.to_string());
    }
}
