//! REPL errors.

use rookery_core::ChessError;

/// Errors that can occur while reading or running a command.
#[derive(Debug, thiserror::Error)]
pub enum ReplError {
    /// The engine rejected the command.
    #[error(transparent)]
    Chess(#[from] ChessError),

    /// The first word of the line is not a known command.
    #[error("unknown command: {command} (type \"help\" for a list)")]
    UnknownCommand {
        /// The unrecognized keyword.
        command: String,
    },

    /// A command was given without a required argument.
    #[error("{command} expects {expected}")]
    MissingArgument {
        /// The command keyword.
        command: &'static str,
        /// What should have followed it.
        expected: &'static str,
    },

    /// `set` was given an unknown option name or value.
    #[error("invalid option: {name} {value}")]
    InvalidOption {
        /// Option name as typed.
        name: String,
        /// Option value as typed.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
