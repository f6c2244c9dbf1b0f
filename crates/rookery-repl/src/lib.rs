//! Interactive console for two players sharing one terminal.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, Query, SessionOption, parse_command};
pub use error::ReplError;
pub use session::{Flow, Session, SessionConfig};
