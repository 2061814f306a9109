//! Shell
//!
//! Line-oriented command language for driving a tolerance set, used by the
//! `tolvec-cli` binary.

mod command;
mod response;
mod session;

pub use command::{Command, ParseError};
pub use response::Response;
pub use session::Session;
