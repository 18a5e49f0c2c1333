//! Text command interface.
//!
//! Bytes from the serial console are assembled into lines by [`LineReader`],
//! parsed into a closed [`Command`] set, and executed against the
//! controller to produce a [`Response`].

mod dispatch;
mod line;
mod parser;
mod response;

pub use line::{CommandLineReader, LineEvent, LineReader};
pub use parser::{Command, MAX_COMMAND_LENGTH};
pub use response::{Response, StatusReport, HELP_TEXT};
