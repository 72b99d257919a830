//! Command-line front end for the SRK calculator.
//!
//! The binary in `main.rs` parses arguments; this library holds the pieces
//! that are worth testing without a terminal: text/JSON rendering and the
//! interactive menu loop.

pub mod error;
pub mod menu;
pub mod output;

pub use error::{CliError, CliResult};
pub use menu::Menu;
