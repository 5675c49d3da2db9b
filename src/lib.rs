mod board;
mod channel;
mod common;
mod config;
mod director;
mod engine;
mod logging;
pub mod protocol;
pub mod transport;

pub use board::*;
pub use channel::{PlayerChannel, Seat};
pub use common::*;
pub use config::*;
pub use director::*;
pub use engine::*;
pub use logging::init_logging;
pub use protocol::{Command, DecodeError, Event};
