//! The line protocol: one command or event per newline-terminated UTF-8
//! line. Decoding and encoding are stateless; connection handling lives in
//! the channel layer.

use crate::common::Mark;
use core::fmt;

/// Commands a client may send.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `MOVE <row>:<col>` — drop into `col`. The row argument is accepted
    /// but not authoritative; the server computes the resting row itself.
    Move { row: i32, column: i32 },
    /// `MOUSE_MOVE <x>:<y>` — cosmetic cursor relay, no bounds checking.
    MouseMove { x: i32, y: i32 },
    /// `QUIT` — voluntary disconnect.
    Quit,
}

/// Events the server sends. `Display` produces the exact wire line
/// (without the trailing newline).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Welcome(Mark),
    Message(String),
    ValidMove,
    OpponentMoved { row: usize, column: usize },
    OpponentMouse { x: i32, y: i32 },
    Victory,
    Defeat,
    Tie,
    /// The blank line sent after a move notification while the match is
    /// still in progress; the reference client reads it as "keep playing".
    Continue,
    Disconnect(String),
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Welcome(mark) => write!(f, "WELCOME {}", mark),
            Event::Message(text) => write!(f, "MESSAGE {}", text),
            Event::ValidMove => write!(f, "VALID_MOVE"),
            Event::OpponentMoved { row, column } => {
                write!(f, "OPPONENT_MOVED {}:{}", row, column)
            }
            Event::OpponentMouse { x, y } => write!(f, "OPPONENT_MOUSE {}:{}", x, y),
            Event::Victory => write!(f, "VICTORY"),
            Event::Defeat => write!(f, "DEFEAT"),
            Event::Tie => write!(f, "TIE"),
            Event::Continue => Ok(()),
            Event::Disconnect(text) => write!(f, "DISCONNECT {}", text),
        }
    }
}

/// Why an inbound line could not be decoded. Neither case closes the
/// connection; the channel answers with an error message and keeps
/// reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The first word is not a known verb.
    UnknownVerb,
    /// Known verb, but the arguments are missing or unparsable.
    BadArguments,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::UnknownVerb => write!(f, "unrecognized command"),
            DecodeError::BadArguments => write!(f, "malformed command arguments"),
        }
    }
}

/// Decode one inbound line into a command.
pub fn decode(line: &str) -> Result<Command, DecodeError> {
    let line = line.trim_end();
    let (verb, args) = match line.split_once(' ') {
        Some((verb, args)) => (verb, args),
        None => (line, ""),
    };
    match verb {
        "MOVE" => {
            let (row, column) = int_pair(args)?;
            Ok(Command::Move { row, column })
        }
        "MOUSE_MOVE" => {
            let (x, y) = int_pair(args)?;
            Ok(Command::MouseMove { x, y })
        }
        "QUIT" => Ok(Command::Quit),
        _ => Err(DecodeError::UnknownVerb),
    }
}

/// Parse the `<a>:<b>` argument pair shared by `MOVE` and `MOUSE_MOVE`.
fn int_pair(args: &str) -> Result<(i32, i32), DecodeError> {
    let (a, b) = args.split_once(':').ok_or(DecodeError::BadArguments)?;
    let a = a.trim().parse().map_err(|_| DecodeError::BadArguments)?;
    let b = b.trim().parse().map_err(|_| DecodeError::BadArguments)?;
    Ok((a, b))
}
