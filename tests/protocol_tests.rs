use connect_four::protocol::{decode, Command, DecodeError, Event};
use connect_four::Mark;

#[test]
fn test_decode_move() {
    assert_eq!(decode("MOVE 0:3"), Ok(Command::Move { row: 0, column: 3 }));
    assert_eq!(decode("MOVE 5:6"), Ok(Command::Move { row: 5, column: 6 }));
    // The row argument is carried but the server never trusts it; wild
    // values still decode.
    assert_eq!(
        decode("MOVE 99:-2"),
        Ok(Command::Move { row: 99, column: -2 })
    );
}

#[test]
fn test_decode_mouse_move() {
    assert_eq!(
        decode("MOUSE_MOVE 120:455"),
        Ok(Command::MouseMove { x: 120, y: 455 })
    );
    assert_eq!(
        decode("MOUSE_MOVE -5:-9"),
        Ok(Command::MouseMove { x: -5, y: -9 })
    );
}

#[test]
fn test_decode_quit() {
    assert_eq!(decode("QUIT"), Ok(Command::Quit));
    // Trailing junk after the verb is ignored, like the original's
    // prefix matching.
    assert_eq!(decode("QUIT now"), Ok(Command::Quit));
}

#[test]
fn test_decode_trims_carriage_return() {
    assert_eq!(
        decode("MOVE 0:3\r"),
        Ok(Command::Move { row: 0, column: 3 })
    );
}

#[test]
fn test_malformed_arguments_are_rejected_not_fatal() {
    assert_eq!(decode("MOVE"), Err(DecodeError::BadArguments));
    assert_eq!(decode("MOVE banana"), Err(DecodeError::BadArguments));
    assert_eq!(decode("MOVE 1-2"), Err(DecodeError::BadArguments));
    assert_eq!(decode("MOVE a:b"), Err(DecodeError::BadArguments));
    assert_eq!(decode("MOUSE_MOVE :"), Err(DecodeError::BadArguments));
    assert_eq!(decode("MOUSE_MOVE 1:"), Err(DecodeError::BadArguments));
}

#[test]
fn test_unknown_verbs_are_rejected() {
    assert_eq!(decode(""), Err(DecodeError::UnknownVerb));
    assert_eq!(decode("JUMP 1:2"), Err(DecodeError::UnknownVerb));
    // Verbs are case-sensitive, matching the original server.
    assert_eq!(decode("move 0:3"), Err(DecodeError::UnknownVerb));
}

#[test]
fn test_encode_events() {
    assert_eq!(Event::Welcome(Mark::Purple).to_string(), "WELCOME P");
    assert_eq!(Event::Welcome(Mark::Yellow).to_string(), "WELCOME Y");
    assert_eq!(
        Event::Message("Your move".into()).to_string(),
        "MESSAGE Your move"
    );
    assert_eq!(Event::ValidMove.to_string(), "VALID_MOVE");
    assert_eq!(
        Event::OpponentMoved { row: 5, column: 3 }.to_string(),
        "OPPONENT_MOVED 5:3"
    );
    assert_eq!(
        Event::OpponentMouse { x: 7, y: -1 }.to_string(),
        "OPPONENT_MOUSE 7:-1"
    );
    assert_eq!(Event::Victory.to_string(), "VICTORY");
    assert_eq!(Event::Defeat.to_string(), "DEFEAT");
    assert_eq!(Event::Tie.to_string(), "TIE");
    assert_eq!(
        Event::Disconnect("Your opponent disconnected.".into()).to_string(),
        "DISCONNECT Your opponent disconnected."
    );
}

#[test]
fn test_continue_is_the_empty_line() {
    // The reference client expects a blank continuation line after every
    // move notification while the match is still running.
    assert_eq!(Event::Continue.to_string(), "");
}
