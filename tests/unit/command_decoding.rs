//! Unit tests for the single-byte command protocol.

use bipolar_stepper::{Command, CommandInterpreter, Direction, DriveMode, MotionState, USAGE};

/// Test that every command byte is listed in the usage text.
#[test]
fn test_usage_lists_every_command() {
    for command in Command::ALL {
        let line = format!("{}: ", command.byte() as char);
        assert!(USAGE.contains(&line), "missing {:?}", command);
    }
}

/// Test that exactly the eleven protocol bytes decode.
#[test]
fn test_only_protocol_bytes_decode() {
    let recognized: Vec<u8> = (0..=u8::MAX)
        .filter(|b| Command::from_byte(*b).is_some())
        .collect();
    assert_eq!(recognized, b"01234adpqsw".to_vec());
}

/// Test that upper-case letters are noise.
#[test]
fn test_commands_are_case_sensitive() {
    for byte in b"ASDQWP" {
        assert_eq!(Command::try_from(*byte), Err(*byte));
    }
}

/// Test decoding of the direction-carrying commands.
#[test]
fn test_direction_commands() {
    assert_eq!(
        Command::from_byte(b'2'),
        Some(Command::Run(Direction::Reverse))
    );
    assert_eq!(
        Command::from_byte(b'3'),
        Some(Command::SingleRotation(Direction::Forward))
    );
    assert_eq!(
        Command::from_byte(b's'),
        Some(Command::SelectDriveMode(DriveMode::FullStep))
    );
}

/// Test that a garbled stream only applies the recognized bytes.
#[test]
fn test_interleaved_noise() {
    let state = MotionState::default();
    let interp = CommandInterpreter::new(&state);

    let applied: Vec<Command> = b"\r\nx1 ?d\x004zz"
        .iter()
        .filter_map(|b| interp.handle(*b))
        .collect();

    assert_eq!(
        applied,
        vec![
            Command::Run(Direction::Forward),
            Command::SelectDriveMode(DriveMode::HalfStep),
            Command::SingleRotation(Direction::Reverse),
        ]
    );
    assert_eq!(state.direction(), Direction::Reverse);
    assert_eq!(state.remaining_steps(), 96);
}
