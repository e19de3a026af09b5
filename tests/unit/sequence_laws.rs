//! Property tests for sequence positions and excitation patterns.

use proptest::prelude::*;

use bipolar_stepper::{pattern_for, steps_for_one_rotation, DriveMode, SequencePosition};

fn drive_mode() -> impl Strategy<Value = DriveMode> {
    prop_oneof![
        Just(DriveMode::Wave),
        Just(DriveMode::FullStep),
        Just(DriveMode::HalfStep),
    ]
}

proptest! {
    /// A forward step followed by a reverse step returns to the start.
    #[test]
    fn forward_then_reverse_is_identity(p in 0u8..8) {
        let pos = SequencePosition::new(p);
        prop_assert_eq!(pos.forward().reverse(), pos);
        prop_assert_eq!(pos.reverse().forward(), pos);
    }

    /// Eight steps in either direction is a full lap.
    #[test]
    fn eight_steps_is_a_lap(p in 0u8..8, reverse in any::<bool>()) {
        let start = SequencePosition::new(p);
        let mut pos = start;
        for _ in 0..8 {
            if reverse { pos.retreat() } else { pos.advance() }
        }
        prop_assert_eq!(pos, start);
    }

    /// Any byte maps into the table.
    #[test]
    fn position_is_always_in_range(v in any::<u8>()) {
        prop_assert!(SequencePosition::new(v).value() < 8);
    }

    /// The pattern depends only on mode and position.
    #[test]
    fn pattern_is_a_pure_lookup(mode in drive_mode(), p in any::<u8>()) {
        let pos = SequencePosition::new(p);
        prop_assert_eq!(pattern_for(mode, pos), pattern_for(mode, pos));
        prop_assert_eq!(
            pattern_for(mode, pos),
            pattern_for(mode, SequencePosition::new(p % 8))
        );
    }

    /// Never more than two lines, never none.
    #[test]
    fn pattern_energizes_one_or_two_lines(mode in drive_mode(), p in 0u8..8) {
        let lines = pattern_for(mode, SequencePosition::new(p)).energized_lines();
        prop_assert!((1..=2).contains(&lines));
    }

    /// Only half-step doubles the step count.
    #[test]
    fn steps_for_rotation_scales_by_mode(w in any::<u16>()) {
        prop_assert_eq!(steps_for_one_rotation(DriveMode::Wave, w), u32::from(w));
        prop_assert_eq!(steps_for_one_rotation(DriveMode::FullStep, w), u32::from(w));
        prop_assert_eq!(steps_for_one_rotation(DriveMode::HalfStep, w), 2 * u32::from(w));
    }
}
