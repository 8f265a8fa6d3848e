use crate::position::Key;

/// A key state change reported by the matrix scanner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyboardEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

impl KeyboardEvent {
    pub const fn key(row: u8, col: u8, pressed: bool) -> Self {
        Self { row, col, pressed }
    }

    /// Event for a named key
    pub const fn at(key: Key, pressed: bool) -> Self {
        let (row, col) = key.position();
        Self { row, col, pressed }
    }
}

/// The encoder direction is either `Clockwise` or `CounterClockwise`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// A clockwise turn
    Clockwise,
    /// A counterclockwise turn
    CounterClockwise,
}

/// One detent of a rotary encoder
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RotaryEncoderEvent {
    /// The index of the rotary encoder
    pub id: u8,
    pub direction: Direction,
}
